//! The renderer scene graph.
//!
//! Ownership is a strict tree: a [`Scene`] owns assemblies, assembly
//! instances, camera, environment and environment entities; an
//! [`Assembly`] owns objects, object instances, materials, lights and
//! colors. Entities refer to each other by name, and those names are
//! checked on insertion.

mod assembly;
mod camera;
mod color;
mod environment;
mod graph;
mod light;
mod object;

pub use assembly::Assembly;
pub use camera::{Camera, CameraModel};
pub use color::{BaseGroup, ColorEntity, insert_color};
pub use environment::{Environment, EnvironmentEdf, EnvironmentShader};
pub use graph::{AssemblyInstance, Scene};
pub use light::{Light, LightModel};
pub use object::{MaterialMappings, ObjectInstance};
