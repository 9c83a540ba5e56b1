//! # Seedbridge Core
//!
//! The renderer's declarative project graph.
//!
//! A [`project::Project`] owns a [`scene::Scene`] and an output
//! [`project::Frame`]; the scene owns [`scene::Assembly`]s, which own
//! mesh objects, object instances, materials, lights and colors. Every
//! entity has a name unique among its siblings ([`entity::make_unique_name`])
//! and refers to other entities by name. The graph is built bottom-up and
//! then exported with [`writer`].

pub mod color;
pub mod entity;
pub mod error;
pub mod material;
pub mod math;
pub mod mesh;
pub mod params;
pub mod project;
pub mod scene;
pub mod texture;
pub mod writer;

pub use entity::{Entity, EntityContainer, make_unique_name};
pub use error::ProjectError;
pub use params::{ParamArray, ParamValue};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
