//! Interfaces to the host application's scene.
//!
//! The translator reads the host through these traits only. Evaluation
//! is read-only and happens at one fixed time per build.
//!
//! - [`SceneNode`] - A node: transform, evaluated object, material
//! - [`GeometricObject`] - Geometry convertible to a [`TriMesh`]
//! - [`LightObject`] - A host light and its [`LightClass`]
//! - [`HostMaterial`] / [`RendererMaterial`] - Materials, optionally able
//!   to build their renderer counterpart
//! - [`memory`] - In-memory implementations for headless use

mod entities;
pub mod memory;
mod mesh;
mod types;

pub use entities::SceneEntities;
pub use mesh::{Face, MeshNormals, PolyFace, PolyMesh, RenderNormal, TriMesh};
pub use types::{
    AffineTm, DefaultLight, DefaultLightKind, FrameRendParams, MaterialId, ObjectId, OutputSize,
    Projection, RendParams, TICKS_PER_SECOND, TimeValue, ViewParams,
};

use std::borrow::Cow;
use std::fmt;

use seedbridge_core::ProjectError;
use seedbridge_core::color::Color3;
use seedbridge_core::material::Material;
use seedbridge_core::scene::Assembly;

/// The result of evaluating a node's object at a time.
#[derive(Clone, Copy)]
pub enum ObjectState<'a> {
    Geometry(&'a dyn GeometricObject),
    Light(&'a dyn LightObject),
    /// Cameras, helpers, shapes and anything else that is not rendered.
    Other,
}

impl fmt::Debug for ObjectState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(_) => f.write_str("Geometry"),
            Self::Light(light) => write!(f, "Light({:?})", light.class()),
            Self::Other => f.write_str("Other"),
        }
    }
}

/// A node of the host scene graph.
pub trait SceneNode {
    fn name(&self) -> &str;

    /// Identity of the geometric object this node references. Nodes that
    /// instance the same geometry return the same id.
    fn object_id(&self) -> ObjectId;

    /// Evaluate the node's object, with all modifiers applied.
    fn eval_world_state(&self, time: TimeValue) -> ObjectState<'_>;

    /// Object to world transform, after space warps.
    fn obj_tm_after_wsm(&self, time: TimeValue) -> AffineTm;

    fn material(&self) -> Option<&dyn HostMaterial>;

    /// Display color used when no material is assigned, linear RGB.
    fn wire_color(&self) -> Color3;

    fn is_hidden(&self) -> bool;

    fn children(&self) -> Vec<&dyn SceneNode>;
}

/// Host geometry.
pub trait GeometricObject {
    /// The object as a triangle mesh at `time`.
    ///
    /// Returns a borrowed mesh when the object already is one and an owned
    /// temporary when it had to be converted; `None` when it cannot be
    /// converted at all.
    fn to_tri_mesh(&self, time: TimeValue) -> Option<Cow<'_, TriMesh>>;
}

/// Host light classes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LightClass {
    Omni,
    Spot,
    TargetSpot,
    Directional,
    TargetDirectional,
    /// Any other class, by name.
    Other(String),
}

/// Renderer-side light kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightKind {
    Omni,
    Spot,
    Directional,
}

impl LightClass {
    /// The renderer light kind, or `None` for unsupported classes.
    pub fn kind(&self) -> Option<LightKind> {
        match self {
            Self::Omni => Some(LightKind::Omni),
            Self::Spot | Self::TargetSpot => Some(LightKind::Spot),
            Self::Directional | Self::TargetDirectional => Some(LightKind::Directional),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for LightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Omni => f.write_str("omni"),
            Self::Spot => f.write_str("free spot"),
            Self::TargetSpot => f.write_str("target spot"),
            Self::Directional => f.write_str("free directional"),
            Self::TargetDirectional => f.write_str("target directional"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// A host light.
pub trait LightObject {
    fn class(&self) -> LightClass;
    /// Light color, linear RGB.
    fn rgb_color(&self, time: TimeValue) -> Color3;
    fn intensity(&self, time: TimeValue) -> f32;
    fn decay_radius(&self, time: TimeValue) -> f32;
    /// 0 = none, 1 = inverse, 2 = inverse square.
    fn decay_type(&self) -> i32;
    /// Spot hotspot angle in degrees.
    fn hotspot(&self, time: TimeValue) -> f32;
    /// Spot falloff angle in degrees.
    fn falloff(&self, time: TimeValue) -> f32;
}

/// A host material.
pub trait HostMaterial {
    fn id(&self) -> MaterialId;
    fn name(&self) -> &str;
    /// The renderer capability, when this material can build itself.
    fn renderer_material(&self) -> Option<&dyn RendererMaterial>;
}

/// A material that knows how to build its renderer counterpart.
pub trait RendererMaterial {
    /// Build the material named `name`. Textures it needs are inserted
    /// into `assembly`; the material itself is returned for the caller to
    /// insert.
    fn create_material(&self, assembly: &mut Assembly, name: &str)
    -> Result<Material, ProjectError>;
}
