//! In-memory host scene.
//!
//! Used to drive the translator without a host application: headless
//! translation, tests and benchmarks. Geometry, lights and materials are
//! shared between nodes through `Arc`, so several nodes can instance the
//! same object.

use std::borrow::Cow;
use std::sync::Arc;

use seedbridge_core::color::Color3;

use super::{
    AffineTm, GeometricObject, HostMaterial, LightClass, LightObject, MaterialId, ObjectId,
    ObjectState, PolyMesh, RendererMaterial, SceneNode, TimeValue, TriMesh,
};

/// In-memory geometry.
#[derive(Debug, Clone)]
pub enum MemoryGeometry {
    /// Already a triangle mesh.
    Tri(TriMesh),
    /// Polygons, triangulated on demand.
    Poly(PolyMesh),
    /// Geometry with no triangle representation (e.g. a particle system).
    Unconvertible,
}

impl GeometricObject for MemoryGeometry {
    fn to_tri_mesh(&self, _time: TimeValue) -> Option<Cow<'_, TriMesh>> {
        match self {
            Self::Tri(mesh) => Some(Cow::Borrowed(mesh)),
            Self::Poly(poly) => Some(Cow::Owned(poly.to_tri_mesh())),
            Self::Unconvertible => None,
        }
    }
}

/// In-memory light with constant parameters.
#[derive(Debug, Clone)]
pub struct MemoryLight {
    class: LightClass,
    color: Color3,
    intensity: f32,
    decay_radius: f32,
    decay_type: i32,
    hotspot: f32,
    falloff: f32,
}

impl MemoryLight {
    pub fn new(class: LightClass) -> Self {
        Self {
            class,
            color: Color3::WHITE,
            intensity: 1.0,
            decay_radius: 40.0,
            decay_type: 0,
            hotspot: 43.0,
            falloff: 45.0,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color3) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    #[must_use]
    pub fn with_decay(mut self, radius: f32, decay_type: i32) -> Self {
        self.decay_radius = radius;
        self.decay_type = decay_type;
        self
    }

    #[must_use]
    pub fn with_cone(mut self, hotspot: f32, falloff: f32) -> Self {
        self.hotspot = hotspot;
        self.falloff = falloff;
        self
    }
}

impl LightObject for MemoryLight {
    fn class(&self) -> LightClass {
        self.class.clone()
    }

    fn rgb_color(&self, _time: TimeValue) -> Color3 {
        self.color
    }

    fn intensity(&self, _time: TimeValue) -> f32 {
        self.intensity
    }

    fn decay_radius(&self, _time: TimeValue) -> f32 {
        self.decay_radius
    }

    fn decay_type(&self) -> i32 {
        self.decay_type
    }

    fn hotspot(&self, _time: TimeValue) -> f32 {
        self.hotspot
    }

    fn falloff(&self, _time: TimeValue) -> f32 {
        self.falloff
    }
}

/// In-memory material, with an optional renderer capability.
pub struct MemoryMaterial {
    id: MaterialId,
    name: String,
    renderer: Option<Box<dyn RendererMaterial>>,
}

impl MemoryMaterial {
    /// A material the renderer does not understand.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: MaterialId(id),
            name: name.into(),
            renderer: None,
        }
    }

    /// A material that builds its renderer counterpart with `renderer`.
    pub fn with_renderer(
        id: u64,
        name: impl Into<String>,
        renderer: impl RendererMaterial + 'static,
    ) -> Self {
        Self {
            id: MaterialId(id),
            name: name.into(),
            renderer: Some(Box::new(renderer)),
        }
    }
}

impl HostMaterial for MemoryMaterial {
    fn id(&self) -> MaterialId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn renderer_material(&self) -> Option<&dyn RendererMaterial> {
        self.renderer.as_deref()
    }
}

#[derive(Debug, Clone)]
enum Content {
    Geometry(Arc<MemoryGeometry>),
    Light(Arc<MemoryLight>),
    Empty,
}

/// An object referenced by nodes. Clones share identity and content.
#[derive(Debug, Clone)]
pub struct MemoryObject {
    id: ObjectId,
    content: Content,
}

impl MemoryObject {
    pub fn geometry(id: u64, geometry: MemoryGeometry) -> Self {
        Self {
            id: ObjectId(id),
            content: Content::Geometry(Arc::new(geometry)),
        }
    }

    pub fn light(id: u64, light: MemoryLight) -> Self {
        Self {
            id: ObjectId(id),
            content: Content::Light(Arc::new(light)),
        }
    }

    /// No object (a grouping node). Uses the reserved id 0.
    pub fn none() -> Self {
        Self {
            id: ObjectId(0),
            content: Content::Empty,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }
}

/// In-memory scene node.
pub struct MemoryNode {
    name: String,
    object: MemoryObject,
    tm: AffineTm,
    material: Option<Arc<MemoryMaterial>>,
    wire_color: Color3,
    hidden: bool,
    children: Vec<MemoryNode>,
}

impl MemoryNode {
    pub fn new(name: impl Into<String>, object: MemoryObject) -> Self {
        Self {
            name: name.into(),
            object,
            tm: AffineTm::identity(),
            material: None,
            wire_color: Color3::gray(0.5),
            hidden: false,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tm(mut self, tm: AffineTm) -> Self {
        self.tm = tm;
        self
    }

    #[must_use]
    pub fn with_material(mut self, material: Arc<MemoryMaterial>) -> Self {
        self.material = Some(material);
        self
    }

    #[must_use]
    pub fn with_wire_color(mut self, color: Color3) -> Self {
        self.wire_color = color;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: MemoryNode) -> Self {
        self.children.push(child);
        self
    }
}

impl SceneNode for MemoryNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn object_id(&self) -> ObjectId {
        self.object.id
    }

    fn eval_world_state(&self, _time: TimeValue) -> ObjectState<'_> {
        match &self.object.content {
            Content::Geometry(geometry) => ObjectState::Geometry(geometry.as_ref()),
            Content::Light(light) => ObjectState::Light(light.as_ref()),
            Content::Empty => ObjectState::Other,
        }
    }

    fn obj_tm_after_wsm(&self, _time: TimeValue) -> AffineTm {
        self.tm
    }

    fn material(&self) -> Option<&dyn HostMaterial> {
        self.material
            .as_deref()
            .map(|m| m as &dyn HostMaterial)
    }

    fn wire_color(&self) -> Color3 {
        self.wire_color
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn children(&self) -> Vec<&dyn SceneNode> {
        self.children.iter().map(|c| c as &dyn SceneNode).collect()
    }
}
