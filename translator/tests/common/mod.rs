//! Shared fixtures for project build tests.

#![allow(dead_code)]

use std::sync::Arc;

use seedbridge_core::color::Color3;
use seedbridge_core::math::Vec3;
use seedbridge_core::scene::Assembly;
use seedbridge_translator::host::memory::{
    MemoryGeometry, MemoryLight, MemoryMaterial, MemoryNode, MemoryObject,
};
use seedbridge_translator::host::{
    DefaultLight, DefaultLightKind, Face, LightClass, OutputSize, SceneEntities, SceneNode,
    TriMesh,
};
use seedbridge_translator::{BuildRequest, BuiltProject, DisneyMaterial, build_project};

pub const OUTPUT: OutputSize = OutputSize::new(320, 240);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Unit cube. Each side is its own smoothing group.
pub fn cube_mesh() -> TriMesh {
    let verts = (0..8)
        .map(|i| {
            Vec3::new(
                (i & 1) as f32,
                ((i >> 1) & 1) as f32,
                ((i >> 2) & 1) as f32,
            )
        })
        .collect();
    let sides: [[u32; 4]; 6] = [
        [0, 2, 3, 1],
        [4, 5, 7, 6],
        [0, 1, 5, 4],
        [2, 6, 7, 3],
        [0, 4, 6, 2],
        [1, 3, 7, 5],
    ];
    let faces = sides
        .iter()
        .enumerate()
        .flat_map(|(side, &[a, b, c, d])| {
            let group = 1 << side;
            [Face::new([a, b, c], group, 0), Face::new([a, c, d], group, 0)]
        })
        .collect();
    TriMesh {
        verts,
        faces,
        ..Default::default()
    }
}

pub fn cube_object(id: u64) -> MemoryObject {
    MemoryObject::geometry(id, MemoryGeometry::Tri(cube_mesh()))
}

pub fn disney_material(id: u64, name: &str) -> Arc<MemoryMaterial> {
    Arc::new(MemoryMaterial::with_renderer(id, name, DisneyMaterial::new()))
}

pub fn omni_node(name: &str) -> MemoryNode {
    MemoryNode::new(name, MemoryObject::light(100, MemoryLight::new(LightClass::Omni)))
}

pub fn default_omni() -> DefaultLight {
    DefaultLight::new(DefaultLightKind::Omni, Color3::WHITE, 1.0)
}

/// Build the scene under `roots`, letting `configure` adjust the request.
pub fn build_with(
    roots: &[MemoryNode],
    configure: impl FnOnce(BuildRequest<'_>) -> BuildRequest<'_>,
) -> BuiltProject {
    init_logging();
    let roots: Vec<&dyn SceneNode> = roots.iter().map(|n| n as &dyn SceneNode).collect();
    let request = configure(BuildRequest::new(SceneEntities::collect(&roots, 0), OUTPUT));
    build_project(&request).expect("project build failed")
}

pub fn build(roots: &[MemoryNode]) -> BuiltProject {
    build_with(roots, |request| request)
}

pub fn assembly(built: &BuiltProject) -> &Assembly {
    built
        .project
        .scene()
        .and_then(|scene| scene.assemblies().get_by_name("assembly"))
        .expect("project has no assembly")
}
