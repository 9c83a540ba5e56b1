use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use seedbridge_core::math::Vec3;
use seedbridge_translator::host::memory::{MemoryGeometry, MemoryMaterial, MemoryNode, MemoryObject};
use seedbridge_translator::host::{Face, OutputSize, SceneEntities, SceneNode, TriMesh};
use seedbridge_translator::{BuildRequest, DisneyMaterial, build_project};

/// A smooth `size` x `size` height field in one smoothing group.
fn terrain(size: u32) -> TriMesh {
    let row = size + 1;
    let mut mesh = TriMesh::new();
    for y in 0..=size {
        for x in 0..=size {
            let h = ((x as f32 * 0.3).sin() + (y as f32 * 0.2).cos()) * 0.5;
            mesh.verts.push(Vec3::new(x as f32, y as f32, h));
        }
    }
    for y in 0..size {
        for x in 0..size {
            let i = y * row + x;
            mesh.faces.push(Face::new([i, i + 1, i + row + 1], 1, 0));
            mesh.faces.push(Face::new([i, i + row + 1, i + row], 1, 0));
        }
    }
    mesh
}

// ---------------------------------------------------------------------------
// Mesh translation
// ---------------------------------------------------------------------------

fn bench_build_normals(c: &mut Criterion) {
    let mesh = terrain(64);
    c.bench_function("build_normals_terrain_64", |b| {
        b.iter(|| black_box(black_box(&mesh).build_normals()));
    });
}

fn bench_create_mesh_object(c: &mut Criterion) {
    let mesh = terrain(64);
    c.bench_function("create_mesh_object_terrain_64", |b| {
        b.iter(|| {
            seedbridge_translator::builder::create_mesh_object("terrain", black_box(&mesh))
                .map(|object| black_box(object.triangle_count()))
        });
    });
}

// ---------------------------------------------------------------------------
// Whole projects
// ---------------------------------------------------------------------------

fn bench_build_instanced_scene(c: &mut Criterion) {
    let object = MemoryObject::geometry(1, MemoryGeometry::Tri(terrain(16)));
    let material = Arc::new(MemoryMaterial::with_renderer(1, "Ground", DisneyMaterial::new()));
    let nodes: Vec<MemoryNode> = (0..256)
        .map(|i| MemoryNode::new(format!("Tile{i}"), object.clone()).with_material(Arc::clone(&material)))
        .collect();
    let roots: Vec<&dyn SceneNode> = nodes.iter().map(|n| n as &dyn SceneNode).collect();

    c.bench_function("build_project_256_instances", |b| {
        b.iter(|| {
            let request = BuildRequest::new(SceneEntities::collect(&roots, 0), OutputSize::new(640, 480));
            build_project(black_box(&request)).map(|built| black_box(built.diagnostics.len()))
        });
    });
}

criterion_group!(
    benches,
    bench_build_normals,
    bench_create_mesh_object,
    bench_build_instanced_scene
);
criterion_main!(benches);
