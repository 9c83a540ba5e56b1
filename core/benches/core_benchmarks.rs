use criterion::{Criterion, black_box, criterion_group, criterion_main};

use seedbridge_core::color::{Color3, linear_rgb_to_srgb};
use seedbridge_core::make_unique_name;
use seedbridge_core::math::{Vec2, Vec3};
use seedbridge_core::mesh::{MeshObject, MeshObjectBuilder, Triangle};
use seedbridge_core::scene::{Assembly, BaseGroup, insert_color};
use seedbridge_core::writer::mesh_to_obj;

fn grid_mesh(size: u32) -> MeshObject {
    let mut b = MeshObjectBuilder::new("grid");
    b.push_material_slot("material");
    let n = b.push_vertex_normal(Vec3::z());
    for y in 0..=size {
        for x in 0..=size {
            b.push_vertex(Vec3::new(x as f32, y as f32, 0.0));
            b.push_tex_coords(Vec2::new(x as f32 / size as f32, y as f32 / size as f32));
        }
    }
    let row = size + 1;
    for y in 0..size {
        for x in 0..size {
            let i = y * row + x;
            b.push_triangle(Triangle::new([i, i + 1, i + row + 1], [n; 3], [i, i + 1, i + row + 1], 0));
            b.push_triangle(Triangle::new([i, i + row + 1, i + row], [n; 3], [i, i + row + 1, i + row], 0));
        }
    }
    b.build().unwrap()
}

// ---------------------------------------------------------------------------
// Mesh objects
// ---------------------------------------------------------------------------

fn bench_build_grid_mesh(c: &mut Criterion) {
    c.bench_function("mesh_builder_grid_64", |b| {
        b.iter(|| grid_mesh(black_box(64)));
    });
}

fn bench_mesh_to_obj(c: &mut Criterion) {
    let mesh = grid_mesh(64);
    c.bench_function("mesh_to_obj_grid_64", |b| {
        b.iter(|| black_box(mesh_to_obj(black_box(&mesh))));
    });
}

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

fn bench_make_unique_name_collisions(c: &mut Criterion) {
    let mut assembly = Assembly::new("assembly");
    for _ in 0..100 {
        insert_color(&mut assembly, "color", Color3::WHITE).unwrap();
    }
    let colors = assembly.colors();
    c.bench_function("make_unique_name_100_collisions", |b| {
        b.iter(|| black_box(make_unique_name(colors, black_box("color"))));
    });
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

fn bench_linear_to_srgb(c: &mut Criterion) {
    c.bench_function("linear_rgb_to_srgb", |b| {
        b.iter(|| linear_rgb_to_srgb(black_box(Color3::new(0.2, 0.5, 0.8))));
    });
}

criterion_group!(
    benches,
    bench_build_grid_mesh,
    bench_mesh_to_obj,
    bench_make_unique_name_collisions,
    bench_linear_to_srgb,
);
criterion_main!(benches);
