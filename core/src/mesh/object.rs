//! Mesh objects and their incremental builder.

use crate::entity::Entity;
use crate::error::ProjectError;
use crate::math::{Vec2, Vec3};
use crate::params::ParamArray;

/// A triangle of a mesh object.
///
/// `v`, `n` and `a` are per-corner indices into the vertex, normal and
/// texture coordinate arrays. `pa` is the material slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triangle {
    pub v: [u32; 3],
    pub n: [u32; 3],
    pub a: [u32; 3],
    pub pa: u32,
}

impl Triangle {
    /// Creates a triangle from its corner indices and material slot.
    pub fn new(v: [u32; 3], n: [u32; 3], a: [u32; 3], pa: u32) -> Self {
        Self { v, n, a, pa }
    }
}

/// An immutable triangle mesh object.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshObject {
    name: String,
    params: ParamArray,
    material_slots: Vec<String>,
    vertices: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    vertex_normals: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl MeshObject {
    /// Start building a mesh object named `name`.
    pub fn builder(name: impl Into<String>) -> MeshObjectBuilder {
        MeshObjectBuilder::new(name)
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    pub fn material_slots(&self) -> &[String] {
        &self.material_slots
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    pub fn vertex_normals(&self) -> &[Vec3] {
        &self.vertex_normals
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh declares a material slot named `slot`.
    pub fn has_material_slot(&self, slot: &str) -> bool {
        self.material_slots.iter().any(|s| s == slot)
    }
}

impl Entity for MeshObject {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Accumulates the arrays of a mesh object.
///
/// Every `push_*` method returns the index of the pushed element. Indices
/// are stable and increase monotonically, so triangles can refer to
/// elements pushed earlier.
#[derive(Debug, Clone)]
pub struct MeshObjectBuilder {
    name: String,
    params: ParamArray,
    material_slots: Vec<String>,
    vertices: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    vertex_normals: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl MeshObjectBuilder {
    /// Creates an empty builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: ParamArray::new(),
            material_slots: Vec::new(),
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            vertex_normals: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Set the object's parameters.
    #[must_use]
    pub fn with_params(mut self, params: ParamArray) -> Self {
        self.params = params;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reserve_vertices(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }

    pub fn reserve_tex_coords(&mut self, additional: usize) {
        self.tex_coords.reserve(additional);
    }

    pub fn reserve_vertex_normals(&mut self, additional: usize) {
        self.vertex_normals.reserve(additional);
    }

    pub fn reserve_triangles(&mut self, additional: usize) {
        self.triangles.reserve(additional);
    }

    pub fn push_material_slot(&mut self, slot: impl Into<String>) -> u32 {
        self.material_slots.push(slot.into());
        (self.material_slots.len() - 1) as u32
    }

    pub fn push_vertex(&mut self, vertex: Vec3) -> u32 {
        self.vertices.push(vertex);
        (self.vertices.len() - 1) as u32
    }

    pub fn push_tex_coords(&mut self, uv: Vec2) -> u32 {
        self.tex_coords.push(uv);
        (self.tex_coords.len() - 1) as u32
    }

    pub fn push_vertex_normal(&mut self, normal: Vec3) -> u32 {
        self.vertex_normals.push(normal);
        (self.vertex_normals.len() - 1) as u32
    }

    pub fn push_triangle(&mut self, triangle: Triangle) -> u32 {
        self.triangles.push(triangle);
        (self.triangles.len() - 1) as u32
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex_normal_count(&self) -> usize {
        self.vertex_normals.len()
    }

    /// Finalize the mesh.
    ///
    /// Fails if a triangle refers to a vertex, normal, texture coordinate
    /// or material slot that was never pushed. Texture coordinate indices
    /// are only checked when the mesh has texture coordinates.
    pub fn build(self) -> Result<MeshObject, ProjectError> {
        let invalid = |reason: String| ProjectError::InvalidMesh {
            object: self.name.clone(),
            reason,
        };

        for (i, tri) in self.triangles.iter().enumerate() {
            if let Some(&v) = tri.v.iter().find(|&&v| v as usize >= self.vertices.len()) {
                return Err(invalid(format!(
                    "triangle {i} refers to vertex {v} of {}",
                    self.vertices.len()
                )));
            }
            if let Some(&n) = tri
                .n
                .iter()
                .find(|&&n| n as usize >= self.vertex_normals.len())
            {
                return Err(invalid(format!(
                    "triangle {i} refers to normal {n} of {}",
                    self.vertex_normals.len()
                )));
            }
            if !self.tex_coords.is_empty() {
                if let Some(&a) = tri.a.iter().find(|&&a| a as usize >= self.tex_coords.len()) {
                    return Err(invalid(format!(
                        "triangle {i} refers to texture coordinate {a} of {}",
                        self.tex_coords.len()
                    )));
                }
            }
            if tri.pa as usize >= self.material_slots.len() {
                return Err(invalid(format!(
                    "triangle {i} refers to material slot {} of {}",
                    tri.pa,
                    self.material_slots.len()
                )));
            }
        }

        Ok(MeshObject {
            name: self.name,
            params: self.params,
            material_slots: self.material_slots,
            vertices: self.vertices,
            tex_coords: self.tex_coords,
            vertex_normals: self.vertex_normals,
            triangles: self.triangles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> MeshObjectBuilder {
        let mut b = MeshObjectBuilder::new("tri");
        b.push_material_slot("material");
        b.push_vertex(Vec3::new(0.0, 0.0, 0.0));
        b.push_vertex(Vec3::new(1.0, 0.0, 0.0));
        b.push_vertex(Vec3::new(0.0, 1.0, 0.0));
        b.push_vertex_normal(Vec3::z());
        b
    }

    #[test]
    fn push_returns_increasing_indices() {
        let mut b = MeshObjectBuilder::new("m");
        assert_eq!(b.push_vertex(Vec3::zeros()), 0);
        assert_eq!(b.push_vertex(Vec3::zeros()), 1);
        assert_eq!(b.push_vertex_normal(Vec3::z()), 0);
        assert_eq!(b.push_material_slot("material"), 0);
    }

    #[test]
    fn build_valid_triangle() {
        let mut b = single_triangle();
        b.push_triangle(Triangle::new([0, 1, 2], [0, 0, 0], [0, 0, 0], 0));
        let mesh = b.build().unwrap();
        assert_eq!(mesh.name(), "tri");
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.has_material_slot("material"));
        assert!(mesh.tex_coords().is_empty());
    }

    #[test]
    fn build_rejects_out_of_range_vertex() {
        let mut b = single_triangle();
        b.push_triangle(Triangle::new([0, 1, 3], [0, 0, 0], [0, 0, 0], 0));
        let err = b.build().unwrap_err();
        assert!(matches!(err, ProjectError::InvalidMesh { ref object, .. } if object == "tri"));
    }

    #[test]
    fn build_rejects_out_of_range_normal_and_slot() {
        let mut b = single_triangle();
        b.push_triangle(Triangle::new([0, 1, 2], [0, 1, 0], [0, 0, 0], 0));
        assert!(b.build().is_err());

        let mut b = single_triangle();
        b.push_triangle(Triangle::new([0, 1, 2], [0, 0, 0], [0, 0, 0], 1));
        assert!(b.build().is_err());
    }

    #[test]
    fn tex_coord_indices_checked_only_when_present() {
        let mut b = single_triangle();
        b.push_triangle(Triangle::new([0, 1, 2], [0, 0, 0], [5, 5, 5], 0));
        assert!(b.build().is_ok());

        let mut b = single_triangle();
        b.push_tex_coords(Vec2::new(0.0, 0.0));
        b.push_triangle(Triangle::new([0, 1, 2], [0, 0, 0], [0, 0, 1], 0));
        assert!(b.build().is_err());
    }
}
