//! Host triangle and polygon meshes, and smoothing-group normals.

use seedbridge_core::math::{Vec2, Vec3, normalize_or_zero};

/// A host triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Face {
    pub v: [u32; 3],
    /// Smoothing groups this face belongs to, one bit per group.
    pub sm_group: u32,
    pub mat_id: u16,
}

impl Face {
    pub fn new(v: [u32; 3], sm_group: u32, mat_id: u16) -> Self {
        Self { v, sm_group, mat_id }
    }
}

/// A host triangle mesh.
///
/// `tv_faces`, when not empty, has one entry per face indexing `tverts`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriMesh {
    pub verts: Vec<Vec3>,
    pub faces: Vec<Face>,
    pub tverts: Vec<Vec2>,
    pub tv_faces: Vec<[u32; 3]>,
}

impl TriMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that faces index existing vertices and that texture faces
    /// match the faces.
    pub fn validate(&self) -> Result<(), String> {
        for (i, face) in self.faces.iter().enumerate() {
            if let Some(&v) = face.v.iter().find(|&&v| v as usize >= self.verts.len()) {
                return Err(format!(
                    "face {i} refers to vertex {v} of {}",
                    self.verts.len()
                ));
            }
        }
        if !self.tv_faces.is_empty() && self.tv_faces.len() != self.faces.len() {
            return Err(format!(
                "{} texture faces for {} faces",
                self.tv_faces.len(),
                self.faces.len()
            ));
        }
        Ok(())
    }

    /// Texture vertex indices of face `face`, zero when the mesh has no
    /// texture faces.
    pub fn tv_face(&self, face: usize) -> [u32; 3] {
        self.tv_faces.get(face).copied().unwrap_or([0, 0, 0])
    }

    /// Unit geometric normal of face `face`; zero for degenerate faces.
    ///
    /// # Panics
    ///
    /// Panics if `face` is out of range or the face references a missing
    /// vertex. [`TriMesh::validate`] rules out the latter.
    pub fn face_normal(&self, face: usize) -> Vec3 {
        let [a, b, c] = self.faces[face].v.map(|v| self.verts[v as usize]);
        normalize_or_zero((b - a).cross(&(c - a)))
    }

    /// Compute per-vertex render normals.
    ///
    /// Faces in smoothing group 0 contribute nothing. Any other face adds
    /// its normal to the vertex normal whose groups overlap its own and
    /// whose material matches, or starts a new one. Normals at a vertex
    /// whose groups end up overlapping are merged.
    ///
    /// # Panics
    ///
    /// Panics if a face references a missing vertex. Call
    /// [`TriMesh::validate`] first on untrusted meshes.
    pub fn build_normals(&self) -> MeshNormals {
        let mut vertices: Vec<Vec<RenderNormal>> = vec![Vec::new(); self.verts.len()];

        for (i, face) in self.faces.iter().enumerate() {
            if face.sm_group == 0 {
                continue;
            }
            let n = self.face_normal(i);
            for &v in &face.v {
                let normals = &mut vertices[v as usize];
                match normals.iter_mut().find(|rn| rn.accepts(face)) {
                    Some(rn) => {
                        rn.normal += n;
                        rn.sm_group |= face.sm_group;
                    }
                    None => normals.push(RenderNormal {
                        normal: n,
                        sm_group: face.sm_group,
                        mat_id: face.mat_id,
                    }),
                }
            }
        }

        for normals in &mut vertices {
            merge_overlapping(normals);
            for rn in normals.iter_mut() {
                rn.normal = normalize_or_zero(rn.normal);
            }
        }

        MeshNormals { vertices }
    }
}

fn merge_overlapping(normals: &mut Vec<RenderNormal>) {
    'restart: loop {
        for i in 0..normals.len() {
            for j in (i + 1)..normals.len() {
                if normals[i].sm_group & normals[j].sm_group != 0
                    && normals[i].mat_id == normals[j].mat_id
                {
                    let other = normals.remove(j);
                    normals[i].normal += other.normal;
                    normals[i].sm_group |= other.sm_group;
                    continue 'restart;
                }
            }
        }
        break;
    }
}

/// A vertex normal shared by the faces of some smoothing groups and one
/// material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderNormal {
    pub normal: Vec3,
    pub sm_group: u32,
    pub mat_id: u16,
}

impl RenderNormal {
    /// Whether `face` shades with this normal.
    pub fn accepts(&self, face: &Face) -> bool {
        self.sm_group & face.sm_group != 0 && self.mat_id == face.mat_id
    }
}

/// Render normals of every vertex of a mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshNormals {
    vertices: Vec<Vec<RenderNormal>>,
}

impl MeshNormals {
    /// Normals at vertex `v`.
    pub fn vertex(&self, v: u32) -> &[RenderNormal] {
        self.vertices
            .get(v as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A host polygon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolyFace {
    pub v: Vec<u32>,
    /// Per-corner texture vertex indices; empty when untextured.
    pub tv: Vec<u32>,
    pub sm_group: u32,
    pub mat_id: u16,
}

/// A host polygon mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyMesh {
    pub verts: Vec<Vec3>,
    pub faces: Vec<PolyFace>,
    pub tverts: Vec<Vec2>,
}

impl PolyMesh {
    /// Fan-triangulate into a triangle mesh.
    ///
    /// Polygons with fewer than three corners are dropped. Texture faces
    /// are emitted when the mesh has texture vertices; polygons without
    /// texture indices then use texture vertex 0.
    pub fn to_tri_mesh(&self) -> TriMesh {
        let textured = !self.tverts.is_empty();
        let mut mesh = TriMesh {
            verts: self.verts.clone(),
            faces: Vec::new(),
            tverts: self.tverts.clone(),
            tv_faces: Vec::new(),
        };
        for poly in &self.faces {
            if poly.v.len() < 3 {
                continue;
            }
            for k in 1..poly.v.len() - 1 {
                mesh.faces.push(Face::new(
                    [poly.v[0], poly.v[k], poly.v[k + 1]],
                    poly.sm_group,
                    poly.mat_id,
                ));
                if textured {
                    let tv = |i: usize| poly.tv.get(i).copied().unwrap_or(0);
                    mesh.tv_faces.push([tv(0), tv(k), tv(k + 1)]);
                }
            }
        }
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two triangles folded 90 degrees along the shared edge (0, 1).
    fn folded(sm_a: u32, sm_b: u32) -> TriMesh {
        TriMesh {
            verts: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, -1.0),
            ],
            faces: vec![Face::new([0, 1, 2], sm_a, 0), Face::new([0, 1, 3], sm_b, 0)],
            ..Default::default()
        }
    }

    #[test]
    fn face_normal_is_unit() {
        let mesh = folded(0, 0);
        assert!((mesh.face_normal(0) - Vec3::z()).norm() < 1e-6);
        assert!((mesh.face_normal(1) - Vec3::y()).norm() < 1e-6);
    }

    #[test]
    fn degenerate_face_normal_is_zero() {
        let mesh = TriMesh {
            verts: vec![Vec3::zeros(), Vec3::x(), Vec3::x() * 2.0],
            faces: vec![Face::new([0, 1, 2], 1, 0)],
            ..Default::default()
        };
        assert_eq!(mesh.face_normal(0), Vec3::zeros());
    }

    #[test]
    fn out_of_range_vertex_fails_validation() {
        let mut mesh = folded(1, 1);
        mesh.faces[1].v[2] = 9;
        assert!(mesh.validate().is_err());
    }

    #[test]
    #[should_panic]
    fn unvalidated_out_of_range_vertex_panics() {
        let mut mesh = folded(1, 1);
        mesh.faces[1].v[2] = 9;
        mesh.build_normals();
    }

    #[test]
    fn shared_group_shares_normal() {
        let normals = folded(1, 1).build_normals();
        let at_0 = normals.vertex(0);
        assert_eq!(at_0.len(), 1);
        let expected = normalize_or_zero(Vec3::z() + Vec3::y());
        assert!((at_0[0].normal - expected).norm() < 1e-6);
    }

    #[test]
    fn disjoint_groups_split_normal() {
        let normals = folded(1, 2).build_normals();
        assert_eq!(normals.vertex(0).len(), 2);
        assert_eq!(normals.vertex(2).len(), 1);
    }

    #[test]
    fn material_boundary_splits_normal() {
        let mut mesh = folded(1, 1);
        mesh.faces[1].mat_id = 3;
        assert_eq!(mesh.build_normals().vertex(1).len(), 2);
    }

    #[test]
    fn group_zero_contributes_nothing() {
        let normals = folded(0, 0).build_normals();
        assert!(normals.vertex(0).is_empty());
    }

    #[test]
    fn bridging_face_merges_groups() {
        // Faces in groups 1 and 2 meet at vertex 0; a third face in 1|2
        // bridges them into a single normal.
        let mesh = TriMesh {
            verts: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
                Vec3::new(0.0, -1.0, 0.0),
            ],
            faces: vec![
                Face::new([0, 1, 2], 0b01, 0),
                Face::new([0, 3, 4], 0b10, 0),
                Face::new([0, 2, 3], 0b11, 0),
            ],
            ..Default::default()
        };
        assert_eq!(mesh.build_normals().vertex(0).len(), 1);
    }

    #[test]
    fn validate_catches_bad_indices() {
        let mut mesh = folded(1, 1);
        assert!(mesh.validate().is_ok());
        mesh.tv_faces = vec![[0, 0, 0]];
        assert!(mesh.validate().is_err());
        mesh.tv_faces.clear();
        mesh.faces[0].v[2] = 9;
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn fan_triangulation() {
        let quad = PolyMesh {
            verts: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            faces: vec![
                PolyFace {
                    v: vec![0, 1, 2, 3],
                    tv: vec![0, 1, 2, 3],
                    sm_group: 1,
                    mat_id: 2,
                },
                PolyFace {
                    v: vec![0, 1],
                    ..Default::default()
                },
            ],
            tverts: vec![Vec2::zeros(); 4],
        };
        let tri = quad.to_tri_mesh();
        assert_eq!(tri.faces.len(), 2);
        assert_eq!(tri.faces[0].v, [0, 1, 2]);
        assert_eq!(tri.faces[1].v, [0, 2, 3]);
        assert_eq!(tri.faces[1].mat_id, 2);
        assert_eq!(tri.tv_faces, vec![[0, 1, 2], [0, 2, 3]]);
        assert!(tri.validate().is_ok());
    }
}
