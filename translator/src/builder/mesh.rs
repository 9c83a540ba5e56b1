//! Host triangle mesh to renderer mesh object.

use seedbridge_core::ProjectError;
use seedbridge_core::mesh::{MeshObject, Triangle};

use crate::host::TriMesh;

/// Name of the single material slot of translated meshes.
pub const MATERIAL_SLOT: &str = "material";

/// Translate `mesh` into a mesh object named `name`.
///
/// Vertices and texture vertices are copied index for index. Every face
/// becomes one triangle. Faces outside any smoothing group are shaded
/// flat with a single face normal; other faces take, per corner, the
/// vertex normal shared with the faces of the same smoothing groups and
/// material.
pub fn create_mesh_object(name: &str, mesh: &TriMesh) -> Result<MeshObject, ProjectError> {
    mesh.validate().map_err(|reason| ProjectError::InvalidMesh {
        object: name.to_string(),
        reason,
    })?;

    let normals = mesh.build_normals();
    let mut object = MeshObject::builder(name);
    let material_slot = object.push_material_slot(MATERIAL_SLOT);

    object.reserve_vertices(mesh.verts.len());
    for &v in &mesh.verts {
        object.push_vertex(v);
    }

    object.reserve_tex_coords(mesh.tverts.len());
    for &uv in &mesh.tverts {
        object.push_tex_coords(uv);
    }

    object.reserve_vertex_normals(mesh.faces.len() * 3);
    object.reserve_triangles(mesh.faces.len());
    for (i, face) in mesh.faces.iter().enumerate() {
        let n = if face.sm_group == 0 {
            let index = object.push_vertex_normal(mesh.face_normal(i));
            [index; 3]
        } else {
            face.v.map(|v| {
                let candidates = normals.vertex(v);
                let normal = match candidates {
                    [single] => Some(single.normal),
                    _ => candidates
                        .iter()
                        .find(|rn| rn.accepts(face))
                        .map(|rn| rn.normal),
                };
                object.push_vertex_normal(normal.unwrap_or_else(|| mesh.face_normal(i)))
            })
        };

        object.push_triangle(Triangle::new(face.v, n, mesh.tv_face(i), material_slot));
    }

    object.build()
}
