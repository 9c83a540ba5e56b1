//! Triangle mesh objects.
//!
//! - [`MeshObjectBuilder`] - Accumulates vertices, normals, texture
//!   coordinates and triangles with stable indices
//! - [`MeshObject`] - The finalized, immutable mesh
//! - [`Triangle`] - Per-corner indices plus a material slot

mod object;

pub use object::{MeshObject, MeshObjectBuilder, Triangle};
