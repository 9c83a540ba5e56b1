//! Math type aliases, transforms and transform sequences.
//!
//! Geometry uses f32 types. Entity placement uses f64 matrices so that
//! chains of inverses (camera transforms) keep their precision.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 3D vector (f64).
pub type Vec3d = nalgebra::Vector3<f64>;

/// 4x4 matrix (f64), column-vector convention.
pub type Mat4d = nalgebra::Matrix4<f64>;

/// An affine placement expressed as a local-to-parent matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    local_to_parent: Mat4d,
}

impl Transform {
    /// The identity placement.
    pub fn identity() -> Self {
        Self {
            local_to_parent: Mat4d::identity(),
        }
    }

    /// Build a transform from a local-to-parent matrix.
    pub fn from_local_to_parent(local_to_parent: Mat4d) -> Self {
        Self { local_to_parent }
    }

    /// The local-to-parent matrix.
    pub fn local_to_parent(&self) -> &Mat4d {
        &self.local_to_parent
    }

    /// The parent-to-local matrix, or `None` if the transform is singular.
    pub fn parent_to_local(&self) -> Option<Mat4d> {
        self.local_to_parent.try_inverse()
    }

    /// Whether this is exactly the identity.
    pub fn is_identity(&self) -> bool {
        self.local_to_parent == Mat4d::identity()
    }

    /// The translation part of the transform.
    pub fn translation(&self) -> Vec3d {
        let m = &self.local_to_parent;
        Vec3d::new(m[(0, 3)], m[(1, 3)], m[(2, 3)])
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Time-keyed transforms, kept sorted by time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformSequence {
    keys: Vec<(f64, Transform)>,
}

impl TransformSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Set the transform at `time`, replacing any key at the same time.
    pub fn set_transform(&mut self, time: f64, transform: Transform) {
        match self.keys.iter().position(|(t, _)| *t >= time) {
            Some(i) if self.keys[i].0 == time => self.keys[i].1 = transform,
            Some(i) => self.keys.insert(i, (time, transform)),
            None => self.keys.push((time, transform)),
        }
    }

    /// Get the transform keyed exactly at `time`.
    pub fn get_transform(&self, time: f64) -> Option<&Transform> {
        self.keys.iter().find(|(t, _)| *t == time).map(|(_, x)| x)
    }

    /// Iterate over `(time, transform)` keys in increasing time order.
    pub fn iter(&self) -> impl Iterator<Item = &(f64, Transform)> {
        self.keys.iter()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the sequence has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Convert a 4x4 matrix to a row-major `[[f64; 4]; 4]` array.
pub fn mat4d_to_rows_array(m: &Mat4d) -> [[f64; 4]; 4] {
    let mut rows = [[0.0; 4]; 4];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, value) in row.iter_mut().enumerate() {
            *value = m[(r, c)];
        }
    }
    rows
}

/// Build a translation-only 4x4 matrix.
pub fn mat4d_from_translation(t: Vec3d) -> Mat4d {
    Mat4d::new_translation(&t)
}

/// Normalize `v`, returning the zero vector for degenerate input.
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    v.try_normalize(0.0).unwrap_or_else(Vec3::zeros)
}
