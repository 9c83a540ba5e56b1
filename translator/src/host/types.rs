//! Plain data exchanged with the host.

use seedbridge_core::color::Color3;
use seedbridge_core::math::Mat4d;

/// Identity of a host geometric object, shared by every node that
/// instances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// Identity of a host material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u64);

/// Host time in ticks.
pub type TimeValue = i32;

/// Host ticks per second.
pub const TICKS_PER_SECOND: TimeValue = 4800;

/// Host affine transform: three axis rows and a translation row, applied
/// to row vectors (`p' = p * M`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTm {
    rows: [[f32; 3]; 4],
}

impl AffineTm {
    pub const fn from_rows(rows: [[f32; 3]; 4]) -> Self {
        Self { rows }
    }

    pub const fn identity() -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
        ])
    }

    /// The all-zero matrix. Hosts use it to mean "no transform given".
    pub const fn zero() -> Self {
        Self::from_rows([[0.0; 3]; 4])
    }

    pub fn from_translation(x: f32, y: f32, z: f32) -> Self {
        let mut tm = Self::identity();
        tm.rows[3] = [x, y, z];
        tm
    }

    pub fn rows(&self) -> &[[f32; 3]; 4] {
        &self.rows
    }

    pub fn is_zero(&self) -> bool {
        self.rows.iter().flatten().all(|&v| v == 0.0)
    }

    /// The equivalent column-vector 4x4 matrix.
    pub fn to_matrix4d(&self) -> Mat4d {
        let mut m = Mat4d::identity();
        for (row_index, row) in self.rows.iter().enumerate() {
            for (col_index, &value) in row.iter().enumerate() {
                m[(col_index, row_index)] = f64::from(value);
            }
        }
        m
    }
}

impl Default for AffineTm {
    fn default() -> Self {
        Self::identity()
    }
}

/// Viewport projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Perspective,
    Parallel,
}

/// Parameters of the view being rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    pub projection: Projection,
    /// Horizontal field of view in radians (perspective only).
    pub fov: f32,
    /// Viewport zoom (parallel only).
    pub zoom: f32,
    /// Near clip distance.
    pub hither: f32,
    /// Far clip distance.
    pub yon: f32,
    /// World to camera transform.
    pub affine_tm: AffineTm,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            projection: Projection::Perspective,
            fov: std::f32::consts::FRAC_PI_4,
            zoom: 1.0,
            hither: 0.1,
            yon: 1000.0,
            affine_tm: AffineTm::identity(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RendParams {
    /// The render is a material editor preview.
    pub in_mtl_edit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameRendParams {
    /// Background color in linear RGB.
    pub background: Color3,
}

/// Size of the output bitmap in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
}

impl OutputSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both sides are non-zero and fit in an `i32`.
    pub fn is_valid(&self) -> bool {
        let fits = |side: u32| side > 0 && i32::try_from(side).is_ok();
        fits(self.width) && fits(self.height)
    }

    /// Width and height as project integers, saturating at `i32::MAX`.
    pub fn as_i32_pair(&self) -> [i32; 2] {
        let side = |side: u32| i32::try_from(side).unwrap_or(i32::MAX);
        [side(self.width), side(self.height)]
    }

    /// Height over width. Not finite for a zero width.
    pub fn aspect(&self) -> f32 {
        self.height as f32 / self.width as f32
    }
}

/// Kind of a host default light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultLightKind {
    Omni,
    Spot,
    Directional,
    Ambient,
}

/// A light the host supplies when the scene has no lights of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultLight {
    /// Placement; the all-zero matrix means "unspecified".
    pub tm: AffineTm,
    pub kind: DefaultLightKind,
    pub color: Color3,
    pub intensity: f32,
    /// Spot hotspot angle in degrees.
    pub hotspot: f32,
    /// Spot falloff angle in degrees.
    pub falloff: f32,
}

impl DefaultLight {
    pub fn new(kind: DefaultLightKind, color: Color3, intensity: f32) -> Self {
        Self {
            tm: AffineTm::zero(),
            kind,
            color,
            intensity,
            hotspot: 43.0,
            falloff: 45.0,
        }
    }

    #[must_use]
    pub fn with_tm(mut self, tm: AffineTm) -> Self {
        self.tm = tm;
        self
    }

    #[must_use]
    pub fn with_cone(mut self, hotspot: f32, falloff: f32) -> Self {
        self.hotspot = hotspot;
        self.falloff = falloff;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_lands_in_last_column() {
        let m = AffineTm::from_translation(1.0, 2.0, 3.0).to_matrix4d();
        assert_eq!(m[(0, 3)], 1.0);
        assert_eq!(m[(1, 3)], 2.0);
        assert_eq!(m[(2, 3)], 3.0);
        assert_eq!(m[(3, 3)], 1.0);
    }

    #[test]
    fn axis_rows_become_columns() {
        let tm = AffineTm::from_rows([
            [0.0, 1.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
        ]);
        let m = tm.to_matrix4d();
        // Host x axis maps to world +y.
        assert_eq!(m[(1, 0)], 1.0);
        assert_eq!(m[(0, 1)], -1.0);
    }

    #[test]
    fn output_size_bounds() {
        assert!(OutputSize::new(640, 480).is_valid());
        assert!(!OutputSize::new(0, 480).is_valid());
        assert!(!OutputSize::new(640, 0).is_valid());
        assert!(!OutputSize::new(u32::MAX, 480).is_valid());
        assert_eq!(OutputSize::new(u32::MAX, 480).as_i32_pair(), [i32::MAX, 480]);
    }

    #[test]
    fn zero_sentinel() {
        assert!(AffineTm::zero().is_zero());
        assert!(!AffineTm::identity().is_zero());
    }
}
