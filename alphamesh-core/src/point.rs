//! Point types and related functionality

use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 2D point with floating point coordinates
pub type Point2f = Point2<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A texture coordinate pair `[u, v]`
pub type Uv = [f32; 2];

/// A vertex on the integer pixel grid.
///
/// Grid vertices sit on pixel corners, so an image of `w x h` pixels has
/// vertices in `0..=w` by `0..=h`. Ordering is by `x`, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct GridVertex {
    pub x: u32,
    pub y: u32,
}

impl GridVertex {
    /// Create a new grid vertex
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Scale into a floating point position on the z = 0 plane
    pub fn to_point(self, scale: f32) -> Point3f {
        Point3f::new(self.x as f32 * scale, self.y as f32 * scale, 0.0)
    }
}

impl From<(u32, u32)> for GridVertex {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}
