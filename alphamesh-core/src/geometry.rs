//! Integer grid geometry: edges and axis-aligned rectangles

use crate::point::GridVertex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An undirected segment between two grid vertices.
///
/// Endpoints are stored in canonical order (ascending `x`, then `y`), so the
/// same segment produces the same key no matter which rectangle derived it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    a: GridVertex,
    b: GridVertex,
}

impl Edge {
    /// Create an edge, swapping the endpoints into canonical order
    pub fn new(p: GridVertex, q: GridVertex) -> Self {
        if q < p {
            Self { a: q, b: p }
        } else {
            Self { a: p, b: q }
        }
    }

    /// The lesser endpoint
    pub fn start(&self) -> GridVertex {
        self.a
    }

    /// The greater endpoint
    pub fn end(&self) -> GridVertex {
        self.b
    }

    pub fn is_horizontal(&self) -> bool {
        self.a.y == self.b.y
    }

    pub fn is_vertical(&self) -> bool {
        self.a.x == self.b.x
    }

    /// Manhattan length; edges produced by rectangles are axis-aligned
    pub fn length(&self) -> u32 {
        (self.b.x - self.a.x) + self.b.y.abs_diff(self.a.y)
    }
}

/// An axis-aligned rectangle on the pixel grid.
///
/// Covers the half-open region `[min_x, max_x) x [min_y, max_y)`. The `y` axis
/// follows pixel rows, so the top edge lies at `min_y` and the bottom edge at `max_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Rect {
    /// Create a rectangle from its bounds
    pub const fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Create a square with its top-left corner at `(x, y)`
    pub const fn square(x: u32, y: u32, side: u32) -> Self {
        Self::new(x, y, x + side, y + side)
    }

    pub fn width(&self) -> u32 {
        self.max_x.saturating_sub(self.min_x)
    }

    pub fn height(&self) -> u32 {
        self.max_y.saturating_sub(self.min_y)
    }

    /// Number of pixels covered
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// True when the rectangle has positive extent on both axes
    pub fn is_valid(&self) -> bool {
        self.min_x < self.max_x && self.min_y < self.max_y
    }

    /// True when the pixel `(x, y)` lies inside the half-open region
    pub fn contains_pixel(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// The four corners in mesh order: (min,min), (max,min), (min,max), (max,max)
    pub fn corners(&self) -> [GridVertex; 4] {
        [
            GridVertex::new(self.min_x, self.min_y),
            GridVertex::new(self.max_x, self.min_y),
            GridVertex::new(self.min_x, self.max_y),
            GridVertex::new(self.max_x, self.max_y),
        ]
    }

    pub fn top(&self) -> Edge {
        Edge::new(
            GridVertex::new(self.min_x, self.min_y),
            GridVertex::new(self.max_x, self.min_y),
        )
    }

    pub fn left(&self) -> Edge {
        Edge::new(
            GridVertex::new(self.min_x, self.min_y),
            GridVertex::new(self.min_x, self.max_y),
        )
    }

    pub fn right(&self) -> Edge {
        Edge::new(
            GridVertex::new(self.max_x, self.min_y),
            GridVertex::new(self.max_x, self.max_y),
        )
    }

    pub fn bottom(&self) -> Edge {
        Edge::new(
            GridVertex::new(self.min_x, self.max_y),
            GridVertex::new(self.max_x, self.max_y),
        )
    }

    /// All four edges in the order top, left, right, bottom
    pub fn edges(&self) -> [Edge; 4] {
        [self.top(), self.left(), self.right(), self.bottom()]
    }

    /// Split at the integer midpoint into top-left, top-right, bottom-left
    /// and bottom-right quadrants.
    ///
    /// A side of length 1 yields zero-width (or zero-height) quadrants; those
    /// contain no pixels.
    pub fn quadrants(&self) -> [Rect; 4] {
        let mid_x = (self.min_x + self.max_x) >> 1;
        let mid_y = (self.min_y + self.max_y) >> 1;
        [
            Rect::new(self.min_x, self.min_y, mid_x, mid_y),
            Rect::new(mid_x, self.min_y, self.max_x, mid_y),
            Rect::new(self.min_x, mid_y, mid_x, self.max_y),
            Rect::new(mid_x, mid_y, self.max_x, self.max_y),
        ]
    }

    /// Smallest rectangle containing both `self` and `other`
    pub fn bounding_union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
