//! # alphamesh-contour
//!
//! Converts the alpha channel of an image into a compact triangle mesh that
//! covers its opaque silhouette.
//!
//! The pipeline has three stages:
//! - [`divide`]: tiles the image into squares and recursively subdivides each
//!   square as a quadtree, keeping the regions whose pixels reach the alpha
//!   threshold
//! - [`merge`]: optionally coalesces rectangles that share a full edge
//! - [`assemble`]: turns the rectangles into deduplicated vertex, UV and
//!   index buffers
//!
//! [`QuadtreeContour`] runs all three with a [`ContourConfig`].

pub mod divide;
pub mod merge;
pub mod assemble;
pub mod pipeline;

// Re-export commonly used items
pub use divide::*;
pub use merge::*;
pub use assemble::*;
pub use pipeline::*;
