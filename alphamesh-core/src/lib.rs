//! Core data structures and traits for alphamesh
//! 
//! This crate provides the fundamental types shared by the contour pipeline:
//! integer grid geometry (vertices, edges, rectangles), pixel sources,
//! the output mesh buffers, and the common error type.

pub mod point;
pub mod geometry;
pub mod alpha_grid;
pub mod mesh;
pub mod traits;
pub mod error;

pub use point::*;
pub use geometry::*;
pub use alpha_grid::*;
pub use mesh::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3, Vector3};
