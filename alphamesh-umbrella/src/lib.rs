//! # alphamesh
//!
//! Quadtree contour meshing of image alpha channels.
//!
//! This is the umbrella crate that provides convenient access to all alphamesh
//! functionality. Use the individual crates for more granular control over
//! dependencies.
//!
//! ## Features
//!
//! - **Core**: Grid geometry, pixel sources and mesh buffers
//! - **Contour**: Quadtree division, region merging and mesh assembly
//! - **I/O**: Image-backed pixel sources, texture assets and OBJ export
//!
//! ## Quick Start
//!
//! ```rust
//! use alphamesh::prelude::*;
//!
//! let mut grid = AlphaGrid::new(4, 4);
//! grid.fill_rect(Rect::new(0, 0, 2, 2), 1.0);
//!
//! let contour = QuadtreeContour::new(ContourConfig::with_params(2, 0.5, true));
//! let mesh = contour.build(&grid).unwrap();
//! assert_eq!(mesh.face_count(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables contour and io
//! - `contour`: Contour generation
//! - `io`: Image loading and OBJ export
//! - `all`: Enables all features

// Re-export core functionality
pub use alphamesh_core::*;

#[cfg(feature = "contour")]
pub use alphamesh_contour as contour;

#[cfg(feature = "io")]
pub use alphamesh_io as io;

/// Convenient imports for common use cases
pub mod prelude {
    pub use alphamesh_core::*;

    #[cfg(feature = "contour")]
    pub use alphamesh_contour::*;

    #[cfg(feature = "io")]
    pub use alphamesh_io::{
        write_obj_file, ImageAlpha, IoError, ObjWriteOptions, ObjWriter, ReadableTexture,
        TextureAsset,
    };
}
