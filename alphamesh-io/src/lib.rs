//! I/O for alphamesh
//!
//! This crate connects the contour pipeline to the outside world: pixel
//! sources backed by decoded images, scoped readable access to encoded
//! texture assets, and Wavefront OBJ export of the generated mesh.

pub mod error;
pub mod image_source;
pub mod obj;
pub mod texture;

pub use error::{IoError, Result};
pub use image_source::ImageAlpha;
pub use obj::{write_obj_file, ObjWriteOptions, ObjWriter};
pub use texture::{ReadableTexture, TextureAsset};
