//! Error types for I/O operations

use thiserror::Error;

/// Errors that can occur while loading textures or writing meshes
#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Core(#[from] alphamesh_core::Error),
}

/// Result type for I/O operations
pub type Result<T> = std::result::Result<T, IoError>;
