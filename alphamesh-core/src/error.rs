//! Error types for alphamesh

use thiserror::Error;

/// Main error type for alphamesh operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("Invalid data: {0}")]
    InvalidData(String),
    
    /// Internal bookkeeping reached a state that valid input cannot produce.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type alias for alphamesh operations
pub type Result<T> = std::result::Result<T, Error>;
