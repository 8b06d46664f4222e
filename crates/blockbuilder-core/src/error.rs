//! Error types shared by the BlockBuilder crates.

use thiserror::Error;

/// Editor-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid data error
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// No pick surface of the requested kind
    #[error("Not found: {0}")]
    NotFound(String),

    /// Lattice coordinate or linear index outside the grid
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    /// Drag corners captured out of order
    #[error("Invalid drag state: {0}")]
    InvalidDragState(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
