//! Error types for matmorph-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] matmorph_core::Error),

    /// Neighborhood or kernel does not fit strictly inside the image
    #[error(
        "invalid neighborhood {width}x{height} for {image_width}x{image_height} image: \
         each side must be > 0 and smaller than the image"
    )]
    InvalidNeighborhood {
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    /// Invalid structuring element
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Invalid sequence format
    #[error("invalid sequence: {0}")]
    InvalidSequence(String),

    /// Operation the sequence interpreter does not know
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
