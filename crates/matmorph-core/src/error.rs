//! Error types for matmorph-core
//!
//! Every fallible operation in the core crate reports through [`Error`].
//! Geometry is validated when a matrix or view is created, so the variants
//! below only ever surface from constructors, region extraction and the
//! element-wise operations that pair two matrices.

use thiserror::Error;

/// Matmorph core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero
    #[error("invalid matrix dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Element index out of bounds
    #[error("index out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Requested region is not fully contained in the source view
    #[error("region {w}x{h}+{x}+{y} exceeds {width}x{height}")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        width: u32,
        height: u32,
    },

    /// Two matrices that must agree in size do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for matmorph core operations
pub type Result<T> = std::result::Result<T, Error>;
