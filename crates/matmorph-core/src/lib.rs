//! matmorph-core - Matrix views for the matmorph image engine
//!
//! This crate provides the data model the morphological operators run on:
//!
//! - [`Pixel`] - The numeric pixel domain (`f32`, `f64`, `i32`, `u8`, `u16`)
//! - [`Matrix`] - A window over a shared, row-major buffer; regions alias
//!   the buffer instead of copying it
//! - [`MatrixView`] - A borrowed, `Copy` window used by scan loops
//! - In-place arithmetic: absolute difference, signed thresholding,
//!   negation and contrast stretching
//!
//! # Examples
//!
//! ```
//! use matmorph_core::{FloatMatrix, Matrix};
//!
//! let page: FloatMatrix = Matrix::from_fn(64, 48, |x, y| ((x ^ y) & 1) as f32);
//! let strip = page.region(0, 40, 64, 8).unwrap();
//! assert_eq!(strip.max(), 1.0);
//! assert_eq!(strip.min(), 0.0);
//! ```

pub mod error;
pub mod matrix;
pub mod pixel;
pub mod view;

pub use error::{Error, Result};
pub use matrix::{FloatMatrix, IntMatrix, Matrix};
pub use pixel::{INT_FULL_SCALE, Pixel};
pub use view::MatrixView;
