//! matmorph - Matrix views and grayscale morphology
//!
//! # Overview
//!
//! matmorph takes a 2-D numeric matrix (float or integer pixels), lets the
//! caller cut zero-copy regions out of it, and runs morphological
//! transforms on those regions:
//!
//! - Matrix windows over shared buffers with copy-on-write writes
//! - Dilation and erosion with flat rectangles or structuring elements
//! - Opening, closing, gradient, white hat and black hat
//! - Feature highlighting at 3x3, 5x5 and 7x7 scales
//! - In-place absolute difference, signed threshold, negate and contrast
//!
//! # Example
//!
//! ```
//! use matmorph::Matrix;
//! use matmorph::morph::{Shape, highlight_features_5x5, open_shape};
//!
//! let page = Matrix::from_fn(120, 80, |x, y| if (x / 4 + y / 4) % 2 == 0 { 0.9f32 } else { 0.1 });
//! let strip = page.region(0, 56, 120, 24).unwrap();
//!
//! let opened = open_shape(&strip, &Shape::diamond_5x5()).unwrap();
//! assert_eq!(opened.dimensions(), (120, 24));
//!
//! let features = highlight_features_5x5(&strip, 0.2).unwrap();
//! assert!(features.iter().all(|v| v == 0.0 || v == 1.0));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use matmorph_core::*;

// Re-export the operator crate as a module to keep its names apart
pub use matmorph_morph as morph;
