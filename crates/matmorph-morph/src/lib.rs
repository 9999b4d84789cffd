//! matmorph-morph - Grayscale morphology over matmorph matrices
//!
//! This crate provides:
//!
//! - Structuring elements ([`Shape`]) with predefined cross, diamond, X and
//!   square shapes
//! - Dilation and erosion with flat rectangles or shapes, clamped at the
//!   image border
//! - Opening, closing, morphological gradient, white hat and black hat
//! - Multi-scale feature highlighting
//! - Morphological sequences for chaining operations from a string
//!
//! Every operator is generic over [`matmorph_core::Pixel`] and returns a
//! new matrix of the input's size. Thresholds come from [`MorphOptions`],
//! which defaults to the pixel domain's bounds.
//!
//! With the `parallel` feature, output rows are computed on the rayon
//! thread pool.
//!
//! # Examples
//!
//! ```
//! use matmorph_core::Matrix;
//! use matmorph_morph::{Shape, black_hat, erode_shape};
//!
//! let mut m = Matrix::new_with_value(9, 9, 200u8).unwrap();
//! m.set_pixel(4, 4, 20).unwrap();
//!
//! let hat = black_hat(&m, 3, 3).unwrap();
//! assert_eq!(hat.get_pixel(4, 4).unwrap(), 180);
//!
//! let eroded = erode_shape(&m, &Shape::cross_3x3()).unwrap();
//! assert_eq!(eroded.get_pixel(4, 3).unwrap(), 20);
//! assert_eq!(eroded.get_pixel(3, 3).unwrap(), 200);
//! ```

pub mod brick;
pub mod composite;
mod error;
pub mod highlight;
pub mod options;
mod scan;
pub mod sequence;
pub mod shape;
pub mod shaped;
mod window;

pub use error::{MorphError, MorphResult};
pub use options::{MorphOptions, Neighborhood};
pub use shape::{MAX_PREDEFINED_SIZE, Shape, ShapeKind};

pub use brick::{dilate, dilate_with, erode, erode_with};
pub use shaped::{dilate_shape, dilate_shape_with, erode_shape, erode_shape_with};

pub use composite::{
    black_hat, black_hat_shape, black_hat_with, close, close_shape, close_with, dilate_by,
    erode_by, gradient, gradient_shape, gradient_with, open, open_shape, open_with, white_hat,
    white_hat_shape, white_hat_with,
};

pub use highlight::{
    highlight_features, highlight_features_3x3, highlight_features_5x5, highlight_features_7x7,
};

pub use sequence::{MorphOp, MorphSequence, apply_op, morph_sequence, morph_sequence_with};
