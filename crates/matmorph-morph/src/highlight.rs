//! Feature highlighting
//!
//! Two directional closings are compared:
//!
//! ```text
//! i1 = erode(dilate(M, cross_k), diamond_k)
//! i2 = erode(dilate(M, x_k), k x k)
//! out = threshold(|i1 - i2|, t)
//! ```
//!
//! Line-like and corner-like structures respond differently to the `+` and
//! `X` dilations, so their difference marks them. The sign of `t` picks the
//! polarity (see [`Matrix::threshold`]).

use crate::brick::erode_with;
use crate::options::MorphOptions;
use crate::shape::{Shape, ShapeKind};
use crate::shaped::{dilate_shape_with, erode_shape_with};
use crate::{MorphError, MorphResult};
use log::debug;
use matmorph_core::{Matrix, Pixel};

/// Highlight features at a `size x size` scale.
///
/// # Errors
///
/// Returns [`MorphError::InvalidShape`] unless `size` is odd and
/// [`MorphError::InvalidNeighborhood`] unless it is smaller than the
/// image.
pub fn highlight_features<T: Pixel>(
    m: &Matrix<T>,
    size: u32,
    threshold: T,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    if size % 2 == 0 {
        return Err(MorphError::InvalidShape(format!(
            "highlight size must be odd, got {}",
            size
        )));
    }
    let (image_width, image_height) = m.dimensions();
    if size >= image_width || size >= image_height {
        debug!(
            "rejecting highlight scale {} for {}x{} image",
            size, image_width, image_height
        );
        return Err(MorphError::InvalidNeighborhood {
            width: size,
            height: size,
            image_width,
            image_height,
        });
    }
    debug!(
        "highlight features {}x{} at scale {}",
        m.width(),
        m.height(),
        size
    );
    let cross = Shape::predefined(ShapeKind::Cross, size)?;
    let diamond = Shape::predefined(ShapeKind::Diamond, size)?;
    let x = Shape::predefined(ShapeKind::X, size)?;

    let mut first = erode_shape_with(&dilate_shape_with(m, &cross, options)?, &diamond, options)?;
    let second = erode_with(&dilate_shape_with(m, &x, options)?, size, size, options)?;

    first.absolute_difference(&second)?;
    first.threshold(threshold);
    Ok(first)
}

/// Highlight features at 3x3 scale with default thresholds.
pub fn highlight_features_3x3<T: Pixel>(m: &Matrix<T>, threshold: T) -> MorphResult<Matrix<T>> {
    highlight_features(m, 3, threshold, &MorphOptions::default())
}

/// Highlight features at 5x5 scale with default thresholds.
pub fn highlight_features_5x5<T: Pixel>(m: &Matrix<T>, threshold: T) -> MorphResult<Matrix<T>> {
    highlight_features(m, 5, threshold, &MorphOptions::default())
}

/// Highlight features at 7x7 scale with default thresholds.
pub fn highlight_features_7x7<T: Pixel>(m: &Matrix<T>, threshold: T) -> MorphResult<Matrix<T>> {
    highlight_features(m, 7, threshold, &MorphOptions::default())
}
