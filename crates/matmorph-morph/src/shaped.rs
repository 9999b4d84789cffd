//! Dilation and erosion with a structuring element
//!
//! The shape's anchor lines up with the output pixel, so the neighborhood
//! spans `anchor` positions before it and `size - anchor - 1` after it on
//! each axis. A second window over the mask is clamped together with the
//! data window: when the image border cuts the neighborhood, the mask is
//! cut by the same amount on the same side and the two stay aligned.
//!
//! A pixel whose clamped neighborhood holds no set mask position keeps its
//! input value.

use crate::options::MorphOptions;
use crate::scan::{clamp_span, scan_rows};
use crate::shape::Shape;
use crate::window::Window;
use crate::{MorphError, MorphResult};
use log::debug;
use matmorph_core::{Matrix, Pixel};

/// Dilate with a structuring element and default thresholds.
///
/// # Errors
///
/// Returns [`MorphError::InvalidNeighborhood`] unless the shape is
/// strictly smaller than the image in both axes.
pub fn dilate_shape<T: Pixel>(m: &Matrix<T>, shape: &Shape) -> MorphResult<Matrix<T>> {
    dilate_shape_with(m, shape, &MorphOptions::default())
}

/// Dilate with a structuring element.
///
/// # Errors
///
/// Returns [`MorphError::InvalidNeighborhood`] unless the shape is
/// strictly smaller than the image in both axes.
pub fn dilate_shape_with<T: Pixel>(
    m: &Matrix<T>,
    shape: &Shape,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    check_shape(m, shape)?;
    debug!(
        "dilate {}x{} with shape {}",
        m.width(),
        m.height(),
        shape.name().unwrap_or("<unnamed>")
    );
    let ceiling = options.max_threshold;
    shaped_scan(m, shape, |data, mask| {
        data.max_masked(mask).map(|v| v.min_of(ceiling))
    })
}

/// Erode with a structuring element and default thresholds.
///
/// # Errors
///
/// Returns [`MorphError::InvalidNeighborhood`] unless the shape is
/// strictly smaller than the image in both axes.
pub fn erode_shape<T: Pixel>(m: &Matrix<T>, shape: &Shape) -> MorphResult<Matrix<T>> {
    erode_shape_with(m, shape, &MorphOptions::default())
}

/// Erode with a structuring element.
///
/// # Errors
///
/// Returns [`MorphError::InvalidNeighborhood`] unless the shape is
/// strictly smaller than the image in both axes.
pub fn erode_shape_with<T: Pixel>(
    m: &Matrix<T>,
    shape: &Shape,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    check_shape(m, shape)?;
    debug!(
        "erode {}x{} with shape {}",
        m.width(),
        m.height(),
        shape.name().unwrap_or("<unnamed>")
    );
    let floor = options.min_threshold;
    shaped_scan(m, shape, |data, mask| {
        data.min_masked(mask).map(|v| v.max_of(floor))
    })
}

fn check_shape<T: Copy>(m: &Matrix<T>, shape: &Shape) -> MorphResult<()> {
    let (image_width, image_height) = m.dimensions();
    if shape.width() >= image_width || shape.height() >= image_height {
        debug!(
            "rejecting {}x{} shape for {}x{} image",
            shape.width(),
            shape.height(),
            image_width,
            image_height
        );
        return Err(MorphError::InvalidNeighborhood {
            width: shape.width(),
            height: shape.height(),
            image_width,
            image_height,
        });
    }
    Ok(())
}

/// Slide paired data/mask windows over `m`, writing `reduce(data, mask)`
/// or the input value when it yields `None`.
fn shaped_scan<T, F>(m: &Matrix<T>, shape: &Shape, reduce: F) -> MorphResult<Matrix<T>>
where
    T: Pixel,
    F: Fn(&Window<'_, T>, &Window<'_, bool>) -> Option<T> + Sync + Send,
{
    let src = m.view();
    let bits = shape.mask().view();
    let (image_width, image_height) = src.dimensions();
    let (px, py) = (shape.pixel_x(), shape.pixel_y());
    let (after_x, after_y) = (shape.width() - px, shape.height() - py);

    scan_rows(image_width, image_height, |y, out| {
        let mut data = Window::new(src);
        let mut mask = Window::new(bits);
        let (top, span_height) = clamp_span(y, py, after_y, image_height);
        data.set_y_span(top, span_height);
        mask.set_y_span(top + py - y, span_height);
        let input = src.row(y);
        for (x, dst) in (0..image_width).zip(out.iter_mut()) {
            let (left, span_width) = clamp_span(x, px, after_x, image_width);
            data.set_x_span(left, span_width);
            mask.set_x_span(left + px - x, span_width);
            *dst = reduce(&data, &mask).unwrap_or(input[x as usize]);
        }
    })
}
