//! Flat (rectangular) dilation and erosion
//!
//! For a `w x h` neighborhood the span around `(x, y)` is
//! `[x - w/2, x - w/2 + w) x [y - h/2, y - h/2 + h)`, so even sizes lean
//! left and up. Spans are clamped to the image, which replicates the edge
//! instead of padding with a constant.
//!
//! - **Dilation**: maximum over the span, capped at `max_threshold`
//! - **Erosion**: minimum over the span, floored at `min_threshold`
//!
//! A pixel already at or past the relevant threshold is written directly;
//! the scan could not produce anything else.

use crate::options::MorphOptions;
use crate::scan::{clamp_span, scan_rows};
use crate::window::Window;
use crate::{MorphError, MorphResult};
use log::debug;
use matmorph_core::{Matrix, MatrixView, Pixel};

/// Dilate with a flat `width x height` neighborhood and default thresholds.
///
/// # Errors
///
/// Returns [`MorphError::InvalidNeighborhood`] unless both sizes are
/// non-zero and strictly smaller than the image.
///
/// # Examples
///
/// ```
/// use matmorph_core::Matrix;
/// use matmorph_morph::dilate;
///
/// let m = Matrix::from_fn(5, 5, |x, y| if (x, y) == (2, 2) { 9u8 } else { 0 });
/// let d = dilate(&m, 3, 3).unwrap();
/// assert_eq!(d.get_pixel(1, 1).unwrap(), 9);
/// assert_eq!(d.get_pixel(0, 0).unwrap(), 0);
/// ```
pub fn dilate<T: Pixel>(m: &Matrix<T>, width: u32, height: u32) -> MorphResult<Matrix<T>> {
    dilate_with(m, width, height, &MorphOptions::default())
}

/// Dilate with a flat `width x height` neighborhood.
///
/// # Errors
///
/// Returns [`MorphError::InvalidNeighborhood`] unless both sizes are
/// non-zero and strictly smaller than the image.
pub fn dilate_with<T: Pixel>(
    m: &Matrix<T>,
    width: u32,
    height: u32,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    check_neighborhood(m, width, height)?;
    debug!(
        "dilate {}x{} with {}x{} neighborhood",
        m.width(),
        m.height(),
        width,
        height
    );
    let ceiling = options.max_threshold;
    flat_scan(&m.view(), width, height, |center, window| {
        if center.at_least(ceiling) {
            ceiling
        } else {
            window.max_until(ceiling).min_of(ceiling)
        }
    })
}

/// Erode with a flat `width x height` neighborhood and default thresholds.
///
/// # Errors
///
/// Returns [`MorphError::InvalidNeighborhood`] unless both sizes are
/// non-zero and strictly smaller than the image.
pub fn erode<T: Pixel>(m: &Matrix<T>, width: u32, height: u32) -> MorphResult<Matrix<T>> {
    erode_with(m, width, height, &MorphOptions::default())
}

/// Erode with a flat `width x height` neighborhood.
///
/// # Errors
///
/// Returns [`MorphError::InvalidNeighborhood`] unless both sizes are
/// non-zero and strictly smaller than the image.
pub fn erode_with<T: Pixel>(
    m: &Matrix<T>,
    width: u32,
    height: u32,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    check_neighborhood(m, width, height)?;
    debug!(
        "erode {}x{} with {}x{} neighborhood",
        m.width(),
        m.height(),
        width,
        height
    );
    let floor = options.min_threshold;
    flat_scan(&m.view(), width, height, |center, window| {
        if center.at_most(floor) {
            floor
        } else {
            window.min_until(floor).max_of(floor)
        }
    })
}

/// Reject neighborhoods that are empty or not smaller than the image.
fn check_neighborhood<T: Copy>(m: &Matrix<T>, width: u32, height: u32) -> MorphResult<()> {
    let (image_width, image_height) = m.dimensions();
    if width == 0 || height == 0 || width >= image_width || height >= image_height {
        debug!(
            "rejecting {}x{} neighborhood for {}x{} image",
            width, height, image_width, image_height
        );
        return Err(MorphError::InvalidNeighborhood {
            width,
            height,
            image_width,
            image_height,
        });
    }
    Ok(())
}

/// Slide a flat window over `src`, writing `reduce(center, window)`.
fn flat_scan<T, F>(
    src: &MatrixView<'_, T>,
    width: u32,
    height: u32,
    reduce: F,
) -> MorphResult<Matrix<T>>
where
    T: Pixel,
    F: Fn(T, &Window<'_, T>) -> T + Sync + Send,
{
    let (image_width, image_height) = src.dimensions();
    let (left, right) = (width / 2, width - width / 2);
    let (up, down) = (height / 2, height - height / 2);

    scan_rows(image_width, image_height, |y, out| {
        let mut window = Window::new(*src);
        let (top, span_height) = clamp_span(y, up, down, image_height);
        window.set_y_span(top, span_height);
        let input = src.row(y);
        for (x, dst) in (0..image_width).zip(out.iter_mut()) {
            let (start, span_width) = clamp_span(x, left, right, image_width);
            window.set_x_span(start, span_width);
            *dst = reduce(input[x as usize], &window);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(size: u32, at: (u32, u32), on: f32, off: f32) -> Matrix<f32> {
        Matrix::from_fn(size, size, |x, y| if (x, y) == at { on } else { off })
    }

    #[test]
    fn test_erode_single_dark_pixel() {
        let m = dot(5, (2, 2), 0.0, 1.0);
        let e = erode(&m, 3, 3).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                let inside = (1..=3).contains(&x) && (1..=3).contains(&y);
                let expected = if inside { 0.0 } else { 1.0 };
                assert_eq!(e.get_pixel(x, y).unwrap(), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_dilate_corner_clamps() {
        let m = dot(4, (0, 0), 5.0, 0.0);
        let d = dilate(&m, 3, 3).unwrap();
        assert_eq!(
            d.to_vec(),
            vec![
                5.0, 5.0, 0.0, 0.0, //
                5.0, 5.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0,
            ]
        );
    }

    #[test]
    fn test_even_width_leans_left() {
        let m = Matrix::from_data(5, 2, vec![0, 0, 7, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        let d = dilate(&m, 2, 1).unwrap();
        // span for x is [x - 1, x + 1)
        assert_eq!(d.row(0), &[0, 0, 7, 7, 0]);
    }

    #[test]
    fn test_erode_floor_shortcut_matches_scan() {
        let m = Matrix::from_data(4, 3, vec![5u8, 2, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9]).unwrap();
        let opts = MorphOptions::default().with_min_threshold(3);
        let e = erode_with(&m, 3, 3, &opts).unwrap();
        assert_eq!(e.get_pixel(1, 0).unwrap(), 3);
        assert_eq!(e.get_pixel(0, 1).unwrap(), 3);
        assert_eq!(e.get_pixel(3, 2).unwrap(), 9);
    }

    #[test]
    fn test_negative_values_need_a_lower_floor() {
        let data = vec![
            -2.0f32, 1.0, 3.0, -0.5, //
            2.0, -4.0, 0.5, 1.5, //
            0.0, 2.5, -1.0, 3.5,
        ];
        let m = Matrix::from_data(4, 3, data).unwrap();

        let floored = erode(&m, 3, 3).unwrap();
        assert!(floored.iter().all(|v| v == 0.0));

        let opts = MorphOptions::default().with_min_threshold(f32::MIN);
        let e = erode_with(&m, 3, 3, &opts).unwrap();
        assert!(e.iter().zip(m.iter()).all(|(e, v)| e <= v));
        assert_eq!(e.get_pixel(0, 0).unwrap(), -4.0);
        assert_eq!(e.get_pixel(3, 2).unwrap(), -1.0);
    }

    #[test]
    fn test_dilate_ceiling() {
        let m = Matrix::from_data(3, 2, vec![1, 2, 100, 4, 5, 6]).unwrap();
        let opts = MorphOptions::default().with_max_threshold(50);
        let d = dilate_with(&m, 2, 1, &opts).unwrap();
        assert_eq!(d.to_vec(), vec![1, 2, 50, 4, 5, 6]);
    }

    #[test]
    fn test_operates_on_region_only() {
        let page = Matrix::from_fn(8, 8, |x, y| if x == 0 || y == 0 { 100i32 } else { 1 });
        let inner = page.region(1, 1, 4, 4).unwrap();
        let d = dilate(&inner, 3, 3).unwrap();
        assert_eq!(d.dimensions(), (4, 4));
        assert_eq!(d.to_vec(), vec![1; 16]);
    }

    #[test]
    fn test_rejects_oversized_neighborhoods() {
        let m: Matrix<f32> = Matrix::new(5, 4).unwrap();
        assert!(matches!(
            erode(&m, 5, 3),
            Err(MorphError::InvalidNeighborhood { width: 5, .. })
        ));
        assert!(dilate(&m, 3, 4).is_err());
        assert!(dilate(&m, 0, 1).is_err());
        assert!(dilate(&m, 4, 3).is_ok());
    }
}
