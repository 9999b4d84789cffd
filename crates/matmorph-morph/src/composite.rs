//! Composite operators built from dilation and erosion
//!
//! - **Opening**: erosion then dilation, removes small bright features
//! - **Closing**: dilation then erosion, fills small dark features
//! - **Gradient**: `|dilate(M) - erode(M)|`, local contrast
//! - **White hat**: `|open(M) - M|`, the bright features opening removed
//! - **Black hat**: `|close(M) - M|`, the dark features closing filled
//!
//! Each operator comes in three forms: a flat `width x height` one, a
//! `_shape` one, and a `_with` one taking any [`Neighborhood`] plus
//! explicit [`MorphOptions`]. The thresholds are passed to every primitive
//! the composite calls.

use crate::brick::{dilate_with, erode_with};
use crate::options::{MorphOptions, Neighborhood};
use crate::shape::Shape;
use crate::shaped::{dilate_shape_with, erode_shape_with};
use crate::MorphResult;
use log::debug;
use matmorph_core::{Matrix, Pixel};

/// Dilate over any neighborhood.
pub fn dilate_by<T: Pixel>(
    m: &Matrix<T>,
    neighborhood: &Neighborhood,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    match neighborhood {
        Neighborhood::Rect { width, height } => dilate_with(m, *width, *height, options),
        Neighborhood::Shaped(shape) => dilate_shape_with(m, shape, options),
    }
}

/// Erode over any neighborhood.
pub fn erode_by<T: Pixel>(
    m: &Matrix<T>,
    neighborhood: &Neighborhood,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    match neighborhood {
        Neighborhood::Rect { width, height } => erode_with(m, *width, *height, options),
        Neighborhood::Shaped(shape) => erode_shape_with(m, shape, options),
    }
}

// ---- opening / closing ----

/// Open with a flat `width x height` neighborhood.
pub fn open<T: Pixel>(m: &Matrix<T>, width: u32, height: u32) -> MorphResult<Matrix<T>> {
    open_with(m, &Neighborhood::rect(width, height), &MorphOptions::default())
}

/// Open with a structuring element.
pub fn open_shape<T: Pixel>(m: &Matrix<T>, shape: &Shape) -> MorphResult<Matrix<T>> {
    open_with(m, &Neighborhood::Shaped(shape.clone()), &MorphOptions::default())
}

/// Open: erode, then dilate the result with the same neighborhood.
///
/// # Errors
///
/// Returns [`crate::MorphError::InvalidNeighborhood`] if the neighborhood
/// does not fit the image.
pub fn open_with<T: Pixel>(
    m: &Matrix<T>,
    neighborhood: &Neighborhood,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    debug!("open {}x{} with {:?}", m.width(), m.height(), neighborhood);
    let eroded = erode_by(m, neighborhood, options)?;
    dilate_by(&eroded, neighborhood, options)
}

/// Close with a flat `width x height` neighborhood.
pub fn close<T: Pixel>(m: &Matrix<T>, width: u32, height: u32) -> MorphResult<Matrix<T>> {
    close_with(m, &Neighborhood::rect(width, height), &MorphOptions::default())
}

/// Close with a structuring element.
pub fn close_shape<T: Pixel>(m: &Matrix<T>, shape: &Shape) -> MorphResult<Matrix<T>> {
    close_with(m, &Neighborhood::Shaped(shape.clone()), &MorphOptions::default())
}

/// Close: dilate, then erode the result with the same neighborhood.
///
/// # Errors
///
/// Returns [`crate::MorphError::InvalidNeighborhood`] if the neighborhood
/// does not fit the image.
pub fn close_with<T: Pixel>(
    m: &Matrix<T>,
    neighborhood: &Neighborhood,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    debug!("close {}x{} with {:?}", m.width(), m.height(), neighborhood);
    let dilated = dilate_by(m, neighborhood, options)?;
    erode_by(&dilated, neighborhood, options)
}

// ---- gradient and hats ----

/// Morphological gradient with a flat `width x height` neighborhood.
pub fn gradient<T: Pixel>(m: &Matrix<T>, width: u32, height: u32) -> MorphResult<Matrix<T>> {
    gradient_with(m, &Neighborhood::rect(width, height), &MorphOptions::default())
}

/// Morphological gradient with a structuring element.
pub fn gradient_shape<T: Pixel>(m: &Matrix<T>, shape: &Shape) -> MorphResult<Matrix<T>> {
    gradient_with(m, &Neighborhood::Shaped(shape.clone()), &MorphOptions::default())
}

/// Morphological gradient: `|dilate(M) - erode(M)|`.
///
/// # Errors
///
/// Returns [`crate::MorphError::InvalidNeighborhood`] if the neighborhood
/// does not fit the image.
///
/// # Examples
///
/// ```
/// use matmorph_core::Matrix;
/// use matmorph_morph::gradient;
///
/// let step = Matrix::from_fn(6, 3, |x, _| if x < 3 { 0u8 } else { 200 });
/// let g = gradient(&step, 3, 1).unwrap();
/// assert_eq!(g.row(1), &[0, 0, 200, 200, 0, 0]);
/// ```
pub fn gradient_with<T: Pixel>(
    m: &Matrix<T>,
    neighborhood: &Neighborhood,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    debug!("gradient {}x{} with {:?}", m.width(), m.height(), neighborhood);
    let mut dilated = dilate_by(m, neighborhood, options)?;
    let eroded = erode_by(m, neighborhood, options)?;
    dilated.absolute_difference(&eroded)?;
    Ok(dilated)
}

/// White hat with a flat `width x height` neighborhood.
pub fn white_hat<T: Pixel>(m: &Matrix<T>, width: u32, height: u32) -> MorphResult<Matrix<T>> {
    white_hat_with(m, &Neighborhood::rect(width, height), &MorphOptions::default())
}

/// White hat with a structuring element.
pub fn white_hat_shape<T: Pixel>(m: &Matrix<T>, shape: &Shape) -> MorphResult<Matrix<T>> {
    white_hat_with(m, &Neighborhood::Shaped(shape.clone()), &MorphOptions::default())
}

/// White hat: `|open(M) - M|`.
pub fn white_hat_with<T: Pixel>(
    m: &Matrix<T>,
    neighborhood: &Neighborhood,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    let mut opened = open_with(m, neighborhood, options)?;
    opened.absolute_difference(m)?;
    Ok(opened)
}

/// Black hat with a flat `width x height` neighborhood.
pub fn black_hat<T: Pixel>(m: &Matrix<T>, width: u32, height: u32) -> MorphResult<Matrix<T>> {
    black_hat_with(m, &Neighborhood::rect(width, height), &MorphOptions::default())
}

/// Black hat with a structuring element.
pub fn black_hat_shape<T: Pixel>(m: &Matrix<T>, shape: &Shape) -> MorphResult<Matrix<T>> {
    black_hat_with(m, &Neighborhood::Shaped(shape.clone()), &MorphOptions::default())
}

/// Black hat: `|close(M) - M|`.
pub fn black_hat_with<T: Pixel>(
    m: &Matrix<T>,
    neighborhood: &Neighborhood,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    let mut closed = close_with(m, neighborhood, options)?;
    closed.absolute_difference(m)?;
    Ok(closed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MorphError;

    fn speck(on: i32, off: i32) -> Matrix<i32> {
        Matrix::from_fn(7, 7, |x, y| if (x, y) == (3, 3) { on } else { off })
    }

    #[test]
    fn test_open_removes_bright_speck() {
        let m = speck(200, 10);
        assert_eq!(open(&m, 3, 3).unwrap().to_vec(), vec![10; 49]);
        assert_eq!(close(&m, 3, 3).unwrap(), m);
    }

    #[test]
    fn test_close_fills_dark_speck() {
        let m = speck(10, 200);
        assert_eq!(close(&m, 3, 3).unwrap().to_vec(), vec![200; 49]);
        assert_eq!(open(&m, 3, 3).unwrap(), m);
    }

    #[test]
    fn test_white_hat_isolates_speck() {
        let m = speck(200, 10);
        let w = white_hat(&m, 3, 3).unwrap();
        assert_eq!(w.get_pixel(3, 3).unwrap(), 190);
        assert_eq!(w.iter().filter(|&v| v != 0).count(), 1);
    }

    #[test]
    fn test_black_hat_isolates_notch() {
        let m = speck(10, 200);
        let b = black_hat(&m, 3, 3).unwrap();
        assert_eq!(b.get_pixel(3, 3).unwrap(), 190);
        assert_eq!(b.iter().filter(|&v| v != 0).count(), 1);
    }

    #[test]
    fn test_gradient_shape() {
        let m = speck(9, 0);
        let g = gradient_shape(&m, &Shape::cross_3x3()).unwrap();
        assert_eq!(g.iter().filter(|&v| v == 9).count(), 5);
        assert_eq!(g.get_pixel(2, 2).unwrap(), 0);
    }

    #[test]
    fn test_composites_forward_thresholds() {
        let m = speck(200, 10);
        let opts = MorphOptions::default().with_max_threshold(100);
        let c = close_with(&m, &Neighborhood::default(), &opts).unwrap();
        assert_eq!(c.get_pixel(3, 3).unwrap(), 100);
    }

    #[test]
    fn test_composites_validate_neighborhood() {
        let m = speck(1, 0);
        assert!(matches!(
            gradient(&m, 7, 3),
            Err(MorphError::InvalidNeighborhood { .. })
        ));
        assert!(black_hat_shape(&m, &Shape::x_7x7()).is_err());
    }
}
