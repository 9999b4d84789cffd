//! Window reductions

use super::Matrix;
use crate::error::Result;
use crate::pixel::Pixel;

impl<T: Pixel> Matrix<T> {
    /// Largest element of the window.
    pub fn max(&self) -> T {
        self.view().max()
    }

    /// Smallest element of the window.
    pub fn min(&self) -> T {
        self.view().min()
    }

    /// Largest element where `mask` is `true`; `Ok(None)` if none is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DimensionMismatch`] if the mask size differs
    /// from the window size.
    pub fn max_masked(&self, mask: &Matrix<bool>) -> Result<Option<T>> {
        self.view().max_masked(&mask.view())
    }

    /// Smallest element where `mask` is `true`; `Ok(None)` if none is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DimensionMismatch`] if the mask size differs
    /// from the window size.
    pub fn min_masked(&self, mask: &Matrix<bool>) -> Result<Option<T>> {
        self.view().min_masked(&mask.view())
    }
}

#[cfg(test)]
mod tests {
    use crate::Matrix;

    #[test]
    fn test_min_max_over_region_only() {
        let m = Matrix::from_fn(6, 6, |x, y| (x + 6 * y) as i32);
        let r = m.region(1, 2, 2, 2).unwrap();
        assert_eq!(r.min(), 13);
        assert_eq!(r.max(), 20);
        assert_eq!(m.min(), 0);
        assert_eq!(m.max(), 35);
    }

    #[test]
    fn test_masked_reduction_on_regions() {
        let m = Matrix::from_fn(4, 4, |x, y| (x + 4 * y) as f32);
        let mask = Matrix::from_fn(4, 4, |x, y| x == y);
        let r = m.region(1, 1, 3, 3).unwrap();
        let mr = mask.region(0, 0, 3, 3).unwrap();
        assert_eq!(r.max_masked(&mr).unwrap(), Some(15.0));
        assert_eq!(r.min_masked(&mr).unwrap(), Some(5.0));
        assert!(r.max_masked(&mask).is_err());
    }
}
