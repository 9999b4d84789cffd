//! In-place element-wise arithmetic
//!
//! These operations rewrite the matrix window in place (detaching it from
//! any shared buffer first) and are the building blocks the morphological
//! composites use to combine intermediate results.
//!
//! # Threshold polarity
//!
//! [`Matrix::threshold`] takes a single signed threshold. A non-negative
//! value binarizes (`v >= t` becomes "on"); a negative value requests the
//! complement with `|t|` as the effective threshold (`v >= |t|` becomes
//! zero, everything else "on").

use super::Matrix;
use crate::error::{Error, Result};
use crate::pixel::Pixel;

impl<T: Pixel> Matrix<T> {
    /// `self[i] = |self[i] - other[i]|` for every element of the window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the windows differ in size.
    ///
    /// # Examples
    ///
    /// ```
    /// use matmorph_core::Matrix;
    ///
    /// let mut a = Matrix::from_data(2, 1, vec![3, 10]).unwrap();
    /// let b = Matrix::from_data(2, 1, vec![5, 4]).unwrap();
    /// a.absolute_difference(&b).unwrap();
    /// assert_eq!(a.to_vec(), vec![2, 6]);
    /// ```
    pub fn absolute_difference(&mut self, other: &Matrix<T>) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        let src = other.view();
        for y in 0..self.height {
            let theirs = src.row(y);
            for (v, &o) in self.row_mut(y).iter_mut().zip(theirs) {
                *v = v.abs_diff(o);
            }
        }
        Ok(())
    }

    /// Binarize against a signed threshold, writing [`Pixel::FULL_SCALE`]
    /// for "on" pixels and zero otherwise.
    ///
    /// - `t >= 0`: `v >= t` becomes full scale, everything else zero.
    /// - `t < 0`: complement with `|t|`: `v >= |t|` becomes zero,
    ///   everything else full scale.
    pub fn threshold(&mut self, t: T) {
        self.threshold_with(t, T::FULL_SCALE);
    }

    /// [`Matrix::threshold`] with an explicit "on" value.
    pub fn threshold_with(&mut self, t: T, on: T) {
        let (limit, above, below) = if t.is_negative() {
            (t.abs(), T::ZERO, on)
        } else {
            (t, on, T::ZERO)
        };
        self.for_each_mut(|v| *v = if v.at_least(limit) { above } else { below });
    }

    /// `v = FULL_SCALE - v` for every element.
    pub fn negate(&mut self) {
        self.negate_with(T::FULL_SCALE);
    }

    /// `v = full - v` for every element.
    pub fn negate_with(&mut self, full: T) {
        self.for_each_mut(|v| *v = full.saturating_sub(*v));
    }

    /// Stretch the window's value range linearly onto `[0, FULL_SCALE]`.
    ///
    /// A constant window is left untouched.
    pub fn contrast(&mut self) {
        self.contrast_to(T::FULL_SCALE);
    }

    /// Stretch the window's value range linearly onto `[0, full]`.
    pub fn contrast_to(&mut self, full: T) {
        let lo = self.min().to_f64();
        let hi = self.max().to_f64();
        let range = hi - lo;
        if range <= 0.0 || !range.is_finite() {
            return;
        }
        let scale = full.to_f64() / range;
        self.for_each_mut(|v| *v = T::from_f64((v.to_f64() - lo) * scale));
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, INT_FULL_SCALE, Matrix};

    #[test]
    fn test_absolute_difference() {
        let mut a = Matrix::from_data(3, 1, vec![0.25f32, 1.0, 0.5]).unwrap();
        let b = Matrix::from_data(3, 1, vec![1.0f32, 0.25, 0.5]).unwrap();
        a.absolute_difference(&b).unwrap();
        assert_eq!(a.to_vec(), vec![0.75, 0.75, 0.0]);
    }

    #[test]
    fn test_absolute_difference_size_mismatch() {
        let mut a: Matrix<i32> = Matrix::new(3, 2).unwrap();
        let b: Matrix<i32> = Matrix::new(2, 3).unwrap();
        assert!(matches!(
            a.absolute_difference(&b),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_absolute_difference_between_regions_of_one_buffer() {
        let m = Matrix::from_fn(4, 1, |x, _| (x * x) as i32);
        let mut left = m.region(0, 0, 2, 1).unwrap();
        let right = m.region(2, 0, 2, 1).unwrap();
        left.absolute_difference(&right).unwrap();
        assert_eq!(left.to_vec(), vec![4, 8]);
        assert_eq!(m.to_vec(), vec![0, 1, 4, 9]);
    }

    #[test]
    fn test_threshold_positive() {
        let mut m = Matrix::from_data(4, 1, vec![0.1f32, 0.5, 0.49, 0.9]).unwrap();
        m.threshold(0.5);
        assert_eq!(m.to_vec(), vec![0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_threshold_negative_is_complement() {
        let mut m = Matrix::from_data(4, 1, vec![0.1f32, 0.5, 0.49, 0.9]).unwrap();
        m.threshold(-0.5);
        assert_eq!(m.to_vec(), vec![1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_threshold_int_domain_uses_full_scale() {
        let mut m = Matrix::from_data(3, 1, vec![0, 100, 5000]).unwrap();
        m.threshold(100);
        assert_eq!(m.to_vec(), vec![0, INT_FULL_SCALE, INT_FULL_SCALE]);
    }

    #[test]
    fn test_negate() {
        let mut m = Matrix::from_data(3, 1, vec![0u8, 55, 255]).unwrap();
        m.negate();
        assert_eq!(m.to_vec(), vec![255, 200, 0]);
    }

    #[test]
    fn test_contrast_stretch() {
        let mut m = Matrix::from_data(3, 1, vec![64u8, 96, 128]).unwrap();
        m.contrast();
        assert_eq!(m.to_vec(), vec![0, 128, 255]);

        let mut flat = Matrix::new_with_value(2, 2, 0.3f32).unwrap();
        flat.contrast();
        assert_eq!(flat.to_vec(), vec![0.3; 4]);
    }
}
