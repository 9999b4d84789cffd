//! Region extraction
//!
//! Regions alias the source buffer; [`Matrix::to_compact`] is the only way
//! to get a deep copy of a window.

use super::Matrix;
use crate::error::Result;
use crate::view::check_region;

impl<T: Copy> Matrix<T> {
    /// Zero-copy sub-view of the window.
    ///
    /// `(x, y)` is relative to this matrix's window. The result shares the
    /// backing buffer and records its origin in buffer coordinates, so
    /// regions of regions compose.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimension`] if `w` or `h` is 0 and
    /// [`crate::Error::RegionOutOfBounds`] unless the rectangle lies fully
    /// inside this window.
    ///
    /// # Examples
    ///
    /// ```
    /// use matmorph_core::Matrix;
    ///
    /// let page = Matrix::new_with_value(200, 120, 0.5f32).unwrap();
    /// let mrz = page.region(10, 90, 180, 24).unwrap();
    /// assert_eq!(mrz.dimensions(), (180, 24));
    /// assert_eq!((mrz.left(), mrz.top()), (10, 90));
    /// assert!(page.region(150, 0, 60, 10).is_err());
    /// ```
    pub fn region(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Matrix<T>> {
        check_region(self.width, self.height, x, y, w, h)?;
        Ok(Matrix {
            data: self.data.clone(),
            stride: self.stride,
            left: self.left + x,
            top: self.top + y,
            width: w,
            height: h,
        })
    }

    /// Deep copy of the window into a fresh, contiguous buffer.
    pub fn to_compact(&self) -> Matrix<T> {
        Matrix::from_buffer(self.to_vec(), self.width, self.height)
    }

    /// The full backing image this window sits in.
    pub fn backing(&self) -> Matrix<T> {
        let height = self.data.len() / self.stride;
        Matrix {
            data: self.data.clone(),
            stride: self.stride,
            left: 0,
            top: 0,
            width: self.stride as u32,
            height: height as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use crate::Matrix;

    #[test]
    fn test_region_of_region() {
        let m = Matrix::from_fn(10, 8, |x, y| (100 * y + x) as i32);
        let r1 = m.region(2, 3, 6, 4).unwrap();
        let r2 = r1.region(1, 1, 3, 2).unwrap();
        assert_eq!((r2.left(), r2.top()), (3, 4));
        assert_eq!(r2.start(), 4 * 10 + 3);
        assert_eq!(r2.to_vec(), vec![403, 404, 405, 503, 504, 505]);
        assert!(r2.same_buffer(&m));
    }

    #[test]
    fn test_region_must_be_contained() {
        let m: Matrix<f32> = Matrix::new(10, 8).unwrap();
        let r = m.region(5, 5, 5, 3).unwrap();
        assert!(matches!(
            r.region(1, 0, 5, 1),
            Err(Error::RegionOutOfBounds { .. })
        ));
        assert!(matches!(
            m.region(0, 0, 0, 3),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(m.region(0, 0, 10, 8).is_ok());
    }

    #[test]
    fn test_backing_recovers_full_image() {
        let m = Matrix::from_fn(7, 3, |x, y| x * y);
        let b = m.region(2, 1, 3, 1).unwrap().backing();
        assert_eq!(b.dimensions(), (7, 3));
        assert_eq!(b, m);
    }
}
