//! Borrowed matrix windows
//!
//! [`MatrixView`] is a `Copy` description of a window onto a borrowed
//! slice: the slice starts at the window's top-left element and rows are
//! `stride` elements apart. Sub-windows are derived by value, so scan loops
//! can recompute a neighborhood view per pixel without allocating and
//! without any hidden mutable state.

use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Borrowed, strided window over a row-major buffer.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    /// Buffer slice beginning at the window's top-left element
    data: &'a [T],
    stride: usize,
    width: u32,
    height: u32,
}

impl<'a, T: Copy> MatrixView<'a, T> {
    /// Build a view; `data` must cover `(height - 1) * stride + width`
    /// elements.
    pub(crate) fn from_parts(data: &'a [T], stride: usize, width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert!(width as usize <= stride);
        debug_assert!(data.len() >= (height as usize - 1) * stride + width as usize);
        MatrixView {
            data,
            stride,
            width,
            height,
        }
    }

    /// View over a contiguous row-major slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero size and
    /// [`Error::InvalidParameter`] if `data.len() != width * height`.
    pub fn new(data: &'a [T], width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self::from_parts(data, width as usize, width, height))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Row `y` of the window.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &'a [T] {
        assert!(y < self.height, "row {y} out of range 0..{}", self.height);
        let start = (y as usize) * self.stride;
        &self.data[start..start + self.width as usize]
    }

    /// Element `(x, y)`, or `None` outside the window.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y as usize) * self.stride + x as usize])
    }

    /// Iterate over the rows of the window.
    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> + use<'a, T> {
        let view = *self;
        (0..view.height).map(move |y| view.row(y))
    }

    /// Iterate over every element in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + use<'a, T> {
        self.rows().flat_map(|row| row.iter().copied())
    }

    /// Sub-window at `(x, y)` of size `w x h`, relative to this window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero size and
    /// [`Error::RegionOutOfBounds`] unless the rectangle is fully
    /// contained in this window.
    pub fn region(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Self> {
        check_region(self.width, self.height, x, y, w, h)?;
        let start = (y as usize) * self.stride + x as usize;
        let end = start + (h as usize - 1) * self.stride + w as usize;
        Ok(Self::from_parts(&self.data[start..end], self.stride, w, h))
    }
}

impl<T: Pixel> MatrixView<'_, T> {
    /// Largest element of the window.
    pub fn max(&self) -> T {
        let mut best = self.data[0];
        for row in self.rows() {
            for &v in row {
                best = best.max_of(v);
            }
        }
        best
    }

    /// Smallest element of the window.
    pub fn min(&self) -> T {
        let mut best = self.data[0];
        for row in self.rows() {
            for &v in row {
                best = best.min_of(v);
            }
        }
        best
    }

    /// Largest element at positions where `mask` is set.
    ///
    /// Returns `Ok(None)` when the mask selects nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the mask and the window
    /// differ in size.
    pub fn max_masked(&self, mask: &MatrixView<'_, bool>) -> Result<Option<T>> {
        self.reduce_masked(mask, T::max_of)
    }

    /// Smallest element at positions where `mask` is set.
    ///
    /// Returns `Ok(None)` when the mask selects nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the mask and the window
    /// differ in size.
    pub fn min_masked(&self, mask: &MatrixView<'_, bool>) -> Result<Option<T>> {
        self.reduce_masked(mask, T::min_of)
    }

    fn reduce_masked(
        &self,
        mask: &MatrixView<'_, bool>,
        pick: impl Fn(T, T) -> T,
    ) -> Result<Option<T>> {
        if mask.dimensions() != self.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: mask.dimensions(),
            });
        }
        let mut best: Option<T> = None;
        for (row, mask_row) in self.rows().zip(mask.rows()) {
            for (&v, &on) in row.iter().zip(mask_row) {
                if on {
                    best = Some(best.map_or(v, |b| pick(b, v)));
                }
            }
        }
        Ok(best)
    }
}

/// Validate that a `w x h` rectangle at `(x, y)` lies inside a
/// `width x height` window.
pub(crate) fn check_region(width: u32, height: u32, x: u32, y: u32, w: u32, h: u32) -> Result<()> {
    if w == 0 || h == 0 {
        return Err(Error::InvalidDimension {
            width: w,
            height: h,
        });
    }
    let fits_x = x.checked_add(w).is_some_and(|right| right <= width);
    let fits_y = y.checked_add(h).is_some_and(|bottom| bottom <= height);
    if !fits_x || !fits_y {
        return Err(Error::RegionOutOfBounds {
            x,
            y,
            w,
            h,
            width,
            height,
        });
    }
    Ok(())
}
