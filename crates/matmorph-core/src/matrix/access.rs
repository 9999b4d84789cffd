//! Element access
//!
//! Checked accessors return [`Error::IndexOutOfBounds`]; the `_unchecked`
//! variants and the `Index` impl panic instead. All coordinates are
//! relative to the matrix window, never to the backing buffer.

use super::Matrix;
use crate::error::{Error, Result};
use std::ops::Index;

impl<T: Copy> Matrix<T> {
    #[inline]
    fn check_index(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Get the element at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the window.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<T> {
        self.check_index(x, y)?;
        Ok(self.data[self.offset(x, y)])
    }

    /// Set the element at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the window.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: T) -> Result<()> {
        self.check_index(x, y)?;
        let idx = self.offset(x, y);
        self.buffer_mut()[idx] = value;
        Ok(())
    }

    /// Get the element at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> T {
        self[(x, y)]
    }

    /// Set the element at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: T) {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        let idx = self.offset(x, y);
        self.buffer_mut()[idx] = value;
    }

    /// Row `y` of the window.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[T] {
        assert!(y < self.height, "row {y} out of range 0..{}", self.height);
        let start = self.offset(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Mutable row `y` of the window.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [T] {
        assert!(y < self.height, "row {y} out of range 0..{}", self.height);
        let start = self.offset(0, y);
        let width = self.width as usize;
        &mut self.buffer_mut()[start..start + width]
    }

    /// Iterate over the rows of the window, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Iterate over every element of the window in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.view().iter()
    }

    /// Copy the window out into a row-major `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity((self.width as usize) * (self.height as usize));
        for row in self.view().rows() {
            out.extend_from_slice(row);
        }
        out
    }

    /// Set every element of the window to `value`.
    pub fn fill(&mut self, value: T) {
        self.for_each_mut(|v| *v = value);
    }

    /// Apply `f` to every element of the window in place.
    pub(crate) fn for_each_mut(&mut self, mut f: impl FnMut(&mut T)) {
        for y in 0..self.height {
            self.row_mut(y).iter_mut().for_each(&mut f);
        }
    }
}

impl<T: Copy> Index<(u32, u32)> for Matrix<T> {
    type Output = T;

    /// Element at `(x, y)` of the window.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    fn index(&self, (x, y): (u32, u32)) -> &T {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        &self.data[self.offset(x, y)]
    }
}
