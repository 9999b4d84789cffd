//! Matrix - windowed view over a shared pixel buffer
//!
//! A [`Matrix`] is a rectangular window onto a row-major backing buffer.
//! The buffer is reference counted, so extracting a [`Matrix::region`] or
//! taking a [`Matrix::shallow_copy`] never copies pixels: the new matrix
//! just records a different origin and size over the same buffer.
//!
//! # Geometry
//!
//! - `stride` is the number of buffer elements between two consecutive rows
//!   (the width of the backing image, not of the window).
//! - `left`/`top` give the window origin in buffer coordinates.
//! - Element `(x, y)` of the window lives at
//!   `top * stride + left + y * stride + x`.
//!
//! Every constructor and [`Matrix::region`] validates that the window fits
//! inside the buffer; nothing else can change the geometry, so element
//! access inside the window never needs to re-check the buffer bounds.
//!
//! # Ownership model
//!
//! Writes are copy-on-write. Mutating a matrix whose buffer is shared with
//! other views first detaches a private copy of the buffer, so other views
//! never observe the change.
//!
//! # Examples
//!
//! ```
//! use matmorph_core::Matrix;
//!
//! let m = Matrix::from_fn(8, 6, |x, y| (x + y * 8) as f32);
//! let strip = m.region(2, 3, 4, 2).unwrap();
//! assert_eq!(strip.get_pixel(0, 0).unwrap(), 26.0);
//! assert!(strip.same_buffer(&m));
//! ```

mod access;
pub mod arith;
mod clip;
mod statistics;

use crate::error::{Error, Result};
use crate::view::MatrixView;
use std::sync::Arc;

/// Matrix over 32-bit floating-point pixels
pub type FloatMatrix = Matrix<f32>;

/// Matrix over the 32-bit integer pixel encoding
pub type IntMatrix = Matrix<i32>;

/// Rectangular window over a shared, row-major element buffer.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    /// Backing buffer, shared by every view derived from the same source
    data: Arc<Vec<T>>,
    /// Elements between consecutive rows of the backing buffer
    stride: usize,
    /// Window origin in buffer coordinates
    left: u32,
    top: u32,
    /// Window size
    width: u32,
    height: u32,
}

impl<T: Copy> Matrix<T> {
    /// Create a `width x height` matrix filled with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self>
    where
        T: Default,
    {
        Self::new_with_value(width, height, T::default())
    }

    /// Create a `width x height` matrix with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: T) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Self::from_buffer(vec![value; size], width, height))
    }

    /// Create a full, non-windowed matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 and
    /// [`Error::InvalidParameter`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
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
        Ok(Self::from_buffer(data, width, height))
    }

    /// Create a matrix by evaluating `f(x, y)` for every element.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> T,
    {
        assert!(
            width > 0 && height > 0,
            "matrix dimensions must be non-zero, got {width}x{height}"
        );
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::from_buffer(data, width, height)
    }

    /// Wrap a buffer already known to hold exactly `width * height` elements.
    pub(crate) fn from_buffer(data: Vec<T>, width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), (width as usize) * (height as usize));
        Matrix {
            data: Arc::new(data),
            stride: width as usize,
            left: 0,
            top: 0,
            width,
            height,
        }
    }

    /// Window width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Window height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Window size as `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Elements between consecutive rows of the backing buffer
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Window origin column in buffer coordinates
    #[inline]
    pub fn left(&self) -> u32 {
        self.left
    }

    /// Window origin row in buffer coordinates
    #[inline]
    pub fn top(&self) -> u32 {
        self.top
    }

    /// Linear offset of the window's top-left element in the buffer
    #[inline]
    pub fn start(&self) -> usize {
        (self.top as usize) * self.stride + self.left as usize
    }

    /// Linear buffer offset of window element `(x, y)`
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        self.start() + (y as usize) * self.stride + x as usize
    }

    /// Whether the window covers the whole backing buffer
    pub fn is_contiguous(&self) -> bool {
        self.left == 0
            && self.top == 0
            && self.stride == self.width as usize
            && self.data.len() == self.stride * self.height as usize
    }

    /// Whether `self` and `other` read the same backing buffer
    pub fn same_buffer(&self, other: &Matrix<T>) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// A new matrix object with the same window over the same buffer.
    ///
    /// Equivalent to [`Clone::clone`]; the copy can be re-windowed or
    /// written independently (writes detach it from the shared buffer).
    pub fn shallow_copy(&self) -> Self {
        self.clone()
    }

    /// Borrow the window as a [`MatrixView`].
    pub fn view(&self) -> MatrixView<'_, T> {
        let start = self.start();
        let end = start + (self.height as usize - 1) * self.stride + self.width as usize;
        MatrixView::from_parts(&self.data[start..end], self.stride, self.width, self.height)
    }

    /// Mutable access to the backing buffer, detaching it first if shared.
    fn buffer_mut(&mut self) -> &mut Vec<T> {
        Arc::make_mut(&mut self.data)
    }
}

impl<T: Copy + PartialEq> PartialEq for Matrix<T> {
    /// Matrices are equal when their windows have the same size and
    /// contents, regardless of buffer layout.
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .view()
                .rows()
                .zip(other.view().rows())
                .all(|(a, b)| a == b)
    }
}
