//! Re-targetable scan window
//!
//! A [`Window`] addresses a sub-rectangle of a borrowed [`MatrixView`].
//! The scan loops move it with [`Window::set_x_span`] and
//! [`Window::set_y_span`] instead of building a new view per pixel. Each
//! output row owns its own windows; they are never shared across rows.

use matmorph_core::{MatrixView, Pixel};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Window<'a, T> {
    source: MatrixView<'a, T>,
    left: usize,
    width: usize,
    top: u32,
    height: u32,
}

impl<'a, T: Copy> Window<'a, T> {
    /// Window covering all of `source`.
    pub(crate) fn new(source: MatrixView<'a, T>) -> Self {
        Window {
            source,
            left: 0,
            width: source.width() as usize,
            top: 0,
            height: source.height(),
        }
    }

    /// Columns `[left, left + width)` of the source.
    #[inline]
    pub(crate) fn set_x_span(&mut self, left: u32, width: u32) {
        debug_assert!(width > 0 && left + width <= self.source.width());
        self.left = left as usize;
        self.width = width as usize;
    }

    /// Rows `[top, top + height)` of the source.
    #[inline]
    pub(crate) fn set_y_span(&mut self, top: u32, height: u32) {
        debug_assert!(height > 0 && top + height <= self.source.height());
        self.top = top;
        self.height = height;
    }

    #[inline]
    fn rows(&self) -> impl Iterator<Item = &'a [T]> + use<'a, T> {
        let source = self.source;
        let (left, right) = (self.left, self.left + self.width);
        (self.top..self.top + self.height).map(move |y| &source.row(y)[left..right])
    }
}

impl<T: Pixel> Window<'_, T> {
    /// Minimum, stopping as soon as a value at or below `floor` is seen.
    pub(crate) fn min_until(&self, floor: T) -> T {
        let mut best: Option<T> = None;
        for row in self.rows() {
            for &v in row {
                let b = best.map_or(v, |b| b.min_of(v));
                if b.at_most(floor) {
                    return b;
                }
                best = Some(b);
            }
        }
        best.unwrap_or(floor)
    }

    /// Maximum, stopping as soon as a value at or above `ceiling` is seen.
    pub(crate) fn max_until(&self, ceiling: T) -> T {
        let mut best: Option<T> = None;
        for row in self.rows() {
            for &v in row {
                let b = best.map_or(v, |b| b.max_of(v));
                if b.at_least(ceiling) {
                    return b;
                }
                best = Some(b);
            }
        }
        best.unwrap_or(ceiling)
    }

    /// Maximum over positions set in `mask`, which must span the same size.
    pub(crate) fn max_masked(&self, mask: &Window<'_, bool>) -> Option<T> {
        self.reduce_masked(mask, T::max_of)
    }

    /// Minimum over positions set in `mask`, which must span the same size.
    pub(crate) fn min_masked(&self, mask: &Window<'_, bool>) -> Option<T> {
        self.reduce_masked(mask, T::min_of)
    }

    fn reduce_masked(&self, mask: &Window<'_, bool>, pick: impl Fn(T, T) -> T) -> Option<T> {
        debug_assert_eq!((self.width, self.height), (mask.width, mask.height));
        let mut best: Option<T> = None;
        for (row, mask_row) in self.rows().zip(mask.rows()) {
            for (&v, &on) in row.iter().zip(mask_row) {
                if on {
                    best = Some(best.map_or(v, |b| pick(b, v)));
                }
            }
        }
        best
    }
}
