//! Row-by-row output scheduling
//!
//! Every primitive fills its output one row at a time; rows are
//! independent, so with the `parallel` feature they are handed to rayon.

use crate::MorphResult;
use matmorph_core::{Matrix, Pixel};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Build a `width x height` matrix by calling `fill_row(y, row)` per row.
pub(crate) fn scan_rows<T, F>(width: u32, height: u32, fill_row: F) -> MorphResult<Matrix<T>>
where
    T: Pixel,
    F: Fn(u32, &mut [T]) + Sync + Send,
{
    let mut data = vec![T::ZERO; (width as usize) * (height as usize)];

    #[cfg(feature = "parallel")]
    data.par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| fill_row(y as u32, row));

    #[cfg(not(feature = "parallel"))]
    data.chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| fill_row(y as u32, row));

    Ok(Matrix::from_data(width, height, data)?)
}

/// Clamp the span `[center - before, center + after)` to `[0, limit)`,
/// returning `(start, len)`.
#[inline]
pub(crate) fn clamp_span(center: u32, before: u32, after: u32, limit: u32) -> (u32, u32) {
    let start = center.saturating_sub(before);
    let end = center.saturating_add(after).min(limit);
    (start, end - start)
}
