//! matmorph-test - Regression test harness for matmorph
//!
//! Regression tests number every check, keep running after a failure and
//! report all failures at the end, so one broken operator does not hide the
//! state of the others.
//!
//! # Usage
//!
//! ```
//! use matmorph_core::Matrix;
//! use matmorph_test::RegParams;
//!
//! let mut rp = RegParams::new("doc");
//! let m = Matrix::new_with_value(3, 3, 1.0f32).unwrap();
//! rp.compare_values(1.0, m.max() as f64, 0.0);
//! rp.compare_matrices(&m, &m.to_compact());
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to dump compared matrices to stderr

mod params;

pub use params::{RegParams, RegTestMode};

use matmorph_core::{Matrix, Pixel};

/// Build a matrix from literal rows; all rows must have the same length.
///
/// # Panics
///
/// Panics on an empty or ragged row list.
pub fn matrix_from_rows<T: Pixel>(rows: &[&[T]]) -> Matrix<T> {
    assert!(!rows.is_empty(), "at least one row required");
    let width = rows[0].len();
    assert!(
        rows.iter().all(|r| r.len() == width),
        "ragged rows in matrix literal"
    );
    let data: Vec<T> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    Matrix::from_data(width as u32, rows.len() as u32, data)
        .unwrap_or_else(|e| panic!("invalid matrix literal: {e}"))
}

/// Render a matrix window as text, one row per line.
pub fn format_matrix<T: Pixel>(m: &Matrix<T>) -> String {
    let mut out = String::new();
    for row in m.view().rows() {
        let line: Vec<String> = row.iter().map(|v| format!("{v:?}")).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
