//! Morphological sequences
//!
//! A sequence string stores a morphological recipe so callers can keep it
//! in configuration rather than code.
//!
//! # Sequence String Format
//!
//! Operations are separated by `+`; whitespace and case are ignored. Each
//! operation is an op code followed by a neighborhood:
//!
//! - `d`, `e`, `o`, `c` - dilation, erosion, opening, closing
//! - `g` - morphological gradient
//! - `tw`, `tb` - white hat, black hat
//! - `h<k>@<t>` - feature highlighting at scale `k` with threshold `t`
//!
//! The neighborhood is either a flat `<w>.<h>` rectangle or `:<shape>`
//! where `<shape>` is a predefined shape name with an odd size up to
//! [`MAX_PREDEFINED_SIZE`](crate::MAX_PREDEFINED_SIZE), such as `cross5`,
//! `diamond3`, `x7` or `square3`.
//!
//! Sequences print back in the same syntax. Only flat rectangles and
//! unrenamed predefined shapes read back with [`MorphSequence::parse`];
//! custom or reflected shapes print a descriptive form the parser rejects.
//!
//! # Examples
//!
//! ```
//! use matmorph_core::Matrix;
//! use matmorph_morph::{MorphSequence, morph_sequence};
//!
//! let seq = MorphSequence::parse("o5.5 + c:cross3").unwrap();
//! assert_eq!(seq.len(), 2);
//!
//! let m = Matrix::new_with_value(16, 16, 0.5f32).unwrap();
//! let out = morph_sequence(&m, "d3.3 + tb:diamond5").unwrap();
//! assert_eq!(out.dimensions(), (16, 16));
//! ```

use crate::composite::{
    black_hat_with, close_with, dilate_by, erode_by, gradient_with, open_with, white_hat_with,
};
use crate::highlight::highlight_features;
use crate::options::{MorphOptions, Neighborhood};
use crate::shape::{Shape, ShapeKind};
use crate::{MorphError, MorphResult};
use log::trace;
use matmorph_core::{Matrix, Pixel};
use std::fmt;

/// A parsed morphological operation
#[derive(Debug, Clone, PartialEq)]
pub enum MorphOp {
    Dilate(Neighborhood),
    Erode(Neighborhood),
    Open(Neighborhood),
    Close(Neighborhood),
    Gradient(Neighborhood),
    WhiteHat(Neighborhood),
    BlackHat(Neighborhood),
    /// Feature highlighting at an odd scale
    Highlight {
        size: u32,
        /// Signed threshold; negative selects the complement
        threshold: f64,
    },
}

impl MorphOp {
    /// The neighborhood this operation scans, if it has a single one
    pub fn neighborhood(&self) -> Option<&Neighborhood> {
        match self {
            MorphOp::Dilate(n)
            | MorphOp::Erode(n)
            | MorphOp::Open(n)
            | MorphOp::Close(n)
            | MorphOp::Gradient(n)
            | MorphOp::WhiteHat(n)
            | MorphOp::BlackHat(n) => Some(n),
            MorphOp::Highlight { .. } => None,
        }
    }
}

/// Renders the sequence syntax; custom shapes print as `:<name>` or
/// `:<WxH>` and do not parse back.
impl fmt::Display for MorphOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (code, neighborhood) = match self {
            MorphOp::Dilate(n) => ("d", n),
            MorphOp::Erode(n) => ("e", n),
            MorphOp::Open(n) => ("o", n),
            MorphOp::Close(n) => ("c", n),
            MorphOp::Gradient(n) => ("g", n),
            MorphOp::WhiteHat(n) => ("tw", n),
            MorphOp::BlackHat(n) => ("tb", n),
            MorphOp::Highlight { size, threshold } => {
                return write!(f, "h{}@{}", size, threshold);
            }
        };
        match neighborhood {
            Neighborhood::Rect { width, height } => write!(f, "{}{}.{}", code, width, height),
            Neighborhood::Shaped(shape) => match shape.name() {
                Some(name) => write!(f, "{}:{}", code, name),
                None => write!(f, "{}:<{}x{}>", code, shape.width(), shape.height()),
            },
        }
    }
}

/// A parsed morphological sequence
#[derive(Debug, Clone, PartialEq)]
pub struct MorphSequence {
    ops: Vec<MorphOp>,
}

impl MorphSequence {
    /// Parse a sequence string.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSequence`] for malformed text and
    /// [`MorphError::UnsupportedOperation`] for recognized op codes this
    /// library does not implement (`r`, `x`, `b`).
    pub fn parse(sequence: &str) -> MorphResult<Self> {
        if sequence.trim().is_empty() {
            return Err(MorphError::InvalidSequence("empty sequence".to_string()));
        }

        let mut ops = Vec::new();
        for (i, part) in sequence.split('+').enumerate() {
            let op_str: String = part
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_ascii_lowercase();
            if op_str.is_empty() {
                return Err(MorphError::InvalidSequence(format!(
                    "empty operation at position {}",
                    i + 1
                )));
            }
            ops.push(Self::parse_operation(&op_str)?);
        }

        Ok(MorphSequence { ops })
    }

    /// Build a sequence from already constructed operations.
    pub fn from_ops(ops: Vec<MorphOp>) -> Self {
        MorphSequence { ops }
    }

    fn parse_operation(op_str: &str) -> MorphResult<MorphOp> {
        let mut chars = op_str.chars();
        let Some(code) = chars.next() else {
            return Err(MorphError::InvalidSequence("empty operation".to_string()));
        };
        let rest = chars.as_str();

        match code {
            'd' => Ok(MorphOp::Dilate(Self::parse_neighborhood(rest)?)),
            'e' => Ok(MorphOp::Erode(Self::parse_neighborhood(rest)?)),
            'o' => Ok(MorphOp::Open(Self::parse_neighborhood(rest)?)),
            'c' => Ok(MorphOp::Close(Self::parse_neighborhood(rest)?)),
            'g' => Ok(MorphOp::Gradient(Self::parse_neighborhood(rest)?)),
            't' => {
                let mut chars = rest.chars();
                let kind = chars.next();
                let neighborhood = Self::parse_neighborhood(chars.as_str())?;
                match kind {
                    Some('w') => Ok(MorphOp::WhiteHat(neighborhood)),
                    Some('b') => Ok(MorphOp::BlackHat(neighborhood)),
                    _ => Err(MorphError::InvalidSequence(format!(
                        "invalid tophat type in '{}', expected 'w' or 'b'",
                        op_str
                    ))),
                }
            }
            'h' => Self::parse_highlight(rest),
            'r' | 'x' | 'b' => Err(MorphError::UnsupportedOperation(format!(
                "operation '{}' is not supported (rank reduction, expansion and border ops)",
                code
            ))),
            _ => Err(MorphError::InvalidSequence(format!(
                "unknown operation '{}' in '{}'",
                code, op_str
            ))),
        }
    }

    /// Parse `<w>.<h>` or `:<shape>`.
    fn parse_neighborhood(text: &str) -> MorphResult<Neighborhood> {
        match text.strip_prefix(':') {
            Some(name) => Ok(Neighborhood::Shaped(Self::parse_shape(name)?)),
            None => {
                let (width, height) = Self::parse_dimensions(text)?;
                Ok(Neighborhood::rect(width, height))
            }
        }
    }

    /// Parse a predefined shape name like `cross5`.
    fn parse_shape(name: &str) -> MorphResult<Shape> {
        let split = name
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| MorphError::InvalidSequence(format!("shape '{}' has no size", name)))?;
        let (kind_name, size) = name.split_at(split);
        let kind = ShapeKind::from_name(kind_name).ok_or_else(|| {
            MorphError::InvalidSequence(format!("unknown shape '{}'", kind_name))
        })?;
        let size: u32 = size
            .parse()
            .map_err(|_| MorphError::InvalidSequence(format!("invalid shape size in '{}'", name)))?;
        Shape::predefined(kind, size)
    }

    /// Parse dimensions from a string like "3.5" -> (3, 5)
    fn parse_dimensions(dim_str: &str) -> MorphResult<(u32, u32)> {
        let Some((w, h)) = dim_str.split_once('.') else {
            return Err(MorphError::InvalidSequence(format!(
                "invalid dimensions format '{}', expected 'width.height'",
                dim_str
            )));
        };

        let width: u32 = w.parse().map_err(|_| {
            MorphError::InvalidSequence(format!("invalid width '{}' in '{}'", w, dim_str))
        })?;
        let height: u32 = h.parse().map_err(|_| {
            MorphError::InvalidSequence(format!("invalid height '{}' in '{}'", h, dim_str))
        })?;

        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSequence(format!(
                "dimensions must be > 0, got {}x{}",
                width, height
            )));
        }

        Ok((width, height))
    }

    /// Parse `<k>@<t>`.
    fn parse_highlight(text: &str) -> MorphResult<MorphOp> {
        let Some((size, threshold)) = text.split_once('@') else {
            return Err(MorphError::InvalidSequence(format!(
                "highlight '{}' needs a threshold, expected 'h<size>@<threshold>'",
                text
            )));
        };
        let size: u32 = size
            .parse()
            .map_err(|_| MorphError::InvalidSequence(format!("invalid highlight size '{}'", size)))?;
        let threshold: f64 = threshold.parse().map_err(|_| {
            MorphError::InvalidSequence(format!("invalid highlight threshold '{}'", threshold))
        })?;
        if size % 2 == 0 || !threshold.is_finite() {
            return Err(MorphError::InvalidSequence(format!(
                "highlight needs an odd size and a finite threshold, got h{}@{}",
                size, threshold
            )));
        }
        Ok(MorphOp::Highlight { size, threshold })
    }

    /// Get the operations in this sequence
    pub fn ops(&self) -> &[MorphOp] {
        &self.ops
    }

    /// Get the number of operations in the sequence
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Run every operation in order, feeding each result to the next.
    ///
    /// # Errors
    ///
    /// Stops at the first operation that fails and returns its error.
    pub fn apply<T: Pixel>(
        &self,
        m: &Matrix<T>,
        options: &MorphOptions<T>,
    ) -> MorphResult<Matrix<T>> {
        let mut current = m.clone();
        for (i, op) in self.ops.iter().enumerate() {
            trace!("sequence step {}/{}: {}", i + 1, self.ops.len(), op);
            current = apply_op(&current, op, options)?;
        }
        Ok(current)
    }
}

impl fmt::Display for MorphSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

/// Apply a single operation.
///
/// # Errors
///
/// Returns the operator's own error, or
/// [`MorphError::UnsupportedOperation`] when a negative highlight threshold
/// cannot be represented in an unsigned pixel domain.
pub fn apply_op<T: Pixel>(
    m: &Matrix<T>,
    op: &MorphOp,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    match op {
        MorphOp::Dilate(n) => dilate_by(m, n, options),
        MorphOp::Erode(n) => erode_by(m, n, options),
        MorphOp::Open(n) => open_with(m, n, options),
        MorphOp::Close(n) => close_with(m, n, options),
        MorphOp::Gradient(n) => gradient_with(m, n, options),
        MorphOp::WhiteHat(n) => white_hat_with(m, n, options),
        MorphOp::BlackHat(n) => black_hat_with(m, n, options),
        MorphOp::Highlight { size, threshold } => {
            let t = T::from_f64(*threshold);
            if (*threshold < 0.0) != t.is_negative() {
                return Err(MorphError::UnsupportedOperation(format!(
                    "threshold {} has no representation in this pixel domain",
                    threshold
                )));
            }
            highlight_features(m, *size, t, options)
        }
    }
}

/// Parse and run a sequence with default thresholds.
///
/// # Errors
///
/// Returns a parse error or the first failing operation's error.
pub fn morph_sequence<T: Pixel>(m: &Matrix<T>, sequence: &str) -> MorphResult<Matrix<T>> {
    morph_sequence_with(m, sequence, &MorphOptions::default())
}

/// Parse and run a sequence.
///
/// # Errors
///
/// Returns a parse error or the first failing operation's error.
pub fn morph_sequence_with<T: Pixel>(
    m: &Matrix<T>,
    sequence: &str,
    options: &MorphOptions<T>,
) -> MorphResult<Matrix<T>> {
    MorphSequence::parse(sequence)?.apply(m, options)
}
