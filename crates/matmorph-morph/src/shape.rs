//! Structuring elements
//!
//! A [`Shape`] is a boolean mask plus an anchor ("pixel") point. The anchor
//! is the mask position that lines up with the output pixel during a scan;
//! it does not have to be the geometric center.
//!
//! Predefined shapes are built for odd sizes around a centered anchor:
//!
//! ```text
//!   square 3     cross 5        diamond 5      x 5
//!   x x x        . . x . .      . . x . .      x . . . x
//!   x x x        . . x . .      . x x x .      . x . x .
//!   x x x        x x x x x      x x x x x      . . x . .
//!                . . x . .      . x x x .      . x . x .
//!                . . x . .      . . x . .      x . . . x
//! ```

use crate::{MorphError, MorphResult};
use matmorph_core::Matrix;

/// Largest size accepted by [`Shape::predefined`].
///
/// Predefined masks are allocated up front, before any image is seen, so
/// sizes are capped here rather than against the image.
pub const MAX_PREDEFINED_SIZE: u32 = 255;

/// Family of predefined structuring elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Every position set
    Square,
    /// Center row and center column
    Cross,
    /// Positions within city-block distance `k / 2` of the center
    Diamond,
    /// Both diagonals
    X,
}

impl ShapeKind {
    /// Lowercase name used in sequence strings
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Cross => "cross",
            ShapeKind::Diamond => "diamond",
            ShapeKind::X => "x",
        }
    }

    /// Look up a kind by its sequence-string name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "square" => Some(ShapeKind::Square),
            "cross" => Some(ShapeKind::Cross),
            "diamond" => Some(ShapeKind::Diamond),
            "x" => Some(ShapeKind::X),
            _ => None,
        }
    }

    fn contains(self, dx: i64, dy: i64, radius: i64) -> bool {
        match self {
            ShapeKind::Square => true,
            ShapeKind::Cross => dx == 0 || dy == 0,
            ShapeKind::Diamond => dx.abs() + dy.abs() <= radius,
            ShapeKind::X => dx.abs() == dy.abs(),
        }
    }
}

/// Structuring element: a boolean mask with an anchor point
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    mask: Matrix<bool>,
    pixel_x: u32,
    pixel_y: u32,
    name: Option<String>,
}

impl Shape {
    /// Create a shape from a mask and anchor.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidShape`] if the anchor lies outside the
    /// mask.
    pub fn new(mask: Matrix<bool>, pixel_x: u32, pixel_y: u32) -> MorphResult<Self> {
        if pixel_x >= mask.width() || pixel_y >= mask.height() {
            return Err(MorphError::InvalidShape(format!(
                "anchor ({}, {}) outside {}x{} mask",
                pixel_x,
                pixel_y,
                mask.width(),
                mask.height()
            )));
        }
        Ok(Shape {
            mask,
            pixel_x,
            pixel_y,
            name: None,
        })
    }

    /// Create a shape anchored at the mask center `(w / 2, h / 2)`.
    pub fn centered(mask: Matrix<bool>) -> Self {
        let (w, h) = mask.dimensions();
        Shape {
            mask,
            pixel_x: w / 2,
            pixel_y: h / 2,
            name: None,
        }
    }

    /// Create a shape from a text pattern.
    ///
    /// Each non-blank line is one mask row: `x`, `X` or `1` set a position,
    /// `.`, `o` or `0` clear it; spaces are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidShape`] for an empty or ragged pattern,
    /// an unknown character, or an anchor outside the mask.
    ///
    /// # Examples
    ///
    /// ```
    /// use matmorph_morph::Shape;
    ///
    /// let corner = Shape::from_pattern("x x\nx .", 0, 0).unwrap();
    /// assert_eq!(corner.hit_count(), 3);
    /// ```
    pub fn from_pattern(pattern: &str, pixel_x: u32, pixel_y: u32) -> MorphResult<Self> {
        let mut rows: Vec<Vec<bool>> = Vec::new();
        for line in pattern.lines() {
            let mut row = Vec::new();
            for c in line.chars().filter(|c| !c.is_whitespace()) {
                row.push(match c {
                    'x' | 'X' | '1' => true,
                    '.' | 'o' | '0' => false,
                    other => {
                        return Err(MorphError::InvalidShape(format!(
                            "unexpected character '{}' in pattern",
                            other
                        )));
                    }
                });
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }

        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MorphError::InvalidShape("empty pattern".to_string()));
        }
        if rows.iter().any(|r| r.len() != width) {
            return Err(MorphError::InvalidShape(
                "pattern rows differ in length".to_string(),
            ));
        }

        let height = rows.len();
        let data = rows.into_iter().flatten().collect();
        let mask = Matrix::from_data(width as u32, height as u32, data)?;
        Shape::new(mask, pixel_x, pixel_y)
    }

    /// Create a predefined `size x size` shape with a centered anchor.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidShape`] unless `size` is odd and at
    /// most [`MAX_PREDEFINED_SIZE`].
    pub fn predefined(kind: ShapeKind, size: u32) -> MorphResult<Self> {
        if size % 2 == 0 {
            return Err(MorphError::InvalidShape(format!(
                "{} size must be odd, got {}",
                kind.name(),
                size
            )));
        }
        if size > MAX_PREDEFINED_SIZE {
            return Err(MorphError::InvalidShape(format!(
                "{} size {} exceeds {}",
                kind.name(),
                size,
                MAX_PREDEFINED_SIZE
            )));
        }
        Ok(Self::build(kind, size))
    }

    /// Build an odd-sized predefined shape.
    fn build(kind: ShapeKind, size: u32) -> Self {
        let radius = i64::from(size / 2);
        let mask = Matrix::from_fn(size, size, |x, y| {
            kind.contains(i64::from(x) - radius, i64::from(y) - radius, radius)
        });
        let mut shape = Shape::centered(mask);
        shape.name = Some(format!("{}{}", kind.name(), size));
        shape
    }

    /// Flat `size x size` square
    pub fn square(size: u32) -> MorphResult<Self> {
        Self::predefined(ShapeKind::Square, size)
    }

    /// `size x size` cross (`+`)
    pub fn cross(size: u32) -> MorphResult<Self> {
        Self::predefined(ShapeKind::Cross, size)
    }

    /// `size x size` diamond
    pub fn diamond(size: u32) -> MorphResult<Self> {
        Self::predefined(ShapeKind::Diamond, size)
    }

    /// `size x size` diagonal cross (`X`)
    pub fn x(size: u32) -> MorphResult<Self> {
        Self::predefined(ShapeKind::X, size)
    }

    pub fn square_3x3() -> Self {
        Self::build(ShapeKind::Square, 3)
    }

    pub fn square_5x5() -> Self {
        Self::build(ShapeKind::Square, 5)
    }

    pub fn square_7x7() -> Self {
        Self::build(ShapeKind::Square, 7)
    }

    pub fn cross_3x3() -> Self {
        Self::build(ShapeKind::Cross, 3)
    }

    pub fn cross_5x5() -> Self {
        Self::build(ShapeKind::Cross, 5)
    }

    pub fn cross_7x7() -> Self {
        Self::build(ShapeKind::Cross, 7)
    }

    pub fn diamond_3x3() -> Self {
        Self::build(ShapeKind::Diamond, 3)
    }

    pub fn diamond_5x5() -> Self {
        Self::build(ShapeKind::Diamond, 5)
    }

    pub fn diamond_7x7() -> Self {
        Self::build(ShapeKind::Diamond, 7)
    }

    pub fn x_3x3() -> Self {
        Self::build(ShapeKind::X, 3)
    }

    pub fn x_5x5() -> Self {
        Self::build(ShapeKind::X, 5)
    }

    pub fn x_7x7() -> Self {
        Self::build(ShapeKind::X, 7)
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.mask.height()
    }

    /// Anchor column
    #[inline]
    pub fn pixel_x(&self) -> u32 {
        self.pixel_x
    }

    /// Anchor row
    #[inline]
    pub fn pixel_y(&self) -> u32 {
        self.pixel_y
    }

    /// The boolean mask
    pub fn mask(&self) -> &Matrix<bool> {
        &self.mask
    }

    /// Get the name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Mask value at `(x, y)`, or `None` outside the mask
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        self.mask.get_pixel(x, y).ok()
    }

    /// Count the set positions
    pub fn hit_count(&self) -> usize {
        self.mask.iter().filter(|&on| on).count()
    }

    /// Offsets of the set positions relative to the anchor
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let px = self.pixel_x as i32;
        let py = self.pixel_y as i32;
        let width = self.width();
        self.mask
            .iter()
            .enumerate()
            .filter(|&(_, on)| on)
            .map(move |(idx, _)| {
                let x = (idx as u32 % width) as i32;
                let y = (idx as u32 / width) as i32;
                (x - px, y - py)
            })
    }

    /// The 180-degree rotated shape, with the anchor rotated along.
    pub fn reflect(&self) -> Self {
        let (w, h) = self.mask.dimensions();
        let src = self.mask.view();
        let mask = Matrix::from_fn(w, h, |x, y| src.row(h - 1 - y)[(w - 1 - x) as usize]);
        Shape {
            mask,
            pixel_x: w - 1 - self.pixel_x,
            pixel_y: h - 1 - self.pixel_y,
            name: self.name.as_ref().map(|n| format!("{}_reflected", n)),
        }
    }
}
