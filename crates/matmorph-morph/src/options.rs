//! Operator configuration
//!
//! Thresholds and neighborhoods are plain values with sensible defaults;
//! nothing is read from files or the environment.

use crate::shape::Shape;
use matmorph_core::Pixel;

/// Value clamps applied by dilate and erode
///
/// Erosion never produces a value below `min_threshold` and dilation never
/// produces one above `max_threshold`. A pixel already at or past the
/// relevant bound is written without scanning its neighborhood.
///
/// The default floor is zero, so eroding negative values raises them to
/// zero. Matrices with negative values need a lower floor, for example
/// `MorphOptions::default().with_min_threshold(f32::MIN)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphOptions<T> {
    /// Floor for erosion results
    pub min_threshold: T,
    /// Ceiling for dilation results
    pub max_threshold: T,
}

impl<T: Pixel> Default for MorphOptions<T> {
    fn default() -> Self {
        MorphOptions {
            min_threshold: T::ZERO,
            max_threshold: T::MAX_BOUND,
        }
    }
}

impl<T: Pixel> MorphOptions<T> {
    /// Set the erosion floor
    pub fn with_min_threshold(mut self, min_threshold: T) -> Self {
        self.min_threshold = min_threshold;
        self
    }

    /// Set the dilation ceiling
    pub fn with_max_threshold(mut self, max_threshold: T) -> Self {
        self.max_threshold = max_threshold;
        self
    }
}

/// Neighborhood of a morphological operator
#[derive(Debug, Clone, PartialEq)]
pub enum Neighborhood {
    /// Flat `width x height` rectangle centered on the pixel
    Rect { width: u32, height: u32 },
    /// Structuring element with its own anchor
    Shaped(Shape),
}

impl Neighborhood {
    /// Flat rectangle
    pub fn rect(width: u32, height: u32) -> Self {
        Neighborhood::Rect { width, height }
    }

    /// Size as `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Neighborhood::Rect { width, height } => (*width, *height),
            Neighborhood::Shaped(shape) => (shape.width(), shape.height()),
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Neighborhood::rect(3, 3)
    }
}

impl From<Shape> for Neighborhood {
    fn from(shape: Shape) -> Self {
        Neighborhood::Shaped(shape)
    }
}

impl From<(u32, u32)> for Neighborhood {
    fn from((width, height): (u32, u32)) -> Self {
        Neighborhood::rect(width, height)
    }
}
