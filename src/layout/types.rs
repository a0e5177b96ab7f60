//! Layout types for panel grid figures
//!
//! This module defines the aspect-ratio input and grid-shape output of the
//! layout planner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target proportion for an arranged panel grid
///
/// The `vertical` component biases the row dimension and the `horizontal`
/// component biases the column dimension: a 3:1 ratio produces a tall,
/// narrow grid, while 1:3 produces a short, wide one.
///
/// Both components must be strictly positive; [`arrange`](super::arrange)
/// rejects a zero component with
/// [`PanelGridError::InvalidRatio`](crate::PanelGridError::InvalidRatio).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    /// Proportion assigned to the vertical (row) dimension
    pub vertical: u32,
    /// Proportion assigned to the horizontal (column) dimension
    pub horizontal: u32,
}

impl AspectRatio {
    /// The 1:1 ratio, yielding a near-square grid
    pub const SQUARE: AspectRatio = AspectRatio {
        vertical: 1,
        horizontal: 1,
    };

    /// Create a ratio from its vertical and horizontal components
    pub fn new(vertical: u32, horizontal: u32) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Normalized aspect factor `min/max`, always in `(0, 1]`
    ///
    /// Only meaningful for valid ratios; callers must check for zero
    /// components first.
    pub(crate) fn factor(&self) -> f64 {
        let min = self.vertical.min(self.horizontal);
        let max = self.vertical.max(self.horizontal);
        f64::from(min) / f64::from(max)
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.vertical, self.horizontal)
    }
}

/// A planned grid of panel cells, `rows` by `cols`
///
/// Produced by [`arrange`](super::arrange) or supplied explicitly via
/// [`Figure::with_shape`](crate::Figure::with_shape). The planner offers no
/// capacity guarantee; [`Figure::render`](crate::Figure::render) validates
/// `rows * cols >= n` before any cell is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
}

impl GridShape {
    /// Create a shape from explicit row and column counts
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the grid has room for `n` panels
    pub fn holds(&self, n: usize) -> bool {
        self.cell_count() >= n
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_default_is_square() {
        assert_eq!(AspectRatio::default(), AspectRatio::SQUARE);
    }

    #[test]
    fn test_ratio_factor_normalized() {
        assert_eq!(AspectRatio::new(4, 3).factor(), 0.75);
        assert_eq!(AspectRatio::new(3, 4).factor(), 0.75);
        assert_eq!(AspectRatio::SQUARE.factor(), 1.0);
    }

    #[test]
    fn test_ratio_display() {
        assert_eq!(AspectRatio::new(16, 9).to_string(), "16:9");
    }

    #[test]
    fn test_shape_capacity() {
        let shape = GridShape::new(2, 3);
        assert_eq!(shape.cell_count(), 6);
        assert!(shape.holds(6));
        assert!(shape.holds(0));
        assert!(!shape.holds(7));
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(GridShape::new(2, 3).to_string(), "2x3");
    }
}
