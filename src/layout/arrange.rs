//! Grid arrangement planner
//!
//! Maps a panel count and a target aspect ratio to a concrete
//! [`GridShape`]. The computation is pure: no allocation decisions, no
//! backend interaction, and no capacity promise beyond what the arithmetic
//! happens to give (the orchestrator re-validates capacity on its own).

use super::{AspectRatio, GridShape};
use crate::{PanelGridError, Result};

/// Compute the grid shape for `n` panels at the given aspect ratio
///
/// The normalized aspect factor `r = min/max` shrinks one grid dimension to
/// `ceil(r * sqrt(n))`; the other dimension spreads to `ceil(n / shrunk)` to
/// take up the remaining panels. Which dimension is shrunk follows the
/// ratio's orientation: a ratio with the larger vertical component shrinks
/// the column count (tall grid), the opposite shrinks the row count (wide
/// grid).
///
/// # Errors
///
/// [`PanelGridError::InvalidRatio`] if either ratio component is zero, and
/// [`PanelGridError::EmptyLayout`] for `n == 0`; there is no arrangement of
/// nothing.
///
/// # Example
///
/// ```
/// use panelgrid::{arrange, AspectRatio, GridShape};
///
/// let shape = arrange(9, AspectRatio::new(4, 3)).unwrap();
/// assert_eq!(shape, GridShape::new(3, 3));
/// ```
pub fn arrange(n: usize, ratio: AspectRatio) -> Result<GridShape> {
    if ratio.vertical == 0 || ratio.horizontal == 0 {
        return Err(PanelGridError::InvalidRatio(ratio));
    }
    if n == 0 {
        return Err(PanelGridError::EmptyLayout);
    }

    let shrunk = (ratio.factor() * (n as f64).sqrt()).ceil() as usize;
    let shrunk = shrunk.max(1);
    let spread = n.div_ceil(shrunk);

    Ok(if ratio.vertical < ratio.horizontal {
        GridShape {
            rows: shrunk,
            cols: spread,
        }
    } else {
        GridShape {
            rows: spread,
            cols: shrunk,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_panel() {
        assert_eq!(
            arrange(1, AspectRatio::SQUARE).unwrap(),
            GridShape::new(1, 1)
        );
    }

    #[test]
    fn test_five_panels_square() {
        // cols = ceil(sqrt(5)) = 3, rows = ceil(5/3) = 2
        assert_eq!(
            arrange(5, AspectRatio::SQUARE).unwrap(),
            GridShape::new(2, 3)
        );
    }

    #[test]
    fn test_nine_panels_four_by_three() {
        // factor 0.75, shrunk = ceil(0.75 * 3) = 3, spread = 3
        assert_eq!(
            arrange(9, AspectRatio::new(4, 3)).unwrap(),
            GridShape::new(3, 3)
        );
    }

    #[test]
    fn test_tall_ratio_stacks_rows() {
        assert_eq!(
            arrange(5, AspectRatio::new(3, 1)).unwrap(),
            GridShape::new(5, 1)
        );
    }

    #[test]
    fn test_wide_ratio_spreads_cols() {
        assert_eq!(
            arrange(5, AspectRatio::new(1, 3)).unwrap(),
            GridShape::new(1, 5)
        );
    }

    #[test]
    fn test_zero_ratio_component_rejected() {
        let err = arrange(4, AspectRatio::new(0, 3)).unwrap_err();
        assert!(matches!(err, PanelGridError::InvalidRatio(_)));

        let err = arrange(4, AspectRatio::new(3, 0)).unwrap_err();
        assert!(matches!(err, PanelGridError::InvalidRatio(_)));
    }

    #[test]
    fn test_zero_panels_rejected() {
        let err = arrange(0, AspectRatio::SQUARE).unwrap_err();
        assert!(matches!(err, PanelGridError::EmptyLayout));
    }

    proptest! {
        #[test]
        fn square_ratio_matches_closed_form(n in 1usize..500) {
            let shape = arrange(n, AspectRatio::SQUARE).unwrap();
            let cols = (n as f64).sqrt().ceil() as usize;
            let rows = n.div_ceil(cols);
            prop_assert_eq!(shape, GridShape::new(rows, cols));
            prop_assert!(shape.holds(n));
        }

        #[test]
        fn dimensions_always_positive(n in 1usize..500, v in 1u32..16, h in 1u32..16) {
            let shape = arrange(n, AspectRatio::new(v, h)).unwrap();
            prop_assert!(shape.rows >= 1);
            prop_assert!(shape.cols >= 1);
        }

        #[test]
        fn orientation_symmetry(n in 1usize..300, v in 1u32..16, h in 1u32..16) {
            prop_assume!(v != h);
            let forward = arrange(n, AspectRatio::new(v, h)).unwrap();
            let mirrored = arrange(n, AspectRatio::new(h, v)).unwrap();
            prop_assert_eq!(forward.rows, mirrored.cols);
            prop_assert_eq!(forward.cols, mirrored.rows);
        }
    }
}
