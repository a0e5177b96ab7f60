//! panelgrid - automatic grid composition for independently-drawn plot panels
//!
//! Callers bring N "draw yourself" units (a histogram here, an image there,
//! a diagram somewhere else); panelgrid tiles them into a rows-by-columns
//! figure approximating a requested aspect ratio, attaches a shared heading,
//! and hands each unit its own cell and parameter set.
//!
//! # Architecture
//!
//! - [`layout`] - the pure planner: panel count + aspect ratio -> grid shape
//! - [`panel`] - the drawing capability ([`Panel`]) and its parameters
//! - [`surface`] - the rendering-backend seam ([`Surface`]), plus a plotters
//!   bitmap implementation behind the `plotters` feature
//! - [`figure`] - the orchestrator: validates capacity, dispatches panels to
//!   cells in row-major order, discards unused cells, presents the figure
//!
//! The planner makes no capacity promise; [`Figure::render`] independently
//! validates `rows * cols >= n` before any cell is allocated. Either the
//! full grid renders and presents, or the call fails before presentation.
//!
//! # Example
//!
//! ```rust,ignore
//! use panelgrid::{AspectRatio, BitmapSurface, Figure, PanelParams};
//!
//! let mut figure = Figure::new()
//!     .with_title("Run 42 diagnostics")
//!     .with_ratio(AspectRatio::new(3, 4))
//!     .with_params(vec![
//!         PanelParams::new().with("label", "temperature"),
//!         PanelParams::new().with("label", "pressure"),
//!     ]);
//! figure.add_panel(draw_series);
//! figure.add_panel(draw_series);
//!
//! let mut surface = BitmapSurface::new("diagnostics.png");
//! figure.render(&mut surface)?;
//! ```

use thiserror::Error;

pub mod figure;
pub mod layout;
pub mod panel;
pub mod surface;

pub use figure::Figure;
pub use layout::{arrange, AspectRatio, GridShape};
pub use panel::{Panel, PanelParams, ParamValue};
pub use surface::{CellSize, Surface};

#[cfg(feature = "plotters")]
pub use surface::{BitmapCell, BitmapSurface};

/// Errors raised while planning or composing a panel grid
#[derive(Error, Debug)]
pub enum PanelGridError {
    /// A ratio component was zero; a zero-area target is meaningless
    #[error("invalid aspect ratio {0}: both components must be positive")]
    InvalidRatio(AspectRatio),

    /// The planner was asked to arrange zero panels
    #[error("cannot arrange an empty set of panels")]
    EmptyLayout,

    /// The grid cannot hold every panel; nothing was rendered
    #[error("insufficient grid capacity: grid {shape} cannot hold {required} panels")]
    InsufficientCapacity {
        /// The shape the grid was planned (or pinned) to
        shape: GridShape,
        /// The number of panels that had to fit
        required: usize,
    },

    /// The parameter-set sequence does not line up with the panels
    #[error("parameter sets do not match panels: expected {expected}, found {found}")]
    ParamCountMismatch { expected: usize, found: usize },

    /// A rendering backend failure surfaced at the `Surface` seam
    #[error("surface error: {0}")]
    Surface(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, PanelGridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_diagnostics() {
        let err = PanelGridError::InsufficientCapacity {
            shape: GridShape::new(2, 2),
            required: 5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient grid capacity: grid 2x2 cannot hold 5 panels"
        );

        let err = PanelGridError::InvalidRatio(AspectRatio::new(0, 3));
        assert!(err.to_string().contains("0:3"));
    }
}
