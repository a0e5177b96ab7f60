//! Figure composition and panel dispatch
//!
//! The [`Figure`] builder collects panels and layout settings, then `render`
//! drives the whole composition: plan (or accept) a grid shape, validate
//! capacity, partition the surface, dispatch each panel to its cell in
//! row-major order, discard unused cells, and present.
//!
//! # Example
//!
//! ```rust,ignore
//! use panelgrid::{AspectRatio, BitmapSurface, Figure, PanelParams};
//!
//! let mut figure = Figure::new()
//!     .with_title("Channel diagnostics")
//!     .with_ratio(AspectRatio::new(3, 4));
//! figure.add_panel(draw_histogram);
//! figure.add_panel(draw_spectrum);
//!
//! let mut surface = BitmapSurface::new("diagnostics.png");
//! figure.render(&mut surface)?;
//! ```

use tracing::{debug, trace};

use crate::layout::{arrange, AspectRatio, GridShape};
use crate::panel::{Panel, PanelParams};
use crate::surface::{CellSize, Surface};
use crate::{PanelGridError, Result};

/// A figure composed of panels arranged on a grid
///
/// `C` is the cell type of the surface the figure will be rendered to.
/// Panels are invoked exactly once, in the order they were added, each
/// bound to the grid cell with the same row-major index.
pub struct Figure<C> {
    panels: Vec<Box<dyn Panel<C>>>,
    params: Option<Vec<PanelParams>>,
    title: Option<String>,
    ratio: AspectRatio,
    cell_size: CellSize,
    shape: Option<GridShape>,
}

impl<C> Figure<C> {
    /// Create an empty figure with a square target ratio
    pub fn new() -> Self {
        Self {
            panels: Vec::new(),
            params: None,
            title: None,
            ratio: AspectRatio::SQUARE,
            cell_size: CellSize::default(),
            shape: None,
        }
    }

    /// Add a panel, returning its position index
    pub fn add_panel<P>(&mut self, panel: P) -> usize
    where
        P: Panel<C> + 'static,
    {
        self.panels.push(Box::new(panel));
        self.panels.len() - 1
    }

    /// Set the figure-level heading
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the target aspect ratio used when planning the grid
    pub fn with_ratio(mut self, ratio: AspectRatio) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set the per-cell dimensions
    pub fn with_cell_size(mut self, cell_size: CellSize) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Pin the grid shape explicitly instead of planning it
    ///
    /// The shape must still hold every panel; `render` validates capacity
    /// the same way it does for a planned shape.
    pub fn with_shape(mut self, shape: GridShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Supply one parameter set per panel, positionally aligned
    ///
    /// The sequence length must equal the panel count at render time; a
    /// mismatch is rejected, never truncated or padded.
    pub fn with_params(mut self, params: Vec<PanelParams>) -> Self {
        self.params = Some(params);
        self
    }

    /// Number of panels added so far
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the figure has no panels
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Compose the figure onto `surface` and present it
    ///
    /// Either the full grid renders and presents, or the call fails before
    /// presentation; there is no partial-success state. Panel errors
    /// propagate verbatim and abort the remaining panels.
    ///
    /// # Errors
    ///
    /// [`PanelGridError::InsufficientCapacity`] when the grid cannot hold
    /// every panel (checked before any cell is allocated),
    /// [`PanelGridError::ParamCountMismatch`] when a supplied parameter
    /// sequence does not match the panel count, and whatever the planner,
    /// the surface, or an individual panel raises.
    pub fn render<S>(self, surface: &mut S) -> Result<()>
    where
        S: Surface<Cell = C>,
    {
        let n = self.panels.len();
        let shape = match self.shape {
            Some(shape) => shape,
            // an empty figure degenerates to a single discarded cell
            None if n == 0 => GridShape::new(1, 1),
            None => arrange(n, self.ratio)?,
        };

        if !shape.holds(n) {
            return Err(PanelGridError::InsufficientCapacity { shape, required: n });
        }

        let params = match self.params {
            Some(params) if params.len() != n => {
                return Err(PanelGridError::ParamCountMismatch {
                    expected: n,
                    found: params.len(),
                });
            }
            Some(params) => params,
            None => vec![PanelParams::new(); n],
        };

        let (width, height) = self.cell_size.figure_size(shape);
        debug!(
            rows = shape.rows,
            cols = shape.cols,
            panels = n,
            width,
            height,
            "partitioning figure surface"
        );

        let cells = surface.partition(shape, width, height)?;
        if cells.len() != shape.cell_count() {
            return Err(PanelGridError::Surface(format!(
                "backend produced {} cells for shape {}",
                cells.len(),
                shape
            )));
        }

        let mut cells = cells.into_iter();
        for (panel, params) in self.panels.iter().zip(&params) {
            // capacity was validated against the cell count above
            let Some(mut cell) = cells.next() else { break };
            panel.draw(&mut cell, params)?;
        }

        let mut discarded = 0usize;
        for cell in cells {
            surface.discard(cell)?;
            discarded += 1;
        }
        trace!(discarded, "discarded unused cells");

        if let Some(title) = &self.title {
            surface.set_heading(title)?;
        }

        surface.finish_layout()?;
        surface.present()
    }
}

impl<C> Default for Figure<C> {
    fn default() -> Self {
        Self::new()
    }
}
