//! Rendering backend seam
//!
//! A [`Surface`] is the external collaborator that owns the actual drawing
//! machinery. This crate never inspects a backend's internals: it asks for a
//! grid partition, hands the resulting cells to panels, discards the unused
//! ones, and tells the surface to finish and present itself.
//!
//! The `plotters` cargo feature provides [`BitmapSurface`], a reference
//! implementation over a plotters bitmap backend.

#[cfg(feature = "plotters")]
mod bitmap;

#[cfg(feature = "plotters")]
pub use bitmap::{BitmapCell, BitmapSurface};

use crate::layout::GridShape;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Per-cell dimensions in backend device units
///
/// The total surface size is the cell size scaled by the grid shape. The
/// default of 500x400 suits raster backends measured in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSize {
    /// Cell width in device units
    pub width: u32,
    /// Cell height in device units
    pub height: u32,
}

impl CellSize {
    /// Create a cell size from explicit dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total figure dimensions for a grid of cells this size
    pub fn figure_size(&self, shape: GridShape) -> (u32, u32) {
        (
            shape.cols as u32 * self.width,
            shape.rows as u32 * self.height,
        )
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 500,
            height: 400,
        }
    }
}

/// A drawing surface that can be partitioned into a grid of cells
///
/// One `render` call owns its surface exclusively for the duration of the
/// call; the surface is partitioned once, drawn into, finished, and
/// presented. Implementations decide what a cell is (a sub-area, a window
/// region, a recording stub) and what presentation means.
pub trait Surface {
    /// Addressable region of the surface bound to at most one panel
    type Cell;

    /// Allocate a `width` by `height` surface partitioned into
    /// `shape.rows * shape.cols` cells, returned in row-major order
    fn partition(&mut self, shape: GridShape, width: u32, height: u32) -> Result<Vec<Self::Cell>>;

    /// Remove an unused cell from the visible figure
    fn discard(&mut self, cell: Self::Cell) -> Result<()>;

    /// Attach a figure-level heading
    fn set_heading(&mut self, heading: &str) -> Result<()>;

    /// Finalize the layout before presentation
    fn finish_layout(&mut self) -> Result<()>;

    /// Display or emit the composed figure
    fn present(&mut self) -> Result<()>;
}
