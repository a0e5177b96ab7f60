//! Bitmap surface backed by plotters
//!
//! Renders the composed figure to an image file through a plotters
//! [`BitMapBackend`]. Cells are plotters drawing areas produced by
//! `split_evenly`, which yields them in row-major order; panels can build
//! any plotters chart on top of the cell they receive.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use crate::layout::GridShape;
use crate::surface::Surface;
use crate::{PanelGridError, Result};

/// One grid cell of a [`BitmapSurface`]
pub type BitmapCell<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// A plotters bitmap backend writing to an image file
///
/// The image is sized at partition time from the planned grid and cell
/// size, and written to `path` when the figure is presented. Unused cells
/// are left with the background fill.
///
/// ```rust,ignore
/// use panelgrid::{BitmapSurface, Figure};
///
/// let mut surface = BitmapSurface::new("figure.png");
/// figure.render(&mut surface)?;
/// ```
pub struct BitmapSurface<'a> {
    path: &'a Path,
    root: Option<BitmapCell<'a>>,
}

impl<'a> BitmapSurface<'a> {
    /// Create a surface that will write the composed figure to `path`
    pub fn new<P: AsRef<Path> + ?Sized>(path: &'a P) -> Self {
        Self {
            path: path.as_ref(),
            root: None,
        }
    }

    fn root(&self) -> Result<&BitmapCell<'a>> {
        self.root.as_ref().ok_or_else(|| {
            PanelGridError::Surface("surface used before partition".to_string())
        })
    }
}

impl<'a> Surface for BitmapSurface<'a> {
    type Cell = BitmapCell<'a>;

    fn partition(&mut self, shape: GridShape, width: u32, height: u32) -> Result<Vec<Self::Cell>> {
        let root = BitMapBackend::new(self.path, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PanelGridError::Surface(format!("Failed to fill background: {}", e)))?;
        let cells = root.split_evenly((shape.rows, shape.cols));
        self.root = Some(root);
        Ok(cells)
    }

    fn discard(&mut self, _cell: Self::Cell) -> Result<()> {
        // unused regions keep the background fill
        Ok(())
    }

    fn set_heading(&mut self, heading: &str) -> Result<()> {
        let root = self.root()?;
        let (width, _) = root.dim_in_pixel();
        let style = TextStyle::from(("sans-serif", 32).into_font())
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw_text(heading, &style, (width as i32 / 2, 8))
            .map_err(|e| PanelGridError::Surface(format!("Failed to draw heading: {}", e)))
    }

    fn finish_layout(&mut self) -> Result<()> {
        // cells are fixed even partitions; there is nothing to reflow
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.root()?
            .present()
            .map_err(|e| PanelGridError::Surface(format!("Failed to write figure: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Figure, PanelParams};
    use tempfile::tempdir;

    fn fill_cell(cell: &mut BitmapCell<'_>, params: &PanelParams) -> Result<()> {
        let color = match params.get_str("color") {
            Some("red") => RED,
            _ => BLUE,
        };
        cell.margin(5, 5, 5, 5)
            .fill(&color)
            .map_err(|e| PanelGridError::Surface(e.to_string()))
    }

    #[test]
    fn test_renders_figure_to_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.png");

        let mut figure = Figure::new().with_title("Smoke test");
        for _ in 0..3 {
            figure.add_panel(fill_cell);
        }

        let mut surface = BitmapSurface::new(&path);
        figure.render(&mut surface).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0, "present should write the image file");
    }

    #[test]
    fn test_partition_yields_row_major_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cells.png");

        let mut surface = BitmapSurface::new(&path);
        let cells = surface.partition(GridShape::new(2, 3), 600, 400).unwrap();
        assert_eq!(cells.len(), 6);

        // second cell sits to the right of the first, fourth starts row two
        let first = cells[0].get_base_pixel();
        let second = cells[1].get_base_pixel();
        let fourth = cells[3].get_base_pixel();
        assert_eq!(first, (0, 0));
        assert!(second.0 > first.0 && second.1 == first.1);
        assert!(fourth.1 > first.1 && fourth.0 == first.0);
    }
}
