//! Panel drawing capability
//!
//! A panel is an opaque unit of drawing behavior: something that knows how
//! to render itself into one cell of a composed figure, given its named
//! parameters. Panels carry no state owned by this crate; they are created
//! by the caller, invoked exactly once during [`Figure::render`], and
//! dropped with the figure.
//!
//! [`Figure::render`]: crate::Figure::render

mod params;

pub use params::{PanelParams, ParamValue};

use crate::Result;

/// A drawing callback bound to one grid cell
///
/// `C` is the backend's cell type (see [`Surface::Cell`]). Side effects must
/// be confined to the given cell. Errors are propagated verbatim to the
/// `render` caller and abort the remainder of the figure.
///
/// Any `Fn(&mut C, &PanelParams) -> Result<()>` closure is a panel:
///
/// ```
/// use panelgrid::{Panel, PanelParams};
///
/// let panel = |cell: &mut String, params: &PanelParams| {
///     cell.push_str(params.get_str("label").unwrap_or("unnamed"));
///     Ok(())
/// };
/// let mut cell = String::new();
/// panel.draw(&mut cell, &PanelParams::new()).unwrap();
/// assert_eq!(cell, "unnamed");
/// ```
///
/// [`Surface::Cell`]: crate::Surface::Cell
pub trait Panel<C> {
    /// Draw this panel into `cell` using the supplied parameters
    fn draw(&self, cell: &mut C, params: &PanelParams) -> Result<()>;
}

impl<C, F> Panel<C> for F
where
    F: Fn(&mut C, &PanelParams) -> Result<()>,
{
    fn draw(&self, cell: &mut C, params: &PanelParams) -> Result<()> {
        self(cell, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_panel() {
        let panel = |cell: &mut Vec<u32>, _params: &PanelParams| {
            cell.push(7);
            Ok(())
        };

        let mut cell = Vec::new();
        panel.draw(&mut cell, &PanelParams::new()).unwrap();
        assert_eq!(cell, vec![7]);
    }

    #[test]
    fn test_panel_error_surfaces() {
        let panel = |_cell: &mut (), _params: &PanelParams| {
            Err(crate::PanelGridError::Surface("out of ink".to_string()))
        };

        let err = panel.draw(&mut (), &PanelParams::new()).unwrap_err();
        assert!(err.to_string().contains("out of ink"));
    }
}
