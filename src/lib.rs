//! This crate partitions a rectangular drawing surface into a grid of equally
//! sized cells, with an optional header row and header column, and dispatches
//! draw and pointer events for those cells to registered handlers.
//!
//! The grid does no drawing of its own. Each frame the host calls
//! [`Grid::draw`], which fires `beforeDraw`, one draw event per cell in
//! column-major order and then `afterDraw`; pointer events forwarded through
//! [`Grid::mouse_clicked`], [`Grid::mouse_pressed`], [`Grid::mouse_released`]
//! and [`Grid::mouse_moved`] are resolved to cells and fired as
//! `mouseClicked`, `mousePressed`, `mouseReleased`, `mouseIn` and `mouseOut`.
//!
//! # Example
//!
//! ```
//! use sketchgrid::{Grid, Rect};
//! use std::{cell::RefCell, rc::Rc};
//!
//! let highlighted = Rc::new(RefCell::new(None));
//! let (enter, leave) = (Rc::clone(&highlighted), Rc::clone(&highlighted));
//!
//! let mut grid = Grid::with_headers(6, 6, Rect::new(0.0, 0.0, 420.0, 420.0), true, true).unwrap();
//! grid.on_draw(|col, row, bounds| {
//!         if col == -1 || row == -1 {
//!             // header cell
//!         }
//!         let _ = bounds.center();
//!     })
//!     .on_mouse_in(move |col, row| *enter.borrow_mut() = Some((col, row)))
//!     .on_mouse_out(move |_, _| *leave.borrow_mut() = None);
//!
//! grid.mouse_moved(130.0, 70.0);
//! assert_eq!(*highlighted.borrow(), Some((1, 0)));
//! grid.draw();
//! ```

/// Helpers for writing a rendered grid to disk while debugging layouts.
///
/// # Example
/// ```no_run
/// use sketchgrid::{drawing::GridDrawingConfig, Grid, Rect};
///
/// let grid = Grid::with_headers(6, 6, Rect::new(0.0, 0.0, 420.0, 420.0), true, true).unwrap();
/// sketchgrid::debug::save_image_with_grid(&grid, 420, 420, "grid.png", &GridDrawingConfig::default())
///     .unwrap();
/// ```
#[cfg(feature = "drawing")]
pub mod debug;
/// This module provides an off-screen canvas standing in for the host
/// rendering environment, plus drawing of grids and cells on it.
/// It is feature-gated under the `drawing` feature and requires the `image`
/// and `imageproc` crates.
///
/// The main components of this module are:
/// - [`drawing::Canvas`]: An RGBA image with the fill/stroke primitives sketches use.
/// - [`drawing::GridDrawingConfig`]: Colors and padding for rendering a grid directly.
/// - [`drawing::Drawable`]: Implemented by [`Cell`] and [`Grid`].
#[cfg(feature = "drawing")]
pub mod drawing;
pub mod grid;

use thiserror::Error;

pub use grid::*;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid grid dimensions: cols={cols}, rows={rows}")]
    InvalidDimensions { cols: usize, rows: usize },

    #[error("Unknown grid event: {0}")]
    UnknownEvent(String),

    #[error("Failed to save image: {0}")]
    ImageSaveError(String),
}
