use std::path::Path;

use crate::drawing::*;
use crate::{Grid, GridError};
/// Saves an image of the grid's cells.
///
/// This function renders every cell of the grid, headers included, on a
/// canvas of the given size and saves the result to the specified path.
///
/// # Arguments
/// * `grid` - The grid to draw.
/// * `width`, `height` - Size of the output image in pixels.
/// * `output_path` - The path to save the output image.
/// * `config` - The drawing configuration.
///
/// # Errors
/// Returns [`GridError`] if saving fails.
///
/// # Examples
///
/// ```rust,no_run
/// use sketchgrid::{debug, drawing::GridDrawingConfig, Grid, Rect};
///
/// let grid = Grid::new(8, 8, Rect::new(0.0, 0.0, 400.0, 400.0)).unwrap();
/// debug::save_image_with_grid(&grid, 400, 400, "output_with_grid.png", &GridDrawingConfig::default())
///     .unwrap();
/// ```
pub fn save_image_with_grid(
    grid: &Grid,
    width: u32,
    height: u32,
    output_path: impl AsRef<Path>,
    config: &GridDrawingConfig,
) -> Result<(), GridError> {
    let mut canvas = Canvas::new(width, height);
    grid.render(&mut canvas, config);
    canvas.save(output_path)
}
