//! This module provides an off-screen canvas and drawing of grids and cells on it.
//! It is feature-gated under the `drawing` feature and requires the `image` and `imageproc` crates.
//!
//! Sketches draw into a [`Canvas`] from inside their grid event handlers, the
//! way they would with a host canvas; [`Drawable`] renders a grid directly for
//! debugging.
//!
//! # Examples
//!
//! ```rust
//! use sketchgrid::{drawing::*, Grid, Rect};
//! use std::{cell::RefCell, rc::Rc};
//!
//! let canvas = Rc::new(RefCell::new(Canvas::new(120, 120)));
//! let target = Rc::clone(&canvas);
//!
//! let mut grid = Grid::new(2, 2, Rect::new(0.0, 0.0, 120.0, 120.0)).unwrap();
//! grid.on_draw(move |col, row, bounds| {
//!     let shade = if (col + row) % 2 == 0 { 255 } else { 0 };
//!     target.borrow_mut().fill_rect(&bounds, Rgba([shade, shade, shade, 255]));
//! });
//! grid.draw();
//!
//! assert_eq!(canvas.borrow().pixel(10, 10), Some(Rgba([255, 255, 255, 255])));
//! assert_eq!(canvas.borrow().pixel(70, 10), Some(Rgba([0, 0, 0, 255])));
//! ```

use std::{fmt, path::Path};

use crate::{Cell, CellId, Grid, GridError, Rect};
pub use image::Rgba;
use image::RgbaImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect as PixelRect;
use tracing::*;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Converts grid geometry to whole pixels, flooring position and size.
///
/// Returns `None` for rectangles narrower or shorter than one pixel.
pub fn pixel_rect(rect: &Rect) -> Option<PixelRect> {
    let (x, y) = (rect.x.floor(), rect.y.floor());
    let (w, h) = (rect.w.floor(), rect.h.floor());
    if !(x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite()) || w < 1.0 || h < 1.0
    {
        return None;
    }
    Some(PixelRect::at(x as i32, y as i32).of_size(w as u32, h as u32))
}

/// An RGBA drawing surface with the primitives sketches draw with.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Creates a black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, BLACK),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Paints every pixel with `color`.
    pub fn background(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    /// Fills `rect`, clipped to the canvas.
    pub fn fill_rect(&mut self, rect: &Rect, color: Rgba<u8>) {
        if let Some(rect) = pixel_rect(rect) {
            draw_filled_rect_mut(&mut self.image, rect, color);
        }
    }

    /// Draws a one pixel outline along the inside of `rect`.
    pub fn stroke_rect(&mut self, rect: &Rect, color: Rgba<u8>) {
        if let Some(rect) = pixel_rect(rect) {
            draw_hollow_rect_mut(&mut self.image, rect, color);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Writes the canvas to `path`; the format follows the file extension.
    ///
    /// # Errors
    /// Returns [`GridError::ImageSaveError`] if encoding or writing fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GridError> {
        let path = path.as_ref();
        debug!("Saving {}x{} canvas to {}", self.width(), self.height(), path.display());
        self.image
            .save(path)
            .map_err(|e| GridError::ImageSaveError(e.to_string()))
    }
}

/// Configuration for drawing grids and cells.
///
/// Users can rely on the uniform cell color or provide a custom color
/// provider function keyed by cell.
///
/// # Examples
///
/// ```
/// use sketchgrid::{drawing::GridDrawingConfig, CellId};
/// use image::Rgba;
///
/// let config = GridDrawingConfig {
///     padding: 1,
///     line_color: Rgba([255, 255, 255, 255]),
///     cell_background_color: Rgba([40, 40, 40, 255]),
///     header_background_color: Rgba([128, 128, 128, 255]),
///     cell_color_provider: Some(Box::new(|cell: CellId| {
///         if cell.row() % 2 == 0 { Rgba([200, 0, 0, 255]) } else { Rgba([0, 0, 200, 255]) }
///     })),
///     line_thickness: 1,
/// };
/// ```
pub struct GridDrawingConfig {
    /// Inset of the cell background from the cell bounds.
    pub padding: u32,
    /// Color of the cell outlines.
    pub line_color: Rgba<u8>,
    /// Background color for data cells.
    pub cell_background_color: Rgba<u8>,
    /// Background color for header cells.
    pub header_background_color: Rgba<u8>,
    /// Optional function providing data cell colors; overrides `cell_background_color`.
    pub cell_color_provider: Option<Box<dyn Fn(CellId) -> Rgba<u8>>>,
    /// Thickness of cell outlines; zero draws none.
    pub line_thickness: u32,
}

// Manually implement Debug for GridDrawingConfig
impl fmt::Debug for GridDrawingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridDrawingConfig")
            .field("padding", &self.padding)
            .field("line_color", &self.line_color)
            .field("cell_background_color", &self.cell_background_color)
            .field("header_background_color", &self.header_background_color)
            .field("cell_color_provider", &"<function>")
            .field("line_thickness", &self.line_thickness)
            .finish()
    }
}

impl Default for GridDrawingConfig {
    fn default() -> Self {
        GridDrawingConfig {
            padding: 0,
            line_color: WHITE,
            cell_background_color: BLACK,
            header_background_color: Rgba([128, 128, 128, 255]), // Gray
            cell_color_provider: None,
            line_thickness: 1,
        }
    }
}

/// Trait for grid components that can be rendered on a [`Canvas`].
pub trait Drawable {
    /// Renders the object on the canvas using the given configuration.
    fn render(&self, canvas: &mut Canvas, config: &GridDrawingConfig);
}

impl Drawable for Cell {
    fn render(&self, canvas: &mut Canvas, config: &GridDrawingConfig) {
        let background = match (self.id.is_header(), &config.cell_color_provider) {
            (true, _) => config.header_background_color,
            (false, Some(provider)) => provider(self.id),
            (false, None) => config.cell_background_color,
        };

        let padding = f64::from(config.padding);
        let inner = Rect::new(
            self.bounds.x + padding,
            self.bounds.y + padding,
            self.bounds.w - 2.0 * padding,
            self.bounds.h - 2.0 * padding,
        );
        canvas.fill_rect(&inner, background);

        // Nested outlines, shrinking inwards
        for step in 0..config.line_thickness {
            let inset = f64::from(step);
            let outline = Rect::new(
                self.bounds.x + inset,
                self.bounds.y + inset,
                self.bounds.w - 2.0 * inset,
                self.bounds.h - 2.0 * inset,
            );
            canvas.stroke_rect(&outline, config.line_color);
        }
    }
}

impl Drawable for Grid {
    fn render(&self, canvas: &mut Canvas, config: &GridDrawingConfig) {
        trace!("Rendering {} cells", self.cells().count());
        for cell in self.cells() {
            cell.render(canvas, config);
        }
    }
}
