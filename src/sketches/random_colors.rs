use std::rc::Rc;

use sketchgrid::{
    drawing::{Rgba, BLACK, WHITE},
    Grid, GridError, Rect,
};

use super::{shared_canvas, SharedCanvas, Sketch};

/// Headers outlined, data cells filled with a fresh random color every frame.
pub struct RandomColors {
    grid: Grid,
    canvas: SharedCanvas,
}

impl RandomColors {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let canvas = shared_canvas(width, height);
        let bounds = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
        let mut grid = Grid::with_headers(6, 6, bounds, true, true)?;

        let target = Rc::clone(&canvas);
        grid.on_draw(move |col, row, bounds| {
            let mut canvas = target.borrow_mut();
            if col == -1 || row == -1 {
                canvas.stroke_rect(&bounds, WHITE);
            } else {
                let color = Rgba([rand::random(), rand::random(), rand::random(), 255]);
                canvas.fill_rect(&bounds, color);
            }
        });

        Ok(Self { grid, canvas })
    }
}

impl Sketch for RandomColors {
    fn canvas(&self) -> &SharedCanvas {
        &self.canvas
    }

    fn draw(&mut self) {
        self.canvas.borrow_mut().background(BLACK);
        self.grid.draw();
    }
}
