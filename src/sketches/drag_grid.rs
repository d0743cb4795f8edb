use std::rc::Rc;

use sketchgrid::{
    drawing::{Rgba, BLACK, WHITE},
    DrawDispatch, Grid, GridConfig, GridError, Point, Rect,
};
use tracing::*;

use super::{shared_canvas, SharedCanvas, Sketch};

/// A small grid the pointer can drag around the canvas.
pub struct DragGrid {
    grid: Grid,
    canvas: SharedCanvas,
    /// Pointer position and grid origin when the drag started.
    drag: Option<(Point, Point)>,
}

impl DragGrid {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let canvas = shared_canvas(width, height);
        let config = GridConfig::default().draw_dispatch(DrawDispatch::ByKind);
        let mut grid = Grid::with_config(6, 6, Rect::new(0.0, 0.0, 120.0, 120.0), config)?;

        let target = Rc::clone(&canvas);
        grid.on_draw_cell(move |_, _, bounds| {
            let color = Rgba([rand::random(), rand::random(), rand::random(), 255]);
            let mut canvas = target.borrow_mut();
            canvas.fill_rect(&bounds, color);
            canvas.stroke_rect(&bounds, WHITE);
        });

        Ok(Self {
            grid,
            canvas,
            drag: None,
        })
    }

    #[cfg(test)]
    pub fn bounds(&self) -> Rect {
        self.grid.bounds()
    }
}

impl Sketch for DragGrid {
    fn canvas(&self) -> &SharedCanvas {
        &self.canvas
    }

    fn draw(&mut self) {
        self.canvas.borrow_mut().background(BLACK);
        self.grid.draw();
    }

    fn mouse_pressed(&mut self, pointer: Point) {
        let bounds = self.grid.bounds();
        self.drag = bounds
            .contains(pointer.x, pointer.y)
            .then_some((pointer, Point::new(bounds.x, bounds.y)));
    }

    fn mouse_dragged(&mut self, pointer: Point) {
        if let Some((start, origin)) = self.drag {
            let bounds = self.grid.bounds();
            let moved = Rect::new(
                origin.x + pointer.x - start.x,
                origin.y + pointer.y - start.y,
                bounds.w,
                bounds.h,
            );
            trace!("Dragging grid to {:?}", moved);
            self.grid.resize(moved);
        }
    }

    fn mouse_released(&mut self, _pointer: Point) {
        self.drag = None;
    }
}
