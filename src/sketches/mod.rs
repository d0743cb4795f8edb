//! Demo sketches driving a grid through its events and drawing on a [`Canvas`].

use std::{cell::RefCell, rc::Rc};

use sketchgrid::{drawing::Canvas, Point};

mod dice_probability;
mod drag_grid;
mod game_of_life;
mod mouse_events;
mod random_colors;

pub use dice_probability::DiceProbability;
pub use drag_grid::DragGrid;
pub use game_of_life::GameOfLife;
pub use mouse_events::MouseEvents;
pub use random_colors::RandomColors;

/// Canvas shared between a sketch and the grid handlers drawing on it.
pub type SharedCanvas = Rc<RefCell<Canvas>>;

pub fn shared_canvas(width: u32, height: u32) -> SharedCanvas {
    Rc::new(RefCell::new(Canvas::new(width, height)))
}

/// A sketch in the host's setup/draw/input style.
pub trait Sketch {
    fn canvas(&self) -> &SharedCanvas;

    /// Renders one frame.
    fn draw(&mut self);

    fn mouse_moved(&mut self, _pointer: Point) {}

    fn mouse_clicked(&mut self, _pointer: Point) {}

    fn mouse_pressed(&mut self, _pointer: Point) {}

    fn mouse_dragged(&mut self, _pointer: Point) {}

    fn mouse_released(&mut self, _pointer: Point) {}
}

/// Pointer input replayed before drawing.
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub hovers: Vec<Point>,
    pub clicks: Vec<Point>,
    pub drag: Option<(Point, Point)>,
}

/// Replays `script` against the sketch, then draws `frames` frames.
pub fn run(sketch: &mut dyn Sketch, script: &Script, frames: u32) {
    for &pointer in &script.hovers {
        sketch.mouse_moved(pointer);
    }
    for &pointer in &script.clicks {
        sketch.mouse_moved(pointer);
        sketch.mouse_clicked(pointer);
    }
    if let Some((from, to)) = script.drag {
        sketch.mouse_pressed(from);
        sketch.mouse_dragged(to);
        sketch.mouse_released(to);
    }
    for _ in 0..frames {
        sketch.draw();
    }
}
