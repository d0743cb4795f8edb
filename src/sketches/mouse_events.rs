use std::{cell::RefCell, rc::Rc};

use sketchgrid::{
    drawing::{Rgba, BLACK, WHITE},
    Grid, GridError, Point, Rect,
};

use super::{shared_canvas, SharedCanvas, Sketch};

const SELECTED: Rgba<u8> = Rgba([200, 200, 200, 255]);
const HIGHLIGHTED: Rgba<u8> = Rgba([50, 50, 50, 255]);

/// Hovered and selected cells by logical coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub highlighted: Option<(i64, i64)>,
    pub selected: Option<(i64, i64)>,
}

impl Selection {
    /// Clicking the selected cell again clears the selection.
    pub fn toggle(&mut self, col: i64, row: i64) {
        self.selected = match self.selected {
            Some(cell) if cell == (col, row) => None,
            _ => Some((col, row)),
        };
    }

    /// Fill for a cell: selected data cell, then the hovered data cell's row and column.
    pub fn fill(&self, col: i64, row: i64) -> Option<Rgba<u8>> {
        let is_data = |(col, row): (i64, i64)| col != -1 && row != -1;
        match (self.selected, self.highlighted) {
            (Some(selected), _) if is_data(selected) && selected == (col, row) => Some(SELECTED),
            (_, Some((hcol, hrow))) if is_data((hcol, hrow)) && (hrow == row || hcol == col) => {
                Some(HIGHLIGHTED)
            }
            _ => None,
        }
    }
}

/// Highlights the hovered cell's row and column and toggles a selected cell on click.
pub struct MouseEvents {
    grid: Grid,
    canvas: SharedCanvas,
    selection: Rc<RefCell<Selection>>,
}

impl MouseEvents {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let canvas = shared_canvas(width, height);
        let bounds = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
        let mut grid = Grid::with_headers(6, 6, bounds, true, true)?;
        let selection = Rc::new(RefCell::new(Selection::default()));

        let (target, state) = (Rc::clone(&canvas), Rc::clone(&selection));
        let (enter, leave, click) = (
            Rc::clone(&selection),
            Rc::clone(&selection),
            Rc::clone(&selection),
        );
        grid.on_draw(move |col, row, bounds| {
            let mut canvas = target.borrow_mut();
            if let Some(fill) = state.borrow().fill(col, row) {
                canvas.fill_rect(&bounds, fill);
            }
            if col != -1 && row != -1 {
                canvas.stroke_rect(&bounds, WHITE);
            }
        })
        .on_mouse_in(move |col, row| enter.borrow_mut().highlighted = Some((col, row)))
        .on_mouse_out(move |_, _| leave.borrow_mut().highlighted = None)
        .on_mouse_clicked(move |col, row| click.borrow_mut().toggle(col, row));

        Ok(Self {
            grid,
            canvas,
            selection,
        })
    }

    #[cfg(test)]
    pub fn selection(&self) -> Selection {
        *self.selection.borrow()
    }
}

impl Sketch for MouseEvents {
    fn canvas(&self) -> &SharedCanvas {
        &self.canvas
    }

    fn draw(&mut self) {
        self.canvas.borrow_mut().background(BLACK);
        self.grid.draw();
    }

    fn mouse_moved(&mut self, pointer: Point) {
        self.grid.mouse_moved(pointer.x, pointer.y);
    }

    fn mouse_clicked(&mut self, pointer: Point) {
        self.grid.mouse_clicked(pointer.x, pointer.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_hover_tracks_highlight() {
        let mut sketch = MouseEvents::new(420, 420).unwrap();
        sketch.mouse_moved(Point::new(130.0, 130.0));
        assert_eq!(sketch.selection().highlighted, Some((1, 1)));
        sketch.mouse_moved(Point::new(140.0, 150.0));
        assert_eq!(sketch.selection().highlighted, Some((1, 1)));
        sketch.mouse_moved(Point::new(500.0, 150.0));
        assert_eq!(sketch.selection().highlighted, None);
    }

    #[test]
    fn test_click_toggles_selection() {
        let mut sketch = MouseEvents::new(420, 420).unwrap();
        sketch.mouse_clicked(Point::new(250.0, 70.0));
        assert_eq!(sketch.selection().selected, Some((3, 0)));
        sketch.mouse_clicked(Point::new(250.0, 70.0));
        assert_eq!(sketch.selection().selected, None);
    }

    #[test_case(Some((1, 1)), None, 1, 1, Some(SELECTED) ; "selected cell")]
    #[test_case(Some((-1, 1)), None, -1, 1, None ; "selected header is ignored")]
    #[test_case(None, Some((2, 3)), 2, 0, Some(HIGHLIGHTED) ; "same column")]
    #[test_case(None, Some((2, 3)), -1, 3, Some(HIGHLIGHTED) ; "header of same row")]
    #[test_case(None, Some((2, 3)), 0, 0, None ; "unrelated cell")]
    #[test_case(None, Some((-1, 3)), 0, 3, None ; "hovered header is ignored")]
    fn test_fill(
        selected: Option<(i64, i64)>,
        highlighted: Option<(i64, i64)>,
        col: i64,
        row: i64,
        expected: Option<Rgba<u8>>,
    ) {
        let selection = Selection {
            highlighted,
            selected,
        };
        assert_eq!(selection.fill(col, row), expected);
    }

    #[test]
    fn test_selected_cell_is_drawn() {
        let mut sketch = MouseEvents::new(420, 420).unwrap();
        sketch.mouse_clicked(Point::new(130.0, 130.0));
        sketch.draw();
        let canvas = sketch.canvas().borrow();
        assert_eq!(canvas.pixel(150, 150), Some(SELECTED));
        assert_eq!(canvas.pixel(120, 150), Some(WHITE));
        assert_eq!(canvas.pixel(30, 30), Some(BLACK));
    }
}
