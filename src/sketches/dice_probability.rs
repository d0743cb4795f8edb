use std::{cell::RefCell, rc::Rc};

use sketchgrid::{
    drawing::{Rgba, BLACK, WHITE},
    DrawDispatch, Grid, GridConfig, GridError, Rect,
};

use super::{shared_canvas, SharedCanvas, Sketch};

const FACES: usize = 6;
const SUMS: usize = 2 * FACES;

/// Observed frequencies of two-dice sums, indexed by `first + second` with faces from 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiceStats {
    values: [u32; SUMS],
    probs: [u32; SUMS],
    total: u32,
}

impl DiceStats {
    pub fn record(&mut self, first: usize, second: usize) {
        let sum = first + second;
        self.values[sum] += 1;
        self.total += 1;
        self.probs[sum] = self.values[sum] * 100 / self.total;
    }

    pub fn roll(&mut self) {
        let face = || rand::random::<u32>() as usize % FACES;
        self.record(face(), face());
    }

    /// Last recorded percentage for the sum shown at `(col, row)`.
    pub fn prob(&self, col: usize, row: usize) -> u32 {
        self.probs[col + row]
    }

    /// Gray level for the cell, scaled so the most frequent sum is white.
    pub fn shade(&self, col: usize, row: usize) -> u8 {
        let max = self.probs.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return 0;
        }
        (self.prob(col, row) * 255 / max) as u8
    }

    #[cfg(test)]
    pub fn total(&self) -> u32 {
        self.total
    }
}

/// Table of two-dice sums shaded by how often each came up.
pub struct DiceProbability {
    grid: Grid,
    canvas: SharedCanvas,
    stats: Rc<RefCell<DiceStats>>,
}

impl DiceProbability {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let canvas = shared_canvas(width, height);
        let bounds = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
        let config = GridConfig::new(true, true).draw_dispatch(DrawDispatch::ByKind);
        let mut grid = Grid::with_config(FACES, FACES, bounds, config)?;
        let stats = Rc::new(RefCell::new(DiceStats::default()));

        let (row_header, col_header) = (Rc::clone(&canvas), Rc::clone(&canvas));
        let (cells, state) = (Rc::clone(&canvas), Rc::clone(&stats));
        grid.on_draw_header_row(move |_, bounds| row_header.borrow_mut().stroke_rect(&bounds, WHITE))
            .on_draw_header_col(move |_, bounds| col_header.borrow_mut().stroke_rect(&bounds, WHITE))
            .on_draw_cell(move |col, row, bounds| {
                let shade = state.borrow().shade(col, row);
                let mut canvas = cells.borrow_mut();
                canvas.fill_rect(&bounds, Rgba([shade, shade, shade, 255]));
                canvas.stroke_rect(&bounds, WHITE);
            });

        Ok(Self {
            grid,
            canvas,
            stats,
        })
    }

    #[cfg(test)]
    pub fn stats(&self) -> DiceStats {
        self.stats.borrow().clone()
    }
}

impl Sketch for DiceProbability {
    fn canvas(&self) -> &SharedCanvas {
        &self.canvas
    }

    fn draw(&mut self) {
        self.stats.borrow_mut().roll();
        self.canvas.borrow_mut().background(BLACK);
        self.grid.draw();
    }
}
