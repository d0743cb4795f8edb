use std::{cell::RefCell, rc::Rc};

use rayon::prelude::*;
use sketchgrid::{
    drawing::{BLACK, WHITE},
    DrawDispatch, Grid, GridConfig, GridError, Rect,
};
use tracing::*;

use super::{shared_canvas, SharedCanvas, Sketch};

pub const BOARD_SIZE: usize = 60;

/// Life board stored column-major, 1 = alive.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<u8>>,
}

impl Board {
    pub fn random(size: usize) -> Self {
        let cells = (0..size)
            .map(|_| (0..size).map(|_| u8::from(rand::random::<bool>())).collect())
            .collect();
        Self { size, cells }
    }

    #[cfg(test)]
    pub fn from_alive(size: usize, alive: &[(usize, usize)]) -> Self {
        let mut cells = vec![vec![0; size]; size];
        for &(col, row) in alive {
            cells[col][row] = 1;
        }
        Self { size, cells }
    }

    /// State of a cell; everything off the board is dead.
    pub fn cell(&self, col: i64, row: i64) -> u8 {
        let size = self.size as i64;
        if (0..size).contains(&col) && (0..size).contains(&row) {
            self.cells[col as usize][row as usize]
        } else {
            0
        }
    }

    /// Alive cells in the 3x3 block centered on `(col, row)`, the cell itself included.
    fn neighborhood(&self, col: i64, row: i64) -> u8 {
        (-1..=1)
            .flat_map(|dc| (-1..=1).map(move |dr| (dc, dr)))
            .map(|(dc, dr)| self.cell(col + dc, row + dr))
            .sum()
    }

    /// One generation: a block of exactly 3 makes the cell alive, exactly 4
    /// keeps its state, anything else kills it.
    pub fn tick(&self) -> Self {
        let cells = (0..self.size)
            .into_par_iter()
            .map(|col| {
                (0..self.size)
                    .map(|row| match self.neighborhood(col as i64, row as i64) {
                        3 => 1,
                        4 => self.cells[col][row],
                        _ => 0,
                    })
                    .collect()
            })
            .collect();
        Self {
            size: self.size,
            cells,
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == 1).count()
    }
}

pub struct GameOfLife {
    grid: Grid,
    canvas: SharedCanvas,
    board: Rc<RefCell<Board>>,
}

impl GameOfLife {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::with_board(width, height, Board::random(BOARD_SIZE))
    }

    pub fn with_board(width: u32, height: u32, board: Board) -> Result<Self, GridError> {
        let canvas = shared_canvas(width, height);
        let bounds = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
        let config = GridConfig::default().draw_dispatch(DrawDispatch::ByKind);
        let mut grid = Grid::with_config(board.size, board.size, bounds, config)?;
        let board = Rc::new(RefCell::new(board));

        let (target, state) = (Rc::clone(&canvas), Rc::clone(&board));
        grid.on_draw_cell(move |col, row, bounds| {
            let color = if state.borrow().cell(col as i64, row as i64) == 1 {
                WHITE
            } else {
                BLACK
            };
            let inset = Rect::new(bounds.x + 1.0, bounds.y + 1.0, bounds.w - 1.0, bounds.h - 1.0);
            target.borrow_mut().fill_rect(&inset, color);
        });

        Ok(Self {
            grid,
            canvas,
            board,
        })
    }

    #[cfg(test)]
    pub fn board(&self) -> Board {
        self.board.borrow().clone()
    }
}

impl Sketch for GameOfLife {
    fn canvas(&self) -> &SharedCanvas {
        &self.canvas
    }

    fn draw(&mut self) {
        self.canvas.borrow_mut().background(BLACK);
        self.grid.draw();

        let next = self.board.borrow().tick();
        debug!("Generation population: {}", next.population());
        *self.board.borrow_mut() = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blinker_oscillates() {
        let vertical = Board::from_alive(5, &[(2, 1), (2, 2), (2, 3)]);
        let horizontal = Board::from_alive(5, &[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(vertical.tick(), horizontal);
        assert_eq!(horizontal.tick(), vertical);
    }

    #[test]
    fn test_block_is_stable() {
        let block = Board::from_alive(4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(block.tick(), block);
        assert_eq!(block.population(), 4);
    }

    #[test]
    fn test_off_board_cells_are_dead() {
        let board = Board::from_alive(3, &[(0, 0)]);
        assert_eq!(board.cell(0, 0), 1);
        assert_eq!(board.cell(-1, 0), 0);
        assert_eq!(board.cell(0, 3), 0);
    }

    #[test]
    fn test_frame_draws_then_ticks() {
        let board = Board::from_alive(5, &[(2, 1), (2, 2), (2, 3)]);
        let mut sketch = GameOfLife::with_board(50, 50, board).unwrap();
        sketch.draw();

        let canvas = sketch.canvas().borrow();
        // cell size 10; (2, 1) alive before the tick, (1, 1) dead
        assert_eq!(canvas.pixel(25, 15), Some(WHITE));
        assert_eq!(canvas.pixel(15, 15), Some(BLACK));
        drop(canvas);

        assert_eq!(
            sketch.board(),
            Board::from_alive(5, &[(1, 2), (2, 2), (3, 2)])
        );
    }
}
