use crate::GridError;
use smallvec::SmallVec;
use std::fmt;
use tracing::*;

mod components;
mod config;
mod events;

pub use components::*;
pub use config::*;
pub use events::{EventKind, GridEvent, Handler};

use events::Handlers;

// Enough for the small boards sketches usually draw
const DEFAULT_SMALLVEC_SIZE: usize = 32;

/// Column-major cell storage: all rows of physical column 0 first.
pub type CellVec = SmallVec<[Cell; DEFAULT_SMALLVEC_SIZE]>;

/// Pointer hover state tracked across `mouse_moved` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Hover {
    #[default]
    Idle,
    Hovering(CellId),
}

/// A grid of `cols × rows` equally sized cells laid over a rectangle,
/// with optional header row and header column.
///
/// The grid never draws anything itself: [`Grid::draw`] fires one event per
/// cell and registered handlers do the drawing.
///
/// # Example
/// ```
/// use sketchgrid::{Grid, Rect};
/// use std::{cell::RefCell, rc::Rc};
///
/// let clicked = Rc::new(RefCell::new(None));
/// let sink = Rc::clone(&clicked);
///
/// let mut grid = Grid::new(2, 2, Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
/// grid.on_draw(|_col, _row, _bounds| {})
///     .on_mouse_clicked(move |col, row| *sink.borrow_mut() = Some((col, row)));
///
/// grid.mouse_clicked(60.0, 60.0);
/// assert_eq!(*clicked.borrow(), Some((1, 1)));
/// ```
pub struct Grid {
    cols: usize,
    rows: usize,
    bounds: Rect,
    config: GridConfig,
    header_row: usize,
    header_col: usize,
    cell_width: f64,
    cell_height: f64,
    cells: CellVec,
    handlers: Handlers,
    hover: Hover,
}

impl Grid {
    /// Creates a grid without headers.
    pub fn new(cols: usize, rows: usize, bounds: Rect) -> Result<Self, GridError> {
        Self::with_config(cols, rows, bounds, GridConfig::default())
    }

    /// Creates a grid with the given header row / header column flags.
    ///
    /// # Example
    /// ```
    /// use sketchgrid::{CellId, Grid, Rect};
    ///
    /// let grid = Grid::with_headers(2, 2, Rect::new(0.0, 0.0, 100.0, 100.0), true, true).unwrap();
    /// assert_eq!(grid.cell_width(), 33.0);
    /// assert!(grid.cell(CellId::Corner).is_some());
    /// ```
    pub fn with_headers(
        cols: usize,
        rows: usize,
        bounds: Rect,
        header_row: bool,
        header_col: bool,
    ) -> Result<Self, GridError> {
        Self::with_config(cols, rows, bounds, GridConfig::new(header_row, header_col))
    }

    /// Creates a grid with custom configuration.
    ///
    /// Zero-area bounds are accepted; every cell is then empty and no
    /// pointer position resolves to a cell.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidDimensions`] if `cols` or `rows` is zero.
    pub fn with_config(
        cols: usize,
        rows: usize,
        bounds: Rect,
        config: GridConfig,
    ) -> Result<Self, GridError> {
        trace!(
            "Creating {}x{} grid over {:?} with config: {:?}",
            cols,
            rows,
            bounds,
            config
        );
        if cols == 0 || rows == 0 {
            error!("Invalid grid dimensions: cols={}, rows={}", cols, rows);
            return Err(GridError::InvalidDimensions { cols, rows });
        }

        let header_row = usize::from(config.header_row);
        let header_col = usize::from(config.header_col);
        let (cell_width, cell_height) =
            Self::derive_cell_size(&bounds, cols + header_col, rows + header_row);

        let cells = (0..cols + header_col)
            .flat_map(|pcol| {
                (0..rows + header_row).map(move |prow| {
                    Cell::new(
                        Self::logical_id(pcol, prow, header_col, header_row),
                        Rect::default(),
                    )
                })
            })
            .collect();

        let mut grid = Grid {
            cols,
            rows,
            bounds,
            config,
            header_row,
            header_col,
            cell_width,
            cell_height,
            cells,
            handlers: Handlers::default(),
            hover: Hover::Idle,
        };
        grid.recalculate_bounds();
        debug!(
            "Grid created with cell size {}x{} and {} cells",
            cell_width,
            cell_height,
            grid.cells.len()
        );
        Ok(grid)
    }

    /// Number of data columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of data rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    pub fn has_header_row(&self) -> bool {
        self.header_row == 1
    }

    pub fn has_header_col(&self) -> bool {
        self.header_col == 1
    }

    /// Columns in the cell store, header column included.
    pub fn physical_cols(&self) -> usize {
        self.cols + self.header_col
    }

    /// Rows in the cell store, header row included.
    pub fn physical_rows(&self) -> usize {
        self.rows + self.header_row
    }

    /// Returns an iterator over all cells in draw order (column-major).
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Finds a cell by identity; `None` if the grid has no such cell.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        let (pcol, prow) = self.physical_index(id)?;
        self.cells.get(pcol * self.physical_rows() + prow)
    }

    /// Finds a cell by logical coordinates, `-1` addressing a header axis.
    pub fn logical_cell(&self, col: i64, row: i64) -> Option<&Cell> {
        CellId::from_logical(col, row).and_then(|id| self.cell(id))
    }

    /// The cell currently under the pointer, as tracked by [`Grid::mouse_moved`].
    pub fn hovered(&self) -> Option<CellId> {
        match self.hover {
            Hover::Idle => None,
            Hover::Hovering(cell) => Some(cell),
        }
    }

    pub fn hover(&self) -> Hover {
        self.hover
    }

    /// Moves/resizes the grid and recalculates every cell's bounds.
    ///
    /// With [`ResizePolicy::KeepCellSize`] the cell size derived at
    /// construction is kept, so only cell positions follow the new bounds.
    pub fn resize(&mut self, bounds: Rect) {
        debug!("Resizing grid from {:?} to {:?}", self.bounds, bounds);
        self.bounds = bounds;
        if self.config.resize_policy == ResizePolicy::RecomputeCellSize {
            let (cell_width, cell_height) =
                Self::derive_cell_size(&bounds, self.physical_cols(), self.physical_rows());
            self.cell_width = cell_width;
            self.cell_height = cell_height;
        }
        self.recalculate_bounds();
    }

    /// Fires `beforeDraw`, one draw event per cell in column-major order, then `afterDraw`.
    pub fn draw(&mut self) {
        self.handlers.fire(GridEvent::BeforeDraw);
        let dispatch = self.config.draw_dispatch;
        for cell in &self.cells {
            self.handlers.fire(Self::draw_event(dispatch, cell));
        }
        self.handlers.fire(GridEvent::AfterDraw);
    }

    /// Physical column under pointer coordinate `x`, if it falls on a stored column.
    pub fn col_at(&self, x: f64) -> Option<usize> {
        let offset = match self.config.pointer_mapping {
            PointerMapping::OffsetByOrigin => self.bounds.x + x,
            PointerMapping::RelativeToOrigin => x - self.bounds.x,
        };
        Self::line_at(offset, self.cell_width, self.physical_cols())
    }

    /// Physical row under pointer coordinate `y`, if it falls on a stored row.
    pub fn row_at(&self, y: f64) -> Option<usize> {
        let offset = match self.config.pointer_mapping {
            PointerMapping::OffsetByOrigin => self.bounds.y + y,
            PointerMapping::RelativeToOrigin => y - self.bounds.y,
        };
        Self::line_at(offset, self.cell_height, self.physical_rows())
    }

    /// Resolves a pointer position to a cell; `None` outside the grid bounds
    /// or where no cell lies (remainder pixels, zero-sized cells).
    pub fn cell_at(&self, x: f64, y: f64) -> Option<&Cell> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let (pcol, prow) = (self.col_at(x)?, self.row_at(y)?);
        trace!("Pointer ({}, {}) resolved to cell [{}, {}]", x, y, pcol, prow);
        self.cells.get(pcol * self.physical_rows() + prow)
    }

    /// Fires `mouseClicked` for the cell under the pointer.
    pub fn mouse_clicked(&mut self, x: f64, y: f64) {
        self.fire_at(x, y, |cell| GridEvent::MouseClicked { cell });
    }

    /// Fires `mousePressed` for the cell under the pointer.
    pub fn mouse_pressed(&mut self, x: f64, y: f64) {
        self.fire_at(x, y, |cell| GridEvent::MousePressed { cell });
    }

    /// Fires `mouseReleased` for the cell under the pointer.
    pub fn mouse_released(&mut self, x: f64, y: f64) {
        self.fire_at(x, y, |cell| GridEvent::MouseReleased { cell });
    }

    /// Tracks the pointer across cells, firing `mouseOut` when it leaves the
    /// hovered cell and `mouseIn` when it enters a new one.
    ///
    /// Positions inside the grid bounds that resolve to no cell leave the
    /// hover state as it is.
    pub fn mouse_moved(&mut self, x: f64, y: f64) {
        if let Hover::Hovering(cell) = self.hover {
            let still_inside = self
                .cell(cell)
                .is_some_and(|hovered| hovered.bounds.contains(x, y));
            if !still_inside {
                debug!("Pointer left cell {:?}", cell);
                self.hover = Hover::Idle;
                self.handlers.fire(GridEvent::MouseOut { cell });
            }
        }

        if self.hover == Hover::Idle {
            if let Some(cell) = self.cell_at(x, y).map(|cell| cell.id) {
                debug!("Pointer entered cell {:?}", cell);
                self.hover = Hover::Hovering(cell);
                self.handlers.fire(GridEvent::MouseIn { cell });
            }
        }
    }

    /// Registers `handler` for `kind`, replacing any previous handler for it.
    pub fn on(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&GridEvent) + 'static,
    ) -> &mut Self {
        self.handlers.set(kind, Box::new(handler));
        self
    }

    /// Registers `handler` under an event name such as `"drawCell"` or `"mouseIn"`.
    ///
    /// # Errors
    /// Returns [`GridError::UnknownEvent`] for names no event uses.
    ///
    /// # Example
    /// ```
    /// use sketchgrid::{Grid, Rect};
    ///
    /// let mut grid = Grid::new(3, 3, Rect::new(0.0, 0.0, 90.0, 90.0)).unwrap();
    /// assert!(grid.on_named("mouseOut", |_| {}).is_ok());
    /// assert!(grid.on_named("mouseOver", |_| {}).is_err());
    /// ```
    pub fn on_named(
        &mut self,
        name: &str,
        handler: impl FnMut(&GridEvent) + 'static,
    ) -> Result<&mut Self, GridError> {
        let kind = name.parse::<EventKind>()?;
        Ok(self.on(kind, handler))
    }

    pub fn on_before_draw(&mut self, mut handler: impl FnMut() + 'static) -> &mut Self {
        self.on(EventKind::BeforeDraw, move |_| handler())
    }

    pub fn on_after_draw(&mut self, mut handler: impl FnMut() + 'static) -> &mut Self {
        self.on(EventKind::AfterDraw, move |_| handler())
    }

    /// Unified draw handler receiving `(col, row, bounds)`; header cells
    /// carry `-1` on their header axis.
    pub fn on_draw(&mut self, mut handler: impl FnMut(i64, i64, Rect) + 'static) -> &mut Self {
        self.on(EventKind::Draw, move |event| {
            if let GridEvent::Draw { cell, bounds } = *event {
                handler(cell.col(), cell.row(), bounds);
            }
        })
    }

    pub fn on_draw_cell(
        &mut self,
        mut handler: impl FnMut(usize, usize, Rect) + 'static,
    ) -> &mut Self {
        self.on(EventKind::DrawCell, move |event| {
            if let GridEvent::DrawCell { col, row, bounds } = *event {
                handler(col, row, bounds);
            }
        })
    }

    /// Handler for the header row's cells, receiving the data column they label.
    pub fn on_draw_header_row(
        &mut self,
        mut handler: impl FnMut(usize, Rect) + 'static,
    ) -> &mut Self {
        self.on(EventKind::DrawHeaderRow, move |event| {
            if let GridEvent::DrawHeaderRow { col, bounds } = *event {
                handler(col, bounds);
            }
        })
    }

    /// Handler for the header column's cells, receiving the data row they label.
    pub fn on_draw_header_col(
        &mut self,
        mut handler: impl FnMut(usize, Rect) + 'static,
    ) -> &mut Self {
        self.on(EventKind::DrawHeaderCol, move |event| {
            if let GridEvent::DrawHeaderCol { row, bounds } = *event {
                handler(row, bounds);
            }
        })
    }

    pub fn on_draw_header_corner(
        &mut self,
        mut handler: impl FnMut(Rect) + 'static,
    ) -> &mut Self {
        self.on(EventKind::DrawHeaderCorner, move |event| {
            if let GridEvent::DrawHeaderCorner { bounds } = *event {
                handler(bounds);
            }
        })
    }

    pub fn on_mouse_clicked(&mut self, handler: impl FnMut(i64, i64) + 'static) -> &mut Self {
        self.on_pointer(EventKind::MouseClicked, handler)
    }

    pub fn on_mouse_pressed(&mut self, handler: impl FnMut(i64, i64) + 'static) -> &mut Self {
        self.on_pointer(EventKind::MousePressed, handler)
    }

    pub fn on_mouse_released(&mut self, handler: impl FnMut(i64, i64) + 'static) -> &mut Self {
        self.on_pointer(EventKind::MouseReleased, handler)
    }

    pub fn on_mouse_in(&mut self, handler: impl FnMut(i64, i64) + 'static) -> &mut Self {
        self.on_pointer(EventKind::MouseIn, handler)
    }

    pub fn on_mouse_out(&mut self, handler: impl FnMut(i64, i64) + 'static) -> &mut Self {
        self.on_pointer(EventKind::MouseOut, handler)
    }

    fn on_pointer(
        &mut self,
        kind: EventKind,
        mut handler: impl FnMut(i64, i64) + 'static,
    ) -> &mut Self {
        self.on(kind, move |event| {
            if let Some(cell) = event.cell() {
                handler(cell.col(), cell.row());
            }
        })
    }

    fn fire_at(&mut self, x: f64, y: f64, event: impl FnOnce(CellId) -> GridEvent) {
        if let Some(cell) = self.cell_at(x, y).map(|cell| cell.id) {
            self.handlers.fire(event(cell));
        }
    }

    fn draw_event(dispatch: DrawDispatch, cell: &Cell) -> GridEvent {
        let bounds = cell.bounds;
        match dispatch {
            DrawDispatch::Unified => GridEvent::Draw {
                cell: cell.id,
                bounds,
            },
            DrawDispatch::ByKind => match cell.id {
                CellId::Corner => GridEvent::DrawHeaderCorner { bounds },
                CellId::ColHeader { row } => GridEvent::DrawHeaderCol { row, bounds },
                CellId::RowHeader { col } => GridEvent::DrawHeaderRow { col, bounds },
                CellId::Data { col, row } => GridEvent::DrawCell { col, row, bounds },
            },
        }
    }

    /// Cell size over the extended (header-inclusive) dimensions; remainder pixels stay unused.
    fn derive_cell_size(bounds: &Rect, physical_cols: usize, physical_rows: usize) -> (f64, f64) {
        (
            (bounds.w / physical_cols as f64).floor(),
            (bounds.h / physical_rows as f64).floor(),
        )
    }

    fn logical_id(pcol: usize, prow: usize, header_col: usize, header_row: usize) -> CellId {
        match (pcol.checked_sub(header_col), prow.checked_sub(header_row)) {
            (None, None) => CellId::Corner,
            (Some(col), None) => CellId::RowHeader { col },
            (None, Some(row)) => CellId::ColHeader { row },
            (Some(col), Some(row)) => CellId::Data { col, row },
        }
    }

    fn physical_index(&self, id: CellId) -> Option<(usize, usize)> {
        let (pcol, prow) = match id {
            CellId::Corner => (
                self.header_col.checked_sub(1)?,
                self.header_row.checked_sub(1)?,
            ),
            CellId::RowHeader { col } => (
                col.checked_add(self.header_col)?,
                self.header_row.checked_sub(1)?,
            ),
            CellId::ColHeader { row } => (
                self.header_col.checked_sub(1)?,
                row.checked_add(self.header_row)?,
            ),
            CellId::Data { col, row } => (
                col.checked_add(self.header_col)?,
                row.checked_add(self.header_row)?,
            ),
        };
        (pcol < self.physical_cols() && prow < self.physical_rows()).then_some((pcol, prow))
    }

    fn line_at(offset: f64, size: f64, count: usize) -> Option<usize> {
        let index = (offset / size).floor();
        (index.is_finite() && index >= 0.0 && index < count as f64).then_some(index as usize)
    }

    fn recalculate_bounds(&mut self) {
        trace!("Recalculating cell bounds");
        let physical_rows = self.physical_rows();
        let Rect { x, y, .. } = self.bounds;
        let (width, height) = (self.cell_width, self.cell_height);
        for (index, cell) in self.cells.iter_mut().enumerate() {
            let (pcol, prow) = (index / physical_rows, index % physical_rows);
            cell.bounds = Rect::new(
                x + pcol as f64 * width,
                y + prow as f64 * height,
                width,
                height,
            );
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("cols", &self.cols)
            .field("rows", &self.rows)
            .field("bounds", &self.bounds)
            .field("config", &self.config)
            .field("cell_width", &self.cell_width)
            .field("cell_height", &self.cell_height)
            .field("hover", &self.hover)
            .field("handlers", &self.handlers)
            .finish()
    }
}
