/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle used for grid bounds and cell bounds.
///
/// # Example
/// ```
/// use sketchgrid::{Point, Rect};
///
/// let rect = Rect::new(10.0, 10.0, 50.0, 50.0);
/// assert!(rect.contains(10.0, 10.0));
/// assert!(!rect.contains(60.0, 10.0));
/// assert_eq!(rect.center(), Point::new(35.0, 35.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Is `(px, py)` inside this rectangle? Right and bottom edges are excluded.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && py >= self.y && px < self.x + self.w && py < self.y + self.h
    }

    /// Center of the rectangle, floored to whole pixels.
    pub fn center(&self) -> Point {
        Point::new(
            (self.x + self.w / 2.0).floor(),
            (self.y + self.h / 2.0).floor(),
        )
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Same size, moved by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

/// Identity of a cell, discriminating header cells from data cells.
///
/// Logical coordinates use `-1` on a header axis: the header row sits at
/// `row == -1` (one [`CellId::RowHeader`] per data column), the header
/// column at `col == -1` (one [`CellId::ColHeader`] per data row), and
/// the corner at `(-1, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CellId {
    Corner,
    RowHeader { col: usize },
    ColHeader { row: usize },
    Data { col: usize, row: usize },
}

impl CellId {
    /// Builds an id from logical coordinates, where `-1` marks a header axis.
    ///
    /// Returns `None` for coordinates below `-1`.
    ///
    /// # Example
    /// ```
    /// use sketchgrid::CellId;
    ///
    /// assert_eq!(CellId::from_logical(-1, -1), Some(CellId::Corner));
    /// assert_eq!(CellId::from_logical(2, -1), Some(CellId::RowHeader { col: 2 }));
    /// assert_eq!(CellId::from_logical(-1, 3), Some(CellId::ColHeader { row: 3 }));
    /// assert_eq!(CellId::from_logical(-2, 0), None);
    /// ```
    pub fn from_logical(col: i64, row: i64) -> Option<Self> {
        match (col, row) {
            (-1, -1) => Some(CellId::Corner),
            (col, -1) if col >= 0 => Some(CellId::RowHeader { col: col as usize }),
            (-1, row) if row >= 0 => Some(CellId::ColHeader { row: row as usize }),
            (col, row) if col >= 0 && row >= 0 => Some(CellId::Data {
                col: col as usize,
                row: row as usize,
            }),
            _ => None,
        }
    }

    /// Logical column; `-1` for the header column and the corner.
    pub fn col(&self) -> i64 {
        match *self {
            CellId::Corner | CellId::ColHeader { .. } => -1,
            CellId::RowHeader { col } | CellId::Data { col, .. } => col as i64,
        }
    }

    /// Logical row; `-1` for the header row and the corner.
    pub fn row(&self) -> i64 {
        match *self {
            CellId::Corner | CellId::RowHeader { .. } => -1,
            CellId::ColHeader { row } | CellId::Data { row, .. } => row as i64,
        }
    }

    pub fn is_header(&self) -> bool {
        !matches!(self, CellId::Data { .. })
    }
}

/// A cell of the grid with its absolute bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cell {
    pub id: CellId,
    pub bounds: Rect,
}

impl Cell {
    pub fn new(id: CellId, bounds: Rect) -> Self {
        Self { id, bounds }
    }

    pub fn col(&self) -> i64 {
        self.id.col()
    }

    pub fn row(&self) -> i64 {
        self.id.row()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(10.0, 10.0, true ; "top left corner")]
    #[test_case(59.0, 59.0, true ; "last pixel")]
    #[test_case(59.999, 10.0, true ; "just before right edge")]
    #[test_case(60.0, 10.0, false ; "right edge")]
    #[test_case(10.0, 60.0, false ; "bottom edge")]
    #[test_case(9.999, 10.0, false ; "left of rect")]
    #[test_case(10.0, 9.0, false ; "above rect")]
    #[test_case(f64::NAN, 20.0, false ; "nan x")]
    #[test_case(20.0, f64::NAN, false ; "nan y")]
    fn test_contains(px: f64, py: f64, expected: bool) {
        let rect = Rect::new(10.0, 10.0, 50.0, 50.0);
        assert_eq!(rect.contains(px, py), expected);
    }

    #[test_case(Rect::new(0.0, 0.0, 100.0, 100.0), Point::new(50.0, 50.0) ; "even size")]
    #[test_case(Rect::new(0.0, 0.0, 33.0, 33.0), Point::new(16.0, 16.0) ; "odd size floors")]
    #[test_case(Rect::new(10.5, 20.0, 3.0, 5.0), Point::new(12.0, 22.0) ; "fractional origin")]
    fn test_center(rect: Rect, expected: Point) {
        assert_eq!(rect.center(), expected);
    }

    #[test]
    fn test_translate_keeps_size() {
        let rect = Rect::new(0.0, 0.0, 120.0, 80.0).translate(15.0, -5.0);
        assert_eq!(rect, Rect::new(15.0, -5.0, 120.0, 80.0));
        assert_eq!(rect.right(), 135.0);
        assert_eq!(rect.bottom(), 75.0);
    }

    #[test]
    fn test_cell_id_logical_coordinates() {
        assert_eq!((CellId::Corner.col(), CellId::Corner.row()), (-1, -1));
        let header_row = CellId::RowHeader { col: 4 };
        assert_eq!((header_row.col(), header_row.row()), (4, -1));
        let header_col = CellId::ColHeader { row: 2 };
        assert_eq!((header_col.col(), header_col.row()), (-1, 2));
        let data = CellId::Data { col: 1, row: 3 };
        assert_eq!((data.col(), data.row()), (1, 3));
        assert!(!data.is_header());
        assert!(header_row.is_header() && header_col.is_header());
    }

    proptest! {
        #[test]
        fn test_contains_matches_half_open_interval(
            x in -100.0..100.0f64,
            y in -100.0..100.0f64,
            w in 1.0..100.0f64,
            h in 1.0..100.0f64,
        ) {
            let rect = Rect::new(x, y, w, h);
            prop_assert!(rect.contains(x, y));
            prop_assert!(!rect.contains(x + w, y));
            prop_assert!(!rect.contains(x, y + h));
            prop_assert!(rect.contains(rect.center().x.max(x), rect.center().y.max(y)));
        }

        #[test]
        fn test_cell_id_logical_round_trip(col in -1i64..50, row in -1i64..50) {
            let id = CellId::from_logical(col, row).unwrap();
            prop_assert_eq!((id.col(), id.row()), (col, row));
        }
    }
}
