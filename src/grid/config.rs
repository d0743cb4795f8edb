/// Which draw events a grid fires for its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DrawDispatch {
    /// A single `draw(col, row, bounds)` for every cell, headers included.
    #[default]
    Unified,
    /// `drawHeaderCorner`, `drawHeaderCol`, `drawHeaderRow` or `drawCell`
    /// depending on the kind of cell.
    ByKind,
}

/// How pointer coordinates passed to the mouse methods map onto columns and rows.
///
/// Both variants only resolve pointers that fall inside the grid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PointerMapping {
    /// `floor((bounds.x + x) / cell_width)`, for hosts that report pointer
    /// positions as offsets. Identical to [`PointerMapping::RelativeToOrigin`]
    /// for grids anchored at the origin.
    #[default]
    OffsetByOrigin,
    /// `floor((x - bounds.x) / cell_width)`, for hosts that report canvas
    /// coordinates.
    RelativeToOrigin,
}

/// What `resize` does with the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ResizePolicy {
    /// Cell size stays as derived at construction; only positions move.
    #[default]
    KeepCellSize,
    /// Cell size is derived again from the new bounds.
    RecomputeCellSize,
}

/// Configuration for grid construction.
///
/// # Example
/// ```
/// use sketchgrid::{DrawDispatch, GridConfig, PointerMapping, ResizePolicy};
///
/// let config = GridConfig::default();
/// assert_eq!(config.header_row, false);
/// assert_eq!(config.header_col, false);
/// assert_eq!(config.draw_dispatch, DrawDispatch::Unified);
/// assert_eq!(config.pointer_mapping, PointerMapping::OffsetByOrigin);
/// assert_eq!(config.resize_policy, ResizePolicy::KeepCellSize);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridConfig {
    /// Reserve a header row above the data cells (default: false)
    pub header_row: bool,
    /// Reserve a header column left of the data cells (default: false)
    pub header_col: bool,
    /// Draw events fired per cell (default: unified)
    pub draw_dispatch: DrawDispatch,
    /// Pointer coordinate convention (default: offset by origin)
    pub pointer_mapping: PointerMapping,
    /// Cell size handling on resize (default: keep)
    pub resize_policy: ResizePolicy,
}

impl GridConfig {
    /// Creates a new `GridConfig` with the given header flags and default behaviour.
    ///
    /// # Example
    /// ```
    /// use sketchgrid::GridConfig;
    ///
    /// let config = GridConfig::new(true, false);
    /// assert_eq!(config.header_row, true);
    /// assert_eq!(config.header_col, false);
    /// ```
    pub fn new(header_row: bool, header_col: bool) -> Self {
        Self {
            header_row,
            header_col,
            draw_dispatch: DrawDispatch::default(),
            pointer_mapping: PointerMapping::default(),
            resize_policy: ResizePolicy::default(),
        }
    }

    pub fn draw_dispatch(mut self, draw_dispatch: DrawDispatch) -> Self {
        self.draw_dispatch = draw_dispatch;
        self
    }

    pub fn pointer_mapping(mut self, pointer_mapping: PointerMapping) -> Self {
        self.pointer_mapping = pointer_mapping;
        self
    }

    pub fn resize_policy(mut self, resize_policy: ResizePolicy) -> Self {
        self.resize_policy = resize_policy;
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig::new(false, false)
    }
}
