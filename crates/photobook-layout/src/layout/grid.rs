//! Grid model for page layouts
//!
//! A layout is a rectangular table of cells. Each cell is either empty or the
//! top-left anchor of an image slot covering one or more rows and columns.

use crate::types::{LayoutError, Result};

use super::GridPosition;

// =============================================================================
// Cells
// =============================================================================

/// A single cell of a layout grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Option<(u32, u32)>", into = "Option<(u32, u32)>")
)]
pub enum Cell {
    /// Nothing starts here (the cell may still be covered by a span)
    #[default]
    Empty,
    /// An image slot starts here and extends `columns` cells to the right
    /// and `rows` cells down
    Span { columns: u32, rows: u32 },
}

impl Cell {
    pub fn span(columns: u32, rows: u32) -> Self {
        Cell::Span { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Option<(u32, u32)>> for Cell {
    fn from(raw: Option<(u32, u32)>) -> Self {
        match raw {
            Some((columns, rows)) => Cell::Span { columns, rows },
            None => Cell::Empty,
        }
    }
}

impl From<Cell> for Option<(u32, u32)> {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Span { columns, rows } => Some((columns, rows)),
            Cell::Empty => None,
        }
    }
}

/// A span anchor together with its grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanAnchor {
    pub pos: GridPosition,
    pub columns: u32,
    pub rows: u32,
}

impl SpanAnchor {
    /// Index of the last column covered by this span
    pub fn last_col(&self) -> usize {
        self.pos.col + self.columns as usize - 1
    }

    /// Index of the last row covered by this span
    pub fn last_row(&self) -> usize {
        self.pos.row + self.rows as usize - 1
    }

    /// Whether the span covers the given position
    pub fn covers(&self, pos: GridPosition) -> bool {
        (self.pos.row..=self.last_row()).contains(&pos.row)
            && (self.pos.col..=self.last_col()).contains(&pos.col)
    }
}

/// Static table form of a grid, as stored in the builtin catalog
pub type RawGrid = &'static [&'static [Option<(u32, u32)>]];

// =============================================================================
// Grid
// =============================================================================

/// A validated, rectangular layout grid.
///
/// Cells inside a span's footprint are expected to be `Empty`, but this is not
/// enforced: traversal trusts the anchor's extent and skips whatever a covered
/// cell holds. Use [`Grid::covered_conflicts`] to find cells that break that
/// expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    cols: usize,
}

impl Grid {
    /// Build a grid, checking that it is rectangular and every span fits.
    pub fn new(cells: Vec<Vec<Cell>>) -> Result<Self> {
        let cols = match cells.first() {
            None => {
                return Err(LayoutError::MalformedGrid {
                    reason: "grid has no rows".to_string(),
                });
            }
            Some(first) => first.len(),
        };

        if cols == 0 {
            return Err(LayoutError::MalformedGrid {
                reason: "grid has no columns".to_string(),
            });
        }

        if let Some((row, len)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(LayoutError::MalformedGrid {
                reason: format!("row {row} has {len} cells, expected {cols}"),
            });
        }

        let grid = Self { cells, cols };
        grid.validate_spans()?;
        Ok(grid)
    }

    /// Build a grid from the static table form
    pub fn from_raw(raw: &[&[Option<(u32, u32)>]]) -> Result<Self> {
        Self::new(
            raw.iter()
                .map(|row| row.iter().copied().map(Cell::from).collect())
                .collect(),
        )
    }

    fn validate_spans(&self) -> Result<()> {
        let row_count = self.row_count();
        let col_count = self.column_count();

        for anchor in self.declared_spans() {
            let GridPosition { row, col } = anchor.pos;
            let invalid = |reason: String| LayoutError::InvalidSpan {
                row,
                col,
                columns: anchor.columns,
                rows: anchor.rows,
                reason,
            };

            if anchor.columns == 0 || anchor.rows == 0 {
                return Err(invalid("span extent must be at least 1x1".to_string()));
            }
            if col + anchor.columns as usize > col_count {
                return Err(invalid(format!(
                    "extends past the last column ({col_count} columns)"
                )));
            }
            if row + anchor.rows as usize > row_count {
                return Err(invalid(format!("extends past the last row ({row_count} rows)")));
            }
        }

        Ok(())
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Cell at the given position, if it is inside the grid
    pub fn cell(&self, pos: GridPosition) -> Option<&Cell> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col))
    }

    /// All cells in row-major order (top row first, left column first)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, cell))
        })
    }

    /// Every non-empty cell as written, including ones inside another span
    fn declared_spans(&self) -> impl Iterator<Item = SpanAnchor> + '_ {
        self.cells().filter_map(|(row, col, cell)| match *cell {
            Cell::Span { columns, rows } => Some(SpanAnchor {
                pos: GridPosition::new(row, col),
                columns,
                rows,
            }),
            Cell::Empty => None,
        })
    }

    /// Span anchors in row-major order.
    ///
    /// A span whose position lies inside an earlier anchor's footprint is
    /// skipped and never becomes a slot.
    pub fn anchors(&self) -> impl Iterator<Item = SpanAnchor> + '_ {
        let mut accepted: Vec<SpanAnchor> = Vec::new();
        self.declared_spans().filter(move |span| {
            if accepted.iter().any(|anchor| anchor.covers(span.pos)) {
                return false;
            }
            accepted.push(*span);
            true
        })
    }

    /// Number of image slots in the layout
    pub fn slot_count(&self) -> usize {
        self.anchors().count()
    }

    /// Number of grid cells claimed by spans, counting each footprint in full
    pub fn occupied_cell_count(&self) -> usize {
        self.anchors()
            .map(|a| a.columns as usize * a.rows as usize)
            .sum()
    }

    /// Cells inside some span's footprint (other than its anchor) that are
    /// not literally `Empty`.
    ///
    /// Layout resolution ignores these cells' contents, so a non-empty result
    /// usually means a typo in the layout table.
    pub fn covered_conflicts(&self) -> Vec<GridPosition> {
        let mut conflicts = Vec::new();

        for anchor in self.anchors() {
            for row in anchor.pos.row..=anchor.last_row() {
                for col in anchor.pos.col..=anchor.last_col() {
                    let pos = GridPosition::new(row, col);
                    if pos == anchor.pos {
                        continue;
                    }
                    let occupied = self.cell(pos).is_some_and(|cell| !cell.is_empty());
                    if occupied && !conflicts.contains(&pos) {
                        conflicts.push(pos);
                    }
                }
            }
        }

        conflicts
    }
}

// =============================================================================
// Tests
// =============================================================================
