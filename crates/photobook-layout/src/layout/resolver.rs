//! Geometry resolution
//!
//! Turns a grid plus page dimensions, margins, and gutters into one placed
//! rectangle per span anchor. Pure computation: no drawing, no caching.

use log::{debug, warn};

use crate::types::{Gutters, Margins, PageDimensions};

use super::{Grid, Padding, PlacedRectangle, SpanAnchor};

/// Size of a single grid cell after margins and gutters are removed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

/// Divide the usable page area evenly between the grid's cells.
///
/// No rounding happens here. The result is negative when the margins and
/// gutters do not fit on the page.
pub fn cell_size(
    grid: &Grid,
    page: PageDimensions,
    margins: &Margins,
    gutters: &Gutters,
) -> CellSize {
    let cols = grid.column_count() as f64;
    let rows = grid.row_count() as f64;

    let usable_width = page.width - margins.left - margins.right - (cols - 1.0) * gutters.horizontal;
    let usable_height = page.height - margins.top - margins.bottom - (rows - 1.0) * gutters.vertical;

    CellSize {
        width: usable_width / cols,
        height: usable_height / rows,
    }
}

/// Resolve every span anchor of `grid` into a placed rectangle.
///
/// Rectangles come out in row-major anchor order with 1-based indices.
/// Negative sizes are logged and returned as computed.
pub fn resolve(
    grid: &Grid,
    page: PageDimensions,
    margins: &Margins,
    gutters: &Gutters,
) -> Vec<PlacedRectangle> {
    let cell = cell_size(grid, page, margins, gutters);
    if cell.width < 0.0 || cell.height < 0.0 {
        warn!(
            "Negative geometry: cell size {}x{}, margins and gutters exceed the {}x{} page",
            cell.width, cell.height, page.width, page.height
        );
    }

    // Left edge of each column and top edge of each row, walking the cursor
    // the same way for both axes.
    let col_x = cursor_positions(
        margins.left,
        cell.width,
        gutters.horizontal,
        grid.column_count(),
    );
    let row_top = cursor_positions(
        -(page.height - margins.top),
        cell.height,
        gutters.vertical,
        grid.row_count(),
    );

    grid.anchors()
        .enumerate()
        .map(|(i, anchor)| {
            let rect = place_anchor(
                grid,
                &anchor,
                i + 1,
                col_x[anchor.pos.col],
                -row_top[anchor.pos.row],
                cell,
                gutters,
            );

            if rect.height < 0.0 {
                warn!(
                    "Negative geometry: slot {} at row {}, column {} has height {}",
                    rect.index, anchor.pos.row, anchor.pos.col, rect.height
                );
            } else if rect.width < 0.0 {
                warn!(
                    "Negative geometry: slot {} at row {}, column {} has width {}",
                    rect.index, anchor.pos.row, anchor.pos.col, rect.width
                );
            }

            debug!(
                "Slot {}: x={} y={} w={} h={}",
                rect.index, rect.x, rect.y, rect.width, rect.height
            );

            rect
        })
        .collect()
}

/// Walk the cursor along one axis.
///
/// Before every cell but the first the cursor moves half a gutter, and after
/// each cell it moves the cell size plus the other half.
fn cursor_positions(start: f64, cell: f64, gutter: f64, count: usize) -> Vec<f64> {
    let mut positions = Vec::with_capacity(count);
    let mut cursor = start;

    for index in 0..count {
        positions.push(cursor);
        if index > 0 {
            cursor += gutter / 2.0;
        }
        cursor += cell + gutter / 2.0;
    }

    positions
}

fn place_anchor(
    grid: &Grid,
    anchor: &SpanAnchor,
    index: usize,
    x: f64,
    top: f64,
    cell: CellSize,
    gutters: &Gutters,
) -> PlacedRectangle {
    let padding = edge_padding(grid, anchor, gutters);

    let width = padding.left
        + cell.width
        + padding.right
        + (cell.width + gutters.horizontal) * f64::from(anchor.columns - 1);
    let height = padding.bottom
        + cell.height
        + padding.top
        + (cell.height + gutters.vertical) * f64::from(anchor.rows - 1);

    PlacedRectangle {
        index,
        anchor: anchor.pos,
        x,
        y: top - height,
        width,
        height,
        padding,
    }
}

/// Half a gutter on every interior edge, zero on the page boundary
fn edge_padding(grid: &Grid, anchor: &SpanAnchor, gutters: &Gutters) -> Padding {
    let half_vertical = gutters.vertical / 2.0;
    let half_horizontal = gutters.horizontal / 2.0;

    Padding {
        top: if anchor.pos.row > 0 { half_vertical } else { 0.0 },
        right: if anchor.last_col() + 1 < grid.column_count() {
            half_horizontal
        } else {
            0.0
        },
        bottom: if anchor.last_row() + 1 < grid.row_count() {
            half_vertical
        } else {
            0.0
        },
        left: if anchor.pos.col > 0 { half_horizontal } else { 0.0 },
    }
}

// =============================================================================
// Tests
// =============================================================================
