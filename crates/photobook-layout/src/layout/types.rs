//! Layout data types
//!
//! These types carry the resolved geometry from the resolver to the
//! thumbnail projector and the template writer.

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Per-edge inset of a placed rectangle.
///
/// Interior edges get half the adjacent gutter, edges on the page boundary
/// get nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// The resolved slot for one span anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedRectangle {
    /// 1-based slot index in row-major anchor order
    pub index: usize,
    /// Anchor position in the grid
    pub anchor: GridPosition,
    /// X position of the left edge, from the left page edge
    pub x: f64,
    /// Y position of the bottom edge, from the bottom page edge
    pub y: f64,
    /// Width including padding
    pub width: f64,
    /// Height including padding
    pub height: f64,
    pub padding: Padding,
}

impl PlacedRectangle {
    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// True when margins or gutters left no room for this slot
    pub fn is_degenerate(&self) -> bool {
        self.width < 0.0 || self.height < 0.0
    }
}
