//! Layout geometry for photo pages
//!
//! This module handles all the geometric calculations for a page layout:
//! - Grid model (which cells start an image slot, and how far it spans)
//! - Geometry resolution (cell sizes, cursor walk, per-edge padding)

mod grid;
mod resolver;
mod types;

pub use grid::*;
pub use resolver::*;
pub use types::*;
