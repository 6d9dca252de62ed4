pub mod catalog;
pub mod constants;
pub mod layout;
mod options;
pub mod preview;
pub mod template;
mod types;

pub use catalog::{CatalogLoad, LayoutCatalog, LayoutEntry, PageKind};
pub use layout::{Cell, Grid, GridPosition, Padding, PlacedRectangle, resolve};
pub use options::*;
pub use preview::{ThumbnailBudget, ThumbnailProjector, ThumbnailRect, render_preview};
pub use template::{GenerationReport, PageTemplate, generate};
pub use types::*;
