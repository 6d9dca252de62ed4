//! Shared constants for template generation
//!
//! This module centralizes magic numbers and constants used by the preview
//! renderer and the template writer.

// =============================================================================
// Thumbnail
// =============================================================================

/// Maximum preview width in pixels
pub const THUMBNAIL_MAX_WIDTH: f64 = 185.0;

/// Maximum preview height in pixels
pub const THUMBNAIL_MAX_HEIGHT: f64 = 100.0;

/// Arm length of the center cross drawn in each slot (pixels)
pub const CROSSHAIR_SIZE: i64 = 3;

// =============================================================================
// Preview Colors
// =============================================================================

/// Page background
pub const BACKGROUND_COLOR: [u8; 3] = [0xFF, 0xFF, 0xFF];

/// Slot fill (#8C8C8C)
pub const SLOT_FILL_COLOR: [u8; 3] = [0x8C, 0x8C, 0x8C];

/// Slot outline (#959595)
pub const SLOT_OUTLINE_COLOR: [u8; 3] = [0x95, 0x95, 0x95];

/// Center cross (#333333)
pub const CROSSHAIR_COLOR: [u8; 3] = [0x33, 0x33, 0x33];

// =============================================================================
// Template Output
// =============================================================================

/// File name of the page list inside each style directory
pub const TEMPLATE_PAGES_FILE: &str = "templatePages.lua";

/// Extension of the layout style descriptor
pub const LAYOUT_STYLE_EXTENSION: &str = "lrtemplate";

/// Suffix appended to a page id to name its preview image
pub const PREVIEW_SUFFIX: &str = "_preview.png";

/// Caption settings written for every photo cell
pub const CAPTION_SPACING: u32 = 9;
