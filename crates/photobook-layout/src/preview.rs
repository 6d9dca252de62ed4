//! Preview thumbnails
//!
//! Projects resolved page geometry into a small pixel space and draws it.
//! Projection is pure; drawing goes into a buffer the caller owns.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::constants::*;
use crate::layout::PlacedRectangle;
use crate::types::PageDimensions;

/// Maximum thumbnail size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailBudget {
    pub width: f64,
    pub height: f64,
}

impl Default for ThumbnailBudget {
    fn default() -> Self {
        Self {
            width: THUMBNAIL_MAX_WIDTH,
            height: THUMBNAIL_MAX_HEIGHT,
        }
    }
}

/// A projected slot in image coordinates (origin top-left, y down).
///
/// Bounds are inclusive pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl ThumbnailRect {
    /// Midpoint of the bounds, rounded down
    pub fn center(&self) -> (i64, i64) {
        let x = ((self.right - self.left) as f64 / 2.0 + self.left as f64).floor() as i64;
        let y = ((self.bottom - self.top) as f64 / 2.0 + self.top as f64).floor() as i64;
        (x, y)
    }

    /// The vertical and horizontal arms of the center marker, as
    /// `((x0, y0), (x1, y1))` segments
    pub fn crosshair(&self) -> [((i64, i64), (i64, i64)); 2] {
        let (cx, cy) = self.center();
        [
            ((cx, cy - CROSSHAIR_SIZE), (cx, cy + CROSSHAIR_SIZE)),
            ((cx - CROSSHAIR_SIZE, cy), (cx + CROSSHAIR_SIZE, cy)),
        ]
    }
}

/// Maps full-resolution page coordinates into thumbnail pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailProjector {
    page: PageDimensions,
    ratio: f64,
}

impl ThumbnailProjector {
    /// Pick the single scale factor that fits `page` inside `budget`
    pub fn new(page: PageDimensions, budget: ThumbnailBudget) -> Self {
        let ratio = (page.width / budget.width).max(page.height / budget.height);
        Self { page, ratio }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Thumbnail size in pixels
    pub fn page_size(&self) -> (u32, u32) {
        (
            self.scale(self.page.width).max(0) as u32,
            self.scale(self.page.height).max(0) as u32,
        )
    }

    /// Project one coordinate, rounding to the nearest pixel
    pub fn scale(&self, coordinate: f64) -> i64 {
        (coordinate / self.ratio).round() as i64
    }

    /// Project the padded footprint of a slot.
    ///
    /// Each edge is rounded on its own, so widths come from rounded edges
    /// rather than being rounded themselves.
    pub fn project(&self, rect: &PlacedRectangle) -> ThumbnailRect {
        let page_top = self.page.height - rect.top();
        ThumbnailRect {
            left: self.scale(rect.x + rect.padding.left),
            top: self.scale(page_top + rect.padding.top),
            right: self.scale(rect.x + rect.width - rect.padding.right),
            bottom: self.scale(page_top + rect.height - rect.padding.bottom),
        }
    }

    pub fn project_all(&self, rects: &[PlacedRectangle]) -> Vec<ThumbnailRect> {
        rects.iter().map(|rect| self.project(rect)).collect()
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Colors used when drawing a preview
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailStyle {
    pub background: Rgb<u8>,
    pub fill: Rgb<u8>,
    pub outline: Rgb<u8>,
    pub crosshair: Rgb<u8>,
}

impl Default for ThumbnailStyle {
    fn default() -> Self {
        Self {
            background: Rgb(BACKGROUND_COLOR),
            fill: Rgb(SLOT_FILL_COLOR),
            outline: Rgb(SLOT_OUTLINE_COLOR),
            crosshair: Rgb(CROSSHAIR_COLOR),
        }
    }
}

/// Draw projected slots into an existing image.
///
/// Anything outside the buffer is clipped.
pub fn render_into(image: &mut RgbImage, rects: &[ThumbnailRect], style: &ThumbnailStyle) {
    for rect in rects {
        let (left, right) = (rect.left.min(rect.right), rect.left.max(rect.right));
        let (top, bottom) = (rect.top.min(rect.bottom), rect.top.max(rect.bottom));

        let bounds = Rect::at(left as i32, top as i32)
            .of_size((right - left + 1) as u32, (bottom - top + 1) as u32);
        draw_filled_rect_mut(image, bounds, style.fill);
        draw_hollow_rect_mut(image, bounds, style.outline);

        for ((x0, y0), (x1, y1)) in rect.crosshair() {
            draw_line_segment_mut(
                image,
                (x0 as f32, y0 as f32),
                (x1 as f32, y1 as f32),
                style.crosshair,
            );
        }
    }
}

/// Render a complete preview for a page and its slots
pub fn render_preview(page: PageDimensions, rects: &[PlacedRectangle]) -> RgbImage {
    render_preview_with(page, rects, ThumbnailBudget::default(), &ThumbnailStyle::default())
}

pub fn render_preview_with(
    page: PageDimensions,
    rects: &[PlacedRectangle],
    budget: ThumbnailBudget,
    style: &ThumbnailStyle,
) -> RgbImage {
    let projector = ThumbnailProjector::new(page, budget);
    let (width, height) = projector.page_size();

    let mut image = RgbImage::from_pixel(width, height, style.background);
    render_into(&mut image, &projector.project_all(rects), style);
    image
}

// =============================================================================
// Tests
// =============================================================================
