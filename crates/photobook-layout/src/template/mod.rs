//! Template generation - turning layouts into authoring tool files
//!
//! This module orchestrates the generation process:
//! 1. Resolve every catalog layout against the book's page size
//! 2. Render a preview thumbnail per page
//! 3. Write the page list and the style descriptor

mod io;
mod render;

pub use io::{write_preview, write_text};
pub use render::{render_layout_style, render_page_entry, render_template_pages};

use std::path::{Path, PathBuf};

use image::RgbImage;
use log::{info, warn};
use slug::slugify;
use uuid::Uuid;

use crate::catalog::{CatalogLoad, LayoutEntry, PageKind};
use crate::constants::*;
use crate::layout::{PlacedRectangle, resolve};
use crate::options::TemplateOptions;
use crate::preview::render_preview;
use crate::types::*;

/// A resolved page, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct PageTemplate {
    /// Layout id, reused as the page id
    pub id: String,
    pub kind: PageKind,
    /// Logical page size (doubled width for spreads)
    pub page: PageDimensions,
    /// Slots in grid traversal order
    pub rectangles: Vec<PlacedRectangle>,
}

impl PageTemplate {
    /// Resolve a catalog entry for the given book
    pub fn build(
        book: &BookSize,
        entry: &LayoutEntry,
        kind: PageKind,
        margins: &Margins,
        gutters: &Gutters,
    ) -> Self {
        let page = match kind {
            PageKind::Single => book.dimensions(),
            PageKind::Spread => book.dimensions().spread(),
        };

        Self {
            id: entry.id.clone(),
            kind,
            page,
            rectangles: resolve(&entry.grid, page, margins, gutters),
        }
    }

    pub fn is_spread(&self) -> bool {
        self.kind == PageKind::Spread
    }

    /// Key the authoring tool uses to identify this page
    pub fn page_key(&self, paper_id: &str, style_slug: &str) -> String {
        format!("{}_{}_{}", paper_id, style_slug, self.id)
    }

    /// File name of the preview image
    pub fn preview_name(&self) -> String {
        format!("{}{}", self.id, PREVIEW_SUFFIX)
    }

    /// Whether any slot came out with a negative size
    pub fn has_degenerate_slots(&self) -> bool {
        self.rectangles.iter().any(PlacedRectangle::is_degenerate)
    }

    pub fn render_preview(&self) -> RgbImage {
        render_preview(self.page, &self.rectangles)
    }
}

/// Where a style's files go
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    /// `{out}/{paper}/{slug}.lrtemplate`
    pub layout_style: PathBuf,
    /// `{out}/{paper}/{slug}`
    pub style_dir: PathBuf,
    /// `{out}/{paper}/{slug}/templatePages.lua`
    pub template_pages: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: &Path, book: &BookSize, style_name: &str) -> Self {
        let slug = slugify(style_name);
        let paper_dir = out_dir.join(book.paper_id());
        let style_dir = paper_dir.join(&slug);

        Self {
            layout_style: paper_dir.join(format!("{}.{}", slug, LAYOUT_STYLE_EXTENSION)),
            template_pages: style_dir.join(TEMPLATE_PAGES_FILE),
            style_dir,
        }
    }

    pub fn preview(&self, page: &PageTemplate) -> PathBuf {
        self.style_dir.join(page.preview_name())
    }
}

/// Outcome of a generation run
#[derive(Debug)]
pub struct GenerationReport {
    pub style_name: String,
    pub paths: OutputPaths,
    /// Ids of the pages that were written, in output order
    pub pages: Vec<String>,
    /// Pages written with at least one negative-size slot
    pub degenerate: Vec<String>,
    /// Layouts that could not be processed, tagged with their id
    pub failures: Vec<LayoutError>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolve all layouts of a catalog for the configured book
pub fn build_pages(options: &TemplateOptions, load: &CatalogLoad) -> Vec<PageTemplate> {
    let margins = options.effective_margins();

    load.catalog
        .iter()
        .map(|(kind, entry)| {
            let conflicts = entry.grid.covered_conflicts();
            if !conflicts.is_empty() {
                warn!(
                    "Layout '{}': {} covered cell(s) are not empty and will be ignored: {:?}",
                    entry.id,
                    conflicts.len(),
                    conflicts
                );
            }
            PageTemplate::build(&options.book, entry, kind, &margins, &options.gutters)
        })
        .collect()
}

/// Generate the full template set for one style.
///
/// Layouts that failed to load are carried into the report; every other
/// layout is still written.
pub async fn generate(
    out_dir: impl AsRef<Path>,
    options: &TemplateOptions,
    load: CatalogLoad,
) -> Result<GenerationReport> {
    options.validate()?;

    let style_name = options.display_name();
    let paths = OutputPaths::new(out_dir.as_ref(), &options.book, &style_name);
    tokio::fs::create_dir_all(&paths.style_dir).await?;

    let pages = build_pages(options, &load);

    let layout_style = render_layout_style(&options.book, &style_name, Uuid::new_v4(), Uuid::new_v4());
    write_text(&paths.layout_style, layout_style).await?;

    for page in &pages {
        if page.has_degenerate_slots() {
            warn!("Layout '{}' has slots with negative size", page.id);
        }
        write_preview(page.render_preview(), paths.preview(page)).await?;
    }

    let template_pages = render_template_pages(&options.book, &style_name, &pages, Uuid::new_v4());
    write_text(&paths.template_pages, template_pages).await?;

    for failure in &load.failures {
        warn!("Skipped: {}", failure);
    }

    info!(
        "Generated {} page(s) for '{}' into {}",
        pages.len(),
        style_name,
        paths.style_dir.display()
    );

    Ok(GenerationReport {
        style_name,
        degenerate: pages
            .iter()
            .filter(|page| page.has_degenerate_slots())
            .map(|page| page.id.clone())
            .collect(),
        pages: pages.into_iter().map(|page| page.id).collect(),
        paths,
        failures: load.failures,
    })
}
