//! Layout catalog
//!
//! A named collection of page grids, split into single-page layouts and
//! double-page (spread) layouts. The catalog is built once and passed by
//! reference to whatever needs it.

mod builtin;

use crate::layout::{Grid, RawGrid};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Whether a layout covers one page or a two-page spread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Single,
    Spread,
}

/// A grid with its stable identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry {
    pub id: String,
    pub grid: Grid,
}

impl LayoutEntry {
    pub fn new(id: impl Into<String>, grid: Grid) -> Self {
        Self {
            id: id.into(),
            grid,
        }
    }

    fn from_raw(id: &str, raw: RawGrid) -> Result<Self> {
        let grid = Grid::from_raw(raw).map_err(|e| e.in_layout(id))?;
        Ok(Self::new(id, grid))
    }
}

/// Immutable set of layouts.
///
/// Ids are opaque to the catalog; duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutCatalog {
    pub single: Vec<LayoutEntry>,
    pub double: Vec<LayoutEntry>,
}

/// Outcome of loading a catalog whose entries are validated one by one
#[derive(Debug, Default)]
pub struct CatalogLoad {
    pub catalog: LayoutCatalog,
    /// Entries that failed validation, tagged with their layout id
    pub failures: Vec<LayoutError>,
}

impl CatalogLoad {
    /// Turn the first failure into an error
    pub fn into_result(self) -> Result<LayoutCatalog> {
        match self.failures.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.catalog),
        }
    }
}

impl LayoutCatalog {
    /// The layouts shipped with the tool
    pub fn builtin() -> CatalogLoad {
        let mut load = CatalogLoad::default();
        collect_raw(builtin::SINGLE_PAGES, &mut load.catalog.single, &mut load.failures);
        collect_raw(builtin::DOUBLE_PAGES, &mut load.catalog.double, &mut load.failures);
        load
    }

    /// Parse a catalog from JSON.
    ///
    /// Expected shape: `{"single": [{"id": "...", "grid": [[[1, 1], null]]}], "double": []}`.
    /// Each grid is validated separately, so one broken layout does not hide
    /// the others.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<CatalogLoad> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let mut load = CatalogLoad::default();
        collect_json(raw.single, &mut load.catalog.single, &mut load.failures);
        collect_json(raw.double, &mut load.catalog.double, &mut load.failures);
        Ok(load)
    }

    /// Load a catalog from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<CatalogLoad> {
        let text = tokio::fs::read_to_string(path).await?;
        Self::from_json(&text)
    }

    /// Look up a layout by id, single pages first
    pub fn get(&self, id: &str) -> Result<(PageKind, &LayoutEntry)> {
        self.iter()
            .find(|(_, entry)| entry.id == id)
            .ok_or_else(|| LayoutError::UnknownLayout(id.to_string()))
    }

    /// All layouts: single pages first, then spreads, each in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (PageKind, &LayoutEntry)> + '_ {
        self.single
            .iter()
            .map(|entry| (PageKind::Single, entry))
            .chain(self.double.iter().map(|entry| (PageKind::Spread, entry)))
    }

    pub fn len(&self) -> usize {
        self.single.len() + self.double.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn collect_raw(
    raw: &[(&str, RawGrid)],
    entries: &mut Vec<LayoutEntry>,
    failures: &mut Vec<LayoutError>,
) {
    for &(id, grid) in raw {
        match LayoutEntry::from_raw(id, grid) {
            Ok(entry) => entries.push(entry),
            Err(err) => failures.push(err),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    single: Vec<RawEntry>,
    #[serde(default)]
    double: Vec<RawEntry>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawEntry {
    id: String,
    grid: Vec<Vec<crate::layout::Cell>>,
}

#[cfg(feature = "serde")]
fn collect_json(raw: Vec<RawEntry>, entries: &mut Vec<LayoutEntry>, failures: &mut Vec<LayoutError>) {
    for RawEntry { id, grid } in raw {
        match Grid::new(grid) {
            Ok(grid) => entries.push(LayoutEntry::new(id, grid)),
            Err(err) => failures.push(err.in_layout(id)),
        }
    }
}
