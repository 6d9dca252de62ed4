use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for one generated set of layout templates
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemplateOptions {
    pub book: BookSize,

    /// Style name; derived from margins and gutters when not set
    pub name: Option<String>,

    pub margins: Margins,
    pub gutters: Gutters,

    /// Desired content width / height; margins grow to match it
    pub ratio: Option<f64>,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            book: BookSize::StandardLandscape,
            name: None,
            margins: Margins::default(),
            gutters: Gutters::default(),
            ratio: None,
        }
    }
}

impl TemplateOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let page = self.book.dimensions();
        if page.width <= 0.0 || page.height <= 0.0 {
            return Err(LayoutError::Config(format!(
                "Page size must be positive, got {}x{}",
                page.width, page.height
            )));
        }

        if !self.margins.is_non_negative() {
            return Err(LayoutError::Config("Margins must not be negative".to_string()));
        }

        if !self.gutters.is_non_negative() {
            return Err(LayoutError::Config("Gutters must not be negative".to_string()));
        }

        if let Some(ratio) = self.ratio {
            if !(ratio.is_finite() && ratio > 0.0) {
                return Err(LayoutError::Config(format!(
                    "Content ratio must be positive, got {}",
                    ratio
                )));
            }
        }

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(LayoutError::Config("Style name must not be empty".to_string()));
            }
            // The slug names the output directory and files
            if slug::slugify(name).is_empty() {
                return Err(LayoutError::Config(format!(
                    "Style name '{}' has no letters or digits",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Margins after applying the content ratio, if any.
    ///
    /// The ratio is fitted against a single page, so spreads keep the same
    /// margins as single pages.
    pub fn effective_margins(&self) -> Margins {
        match self.ratio {
            Some(ratio) => self.margins.fit_ratio(self.book.dimensions(), ratio),
            None => self.margins,
        }
    }

    /// The style name, or a descriptive default such as
    /// `"Margin 10,20, gutter 5, ratio 1.5"`
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }

        let margins = &self.margins;
        let margin_values = compact_values(&[margins.top, margins.right, margins.bottom, margins.left]);
        let gutter_values = compact_values(&[self.gutters.vertical, self.gutters.horizontal]);

        let mut name = format!("Margin {}, gutter {}", margin_values, gutter_values);
        if let Some(ratio) = self.ratio {
            name.push_str(&format!(", ratio {}", ratio));
        }
        name
    }
}

/// Shortest shorthand that expands back to the same values
fn compact_values(values: &[f64]) -> String {
    let shortest = match *values {
        [top, right, bottom, left] if top == bottom && right == left && top == right => 1,
        [top, right, bottom, left] if top == bottom && right == left => 2,
        [_, right, _, left] if right == left => 3,
        [vertical, horizontal] if vertical == horizontal => 1,
        _ => values.len(),
    };

    values[..shortest]
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
