use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Malformed grid: {reason}")]
    MalformedGrid { reason: String },
    #[error(
        "Invalid span {columns}x{rows} anchored at row {row}, column {col}: {reason}"
    )]
    InvalidSpan {
        row: usize,
        col: usize,
        columns: u32,
        rows: u32,
        reason: String,
    },
    #[error("Layout '{id}': {source}")]
    Layout {
        id: String,
        #[source]
        source: Box<LayoutError>,
    },
    #[error("Unknown layout '{0}'")]
    UnknownLayout(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl LayoutError {
    /// Attach the id of the layout being processed
    pub fn in_layout(self, id: impl Into<String>) -> Self {
        Self::Layout {
            id: id.into(),
            source: Box::new(self),
        }
    }

    /// The layout id carried by this error, if any
    pub fn layout_id(&self) -> Option<&str> {
        match self {
            Self::Layout { id, .. } => Some(id),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Logical page size in the authoring tool's units (points)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageDimensions {
    pub width: f64,
    pub height: f64,
}

impl PageDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Two facing pages laid out as one page of doubled width
    pub fn spread(self) -> Self {
        Self {
            width: self.width * 2.0,
            height: self.height,
        }
    }
}

/// Page margins, subtracted from the page before the grid is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create uniform margins on all sides
    pub fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Expand one to four values the way CSS shorthand does.
    ///
    /// * 1 value: all sides
    /// * 2 values: vertical, horizontal
    /// * 3 values: top, horizontal, bottom
    /// * 4 values: top, right, bottom, left
    pub fn from_values(values: &[f64]) -> Result<Self> {
        match *values {
            [all] => Ok(Self::uniform(all)),
            [vertical, horizontal] => Ok(Self::new(vertical, horizontal, vertical, horizontal)),
            [top, horizontal, bottom] => Ok(Self::new(top, horizontal, bottom, horizontal)),
            [top, right, bottom, left] => Ok(Self::new(top, right, bottom, left)),
            _ => Err(LayoutError::Config(format!(
                "Margins take between 1 and 4 values, got {}",
                values.len()
            ))),
        }
    }

    /// Grow the margins so the content area has `width / height == ratio`.
    ///
    /// Only the axis with excess room is touched, and the extra space is split
    /// evenly between its two margins.
    pub fn fit_ratio(&self, page: PageDimensions, ratio: f64) -> Self {
        let width = page.width - self.left - self.right;
        let height = page.height - self.top - self.bottom;
        let mut adjusted = *self;

        if width / height < ratio {
            let diff = height - width / ratio;
            adjusted.top += diff / 2.0;
            adjusted.bottom += diff / 2.0;
        } else {
            let diff = width - height * ratio;
            adjusted.left += diff / 2.0;
            adjusted.right += diff / 2.0;
        }

        adjusted
    }

    pub(crate) fn is_non_negative(&self) -> bool {
        self.top >= 0.0 && self.right >= 0.0 && self.bottom >= 0.0 && self.left >= 0.0
    }
}

/// Gaps inserted between adjacent grid rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gutters {
    /// Gap between rows
    pub vertical: f64,
    /// Gap between columns
    pub horizontal: f64,
}

impl Gutters {
    pub fn new(vertical: f64, horizontal: f64) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    pub fn uniform(gutter: f64) -> Self {
        Self::new(gutter, gutter)
    }

    /// Expand one value (both gutters) or two values (vertical, horizontal)
    pub fn from_values(values: &[f64]) -> Result<Self> {
        match *values {
            [both] => Ok(Self::uniform(both)),
            [vertical, horizontal] => Ok(Self::new(vertical, horizontal)),
            _ => Err(LayoutError::Config(format!(
                "Gutters take 1 or 2 values, got {}",
                values.len()
            ))),
        }
    }

    pub(crate) fn is_non_negative(&self) -> bool {
        self.vertical >= 0.0 && self.horizontal >= 0.0
    }
}

/// Supported photo books
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BookSize {
    SmallSquare,
    StandardPortrait,
    StandardLandscape,
    LargeLandscape,
    LargeSquare,
    Magazine,
    TradeBook8x10,
    TradeBook6x9,
    TradeBook5x8,
    Custom {
        paper_id: String,
        width: f64,
        height: f64,
    },
}

impl BookSize {
    /// Every predefined book, in display order
    pub const STANDARD: [BookSize; 9] = [
        BookSize::SmallSquare,
        BookSize::StandardPortrait,
        BookSize::StandardLandscape,
        BookSize::LargeLandscape,
        BookSize::LargeSquare,
        BookSize::Magazine,
        BookSize::TradeBook8x10,
        BookSize::TradeBook6x9,
        BookSize::TradeBook5x8,
    ];

    /// Paper id understood by the authoring tool
    pub fn paper_id(&self) -> &str {
        match self {
            BookSize::SmallSquare => "7x7-blurb",
            BookSize::StandardPortrait => "8x10-blurb",
            BookSize::StandardLandscape => "10x8-blurb",
            BookSize::LargeLandscape => "12x12-blurb",
            BookSize::LargeSquare => "13x11-blurb",
            BookSize::Magazine => "8.5x11-blurb",
            BookSize::TradeBook8x10 => "8x10_true-blurb",
            BookSize::TradeBook6x9 => "6x9-blurb",
            BookSize::TradeBook5x8 => "5x8-blurb",
            BookSize::Custom { paper_id, .. } => paper_id,
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &str {
        match self {
            BookSize::SmallSquare => "Small Square",
            BookSize::StandardPortrait => "Standard Portrait",
            BookSize::StandardLandscape => "Standard Landscape",
            BookSize::LargeLandscape => "Large Landscape",
            BookSize::LargeSquare => "Large Square",
            BookSize::Magazine => "Blurb Magazine",
            BookSize::TradeBook8x10 => "Trade Book 8x10",
            BookSize::TradeBook6x9 => "Trade Book 6x9",
            BookSize::TradeBook5x8 => "Trade Book 5x8",
            BookSize::Custom { paper_id, .. } => paper_id,
        }
    }

    /// Single page dimensions in points
    pub fn dimensions(&self) -> PageDimensions {
        let (width, height) = match self {
            BookSize::SmallSquare => (495.0, 495.0),
            BookSize::StandardPortrait => (567.0, 720.0),
            BookSize::StandardLandscape => (693.0, 594.0),
            BookSize::LargeLandscape => (855.0, 864.0),
            BookSize::LargeSquare => (909.0, 783.0),
            BookSize::Magazine => (621.0, 810.0),
            BookSize::TradeBook8x10 => (585.0, 738.0),
            BookSize::TradeBook6x9 => (441.0, 666.0),
            BookSize::TradeBook5x8 => (369.0, 594.0),
            BookSize::Custom { width, height, .. } => (*width, *height),
        };
        PageDimensions::new(width, height)
    }
}
