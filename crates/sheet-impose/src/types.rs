use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Product does not fit on the sheet")]
    NoFit,
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// How the product is laid out on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutOrientation {
    /// Product placed as given (width along the sheet's horizontal axis)
    #[default]
    Horizontal,
    /// Product rotated 90°
    Vertical,
}

impl LayoutOrientation {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutOrientation::Horizontal => "horizontal",
            LayoutOrientation::Vertical => "vertical",
        }
    }

    pub fn is_rotated(self) -> bool {
        self == LayoutOrientation::Vertical
    }
}

impl std::fmt::Display for LayoutOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the engine needs to lay out one product on one sheet.
///
/// All lengths share a single unit (millimeters throughout this crate,
/// but the engine never assumes it).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ImpositionInput {
    /// Nominal product width
    pub product_width: f64,
    /// Nominal product height
    pub product_height: f64,
    /// Bleed added to every side of the product
    pub bleed: f64,
    /// Physical sheet width (carried for display, not used in packing)
    pub sheet_width: f64,
    /// Physical sheet height (carried for display, not used in packing)
    pub sheet_height: f64,
    /// Printable width of the sheet
    pub valid_width: f64,
    /// Printable height of the sheet
    pub valid_height: f64,
    /// Space between neighbouring copies along the horizontal axis
    pub gutter_h: f64,
    /// Space between neighbouring copies along the vertical axis
    pub gutter_v: f64,
}

impl ImpositionInput {
    /// Product footprint including bleed, unrotated
    pub fn bleed_width(&self) -> f64 {
        self.product_width + 2.0 * self.bleed
    }

    pub fn bleed_height(&self) -> f64 {
        self.product_height + 2.0 * self.bleed
    }

    pub fn valid_area(&self) -> f64 {
        self.valid_width * self.valid_height
    }
}

/// Outcome of an imposition calculation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ImpositionResult {
    /// Copies along the horizontal axis
    pub repetitions_h: u32,
    /// Copies along the vertical axis
    pub repetitions_v: u32,
    /// Copies per sheet; always `repetitions_h * repetitions_v`
    pub total_repetitions: u64,
    /// Percentage of the valid area covered by copies (one decimal)
    pub utilization: f64,
    pub orientation: LayoutOrientation,
}

impl ImpositionResult {
    /// A result with nothing placed
    pub fn empty() -> Self {
        Self {
            repetitions_h: 0,
            repetitions_v: 0,
            total_repetitions: 0,
            utilization: 0.0,
            orientation: LayoutOrientation::Horizontal,
        }
    }

    pub fn fits(&self) -> bool {
        self.total_repetitions > 0
    }
}

/// One of the two layouts the engine weighs against each other
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCandidate {
    pub orientation: LayoutOrientation,
    pub repetitions_h: u32,
    pub repetitions_v: u32,
    pub total: u64,
    /// Footprint of one copy along the sheet's horizontal axis
    pub cell_width: f64,
    /// Footprint of one copy along the sheet's vertical axis
    pub cell_height: f64,
}

/// An input together with the result last computed for it, if any.
///
/// Serialized as one flat object: the input fields, followed by the result
/// fields when a result is present. Callers that keep a job around between
/// edits hold one of these and refresh it with [`crate::update_in_place`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpositionRecord {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub input: ImpositionInput,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub result: Option<ImpositionResult>,
}

impl From<ImpositionInput> for ImpositionRecord {
    fn from(input: ImpositionInput) -> Self {
        Self {
            input,
            result: None,
        }
    }
}

/// Position within the copy grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = first row from the valid-area origin)
    pub row: u32,
    /// Column index (0 = first column from the valid-area origin)
    pub col: u32,
}

impl GridPosition {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Axis-aligned rectangle in the valid area's coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Sheet requirements for a print run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RunStatistics {
    /// Copies ordered
    pub quantity: u64,
    /// Copies per sheet for the chosen layout
    pub copies_per_sheet: u64,
    /// Sheets to print
    pub sheets: u64,
    /// Copies that come off the press
    pub copies_printed: u64,
    /// Surplus copies on the last sheet
    pub overs: u64,
}
