use crate::constants::DEFAULT_GRIP_MARGIN_MM;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sheet orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SheetOrientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Common press sheet sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SheetSize {
    Sra3,
    Sra4,
    A3,
    A4,
    B3,
    /// 50 × 70 cm commercial offset sheet
    Commercial,
    Custom { width_mm: f64, height_mm: f64 },
}

impl SheetSize {
    /// Every named preset, in display order
    pub const PRESETS: [SheetSize; 6] = [
        SheetSize::Sra3,
        SheetSize::Sra4,
        SheetSize::A3,
        SheetSize::A4,
        SheetSize::B3,
        SheetSize::Commercial,
    ];

    /// Get base dimensions (portrait: width < height for named sizes)
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            SheetSize::Sra3 => (320.0, 450.0),
            SheetSize::Sra4 => (225.0, 320.0),
            SheetSize::A3 => (297.0, 420.0),
            SheetSize::A4 => (210.0, 297.0),
            SheetSize::B3 => (353.0, 500.0),
            SheetSize::Commercial => (500.0, 700.0),
            SheetSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: SheetOrientation) -> (f64, f64) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            SheetOrientation::Portrait => (w, h),
            SheetOrientation::Landscape => (h, w),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SheetSize::Sra3 => "SRA3",
            SheetSize::Sra4 => "SRA4",
            SheetSize::A3 => "A3",
            SheetSize::A4 => "A4",
            SheetSize::B3 => "B3",
            SheetSize::Commercial => "50x70",
            SheetSize::Custom { .. } => "Custom",
        }
    }
}

/// Non-printable margins around a press sheet (gripper edge and tail).
/// Whatever is left inside them is the valid area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GripMargins {
    pub top_mm: f64,
    pub bottom_mm: f64,
    pub left_mm: f64,
    pub right_mm: f64,
}

impl Default for GripMargins {
    fn default() -> Self {
        Self::uniform(DEFAULT_GRIP_MARGIN_MM)
    }
}

impl GripMargins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f64) -> Self {
        Self {
            top_mm: margin_mm,
            bottom_mm: margin_mm,
            left_mm: margin_mm,
            right_mm: margin_mm,
        }
    }

    pub fn none() -> Self {
        Self::uniform(0.0)
    }

    /// Printable (width, height) left on a sheet of the given size.
    /// Never negative.
    pub fn valid_area(&self, sheet_width: f64, sheet_height: f64) -> (f64, f64) {
        (
            (sheet_width - self.left_mm - self.right_mm).max(0.0),
            (sheet_height - self.top_mm - self.bottom_mm).max(0.0),
        )
    }
}
