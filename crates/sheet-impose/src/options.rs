use crate::presets::{GripMargins, SheetOrientation, SheetSize};
use crate::types::*;

impl ImpositionInput {
    /// Start a job for a product of the given nominal size.
    ///
    /// Bleed and gutters start at zero and there is no sheet yet; chain
    /// [`with_sheet`](Self::with_sheet) or
    /// [`with_sheet_and_margins`](Self::with_sheet_and_margins).
    pub fn new(product_width: f64, product_height: f64) -> Self {
        Self {
            product_width,
            product_height,
            bleed: 0.0,
            sheet_width: 0.0,
            sheet_height: 0.0,
            valid_width: 0.0,
            valid_height: 0.0,
            gutter_h: 0.0,
            gutter_v: 0.0,
        }
    }

    pub fn with_bleed(mut self, bleed: f64) -> Self {
        self.bleed = bleed;
        self
    }

    pub fn with_gutters(mut self, gutter_h: f64, gutter_v: f64) -> Self {
        self.gutter_h = gutter_h;
        self.gutter_v = gutter_v;
        self
    }

    /// Use the whole sheet as the valid area
    pub fn with_sheet(mut self, sheet_width: f64, sheet_height: f64) -> Self {
        self.sheet_width = sheet_width;
        self.sheet_height = sheet_height;
        self.valid_width = sheet_width;
        self.valid_height = sheet_height;
        self
    }

    pub fn with_sheet_and_margins(
        mut self,
        sheet_width: f64,
        sheet_height: f64,
        margins: &GripMargins,
    ) -> Self {
        let (valid_width, valid_height) = margins.valid_area(sheet_width, sheet_height);
        self.sheet_width = sheet_width;
        self.sheet_height = sheet_height;
        self.valid_width = valid_width;
        self.valid_height = valid_height;
        self
    }

    pub fn with_preset(
        self,
        size: SheetSize,
        orientation: SheetOrientation,
        margins: &GripMargins,
    ) -> Self {
        let (w, h) = size.dimensions_with_orientation(orientation);
        self.with_sheet_and_margins(w, h, margins)
    }

    /// Override the valid area without touching the sheet size
    pub fn with_valid_area(mut self, valid_width: f64, valid_height: f64) -> Self {
        self.valid_width = valid_width;
        self.valid_height = valid_height;
        self
    }

    /// Check the input for values a sensible caller would not send.
    ///
    /// The engine accepts anything; this is for front ends that want to
    /// flag suspicious jobs before quoting them.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("productWidth", self.product_width),
            ("productHeight", self.product_height),
            ("bleed", self.bleed),
            ("sheetWidth", self.sheet_width),
            ("sheetHeight", self.sheet_height),
            ("validWidth", self.valid_width),
            ("validHeight", self.valid_height),
            ("gutterH", self.gutter_h),
            ("gutterV", self.gutter_v),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ImposeError::Config(format!(
                "{} must be a finite number, got {}",
                name, value
            )));
        }

        if self.product_width <= 0.0 || self.product_height <= 0.0 {
            return Err(ImposeError::Config(
                "Product dimensions must be greater than zero".to_string(),
            ));
        }

        if self.valid_width <= 0.0 || self.valid_height <= 0.0 {
            return Err(ImposeError::Config(
                "Valid area must be greater than zero".to_string(),
            ));
        }

        if self.bleed < 0.0 {
            return Err(ImposeError::Config("Bleed cannot be negative".to_string()));
        }

        if self.gutter_h < 0.0 || self.gutter_v < 0.0 {
            return Err(ImposeError::Config("Gutters cannot be negative".to_string()));
        }

        if self.valid_width > self.sheet_width || self.valid_height > self.sheet_height {
            return Err(ImposeError::Config(format!(
                "Valid area {}x{} exceeds sheet {}x{}",
                self.valid_width, self.valid_height, self.sheet_width, self.sheet_height
            )));
        }

        Ok(())
    }

    /// Load a job from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let input = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse job: {}", e)))?;
        Ok(input)
    }

    /// Save a job to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize job: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl ImpositionRecord {
    /// Load a record (input plus optional stale result) from a JSON file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let record = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse record: {}", e)))?;
        Ok(record)
    }

    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize record: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
