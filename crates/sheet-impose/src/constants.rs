//! Shared constants for sheet imposition
//!
//! This module centralizes magic numbers used by the engine and the
//! sheet presets.

// =============================================================================
// Orientation Policy
// =============================================================================

/// The rotated layout is only chosen when it yields strictly more than
/// this multiple of the unrotated layout's copies.
pub const ROTATION_GAIN_THRESHOLD: f64 = 1.5;

// =============================================================================
// Utilization
// =============================================================================

/// Decimal places kept in the utilization percentage
pub const UTILIZATION_DECIMALS: i32 = 1;

/// Upper bound for utilization (percent)
pub const MAX_UTILIZATION: f64 = 100.0;

/// Round a percentage half-up to [`UTILIZATION_DECIMALS`] places.
///
/// Only meaningful for non-negative values, which is all the engine produces.
#[inline]
pub fn round_percentage(value: f64) -> f64 {
    let factor = 10f64.powi(UTILIZATION_DECIMALS);
    (value * factor).round() / factor
}

// =============================================================================
// Grip Margins
// =============================================================================

/// Default non-printable grip margin on each side of a press sheet (mm)
pub const DEFAULT_GRIP_MARGIN_MM: f64 = 10.0;
