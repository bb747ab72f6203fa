//! Imposition calculation
//!
//! Lays a bleed-expanded product rectangle out on a sheet's valid area in
//! a regular grid, once as given and once rotated 90°, and picks one of the
//! two layouts.
//!
//! Every function here is pure: same input, same output, no hidden state.

use crate::constants::{MAX_UTILIZATION, ROTATION_GAIN_THRESHOLD, round_percentage};
use crate::types::*;

// =============================================================================
// Public API
// =============================================================================

/// Calculate the best-fit layout of `input`'s product on its sheet.
///
/// Never fails. Degenerate input (zero, negative or non-finite lengths)
/// produces zero counts and zero utilization instead of an error.
pub fn calculate(input: &ImpositionInput) -> ImpositionResult {
    let (unrotated, rotated) = candidates(input);

    let chosen = if prefers_rotation(&unrotated, &rotated) {
        rotated
    } else {
        unrotated
    };

    log::debug!(
        "imposition candidates: horizontal {}x{}={}, vertical {}x{}={}; chose {}",
        unrotated.repetitions_h,
        unrotated.repetitions_v,
        unrotated.total,
        rotated.repetitions_h,
        rotated.repetitions_v,
        rotated.total,
        chosen.orientation,
    );

    ImpositionResult {
        repetitions_h: chosen.repetitions_h,
        repetitions_v: chosen.repetitions_v,
        total_repetitions: chosen.total,
        utilization: utilization(input, &chosen),
        orientation: chosen.orientation,
    }
}

/// Compute both candidate layouts: `(unrotated, rotated)`.
pub fn candidates(input: &ImpositionInput) -> (LayoutCandidate, LayoutCandidate) {
    let width = input.bleed_width();
    let height = input.bleed_height();

    (
        candidate(input, LayoutOrientation::Horizontal, width, height),
        candidate(input, LayoutOrientation::Vertical, height, width),
    )
}

/// Recalculate a record, replacing whatever result it carried.
pub fn update_in_place(record: &ImpositionRecord) -> ImpositionRecord {
    ImpositionRecord {
        input: record.input,
        result: Some(calculate(&record.input)),
    }
}

impl ImpositionRecord {
    /// Consume the record and return it with a fresh result
    pub fn recalculated(self) -> Self {
        update_in_place(&self)
    }
}

// =============================================================================
// Candidates
// =============================================================================

fn candidate(
    input: &ImpositionInput,
    orientation: LayoutOrientation,
    cell_width: f64,
    cell_height: f64,
) -> LayoutCandidate {
    let repetitions_h = repetitions(input.valid_width, cell_width, input.gutter_h);
    let repetitions_v = repetitions(input.valid_height, cell_height, input.gutter_v);

    LayoutCandidate {
        orientation,
        repetitions_h,
        repetitions_v,
        // Two u32 factors cannot overflow a u64
        total: u64::from(repetitions_h) * u64::from(repetitions_v),
        cell_width,
        cell_height,
    }
}

/// Count how many copies of length `cell` fit in `available`, with
/// `gutter` between neighbours but not after the last one.
///
/// Adding one gutter to both sides turns this into a plain pitch count:
/// `floor((available + gutter) / (cell + gutter))`.
fn repetitions(available: f64, cell: f64, gutter: f64) -> u32 {
    let pitch = cell + gutter;
    if pitch.is_nan() || pitch <= 0.0 {
        log::trace!("non-positive pitch {pitch} (cell {cell}, gutter {gutter}); no copies fit");
        return 0;
    }

    let count = ((available + gutter) / pitch).floor();
    if count.is_nan() || count <= 0.0 {
        return 0;
    }

    // `as` saturates at u32::MAX for very large or infinite counts
    count as u32
}

/// The rotated layout wins only on a strictly greater than 1.5× yield.
fn prefers_rotation(unrotated: &LayoutCandidate, rotated: &LayoutCandidate) -> bool {
    rotated.total as f64 > unrotated.total as f64 * ROTATION_GAIN_THRESHOLD
}

// =============================================================================
// Utilization
// =============================================================================

/// Share of the valid area covered by copies, bleed included and gutters
/// excluded, as a percentage rounded to one decimal.
fn utilization(input: &ImpositionInput, chosen: &LayoutCandidate) -> f64 {
    let total_valid_area = input.valid_area();
    if input.valid_width <= 0.0 || input.valid_height <= 0.0 || total_valid_area.is_nan() {
        return 0.0;
    }

    let used_area = chosen.total as f64 * (chosen.cell_width * chosen.cell_height);
    let percentage = used_area / total_valid_area * 100.0;
    if !percentage.is_finite() || percentage <= 0.0 {
        return 0.0;
    }

    round_percentage(percentage.min(MAX_UTILIZATION))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repetitions_counts_gutters_between_copies() {
        // 3 copies of 30 with 5 between them need exactly 100
        assert_eq!(repetitions(100.0, 30.0, 5.0), 3);
        assert_eq!(repetitions(99.9, 30.0, 5.0), 2);
        assert_eq!(repetitions(30.0, 30.0, 5.0), 1);
        assert_eq!(repetitions(29.9, 30.0, 5.0), 0);
    }

    #[test]
    fn test_repetitions_non_positive_pitch() {
        assert_eq!(repetitions(100.0, 10.0, -10.0), 0);
        assert_eq!(repetitions(100.0, 10.0, -100.0), 0);
        assert_eq!(repetitions(100.0, 0.0, 0.0), 0);
        assert_eq!(repetitions(100.0, f64::NAN, 0.0), 0);
    }

    #[test]
    fn test_repetitions_negative_available() {
        assert_eq!(repetitions(-50.0, 10.0, 0.0), 0);
        assert_eq!(repetitions(f64::NAN, 10.0, 0.0), 0);
    }

    #[test]
    fn test_repetitions_saturates() {
        assert_eq!(repetitions(f64::INFINITY, 10.0, 0.0), u32::MAX);
    }

    #[test]
    fn test_prefers_rotation_is_strict() {
        let make = |total: u32| LayoutCandidate {
            orientation: LayoutOrientation::Horizontal,
            repetitions_h: total,
            repetitions_v: 1,
            total: u64::from(total),
            cell_width: 1.0,
            cell_height: 1.0,
        };

        assert!(!prefers_rotation(&make(4), &make(6)));
        assert!(prefers_rotation(&make(4), &make(7)));
        assert!(!prefers_rotation(&make(0), &make(0)));
        assert!(prefers_rotation(&make(0), &make(1)));
    }

    #[test]
    fn test_total_does_not_saturate() {
        let input = ImpositionInput::new(0.001, 0.001).with_sheet(500.0, 350.0);
        let (unrotated, _) = candidates(&input);
        assert_eq!(
            unrotated.total,
            u64::from(unrotated.repetitions_h) * u64::from(unrotated.repetitions_v)
        );
        assert!(unrotated.total > u64::from(u32::MAX));
    }
}
