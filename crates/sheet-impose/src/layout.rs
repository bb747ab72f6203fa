//! Copy placement
//!
//! Turns an [`ImpositionResult`] back into the rectangles of the individual
//! copies on the valid area, for previews and cutting guides.

use crate::types::*;

/// A single copy on the sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub grid_pos: GridPosition,
    /// Bleed-expanded footprint, relative to the valid area's origin
    pub bounds: Rect,
}

/// Iterate over every copy of the chosen layout, row by row.
///
/// Row 0 / column 0 sits at the valid area's origin. Yields nothing when
/// nothing fits. Copies are produced lazily, so tiny products with billions
/// of copies per sheet can still be walked (or cut short with `take`).
pub fn placements(
    input: &ImpositionInput,
    result: &ImpositionResult,
) -> impl Iterator<Item = Placement> + use<> {
    let (cell_width, cell_height) = cell_size(input, result.orientation);
    let pitch_x = cell_width + input.gutter_h;
    let pitch_y = cell_height + input.gutter_v;
    let cols = result.repetitions_h;

    (0..result.repetitions_v).flat_map(move |row| {
        (0..cols).map(move |col| Placement {
            grid_pos: GridPosition::new(row, col),
            bounds: Rect::new(
                f64::from(col) * pitch_x,
                f64::from(row) * pitch_y,
                cell_width,
                cell_height,
            ),
        })
    })
}

/// Size of one copy along the sheet's (horizontal, vertical) axes
pub fn cell_size(input: &ImpositionInput, orientation: LayoutOrientation) -> (f64, f64) {
    let (w, h) = (input.bleed_width(), input.bleed_height());
    match orientation {
        LayoutOrientation::Horizontal => (w, h),
        LayoutOrientation::Vertical => (h, w),
    }
}

/// Bounding box of all copies, gutters included
pub fn used_extent(input: &ImpositionInput, result: &ImpositionResult) -> Rect {
    if !result.fits() {
        return Rect::new(0.0, 0.0, 0.0, 0.0);
    }

    let (cell_width, cell_height) = cell_size(input, result.orientation);
    let cols = f64::from(result.repetitions_h);
    let rows = f64::from(result.repetitions_v);

    Rect::new(
        0.0,
        0.0,
        cols * cell_width + (cols - 1.0) * input.gutter_h,
        rows * cell_height + (rows - 1.0) * input.gutter_v,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ImpositionInput {
        ImpositionInput {
            product_width: 90.0,
            product_height: 50.0,
            bleed: 2.0,
            sheet_width: 520.0,
            sheet_height: 370.0,
            valid_width: 500.0,
            valid_height: 350.0,
            gutter_h: 3.0,
            gutter_v: 3.0,
        }
    }

    fn result(h: u32, v: u32, orientation: LayoutOrientation) -> ImpositionResult {
        ImpositionResult {
            repetitions_h: h,
            repetitions_v: v,
            total_repetitions: u64::from(h) * u64::from(v),
            utilization: 0.0,
            orientation,
        }
    }

    #[test]
    fn test_placements_row_major() {
        let placements: Vec<_> =
            placements(&input(), &result(5, 6, LayoutOrientation::Horizontal)).collect();
        assert_eq!(placements.len(), 30);

        assert_eq!(placements[0].grid_pos, GridPosition::new(0, 0));
        assert_eq!(placements[0].bounds, Rect::new(0.0, 0.0, 94.0, 54.0));

        assert_eq!(placements[1].grid_pos, GridPosition::new(0, 1));
        assert_eq!(placements[1].bounds.x, 97.0);

        assert_eq!(placements[5].grid_pos, GridPosition::new(1, 0));
        assert_eq!(placements[5].bounds.y, 57.0);
    }

    #[test]
    fn test_placements_stay_inside_valid_area() {
        let input = input();
        for placement in placements(&input, &result(5, 6, LayoutOrientation::Horizontal)) {
            assert!(placement.bounds.right() <= input.valid_width);
            assert!(placement.bounds.top() <= input.valid_height);
        }
    }

    #[test]
    fn test_rotated_cells_swap_dimensions() {
        let placements: Vec<_> =
            placements(&input(), &result(8, 3, LayoutOrientation::Vertical)).collect();
        assert_eq!(placements.len(), 24);
        assert_eq!(placements[0].bounds.width, 54.0);
        assert_eq!(placements[0].bounds.height, 94.0);
    }

    #[test]
    fn test_no_placements_when_nothing_fits() {
        assert_eq!(placements(&input(), &ImpositionResult::empty()).count(), 0);
    }

    #[test]
    fn test_placements_are_lazy_for_tiny_products() {
        let input = ImpositionInput::new(0.001, 0.001).with_sheet(500.0, 350.0);
        let tiny = crate::calculate(&input);
        assert!(tiny.total_repetitions > u64::from(u32::MAX));

        let first: Vec<_> = placements(&input, &tiny).take(3).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].grid_pos, GridPosition::new(0, 0));
        assert_eq!(first[2].grid_pos, GridPosition::new(0, 2));
        assert_eq!(first[2].bounds.x, 2.0 * first[0].bounds.width);
    }

    #[test]
    fn test_used_extent() {
        let extent = used_extent(&input(), &result(5, 6, LayoutOrientation::Horizontal));
        // 5 * 94 + 4 * 3
        assert_eq!(extent.width, 482.0);
        // 6 * 54 + 5 * 3
        assert_eq!(extent.height, 339.0);

        let empty = used_extent(&input(), &ImpositionResult::empty());
        assert_eq!(empty.area(), 0.0);
    }
}
