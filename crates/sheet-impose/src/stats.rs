use crate::types::*;

/// Calculate how many sheets a print run of `quantity` copies needs
pub fn calculate_run(result: &ImpositionResult, quantity: u64) -> Result<RunStatistics> {
    let copies_per_sheet = result.total_repetitions;

    if quantity == 0 {
        return Ok(RunStatistics {
            quantity,
            copies_per_sheet,
            sheets: 0,
            copies_printed: 0,
            overs: 0,
        });
    }

    if copies_per_sheet == 0 {
        return Err(ImposeError::NoFit);
    }

    let sheets = quantity.div_ceil(copies_per_sheet);
    let copies_printed = sheets.saturating_mul(copies_per_sheet);

    log::debug!(
        "run of {} at {} per sheet: {} sheets, {} overs",
        quantity,
        copies_per_sheet,
        sheets,
        copies_printed.saturating_sub(quantity)
    );

    Ok(RunStatistics {
        quantity,
        copies_per_sheet,
        sheets,
        copies_printed,
        overs: copies_printed.saturating_sub(quantity),
    })
}
