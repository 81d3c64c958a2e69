// src/analysis/selector.rs
use crate::config::consts::{MIN_PARTICIPANTS, SHEET_RATIO};
use crate::data::SemesterSheet;

/// Pick the most representative semester out of `sheets` (newest first).
///
/// The newest sheet wins unless the one before it has more than twice the
/// participants, or the newest has fewer than `MIN_PARTICIPANTS`. Only the
/// first two sheets are ever compared. The pick is rejected (None) when it
/// still has fewer than `MIN_PARTICIPANTS`; a missing count reads as 0.
pub fn select_best_sheet(sheets: &[SemesterSheet]) -> Option<&SemesterSheet> {
    let first = sheets.first()?;
    let mut sheet = first;

    if let Some(second) = sheets.get(1) {
        let p0 = first.participants_or_zero();
        let p1 = second.participants_or_zero();
        if p1 > p0.saturating_mul(SHEET_RATIO) || p0 < MIN_PARTICIPANTS {
            sheet = second;
        }
    }

    (sheet.participants_or_zero() >= MIN_PARTICIPANTS).then_some(sheet)
}
