// src/analysis/score.rs
use crate::config::consts::{LABEL_STRONGLY_AGREE, LABEL_STRONGLY_DISAGREE};
use crate::data::{as_int, VoteDistribution};
use crate::error::ScoreError;

/// Which end of the five-point scale option 0 sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleOrientation {
    /// Option 0 is the best answer ("Helt enig").
    BestFirst,
    /// Option 0 is the worst answer ("Helt uenig").
    WorstFirst,
}

impl ScaleOrientation {
    /// Orientation from the label of the first answer option.
    /// Unknown labels give None; such sheets are not scored.
    pub fn from_first_option(label: &str) -> Option<Self> {
        match label.trim() {
            LABEL_STRONGLY_AGREE => Some(Self::BestFirst),
            LABEL_STRONGLY_DISAGREE => Some(Self::WorstFirst),
            _ => None,
        }
    }

    pub fn best_option_first(self) -> bool {
        matches!(self, Self::BestFirst)
    }
}

/// Weight of option `i`; 1..=5 on the five-point scale.
fn weight(option: i64, best_option_first: bool) -> f64 {
    if best_option_first {
        (5 - option) as f64
    } else {
        (1 + option) as f64
    }
}

/// Weighted mean of a five-point vote distribution.
///
/// Each option i carries weight `5 - i` when the best answer comes first,
/// `1 + i` otherwise. Every entry whose option and count parse as integers
/// is counted, so the result stays in [1, 5] only for options 0..=4 with
/// non-negative counts. Entries that do not parse are skipped. Returns
/// `ScoreError::InsufficientData` when the vote total is not positive.
pub fn calc_score(votes: VoteDistribution<'_>, best_option_first: bool) -> Result<f64, ScoreError> {
    let mut total: i64 = 0;
    let mut weighted = 0.0;

    for (key, count) in votes.entries() {
        let Ok(option) = key.trim().parse::<i64>() else {
            logd!("calc_score: skipping option {:?}", key);
            continue;
        };
        let Some(count) = as_int(count) else {
            logd!("calc_score: skipping count {} for option {}", count, option);
            continue;
        };

        total = total.saturating_add(count);
        weighted += count as f64 * weight(option, best_option_first);
    }

    if total <= 0 {
        return Err(ScoreError::InsufficientData);
    }
    Ok(weighted / total as f64)
}
