//! Heuristic scores for matching tasks to capacity
//!
//! Both scores live on a 0-10 scale where higher is a better fit.

use crate::core::models::Estimate;
use crate::parser::parse_estimate;

/// Score given to durations that cannot be parsed
pub const NEUTRAL_DURATION_SCORE: f64 = 5.0;

/// How well the available resource covers what a task requires
///
/// - available covers the requirement fully: 10
/// - covers more than half: 5
/// - otherwise: `10 * available / required`
///
/// Over-budget tasks are penalized proportionally rather than excluded.
/// A task that requires nothing always scores 10.
#[must_use]
pub fn match_score(required: u32, available: u32) -> f64 {
    if required == 0 {
        return 10.0;
    }
    let ratio = f64::from(available) / f64::from(required);
    if ratio >= 1.0 {
        10.0
    } else if ratio > 0.5 {
        5.0
    } else {
        (10.0 * ratio).max(0.0)
    }
}

/// Log-scaled score for a free-form duration such as "3 hours"
///
/// `10 - log2(total hours)`, clamped to `[1, 10]`. Shorter work scores
/// higher, but long work never drops to zero. Text that cannot be read as
/// a duration gets [`NEUTRAL_DURATION_SCORE`].
#[must_use]
pub fn duration_score(estimated_time: &str) -> f64 {
    parse_estimate(estimated_time).map_or(NEUTRAL_DURATION_SCORE, Estimate::score)
}
