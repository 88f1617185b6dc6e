//! Free-form duration parsing
//!
//! Models and people write estimates like "3 hours", "2 days and 4 hours",
//! "45 min" or just "30". A number with no unit is read as minutes, so "120"
//! is two hours. This is the boundary shim that turns those strings into a
//! typed [`Estimate`]; everything past the boundary works in minutes.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::Estimate;

/// `<number> <unit>` pairs; longest unit spellings come first in each group
static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(days?|d|hours?|hrs?|h|minutes?|mins?|m)\b")
        .expect("duration pattern is valid")
});

/// A bare number, read as minutes
static BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*$").expect("bare number pattern is valid"));

/// Parse a free-form duration
///
/// Every `<N> <unit>` pair in the text is summed, so "1 day, 2 hours and
/// 30 minutes" is 1590 minutes. Units are days (24 hours), hours and
/// minutes, with common abbreviations. A string that is only a whole number
/// is taken as minutes. Returns `None` when nothing recognizable is found.
///
/// # Examples
///
/// ```
/// use taskmatrix::parser::parse_estimate;
///
/// assert_eq!(parse_estimate("2 days and 4 hours").unwrap().minutes(), 52 * 60);
/// assert_eq!(parse_estimate("45 min").unwrap().minutes(), 45);
/// assert!(parse_estimate("soon-ish").is_none());
/// ```
#[must_use]
pub fn parse_estimate(text: &str) -> Option<Estimate> {
    let mut total = 0.0_f64;
    let mut found = false;

    for caps in UNIT_RE.captures_iter(text) {
        let Ok(value) = caps[1].parse::<f64>() else {
            continue;
        };
        let per_unit = match caps[2].to_lowercase().chars().next() {
            Some('d') => 24.0 * 60.0,
            Some('h') => 60.0,
            _ => 1.0,
        };
        total += value * per_unit;
        found = true;
    }

    if found {
        return Some(Estimate::from_minutes(to_minutes(total)));
    }

    BARE_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .map(Estimate::from_minutes)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_minutes(total: f64) -> u32 {
    // `as` saturates, so absurd inputs land on u32::MAX instead of wrapping
    total.round() as u32
}
