//! Quadrant classification from raw strings
//!
//! Importance and urgency usually arrive as text from a model or a form.
//! Classification is total: every input pair lands in exactly one quadrant.

use crate::core::models::{Level, Quadrant};

/// Classify a task by its importance and urgency text
///
/// Case-insensitive. Anything that is not `high` counts as `low`, so
/// malformed or empty input ends up in [`Quadrant::Delete`].
///
/// # Examples
///
/// ```
/// use taskmatrix::core::models::Quadrant;
/// use taskmatrix::core::services::classify;
///
/// assert_eq!(classify("High", "high"), Quadrant::Do);
/// assert_eq!(classify("high", "LOW"), Quadrant::Decide);
/// assert_eq!(classify("", "???"), Quadrant::Delete);
/// ```
#[must_use]
pub fn classify(importance: &str, urgency: &str) -> Quadrant {
    Quadrant::from_levels(Level::parse_lenient(importance), Level::parse_lenient(urgency))
}
