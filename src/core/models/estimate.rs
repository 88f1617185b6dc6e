//! Typed task duration estimate

use serde::{Deserialize, Serialize};

/// Minutes in an hour
const MINUTES_PER_HOUR: u32 = 60;

/// Hours in a day
const HOURS_PER_DAY: u32 = 24;

/// An estimated duration, stored as whole minutes
///
/// Serializes as a bare number of minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Estimate {
    minutes: u32,
}

impl Estimate {
    /// Create an estimate from minutes
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Create an estimate from hours
    #[must_use]
    pub const fn from_hours(hours: u32) -> Self {
        Self::from_minutes(hours.saturating_mul(MINUTES_PER_HOUR))
    }

    /// Total minutes
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.minutes
    }

    /// Total hours, fractional
    #[must_use]
    pub fn hours(self) -> f64 {
        f64::from(self.minutes) / f64::from(MINUTES_PER_HOUR)
    }

    /// Log-scaled duration score in `[1, 10]`
    ///
    /// `10 - log2(hours)`: one hour scores 10, two hours 9, and anything from
    /// 512 hours up bottoms out at 1. Sub-hour (and zero) estimates cap at 10.
    #[must_use]
    pub fn score(self) -> f64 {
        (10.0 - self.hours().log2()).clamp(1.0, 10.0)
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let per_day = HOURS_PER_DAY * MINUTES_PER_HOUR;
        let days = self.minutes / per_day;
        let hours = (self.minutes % per_day) / MINUTES_PER_HOUR;
        let minutes = self.minutes % MINUTES_PER_HOUR;

        let mut parts = Vec::new();
        if days > 0 {
            parts.push(plural(days, "day"));
        }
        if hours > 0 {
            parts.push(plural(hours, "hour"));
        }
        if minutes > 0 || parts.is_empty() {
            parts.push(plural(minutes, "minute"));
        }
        write!(f, "{}", parts.join(" "))
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 { format!("{n} {unit}") } else { format!("{n} {unit}s") }
}
