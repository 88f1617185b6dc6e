//! Importance and urgency levels
//!
//! Both axes of the matrix are two-valued. Parsing is permissive: anything
//! that is not recognizably `high` is treated as `low`.

use serde::{Deserialize, Serialize};

/// A two-valued rating used for both importance and urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Level {
    /// High importance / high urgency
    High,
    /// Low importance / low urgency (also the fallback for unknown input)
    #[default]
    Low,
}

impl Level {
    /// Parse a level, treating anything other than `high` as `Low`
    ///
    /// Matching ignores case and surrounding whitespace. Never fails.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("high") {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<String> for Level {
    fn from(s: String) -> Self {
        Self::parse_lenient(&s)
    }
}

impl From<&str> for Level {
    fn from(s: &str) -> Self {
        Self::parse_lenient(s)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    /// Strict parse, for places (like CLI arguments) where typos should be reported
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            _ => Err(format!("Invalid level: {s}. Use: high, low")),
        }
    }
}
