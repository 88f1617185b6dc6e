//! Eisenhower quadrants
//!
//! A quadrant is derived from a task's importance and urgency, never stored.

use serde::{Deserialize, Serialize};

use super::Level;

/// One cell of the importance x urgency matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quadrant {
    /// Important and urgent
    Do,
    /// Important, not urgent
    Decide,
    /// Urgent, not important
    Delegate,
    /// Neither important nor urgent
    Delete,
}

impl Quadrant {
    /// All quadrants, highest priority first
    pub const ALL: [Self; 4] = [Self::Do, Self::Decide, Self::Delegate, Self::Delete];

    /// Map an importance/urgency pair to its quadrant
    #[must_use]
    pub const fn from_levels(importance: Level, urgency: Level) -> Self {
        match (importance, urgency) {
            (Level::High, Level::High) => Self::Do,
            (Level::High, Level::Low) => Self::Decide,
            (Level::Low, Level::High) => Self::Delegate,
            (Level::Low, Level::Low) => Self::Delete,
        }
    }

    /// Priority weight used for ordering (Do=4 ... Delete=1)
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Do => 4,
            Self::Decide => 3,
            Self::Delegate => 2,
            Self::Delete => 1,
        }
    }

    /// Human-readable description of the quadrant
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Do => "Important & Urgent",
            Self::Decide => "Important & Not Urgent",
            Self::Delegate => "Not Important & Urgent",
            Self::Delete => "Not Important & Not Urgent",
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Do => write!(f, "do"),
            Self::Decide => write!(f, "decide"),
            Self::Delegate => write!(f, "delegate"),
            Self::Delete => write!(f, "delete"),
        }
    }
}
