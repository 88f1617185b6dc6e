//! Resource budget tiers
//!
//! A budget is a plain `u32`: an energy level from 0 to 10, or a spoon count.
//! Ranking only cares which tier it falls into.

use serde::{Deserialize, Serialize};

/// Budgets at or below this are low
pub const DEFAULT_LOW_MAX: u32 = 3;

/// Budgets at or above this are high
pub const DEFAULT_HIGH_MIN: u32 = 8;

/// How much capacity is available for a planning cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    /// Prefer quick wins
    Low,
    /// Keep the caller's order
    Medium,
    /// Tackle large tasks while capacity lasts
    High,
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Thresholds that split a budget into tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankPolicy {
    /// Highest budget still considered low
    #[serde(default = "default_low_max")]
    pub low_max: u32,
    /// Lowest budget considered high
    #[serde(default = "default_high_min")]
    pub high_min: u32,
}

const fn default_low_max() -> u32 {
    DEFAULT_LOW_MAX
}

const fn default_high_min() -> u32 {
    DEFAULT_HIGH_MIN
}

impl Default for RankPolicy {
    fn default() -> Self {
        Self {
            low_max: DEFAULT_LOW_MAX,
            high_min: DEFAULT_HIGH_MIN,
        }
    }
}

impl RankPolicy {
    /// Tier for a budget
    ///
    /// The low check wins if the thresholds overlap.
    #[must_use]
    pub const fn tier(&self, budget: u32) -> BudgetTier {
        if budget <= self.low_max {
            BudgetTier::Low
        } else if budget >= self.high_min {
            BudgetTier::High
        } else {
            BudgetTier::Medium
        }
    }
}
