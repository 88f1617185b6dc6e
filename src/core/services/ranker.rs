//! Task ranking
//!
//! Orders tasks by quadrant first, then by estimated duration in a direction
//! chosen by the budget tier. Sorting is stable throughout, so ties keep the
//! caller's order.

use std::cmp::Ordering;

use crate::core::models::{BudgetTier, Estimate, QuadrantMatrix, RankPolicy, Task};

/// Rank tasks for a budget using the default thresholds (low <= 3, high >= 8)
///
/// Returns a new vector; the input is left untouched.
#[must_use]
pub fn rank(tasks: &[Task], budget: u32) -> Vec<Task> {
    rank_with(tasks, budget, &RankPolicy::default())
}

/// Rank tasks for a budget with explicit thresholds
///
/// Within a quadrant:
/// - low budget: shortest estimate first (quick wins)
/// - high budget: longest estimate first (use the capacity while it lasts)
/// - medium budget: input order
///
/// Tasks without an estimate go after estimated ones in their quadrant.
#[must_use]
pub fn rank_with(tasks: &[Task], budget: u32, policy: &RankPolicy) -> Vec<Task> {
    let tier = policy.tier(budget);
    let mut ranked = tasks.to_vec();
    ranked.sort_by(|a, b| {
        b.quadrant()
            .weight()
            .cmp(&a.quadrant().weight())
            .then_with(|| by_estimate(a.estimate, b.estimate, tier))
    });
    ranked
}

/// Group tasks into the four quadrants, keeping their order within each
#[must_use]
pub fn group(tasks: &[Task]) -> QuadrantMatrix {
    let mut matrix = QuadrantMatrix::default();
    for task in tasks {
        matrix.push(task.clone());
    }
    matrix
}

fn by_estimate(a: Option<Estimate>, b: Option<Estimate>, tier: BudgetTier) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match tier {
            BudgetTier::Low => a.cmp(&b),
            BudgetTier::High => b.cmp(&a),
            BudgetTier::Medium => Ordering::Equal,
        },
        _ if tier == BudgetTier::Medium => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
