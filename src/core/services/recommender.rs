//! Budget-fit recommendations
//!
//! Given what is left of today's budget, suggest the tasks that still fit,
//! biggest first, so the remaining capacity is spent productively.

use crate::core::models::Task;

/// Tasks whose remaining cost fits within `remaining`, most expensive first
///
/// Completed tasks are skipped. Ties keep their input order. An empty
/// result means nothing fits; callers should suggest resting or a
/// low-effort activity instead of showing an empty list.
#[must_use]
pub fn recommend(tasks: &[Task], remaining: u32) -> Vec<Task> {
    let mut fitting: Vec<Task> = tasks
        .iter()
        .filter(|t| !t.is_done() && t.remaining_cost() <= remaining)
        .cloned()
        .collect();
    fitting.sort_by_key(|t| std::cmp::Reverse(t.remaining_cost()));
    fitting
}
