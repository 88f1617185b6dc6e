//! Domain models for taskmatrix
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - A unit of work with importance, urgency, cost and estimate
//! - [`Level`] - High or low, for importance and urgency
//! - [`Quadrant`] - Do, Decide, Delegate or Delete
//! - [`Estimate`] - A duration in whole minutes
//! - [`RankPolicy`] - Budget thresholds for ranking

mod budget;
mod estimate;
mod level;
mod matrix;
mod quadrant;
mod task;

pub use budget::{BudgetTier, DEFAULT_HIGH_MIN, DEFAULT_LOW_MAX, RankPolicy};
pub use estimate::Estimate;
pub use level::Level;
pub use matrix::QuadrantMatrix;
pub use quadrant::Quadrant;
pub use task::{Subtask, Task};
