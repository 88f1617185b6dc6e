//! Boundary parsers
//!
//! Turn the free text that arrives from people and language models into
//! typed values:
//! - [`parse_estimate`] - "2 days and 4 hours" into an [`Estimate`](crate::core::models::Estimate)
//! - [`parse_breakdown`] - a model's subtask list into [`Task`](crate::core::models::Task)s

mod breakdown;
mod estimate;

pub use breakdown::{breakdown_prompt, parse_breakdown};
pub use estimate::parse_estimate;
