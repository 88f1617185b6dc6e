//! Prioritization engine
//!
//! Pure functions over caller-owned task lists. Nothing here holds state
//! between calls or performs I/O, so everything is safe to call from any
//! number of threads at once.
//!
//! - [`classifier`] - importance/urgency text to quadrant
//! - [`ranker`] - quadrant-then-duration ordering and matrix grouping
//! - [`scoring`] - resource-fit and duration scores
//! - [`recommender`] - tasks that fit the remaining budget

pub mod classifier;
pub mod ranker;
pub mod recommender;
pub mod scoring;

pub use classifier::classify;
pub use ranker::{group, rank, rank_with};
pub use recommender::recommend;
pub use scoring::{NEUTRAL_DURATION_SCORE, duration_score, match_score};
