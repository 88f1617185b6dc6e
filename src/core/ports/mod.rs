//! Port traits (interfaces) for external collaborators
//!
//! The engine itself needs nothing from the outside world. The one external
//! dependency of the wider service, the text-generation model that breaks
//! goals into subtasks, sits behind [`BreakdownSource`] so handlers can be
//! tested with canned replies.

mod breakdown_source;

pub use breakdown_source::{BreakdownSource, Unavailable};
