//! Breakdown source port
//!
//! Defines the interface to whatever turns a goal into a list of subtasks.

/// Something that can break a goal into subtasks
///
/// Implementations return the raw reply text; reshaping it into tasks is
/// done by [`crate::parser::parse_breakdown`].
pub trait BreakdownSource: Send + Sync {
    /// Ask for a breakdown of `task` for someone at `energy_level` out of 10
    fn breakdown(&self, task: &str, energy_level: u32) -> anyhow::Result<String>;
}

/// A source used when no language model is configured
///
/// Always fails, so callers must supply a reply themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl BreakdownSource for Unavailable {
    fn breakdown(&self, _task: &str, _energy_level: u32) -> anyhow::Result<String> {
        anyhow::bail!("no language model is configured; supply the model reply in the request")
    }
}
