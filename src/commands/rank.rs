//! Rank and matrix commands

use std::path::Path;

use taskmatrix::api::{self, PrioritizeRequest};
use taskmatrix::config::Config;
use taskmatrix::output::{OutputMode, Render as _};

use super::read_tasks;

/// Rank tasks from a file for a budget
pub fn rank(file: &Path, budget: u32, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let req = PrioritizeRequest {
        tasks: read_tasks(file)?,
        budget,
    };
    api::prioritize(&req, &config.ranking)?.render(mode);
    Ok(())
}

/// Rank tasks from a file and show them per quadrant
pub fn matrix(file: &Path, budget: u32, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let req = PrioritizeRequest {
        tasks: read_tasks(file)?,
        budget,
    };
    api::matrix(&req, &config.ranking)?.render(mode);
    Ok(())
}
