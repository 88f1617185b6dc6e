//! Recommend command

use std::path::Path;

use taskmatrix::api::{self, RecommendRequest};
use taskmatrix::output::{OutputMode, Render as _};

use super::read_tasks;

/// Suggest tasks from a file that fit the remaining budget
pub fn recommend(file: &Path, remaining: u32, mode: OutputMode) -> anyhow::Result<()> {
    let req = RecommendRequest {
        tasks: read_tasks(file)?,
        remaining,
    };
    api::recommend(&req)?.render(mode);
    Ok(())
}
