//! Command implementations
//!
//! Each command builds an API request, calls the same pure handler the HTTP
//! server uses, and renders the result.

mod breakdown;
mod classify;
mod config_cmd;
mod rank;
mod recommend;
mod score;
#[cfg(feature = "server")]
mod serve;

use std::io::Read as _;
use std::path::Path;

use anyhow::Context as _;

use taskmatrix::api::TaskPayload;

pub use breakdown::breakdown;
pub use classify::classify;
pub use config_cmd::config_cmd;
pub use rank::{matrix, rank};
pub use recommend::recommend;
pub use score::score;
#[cfg(feature = "server")]
pub use serve::serve;

/// Read a text file, or stdin when the path is `-`
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Load a JSON array of tasks
fn read_tasks(path: &Path) -> anyhow::Result<Vec<TaskPayload>> {
    let text = read_input(path)?;
    let tasks: Vec<TaskPayload> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of tasks", path.display()))?;
    log::debug!("read {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}
