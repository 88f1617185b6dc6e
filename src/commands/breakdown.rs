//! Breakdown command

use std::path::Path;

use taskmatrix::api::{self, BreakdownRequest};
use taskmatrix::config::Config;
use taskmatrix::core::ports::{BreakdownSource, Unavailable};
use taskmatrix::output::{OutputMode, Render as _};

use super::{read_input, read_tasks};

/// Break a goal into subtasks and rank them with any existing tasks
pub fn breakdown(
    task: &str,
    energy: u32,
    response: Option<&Path>,
    tasks: Option<&Path>,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let req = BreakdownRequest {
        task: task.to_string(),
        energy_level: energy,
        tasks: tasks.map(read_tasks).transpose()?.unwrap_or_default(),
        response: response.map(read_input).transpose()?,
    };

    let source = model_source(config);
    api::breakdown(&req, source.as_ref(), &config.ranking)?.render(mode);
    Ok(())
}

/// The configured language model, or [`Unavailable`] when there is none
pub fn model_source(config: &Config) -> Box<dyn BreakdownSource> {
    #[cfg(feature = "llm")]
    match taskmatrix::llm::ChatClient::from_config(&config.llm) {
        Ok(client) => return Box::new(client),
        Err(e) => log::debug!("language model unavailable: {e}"),
    }
    #[cfg(not(feature = "llm"))]
    let _ = config;

    Box::new(Unavailable)
}
