//! Config command

use std::path::Path;

use taskmatrix::config::Config;
use taskmatrix::output::{ConfigResult, OperationResult, OutputMode, Render as _};

/// Show the effective configuration, or write it out with `init`
pub fn config_cmd(
    path: &Path,
    config: &Config,
    init: bool,
    force: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if !init {
        ConfigResult {
            path: path.display().to_string(),
            exists: path.exists(),
            config: config.clone(),
        }
        .render(mode);
        return Ok(());
    }

    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    config.save_to(path)?;
    log::info!("wrote {}", path.display());

    OperationResult {
        success: true,
        message: format!("Wrote {}", path.display()),
    }
    .render(mode);
    Ok(())
}
