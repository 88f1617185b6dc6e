//! Score command

use taskmatrix::api::{self, ScoreRequest};
use taskmatrix::output::{OutputMode, Render as _};

use crate::cli::ScoreAction;

/// Compute a match or duration score
pub fn score(action: &ScoreAction, mode: OutputMode) -> anyhow::Result<()> {
    let req = match action {
        ScoreAction::Match {
            required,
            available,
        } => ScoreRequest {
            required: Some(*required),
            available: Some(*available),
            ..ScoreRequest::default()
        },
        ScoreAction::Duration { text } => ScoreRequest {
            estimated_time: Some(text.clone()),
            ..ScoreRequest::default()
        },
    };
    api::score(&req)?.render(mode);
    Ok(())
}
