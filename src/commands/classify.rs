//! Classify command

use taskmatrix::api::{self, ClassifyRequest};
use taskmatrix::output::{OutputMode, Render as _};

/// Classify one importance/urgency pair
pub fn classify(importance: &str, urgency: &str, mode: OutputMode) -> anyhow::Result<()> {
    let req = ClassifyRequest {
        importance: importance.to_string(),
        urgency: urgency.to_string(),
    };
    api::classify(&req)?.render(mode);
    Ok(())
}
