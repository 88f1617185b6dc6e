//! Model reply parsing
//!
//! A text-generation model is asked to break a goal into subtasks, one per
//! dashed line, each followed by labelled lines:
//!
//! ```text
//! - Gather receipts from the drawer
//!   Estimated time: 20 minutes
//!   Importance: high
//!   Urgency: low
//! ```
//!
//! The reply is free text, so parsing is forgiving: a label is matched
//! case-insensitively at the start of a line once list markers (`-`, `*`,
//! `1.`) and markdown emphasis are skipped, and entries missing any of the
//! four fields are dropped. A label word in the middle of a line is just text.

use crate::core::models::{Level, Task};

use super::parse_estimate;

/// Fields a subtask can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Description,
    EstimatedTime,
    Importance,
    Urgency,
}

impl Field {
    const LABELS: [(&'static str, Self); 4] = [
        ("estimated time:", Self::EstimatedTime),
        ("importance:", Self::Importance),
        ("urgency:", Self::Urgency),
        ("description:", Self::Description),
    ];

    /// Match a field label at the start of a line, returning the field and the text after the colon
    fn detect(line: &str) -> Option<(Self, &str)> {
        let text = strip_list_marker(line);
        let lower = text.to_ascii_lowercase();
        Self::LABELS.iter().find_map(|(label, field)| {
            if !lower.starts_with(label) {
                return None;
            }
            // ASCII lowercasing keeps byte offsets aligned with `text`
            text.get(label.len()..).map(|rest| (*field, clean(rest)))
        })
    }
}

#[derive(Debug, Default)]
struct Draft {
    description: String,
    estimated_time: String,
    importance: String,
    urgency: String,
}

impl Draft {
    fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Description => &mut self.description,
            Field::EstimatedTime => &mut self.estimated_time,
            Field::Importance => &mut self.importance,
            Field::Urgency => &mut self.urgency,
        };
        *slot = value.to_string();
    }

    fn into_task(self, main_task: &str) -> Option<Task> {
        if self.description.is_empty()
            || self.estimated_time.is_empty()
            || self.importance.is_empty()
            || self.urgency.is_empty()
        {
            log::debug!("dropping incomplete subtask {:?}", self.description);
            return None;
        }

        let estimate = parse_estimate(&self.estimated_time);
        if estimate.is_none() {
            log::debug!("unrecognized estimate {:?}, leaving it unset", self.estimated_time);
        }

        Some(Task {
            estimate,
            ..Task::new(
                main_task,
                Level::parse_lenient(&self.importance),
                Level::parse_lenient(&self.urgency),
            )
            .with_description(self.description)
        })
    }
}

/// Parse a model reply into tasks titled `main_task`
///
/// A line starting with `-` opens a new entry; its text (minus an optional
/// `Description:` label) is the entry's description. Labelled lines fill in
/// the current entry. A dashed line that starts with one of the other labels
/// is treated as a field of the current entry, since models sometimes bullet
/// their fields too. Text before the first dash is ignored.
#[must_use]
pub fn parse_breakdown(text: &str, main_task: &str) -> Vec<Task> {
    let mut drafts: Vec<Draft> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('-') {
            match Field::detect(rest) {
                Some((Field::Description, value)) => {
                    drafts.push(Draft {
                        description: value.to_string(),
                        ..Draft::default()
                    });
                },
                Some((field, value)) if !drafts.is_empty() => {
                    if let Some(current) = drafts.last_mut() {
                        current.set(field, value);
                    }
                },
                _ => drafts.push(Draft {
                    description: clean(rest).to_string(),
                    ..Draft::default()
                }),
            }
            continue;
        }

        if let (Some(current), Some((field, value))) = (drafts.last_mut(), Field::detect(line)) {
            current.set(field, value);
        }
    }

    drafts.into_iter().filter_map(|d| d.into_task(main_task)).collect()
}

/// Prompt asking a model to break `task` down for someone at `energy_level` out of 10
#[must_use]
pub fn breakdown_prompt(task: &str, energy_level: u32) -> String {
    format!(
        "Given the task \"{task}\" and the user's current energy level of {energy_level} out of \
         10, break this task down into 3-5 subtasks. For each subtask, provide:\n\
         1. A brief description\n\
         2. Estimated time to complete (in minutes)\n\
         3. Importance (high or low)\n\
         4. Urgency (high or low)\n\
         \n\
         Consider the energy level when determining importance and urgency.\n\
         \n\
         Format each subtask on a new line, starting with a dash (-). Ensure each piece of \
         information is on its own line and clearly labeled."
    )
}

/// Skip leading list markers (`-`, `*`, `1.`, `2)`) and emphasis
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim_start();
    let after_digits = line.trim_start_matches(|c: char| c.is_ascii_digit());
    let line = if after_digits.len() < line.len() {
        after_digits.strip_prefix(['.', ')']).unwrap_or(line)
    } else {
        line
    };
    line.trim_start_matches(|c: char| matches!(c, '-' | '*' | '_' | '•') || c.is_whitespace())
}

/// Strip whitespace, markdown emphasis and trailing periods from a value
fn clean(value: &str) -> &str {
    value
        .trim_matches(|c: char| matches!(c, '*' | '_') || c.is_whitespace())
        .trim_end_matches('.')
}
