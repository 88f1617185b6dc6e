//! Output formatting for human and JSON modes
//!
//! Every CLI result can be rendered either as human-readable text or as
//! machine-parseable JSON. JSON output is the same shape the HTTP API puts
//! in its `data` field.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::api::{ClassifyData, MatrixData, PrioritizeData, RankedTask, RecommendData, ScoreData};
use crate::config::Config;
use crate::core::models::Quadrant;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A result that can be printed in either output mode
pub trait Render: Serialize {
    /// Human-readable text, without a trailing newline
    fn human(&self) -> String;

    /// Pretty-printed JSON
    #[must_use]
    fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Print the result to stdout in the given mode
    fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human()),
            OutputMode::Json => println!("{}", self.json()),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Effective configuration and where it was loaded from
#[derive(Debug, Serialize)]
pub struct ConfigResult {
    /// Config file path
    pub path: String,
    /// Whether the file exists (defaults are shown otherwise)
    pub exists: bool,
    /// The effective configuration
    pub config: Config,
}

// =============================================================================
// HELPERS
// =============================================================================

fn header(quadrant: Quadrant) -> ColoredString {
    let name = quadrant.to_string().to_uppercase();
    let name = name.as_str();
    match quadrant {
        Quadrant::Do => name.red().bold(),
        Quadrant::Decide => name.yellow().bold(),
        Quadrant::Delegate => name.blue().bold(),
        Quadrant::Delete => name.dimmed().bold(),
    }
}

fn task_line(out: &mut String, index: usize, ranked: &RankedTask) {
    let estimate = ranked.estimated_time.as_deref().unwrap_or("no estimate");
    out.push_str(&format!("  {}. {} ({estimate})", index + 1, ranked.task.title));
    if ranked.task.completed {
        out.push_str(&format!(" {}", "[done]".green()));
    }
    out.push('\n');
}

// =============================================================================
// RENDERERS
// =============================================================================

impl Render for OperationResult {
    fn human(&self) -> String {
        self.message.clone()
    }
}

impl Render for ClassifyData {
    fn human(&self) -> String {
        format!("{}  {} (weight {})", header(self.quadrant), self.label, self.weight)
    }
}

impl Render for PrioritizeData {
    fn human(&self) -> String {
        if self.tasks.is_empty() {
            return "No tasks to rank.".to_string();
        }

        let mut out = format!("Ranked for budget {} ({} tier):\n\n", self.budget, self.tier);
        for (i, ranked) in self.tasks.iter().enumerate() {
            out.push_str(&format!(
                "  {}. [{}] {} ({})\n",
                i + 1,
                header(ranked.quadrant),
                ranked.task.title,
                ranked.estimated_time.as_deref().unwrap_or("no estimate"),
            ));
        }
        out.trim_end().to_string()
    }
}

impl Render for MatrixData {
    fn human(&self) -> String {
        let mut out = format!("Matrix for budget {} ({} tier)\n", self.budget, self.tier);
        let cells = [
            (Quadrant::Do, &self.do_now),
            (Quadrant::Decide, &self.decide),
            (Quadrant::Delegate, &self.delegate),
            (Quadrant::Delete, &self.delete),
        ];

        for (quadrant, tasks) in cells {
            out.push_str(&format!("\n{}  {}\n", header(quadrant), quadrant.label()));
            if tasks.is_empty() {
                out.push_str("  (empty)\n");
            }
            for (i, ranked) in tasks.iter().enumerate() {
                task_line(&mut out, i, ranked);
            }
        }
        out.trim_end().to_string()
    }
}

impl Render for RecommendData {
    fn human(&self) -> String {
        if self.rest {
            return self.message.clone().unwrap_or_default();
        }

        let mut out = format!("With {} left, you could do:\n\n", self.remaining);
        for (i, pick) in self.tasks.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} (cost {}, match {:.1})\n",
                i + 1,
                pick.task.title,
                pick.remaining_cost,
                pick.match_score,
            ));
        }
        out.trim_end().to_string()
    }
}

impl Render for ScoreData {
    fn human(&self) -> String {
        let mut lines = Vec::new();
        if let Some(score) = self.match_score {
            lines.push(format!("Match score:    {score:.2}"));
        }
        if let Some(score) = self.duration_score {
            lines.push(format!("Duration score: {score:.2}"));
        }
        lines.join("\n")
    }
}

impl Render for ConfigResult {
    fn human(&self) -> String {
        let source = if self.exists {
            self.path.clone()
        } else {
            format!("{} (not found, using defaults)", self.path)
        };
        let body = toml::to_string_pretty(&self.config).unwrap_or_default();
        format!("# {source}\n\n{}", body.trim_end())
    }
}
