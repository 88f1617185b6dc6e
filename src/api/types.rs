//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client. Request
//! field names accept both the browser's camelCase and snake_case.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiErrorData};
use crate::core::models::{BudgetTier, Estimate, Level, Quadrant, Subtask, Task};
use crate::core::services::NEUTRAL_DURATION_SCORE;
use crate::parser::parse_estimate;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(err: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData::from(err)),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// A task as sent by a client
///
/// Estimates may arrive as minutes (`estimatedMinutes`, or `estimate` as
/// echoed back by this API) or as free text (`estimatedTime`); minutes win
/// when both are present.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPayload {
    /// Task title
    #[serde(default)]
    pub title: String,
    /// What the task involves
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form duration, e.g. "2 days and 4 hours"
    #[serde(default, alias = "estimatedTime")]
    pub estimated_time: Option<String>,
    /// Duration in minutes
    #[serde(default, alias = "estimatedMinutes", alias = "estimate")]
    pub estimated_minutes: Option<u32>,
    /// "high" or "low"; anything else counts as low
    #[serde(default)]
    pub importance: Option<String>,
    /// "high" or "low"; anything else counts as low
    #[serde(default)]
    pub urgency: Option<String>,
    /// Resource cost in spoons or energy units
    #[serde(default, alias = "resourceCost", alias = "spoons")]
    pub resource_cost: Option<u32>,
    /// Whether the task is finished
    #[serde(default)]
    pub completed: bool,
    /// Checklist items
    #[serde(default)]
    pub subtasks: Vec<SubtaskPayload>,
}

/// A checklist item as sent by a client
#[derive(Debug, Clone, Deserialize)]
pub struct SubtaskPayload {
    /// What needs doing
    #[serde(default)]
    pub description: String,
    /// Resource cost
    #[serde(default, alias = "resourceCost", alias = "spoons")]
    pub resource_cost: u32,
    /// Whether the item is done
    #[serde(default)]
    pub completed: bool,
}

impl TaskPayload {
    /// Convert to a domain task
    ///
    /// Fails only when the title is missing. Unreadable estimates and
    /// unknown levels fall back to "no estimate" and low.
    pub fn to_task(&self) -> Result<Task, ApiError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ApiError::bad_request("Task title cannot be empty"));
        }

        let estimate = self.estimated_minutes.map(Estimate::from_minutes).or_else(|| {
            let text = self.estimated_time.as_deref()?;
            let parsed = parse_estimate(text);
            if parsed.is_none() {
                log::debug!("task {title:?}: unrecognized estimate {text:?}");
            }
            parsed
        });

        Ok(Task {
            title: title.to_string(),
            description: self.description.clone().unwrap_or_default(),
            estimate,
            importance: Level::parse_lenient(self.importance.as_deref().unwrap_or_default()),
            urgency: Level::parse_lenient(self.urgency.as_deref().unwrap_or_default()),
            resource_cost: self.resource_cost.unwrap_or(0),
            completed: self.completed,
            subtasks: self
                .subtasks
                .iter()
                .map(|s| Subtask {
                    description: s.description.clone(),
                    resource_cost: s.resource_cost,
                    completed: s.completed,
                })
                .collect(),
        })
    }

    /// Whether the payload says anything about cost
    #[must_use]
    pub fn has_cost(&self) -> bool {
        self.resource_cost.is_some() || !self.subtasks.is_empty()
    }
}

/// Request body for classifying a single importance/urgency pair
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Importance text
    #[serde(default)]
    pub importance: String,
    /// Urgency text
    #[serde(default)]
    pub urgency: String,
}

/// Request body for ranking or grouping tasks
#[derive(Debug, Deserialize)]
pub struct PrioritizeRequest {
    /// Caller-owned task list
    pub tasks: Vec<TaskPayload>,
    /// Energy level (0-10) or spoon count
    #[serde(alias = "energyLevel", alias = "energy_level")]
    pub budget: u32,
}

/// Request body for budget-fit recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Caller-owned task list
    pub tasks: Vec<TaskPayload>,
    /// What is left of the budget
    #[serde(alias = "remainingBudget", alias = "remaining_budget", alias = "spoons")]
    pub remaining: u32,
}

/// Request body for the scoring helpers; each score is computed if its inputs are present
#[derive(Debug, Default, Deserialize)]
pub struct ScoreRequest {
    /// Resource a task requires
    #[serde(default)]
    pub required: Option<u32>,
    /// Resource available
    #[serde(default)]
    pub available: Option<u32>,
    /// Free-form duration
    #[serde(default, alias = "estimatedTime")]
    pub estimated_time: Option<String>,
}

/// Request body for breaking a goal into subtasks and ranking the result
#[derive(Debug, Deserialize)]
pub struct BreakdownRequest {
    /// The goal to break down
    pub task: String,
    /// Energy level (0-10), also used as the ranking budget
    #[serde(alias = "energyLevel")]
    pub energy_level: u32,
    /// Tasks the caller already holds; new subtasks are appended
    #[serde(default)]
    pub tasks: Vec<TaskPayload>,
    /// A model reply to parse instead of asking the configured model
    #[serde(default)]
    pub response: Option<String>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Health endpoint response data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthData {
    /// Always "ok"
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
}

/// Classification response data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassifyData {
    /// Resulting quadrant
    pub quadrant: Quadrant,
    /// Priority weight (Do=4 ... Delete=1)
    pub weight: u8,
    /// Human-readable quadrant description
    pub label: &'static str,
}

/// A task annotated with its quadrant and duration score
#[derive(Debug, Serialize)]
pub struct RankedTask {
    /// The task itself
    #[serde(flatten)]
    pub task: Task,
    /// Quadrant the task falls into
    pub quadrant: Quadrant,
    /// Human-readable estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    /// Log-scaled duration score (neutral when there is no estimate)
    pub duration_score: f64,
}

impl From<Task> for RankedTask {
    fn from(task: Task) -> Self {
        Self {
            quadrant: task.quadrant(),
            estimated_time: task.estimate.map(|e| e.to_string()),
            duration_score: task.estimate.map_or(NEUTRAL_DURATION_SCORE, Estimate::score),
            task,
        }
    }
}

/// Ranked list response data
#[derive(Debug, Serialize)]
pub struct PrioritizeData {
    /// Budget the list was ranked for
    pub budget: u32,
    /// Tier the budget fell into
    pub tier: BudgetTier,
    /// Tasks, highest priority first
    pub tasks: Vec<RankedTask>,
}

/// Matrix response data: ranked tasks split by quadrant
#[derive(Debug, Serialize)]
pub struct MatrixData {
    /// Budget the tasks were ranked for
    pub budget: u32,
    /// Tier the budget fell into
    pub tier: BudgetTier,
    /// Important and urgent
    #[serde(rename = "do")]
    pub do_now: Vec<RankedTask>,
    /// Important, not urgent
    pub decide: Vec<RankedTask>,
    /// Urgent, not important
    pub delegate: Vec<RankedTask>,
    /// Neither
    pub delete: Vec<RankedTask>,
}

/// A task that fits the remaining budget
#[derive(Debug, Serialize)]
pub struct RecommendedTask {
    /// The task itself
    #[serde(flatten)]
    pub task: Task,
    /// Cost of what is left of the task
    pub remaining_cost: u32,
    /// How comfortably the remaining budget covers it
    pub match_score: f64,
}

/// Recommendation response data
#[derive(Debug, Serialize)]
pub struct RecommendData {
    /// Budget the recommendation was made for
    pub remaining: u32,
    /// Fitting tasks, biggest first
    pub tasks: Vec<RecommendedTask>,
    /// True when nothing fits and the caller should suggest resting
    pub rest: bool,
    /// Suggestion to show when `rest` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Score response data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreData {
    /// Resource-fit score, if `required` and `available` were given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    /// Duration score, if `estimated_time` was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_score: Option<f64>,
}
