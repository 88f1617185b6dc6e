//! Task model
//!
//! A task is a request-scoped record produced by an external collaborator
//! (usually a language model breaking a larger goal into steps). The engine
//! never creates tasks on its own; it only classifies and orders them.

use serde::{Deserialize, Serialize};

use super::{Estimate, Level, Quadrant};

/// A unit of work to prioritize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Short name of the work (for model breakdowns, the parent goal)
    pub title: String,

    /// What this step involves
    #[serde(default)]
    pub description: String,

    /// Estimated duration, if one could be determined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<Estimate>,

    /// Importance rating
    #[serde(default)]
    pub importance: Level,

    /// Urgency rating
    #[serde(default)]
    pub urgency: Level,

    /// Resource cost (spoons or energy units)
    #[serde(default)]
    pub resource_cost: u32,

    /// Whether the task is finished
    #[serde(default)]
    pub completed: bool,

    /// Optional checklist items, each with its own cost
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<Subtask>,
}

/// A checklist item inside a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    /// What needs doing
    pub description: String,

    /// Resource cost of this item
    #[serde(default)]
    pub resource_cost: u32,

    /// Whether the item is done
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a task with the given ratings and no estimate or cost
    #[must_use]
    pub fn new(title: impl Into<String>, importance: Level, urgency: Level) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            estimate: None,
            importance,
            urgency,
            resource_cost: 0,
            completed: false,
            subtasks: Vec::new(),
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the estimate
    #[must_use]
    pub fn with_estimate(mut self, estimate: Estimate) -> Self {
        self.estimate = Some(estimate);
        self
    }

    /// Set the resource cost
    #[must_use]
    pub fn with_cost(mut self, resource_cost: u32) -> Self {
        self.resource_cost = resource_cost;
        self
    }

    /// Add a checklist item
    #[must_use]
    pub fn with_subtask(mut self, subtask: Subtask) -> Self {
        self.subtasks.push(subtask);
        self
    }

    /// Mark the task as completed
    #[must_use]
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// The quadrant this task falls into
    #[must_use]
    pub const fn quadrant(&self) -> Quadrant {
        Quadrant::from_levels(self.importance, self.urgency)
    }

    /// Whether nothing is left to do
    ///
    /// A task with subtasks is done when it is flagged completed or every
    /// subtask is.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.completed || (!self.subtasks.is_empty() && self.subtasks.iter().all(|s| s.completed))
    }

    /// Cost of the work still outstanding
    ///
    /// With subtasks, this is the summed cost of the incomplete ones.
    /// Without, it is `resource_cost` unless the task is completed.
    #[must_use]
    pub fn remaining_cost(&self) -> u32 {
        if self.completed {
            return 0;
        }
        if self.subtasks.is_empty() {
            return self.resource_cost;
        }
        self.subtasks
            .iter()
            .filter(|s| !s.completed)
            .fold(0u32, |acc, s| acc.saturating_add(s.resource_cost))
    }
}

impl Subtask {
    /// Create an incomplete subtask
    #[must_use]
    pub fn new(description: impl Into<String>, resource_cost: u32) -> Self {
        Self {
            description: description.into(),
            resource_cost,
            completed: false,
        }
    }

    /// Mark the subtask as completed
    #[must_use]
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}
