//! Pure API handlers
//!
//! These handlers contain the request-level logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`. The task list is
//! always supplied by the caller; nothing is remembered between requests.

use crate::core::models::{Quadrant, RankPolicy, Task};
use crate::core::ports::BreakdownSource;
use crate::core::services;
use crate::parser::parse_breakdown;

use super::error::ApiError;
use super::types::{
    BreakdownRequest, ClassifyData, ClassifyRequest, HealthData, MatrixData, PrioritizeData,
    PrioritizeRequest, RankedTask, RecommendData, RecommendRequest, RecommendedTask, ScoreData,
    ScoreRequest, TaskPayload,
};

/// Shown when no task fits the remaining budget
pub const REST_MESSAGE: &str =
    "Nothing on your list fits your remaining energy. Rest, or pick a low-effort activity.";

// =============================================================================
// HEALTH
// =============================================================================

/// Liveness check
#[must_use]
pub const fn health() -> HealthData {
    HealthData {
        status: "ok",
        version: crate::VERSION,
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classify one importance/urgency pair
pub fn classify(req: &ClassifyRequest) -> Result<ClassifyData, ApiError> {
    let quadrant = services::classify(&req.importance, &req.urgency);
    Ok(ClassifyData {
        quadrant,
        weight: quadrant.weight(),
        label: quadrant.label(),
    })
}

// =============================================================================
// RANKING
// =============================================================================

/// Rank the caller's tasks for a budget
pub fn prioritize(
    req: &PrioritizeRequest,
    policy: &RankPolicy,
) -> Result<PrioritizeData, ApiError> {
    let tasks = to_tasks(&req.tasks)?;
    Ok(ranked(&tasks, req.budget, policy))
}

/// Rank the caller's tasks and split them into the four quadrants
pub fn matrix(req: &PrioritizeRequest, policy: &RankPolicy) -> Result<MatrixData, ApiError> {
    let tasks = to_tasks(&req.tasks)?;
    let grouped = services::group(&services::rank_with(&tasks, req.budget, policy));
    let cell = |q: Quadrant| -> Vec<RankedTask> {
        grouped.get(q).iter().cloned().map(RankedTask::from).collect()
    };

    Ok(MatrixData {
        budget: req.budget,
        tier: policy.tier(req.budget),
        do_now: cell(Quadrant::Do),
        decide: cell(Quadrant::Decide),
        delegate: cell(Quadrant::Delegate),
        delete: cell(Quadrant::Delete),
    })
}

// =============================================================================
// RECOMMENDATIONS
// =============================================================================

/// Suggest the tasks that fit what is left of the budget
///
/// Every task must state a resource cost (directly or through subtasks).
pub fn recommend(req: &RecommendRequest) -> Result<RecommendData, ApiError> {
    if let Some(missing) = req.tasks.iter().find(|t| !t.has_cost()) {
        return Err(ApiError::bad_request(format!(
            "Task '{}' has no resourceCost",
            missing.title.trim()
        )));
    }

    let tasks = to_tasks(&req.tasks)?;
    let picks: Vec<RecommendedTask> = services::recommend(&tasks, req.remaining)
        .into_iter()
        .map(|task| {
            let remaining_cost = task.remaining_cost();
            RecommendedTask {
                match_score: services::match_score(remaining_cost, req.remaining),
                remaining_cost,
                task,
            }
        })
        .collect();

    let rest = picks.is_empty();
    if rest {
        log::debug!("no task fits a remaining budget of {}", req.remaining);
    }

    Ok(RecommendData {
        remaining: req.remaining,
        tasks: picks,
        rest,
        message: rest.then(|| REST_MESSAGE.to_string()),
    })
}

// =============================================================================
// SCORING
// =============================================================================

/// Compute whichever scores the request has inputs for
pub fn score(req: &ScoreRequest) -> Result<ScoreData, ApiError> {
    let match_score = match (req.required, req.available) {
        (Some(required), Some(available)) => Some(services::match_score(required, available)),
        (None, None) => None,
        _ => {
            return Err(ApiError::bad_request(
                "Both 'required' and 'available' are needed for a match score",
            ));
        },
    };
    let duration_score = req.estimated_time.as_deref().map(services::duration_score);

    if match_score.is_none() && duration_score.is_none() {
        return Err(ApiError::bad_request(
            "Nothing to score: give 'required' and 'available', or 'estimatedTime'",
        ));
    }

    Ok(ScoreData {
        match_score,
        duration_score,
    })
}

// =============================================================================
// BREAKDOWN
// =============================================================================

/// Break a goal into subtasks, add them to the caller's list, and rank everything
///
/// Uses `req.response` as the model reply when present, otherwise asks
/// `source`.
pub fn breakdown(
    req: &BreakdownRequest,
    source: &dyn BreakdownSource,
    policy: &RankPolicy,
) -> Result<PrioritizeData, ApiError> {
    let goal = req.task.trim();
    if goal.is_empty() {
        return Err(ApiError::bad_request("Task cannot be empty"));
    }

    let mut tasks = to_tasks(&req.tasks)?;

    let reply = match &req.response {
        Some(text) => text.clone(),
        None => source.breakdown(goal, req.energy_level).map_err(|e| {
            log::warn!("breakdown of {goal:?} failed: {e:#}");
            ApiError::upstream(format!("Failed to break down the task: {e}"))
        })?,
    };

    let subtasks = parse_breakdown(&reply, goal);
    if subtasks.is_empty() {
        log::warn!("model reply for {goal:?} had no usable subtasks");
        return Err(ApiError::upstream("Failed to parse subtasks"));
    }
    log::debug!("{goal:?} broke down into {} subtasks", subtasks.len());

    tasks.extend(subtasks);
    Ok(ranked(&tasks, req.energy_level, policy))
}

// =============================================================================
// HELPERS
// =============================================================================

fn to_tasks(payloads: &[TaskPayload]) -> Result<Vec<Task>, ApiError> {
    payloads.iter().map(TaskPayload::to_task).collect()
}

fn ranked(tasks: &[Task], budget: u32, policy: &RankPolicy) -> PrioritizeData {
    PrioritizeData {
        budget,
        tier: policy.tier(budget),
        tasks: services::rank_with(tasks, budget, policy)
            .into_iter()
            .map(RankedTask::from)
            .collect(),
    }
}
