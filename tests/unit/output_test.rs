//! Tests for the Output module
//!
//! Results render either as human-readable text or as the same JSON the
//! HTTP API puts in its `data` field.

use taskmatrix::api::{self, ClassifyRequest, PrioritizeRequest, RecommendRequest, TaskPayload};
use taskmatrix::config::Config;
use taskmatrix::core::models::RankPolicy;
use taskmatrix::output::{ConfigResult, OperationResult, OutputMode, Render};

fn payloads(json: &str) -> Vec<TaskPayload> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn classify_human_names_quadrant() {
    let req = ClassifyRequest {
        importance: "low".to_string(),
        urgency: "high".to_string(),
    };
    let human = api::classify(&req).unwrap().human();
    assert!(human.contains("DELEGATE"));
    assert!(human.contains("Not Important & Urgent"));
    assert!(human.contains("weight 2"));
}

#[test]
fn prioritize_human_lists_in_order() {
    let req = PrioritizeRequest {
        tasks: payloads(
            r#"[
                {"title": "Second", "importance": "high", "urgency": "low"},
                {"title": "First", "importance": "high", "urgency": "high", "estimatedTime": "90 minutes"}
            ]"#,
        ),
        budget: 5,
    };
    let human = api::prioritize(&req, &RankPolicy::default()).unwrap().human();
    let first = human.find("First").unwrap();
    let second = human.find("Second").unwrap();
    assert!(first < second);
    assert!(human.contains("1 hour 30 minutes"));
    assert!(human.contains("no estimate"));
    assert!(human.contains("medium tier"));
}

#[test]
fn prioritize_human_empty_list() {
    let req = PrioritizeRequest {
        tasks: Vec::new(),
        budget: 5,
    };
    let data = api::prioritize(&req, &RankPolicy::default()).unwrap();
    assert_eq!(data.human(), "No tasks to rank.");
}

#[test]
fn prioritize_json_flattens_task_fields() {
    let req = PrioritizeRequest {
        tasks: payloads(r#"[{"title": "Call mum", "estimatedTime": "2 hours"}]"#),
        budget: 1,
    };
    let json: serde_json::Value =
        serde_json::from_str(&api::prioritize(&req, &RankPolicy::default()).unwrap().json())
            .unwrap();
    assert_eq!(json["tier"], "low");
    assert_eq!(json["tasks"][0]["title"], "Call mum");
    assert_eq!(json["tasks"][0]["estimate"], 120);
    assert_eq!(json["tasks"][0]["estimated_time"], "2 hours");
    assert_eq!(json["tasks"][0]["quadrant"], "delete");
}

#[test]
fn matrix_human_marks_empty_quadrants() {
    let req = PrioritizeRequest {
        tasks: payloads(r#"[{"title": "Only", "importance": "high", "urgency": "high"}]"#),
        budget: 5,
    };
    let human = api::matrix(&req, &RankPolicy::default()).unwrap().human();
    assert!(human.contains("Only"));
    assert_eq!(human.matches("(empty)").count(), 3);
}

#[test]
fn matrix_human_puts_each_task_on_its_own_line() {
    let req = PrioritizeRequest {
        tasks: payloads(
            r#"[
                {"title": "Pay rent", "importance": "high", "urgency": "high", "estimatedTime": "10 minutes", "completed": true},
                {"title": "Book dentist", "importance": "high", "urgency": "high"}
            ]"#,
        ),
        budget: 5,
    };
    let human = api::matrix(&req, &RankPolicy::default()).unwrap().human();
    let lines: Vec<&str> = human.lines().collect();

    let rent = lines.iter().find(|l| l.contains("Pay rent")).unwrap();
    assert!(rent.starts_with("  1. Pay rent (10 minutes)"));
    assert!(rent.contains("[done]"));

    let dentist = lines.iter().find(|l| l.contains("Book dentist")).unwrap();
    assert!(dentist.starts_with("  2. Book dentist (no estimate)"));
    assert!(!dentist.contains("[done]"));
}

#[test]
fn recommend_human_falls_back_to_rest_message() {
    let req = RecommendRequest {
        tasks: payloads(r#"[{"title": "Big", "resourceCost": 9}]"#),
        remaining: 2,
    };
    let data = api::recommend(&req).unwrap();
    assert_eq!(data.human(), api::REST_MESSAGE);
}

#[test]
fn recommend_human_shows_cost_and_match() {
    let req = RecommendRequest {
        tasks: payloads(r#"[{"title": "Dishes", "resourceCost": 2}]"#),
        remaining: 4,
    };
    let human = api::recommend(&req).unwrap().human();
    assert!(human.contains("Dishes (cost 2, match 10.0)"));
}

#[test]
fn config_result_shows_path_and_toml() {
    let result = ConfigResult {
        path: "/tmp/config.toml".to_string(),
        exists: true,
        config: Config::default(),
    };
    let human = result.human();
    assert!(human.starts_with("# /tmp/config.toml"));
    assert!(human.contains("[ranking]"));
    assert!(human.contains("low_max = 3"));
}

#[test]
fn operation_result_json() {
    let result = OperationResult {
        success: false,
        message: "nope".to_string(),
    };
    let json: serde_json::Value = serde_json::from_str(&result.json()).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "nope");
}
