//! Integration tests for the taskmatrix CLI

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const TASKS: &str = r#"[
    {"title": "Tidy desk", "importance": "low", "urgency": "low", "estimatedTime": "1 hour", "resourceCost": 2},
    {"title": "Pay rent", "importance": "high", "urgency": "high", "estimatedTime": "10 minutes", "resourceCost": 1},
    {"title": "Plan trip", "importance": "high", "urgency": "low", "estimatedTime": "2 hours", "resourceCost": 6}
]"#;

fn taskmatrix(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("taskmatrix"));
    // Keep tests away from any real ~/.taskmatrix/config.toml
    cmd.env("TASKMATRIX_CONFIG", temp.path().join("config.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn tasks_file(temp: &TempDir) -> std::path::PathBuf {
    let path = temp.path().join("tasks.json");
    fs::write(&path, TASKS).unwrap();
    path
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("taskmatrix"));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Do, Decide, Delegate and Delete"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("taskmatrix v"));
}

#[test]
fn test_classify_json() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .args(["--json", "classify", "HIGH", "low"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""quadrant": "decide""#));
}

#[test]
fn test_classify_unknown_is_delete() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .args(["classify", "maybe", "whenever"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DELETE"));
}

#[test]
fn test_rank_orders_by_quadrant() {
    let temp = TempDir::new().unwrap();
    let file = tasks_file(&temp);
    let output = taskmatrix(&temp)
        .args(["--json", "rank"])
        .arg(&file)
        .args(["--budget", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let titles: Vec<&str> = json["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Pay rent", "Plan trip", "Tidy desk"]);
}

#[test]
fn test_rank_reads_stdin() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .args(["rank", "-", "--budget", "2"])
        .write_stdin(TASKS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pay rent"));
}

#[test]
fn test_rank_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .args(["rank", "nope.json", "--budget", "2"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read nope.json"));
}

#[test]
fn test_matrix_shows_quadrants() {
    let temp = TempDir::new().unwrap();
    let file = tasks_file(&temp);
    taskmatrix(&temp)
        .arg("matrix")
        .arg(&file)
        .args(["--budget", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DELEGATE"))
        .stdout(predicate::str::contains("(empty)"));
}

#[test]
fn test_recommend_filters_by_remaining() {
    let temp = TempDir::new().unwrap();
    let file = tasks_file(&temp);
    taskmatrix(&temp)
        .arg("recommend")
        .arg(&file)
        .args(["--remaining", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tidy desk"))
        .stdout(predicate::str::contains("Plan trip").not());
}

#[test]
fn test_recommend_suggests_rest() {
    let temp = TempDir::new().unwrap();
    let file = tasks_file(&temp);
    taskmatrix(&temp)
        .arg("recommend")
        .arg(&file)
        .args(["--remaining", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rest"));
}

#[test]
fn test_score_match() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .args(["score", "match", "10", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3.00"));
}

#[test]
fn test_score_duration_garbage_is_neutral() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .args(["--json", "score", "duration", "later"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""duration_score": 5.0"#));
}

#[test]
fn test_score_duration_bare_number_is_minutes() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .args(["--json", "score", "duration", "120"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""duration_score": 9.0"#));
}

#[test]
fn test_score_duration_help_mentions_minutes() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .args(["score", "duration", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a bare number is minutes"));
}

#[test]
fn test_breakdown_with_saved_reply() {
    let temp = TempDir::new().unwrap();
    let reply = temp.path().join("reply.txt");
    fs::write(
        &reply,
        "- Book a van\nEstimated time: 15 minutes\nImportance: high\nUrgency: high\n",
    )
    .unwrap();

    taskmatrix(&temp)
        .args(["--json", "breakdown", "Move house", "--energy", "4", "--response"])
        .arg(&reply)
        .assert()
        .success()
        .stdout(predicate::str::contains("Book a van"));
}

#[test]
fn test_breakdown_without_model_fails() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .env_remove("OPENAI_API_KEY")
        .args(["breakdown", "Move house", "--energy", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UPSTREAM_ERROR"));
}

#[test]
fn test_config_shows_defaults() {
    let temp = TempDir::new().unwrap();
    taskmatrix(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"))
        .stdout(predicate::str::contains("port = 9990"));
}

#[test]
fn test_config_init_writes_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    taskmatrix(&temp)
        .arg("--config")
        .arg(&path)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(path.exists());

    taskmatrix(&temp)
        .arg("--config")
        .arg(&path)
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "[ranking]\nlow_max = \"three\"\n").unwrap();
    taskmatrix(&temp)
        .args(["classify", "high", "high"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
