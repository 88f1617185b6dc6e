//! Tests for the boundary parsers

use taskmatrix::core::models::{Estimate, Quadrant};
use taskmatrix::parser::{breakdown_prompt, parse_breakdown, parse_estimate};
use test_case::test_case;

// =============================================================================
// Estimates
// =============================================================================

#[test_case("3 hours", 180 ; "hours")]
#[test_case("2 days and 4 hours", 3120 ; "days and hours")]
#[test_case("1 day, 2 hours and 30 minutes", 1590 ; "three units")]
#[test_case("45 min", 45 ; "abbreviated minutes")]
#[test_case("1.5 hrs", 90 ; "fractional hours")]
#[test_case("2h 15m", 135 ; "compact units")]
#[test_case("30", 30 ; "bare number is minutes")]
#[test_case("About 20 Minutes.", 20 ; "surrounding prose")]
fn test_parse_estimate(text: &str, minutes: u32) {
    assert_eq!(parse_estimate(text), Some(Estimate::from_minutes(minutes)));
}

#[test_case("" ; "empty")]
#[test_case("soon" ; "no number")]
#[test_case("a few hours" ; "no digits")]
#[test_case("3 weeks" ; "unknown unit")]
fn test_parse_estimate_rejects(text: &str) {
    assert!(parse_estimate(text).is_none());
}

// =============================================================================
// Model replies
// =============================================================================

#[test]
fn test_breakdown_with_markdown_and_numbering() {
    let reply = "Sure! Here are your subtasks:\n\
        \n\
        - **Description:** Sort the mail.\n\
          1. **Estimated time:** 10 minutes\n\
          2. **Importance:** High\n\
          3. **Urgency:** High\n\
        - **Description:** File old statements\n\
          1. **Estimated time:** 2 hours\n\
          2. **Importance:** Low\n\
          3. **Urgency:** Low\n";

    let tasks = parse_breakdown(reply, "Sort paperwork");
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].description, "Sort the mail");
    assert_eq!(tasks[0].estimate, Some(Estimate::from_minutes(10)));
    assert_eq!(tasks[0].quadrant(), Quadrant::Do);
    assert_eq!(tasks[1].description, "File old statements");
    assert_eq!(tasks[1].quadrant(), Quadrant::Delete);
    assert!(tasks.iter().all(|t| t.title == "Sort paperwork"));
}

#[test]
fn test_breakdown_with_bulleted_fields() {
    let reply = "- Call the landlord\n\
        - Estimated time: 15 minutes\n\
        - Importance: high\n\
        - Urgency: low\n";

    let tasks = parse_breakdown(reply, "Fix the heating");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].description, "Call the landlord");
    assert_eq!(tasks[0].quadrant(), Quadrant::Decide);
}

#[test]
fn test_breakdown_description_mentioning_a_label() {
    let reply = "- Write intro\n\
        Estimated time: 30 minutes\n\
        Importance: high\n\
        Urgency: high\n\
        - Review importance: rank the backlog\n\
        Estimated time: 20 minutes\n\
        Importance: low\n\
        Urgency: low\n";

    let tasks = parse_breakdown(reply, "Ship the report");
    let described: Vec<(&str, Quadrant)> =
        tasks.iter().map(|t| (t.description.as_str(), t.quadrant())).collect();
    assert_eq!(
        described,
        [("Write intro", Quadrant::Do), ("Review importance: rank the backlog", Quadrant::Delete)]
    );
}

#[test]
fn test_breakdown_keeps_unreadable_estimate_unset() {
    let reply = "- Think it over\nEstimated time: a while\nImportance: low\nUrgency: high\n";
    let tasks = parse_breakdown(reply, "Decide");
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].estimate.is_none());
}

#[test]
fn test_breakdown_of_empty_reply() {
    assert!(parse_breakdown("", "Anything").is_empty());
}

#[test]
fn test_prompt_mentions_task_and_energy() {
    let prompt = breakdown_prompt("Clean the garage", 3);
    assert!(prompt.contains("\"Clean the garage\""));
    assert!(prompt.contains("3 out of 10"));
    assert!(prompt.contains("starting with a dash (-)"));
}
