//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use taskmatrix::core::models::{BudgetTier, Quadrant, RankPolicy};
use taskmatrix::core::services::{classify, duration_score, match_score};
use test_case::test_case;

// =============================================================================
// Classification
// =============================================================================

#[test_case("high", "high", Quadrant::Do ; "both high")]
#[test_case("HIGH", "High", Quadrant::Do ; "case insensitive")]
#[test_case(" high ", "high", Quadrant::Do ; "surrounding whitespace")]
#[test_case("high", "low", Quadrant::Decide ; "important only")]
#[test_case("low", "high", Quadrant::Delegate ; "urgent only")]
#[test_case("low", "low", Quadrant::Delete ; "both low")]
#[test_case("", "", Quadrant::Delete ; "empty strings")]
#[test_case("medium", "urgent", Quadrant::Delete ; "unknown words count as low")]
#[test_case("high", "soon", Quadrant::Decide ; "unknown urgency counts as low")]
fn test_classify(importance: &str, urgency: &str, expected: Quadrant) {
    assert_eq!(classify(importance, urgency), expected);
}

// =============================================================================
// Budget tiers
// =============================================================================

#[test_case(0, BudgetTier::Low ; "zero")]
#[test_case(3, BudgetTier::Low ; "low boundary")]
#[test_case(4, BudgetTier::Medium ; "just above low")]
#[test_case(7, BudgetTier::Medium ; "just below high")]
#[test_case(8, BudgetTier::High ; "high boundary")]
#[test_case(50, BudgetTier::High ; "spoon count")]
fn test_default_tiers(budget: u32, expected: BudgetTier) {
    assert_eq!(RankPolicy::default().tier(budget), expected);
}

// =============================================================================
// Scores
// =============================================================================

#[test_case(10, 10, 10.0 ; "exact fit")]
#[test_case(10, 50, 10.0 ; "plenty")]
#[test_case(10, 6, 5.0 ; "more than half")]
#[test_case(10, 5, 5.0 ; "exactly half")]
#[test_case(10, 3, 3.0 ; "proportional")]
#[test_case(10, 0, 0.0 ; "nothing available")]
#[test_case(0, 0, 10.0 ; "nothing required")]
fn test_match_score(required: u32, available: u32, expected: f64) {
    assert!((match_score(required, available) - expected).abs() < 1e-9);
}

#[test_case("1 hour", 10.0 ; "one hour")]
#[test_case("2 hours", 9.0 ; "two hours")]
#[test_case("8 hours", 7.0 ; "working day")]
#[test_case("30 minutes", 10.0 ; "short work clamps to ten")]
#[test_case("30 days", 1.0 ; "long work clamps to one")]
#[test_case("120", 9.0 ; "bare number is minutes")]
#[test_case("garbage", 5.0 ; "unparsable is neutral")]
#[test_case("", 5.0 ; "empty is neutral")]
fn test_duration_score(text: &str, expected: f64) {
    assert!((duration_score(text) - expected).abs() < 1e-9);
}
