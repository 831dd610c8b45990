//! Health scoring
//!
//! Runs every registry check against one immutable input snapshot and
//! aggregates the outcomes into a `HealthReport`.
//!
//! # Scoring Formula
//!
//! ```text
//! points(check)   = weight if predicate passes, else 0
//! category score  = Σ points / Σ weight, per category, as rounded percent
//! overall percent = round(100 · Σ points / Σ weight)
//! grade           = first band whose floor the percent meets (80/60/35)
//! ```
//!
//! Each predicate runs exactly once, in registry order, and results are
//! order-independent: no check sees another check's outcome. A panicking
//! predicate is caught and recorded as a failed check, so one bad rule
//! cannot abort the run.

use crate::models::{
    CategoryScore, Check, CheckResult, CollectedInputs, Grade, HealthReport, Outcome, percent_of,
};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::debug;

/// Evaluate the registry against one input snapshot.
pub fn evaluate(inputs: &CollectedInputs, registry: &[Check]) -> HealthReport {
    let mut checks = Vec::with_capacity(registry.len());

    for check in registry {
        let outcome = run_predicate(check, inputs);
        debug!(
            "{} [{}] -> {}",
            check.question,
            check.category,
            if outcome.passed { "pass" } else { "fail" }
        );
        let points = if outcome.passed { check.weight } else { 0 };
        checks.push(CheckResult {
            category: check.category,
            question: check.question.to_string(),
            weight: check.weight,
            passed: outcome.passed,
            detail: outcome.detail,
            points,
            remediation: if outcome.passed {
                None
            } else {
                Some(check.remediation.to_string())
            },
        });
    }

    let categories = aggregate_categories(&checks);
    let earned: u32 = checks.iter().map(|c| c.points).sum();
    let total: u32 = checks.iter().map(|c| c.weight).sum();
    let score = percent_of(earned, total);

    HealthReport {
        score,
        earned,
        total,
        grade: Grade::from_percent(score),
        categories,
        checks,
    }
}

/// Run one predicate behind a panic boundary.
///
/// Predicates are arbitrary heuristics over untrusted text; a panic in one
/// becomes a failed check with a diagnostic detail.
fn run_predicate(check: &Check, inputs: &CollectedInputs) -> Outcome {
    match catch_unwind(AssertUnwindSafe(|| (check.predicate)(inputs))) {
        Ok(outcome) => outcome,
        Err(_) => {
            debug!("predicate panicked for check {:?}", check.question);
            Outcome::fail("internal error while evaluating this check")
        }
    }
}

/// Category scores in first-seen (registry) order.
fn aggregate_categories(checks: &[CheckResult]) -> Vec<CategoryScore> {
    let mut scores: Vec<CategoryScore> = Vec::new();
    for check in checks {
        match scores.iter_mut().find(|s| s.category == check.category) {
            Some(score) => {
                score.earned += check.points;
                score.total += check.weight;
            }
            None => scores.push(CategoryScore {
                category: check.category,
                earned: check.points,
                total: check.weight,
                percent: 0,
            }),
        }
    }
    for score in &mut scores {
        score.percent = percent_of(score.earned, score.total);
    }
    scores
}
