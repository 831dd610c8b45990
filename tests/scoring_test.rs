//! Scoring properties over the real registry
//!
//! Exercises the collector → scoring pipeline with synthetic inputs and
//! verifies the aggregate invariants: totals reconcile, empty input floors
//! the score, saturated input tops it out, and evaluation is deterministic.

use agentpulse::checks::registry;
use agentpulse::collector::parse_hooks;
use agentpulse::models::{CollectedInputs, Grade, HookEntry, MarkerFlags, PASSING_PERCENT};
use agentpulse::scoring::evaluate;

/// Inputs that satisfy every predicate's trigger condition.
fn saturated_inputs() -> CollectedInputs {
    CollectedInputs {
        hooks: vec![
            HookEntry::new("PreToolUse", "guard.sh --mode block"),
            HookEntry::new("PostToolUse", "log-error.sh >> ~/.claude/logs/tools.log"),
            HookEntry::new("Stop", "notify-send 'session done'"),
            HookEntry::new("SessionStart", "cat MISSION.md"),
            HookEntry::new("Notification", "true"),
        ],
        instructions: "never push to the main branch. ask before destructive actions. \
                       respect the permission model and the sandbox. retry flaky network \
                       calls with a timeout. compact long context and summarize progress. \
                       run cargo test and the lint step before committing. keep every \
                       secret and api key in an environment variable."
            .to_string(),
        markers: MarkerFlags {
            memory_dir: true,
            session_dir: true,
            mission_file: true,
            task_file: true,
            credentials_file: true,
            watchdog_script: true,
            log_dir: true,
            project_instructions: true,
        },
    }
}

#[test]
fn category_totals_reconcile_with_overall() {
    let report = evaluate(&CollectedInputs::default(), &registry());
    let cat_total: u32 = report.categories.iter().map(|s| s.total).sum();
    assert_eq!(cat_total, report.total);
    assert_eq!(report.total, 100);
}

#[test]
fn empty_inputs_floor_the_score() {
    let report = evaluate(&CollectedInputs::default(), &registry());
    assert_eq!(report.earned, 0);
    assert_eq!(report.score, 0);
    assert_eq!(report.grade, Grade::AtRisk);
    assert!(!report.passing());
    // every check still carries a printable detail
    for check in &report.checks {
        assert!(!check.passed);
        assert!(!check.detail.is_empty());
        assert!(check.remediation.is_some());
    }
}

#[test]
fn saturated_inputs_top_out_the_score() {
    let report = evaluate(&saturated_inputs(), &registry());
    for check in &report.checks {
        assert!(
            check.passed,
            "expected pass: {:?} ({})",
            check.question, check.detail
        );
    }
    assert_eq!(report.earned, report.total);
    assert_eq!(report.score, 100);
    assert_eq!(report.grade, Grade::Excellent);
    assert!(report.passing());
}

#[test]
fn evaluation_is_deterministic() {
    let inputs = saturated_inputs();
    let reg = registry();
    let a = serde_json::to_string(&evaluate(&inputs, &reg)).unwrap();
    let b = serde_json::to_string(&evaluate(&inputs, &reg)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn more_evidence_never_lowers_the_grade() {
    // Build up inputs one piece at a time; the grade must be monotone.
    let reg = registry();
    let mut inputs = CollectedInputs::default();
    let mut last_grade = evaluate(&inputs, &reg).grade;

    inputs.instructions = saturated_inputs().instructions;
    let g = evaluate(&inputs, &reg).grade;
    assert!(g >= last_grade);
    last_grade = g;

    inputs.hooks = saturated_inputs().hooks;
    let g = evaluate(&inputs, &reg).grade;
    assert!(g >= last_grade);
    last_grade = g;

    inputs.markers = saturated_inputs().markers;
    let g = evaluate(&inputs, &reg).grade;
    assert!(g >= last_grade);
}

#[test]
fn malformed_settings_degrade_not_crash() {
    // A truncated settings document produces an empty hook list; every
    // hook-dependent check reports a descriptive failure, not a panic.
    let hooks = parse_hooks("{\"hooks\": {\"PreToolUse\": [{\"matcher\"");
    assert!(hooks.is_empty());

    let inputs = CollectedInputs {
        hooks,
        ..Default::default()
    };
    let report = evaluate(&inputs, &registry());
    assert_eq!(report.score, 0);
    let guard = report
        .checks
        .iter()
        .find(|c| c.question.contains("block dangerous"))
        .unwrap();
    assert!(!guard.passed);
    assert!(guard.detail.contains("0 hook command(s)"));
}

#[test]
fn passing_threshold_matches_good_band() {
    assert_eq!(PASSING_PERCENT, 60);
    assert_eq!(Grade::from_percent(PASSING_PERCENT), Grade::Good);
    assert_eq!(Grade::from_percent(PASSING_PERCENT - 1), Grade::NeedsWork);
}
