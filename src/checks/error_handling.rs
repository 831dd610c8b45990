//! Error-handling checks
//!
//! Does the configuration notice and react when something goes wrong?
//! 15 points.
//!
//! Note: the bare word "error" in hook text satisfies both the error-capture
//! check and the retry-guidance fallback. The overlap is intentional: hook
//! text has no schema, and an error-aware hook is adjacent evidence for both
//! questions.

use super::find_keyword;
use crate::models::{Category, Check, CollectedInputs, Outcome};

const RETRY_KEYWORDS: &[&str] = &["retry", "timeout", "backoff"];

pub fn checks() -> Vec<Check> {
    vec![
        Check {
            category: Category::ErrorHandling,
            question: "Is a hook bound to a stop event?",
            weight: 5,
            predicate: stop_hook,
            remediation: "Bind a hook to the Stop event so the session end is observable (cleanup, notification, log flush).",
        },
        Check {
            category: Category::ErrorHandling,
            question: "Does any hook deal with errors?",
            weight: 5,
            predicate: error_capture,
            remediation: "Add a hook that captures or reacts to errors, e.g. appending tool failures to a log.",
        },
        Check {
            category: Category::ErrorHandling,
            question: "Is there retry or timeout guidance?",
            weight: 5,
            predicate: retry_guidance,
            remediation: "Tell the assistant how to handle flaky operations: retries, timeouts, backoff.",
        },
    ]
}

fn stop_hook(inputs: &CollectedInputs) -> Outcome {
    if inputs.has_event("stop") {
        let count = inputs
            .hooks
            .iter()
            .filter(|h| h.event.to_lowercase().contains("stop"))
            .count();
        Outcome::pass(format!("{count} hook(s) bound to a stop event"))
    } else {
        Outcome::fail("no hook bound to Stop or SubagentStop")
    }
}

fn error_capture(inputs: &CollectedInputs) -> Outcome {
    if inputs.hook_text().contains("error") {
        Outcome::pass("hook command mentions \"error\"")
    } else {
        Outcome::fail("no hook command mentions errors")
    }
}

fn retry_guidance(inputs: &CollectedInputs) -> Outcome {
    if let Some(hit) = find_keyword(&inputs.instructions, RETRY_KEYWORDS) {
        return Outcome::pass(format!("instructions mention \"{hit}\""));
    }
    // An error-aware hook counts as adjacent evidence here too.
    if inputs.hook_text().contains("error") {
        return Outcome::pass("hook command mentions \"error\"");
    }
    Outcome::fail("no retry/timeout/backoff guidance in instructions, no error-aware hook")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HookEntry;

    #[test]
    fn test_stop_hook_counts_stop_events() {
        let inputs = CollectedInputs {
            hooks: vec![
                HookEntry::new("Stop", "cleanup.sh"),
                HookEntry::new("SubagentStop", "cleanup.sh"),
                HookEntry::new("PreToolUse", "guard.sh"),
            ],
            ..Default::default()
        };
        let outcome = stop_hook(&inputs);
        assert!(outcome.passed);
        assert!(outcome.detail.contains("2 hook(s)"));
    }

    #[test]
    fn test_error_keyword_satisfies_both_checks() {
        let inputs = CollectedInputs {
            hooks: vec![HookEntry::new("PostToolUse", "log-error.sh")],
            ..Default::default()
        };
        assert!(error_capture(&inputs).passed);
        assert!(retry_guidance(&inputs).passed);
    }

    #[test]
    fn test_retry_guidance_from_instructions() {
        let inputs = CollectedInputs {
            instructions: "retry flaky tests up to three times".into(),
            ..Default::default()
        };
        assert!(retry_guidance(&inputs).passed);
    }

    #[test]
    fn test_all_fail_on_empty() {
        let inputs = CollectedInputs::default();
        assert!(!stop_hook(&inputs).passed);
        assert!(!error_capture(&inputs).passed);
        assert!(!retry_guidance(&inputs).passed);
    }
}
