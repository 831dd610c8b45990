//! Observability checks
//!
//! Can anyone tell what the assistant did after the fact? Logging hooks, log
//! directories, notifications. 15 points.

use super::find_keyword;
use crate::models::{Category, Check, CollectedInputs, Outcome};

const LOG_KEYWORDS: &[&str] = &["log", ">>", "tee"];

pub fn checks() -> Vec<Check> {
    vec![
        Check {
            category: Category::Observability,
            question: "Does any hook write a log?",
            weight: 5,
            predicate: logging_hook,
            remediation: "Add a PostToolUse hook that appends tool activity to a log file.",
        },
        Check {
            category: Category::Observability,
            question: "Is there a log directory?",
            weight: 5,
            predicate: log_dir,
            remediation: "Create a logs directory (e.g. ~/.claude/logs) so hook output has somewhere to go.",
        },
        Check {
            category: Category::Observability,
            question: "Is anyone notified when attention is needed?",
            weight: 5,
            predicate: notifications,
            remediation: "Bind a hook to the Notification event, or add a hook that notifies you on long-running work.",
        },
    ]
}

fn logging_hook(inputs: &CollectedInputs) -> Outcome {
    match find_keyword(&inputs.hook_text(), LOG_KEYWORDS) {
        Some(hit) => Outcome::pass(format!("hook command mentions \"{hit}\"")),
        None => Outcome::fail("no hook command appends or writes a log"),
    }
}

fn log_dir(inputs: &CollectedInputs) -> Outcome {
    if inputs.markers.log_dir {
        Outcome::pass("log directory exists")
    } else {
        Outcome::fail("no log directory found")
    }
}

fn notifications(inputs: &CollectedInputs) -> Outcome {
    if inputs.has_event("notification") {
        return Outcome::pass("a Notification hook is configured");
    }
    if inputs.hook_text().contains("notify") {
        return Outcome::pass("hook command mentions \"notify\"");
    }
    if inputs.instructions.contains("notify") {
        return Outcome::pass("instructions mention \"notify\"");
    }
    Outcome::fail("no notification hook and no notify language anywhere")
}
