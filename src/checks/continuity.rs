//! Session-continuity checks
//!
//! Does work survive a session boundary? Memory stores, session bootstrap,
//! context hygiene. 15 points.

use super::find_keyword;
use crate::models::{Category, Check, CollectedInputs, Outcome};

const CONTEXT_KEYWORDS: &[&str] = &["context", "compact", "summar"];

pub fn checks() -> Vec<Check> {
    vec![
        Check {
            category: Category::SessionContinuity,
            question: "Is there a persistent memory or session store?",
            weight: 5,
            predicate: memory_store,
            remediation: "Create a memory directory (e.g. ~/.claude/memory) so facts survive between sessions.",
        },
        Check {
            category: Category::SessionContinuity,
            question: "Does a new session pick up where the last one left off?",
            weight: 5,
            predicate: session_bootstrap,
            remediation: "Add a SessionStart hook, or keep a MISSION.md/task file a fresh session can read first.",
        },
        Check {
            category: Category::SessionContinuity,
            question: "Do the instructions cover context management?",
            weight: 5,
            predicate: context_hygiene,
            remediation: "Tell the assistant how to manage long contexts: when to compact, what to summarize.",
        },
    ]
}

fn memory_store(inputs: &CollectedInputs) -> Outcome {
    if inputs.markers.memory_dir {
        Outcome::pass("memory directory exists")
    } else if inputs.markers.session_dir {
        Outcome::pass("session directory exists")
    } else {
        Outcome::fail("no memory or session directory found")
    }
}

fn session_bootstrap(inputs: &CollectedInputs) -> Outcome {
    if inputs.has_event("sessionstart") {
        return Outcome::pass("a SessionStart hook is configured");
    }
    if inputs.markers.mission_file {
        return Outcome::pass("mission file exists");
    }
    if inputs.markers.task_file {
        return Outcome::pass("task file exists");
    }
    Outcome::fail("no SessionStart hook, mission file, or task file")
}

fn context_hygiene(inputs: &CollectedInputs) -> Outcome {
    match find_keyword(&inputs.instructions, CONTEXT_KEYWORDS) {
        Some(hit) => Outcome::pass(format!("instructions mention \"{hit}\"")),
        None => Outcome::fail("instructions never mention context, compaction, or summaries"),
    }
}
