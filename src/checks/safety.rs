//! Safety checks
//!
//! Can the configuration stop the assistant from doing something
//! destructive? Guard hooks, branch protection, confirmation gates, and
//! permission awareness. 20 points.

use super::find_keyword;
use crate::models::{Category, Check, CollectedInputs, Outcome};

const GUARD_KEYWORDS: &[&str] = &["block", "deny", "guard", "rm -rf"];
const BRANCH_KEYWORDS: &[&str] = &[
    "main branch",
    "master branch",
    "protected branch",
    "force push",
    "never push",
];
const CONFIRM_KEYWORDS: &[&str] = &["confirm", "approval", "ask before", "review before"];
const PERMISSION_KEYWORDS: &[&str] = &["permission", "sandbox", "allowlist", "allowed tools"];

pub fn checks() -> Vec<Check> {
    vec![
        Check {
            category: Category::Safety,
            question: "Is there a hook that can block dangerous commands?",
            weight: 5,
            predicate: guard_hook,
            remediation: "Add a PreToolUse hook that inspects commands and blocks destructive ones (e.g. rm -rf, force pushes).",
        },
        Check {
            category: Category::Safety,
            question: "Do the instructions protect important branches?",
            weight: 5,
            predicate: branch_protection,
            remediation: "State branch rules in an instruction file, e.g. \"never push to the main branch without review\".",
        },
        Check {
            category: Category::Safety,
            question: "Is a confirmation step required for risky actions?",
            weight: 5,
            predicate: confirmation_gate,
            remediation: "Require confirmation before risky actions, via an instruction rule or a hook that asks for approval.",
        },
        Check {
            category: Category::Safety,
            question: "Do the instructions address permissions or sandboxing?",
            weight: 5,
            predicate: permission_awareness,
            remediation: "Document which tools are allowed and how the sandbox or permission model is meant to be used.",
        },
    ]
}

fn guard_hook(inputs: &CollectedInputs) -> Outcome {
    match find_keyword(&inputs.hook_text(), GUARD_KEYWORDS) {
        Some(hit) => Outcome::pass(format!("hook command mentions \"{hit}\"")),
        None => Outcome::fail(format!(
            "no guard keyword ({}) in any of {} hook command(s)",
            GUARD_KEYWORDS.join(", "),
            inputs.hooks.len()
        )),
    }
}

fn branch_protection(inputs: &CollectedInputs) -> Outcome {
    match find_keyword(&inputs.instructions, BRANCH_KEYWORDS) {
        Some(hit) => Outcome::pass(format!("instructions mention \"{hit}\"")),
        None => Outcome::fail("no branch-protection language in the instruction files"),
    }
}

fn confirmation_gate(inputs: &CollectedInputs) -> Outcome {
    let hook_text = inputs.hook_text();
    if let Some(hit) = find_keyword(&hook_text, CONFIRM_KEYWORDS) {
        return Outcome::pass(format!("hook command mentions \"{hit}\""));
    }
    match find_keyword(&inputs.instructions, CONFIRM_KEYWORDS) {
        Some(hit) => Outcome::pass(format!("instructions mention \"{hit}\"")),
        None => Outcome::fail("no confirmation/approval language in hooks or instructions"),
    }
}

fn permission_awareness(inputs: &CollectedInputs) -> Outcome {
    match find_keyword(&inputs.instructions, PERMISSION_KEYWORDS) {
        Some(hit) => Outcome::pass(format!("instructions mention \"{hit}\"")),
        None => Outcome::fail("instructions never mention permissions, sandboxing, or allowlists"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HookEntry;

    fn inputs_with_hook(command: &str) -> CollectedInputs {
        CollectedInputs {
            hooks: vec![HookEntry::new("PreToolUse", command)],
            ..Default::default()
        }
    }

    #[test]
    fn test_guard_hook_matches_block() {
        let outcome = guard_hook(&inputs_with_hook("guard.sh --mode block"));
        assert!(outcome.passed);
        assert!(outcome.detail.contains("block"));
    }

    #[test]
    fn test_guard_hook_fails_without_keyword() {
        let outcome = guard_hook(&inputs_with_hook("echo hello"));
        assert!(!outcome.passed);
        assert!(outcome.detail.contains("1 hook command"));
    }

    #[test]
    fn test_branch_protection_reads_instructions() {
        let inputs = CollectedInputs {
            instructions: "never push to the main branch".into(),
            ..Default::default()
        };
        assert!(branch_protection(&inputs).passed);
        assert!(!branch_protection(&CollectedInputs::default()).passed);
    }

    #[test]
    fn test_confirmation_gate_accepts_either_source() {
        assert!(confirmation_gate(&inputs_with_hook("ask before rm")).passed);
        let inputs = CollectedInputs {
            instructions: "wait for approval first".into(),
            ..Default::default()
        };
        assert!(confirmation_gate(&inputs).passed);
    }
}
