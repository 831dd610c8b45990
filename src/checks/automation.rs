//! Automation checks
//!
//! Is the tool lifecycle wired up at all, and does anything watch the
//! watcher? 10 points.

use super::find_keyword;
use crate::models::{Category, Check, CollectedInputs, Outcome};

const WATCHDOG_KEYWORDS: &[&str] = &["watchdog", "cron", "schedule"];

pub fn checks() -> Vec<Check> {
    vec![
        Check {
            category: Category::Automation,
            question: "Are tool-use hooks configured?",
            weight: 5,
            predicate: tool_hooks,
            remediation: "Add PreToolUse/PostToolUse hooks; they are the main automation point of the assistant lifecycle.",
        },
        Check {
            category: Category::Automation,
            question: "Is there a watchdog for unattended runs?",
            weight: 5,
            predicate: watchdog,
            remediation: "Add a watchdog script (e.g. .claude/watchdog.sh) or a scheduled job that checks on unattended sessions.",
        },
    ]
}

fn tool_hooks(inputs: &CollectedInputs) -> Outcome {
    let count = inputs
        .hooks
        .iter()
        .filter(|h| {
            let event = h.event.to_lowercase();
            event.contains("pretooluse") || event.contains("posttooluse")
        })
        .count();
    if count > 0 {
        Outcome::pass(format!("{count} tool-use hook(s) configured"))
    } else {
        Outcome::fail("no PreToolUse or PostToolUse hooks")
    }
}

fn watchdog(inputs: &CollectedInputs) -> Outcome {
    if inputs.markers.watchdog_script {
        return Outcome::pass("watchdog script exists");
    }
    match find_keyword(&inputs.hook_text(), WATCHDOG_KEYWORDS) {
        Some(hit) => Outcome::pass(format!("hook command mentions \"{hit}\"")),
        None => Outcome::fail("no watchdog script and no scheduling language in hooks"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HookEntry, MarkerFlags};

    #[test]
    fn test_tool_hooks_counted() {
        let inputs = CollectedInputs {
            hooks: vec![
                HookEntry::new("PreToolUse", "guard.sh"),
                HookEntry::new("PostToolUse", "audit.sh"),
                HookEntry::new("Stop", "bye.sh"),
            ],
            ..Default::default()
        };
        let outcome = tool_hooks(&inputs);
        assert!(outcome.passed);
        assert!(outcome.detail.contains("2 tool-use hook(s)"));
    }

    #[test]
    fn test_watchdog_by_marker_or_keyword() {
        let by_marker = CollectedInputs {
            markers: MarkerFlags {
                watchdog_script: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(watchdog(&by_marker).passed);

        let by_keyword = CollectedInputs {
            hooks: vec![HookEntry::new("Stop", "systemctl restart claude-cron")],
            ..Default::default()
        };
        assert!(watchdog(&by_keyword).passed);
        assert!(!watchdog(&CollectedInputs::default()).passed);
    }
}
