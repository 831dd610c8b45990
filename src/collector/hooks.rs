//! Hook-document parsing
//!
//! The per-user settings document maps lifecycle event names to hook lists in
//! one of two shapes, both seen in the wild:
//!
//! - nested: `{"PreToolUse": [{"matcher": "Bash", "hooks": [{"command": "…"}]}]}`
//! - flat:   `{"PreToolUse": ["cmd", {"command": "cmd"}]}`
//!
//! Both shapes resolve once at parse time, through an untagged union over the
//! per-event entries, into the same normalized `HookEntry` sequence.
//! Unrecognized or empty entries are dropped silently; a malformed document
//! yields an empty hook list, never an error.

use crate::models::HookEntry;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Top-level settings document. Everything except `hooks` is ignored.
#[derive(Debug, Deserialize)]
struct SettingsDoc {
    #[serde(default)]
    hooks: BTreeMap<String, Value>,
}

/// One entry under an event key, in either tolerated shape.
///
/// Variant order matters: a matcher object is identified by its `hooks`
/// field, a flat object by its `command` field, and anything else falls
/// through to `Unrecognized` and is dropped during normalization.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntryShape {
    Matcher {
        hooks: Vec<CommandShape>,
    },
    Command(CommandShape),
    Unrecognized(Value),
}

/// A command in either bare-string or object form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CommandShape {
    Bare(String),
    Object { command: String },
}

impl CommandShape {
    fn into_command(self) -> String {
        match self {
            CommandShape::Bare(c) => c,
            CommandShape::Object { command } => command,
        }
    }
}

/// Parse a settings document into normalized hook entries.
///
/// Events are visited in the document's key order (BTreeMap keeps this
/// stable); within an event, entries keep their list order.
pub fn parse_hooks(raw: &str) -> Vec<HookEntry> {
    let doc: SettingsDoc = match serde_json::from_str(raw) {
        Ok(doc) => doc,
        Err(err) => {
            debug!("settings document unparseable, treating as empty: {err}");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for (event, value) in doc.hooks {
        let shapes: Vec<EntryShape> = match serde_json::from_value(value) {
            Ok(shapes) => shapes,
            Err(err) => {
                debug!("hooks for event {event:?} unparseable, skipping: {err}");
                continue;
            }
        };
        for shape in shapes {
            match shape {
                EntryShape::Matcher { hooks } => {
                    for hook in hooks {
                        push_entry(&mut entries, &event, hook.into_command());
                    }
                }
                EntryShape::Command(command) => {
                    push_entry(&mut entries, &event, command.into_command());
                }
                EntryShape::Unrecognized(value) => {
                    debug!("dropping unrecognized hook entry under {event:?}: {value}");
                }
            }
        }
    }
    entries
}

fn push_entry(entries: &mut Vec<HookEntry>, event: &str, command: String) {
    let command = command.trim();
    if command.is_empty() {
        return;
    }
    entries.push(HookEntry::new(event, command));
}
