//! Input collection
//!
//! The collector is the only module that knows about real filesystem paths.
//! It gathers three kinds of raw input into one immutable `CollectedInputs`
//! snapshot: normalized hook entries from the per-user settings document,
//! concatenated lowercased instruction-file text, and existence flags for
//! well-known marker files.
//!
//! Collection never fails. Missing, unreadable, or malformed input degrades
//! to an empty/absent value; partial information beats aborting the run.

mod hooks;

pub use hooks::parse_hooks;

use crate::models::{CollectedInputs, MarkerFlags};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Depth limit for the instruction-file discovery walk.
const MAX_WALK_DEPTH: usize = 4;

/// Dependency caches the discovery walk never descends into.
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    "target",
    "vendor",
    "dist",
    "build",
    "__pycache__",
    ".venv",
];

/// The per-user configuration directory, `~/.claude`.
pub fn default_config_base() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".claude"))
        .unwrap_or_else(|| PathBuf::from(".claude"))
}

/// Build a `CollectedInputs` snapshot for one run.
pub fn collect(config_base: &Path, project_root: &Path) -> CollectedInputs {
    CollectedInputs {
        hooks: collect_hooks(config_base),
        instructions: collect_instructions(config_base, project_root),
        markers: collect_markers(config_base, project_root),
    }
}

fn collect_hooks(config_base: &Path) -> Vec<crate::models::HookEntry> {
    let path = config_base.join("settings.json");
    debug!("reading hook settings from {}", path.display());
    match std::fs::read_to_string(&path) {
        Ok(raw) => parse_hooks(&raw),
        Err(err) => {
            debug!("no hook settings ({err}), continuing with empty hooks");
            Vec::new()
        }
    }
}

/// Fixed candidate locations, highest priority first.
fn instruction_candidates(config_base: &Path, project_root: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![config_base.join("CLAUDE.md")];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("claude").join("CLAUDE.md"));
    }
    candidates.push(project_root.join("CLAUDE.md"));
    candidates.push(project_root.join("AGENTS.md"));
    candidates.push(project_root.join(".claude").join("CLAUDE.md"));
    candidates
}

fn collect_instructions(config_base: &Path, project_root: &Path) -> String {
    let mut seen: BTreeSet<PathBuf> = BTreeSet::new();
    let mut text = String::new();

    for path in instruction_candidates(config_base, project_root) {
        append_instruction_file(&path, &mut seen, &mut text);
    }
    for path in discover_instruction_files(project_root) {
        append_instruction_file(&path, &mut seen, &mut text);
    }

    text.to_lowercase()
}

fn append_instruction_file(path: &Path, seen: &mut BTreeSet<PathBuf>, text: &mut String) {
    if !seen.insert(path.to_path_buf()) {
        return;
    }
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!("instruction file {} ({} bytes)", path.display(), content.len());
            text.push_str(&content);
            text.push('\n');
        }
        Err(err) => debug!("skipping instruction file {}: {err}", path.display()),
    }
}

/// Bounded walk for nested instruction files the fixed candidates miss.
///
/// Skips hidden directories and dependency caches, stops at `MAX_WALK_DEPTH`,
/// and returns paths in sorted order so concatenation is stable.
fn discover_instruction_files(project_root: &Path) -> Vec<PathBuf> {
    let walker = ignore::WalkBuilder::new(project_root)
        .max_depth(Some(MAX_WALK_DEPTH))
        .hidden(true)
        .git_ignore(true)
        .require_git(false)
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            !SKIP_DIRS.contains(&name.as_ref())
        })
        .build();

    let mut found: Vec<PathBuf> = walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter(|entry| {
            matches!(
                entry.file_name().to_str(),
                Some("CLAUDE.md") | Some("AGENTS.md")
            )
        })
        .map(|entry| entry.into_path())
        .collect();
    found.sort();
    found
}

fn collect_markers(config_base: &Path, project_root: &Path) -> MarkerFlags {
    let claude_dir = project_root.join(".claude");
    MarkerFlags {
        memory_dir: exists(&config_base.join("memory")) || exists(&claude_dir.join("memory")),
        session_dir: exists(&config_base.join("sessions")),
        mission_file: exists(&project_root.join("MISSION.md"))
            || exists(&claude_dir.join("mission.md")),
        task_file: exists(&project_root.join("TODO.md")) || exists(&claude_dir.join("tasks.md")),
        credentials_file: exists(&config_base.join("credentials.json")),
        watchdog_script: exists(&claude_dir.join("watchdog.sh"))
            || exists(&config_base.join("watchdog.sh")),
        log_dir: exists(&config_base.join("logs")) || exists(&claude_dir.join("logs")),
        project_instructions: exists(&project_root.join("CLAUDE.md"))
            || exists(&project_root.join("AGENTS.md")),
    }
}

/// Existence check that treats permission errors as absent.
fn exists(path: &Path) -> bool {
    path.exists()
}
