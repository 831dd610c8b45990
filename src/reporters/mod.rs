//! Output reporters for health reports
//!
//! Supports three output formats:
//! - `text` - Terminal output with colors and per-category bars
//! - `json` - Machine-readable JSON of the full report
//! - `badge` - shields.io endpoint-badge descriptor
//!
//! Reporters are pure functions over an already-finished `HealthReport`;
//! none of them touch scoring.

mod badge;
mod json;
mod text;

use crate::models::HealthReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Badge,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "badge" => Ok(OutputFormat::Badge),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, badge",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Badge => write!(f, "badge"),
        }
    }
}

/// Render a health report in the specified format.
///
/// `color` only affects the text format.
pub fn render(report: &HealthReport, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, color),
        OutputFormat::Json => json::render(report),
        OutputFormat::Badge => badge::render(report),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::checks::registry;
    use crate::models::{CollectedInputs, HookEntry, MarkerFlags};
    use crate::scoring::evaluate;

    /// A mid-score report for reporter tests: some passes, some failures.
    pub(crate) fn test_report() -> HealthReport {
        let inputs = CollectedInputs {
            hooks: vec![
                HookEntry::new("PreToolUse", "guard.sh --mode block"),
                HookEntry::new("PostToolUse", "echo done >> ~/.claude/logs/tools.log"),
            ],
            instructions: "run cargo test before committing. never push to the main branch."
                .to_string(),
            markers: MarkerFlags {
                log_dir: true,
                project_instructions: true,
                ..Default::default()
            },
        };
        evaluate(&inputs, &registry())
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("badge").unwrap(), OutputFormat::Badge);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_all_formats_render() {
        let report = test_report();
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Badge] {
            let out = render(&report, format, false).unwrap();
            assert!(!out.is_empty(), "{format} produced no output");
        }
    }
}
