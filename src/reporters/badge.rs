//! Badge reporter
//!
//! Emits a shields.io endpoint-badge descriptor: point a shields endpoint
//! badge at a file or URL serving this JSON and it renders as
//! `agentpulse | 72% (Good)`. Colors come from a fixed palette keyed to the
//! same grade thresholds as the scoring engine.

use crate::models::{Grade, HealthReport};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BadgeDescriptor {
    #[serde(rename = "schemaVersion")]
    schema_version: u32,
    label: &'static str,
    message: String,
    color: &'static str,
}

fn badge_color(grade: Grade) -> &'static str {
    match grade {
        Grade::Excellent => "brightgreen",
        Grade::Good => "yellowgreen",
        Grade::NeedsWork => "orange",
        Grade::AtRisk => "red",
    }
}

/// Render report as a badge descriptor
pub fn render(report: &HealthReport) -> Result<String> {
    let descriptor = BadgeDescriptor {
        schema_version: 1,
        label: "agentpulse",
        message: format!("{}% ({})", report.score, report.grade),
        color: badge_color(report.grade),
    };
    Ok(serde_json::to_string_pretty(&descriptor)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_badge_schema() {
        let report = test_report();
        let out = render(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["schemaVersion"], 1);
        assert_eq!(parsed["label"], "agentpulse");
        let message = parsed["message"].as_str().unwrap();
        assert!(message.starts_with(&format!("{}%", report.score)));
        assert!(parsed["color"].is_string());
    }

    #[test]
    fn test_color_palette_follows_grade() {
        assert_eq!(badge_color(Grade::Excellent), "brightgreen");
        assert_eq!(badge_color(Grade::Good), "yellowgreen");
        assert_eq!(badge_color(Grade::NeedsWork), "orange");
        assert_eq!(badge_color(Grade::AtRisk), "red");
    }
}
