//! JSON reporter
//!
//! Outputs the full HealthReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.
//!
//! Schema (stable):
//!
//! ```text
//! {
//!   "score": 72,            // overall rounded percent
//!   "earned": 72,           // points awarded
//!   "total": 100,           // points available
//!   "grade": "good",        // excellent | good | needs_work | at_risk
//!   "categories": [ {"category", "earned", "total", "percent"}, ... ],
//!   "checks": [ {"category", "question", "weight", "passed", "detail",
//!                "points", "remediation"?}, ... ]
//! }
//! ```
//!
//! `remediation` is present only on failed checks.

use crate::models::HealthReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &HealthReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
