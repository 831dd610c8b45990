//! Text (terminal) reporter with colors and formatting

use crate::models::{Grade, HealthReport};
use anyhow::Result;

/// ANSI escape codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// How many failed checks get a remediation entry.
const TOP_FAILED: usize = 5;

/// Width of the per-category bars, in cells.
const BAR_WIDTH: usize = 20;

fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::Excellent => GREEN,
        Grade::Good => "\x1b[92m", // Light green
        Grade::NeedsWork => YELLOW,
        Grade::AtRisk => RED,
    }
}

fn percent_color(percent: u32) -> &'static str {
    if percent >= 80 {
        GREEN
    } else if percent >= 60 {
        YELLOW
    } else {
        RED
    }
}

/// Render report as formatted terminal output
pub fn render(report: &HealthReport, color: bool) -> Result<String> {
    let mut out = String::new();
    let paint = |code: &'static str| if color { code } else { "" };
    let reset = paint(RESET);
    let bold = paint(BOLD);
    let dim = paint(DIM);

    // Header
    out.push_str(&format!("\n{bold}Agentpulse Checkup{reset}\n"));
    out.push_str(&format!(
        "{dim}──────────────────────────────────────{reset}\n"
    ));
    out.push_str(&format!(
        "Score: {bold}{}/100{reset}  Grade: {}{bold}{}{reset}\n\n",
        report.score,
        paint(grade_color(report.grade)),
        report.grade
    ));

    // Category sections in registry order
    for cat in &report.categories {
        out.push_str(&format!(
            "{bold}{}{reset}  {}{}/{}{reset}  {}\n",
            cat.category,
            paint(percent_color(cat.percent)),
            cat.earned,
            cat.total,
            bar(cat.percent, dim, reset),
        ));
        for check in report.checks.iter().filter(|c| c.category == cat.category) {
            if check.passed {
                out.push_str(&format!("  {}✓{reset} {}\n", paint(GREEN), check.question));
            } else {
                out.push_str(&format!(
                    "  {}✗{reset} {}  {dim}({}){reset}\n",
                    paint(RED),
                    check.question,
                    check.detail
                ));
            }
        }
        out.push('\n');
    }

    // Top failed checks by weight, registry order breaking ties
    let mut failed: Vec<_> = report.checks.iter().filter(|c| !c.passed).collect();
    failed.sort_by(|a, b| b.weight.cmp(&a.weight)); // stable: keeps registry order on ties
    if !failed.is_empty() {
        out.push_str(&format!("{bold}FIX FIRST{reset}\n"));
        for check in failed.iter().take(TOP_FAILED) {
            let remediation = check.remediation.as_deref().unwrap_or("");
            out.push_str(&format!(
                "  {}[{} pts]{reset} {}\n      {dim}{}{reset}\n",
                paint(YELLOW),
                check.weight,
                check.question,
                remediation
            ));
        }
        let remaining = failed.len().saturating_sub(TOP_FAILED);
        if remaining > 0 {
            out.push_str(&format!(
                "  {dim}...and {} more failed check(s){reset}\n",
                remaining
            ));
        }
        out.push('\n');
    }

    // Final score line
    out.push_str(&format!(
        "{bold}{}/{} points ({}%) — {}{reset}\n",
        report.earned, report.total, report.score, report.grade
    ));

    Ok(out)
}

/// Proportional bar, e.g. `████████████░░░░░░░░` for 60%.
fn bar(percent: u32, dim: &str, reset: &str) -> String {
    let filled = (percent as usize * BAR_WIDTH) / 100;
    format!(
        "{}{}{}{}",
        "█".repeat(filled),
        dim,
        "░".repeat(BAR_WIDTH - filled),
        reset
    )
}
