//! Core data models for agentpulse
//!
//! These models are used throughout the codebase for representing
//! collected configuration inputs, check outcomes, and the health report.

use serde::{Deserialize, Serialize};

/// A normalized hook: one user-configured command bound to a lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookEntry {
    pub event: String,
    pub command: String,
}

impl HookEntry {
    pub fn new(event: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: command.into(),
        }
    }
}

/// Existence flags for well-known marker files and directories.
///
/// A marker signals a configuration pattern by its mere presence; no content
/// is inspected. Permission errors read as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerFlags {
    pub memory_dir: bool,
    pub session_dir: bool,
    pub mission_file: bool,
    pub task_file: bool,
    pub credentials_file: bool,
    pub watchdog_script: bool,
    pub log_dir: bool,
    pub project_instructions: bool,
}

/// Immutable snapshot of everything the checks look at for one run.
///
/// `instructions` is the concatenation of all instruction files found,
/// already lowercased so predicates match case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct CollectedInputs {
    pub hooks: Vec<HookEntry>,
    pub instructions: String,
    pub markers: MarkerFlags,
}

impl CollectedInputs {
    /// All hook command text joined and lowercased, for keyword matching.
    pub fn hook_text(&self) -> String {
        self.hooks
            .iter()
            .map(|h| h.command.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True if any hook is bound to an event whose lowercased name contains
    /// `needle` (itself expected lowercase).
    pub fn has_event(&self, needle: &str) -> bool {
        self.hooks
            .iter()
            .any(|h| h.event.to_lowercase().contains(needle))
    }
}

/// Scoring categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Safety,
    ErrorHandling,
    SessionContinuity,
    Instructions,
    Observability,
    CredentialHygiene,
    Automation,
}

impl Category {
    /// Every category, in registry/report order.
    pub const ALL: [Category; 7] = [
        Category::Safety,
        Category::ErrorHandling,
        Category::SessionContinuity,
        Category::Instructions,
        Category::Observability,
        Category::CredentialHygiene,
        Category::Automation,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Safety => write!(f, "Safety"),
            Category::ErrorHandling => write!(f, "Error Handling"),
            Category::SessionContinuity => write!(f, "Session Continuity"),
            Category::Instructions => write!(f, "Instructions"),
            Category::Observability => write!(f, "Observability"),
            Category::CredentialHygiene => write!(f, "Credential Hygiene"),
            Category::Automation => write!(f, "Automation"),
        }
    }
}

/// Result of one predicate invocation. `detail` is always non-empty and
/// printable whether the check passed or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub passed: bool,
    pub detail: String,
}

impl Outcome {
    pub fn pass(detail: impl Into<String>) -> Self {
        Self {
            passed: true,
            detail: detail.into(),
        }
    }

    pub fn fail(detail: impl Into<String>) -> Self {
        Self {
            passed: false,
            detail: detail.into(),
        }
    }
}

/// One registry entry: a weighted question answered by a pure predicate.
///
/// Predicates read the shared snapshot only; they hold no state and must not
/// depend on other checks' outcomes.
#[derive(Clone)]
pub struct Check {
    pub category: Category,
    pub question: &'static str,
    pub weight: u32,
    pub predicate: fn(&CollectedInputs) -> Outcome,
    pub remediation: &'static str,
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("category", &self.category)
            .field("question", &self.question)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Evaluated check, owning a copy of the definition fields so the report
/// serializes directly. `remediation` is present only when the check failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub category: Category,
    pub question: String,
    pub weight: u32,
    pub passed: bool,
    pub detail: String,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

/// Per-category aggregate, recomputed each run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub earned: u32,
    pub total: u32,
    pub percent: u32,
}

impl CategoryScore {
    pub fn new(category: Category, earned: u32, total: u32) -> Self {
        Self {
            category,
            earned,
            total,
            percent: percent_of(earned, total),
        }
    }
}

/// `round(100 * earned / total)`, with an empty total scoring zero.
pub fn percent_of(earned: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * earned as f64 / total as f64).round() as u32
}

/// Qualitative grade bands. Boundaries are inclusive on the lower end,
/// evaluated top-down, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    AtRisk,
    NeedsWork,
    Good,
    Excellent,
}

/// Band thresholds, top band first.
pub const GRADE_BANDS: [(u32, Grade); 3] = [
    (80, Grade::Excellent),
    (60, Grade::Good),
    (35, Grade::NeedsWork),
];

/// Minimum percent for a passing exit status.
pub const PASSING_PERCENT: u32 = 60;

impl Grade {
    /// Calculate grade band from overall percent.
    pub fn from_percent(percent: u32) -> Self {
        for (floor, grade) in GRADE_BANDS {
            if percent >= floor {
                return grade;
            }
        }
        Grade::AtRisk
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::Excellent => write!(f, "Excellent"),
            Grade::Good => write!(f, "Good"),
            Grade::NeedsWork => write!(f, "Needs Work"),
            Grade::AtRisk => write!(f, "At Risk"),
        }
    }
}

/// Overall health report for one run. Immutable once produced; consumed only
/// by the reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub score: u32,
    pub earned: u32,
    pub total: u32,
    pub grade: Grade,
    /// Category scores in registry order.
    pub categories: Vec<CategoryScore>,
    /// Per-check results in registry order.
    pub checks: Vec<CheckResult>,
}

impl HealthReport {
    /// Whether this report meets the passing threshold used for the exit code.
    pub fn passing(&self) -> bool {
        self.score >= PASSING_PERCENT
    }

    pub fn category_score(&self, category: Category) -> Option<CategoryScore> {
        self.categories.iter().find(|s| s.category == category).copied()
    }
}
