//! Instruction-file checks
//!
//! Is the assistant told anything at all, and is it told the right things?
//! 15 points.

use super::find_keyword;
use crate::models::{Category, Check, CollectedInputs, Outcome};

const WORKFLOW_KEYWORDS: &[&str] = &["test", "build", "lint"];

pub fn checks() -> Vec<Check> {
    vec![
        Check {
            category: Category::Instructions,
            question: "Does any instruction file exist?",
            weight: 5,
            predicate: instructions_present,
            remediation: "Create a CLAUDE.md or AGENTS.md with operating instructions for the assistant.",
        },
        Check {
            category: Category::Instructions,
            question: "Does the project carry its own instruction file?",
            weight: 5,
            predicate: project_instructions,
            remediation: "Add a project-root CLAUDE.md/AGENTS.md; global instructions can't know this repo's conventions.",
        },
        Check {
            category: Category::Instructions,
            question: "Do the instructions cover how to build and test?",
            weight: 5,
            predicate: workflow_guidance,
            remediation: "Document the build/test/lint commands so the assistant verifies its own changes.",
        },
    ]
}

fn instructions_present(inputs: &CollectedInputs) -> Outcome {
    let len = inputs.instructions.trim().len();
    if len > 0 {
        Outcome::pass(format!("{len} bytes of instruction text collected"))
    } else {
        Outcome::fail("no instruction file found at any known location")
    }
}

fn project_instructions(inputs: &CollectedInputs) -> Outcome {
    if inputs.markers.project_instructions {
        Outcome::pass("project-root instruction file exists")
    } else {
        Outcome::fail("no CLAUDE.md or AGENTS.md at the project root")
    }
}

fn workflow_guidance(inputs: &CollectedInputs) -> Outcome {
    match find_keyword(&inputs.instructions, WORKFLOW_KEYWORDS) {
        Some(hit) => Outcome::pass(format!("instructions mention \"{hit}\"")),
        None => Outcome::fail("instructions never mention tests, builds, or linting"),
    }
}
