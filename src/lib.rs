//! Agentpulse - health checkup for AI assistant configurations
//!
//! A local, read-only diagnostic that inspects hook definitions, instruction
//! files, and session marker files, then produces a weighted health score
//! across 7 categories.
//!
//! Pipeline: `collector` gathers an immutable input snapshot, `scoring`
//! evaluates the `checks` registry against it, and `reporters` render the
//! resulting report as text, JSON, or a badge descriptor.

pub mod checks;
pub mod cli;
pub mod collector;
pub mod models;
pub mod reporters;
pub mod scoring;
