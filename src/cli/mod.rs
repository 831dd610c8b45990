//! CLI definition and the run pipeline

use crate::models::PASSING_PERCENT;
use crate::reporters::OutputFormat;
use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::str::FromStr;

/// Agentpulse - health checkup for AI assistant configurations
///
/// 100% LOCAL and read-only - nothing is written, nothing leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "agentpulse")]
#[command(
    version,
    // Permissive surface: unrecognized flags are dropped, defaults proceed.
    ignore_errors = true,
    about = "Health checkup for AI coding assistant configurations — scores hooks, instruction files, and session markers",
    long_about = "Agentpulse inspects your AI assistant configuration (hook definitions, \
CLAUDE.md/AGENTS.md instruction files, session marker files) and scores it \
across 7 weighted categories: Safety, Error Handling, Session Continuity, \
Instructions, Observability, Credential Hygiene, and Automation.\n\n\
100% LOCAL and read-only — nothing is written, nothing leaves your machine.\n\n\
Exit status is 0 when the score reaches the passing threshold (60), \
1 otherwise, so it slots into CI gates.",
    after_help = "\
Examples:
  agentpulse                         Check the current project
  agentpulse ~/work/api              Check a specific project root
  agentpulse --json                  Machine-readable report
  agentpulse --badge > badge.json    shields.io endpoint-badge descriptor
  agentpulse --no-color              Plain text (CI logs)"
)]
pub struct Cli {
    /// Project root to inspect (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format: text, json, badge
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "badge"])]
    pub format: String,

    /// Shorthand for --format json
    #[arg(long)]
    pub json: bool,

    /// Shorthand for --format badge
    #[arg(long)]
    pub badge: bool,

    /// Disable ANSI colors in text output
    #[arg(long)]
    pub no_color: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

impl Cli {
    /// The selected output format; shorthand flags win over --format.
    pub fn output_format(&self) -> OutputFormat {
        if self.badge {
            OutputFormat::Badge
        } else if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::from_str(&self.format).unwrap_or_default()
        }
    }
}

/// Collect, evaluate, render, and set the exit status.
pub fn run(cli: Cli) -> Result<()> {
    let format = cli.output_format();
    let config_base = crate::collector::default_config_base();
    let inputs = crate::collector::collect(&config_base, &cli.path);
    let report = crate::scoring::evaluate(&inputs, &crate::checks::registry());

    let color = !cli.no_color && console::colors_enabled();
    let out = crate::reporters::render(&report, format, color)?;
    print!("{out}");
    if !out.ends_with('\n') {
        println!();
    }

    if !report.passing() {
        eprintln!(
            "{}",
            style(format!(
                "score {} below passing threshold {}",
                report.score, PASSING_PERCENT
            ))
            .dim()
        );
        std::process::exit(1);
    }
    Ok(())
}
