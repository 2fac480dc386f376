// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use rl_core::ProcessOutcome;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// JSON shape of a finished launch.
#[derive(Serialize)]
struct OutcomeJson<'a> {
    endpoint: &'a str,
    #[serde(flatten)]
    outcome: &'a ProcessOutcome,
    process_exit_code: i32,
}

fn outcome_json(endpoint: &str, outcome: &ProcessOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&OutcomeJson {
        endpoint,
        outcome,
        process_exit_code: outcome.process_exit_code(),
    })
}

/// Print a launch outcome.
///
/// The diagnostic always goes to stderr. Text output echoes what the process
/// printed to stdout; JSON output carries it in the serialized outcome instead.
pub fn print_outcome(
    endpoint: &str,
    outcome: &ProcessOutcome,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for line in outcome.output() {
                println!("{line}");
            }
            eprintln!("{}", outcome);
        }
        OutputFormat::Json => {
            eprintln!("{}", outcome);
            println!("{}", outcome_json(endpoint, outcome)?);
        }
    }
    Ok(())
}
