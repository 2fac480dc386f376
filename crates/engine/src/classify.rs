// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turning what the remote reported into a [`ProcessOutcome`].

use rl_core::{Failure, ProcessOutcome, RemoteReport, RemoteState, DEVICE_LOCKED_MARKER};
use std::fmt::Write;

/// Classify a launch report. First match wins:
///
/// 1. an error mentioning a locked device
/// 2. an exit with a code
/// 3. a stop at a breakpoint or signal
/// 4. any other error
/// 5. anything else
pub fn classify(report: &RemoteReport) -> ProcessOutcome {
    classify_state(report).with_output(report.output().to_vec())
}

fn classify_state(report: &RemoteReport) -> ProcessOutcome {
    let state = report.state();
    let error = report.error();

    // The locked marker is matched verbatim; the remote gives no structured code.
    if let Some(error) = error.filter(|e| e.contains(DEVICE_LOCKED_MARKER)) {
        return ProcessOutcome::failed(
            state,
            report.exit_code(),
            Failure::DeviceLocked,
            format!("device locked: {error}"),
        );
    }

    // Exits and stops keep any remote error text after their own summary.
    let with_error = |outcome: ProcessOutcome| match error {
        Some(error) => outcome.with_detail(error),
        None => outcome,
    };

    match (state, report.exit_code(), error) {
        (RemoteState::Exited, Some(code), _) => with_error(ProcessOutcome::exited(code)),
        (RemoteState::Stopped, _, _) => with_error(ProcessOutcome::failed(
            state,
            None,
            Failure::AbnormalStop,
            stop_diagnostic(report),
        )),
        (_, _, Some(error)) => ProcessOutcome::failed(
            state,
            None,
            Failure::LaunchError,
            format!("launch failed: {error}"),
        ),
        _ => ProcessOutcome::failed(
            state,
            None,
            Failure::LaunchError,
            format!("launch failed: process left in state {state}"),
        ),
    }
}

fn stop_diagnostic(report: &RemoteReport) -> String {
    let mut out = String::from("process stopped without exiting");
    if let Some(thread) = report.thread() {
        let _ = write!(out, "\n{thread}");
    }
    for frame in report.frames() {
        let _ = write!(out, "\n  {frame}");
    }
    out
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
