// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal result of a launch attempt and the exit status it maps to.
//!
//! | Condition                         | Exit status |
//! |-----------------------------------|-------------|
//! | remote process exited with `C`    | `C`         |
//! | remote process stopped            | `-1`        |
//! | launch or connect error           | `254`       |
//! | device locked                     | `254`       |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Substring of a remote error that marks a locked device.
pub const DEVICE_LOCKED_MARKER: &str = ": Locked";

/// Exit status for a locked device.
pub const DEVICE_LOCKED_EXIT: i32 = 254;

/// Exit status for any launch failure other than a locked device.
pub const LAUNCH_ERROR_EXIT: i32 = 254;

/// Exit status for a process left stopped instead of exiting.
pub const STOPPED_EXIT: i32 = -1;

/// Raw state the remote reported for the launched process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteState {
    Exited,
    Stopped,
    Crashed,
    #[default]
    Unknown,
}

impl fmt::Display for RemoteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteState::Exited => write!(f, "exited"),
            RemoteState::Stopped => write!(f, "stopped"),
            RemoteState::Crashed => write!(f, "crashed"),
            RemoteState::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classified failure of a launch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Failure {
    /// The device refused the launch because it is locked.
    DeviceLocked,
    /// The launch or connection failed, or the state was not recognised.
    LaunchError,
    /// The process stopped at a breakpoint or signal instead of exiting.
    AbnormalStop,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::DeviceLocked => write!(f, "device locked"),
            Failure::LaunchError => write!(f, "launch error"),
            Failure::AbnormalStop => write!(f, "abnormal stop"),
        }
    }
}

/// Immutable terminal result of one launch attempt.
///
/// `exit_code` is present exactly when `state` is [`RemoteState::Exited`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessOutcome {
    state: RemoteState,
    exit_code: Option<i32>,
    failure: Option<Failure>,
    diagnostic: String,
    /// Lines the launched process printed, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    output: Vec<String>,
}

impl ProcessOutcome {
    /// The remote process exited on its own with `code`.
    pub fn exited(code: i32) -> Self {
        Self {
            state: RemoteState::Exited,
            exit_code: Some(code),
            failure: None,
            diagnostic: format!("process exited with status {code}"),
            output: Vec::new(),
        }
    }

    /// A classified failure.
    ///
    /// `exit_code` is kept only when `state` is `Exited`; an `Exited` state
    /// without a code is recorded as `Unknown`.
    pub fn failed(
        state: RemoteState,
        exit_code: Option<i32>,
        failure: Failure,
        diagnostic: impl Into<String>,
    ) -> Self {
        let (state, exit_code) = match (state, exit_code) {
            (RemoteState::Exited, Some(code)) => (RemoteState::Exited, Some(code)),
            (RemoteState::Exited, None) => (RemoteState::Unknown, None),
            (other, _) => (other, None),
        };
        Self {
            state,
            exit_code,
            failure: Some(failure),
            diagnostic: diagnostic.into(),
            output: Vec::new(),
        }
    }

    /// Append a line of raw remote text to the diagnostic.
    pub fn with_detail(mut self, detail: &str) -> Self {
        self.diagnostic.push('\n');
        self.diagnostic.push_str(detail);
        self
    }

    /// Attach what the launched process printed.
    pub fn with_output(mut self, output: Vec<String>) -> Self {
        self.output = output;
        self
    }

    pub fn state(&self) -> RemoteState {
        self.state
    }

    /// Exit code reported by the remote, present only for `Exited`.
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    pub fn failure(&self) -> Option<Failure> {
        self.failure
    }

    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// True when the process exited and nothing was classified as a failure.
    /// A non-zero exit code still counts: the launch itself worked.
    pub fn is_clean_exit(&self) -> bool {
        self.failure.is_none() && self.exit_code.is_some()
    }

    /// Exit status the orchestrating process should terminate with.
    pub fn process_exit_code(&self) -> i32 {
        match (self.failure, self.exit_code) {
            (Some(Failure::DeviceLocked), _) => DEVICE_LOCKED_EXIT,
            (Some(Failure::AbnormalStop), _) => STOPPED_EXIT,
            (Some(Failure::LaunchError), _) => LAUNCH_ERROR_EXIT,
            (None, Some(code)) => code,
            (None, None) => LAUNCH_ERROR_EXIT,
        }
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.diagnostic)
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
