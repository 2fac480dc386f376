// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rl-core: data model for remote process launches

pub mod connection;
pub mod launch;
pub mod outcome;
pub mod report;

pub use connection::{ConnectError, ConnectionStatus};
pub use launch::{
    is_valid_env_name, parse_env_assignment, LaunchSpec, LaunchSpecBuilder, ParseError,
};
pub use outcome::{
    Failure, ProcessOutcome, RemoteState, DEVICE_LOCKED_EXIT, DEVICE_LOCKED_MARKER,
    LAUNCH_ERROR_EXIT, STOPPED_EXIT,
};
pub use report::RemoteReport;
