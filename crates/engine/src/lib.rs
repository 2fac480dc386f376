// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Remote launch engine: connections, launches and outcome classification

mod classify;
mod connection;
mod monitor;

pub use classify::classify;
pub use connection::{Connection, ConnectionManager, DEFAULT_PLATFORM};
pub use monitor::ProcessMonitor;
