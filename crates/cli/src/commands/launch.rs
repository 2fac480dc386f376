// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rl launch --endpoint <URL> <command>` - Launch a process on a remote target

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use rl_adapters::{LldbAdapter, RemoteAdapter, TracedRemote};
use rl_core::{
    parse_env_assignment, Failure, LaunchSpec, ProcessOutcome, RemoteState, LAUNCH_ERROR_EXIT,
};
use rl_engine::{ConnectionManager, ProcessMonitor, DEFAULT_PLATFORM};

use crate::duration::parse_duration;
use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

#[derive(Args, Debug)]
pub struct LaunchArgs {
    /// Debug server endpoint (e.g., "connect://127.0.0.1:62078")
    #[arg(long)]
    pub endpoint: String,

    /// Local copy of the binary to launch
    #[arg(long)]
    pub binary: Option<PathBuf>,

    /// Path of the binary on the device (requires --binary)
    #[arg(long = "remote-path")]
    pub remote_path: Option<String>,

    /// Debugger platform to select
    #[arg(long, default_value = DEFAULT_PLATFORM)]
    pub platform: String,

    /// Environment entry for the launched process (repeatable)
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Working directory on the device
    #[arg(long)]
    pub cwd: Option<String>,

    /// Tear down and give up after this long (e.g., "30s", "5m", "500ms")
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Launch instruction: "<args...>" or "<prefix...> -- <args...>"
    #[arg(
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub command: Vec<String>,
}

pub async fn handle(args: LaunchArgs, format: OutputFormat) -> Result<()> {
    let endpoint = args.endpoint.clone();
    let remote = TracedRemote::new(LldbAdapter::new());

    let outcome = launch(args, remote).await?;
    output::print_outcome(&endpoint, &outcome, format)?;

    match outcome.process_exit_code() {
        0 => Ok(()),
        // Diagnostic already printed
        code => Err(ExitError::new(code, String::new()).into()),
    }
}

/// Connect, launch, wait and tear down.
///
/// Errors before the launch (bad input, connect failures) are returned with
/// the launch-error exit status. Everything after is an outcome.
async fn launch<R: RemoteAdapter>(
    args: LaunchArgs,
    remote: R,
) -> Result<ProcessOutcome, ExitError> {
    let spec = build_spec(&args)?;

    let manager = ConnectionManager::new(remote.clone()).with_platform(args.platform);
    let mut conn = manager
        .connect(&args.endpoint)
        .await
        .map_err(|e| ExitError::new(LAUNCH_ERROR_EXIT, e.to_string()))?;

    if let Some(binary) = args.binary {
        manager.create_target(&mut conn, binary);
    }
    if let Some(path) = args.remote_path {
        if let Err(e) = manager.set_remote_path(&mut conn, path) {
            manager.disconnect(&mut conn).await;
            return Err(ExitError::new(LAUNCH_ERROR_EXIT, e.to_string()));
        }
    }

    let monitor = ProcessMonitor::new(remote);
    let result = match args.timeout {
        Some(limit) => tokio::time::timeout(limit, monitor.launch_and_wait(&conn, &spec))
            .await
            .map_err(|_| limit),
        None => Ok(monitor.launch_and_wait(&conn, &spec).await),
    };

    // Dropping a timed-out launch cancels it; the connection is free again.
    manager.disconnect(&mut conn).await;

    match result {
        Ok(Ok(outcome)) => Ok(outcome),
        Ok(Err(e)) => Err(ExitError::new(LAUNCH_ERROR_EXIT, e.to_string())),
        Err(limit) => {
            tracing::warn!(
                endpoint = %args.endpoint,
                timeout_ms = limit.as_millis() as u64,
                "launch timed out"
            );
            Ok(ProcessOutcome::failed(
                RemoteState::Unknown,
                None,
                Failure::LaunchError,
                format!("launch failed: timed out after {limit:?}"),
            ))
        }
    }
}

/// Validate the environment entries and split the command.
fn build_spec(args: &LaunchArgs) -> Result<LaunchSpec, ExitError> {
    let to_exit = |msg: String| ExitError::new(LAUNCH_ERROR_EXIT, msg);

    let env = args
        .env
        .iter()
        .map(|entry| parse_env_assignment(entry))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_exit(e.to_string()))?;

    let mut builder = LaunchSpec::builder().envs(env);
    if let Some(cwd) = &args.cwd {
        builder = builder.cwd(cwd.as_str());
    }

    // Separate argv words were already split by the caller's shell
    let raw = match args.command.as_slice() {
        [single] => single.clone(),
        words => rl_shell::join(words),
    };
    builder
        .build(&raw)
        .map_err(|e| to_exit(e.diagnostic(&raw).unwrap_or_else(|| e.to_string())))
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
