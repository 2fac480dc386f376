//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running `rl launch` against a fake debugger.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::net::TcpListener;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// Short timeouts keep failing specs fast.
const RL_CONNECT_TIMEOUT_MS: &str = "1000";
const RL_LAUNCH_TIMEOUT_MS: &str = "5000";

/// Exit status of the `rl` process for a stopped remote process (-1).
pub const STOPPED_STATUS: i32 = 255;

/// Returns a Command configured to run the rl binary
pub fn rl_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rl"))
}

/// Create a CLI builder for rl commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: vec![
                ("RL_CONNECT_TIMEOUT_MS".into(), RL_CONNECT_TIMEOUT_MS.into()),
                ("RL_LAUNCH_TIMEOUT_MS".into(), RL_LAUNCH_TIMEOUT_MS.into()),
            ],
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = rl_cmd();
        cmd.args(&self.args);

        // Parent logging config would pollute stderr assertions.
        cmd.env_remove("RL_LOG");
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("RL_LOG_FILE");

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run and return the result without asserting on the status
    pub fn runs(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        RunAssert { output }
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let run = self.runs();
        assert!(
            run.output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            run.output.status.code(),
            run.stdout(),
            run.stderr()
        );
        run
    }

    /// Run and expect a specific exit code
    pub fn exits_with(self, code: i32) -> RunAssert {
        let run = self.runs();
        assert_eq!(
            run.output.status.code(),
            Some(code),
            "unexpected exit code\nstdout: {}\nstderr: {}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stderr equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stderr_eq(self, expected: &str) -> Self {
        let stderr = self.stderr();
        similar_asserts::assert_eq!(stderr, expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout should be JSON")
    }
}

// =============================================================================
// Device
// =============================================================================

/// A fake device: a listening endpoint, a fake `lldb`, and a local binary.
pub struct Device {
    dir: tempfile::TempDir,
    listener: TcpListener,
}

impl Device {
    /// A reachable device whose debugger prints `transcript` and exits 0.
    pub fn reporting(transcript: &str) -> Self {
        Self::with_lldb(&format!("cat <<'TRANSCRIPT'\n{transcript}\nTRANSCRIPT"))
    }

    /// A reachable device whose debugger runs `body` as a shell script.
    ///
    /// The script sees lldb's arguments; `$3` is the command script path.
    pub fn with_lldb(body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let lldb = dir.path().join("lldb");
        std::fs::write(&lldb, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&lldb, std::fs::Permissions::from_mode(0o755)).unwrap();
        std::fs::write(dir.path().join("Dinghy"), "").unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        Self { dir, listener }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn endpoint(&self) -> String {
        format!(
            "connect://127.0.0.1:{}",
            self.listener.local_addr().unwrap().port()
        )
    }

    /// Local binary for `--binary`
    pub fn binary(&self) -> PathBuf {
        self.dir.path().join("Dinghy")
    }

    /// `rl launch --endpoint <device> --binary <local>` with the fake lldb
    pub fn launch(&self) -> CliBuilder {
        let endpoint = self.endpoint();
        let binary = self.binary();
        cli()
            .env("RL_LLDB", self.dir.path().join("lldb"))
            .args(&[
                "launch",
                "--endpoint",
                &endpoint,
                "--binary",
                &binary.to_string_lossy(),
            ])
    }
}

/// An endpoint nothing listens on.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("connect://127.0.0.1:{port}")
}
