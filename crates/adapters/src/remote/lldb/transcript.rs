// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading a launch result back out of an lldb batch transcript.
//!
//! A run that exits looks like:
//!
//! ```text
//! (lldb) process launch -- --flag
//! Process 34163 launched: '/var/.../Dinghy' (arm64)
//! running 3 tests
//! Process 34163 exited with status = 101 (0x00000065)
//! ```
//!
//! A run that stops prints the selected thread and, with the on-stop
//! backtrace, every frame:
//!
//! ```text
//! Process 34163 stopped
//! * thread #1, queue = 'com.apple.main-thread', stop reason = signal SIGABRT
//!   * frame #0: 0x00000001a0b1c2d4 libsystem_kernel.dylib`__pthread_kill + 8
//!     frame #1: 0x00000001a0b5e0c8 libsystem_pthread.dylib`pthread_kill + 268
//! ```

use regex::Regex;
use rl_core::RemoteReport;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static EXITED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Process \d+ exited with status = (-?\d+)").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static LAUNCHED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Process \d+ launched").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static STOPPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Process \d+ stopped").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static CRASHED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Process \d+ crashed|left in (?:lldb )?state: crashed")
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static THREAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\* thread #\d+").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\* )?frame #\d+:").expect("constant regex pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Seen {
    #[default]
    Nothing,
    Exited(i32),
    Stopped,
    Crashed,
}

#[derive(Debug, Default)]
struct Transcript {
    seen: Seen,
    running: bool,
    thread: Option<String>,
    frames: Vec<String>,
    errors: Vec<String>,
    output: Vec<String>,
}

impl Transcript {
    fn line(&mut self, raw: &str) {
        let line = raw.trim();

        if let Some(caps) = EXITED.captures(line) {
            if let Ok(code) = caps[1].parse::<i32>() {
                self.finish(Seen::Exited(code));
            }
        } else if STOPPED.is_match(line) {
            self.finish(Seen::Stopped);
        } else if CRASHED.is_match(line) {
            self.finish(Seen::Crashed);
        } else if self.running {
            // Everything between launch and the next state line is the process talking.
            self.output.push(raw.trim_end().to_string());
        } else if LAUNCHED.is_match(line) {
            self.running = true;
        } else if THREAD.is_match(line) {
            // A later thread listing (the backtrace) supersedes the stop summary.
            self.thread = Some(line.to_string());
            self.frames.clear();
        } else if FRAME.is_match(line) {
            if self.thread.is_some() {
                self.frames.push(line.trim_start_matches("* ").to_string());
            }
        } else if line.starts_with("error:") {
            self.errors.push(line.to_string());
        }
    }

    fn finish(&mut self, seen: Seen) {
        self.seen = seen;
        self.running = false;
    }

    fn into_report(self) -> RemoteReport {
        let report = match self.seen {
            Seen::Exited(code) => RemoteReport::exited(code),
            Seen::Stopped => RemoteReport::stopped(
                self.thread.unwrap_or_else(|| "(no selected thread)".to_string()),
                self.frames,
            ),
            Seen::Crashed => RemoteReport::crashed(),
            Seen::Nothing => RemoteReport::unknown(),
        };
        let report = report.with_output(self.output);

        if self.errors.is_empty() {
            report
        } else {
            report.with_error(self.errors.join("\n"))
        }
    }
}

/// Parse lldb's two streams into a report. The last process state line wins.
///
/// The debug server forwards the process's own stdout and stderr to lldb,
/// which prints both on its stdout between `Process N launched` and the next
/// state line. Those lines become the report's output and are never read as
/// lldb errors. Everything lldb writes to stderr is its own.
pub(super) fn parse(stdout: &str, stderr: &str) -> RemoteReport {
    let mut transcript = Transcript::default();
    for line in stdout.lines() {
        transcript.line(line);
    }
    transcript.running = false;
    for line in stderr.lines() {
        transcript.line(line);
    }
    transcript.into_report()
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;
