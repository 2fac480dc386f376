// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering the lldb command script for one launch.

use crate::remote::LaunchRequest;
use rl_shell::{join, quote};

/// lldb command run on a stopped target in batch mode.
pub(super) const ON_STOP_COMMAND: &str = "thread backtrace";

/// Render the command script for `request`.
///
/// The host environment is not inherited by the launched process; only the
/// entries of the launch spec are passed, in name order.
pub(super) fn render(request: &LaunchRequest) -> String {
    let mut lines = vec![
        "settings set target.inherit-env false".to_string(),
        format!("platform select {}", quote(&request.platform)),
    ];

    match (&request.binary, &request.remote_path) {
        (Some(binary), remote) => {
            lines.push(format!(
                "target create {}",
                quote(&binary.to_string_lossy())
            ));
            if let Some(remote) = remote {
                lines.push(format!(
                    "script lldb.target.module[0].SetPlatformFileSpec(lldb.SBFileSpec({}))",
                    python_str(remote)
                ));
            }
        }
        // No local copy: the platform fetches the module from the device.
        (None, Some(remote)) => {
            lines.push(format!("target create --remote-file {}", quote(remote)));
        }
        (None, None) => {}
    }

    // `process connect` blocks in synchronous mode.
    lines.push("script old_async = lldb.debugger.GetAsync()".to_string());
    lines.push("script lldb.debugger.SetAsync(True)".to_string());
    lines.push(format!("process connect {}", quote(&request.endpoint)));
    lines.push("script lldb.debugger.SetAsync(old_async)".to_string());

    let spec = &request.spec;
    let mut launch = String::from("process launch");
    if let Some(cwd) = spec.cwd() {
        launch.push_str(" -w ");
        launch.push_str(&quote(cwd));
    }
    for (name, value) in spec.env() {
        launch.push_str(" -E ");
        launch.push_str(&quote(&format!("{name}={value}")));
    }
    launch.push_str(" -- ");
    launch.push_str(&join(spec.args()));
    lines.push(launch);

    let mut script = lines.join("\n");
    script.push('\n');
    script
}

/// A single-quoted Python string literal.
fn python_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
