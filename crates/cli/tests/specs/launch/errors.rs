//! Launch error specs
//!
//! Failures before the launch exit 254 without running the debugger.

use crate::prelude::*;

#[test]
fn unreachable_endpoint_exits_254() {
    let device = Device::with_lldb("touch \"$(dirname \"$0\")/ran\"");

    cli()
        .env("RL_LLDB", device.path().join("lldb"))
        .args(&["launch", "--endpoint", &closed_endpoint(), "run"])
        .exits_with(254)
        .stderr_has("Error: remote unreachable:");
    assert!(!device.path().join("ran").exists());
}

#[test]
fn malformed_endpoint_exits_254() {
    cli()
        .args(&["launch", "--endpoint", "127.0.0.1:62078", "run"])
        .exits_with(254)
        .stderr_has("Error: protocol negotiation failed: missing scheme");
}

#[test]
fn remote_path_without_binary_exits_254() {
    let device = Device::reporting("Process 1 exited with status = 0 (0x0)");

    cli()
        .env("RL_LLDB", device.path().join("lldb"))
        .args(&[
            "launch",
            "--endpoint",
            &device.endpoint(),
            "--remote-path",
            "/private/var/app/Dinghy",
            "run",
        ])
        .exits_with(254)
        .stderr_has("no target binary");
}

#[test]
fn empty_command_exits_254() {
    let device = Device::reporting("Process 1 exited with status = 0 (0x0)");

    device
        .launch()
        .args(&["prefix --"])
        .exits_with(254)
        .stderr_has("empty command");
}

#[test]
fn unterminated_quote_points_at_the_quote() {
    let device = Device::reporting("Process 1 exited with status = 0 (0x0)");

    device
        .launch()
        .args(&["run 'oops"])
        .exits_with(254)
        .stderr_has("^");
}

#[test]
fn malformed_env_entry_exits_254_before_launch() {
    let device = Device::with_lldb("touch \"$(dirname \"$0\")/ran\"");

    device
        .launch()
        .args(&["--env", "NOEQUALS", "run"])
        .exits_with(254)
        .stderr_has("invalid environment entry 'NOEQUALS'");
    assert!(!device.path().join("ran").exists());
}

#[test]
fn missing_local_binary_exits_254() {
    let device = Device::with_lldb("touch \"$(dirname \"$0\")/ran\"");

    cli()
        .env("RL_LLDB", device.path().join("lldb"))
        .args(&[
            "launch",
            "--endpoint",
            &device.endpoint(),
            "--binary",
            "/nonexistent/rl/Dinghy",
            "run",
        ])
        .exits_with(254)
        .stderr_eq("launch failed: local binary does not exist: /nonexistent/rl/Dinghy\n");
    assert!(!device.path().join("ran").exists());
}
