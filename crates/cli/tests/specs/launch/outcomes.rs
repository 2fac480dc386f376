//! Launch outcome specs
//!
//! The exit status of `rl` is the remote exit code, or a sentinel.

use crate::prelude::*;

#[test]
fn exited_zero_passes() {
    let device = Device::reporting(
        "Process 4242 launched: '/private/var/app/Dinghy' (arm64)\n\
         Process 4242 exited with status = 0 (0x00000000)",
    );

    device
        .launch()
        .args(&["--", "/bin/app -- --flag value"])
        .passes()
        .stderr_eq("process exited with status 0\n")
        .stdout_eq("");
}

#[test]
fn process_output_reaches_stdout_and_is_not_an_lldb_error() {
    let device = Device::reporting(
        "Process 1 launched: '/private/var/app/Dinghy' (arm64)\n\
         test result: ok. 3 passed\n\
         error: sqlite: Locked\n\
         Process 1 exited with status = 0 (0x00000000)",
    );

    device
        .launch()
        .args(&["run"])
        .passes()
        .stdout_eq("test result: ok. 3 passed\nerror: sqlite: Locked\n")
        .stderr_eq("process exited with status 0\n");
}

#[test]
fn json_output_carries_process_output() {
    let device = Device::reporting(
        "Process 1 launched: '/private/var/app/Dinghy' (arm64)\n\
         test result: ok. 3 passed\n\
         Process 1 exited with status = 0 (0x00000000)",
    );

    let run = device.launch().args(&["-o", "json", "run"]).passes();

    let value = run.json();
    assert_eq!(value["output"], serde_json::json!(["test result: ok. 3 passed"]));
    assert_eq!(value["process_exit_code"], 0);
}

#[test]
fn remote_exit_code_is_the_exit_status() {
    let device = Device::reporting("Process 1 exited with status = 101 (0x00000065)");

    device
        .launch()
        .args(&["run"])
        .exits_with(101)
        .stderr_eq("process exited with status 101\n");
}

#[test]
fn locked_device_exits_254() {
    let device = Device::with_lldb("echo 'error: Operation Failed: Locked' >&2\nexit 1");

    device
        .launch()
        .args(&["run"])
        .exits_with(254)
        .stderr_eq("device locked: error: Operation Failed: Locked\n");
}

#[test]
fn stopped_process_lists_frames_in_order() {
    let device = Device::reporting(
        "Process 7 stopped\n\
         * thread #1, queue = 'com.apple.main-thread', stop reason = signal SIGABRT\n\
         \x20 * frame #0: 0x1 libsystem_kernel.dylib`__pthread_kill + 8\n\
         \x20   frame #1: 0x2 Dinghy`main + 12",
    );

    device.launch().args(&["run"]).exits_with(STOPPED_STATUS).stderr_eq(
        "process stopped without exiting\n\
         * thread #1, queue = 'com.apple.main-thread', stop reason = signal SIGABRT\n\
         \x20 frame #0: 0x1 libsystem_kernel.dylib`__pthread_kill + 8\n\
         \x20 frame #1: 0x2 Dinghy`main + 12\n",
    );
}

#[test]
fn other_lldb_error_is_launch_error() {
    let device = Device::with_lldb("echo 'error: process launch failed: timed out' >&2\nexit 1");

    device
        .launch()
        .args(&["run"])
        .exits_with(254)
        .stderr_eq("launch failed: error: process launch failed: timed out\n");
}

#[test]
fn unrecognised_transcript_is_launch_error() {
    let device = Device::reporting("Process 3 resuming");

    device
        .launch()
        .args(&["run"])
        .exits_with(254)
        .stderr_eq("launch failed: process left in state unknown\n");
}

#[test]
fn json_output_describes_outcome() {
    let device = Device::reporting("Process 1 exited with status = 3 (0x00000003)");

    let run = device
        .launch()
        .args(&["-o", "json", "run"])
        .exits_with(3)
        .stderr_eq("process exited with status 3\n");

    let value = run.json();
    assert_eq!(value["endpoint"], device.endpoint().as_str());
    assert_eq!(value["state"], "exited");
    assert_eq!(value["exit_code"], 3);
    assert_eq!(value["failure"], serde_json::Value::Null);
    assert_eq!(value["process_exit_code"], 3);
}

#[test]
fn timeout_tears_down_and_exits_254() {
    let device = Device::with_lldb("sleep 5");

    device
        .launch()
        .args(&["--timeout", "200ms", "run"])
        .exits_with(254)
        .stderr_has("launch failed: timed out after 200ms");
}

#[test]
fn log_file_receives_traces_and_stderr_stays_clean() {
    let device = Device::reporting("Process 1 exited with status = 0 (0x00000000)");
    let log = device.path().join("rl.log");

    device
        .launch()
        .env("RL_LOG", "info")
        .env("RL_LOG_FILE", &log)
        .args(&["run"])
        .passes()
        .stderr_eq("process exited with status 0\n");

    let logs = std::fs::read_to_string(&log).unwrap();
    assert!(logs.contains("remote.launch"), "logs:\n{logs}");
    assert!(logs.contains("launch finished"), "logs:\n{logs}");
}

#[test]
fn log_file_without_name_falls_back_to_stderr_with_notice() {
    let device = Device::reporting("Process 1 exited with status = 0 (0x00000000)");

    device
        .launch()
        .env("RL_LOG_FILE", "/")
        .args(&["run"])
        .passes()
        .stderr_has("warning: RL_LOG_FILE has no file name (/), logging to stderr")
        .stderr_has("process exited with status 0");
}
