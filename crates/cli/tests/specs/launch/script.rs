//! Debugger script specs
//!
//! What `rl launch` asks the debugger to do.

use crate::prelude::*;

/// A device whose lldb copies its command script next to itself.
fn recording_device() -> Device {
    Device::with_lldb(
        "cp \"$3\" \"$(dirname \"$0\")/script.lldb\"\n\
         echo 'Process 1 exited with status = 0 (0x00000000)'",
    )
}

fn recorded_script(device: &Device) -> String {
    std::fs::read_to_string(device.path().join("script.lldb")).unwrap()
}

#[test]
fn script_connects_and_launches_with_arguments() {
    let device = recording_device();

    device
        .launch()
        .args(&[
            "--remote-path",
            "/private/var/app/Dinghy",
            "--",
            "ignored prefix -- --flag 'a b'",
        ])
        .passes();

    let script = recorded_script(&device);
    let expected = format!(
        "settings set target.inherit-env false\n\
         platform select remote-ios\n\
         target create {binary}\n\
         script lldb.target.module[0].SetPlatformFileSpec(lldb.SBFileSpec('/private/var/app/Dinghy'))\n\
         script old_async = lldb.debugger.GetAsync()\n\
         script lldb.debugger.SetAsync(True)\n\
         process connect {endpoint}\n\
         script lldb.debugger.SetAsync(old_async)\n\
         process launch -- --flag 'a b'\n",
        binary = device.binary().display(),
        endpoint = device.endpoint(),
    );
    similar_asserts::assert_eq!(script, expected);
}

#[test]
fn only_explicit_environment_is_forwarded() {
    let device = recording_device();

    device
        .launch()
        .env("RL_SPEC_SECRET", "leak")
        .args(&["--env", "RUST_BACKTRACE=1", "--cwd", "/tmp", "run"])
        .passes();

    let script = recorded_script(&device);
    assert!(
        script.contains("process launch -w /tmp -E RUST_BACKTRACE=1 -- run\n"),
        "script:\n{script}"
    );
    assert!(!script.contains("RL_SPEC_SECRET"), "script:\n{script}");
}

#[test]
fn platform_is_configurable() {
    let device = recording_device();

    device
        .launch()
        .args(&["--platform", "remote-android", "run"])
        .passes();

    assert!(recorded_script(&device).contains("platform select remote-android\n"));
}
