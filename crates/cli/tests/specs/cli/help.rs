//! CLI help output specs

use crate::prelude::*;

#[test]
fn rl_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn rl_launch_help_shows_usage() {
    cli()
        .args(&["launch", "--help"])
        .passes()
        .stdout_has("Usage: rl launch");
}
