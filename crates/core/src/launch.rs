// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launch requests: parsing a raw launch instruction into a [`LaunchSpec`].
//!
//! Two input shapes are accepted:
//!
//! - `<args...>`: the whole string is the argument vector
//! - `<prefix...> -- <args...>`: only the words after the first unquoted
//!   `--` are arguments; the prefix is ignored
//!
//! Environment entries are never taken from the calling process. They must
//! be passed to [`LaunchSpecBuilder`] explicitly.

use rl_shell::{LexerError, Word};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors from building a launch spec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing left to launch once the command was split.
    #[error("empty command: no arguments to launch")]
    EmptyCommand,

    /// The command string has unbalanced quotes or a dangling escape.
    #[error("invalid quoting: {0}")]
    InvalidQuoting(#[from] LexerError),

    /// An environment entry with a missing or malformed name.
    #[error("invalid environment entry '{entry}': {reason}")]
    InvalidEnv { entry: String, reason: &'static str },
}

impl ParseError {
    /// Caret diagnostic for quoting errors, `None` for the rest.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        match self {
            ParseError::InvalidQuoting(e) => Some(e.diagnostic(input)),
            _ => None,
        }
    }
}

/// A validated, immutable launch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchSpec {
    target: Option<String>,
    args: Vec<String>,
    env: BTreeMap<String, String>,
    cwd: Option<String>,
}

impl LaunchSpec {
    /// Build from a raw instruction with no explicit target, environment or
    /// working directory.
    pub fn build(raw: &str) -> Result<Self, ParseError> {
        LaunchSpecBuilder::default().build(raw)
    }

    pub fn builder() -> LaunchSpecBuilder {
        LaunchSpecBuilder::default()
    }

    /// Explicit target path, if one was given.
    ///
    /// When absent the launch uses the binary context of the connection.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    pub fn cwd(&self) -> Option<&str> {
        self.cwd.as_deref()
    }
}

/// Collects the explicit parts of a launch before the raw command is parsed.
#[derive(Debug, Clone, Default)]
pub struct LaunchSpecBuilder {
    target: Option<String>,
    env: Vec<(String, String)>,
    cwd: Option<String>,
}

impl LaunchSpecBuilder {
    pub fn target(mut self, path: impl Into<String>) -> Self {
        self.target = Some(path.into()).filter(|p: &String| !p.is_empty());
        self
    }

    /// Add one environment entry. A later entry with the same name wins.
    pub fn env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((name.into(), value.into()));
        self
    }

    pub fn envs<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn cwd(mut self, dir: impl Into<String>) -> Self {
        self.cwd = Some(dir.into()).filter(|d: &String| !d.is_empty());
        self
    }

    /// Split `raw` and assemble the spec.
    pub fn build(self, raw: &str) -> Result<LaunchSpec, ParseError> {
        let words = rl_shell::split(raw)?;
        let args = launch_args(words);
        if args.is_empty() {
            return Err(ParseError::EmptyCommand);
        }

        let mut env = BTreeMap::new();
        for (name, value) in self.env {
            if !is_valid_env_name(&name) {
                return Err(ParseError::InvalidEnv {
                    entry: format!("{name}={value}"),
                    reason: "name must match [A-Za-z_][A-Za-z0-9_]*",
                });
            }
            env.insert(name, value);
        }

        Ok(LaunchSpec {
            target: self.target,
            args,
            env,
            cwd: self.cwd,
        })
    }
}

/// Words after the first bare `--`, or every word when there is none.
fn launch_args(words: Vec<Word>) -> Vec<String> {
    let start = words
        .iter()
        .position(|w| w.is_bare("--"))
        .map_or(0, |i| i + 1);
    words.into_iter().skip(start).map(|w| w.text).collect()
}

/// Check if a string is a valid environment variable name.
pub fn is_valid_env_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a `NAME=VALUE` assignment. The value may be empty or contain `=`.
pub fn parse_env_assignment(entry: &str) -> Result<(String, String), ParseError> {
    let Some((name, value)) = entry.split_once('=') else {
        return Err(ParseError::InvalidEnv {
            entry: entry.to_string(),
            reason: "expected NAME=VALUE",
        });
    };
    if !is_valid_env_name(name) {
        return Err(ParseError::InvalidEnv {
            entry: entry.to_string(),
            reason: "name must match [A-Za-z_][A-Za-z0-9_]*",
        });
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
