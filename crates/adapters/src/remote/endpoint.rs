// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Debug server endpoint URLs.

use super::RemoteError;
use std::fmt;

/// A parsed `connect://host:port` endpoint.
///
/// `tcp://` is accepted as an alias. IPv6 hosts keep their brackets
/// (`connect://[::1]:1234`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    pub fn parse(url: &str) -> Result<Self, RemoteError> {
        let (scheme, rest) = url
            .split_once("://")
            .ok_or_else(|| RemoteError::Protocol(format!("missing scheme in '{url}'")))?;
        if !matches!(scheme, "connect" | "tcp") {
            return Err(RemoteError::Protocol(format!(
                "unsupported scheme '{scheme}' in '{url}'"
            )));
        }

        let authority = rest.trim_end_matches('/');
        let (host, port) = authority
            .rsplit_once(':')
            .ok_or_else(|| RemoteError::Protocol(format!("missing port in '{url}'")))?;
        if host.is_empty() || host == "[]" {
            return Err(RemoteError::Protocol(format!("missing host in '{url}'")));
        }
        let port = port
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| RemoteError::Protocol(format!("invalid port '{port}' in '{url}'")))?;

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port`, as accepted by socket address resolution.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connect://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod tests;
