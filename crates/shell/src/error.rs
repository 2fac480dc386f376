// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error types.

use crate::span::{diagnostic_context, Span};
use thiserror::Error;

/// Quoting errors found while splitting a command string.
///
/// Each variant carries the span of the construct that could not be closed,
/// so callers can point at it with [`LexerError::diagnostic`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// A `'` with no matching close quote.
    #[error("unterminated single quote at position {}", span.start)]
    UnterminatedSingleQuote { span: Span },

    /// A `"` with no matching close quote.
    #[error("unterminated double quote at position {}", span.start)]
    UnterminatedDoubleQuote { span: Span },

    /// A `\` as the very last character, escaping nothing.
    #[error("trailing backslash at position {}", span.start)]
    TrailingBackslash { span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnterminatedSingleQuote { span }
            | LexerError::UnterminatedDoubleQuote { span }
            | LexerError::TrailingBackslash { span } => *span,
        }
    }

    /// Render this error against the input it came from.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}
