// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! POSIX word splitting and quoting for launch command lines.
//!
//! The lexer follows the quoting rules of a POSIX shell tokenizer and
//! nothing more: there is no variable, glob, tilde, or command expansion,
//! and `#` is an ordinary character.
//!
//! ```ignore
//! use rl_shell::{split, join};
//!
//! let args = split("-v --flag 'a b'")?;
//! assert_eq!(args.len(), 3);
//! assert_eq!(join(["a b", "c"]), "'a b' c");
//! # Ok::<(), rl_shell::LexerError>(())
//! ```

mod error;
mod lexer;
mod quote;
pub mod span;

pub use error::LexerError;
pub use lexer::{split, split_words, Lexer, Word};
pub use quote::{join, quote};
pub use span::{diagnostic_context, Span};
