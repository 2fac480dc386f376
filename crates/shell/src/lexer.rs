// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! POSIX word splitter.
//!
//! Quoting rules:
//! - unquoted space, tab and newline separate words
//! - `'...'` is taken literally
//! - `"..."` is literal except that `\` escapes `$`, `` ` ``, `"`, `\` and
//!   newline; any other backslash is kept
//! - an unquoted `\c` yields `c`
//! - backslash-newline is a line continuation and disappears
//!
//! Adjacent quoted and unquoted pieces join into one word (`a'b c'd` is the
//! single word `ab cd`).

use crate::error::LexerError;
use crate::span::Span;
use std::iter::Peekable;
use std::str::CharIndices;

/// One word of a split command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word with quotes and escapes removed.
    pub text: String,
    /// Location of the word in the original input, quotes included.
    pub span: Span,
    /// True when any part of the word was quoted or escaped.
    pub quoted: bool,
}

impl Word {
    /// True for an unquoted word spelled exactly `literal`.
    ///
    /// Lets callers recognise markers such as `--` while treating `'--'` or
    /// `\--` as plain arguments.
    pub fn is_bare(&self, literal: &str) -> bool {
        !self.quoted && self.text == literal
    }
}

/// Streaming word lexer over a command string.
///
/// Yields words until the input is exhausted or the first error; after an
/// error the iterator is fused.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            failed: false,
        }
    }

    fn position(&mut self) -> usize {
        self.chars
            .peek()
            .map(|&(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn skip_blanks(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if !is_blank(ch) {
                break;
            }
            self.chars.next();
        }
    }

    fn lex_word(&mut self) -> Result<Option<Word>, LexerError> {
        loop {
            self.skip_blanks();
            let start = match self.chars.peek() {
                Some(&(i, _)) => i,
                None => return Ok(None),
            };

            let mut text = String::new();
            let mut quoted = false;

            while let Some(&(pos, ch)) = self.chars.peek() {
                match ch {
                    c if is_blank(c) => break,
                    '\'' => {
                        self.chars.next();
                        quoted = true;
                        self.single_quoted(pos, &mut text)?;
                    }
                    '"' => {
                        self.chars.next();
                        quoted = true;
                        self.double_quoted(pos, &mut text)?;
                    }
                    '\\' => {
                        self.chars.next();
                        match self.chars.next() {
                            None => {
                                return Err(LexerError::TrailingBackslash {
                                    span: Span::new(pos, pos + 1),
                                })
                            }
                            Some((_, '\n')) => {}
                            Some((_, escaped)) => {
                                quoted = true;
                                text.push(escaped);
                            }
                        }
                    }
                    other => {
                        self.chars.next();
                        text.push(other);
                    }
                }
            }

            // A lone line continuation is not a word.
            if text.is_empty() && !quoted {
                continue;
            }

            let end = self.position();
            return Ok(Some(Word {
                text,
                span: Span::new(start, end),
                quoted,
            }));
        }
    }

    fn single_quoted(&mut self, open: usize, text: &mut String) -> Result<(), LexerError> {
        for (_, ch) in self.chars.by_ref() {
            if ch == '\'' {
                return Ok(());
            }
            text.push(ch);
        }
        Err(LexerError::UnterminatedSingleQuote {
            span: Span::new(open, self.input.len()),
        })
    }

    fn double_quoted(&mut self, open: usize, text: &mut String) -> Result<(), LexerError> {
        while let Some((_, ch)) = self.chars.next() {
            match ch {
                '"' => return Ok(()),
                '\\' => match self.chars.peek() {
                    Some(&(_, '\n')) => {
                        self.chars.next();
                    }
                    Some(&(_, next @ ('$' | '`' | '"' | '\\'))) => {
                        self.chars.next();
                        text.push(next);
                    }
                    _ => text.push('\\'),
                },
                other => text.push(other),
            }
        }
        Err(LexerError::UnterminatedDoubleQuote {
            span: Span::new(open, self.input.len()),
        })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Word, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.lex_word().transpose();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

/// Split `input` into words, keeping spans and quoting information.
pub fn split(input: &str) -> Result<Vec<Word>, LexerError> {
    Lexer::new(input).collect()
}

/// Split `input` into plain strings.
pub fn split_words(input: &str) -> Result<Vec<String>, LexerError> {
    Lexer::new(input).map(|w| w.map(|w| w.text)).collect()
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
