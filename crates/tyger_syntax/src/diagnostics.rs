//! Diagnostics produced by the scanner and parser.
//!
//! Every problem is reported as a [`CompileError`] carrying a message and the [`Location`] of the offending token.
//! Errors implement [`miette::Diagnostic`], so a host can attach the source text and render labelled snippets.
//!
//! ## Notes
//! - No error aborts parsing. The statement that failed becomes an illegal statement and parsing resumes at the
//!   next one.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceSpan};
use thiserror::Error;

use crate::lexer::{Location, Token, TokenKind};

/// Category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The scanner produced an `ILLEGAL` token (unknown byte, lone `&`/`|`, number with several dots).
    IllegalToken,
    /// A string literal ran to end of input.
    UnclosedString,
    /// A `var` statement without its identifier or `=`.
    MalformedStatement,
    /// A structurally required token (`)`, `{`, `}`, parameter name) is absent.
    MissingToken,
    /// A token with no expression meaning appeared where an expression must start.
    ExpectedExpression,
    /// A numeric literal that does not fit its type.
    InvalidLiteral,
    /// Expressions nested deeper than the parser accepts.
    NestingTooDeep,
}

impl ErrorKind {
    /// Stable diagnostic code (for example `tyger::missing_token`).
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::IllegalToken => "tyger::illegal_token",
            ErrorKind::UnclosedString => "tyger::unclosed_string",
            ErrorKind::MalformedStatement => "tyger::malformed_statement",
            ErrorKind::MissingToken => "tyger::missing_token",
            ErrorKind::ExpectedExpression => "tyger::expected_expression",
            ErrorKind::InvalidLiteral => "tyger::invalid_literal",
            ErrorKind::NestingTooDeep => "tyger::nesting_too_deep",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::IllegalToken => "illegal token",
            ErrorKind::UnclosedString => "unterminated string",
            ErrorKind::MalformedStatement => "malformed statement",
            ErrorKind::MissingToken => "missing token",
            ErrorKind::ExpectedExpression => "expected expression",
            ErrorKind::InvalidLiteral => "invalid literal",
            ErrorKind::NestingTooDeep => "nesting too deep",
        };
        f.write_str(text)
    }
}

/// A located diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Location,
    /// Length in bytes of the highlighted source range.
    pub len: usize,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, location: Location, len: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            location,
            len,
            hints: Vec::new(),
        }
    }

    /// Build a diagnostic that highlights `token`.
    pub fn at(kind: ErrorKind, message: impl Into<String>, token: &Token<'_>) -> Self {
        Self::new(kind, message, token.location, token.lexeme.len())
    }

    /// Describe an `ILLEGAL` token by what the scanner rejected.
    pub fn illegal_token(token: &Token<'_>) -> Self {
        debug_assert_eq!(token.kind, TokenKind::Illegal);
        let lexeme = token.lexeme;
        if lexeme.starts_with('"') {
            return Self::at(ErrorKind::UnclosedString, "unterminated string literal", token)
                .with_hint("close the string with `\"`");
        }
        match lexeme {
            "&" => Self::at(ErrorKind::IllegalToken, "unexpected `&`", token).with_hint("logical and is spelled `&&`"),
            "|" => Self::at(ErrorKind::IllegalToken, "unexpected `|`", token).with_hint("logical or is spelled `||`"),
            _ if lexeme.starts_with(|c: char| c.is_ascii_digit()) => Self::at(
                ErrorKind::IllegalToken,
                format!("malformed number `{lexeme}`"),
                token,
            )
            .with_hint("a number may contain at most one `.`"),
            _ => Self::at(ErrorKind::IllegalToken, format!("unexpected character `{lexeme}`"), token),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Source range highlighted by this diagnostic.
    pub fn span(&self) -> SourceSpan {
        SourceSpan::new(self.location.offset.into(), self.len)
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.kind.to_string()), self.span());
        Some(Box::new(std::iter::once(label)))
    }
}
