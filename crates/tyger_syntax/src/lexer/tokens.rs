//! Token types for the Tyger scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for delimiters and separators
//!
//! ## Notes
//! - Tokens never copy source text: the lexeme is a slice of the scanned source.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use tyger_core::lang::keywords::{self, KeywordId};
use tyger_core::lang::operators::{self, OperatorId};
use tyger_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// LOCATIONS
// ============================================================================

/// Position of the first byte of a lexeme.
///
/// `line` and `column` are 1-based; `offset` is a byte offset into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(0, 1, 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Int,
    Float,
    String,

    // ========== Special ==========
    Illegal,
    Eof,
}

impl TokenKind {
    /// Stable upper-case name of this kind (`PLUS`, `INT_LIT`, `EOF`, ...).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => keywords::token_name(id),
            TokenKind::Operator(id) => operators::token_name(id),
            TokenKind::Punctuation(id) => punctuation::token_name(id),
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT_LIT",
            TokenKind::Float => "FLOAT_LIT",
            TokenKind::String => "STRING_LIT",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        }
    }

    /// Display string for operator tokens (`+`, `==`); other kinds fall back to [`TokenKind::name`].
    pub fn display_str(self) -> &'static str {
        match self {
            TokenKind::Operator(id) => operators::as_str(id),
            other => other.name(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme with its source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub location: Location,
    pub lexeme: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, location: Location, lexeme: &'src str) -> Self {
        Self {
            kind,
            location,
            lexeme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_token_dump_vocabulary() {
        assert_eq!(TokenKind::Operator(OperatorId::Star).name(), "ASTERISK");
        assert_eq!(TokenKind::Operator(OperatorId::OrOr).name(), "LOR");
        assert_eq!(TokenKind::Punctuation(PunctuationId::Dot).name(), "PERIOD");
        assert_eq!(TokenKind::Keyword(KeywordId::Println).name(), "PRINTLN");
        assert_eq!(TokenKind::Int.name(), "INT_LIT");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn display_str_spells_operators() {
        assert_eq!(TokenKind::Operator(OperatorId::Plus).display_str(), "+");
        assert_eq!(TokenKind::Operator(OperatorId::EqEq).display_str(), "==");
        assert_eq!(TokenKind::Operator(OperatorId::NotEq).display_str(), "!=");
        assert_eq!(TokenKind::Ident.display_str(), "IDENT");
    }

    #[test]
    fn location_displays_line_and_column() {
        assert_eq!(Location::new(12, 3, 4).to_string(), "3:4");
        assert_eq!(Location::default(), Location::new(0, 1, 1));
    }
}
