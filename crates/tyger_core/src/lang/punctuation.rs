//! Punctuation vocabulary.
//!
//! This module defines the non-operator punctuation tokens: delimiters and separators.
//!
//! ## Notes
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use tyger_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::token_name(PunctuationId::Dot), "PERIOD");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,` and `;`.
    Separator,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Separators
    Semicolon,
    Colon,
    Comma,
    Dot,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    /// Upper-case token kind name used in token dumps.
    pub token_name: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation, ordered by [`PunctuationId`] discriminant.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LParen, "(", "LPAREN", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", "RPAREN", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", "LBRACE", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", "RBRACE", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", "LBRACKET", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", "RBRACKET", PunctuationCategory::Delimiter),
    info(PunctuationId::Semicolon, ";", "SEMICOLON", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", "COLON", PunctuationCategory::Separator),
    info(PunctuationId::Comma, ",", "COMMA", PunctuationCategory::Separator),
    info(PunctuationId::Dot, ".", "PERIOD", PunctuationCategory::Separator),
];

/// Full metadata for `id`.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Upper-case token kind name (for example `LPAREN`).
pub fn token_name(id: PunctuationId) -> &'static str {
    info_for(id).token_name
}

/// Category.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    token_name: &'static str,
    category: PunctuationCategory,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        token_name,
        category,
    }
}
