//! Define the reserved keyword vocabulary.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Var` is an identifier, `var` is a keyword.
//! - `true`, `false` and `nil` are literal keywords; `println` names the builtin print function.
//!
//! ## Examples
//! ```rust
//! use tyger_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("return"), Some(KeywordId::Return));
//! assert_eq!(keywords::token_name(KeywordId::Return), "RETURN");
//! assert_eq!(keywords::from_str("Return"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Var,
    If,
    Else,
    Func,
    Return,
    True,
    False,
    Nil,
    Println,
}

/// Broad grouping used by diagnostics and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Introduces a declaration (`var`, `func`).
    Declaration,
    /// Steers control flow (`if`, `else`, `return`).
    ControlFlow,
    /// Spells a literal value (`true`, `false`, `nil`).
    Literal,
    /// Names a builtin function (`println`).
    Builtin,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    /// Upper-case token kind name used in token dumps.
    pub token_name: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords, ordered by [`KeywordId`] discriminant.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Var, "var", "VAR", KeywordCategory::Declaration),
    info(KeywordId::If, "if", "IF", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", "ELSE", KeywordCategory::ControlFlow),
    info(KeywordId::Func, "func", "FUNC", KeywordCategory::Declaration),
    info(KeywordId::Return, "return", "RETURN", KeywordCategory::ControlFlow),
    info(KeywordId::True, "true", "TRUE", KeywordCategory::Literal),
    info(KeywordId::False, "false", "FALSE", KeywordCategory::Literal),
    info(KeywordId::Nil, "nil", "NIL", KeywordCategory::Literal),
    info(KeywordId::Println, "println", "PRINTLN", KeywordCategory::Builtin),
];

/// Full metadata for `id`.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Upper-case token kind name (for example `VAR`).
pub fn token_name(id: KeywordId) -> &'static str {
    info_for(id).token_name
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a reserved word.
/// - `None` otherwise (the scanner then treats `s` as an identifier).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    token_name: &'static str,
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        token_name,
        category,
    }
}
