//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with fixity and category metadata. Binding power is a parser
//! concern and lives with the precedence table in `tyger_syntax`.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: `=` and `==` are distinct operators.
//! - `&&` and `||` are scanned as operators but carry no binding power in the current grammar.
//!
//! ## Examples
//! ```rust
//! use tyger_core::lang::operators::{self, Fixity, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert_eq!(operators::as_str(OperatorId::NotEq), "!=");
//! assert_eq!(operators::info_for(OperatorId::Minus).fixity, Fixity::PrefixOrInfix);
//! ```

/// Define where an operator may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
    /// Both unary and binary (`-`).
    PrefixOrInfix,
}

impl Fixity {
    pub fn allows_prefix(self) -> bool {
        matches!(self, Fixity::Prefix | Fixity::PrefixOrInfix)
    }

    pub fn allows_infix(self) -> bool {
        matches!(self, Fixity::Infix | Fixity::PrefixOrInfix)
    }
}

/// Broad grouping for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Comparison,
    Logical,
    Assignment,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Logical
    Bang,
    AndAnd,
    OrOr,

    // Assignment
    Assign,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    /// Upper-case token kind name used in token dumps.
    pub token_name: &'static str,
    pub fixity: Fixity,
    pub category: OperatorCategory,
}

/// Registry of all operators, ordered by [`OperatorId`] discriminant.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", "PLUS", Fixity::Infix, OperatorCategory::Arithmetic),
    op(
        OperatorId::Minus,
        "-",
        "MINUS",
        Fixity::PrefixOrInfix,
        OperatorCategory::Arithmetic,
    ),
    op(OperatorId::Star, "*", "ASTERISK", Fixity::Infix, OperatorCategory::Arithmetic),
    op(OperatorId::Slash, "/", "SLASH", Fixity::Infix, OperatorCategory::Arithmetic),
    // Comparison
    op(OperatorId::EqEq, "==", "EQ", Fixity::Infix, OperatorCategory::Comparison),
    op(OperatorId::NotEq, "!=", "NEQ", Fixity::Infix, OperatorCategory::Comparison),
    op(OperatorId::Lt, "<", "LT", Fixity::Infix, OperatorCategory::Comparison),
    op(OperatorId::Gt, ">", "GT", Fixity::Infix, OperatorCategory::Comparison),
    op(OperatorId::LtEq, "<=", "LTE", Fixity::Infix, OperatorCategory::Comparison),
    op(OperatorId::GtEq, ">=", "GTE", Fixity::Infix, OperatorCategory::Comparison),
    // Logical
    op(OperatorId::Bang, "!", "BANG", Fixity::Prefix, OperatorCategory::Logical),
    op(OperatorId::AndAnd, "&&", "LAND", Fixity::Infix, OperatorCategory::Logical),
    op(OperatorId::OrOr, "||", "LOR", Fixity::Infix, OperatorCategory::Logical),
    // Assignment
    op(OperatorId::Assign, "=", "ASSIGN", Fixity::Infix, OperatorCategory::Assignment),
];

/// Return the full metadata entry for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Source spelling (for example `==`).
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Upper-case token kind name (for example `EQ`).
pub fn token_name(id: OperatorId) -> &'static str {
    info_for(id).token_name
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise (including the lone `&` and `|`, which are not operators).
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    token_name: &'static str,
    fixity: Fixity,
    category: OperatorCategory,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        token_name,
        fixity,
        category,
    }
}
