//! Syntax front end for the Tyger language: scanner, token model, AST, diagnostics, and parser.
//!
//! Source text flows through a pull-based [`lexer::Scanner`] into the Pratt [`parser::Parser`], which builds a
//! [`ast::Program`]. Every expression node lives in one arena owned by the program, so dropping the program releases
//! the whole tree at once.
//!
//! ## Notes
//! - This crate is "syntax-only": no name resolution, no evaluation.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `tyger_core::lang` registries.
//! - Tokens and AST nodes borrow from the source text; the source must outlive the program.
//!
//! ## Examples
//! ```rust
//! use tyger_syntax::ast::Statement;
//! use tyger_syntax::parser;
//!
//! let program = parser::parse("var x = 10;").unwrap();
//! assert_eq!(program.statements.len(), 1);
//! assert!(matches!(program.statements[0], Statement::Var { .. }));
//! ```
//!
//! ## See also
//! - `tyger_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
