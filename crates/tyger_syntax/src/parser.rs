//! Parser for the Tyger programming language
//!
//! A Pratt (precedence-climbing) parser that pulls tokens from a [`Scanner`](crate::lexer::Scanner) through a
//! two-token window (`cur`, `peek`) and builds a [`Program`].
//!
//! ## Examples
//!
//! ```rust
//! use tyger_syntax::ast::{Expression, Statement};
//! use tyger_syntax::parser::Parser;
//!
//! let mut parser = Parser::from_source("5 + 4 * 3;");
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//! let Statement::Expression { expression } = &program.statements[0] else { panic!("expected expression") };
//! assert!(matches!(program.expr(*expression), Expression::Infix { .. }));
//! ```

use crate::ast::*;
use crate::diagnostics::{CompileError, ErrorKind};
use crate::lexer::{Scanner, Token, TokenKind};
use tyger_core::lang::keywords::{self, KeywordId};
use tyger_core::lang::operators::{self, OperatorId};
use tyger_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/precedence.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
