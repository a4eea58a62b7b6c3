#![forbid(unsafe_code)]
//! Tyger front end tooling
//!
//! The scanner, parser and AST live in `tyger_syntax`; this crate adds the pieces that sit on top of them:
//! AST trace renderers and the `tyger` command-line interface.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod render;

pub use tyger_syntax::ast;
pub use tyger_syntax::diagnostics;
pub use tyger_syntax::lexer;
pub use tyger_syntax::parser;

pub use render::{AstRenderer, RenderConfig, RenderFormat, render_program, render_source};

/// The tyger version string, taken from Cargo metadata at compile time.
pub const TYGER_VERSION: &str = env!("CARGO_PKG_VERSION");
