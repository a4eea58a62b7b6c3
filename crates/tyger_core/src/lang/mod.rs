//! Tyger language vocabulary registries.
//!
//! Each registry pairs a stable identifier enum with a const metadata table. The scanner resolves spellings through
//! `from_str`; diagnostics and renderers go the other way through `as_str` and `token_name`.
//!
//! ## Notes
//! - Tables are ordered by identifier discriminant so `info_for` is a direct index. The registry guardrail tests
//!   enforce that ordering.
//!
//! ## Examples
//! ```rust
//! use tyger_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("func"), Some(KeywordId::Func));
//! assert_eq!(keywords::as_str(KeywordId::Func), "func");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
