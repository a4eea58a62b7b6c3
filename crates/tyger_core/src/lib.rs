//! Provide the canonical language vocabulary shared by the Tyger scanner, parser, and tooling.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state, and no syntax-tree types.
//! - Callers work with stable IDs (`KeywordId`, `OperatorId`, `PunctuationId`) and look up spellings and metadata
//!   through the registry tables in [`lang`].

pub mod lang;
