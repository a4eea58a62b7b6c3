//! Scanner for the Tyger programming language
//!
//! Handles tokenization including:
//! - Keywords and identifiers
//! - Integer, float, and string literals
//! - One- and two-character operators (`!=`, `==`, `<=`, `>=`, `&&`, `||`)
//! - Delimiters and separators
//!
//! ## Module Structure
//!
//! - `chars` - single-byte character classes
//! - `tokens` - Token types (TokenKind, Token, Location)

pub mod chars;
pub mod tokens;

pub use tokens::{Location, Token, TokenKind};

use std::iter::FusedIterator;

use crate::diagnostics::CompileError;
use tyger_core::lang::keywords;
use tyger_core::lang::operators::OperatorId;
use tyger_core::lang::punctuation::PunctuationId;

// ============================================================================
// SCANNER STATE
// ----------------------------------------------------------------------------
// The scanner keeps exactly one byte of lookahead (`ch`, the byte at `pos`)
// and peeks at `pos + 1` only to recognise two-character operators and the
// `\"` escape. Once `pos` reaches the end of the source, `ch` is `None` and
// every further call yields the same EOF token.
// ============================================================================

/// Pull-based scanner over an in-memory source string.
///
/// Produces one [`Token`] per [`Scanner::next_token`] call. Tokens borrow their lexeme from the source.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src str,
    bytes: &'src [u8],
    pos: usize,
    ch: Option<u8>,
    line: usize,
    column: usize,
    /// Set once the iterator adapter has yielded EOF.
    exhausted: bool,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned at the first byte of `source`.
    pub fn new(source: &'src str) -> Self {
        let bytes = source.as_bytes();
        Self {
            source,
            bytes,
            pos: 0,
            ch: bytes.first().copied(),
            line: 1,
            column: 1,
            exhausted: false,
        }
    }

    /// The source text being scanned.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Scan and return the next token.
    ///
    /// At end of input this returns an [`TokenKind::Eof`] token with an empty lexeme, and keeps returning the same
    /// token on every later call.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace();

        let start = self.location();
        let Some(ch) = self.ch else {
            return Token::new(TokenKind::Eof, start, &self.source[self.pos..]);
        };

        let kind = match ch {
            b'+' => self.single(TokenKind::Operator(OperatorId::Plus)),
            b'-' => self.single(TokenKind::Operator(OperatorId::Minus)),
            b'*' => self.single(TokenKind::Operator(OperatorId::Star)),
            b'/' => self.single(TokenKind::Operator(OperatorId::Slash)),
            b'!' => self.operator(b'=', OperatorId::NotEq, Some(OperatorId::Bang)),
            b'=' => self.operator(b'=', OperatorId::EqEq, Some(OperatorId::Assign)),
            b'<' => self.operator(b'=', OperatorId::LtEq, Some(OperatorId::Lt)),
            b'>' => self.operator(b'=', OperatorId::GtEq, Some(OperatorId::Gt)),
            b'&' => self.operator(b'&', OperatorId::AndAnd, None),
            b'|' => self.operator(b'|', OperatorId::OrOr, None),

            b'(' => self.punct(PunctuationId::LParen),
            b')' => self.punct(PunctuationId::RParen),
            b'{' => self.punct(PunctuationId::LBrace),
            b'}' => self.punct(PunctuationId::RBrace),
            b'[' => self.punct(PunctuationId::LBracket),
            b']' => self.punct(PunctuationId::RBracket),
            b';' => self.punct(PunctuationId::Semicolon),
            b':' => self.punct(PunctuationId::Colon),
            b',' => self.punct(PunctuationId::Comma),
            b'.' => self.punct(PunctuationId::Dot),

            b'"' => return self.scan_string(start),
            _ if chars::is_digit(ch) => return self.scan_number(start),
            _ if chars::is_letter(ch) => return self.scan_identifier(start),

            _ => {
                self.advance_scalar();
                TokenKind::Illegal
            }
        };

        self.token(kind, start)
    }

    // ========================================================================
    // Core byte handling
    // ========================================================================

    fn location(&self) -> Location {
        Location::new(self.pos, self.line, self.column)
    }

    fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.pos + 1).copied()
    }

    /// Consume `ch`, updating line and column. A `\r\n` pair is consumed as one line break.
    fn advance(&mut self) {
        let Some(ch) = self.ch else {
            return;
        };

        let mut width = 1;
        if chars::is_line_break(ch) {
            if ch == b'\r' && self.peek_byte() == Some(b'\n') {
                width = 2;
            }
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.pos += width;
        self.ch = self.bytes.get(self.pos).copied();
    }

    /// Consume one whole UTF-8 scalar so that lexemes always end on a char boundary.
    fn advance_scalar(&mut self) {
        self.advance();
        while !chars::is_end_of_input(self.ch) && !self.source.is_char_boundary(self.pos) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.ch {
            if !chars::is_whitespace(ch) {
                break;
            }
            self.advance();
        }
    }

    fn token(&self, kind: TokenKind, start: Location) -> Token<'src> {
        let token = Token::new(kind, start, &self.source[start.offset..self.pos]);
        tracing::trace!(kind = %token.kind, lexeme = token.lexeme, at = %token.location, "token");
        token
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    fn punct(&mut self, id: PunctuationId) -> TokenKind {
        self.single(TokenKind::Punctuation(id))
    }

    /// Match a two-character operator, falling back to `simple` (or `ILLEGAL` when there is none).
    fn operator(&mut self, second: u8, compound: OperatorId, simple: Option<OperatorId>) -> TokenKind {
        self.advance();
        if self.ch == Some(second) {
            self.advance();
            return TokenKind::Operator(compound);
        }
        simple.map_or(TokenKind::Illegal, TokenKind::Operator)
    }

    // ========================================================================
    // Literals and identifiers
    // ========================================================================

    /// Digits and dots, greedily. Zero dots is an integer, one a float, more is illegal.
    fn scan_number(&mut self, start: Location) -> Token<'src> {
        let mut dots = 0usize;
        while let Some(ch) = self.ch {
            if ch == b'.' {
                dots += 1;
            } else if !chars::is_digit(ch) {
                break;
            }
            self.advance();
        }

        let kind = match dots {
            0 => TokenKind::Int,
            1 => TokenKind::Float,
            _ => TokenKind::Illegal,
        };
        self.token(kind, start)
    }

    fn scan_identifier(&mut self, start: Location) -> Token<'src> {
        while let Some(ch) = self.ch {
            if !chars::is_ident_continue(ch) {
                break;
            }
            self.advance();
        }

        let lexeme = &self.source[start.offset..self.pos];
        let kind = keywords::from_str(lexeme).map_or(TokenKind::Ident, TokenKind::Keyword);
        self.token(kind, start)
    }

    /// Scan a `"`-delimited string.
    ///
    /// The token covers the content only. `\"` is kept verbatim and does not close the string; no other escape is
    /// interpreted. A string that reaches end of input becomes an `ILLEGAL` token starting at the opening quote.
    fn scan_string(&mut self, quote: Location) -> Token<'src> {
        self.advance();
        let content = self.location();

        loop {
            if chars::is_end_of_input(self.ch) {
                return self.token(TokenKind::Illegal, quote);
            }
            match self.ch {
                Some(b'"') => break,
                Some(b'\\') if self.peek_byte() == Some(b'"') => {
                    self.advance();
                    self.advance();
                }
                _ => self.advance(),
            }
        }

        let token = self.token(TokenKind::String, content);
        self.advance();
        token
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    /// Yield every token up to and including the first EOF, then `None`.
    fn next(&mut self) -> Option<Token<'src>> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.exhausted = true;
        }
        Some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

// ============================================================================
// Public API
// ============================================================================

/// Scan `source` to completion.
///
/// The returned stream always ends with an `Eof` token. Every `ILLEGAL` token is reported as a diagnostic; the
/// parser does not need this pass and pulls tokens from a [`Scanner`] directly.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, Vec<CompileError>> {
    let tokens: Vec<Token<'_>> = Scanner::new(source).collect();
    let errors: Vec<CompileError> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Illegal)
        .map(CompileError::illegal_token)
        .collect();

    if errors.is_empty() { Ok(tokens) } else { Err(errors) }
}
