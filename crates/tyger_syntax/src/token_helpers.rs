//! Small helper APIs for working with `Token` / `TokenKind`.

use crate::lexer::{Token, TokenKind};

impl TokenKind {
    pub fn is_eof(self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl Token<'_> {
    pub fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }

    /// Human-readable description for diagnostics: the quoted lexeme, or `end of input`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::String => format!("string \"{}\"", self.lexeme),
            _ => format!("`{}`", self.lexeme),
        }
    }
}
