/// Token-window helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Advancing the window (`next_token`)
/// - Checking / expecting the next token (`peek_is`, `expect_peek`)
/// - Error recovery (`synchronize`)
impl<'src> Parser<'src> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Shift the window by one token.
    fn next_token(&mut self) {
        self.cur = self.peek;
        self.peek = self.scanner.next_token();
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind)
    }

    /// Advance onto the next token if it is `expected`; otherwise fail with a `MissingToken` diagnostic at it.
    fn expect_peek(&mut self, expected: TokenKind) -> ParseResult<'src, ()> {
        if self.peek_is(expected) {
            self.next_token();
            return Ok(());
        }

        let found = self.peek;
        let message = format!("expected {}, found {}", describe_kind(expected), found.describe());
        Err(ParseFailure::new(
            found,
            CompileError::at(ErrorKind::MissingToken, message, &found),
        ))
    }

    /// Consume a trailing `;` if there is one.
    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Punctuation(PunctuationId::Semicolon)) {
            self.next_token();
        }
    }

    /// Skip to the end of the failed statement.
    ///
    /// Stops on a `;` at the current brace depth (consumed), or before an unmatched `}` or end of input, so that
    /// the caller's "advance past the statement" step lands on the next statement.
    fn synchronize(&mut self) {
        if self.cur_is(TokenKind::Punctuation(PunctuationId::Semicolon)) {
            return;
        }

        let mut depth = usize::from(self.cur_is(TokenKind::Punctuation(PunctuationId::LBrace)));
        loop {
            match self.peek.kind {
                TokenKind::Eof => return,
                TokenKind::Punctuation(PunctuationId::Semicolon) if depth == 0 => {
                    self.next_token();
                    return;
                }
                TokenKind::Punctuation(PunctuationId::RBrace) => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                TokenKind::Punctuation(PunctuationId::LBrace) => depth += 1,
                _ => {}
            }
            self.next_token();
        }
    }
}

/// How an expected token kind is named in diagnostics.
fn describe_kind(kind: TokenKind) -> String {
    match kind {
        TokenKind::Keyword(id) => format!("`{}`", keywords::as_str(id)),
        TokenKind::Operator(id) => format!("`{}`", operators::as_str(id)),
        TokenKind::Punctuation(id) => format!("`{}`", punctuation::as_str(id)),
        TokenKind::Ident => "identifier".to_string(),
        TokenKind::Int => "integer literal".to_string(),
        TokenKind::Float => "float literal".to_string(),
        TokenKind::String => "string literal".to_string(),
        TokenKind::Illegal => "illegal token".to_string(),
        TokenKind::Eof => "end of input".to_string(),
    }
}
