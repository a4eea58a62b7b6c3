/// Statement parsing.
///
/// Each statement parser starts with `cur` on the statement's first token and leaves `cur` on its last token
/// (the `;` when present). `parse_program` and `parse_block` advance past it.
impl<'src> Parser<'src> {
    /// Parse one statement, turning a failure into `Statement::Illegal`.
    fn parse_statement(&mut self) -> Statement<'src> {
        let result = match self.cur.kind {
            TokenKind::Keyword(KeywordId::Var) => self.parse_var_statement(),
            TokenKind::Keyword(KeywordId::Return) => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        };
        result.unwrap_or_else(|failure| self.recover(*failure))
    }

    fn recover(&mut self, failure: ParseFailure<'src>) -> Statement<'src> {
        tracing::debug!(
            kind = %failure.error.kind,
            at = %failure.error.location,
            "{}",
            failure.error.message
        );
        self.errors.push(failure.error);
        if !self.failed_on_current_close(&failure.token) {
            self.synchronize();
        }
        Statement::Illegal { token: failure.token }
    }

    /// The statement stopped on the `}` under `cur`, which closes the enclosing block (or is stray at top level).
    fn failed_on_current_close(&self, token: &Token<'src>) -> bool {
        token.kind == TokenKind::Punctuation(PunctuationId::RBrace) && token.location == self.cur.location
    }

    /// `var <ident> = <expr> [;]`
    fn parse_var_statement(&mut self) -> ParseResult<'src, Statement<'src>> {
        if !self.peek_is(TokenKind::Ident) {
            return Err(self.malformed_var("expected identifier after `var`"));
        }
        self.next_token();
        let name = Identifier::from_token(&self.cur);

        if !self.peek_is(TokenKind::Operator(OperatorId::Assign)) {
            return Err(self.malformed_var(&format!("expected `=` after `var {}`", name.name)));
        }
        self.next_token();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Ok(Statement::Var { name, value })
    }

    fn malformed_var(&self, message: &str) -> Box<ParseFailure<'src>> {
        let found = self.peek;
        let error = CompileError::at(
            ErrorKind::MalformedStatement,
            format!("{message}, found {}", found.describe()),
            &found,
        )
        .with_hint("a variable declaration looks like `var name = value;`");
        ParseFailure::new(found, error)
    }

    /// `return [<expr>] [;]`
    ///
    /// The value is absent for `return;` and for a `return` directly before `}` or end of input.
    fn parse_return_statement(&mut self) -> ParseResult<'src, Statement<'src>> {
        if self.peek_is(TokenKind::Punctuation(PunctuationId::Semicolon)) {
            self.next_token();
            return Ok(Statement::Return { value: None });
        }
        if self.peek_is(TokenKind::Punctuation(PunctuationId::RBrace)) || self.peek.is_eof() {
            return Ok(Statement::Return { value: None });
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Ok(Statement::Return { value: Some(value) })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<'src, Statement<'src>> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Ok(Statement::Expression { expression })
    }

    /// Parse `{ ... }` starting on the `{`. Leaves `cur` on the closing `}`.
    fn parse_block(&mut self) -> ParseResult<'src, Block<'src>> {
        let open = self.cur;
        self.next_token();

        let mut statements = Vec::new();
        while !self.cur_is(TokenKind::Punctuation(PunctuationId::RBrace)) && !self.cur.is_eof() {
            let stmt = self.parse_statement();
            // A statement that failed on this block's own `}` must not step past it.
            let stopped_on_close = matches!(&stmt, Statement::Illegal { token } if self.failed_on_current_close(token));
            statements.push(stmt);
            if !stopped_on_close {
                self.next_token();
            }
        }

        if self.cur.is_eof() {
            let eof = self.cur;
            let error = CompileError::at(ErrorKind::MissingToken, "expected `}`, found end of input", &eof)
                .with_hint(format!("the block opened at {} is never closed", open.location));
            return Err(ParseFailure::new(eof, error));
        }

        Ok(Block { statements })
    }
}
