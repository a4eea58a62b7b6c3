/// Expression parsing (Pratt / precedence climbing).
///
/// Prefix parsers start on the first token of the expression; infix parsers start on the operator with the
/// already-parsed left operand in hand. Both leave `cur` on the last token of what they parsed.
impl<'src> Parser<'src> {
    /// Parse an expression whose operators bind tighter than `precedence`.
    fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<'src, ExprId> {
        if self.depth >= MAX_NESTING {
            let token = self.cur;
            let error = CompileError::at(
                ErrorKind::NestingTooDeep,
                format!("expression nesting exceeds {MAX_NESTING} levels"),
                &token,
            );
            return Err(ParseFailure::new(token, error));
        }

        self.depth += 1;
        let result = self.parse_binding(precedence);
        self.depth -= 1;
        result
    }

    fn parse_binding(&mut self, precedence: Precedence) -> ParseResult<'src, ExprId> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Punctuation(PunctuationId::Semicolon)) && precedence < self.peek_precedence() {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    // ========================================================================
    // Prefix position
    // ========================================================================

    fn parse_prefix(&mut self) -> ParseResult<'src, ExprId> {
        let token = self.cur;
        let expr = match token.kind {
            TokenKind::Ident | TokenKind::Keyword(KeywordId::Println) => {
                Expression::Identifier(Identifier::from_token(&token))
            }
            TokenKind::Int => Expression::IntegerLiteral(parse_integer(&token)?),
            TokenKind::Float => Expression::FloatLiteral(parse_float(&token)?),
            TokenKind::String => Expression::StringLiteral(token.lexeme),
            TokenKind::Keyword(KeywordId::True) => Expression::BooleanLiteral(true),
            TokenKind::Keyword(KeywordId::False) => Expression::BooleanLiteral(false),
            TokenKind::Keyword(KeywordId::Nil) => Expression::NilLiteral,
            TokenKind::Keyword(KeywordId::If) => return self.parse_if(),
            TokenKind::Keyword(KeywordId::Func) => return self.parse_function(),
            TokenKind::Punctuation(PunctuationId::LParen) => return self.parse_grouped(),
            TokenKind::Operator(id) => match PrefixOperator::from_operator(id) {
                Some(operator) => return self.parse_prefix_operator(operator),
                None => return Err(expected_expression(token)),
            },
            TokenKind::Illegal => return Err(ParseFailure::new(token, CompileError::illegal_token(&token))),
            _ => return Err(expected_expression(token)),
        };

        Ok(self.exprs.alloc(expr))
    }

    fn parse_prefix_operator(&mut self, operator: PrefixOperator) -> ParseResult<'src, ExprId> {
        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;
        Ok(self.exprs.alloc(Expression::Prefix { operator, operand }))
    }

    /// `( <expr> )`. Grouping leaves no node of its own.
    fn parse_grouped(&mut self) -> ParseResult<'src, ExprId> {
        self.next_token();
        let inner = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen))?;
        Ok(inner)
    }

    /// `if ( <cond> ) { ... } [else { ... }]`
    fn parse_if(&mut self) -> ParseResult<'src, ExprId> {
        self.expect_peek(TokenKind::Punctuation(PunctuationId::LParen))?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen))?;

        self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace))?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(TokenKind::Keyword(KeywordId::Else)) {
            self.next_token();
            self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace))?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(self.exprs.alloc(Expression::If {
            condition,
            consequence,
            alternative,
        }))
    }

    /// `func ( [<ident> {, <ident>}] ) { ... }`
    fn parse_function(&mut self) -> ParseResult<'src, ExprId> {
        self.expect_peek(TokenKind::Punctuation(PunctuationId::LParen))?;
        let parameters = self.parse_parameters()?;
        self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace))?;
        let body = self.parse_block()?;
        Ok(self.exprs.alloc(Expression::Function { parameters, body }))
    }

    /// Parameter list starting on `(`; leaves `cur` on `)`.
    fn parse_parameters(&mut self) -> ParseResult<'src, Vec<Identifier<'src>>> {
        let mut parameters = Vec::new();
        if self.peek_is(TokenKind::Punctuation(PunctuationId::RParen)) {
            self.next_token();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::from_token(&self.cur));
        while self.peek_is(TokenKind::Punctuation(PunctuationId::Comma)) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::from_token(&self.cur));
        }

        self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen))?;
        Ok(parameters)
    }

    // ========================================================================
    // Infix position
    // ========================================================================

    fn parse_infix(&mut self, left: ExprId) -> ParseResult<'src, ExprId> {
        let token = self.cur;
        match token.kind {
            TokenKind::Punctuation(PunctuationId::LParen) => self.parse_call(left),
            TokenKind::Operator(operator) if operators::info_for(operator).fixity.allows_infix() => {
                let precedence = precedence_of(token.kind);
                self.next_token();
                let right = self.parse_expression(precedence)?;
                Ok(self.exprs.alloc(Expression::Infix { operator, left, right }))
            }
            _ => {
                let error = CompileError::at(
                    ErrorKind::ExpectedExpression,
                    format!("{} cannot continue an expression", token.describe()),
                    &token,
                );
                Err(ParseFailure::new(token, error))
            }
        }
    }

    /// `<function> ( [<expr> {, <expr>}] )` starting on `(`.
    fn parse_call(&mut self, function: ExprId) -> ParseResult<'src, ExprId> {
        let mut arguments = Vec::new();

        if self.peek_is(TokenKind::Punctuation(PunctuationId::RParen)) {
            self.next_token();
        } else {
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
            while self.peek_is(TokenKind::Punctuation(PunctuationId::Comma)) {
                self.next_token();
                self.next_token();
                arguments.push(self.parse_expression(Precedence::Lowest)?);
            }
            self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen))?;
        }

        Ok(self.exprs.alloc(Expression::Call { function, arguments }))
    }
}

fn expected_expression(token: Token<'_>) -> Box<ParseFailure<'_>> {
    let error = CompileError::at(
        ErrorKind::ExpectedExpression,
        format!("expected expression, found {}", token.describe()),
        &token,
    );
    ParseFailure::new(token, error)
}

fn parse_integer<'src>(token: &Token<'src>) -> ParseResult<'src, i32> {
    token.lexeme.parse::<i32>().map_err(|_| {
        let error = CompileError::at(
            ErrorKind::InvalidLiteral,
            format!("integer literal `{}` does not fit in 32 bits", token.lexeme),
            token,
        )
        .with_hint(format!("integer literals range from 0 to {}; `-` is a separate operator", i32::MAX));
        ParseFailure::new(*token, error)
    })
}

fn parse_float<'src>(token: &Token<'src>) -> ParseResult<'src, f32> {
    token.lexeme.parse::<f32>().map_err(|_| {
        let error = CompileError::at(
            ErrorKind::InvalidLiteral,
            format!("invalid float literal `{}`", token.lexeme),
            token,
        );
        ParseFailure::new(*token, error)
    })
}
