/// Binding power of a token in infix position, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>` `<=` `>=`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// unary `-` `!`
    Prefix,
    /// `f(...)`
    Call,
}

/// Binding power of `kind` in infix position. Tokens that cannot continue an expression are `Lowest`.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Operator(OperatorId::EqEq | OperatorId::NotEq) => Precedence::Equals,
        TokenKind::Operator(OperatorId::Lt | OperatorId::Gt | OperatorId::LtEq | OperatorId::GtEq) => {
            Precedence::LessGreater
        }
        TokenKind::Operator(OperatorId::Plus | OperatorId::Minus) => Precedence::Sum,
        TokenKind::Operator(OperatorId::Star | OperatorId::Slash) => Precedence::Product,
        TokenKind::Punctuation(PunctuationId::LParen) => Precedence::Call,
        _ => Precedence::Lowest,
    }
}
