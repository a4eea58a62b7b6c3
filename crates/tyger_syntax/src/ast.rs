//! Abstract Syntax Tree for Tyger.
//!
//! Expressions are stored in an [`ExprArena`] owned by the [`Program`]; parents refer to children through
//! [`ExprId`] handles. Statements and blocks own their statement vectors directly. The tree is strictly
//! parent-to-child: no node is shared and none refers back to an ancestor.
//!
//! ## Notes
//! - Names and string contents borrow from the source text (`'src`).
//! - Dropping a [`Program`] releases every node in one step.

use std::fmt;
use std::ops::Index;

use crate::lexer::{Location, Token};
use tyger_core::lang::operators::OperatorId;

// ============================================================================
// Arena
// ============================================================================

/// Handle to an expression stored in an [`ExprArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(usize);

impl ExprId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Flat storage for every expression of one parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExprArena<'src> {
    nodes: Vec<Expression<'src>>,
}

impl<'src> ExprArena<'src> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `expr` and return its handle.
    pub fn alloc(&mut self, expr: Expression<'src>) -> ExprId {
        let id = ExprId(self.nodes.len());
        self.nodes.push(expr);
        id
    }

    pub fn get(&self, id: ExprId) -> Option<&Expression<'src>> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'src> Index<ExprId> for ExprArena<'src> {
    type Output = Expression<'src>;

    fn index(&self, id: ExprId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

// ============================================================================
// Program
// ============================================================================

/// Root of one parse: the top-level statements and the arena holding every expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program<'src> {
    pub statements: Vec<Statement<'src>>,
    pub exprs: ExprArena<'src>,
}

impl<'src> Program<'src> {
    /// Resolve an expression handle produced by the same parse.
    pub fn expr(&self, id: ExprId) -> &Expression<'src> {
        &self.exprs[id]
    }
}

/// An ordered statement sequence forming the body of an `if` branch or a function literal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block<'src> {
    pub statements: Vec<Statement<'src>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'src> {
    /// `var name = value;`
    Var { name: Identifier<'src>, value: ExprId },
    /// `return value;` or a bare `return;`
    Return { value: Option<ExprId> },
    /// An expression followed by an optional `;`.
    Expression { expression: ExprId },
    /// A statement that could not be parsed; keeps the token that stopped it.
    Illegal { token: Token<'src> },
}

/// Tag of a [`Statement`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Illegal,
    Var,
    Return,
    Expression,
}

impl StatementKind {
    pub fn name(self) -> &'static str {
        match self {
            StatementKind::Illegal => "ILLEGAL_STATEMENT",
            StatementKind::Var => "VAR_STATEMENT",
            StatementKind::Return => "RETURN_STATEMENT",
            StatementKind::Expression => "EXPRESSION_STATEMENT",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Statement<'_> {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Var { .. } => StatementKind::Var,
            Statement::Return { .. } => StatementKind::Return,
            Statement::Expression { .. } => StatementKind::Expression,
            Statement::Illegal { .. } => StatementKind::Illegal,
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// A bound name with the location it was written at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier<'src> {
    pub name: &'src str,
    pub location: Location,
}

impl<'src> Identifier<'src> {
    pub fn from_token(token: &Token<'src>) -> Self {
        Self {
            name: token.lexeme,
            location: token.location,
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    /// `-x`
    Negate,
    /// `!x`
    Not,
}

impl PrefixOperator {
    /// Map a prefix-capable operator token to its unary operator.
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::Minus => Some(PrefixOperator::Negate),
            OperatorId::Bang => Some(PrefixOperator::Not),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrefixOperator::Negate => "-",
            PrefixOperator::Not => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'src> {
    Identifier(Identifier<'src>),
    IntegerLiteral(i32),
    FloatLiteral(f32),
    BooleanLiteral(bool),
    /// Raw string content between the quotes; `\"` is kept verbatim.
    StringLiteral(&'src str),
    NilLiteral,
    Prefix {
        operator: PrefixOperator,
        operand: ExprId,
    },
    Infix {
        operator: OperatorId,
        left: ExprId,
        right: ExprId,
    },
    If {
        condition: ExprId,
        consequence: Block<'src>,
        alternative: Option<Block<'src>>,
    },
    Function {
        parameters: Vec<Identifier<'src>>,
        body: Block<'src>,
    },
    Call {
        function: ExprId,
        arguments: Vec<ExprId>,
    },
}

/// Tag of an [`Expression`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    Identifier,
    Integer,
    Float,
    Boolean,
    String,
    Nil,
    Prefix,
    Infix,
    If,
    Function,
    Call,
}

impl ExpressionKind {
    pub fn name(self) -> &'static str {
        match self {
            ExpressionKind::Identifier => "IDENT_EXPRESSION",
            ExpressionKind::Integer => "INT_EXPRESSION",
            ExpressionKind::Float => "FLOAT_EXPRESSION",
            ExpressionKind::Boolean => "BOOLEAN_EXPRESSION",
            ExpressionKind::String => "STRING_EXPRESSION",
            ExpressionKind::Nil => "NIL_EXPRESSION",
            ExpressionKind::Prefix => "PREFIX_EXPRESSION",
            ExpressionKind::Infix => "INFIX_EXPRESSION",
            ExpressionKind::If => "IF_EXPRESSION",
            ExpressionKind::Function => "FUNCTION_EXPRESSION",
            ExpressionKind::Call => "CALL_EXPRESSION",
        }
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Expression<'_> {
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::Identifier(_) => ExpressionKind::Identifier,
            Expression::IntegerLiteral(_) => ExpressionKind::Integer,
            Expression::FloatLiteral(_) => ExpressionKind::Float,
            Expression::BooleanLiteral(_) => ExpressionKind::Boolean,
            Expression::StringLiteral(_) => ExpressionKind::String,
            Expression::NilLiteral => ExpressionKind::Nil,
            Expression::Prefix { .. } => ExpressionKind::Prefix,
            Expression::Infix { .. } => ExpressionKind::Infix,
            Expression::If { .. } => ExpressionKind::If,
            Expression::Function { .. } => ExpressionKind::Function,
            Expression::Call { .. } => ExpressionKind::Call,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_hands_out_sequential_ids() {
        let mut arena = ExprArena::new();
        let one = arena.alloc(Expression::IntegerLiteral(1));
        let two = arena.alloc(Expression::IntegerLiteral(2));
        let sum = arena.alloc(Expression::Infix {
            operator: OperatorId::Plus,
            left: one,
            right: two,
        });

        assert_eq!((one.index(), two.index(), sum.index()), (0, 1, 2));
        assert_eq!(arena.len(), 3);
        assert_eq!(arena[two], Expression::IntegerLiteral(2));
        assert!(arena.get(ExprId(9)).is_none());
    }

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(StatementKind::Var.name(), "VAR_STATEMENT");
        assert_eq!(StatementKind::Illegal.to_string(), "ILLEGAL_STATEMENT");
        assert_eq!(ExpressionKind::Integer.name(), "INT_EXPRESSION");
        assert_eq!(ExpressionKind::Function.to_string(), "FUNCTION_EXPRESSION");
        assert_eq!(Expression::NilLiteral.kind(), ExpressionKind::Nil);
        assert_eq!(Statement::Return { value: None }.kind(), StatementKind::Return);
    }

    #[test]
    fn prefix_operators_come_from_prefix_capable_tokens() {
        assert_eq!(PrefixOperator::from_operator(OperatorId::Minus), Some(PrefixOperator::Negate));
        assert_eq!(PrefixOperator::from_operator(OperatorId::Bang), Some(PrefixOperator::Not));
        assert_eq!(PrefixOperator::from_operator(OperatorId::Plus), None);
        assert_eq!(PrefixOperator::Not.as_str(), "!");
    }
}
