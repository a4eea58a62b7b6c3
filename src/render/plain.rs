//! Plain trace renderer
//!
//! Every statement becomes one line of nested parentheses so that precedence and
//! associativity are visible at a glance:
//!
//! ```text
//! var x = 5 + 4 * 3 / 2 - 1;   =>   (var x ((5 + ((4 * 3) / 2)) - 1))
//! ```

use tyger_core::lang::operators;
use tyger_syntax::ast::{Block, ExprId, Expression, Program, Statement};

use super::{AstRenderer, RenderConfig};

pub struct PlainRenderer {
    config: RenderConfig,
}

impl PlainRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn statement(&self, program: &Program<'_>, stmt: &Statement<'_>) -> String {
        match stmt {
            Statement::Var { name, value } => format!("(var {} {})", name.name, self.operand(program, *value)),
            Statement::Return { value: Some(value) } => format!("(return {})", self.operand(program, *value)),
            Statement::Return { value: None } => "(return)".to_string(),
            Statement::Expression { expression } => self.operand(program, *expression),
            Statement::Illegal { token } => {
                let shown = if token.lexeme.is_empty() {
                    token.kind.name()
                } else {
                    token.lexeme
                };
                format!("(illegal {shown})")
            }
        }
    }

    /// An expression in statement position; leaves and prefix forms get their own parentheses.
    fn operand(&self, program: &Program<'_>, id: ExprId) -> String {
        let text = self.expression(program, id);
        match program.expr(id) {
            Expression::Infix { .. } | Expression::If { .. } | Expression::Function { .. } | Expression::Call { .. } => {
                text
            }
            _ => format!("({text})"),
        }
    }

    fn expression(&self, program: &Program<'_>, id: ExprId) -> String {
        match program.expr(id) {
            Expression::Identifier(ident) => ident.name.to_string(),
            Expression::IntegerLiteral(value) => value.to_string(),
            Expression::FloatLiteral(value) => format!("{:.*}", self.config.float_precision, value),
            Expression::BooleanLiteral(value) => value.to_string(),
            Expression::StringLiteral(value) => format!("\"{value}\""),
            Expression::NilLiteral => "nil".to_string(),
            Expression::Prefix { operator, operand } => {
                format!("({}{})", operator.as_str(), self.expression(program, *operand))
            }
            Expression::Infix { operator, left, right } => format!(
                "({} {} {})",
                self.expression(program, *left),
                operators::as_str(*operator),
                self.expression(program, *right)
            ),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                let mut out = format!(
                    "(if {} {}",
                    self.operand(program, *condition),
                    self.block(program, consequence)
                );
                if let Some(alternative) = alternative {
                    out.push_str(" else ");
                    out.push_str(&self.block(program, alternative));
                }
                out.push(')');
                out
            }
            Expression::Function { parameters, body } => {
                let names: Vec<&str> = parameters.iter().map(|p| p.name).collect();
                format!("(func({}) {})", names.join(", "), self.block(program, body))
            }
            Expression::Call { function, arguments } => {
                let args: Vec<String> = arguments.iter().map(|arg| self.expression(program, *arg)).collect();
                format!("{}({})", self.expression(program, *function), args.join(", "))
            }
        }
    }

    fn block(&self, program: &Program<'_>, block: &Block<'_>) -> String {
        let inner: Vec<String> = block.statements.iter().map(|s| self.statement(program, s)).collect();
        format!("{{{}}}", inner.join(" "))
    }
}

impl AstRenderer for PlainRenderer {
    fn render(&self, program: &Program<'_>) -> String {
        program
            .statements
            .iter()
            .map(|stmt| self.statement(program, stmt))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tyger_syntax::parser;

    fn plain(source: &str) -> String {
        let program = parser::parse(source).unwrap();
        PlainRenderer::new(RenderConfig::default()).render(&program)
    }

    // ========================================
    // Statements
    // ========================================

    #[test]
    fn test_var_statement() {
        assert_eq!(plain("var x = 10;"), "(var x (10))");
    }

    #[test]
    fn test_return_statement() {
        assert_eq!(plain("return x;"), "(return (x))");
        assert_eq!(plain("return;"), "(return)");
    }

    #[test]
    fn test_expression_statement_is_wrapped() {
        assert_eq!(plain("a;"), "(a)");
        assert_eq!(plain("-a;"), "((-a))");
    }

    #[test]
    fn test_statements_are_one_per_line() {
        assert_eq!(plain("var a = 1; var b = 2;"), "(var a (1))\n(var b (2))");
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(plain(""), "");
    }

    #[test]
    fn test_illegal_statement_shows_lexeme() {
        let (program, errors) = parser::parse_recovering("var 5 = 1;");
        assert!(!errors.is_empty());
        let text = PlainRenderer::new(RenderConfig::default()).render(&program);
        assert_eq!(text, "(illegal 5)");
    }

    // ========================================
    // Expressions
    // ========================================

    #[test]
    fn test_infix_is_not_double_wrapped() {
        assert_eq!(plain("var x = 5 + 4 * 3 / 2 - 1;"), "(var x ((5 + ((4 * 3) / 2)) - 1))");
    }

    #[test]
    fn test_float_uses_six_decimals() {
        assert_eq!(plain("var PI = 3.14159;"), "(var PI (3.141590))");
    }

    #[test]
    fn test_float_precision_is_configurable() {
        let program = parser::parse("1.5;").unwrap();
        let text = PlainRenderer::new(RenderConfig::new().with_float_precision(2)).render(&program);
        assert_eq!(text, "(1.50)");
    }

    #[test]
    fn test_literals() {
        assert_eq!(plain("true;"), "(true)");
        assert_eq!(plain("nil;"), "(nil)");
        assert_eq!(plain("\"hi\";"), "(\"hi\")");
    }

    #[test]
    fn test_if_else() {
        assert_eq!(plain("if (x < y) { x } else { y }"), "(if (x < y) {(x)} else {(y)})");
    }

    #[test]
    fn test_function_literal() {
        assert_eq!(plain("func(a, b) { return a + b; }"), "(func(a, b) {(return (a + b))})");
    }

    #[test]
    fn test_call() {
        assert_eq!(plain("add(1, 2 * 3);"), "add(1, (2 * 3))");
        assert_eq!(plain("println();"), "println()");
    }
}
