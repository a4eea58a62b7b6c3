//! YAML trace renderer
//!
//! Emits the whole tree as a YAML document. Every node carries its kind name
//! (`VAR_STATEMENT`, `INFIX_EXPRESSION`, ...) followed by its fields:
//!
//! ```text
//! ---
//! program:
//!   statements:
//!     - kind: VAR_STATEMENT
//!       ident: 'x'
//!       expr:
//!         kind: INT_EXPRESSION
//!         value: 10
//! ```

use tyger_core::lang::operators;
use tyger_syntax::ast::{Block, ExprId, Expression, Program, Statement};

use super::{AstRenderer, RenderConfig, TraceWriter};

/// Columns occupied by a sequence marker (`- `).
const ITEM_MARKER_WIDTH: usize = 2;

pub struct YamlRenderer {
    config: RenderConfig,
}

impl YamlRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Write `key:` followed by the statements as a sequence, or `key: []`.
    fn statements(&self, w: &mut TraceWriter, program: &Program<'_>, key: &str, statements: &[Statement<'_>]) {
        if statements.is_empty() {
            w.writeln(&format!("{key}: []"));
            return;
        }
        w.writeln(&format!("{key}:"));
        w.indent();
        for stmt in statements {
            w.write("- ");
            w.indent_by(ITEM_MARKER_WIDTH);
            self.statement(w, program, stmt);
            w.dedent();
        }
        w.dedent();
    }

    fn block(&self, w: &mut TraceWriter, program: &Program<'_>, key: &str, block: &Block<'_>) {
        w.writeln(&format!("{key}:"));
        w.indent();
        self.statements(w, program, "statements", &block.statements);
        w.dedent();
    }

    fn statement(&self, w: &mut TraceWriter, program: &Program<'_>, stmt: &Statement<'_>) {
        w.writeln(&format!("kind: {}", stmt.kind().name()));
        match stmt {
            Statement::Var { name, value } => {
                w.writeln(&format!("ident: {}", quote(name.name)));
                self.field(w, program, "expr", *value);
            }
            Statement::Return { value: Some(value) } => self.field(w, program, "expr", *value),
            Statement::Return { value: None } => w.writeln("expr: ~"),
            Statement::Expression { expression } => self.field(w, program, "expr", *expression),
            Statement::Illegal { token } => {
                w.writeln(&format!("token: {}", token.kind.name()));
                w.writeln(&format!("lexeme: {}", quote(token.lexeme)));
                w.writeln(&format!("line: {}", token.location.line));
                w.writeln(&format!("column: {}", token.location.column));
            }
        }
    }

    /// Write `key:` with the expression nested one level below it.
    fn field(&self, w: &mut TraceWriter, program: &Program<'_>, key: &str, id: ExprId) {
        w.writeln(&format!("{key}:"));
        w.indent();
        self.expression(w, program, id);
        w.dedent();
    }

    fn expression(&self, w: &mut TraceWriter, program: &Program<'_>, id: ExprId) {
        let expr = program.expr(id);
        w.writeln(&format!("kind: {}", expr.kind().name()));
        match expr {
            Expression::Identifier(ident) => w.writeln(&format!("ident: {}", quote(ident.name))),
            Expression::IntegerLiteral(value) => w.writeln(&format!("value: {value}")),
            Expression::FloatLiteral(value) => {
                w.writeln(&format!("value: {:.*}", self.config.float_precision, value));
            }
            Expression::BooleanLiteral(value) => w.writeln(&format!("value: {value}")),
            Expression::StringLiteral(value) => w.writeln(&format!("value: {}", quote(value))),
            Expression::NilLiteral => w.writeln("value: ~"),
            Expression::Prefix { operator, operand } => {
                w.writeln(&format!("op: \"{}\"", operator.as_str()));
                self.field(w, program, "expr", *operand);
            }
            Expression::Infix { operator, left, right } => {
                w.writeln(&format!("op: \"{}\"", operators::as_str(*operator)));
                self.field(w, program, "LHS", *left);
                self.field(w, program, "RHS", *right);
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                self.field(w, program, "condition", *condition);
                self.block(w, program, "consequence", consequence);
                match alternative {
                    Some(alternative) => self.block(w, program, "alternative", alternative),
                    None => w.writeln("alternative: ~"),
                }
            }
            Expression::Function { parameters, body } => {
                let names: Vec<String> = parameters.iter().map(|p| quote(p.name)).collect();
                w.writeln(&format!("parameters: [{}]", names.join(", ")));
                self.block(w, program, "body", body);
            }
            Expression::Call { function, arguments } => {
                self.field(w, program, "function", *function);
                if arguments.is_empty() {
                    w.writeln("arguments: []");
                } else {
                    w.writeln("arguments:");
                    w.indent();
                    for argument in arguments {
                        w.write("- ");
                        w.indent_by(ITEM_MARKER_WIDTH);
                        self.expression(w, program, *argument);
                        w.dedent();
                    }
                    w.dedent();
                }
            }
        }
    }
}

impl AstRenderer for YamlRenderer {
    fn render(&self, program: &Program<'_>) -> String {
        let mut w = TraceWriter::new(self.config.clone());
        w.writeln("---");
        w.writeln("program:");
        w.indent();
        self.statements(&mut w, program, "statements", &program.statements);
        w.dedent();
        w.finish()
    }
}

/// Single-quoted YAML scalar; the only escape is a doubled `'`.
fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}
