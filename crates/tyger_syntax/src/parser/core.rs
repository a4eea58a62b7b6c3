/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse_program()` entrypoint,
/// plus the internal failure type threaded through the statement and expression parsers.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`; every chunk shares the module's private items.
struct ParseFailure<'src> {
    /// The token that stopped the statement; becomes the payload of `Statement::Illegal`.
    token: Token<'src>,
    error: CompileError,
}

impl<'src> ParseFailure<'src> {
    fn new(token: Token<'src>, error: CompileError) -> Box<Self> {
        Box::new(Self { token, error })
    }
}

type ParseResult<'src, T> = Result<T, Box<ParseFailure<'src>>>;

/// Deepest expression nesting accepted before the parser gives up on a statement.
const MAX_NESTING: usize = 128;

/// Parser state.
///
/// ## Notes
/// - `cur` is the token being parsed; `peek` is the one after it. Tokens are pulled from the scanner one at a time.
/// - A statement that fails is replaced by `Statement::Illegal`, the diagnostic is recorded, and the parser
///   synchronizes at the next statement boundary. Parsing never aborts.
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    cur: Token<'src>,
    peek: Token<'src>,
    exprs: ExprArena<'src>,
    errors: Vec<CompileError>,
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Create a parser and fill its two-token window from `scanner`.
    pub fn new(mut scanner: Scanner<'src>) -> Self {
        let cur = scanner.next_token();
        let peek = scanner.next_token();
        Self {
            scanner,
            cur,
            peek,
            exprs: ExprArena::new(),
            errors: Vec::new(),
            depth: 0,
        }
    }

    /// Create a parser over `source`.
    pub fn from_source(source: &'src str) -> Self {
        Self::new(Scanner::new(source))
    }

    /// Parse statements until end of input.
    ///
    /// Always returns a program. Statements that could not be parsed appear as `Statement::Illegal`, and the
    /// matching diagnostics are available from [`Parser::errors`].
    #[tracing::instrument(skip_all)]
    pub fn parse_program(&mut self) -> Program<'src> {
        let mut statements = Vec::new();

        while !self.cur.is_eof() {
            statements.push(self.parse_statement());
            self.next_token();
        }

        tracing::debug!(
            statement_count = statements.len(),
            error_count = self.errors.len(),
            "parsed program"
        );

        Program {
            statements,
            exprs: std::mem::take(&mut self.exprs),
        }
    }

    /// Diagnostics recorded so far.
    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<CompileError> {
        self.errors
    }
}
