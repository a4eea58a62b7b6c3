/// Parse `source` into a [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns `Err(Vec<CompileError>)` if any statement failed to parse. Use [`parse_recovering`] to keep the partial
/// program alongside the diagnostics.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Program<'_>, Vec<CompileError>> {
    let (program, errors) = parse_recovering(source);
    if errors.is_empty() { Ok(program) } else { Err(errors) }
}

/// Parse `source`, returning the program together with every diagnostic.
///
/// Failed statements appear in the program as `Statement::Illegal`.
pub fn parse_recovering(source: &str) -> (Program<'_>, Vec<CompileError>) {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();
    (program, parser.into_errors())
}
