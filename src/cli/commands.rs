//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::fs;

use miette::{NamedSource, Report};
use tyger_syntax::diagnostics::CompileError;
use tyger_syntax::lexer::{self, Token};
use tyger_syntax::parser;

use super::{CliError, CliResult, ExitCode};
use crate::render::{RenderConfig, RenderFormat, render_program};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    tracing::debug!(path = file_path, bytes = metadata.len(), "reading source");
    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render diagnostics against the named source with miette.
pub fn format_diagnostics(file_path: &str, source: &str, errors: &[CompileError]) -> String {
    let mut out = String::new();
    for err in errors {
        let report = Report::new(err.clone()).with_source_code(NamedSource::new(file_path, source.to_string()));
        let _ = writeln!(out, "{report:?}");
    }
    let noun = if errors.len() == 1 { "error" } else { "errors" };
    let _ = write!(out, "{}: {} {}", file_path, errors.len(), noun);
    out
}

/// One line per token: `line:column KIND 'lexeme'`.
pub fn format_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for tok in tokens {
        let _ = writeln!(out, "{} {} '{}'", tok.location, tok.kind.name(), tok.lexeme);
    }
    out
}

/// Tokenize and display the token stream, or the lexical errors if there are any.
#[tracing::instrument]
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    match lexer::lex(&source) {
        Ok(tokens) => {
            print!("{}", format_tokens(&tokens));
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => Err(CliError::failure(format_diagnostics(file_path, &source, &errors))),
    }
}

/// Parse and display the AST trace, then any diagnostics.
#[tracing::instrument(skip(config))]
pub fn parse_file(file_path: &str, format: RenderFormat, config: RenderConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let (program, errors) = parser::parse_recovering(&source);

    let rendered = render_program(&program, format, config);
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end());
    }

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(format_diagnostics(file_path, &source, &errors)))
    }
}

/// Parse a file and report whether it is free of diagnostics.
#[tracing::instrument]
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    match parser::parse(&source) {
        Ok(program) => {
            println!("✓ {}: {} statements, no errors", file_path, program.statements.len());
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => Err(CliError::failure(format_diagnostics(file_path, &source, &errors))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::process;

    /// Write `source` to a fresh temporary file and return its path.
    fn temp_source(name: &str, source: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("tyger_cli_{}_{}.ty", process::id(), name));
        fs::write(&path, source).unwrap();
        path
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("/nonexistent/tyger/input.ty").unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }

    #[test]
    fn test_format_tokens() {
        let tokens = lexer::lex("var x = 1;").unwrap();
        let text = format_tokens(&tokens);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "1:1 VAR 'var'",
                "1:5 IDENT 'x'",
                "1:7 ASSIGN '='",
                "1:9 INT_LIT '1'",
                "1:10 SEMICOLON ';'",
                "1:11 EOF ''",
            ]
        );
    }

    #[test]
    fn test_format_diagnostics_mentions_file_and_message() {
        let source = "var = 1;";
        let errors = parser::parse(source).unwrap_err();
        let text = format_diagnostics("bad.ty", source, &errors);
        assert!(text.contains("expected identifier after `var`"));
        assert!(text.contains("bad.ty"));
        assert!(text.ends_with("bad.ty: 1 error"));
    }

    #[test]
    fn test_lex_file_success() {
        let path = temp_source("lex_ok", "var x = 10;");
        let result = lex_file(&path.to_string_lossy());
        let _ = fs::remove_file(&path);
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_lex_file_reports_illegal_tokens() {
        let path = temp_source("lex_bad", "a & b");
        let result = lex_file(&path.to_string_lossy());
        let _ = fs::remove_file(&path);
        let err = result.unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("unexpected `&`"));
    }

    #[test]
    fn test_lex_file_reports_every_illegal_token() {
        let path = temp_source("lex_many_bad", "a & b | c;\n\"open");
        let result = lex_file(&path.to_string_lossy());
        let _ = fs::remove_file(&path);
        let err = result.unwrap_err();
        assert!(err.message.contains("unexpected `&`"));
        assert!(err.message.contains("unexpected `|`"));
        assert!(err.message.contains("unterminated string literal"));
        assert!(err.message.ends_with(": 3 errors"));
    }

    #[test]
    fn test_parse_file_success() {
        let path = temp_source("parse_ok", "var x = 1 + 2;");
        let result = parse_file(&path.to_string_lossy(), RenderFormat::Yaml, RenderConfig::default());
        let _ = fs::remove_file(&path);
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_parse_file_reports_diagnostics() {
        let path = temp_source("parse_bad", "var x = ;\nvar y = 2;");
        let result = parse_file(&path.to_string_lossy(), RenderFormat::Plain, RenderConfig::default());
        let _ = fs::remove_file(&path);
        let err = result.unwrap_err();
        assert!(err.message.ends_with(": 1 error"));
    }

    #[test]
    fn test_check_file() {
        let ok = temp_source("check_ok", "func(a) { return a; }(1);");
        let bad = temp_source("check_bad", "if (x { }");
        let ok_result = check_file(&ok.to_string_lossy());
        let bad_result = check_file(&bad.to_string_lossy());
        let _ = fs::remove_file(&ok);
        let _ = fs::remove_file(&bad);
        assert_eq!(ok_result.unwrap(), ExitCode::SUCCESS);
        assert_eq!(bad_result.unwrap_err().exit_code, ExitCode::FAILURE);
    }
}
