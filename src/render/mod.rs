//! AST trace renderers
//!
//! Turns a parsed [`Program`] into human-readable text. Two formats exist:
//! - `plain`: one fully parenthesized line per statement
//! - `yaml`: a nested document listing every node with its kind name
//!
//! Renderers never fail: illegal statements are printed like any other node.

mod config;
mod plain;
mod writer;
mod yaml;

use std::fmt;
use std::str::FromStr;

pub use config::RenderConfig;
pub use plain::PlainRenderer;
pub use writer::TraceWriter;
pub use yaml::YamlRenderer;

use tyger_syntax::ast::Program;
use tyger_syntax::diagnostics::CompileError;
use tyger_syntax::parser;

/// Output format of a rendered trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Plain,
    Yaml,
}

impl RenderFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderFormat::Plain => "plain",
            RenderFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(RenderFormat::Plain),
            "yaml" => Ok(RenderFormat::Yaml),
            other => Err(format!("unknown render format `{other}` (expected `plain` or `yaml`)")),
        }
    }
}

/// A renderer turns a whole program into text.
pub trait AstRenderer {
    fn render(&self, program: &Program<'_>) -> String;
}

/// Pick the renderer for `format`.
pub fn renderer_for(format: RenderFormat, config: RenderConfig) -> Box<dyn AstRenderer> {
    match format {
        RenderFormat::Plain => Box::new(PlainRenderer::new(config)),
        RenderFormat::Yaml => Box::new(YamlRenderer::new(config)),
    }
}

/// Render an already parsed program.
pub fn render_program(program: &Program<'_>, format: RenderFormat, config: RenderConfig) -> String {
    renderer_for(format, config).render(program)
}

/// Parse `source` and render it with default settings.
///
/// Fails with every diagnostic when the source does not parse cleanly.
pub fn render_source(source: &str, format: RenderFormat) -> Result<String, Vec<CompileError>> {
    let program = parser::parse(source)?;
    Ok(render_program(&program, format, RenderConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_format_from_str() {
        assert_eq!("plain".parse::<RenderFormat>(), Ok(RenderFormat::Plain));
        assert_eq!("yaml".parse::<RenderFormat>(), Ok(RenderFormat::Yaml));
        assert!("json".parse::<RenderFormat>().is_err());
    }

    #[test]
    fn test_render_format_display_round_trips() {
        for format in [RenderFormat::Plain, RenderFormat::Yaml] {
            assert_eq!(format.to_string().parse::<RenderFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_render_source_plain() {
        assert_eq!(render_source("var x = 10;", RenderFormat::Plain).unwrap(), "(var x (10))");
    }

    #[test]
    fn test_render_source_reports_errors() {
        let errors = render_source("var = 1;", RenderFormat::Plain).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_renderer_for_matches_render_program() {
        let program = parser::parse("a + b;").unwrap();
        for format in [RenderFormat::Plain, RenderFormat::Yaml] {
            let direct = renderer_for(format, RenderConfig::default()).render(&program);
            assert_eq!(direct, render_program(&program, format, RenderConfig::default()));
        }
    }
}
