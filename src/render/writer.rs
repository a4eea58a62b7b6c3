//! Output writer with indentation tracking
//!
//! Indentation is kept as a stack of column widths so that nesting levels and
//! YAML sequence items (which continue two columns past their `- ` marker) can
//! be mixed freely.

use super::config::RenderConfig;

/// Writer that tracks indentation and builds rendered output
pub struct TraceWriter {
    /// The output buffer
    output: String,
    /// Column width pushed by each open indentation level
    indents: Vec<usize>,
    /// Configuration
    config: RenderConfig,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl TraceWriter {
    /// Create a new trace writer with the given config
    pub fn new(config: RenderConfig) -> Self {
        Self {
            output: String::new(),
            indents: Vec::new(),
            config,
            at_line_start: true,
        }
    }

    /// Get the rendered output
    pub fn finish(self) -> String {
        self.output
    }

    /// Open one nesting level of `config.indent_width` columns, never less than one
    pub fn indent(&mut self) {
        self.indents.push(self.config.indent_width.max(1));
    }

    /// Open an indentation level of exactly `columns` columns
    pub fn indent_by(&mut self, columns: usize) {
        self.indents.push(columns);
    }

    /// Close the innermost indentation level
    pub fn dedent(&mut self) {
        self.indents.pop();
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.current_indent();
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Current indentation in columns
    pub fn current_indent(&self) -> usize {
        self.indents.iter().sum()
    }

    /// Get the configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}
