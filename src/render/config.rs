//! Rendering configuration for AST traces

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Number of spaces per YAML nesting level (at least one)
    pub indent_width: usize,
    /// Digits printed after the decimal point of float literals
    pub float_precision: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            float_precision: 6,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width; zero is raised to one so nested YAML keys stay nested
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.max(1);
        self
    }

    /// Set the float precision
    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = precision;
        self
    }
}
