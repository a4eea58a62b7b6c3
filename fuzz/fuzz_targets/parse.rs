#![no_main]

use libfuzzer_sys::fuzz_target;
use tyger::lexer::Scanner;
use tyger::{RenderConfig, RenderFormat, parser, render_program};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The scanner must always reach EOF
        let _ = Scanner::new(s).count();
        // Parsing recovers from every error, and the result must render
        let (program, _errors) = parser::parse_recovering(s);
        let _ = render_program(&program, RenderFormat::Yaml, RenderConfig::default());
    }
});
