//! Layering guardrails between the workspace crates.
//!
//! - `tyger_core` is pure vocabulary and must not have any dependencies.
//! - `tyger_syntax` is a library front end and must not pull in CLI or subscriber crates; those belong to the
//!   root `tyger` package.

/// Names listed in the `[dependencies]` table of a manifest.
fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let manifest = include_str!("../crates/tyger_core/Cargo.toml");
    let deps = dependency_names(manifest);
    assert!(deps.is_empty(), "`tyger_core` must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_does_not_depend_on_cli_crates() {
    let manifest = include_str!("../crates/tyger_syntax/Cargo.toml");
    for dep in dependency_names(manifest) {
        assert!(
            !matches!(dep.as_str(), "clap" | "tracing-subscriber" | "tyger"),
            "`{dep}` must not appear in tyger_syntax [dependencies]"
        );
    }
}

#[test]
fn root_depends_on_both_workspace_crates() {
    let deps = dependency_names(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|d| d == "tyger_core"));
    assert!(deps.iter().any(|d| d == "tyger_syntax"));
}
