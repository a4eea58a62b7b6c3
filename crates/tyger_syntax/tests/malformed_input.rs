//! The parser must never panic or loop on malformed input. Every case here returns a program and at least one
//! diagnostic with a location inside the source.

use tyger_syntax::ast::Statement;
use tyger_syntax::diagnostics::ErrorKind;
use tyger_syntax::parser::parse_recovering;

const MALFORMED: &[&str] = &[
    ")",
    "}",
    "}}}}",
    ";;)",
    "var",
    "var x",
    "var x =",
    "var = ;",
    "var 1 = 2;",
    "return +;",
    "5 +",
    "5 + ;",
    "* 3;",
    "(",
    "((1 + 2)",
    "(1 + 2))",
    "if",
    "if (",
    "if (x",
    "if (x)",
    "if (x) {",
    "if (x) { 1 } else",
    "if (x) { 1 } else {",
    "func",
    "func(",
    "func(a,",
    "func(a, 1) {}",
    "func(a) {",
    "add(1, 2",
    "add(1,, 2)",
    "add(,)",
    "\"unterminated",
    "1.2.3;",
    "a & b;",
    "a | b;",
    "@#$%^",
    "é;",
    "99999999999999999999;",
    "{ x }",
    "[1, 2]",
    "a = 1;",
    "x.y;",
    "a && b;",
    "var x = if (y) {;",
    "func() { return",
];

#[test]
fn malformed_inputs_are_diagnosed_without_panicking() {
    for source in MALFORMED {
        let (program, errors) = parse_recovering(source);
        assert!(!errors.is_empty(), "{source:?} should produce a diagnostic");
        assert!(
            program.statements.iter().any(|s| matches!(s, Statement::Illegal { .. })),
            "{source:?} should contain an illegal statement"
        );
        for error in &errors {
            assert!(
                error.location.offset <= source.len(),
                "{source:?}: diagnostic offset {} out of range",
                error.location.offset
            );
            assert!(error.location.line >= 1 && error.location.column >= 1);
        }
    }
}

#[test]
fn parsing_continues_after_each_bad_statement() {
    let source = "var = 1; var ok = 2; ); return 3; if (x { }; 4;";
    let (program, errors) = parse_recovering(source);

    let illegal = program
        .statements
        .iter()
        .filter(|s| matches!(s, Statement::Illegal { .. }))
        .count();
    assert_eq!(illegal, errors.len());
    assert_eq!(errors.len(), 3, "{errors:?}");
    assert!(matches!(program.statements.last(), Some(Statement::Expression { .. })));
}

#[test]
fn error_kinds_by_category() {
    let kind_of = |source: &str| parse_recovering(source).1[0].kind;

    assert_eq!(kind_of("var 1 = 2;"), ErrorKind::MalformedStatement);
    assert_eq!(kind_of("(1 + 2"), ErrorKind::MissingToken);
    assert_eq!(kind_of(");"), ErrorKind::ExpectedExpression);
    assert_eq!(kind_of("@;"), ErrorKind::IllegalToken);
    assert_eq!(kind_of("\"abc"), ErrorKind::UnclosedString);
    assert_eq!(kind_of("99999999999;"), ErrorKind::InvalidLiteral);
}
