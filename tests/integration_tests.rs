//! Integration tests for the line evaluation pipeline.
//!
//! These tests drive complete lines through tokenization, parsing and
//! prefix rendering using the public entry points only.

use prefix_calc::{
    errors::errors::ErrorImpl,
    evaluate_line, evaluate_line_with, evaluate_source, format_error,
    parser::parser::ParseMode,
};

fn count(rendered: &str, c: char) -> usize {
    rendered.chars().filter(|x| *x == c).count()
}

#[test]
fn test_left_associativity() {
    assert_eq!(evaluate_line("8 - 3 - 2").unwrap(), "(- (- 8 3) 2)");
}

#[test]
fn test_precedence() {
    assert_eq!(evaluate_line("2 + 3 * 4").unwrap(), "(+ 2 (* 3 4))");
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(evaluate_line("(2 + 3) * 4").unwrap(), "(* (+ 2 3) 4)");
}

#[test]
fn test_single_literal() {
    assert_eq!(evaluate_line("42").unwrap(), "42");
}

#[test]
fn test_whitespace_insensitivity() {
    let compact = evaluate_line("1+1").unwrap();
    let spaced = evaluate_line(" 1 + 1 ").unwrap();

    assert_eq!(compact, "(+ 1 1)");
    assert_eq!(compact, spaced);
    assert_eq!(evaluate_line("\t1\t+\t1\t").unwrap(), compact);
}

#[test]
fn test_missing_close_paren() {
    let error = evaluate_line("(1 + 2").unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::SyntaxError { .. }));
}

#[test]
fn test_unknown_character() {
    let error = evaluate_line("1 & 2").unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::LexError { character: '&' }));
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_missing_operand() {
    let error = evaluate_line("1 +").unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::SyntaxError { .. }));
}

#[test]
fn test_unbalanced_close_paren_in_operand_position() {
    let error = evaluate_line("(1 + )").unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::SyntaxError { .. }));
}

#[test]
fn test_integer_overflow() {
    let error = evaluate_line("99999999999999999999 + 1").unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::IntegerOverflow { .. }));
    assert_eq!(error.get_error_name(), "IntegerOverflow");
}

#[test]
fn test_trailing_input() {
    assert_eq!(evaluate_line("1 + 2 )").unwrap(), "(+ 1 2)");
    assert_eq!(evaluate_line_with("1 + 2 )", ParseMode::Lenient).unwrap(), "(+ 1 2)");

    let error = evaluate_line_with("1 + 2 )", ParseMode::Strict).unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::SyntaxError { .. }));
}

#[test]
fn test_output_is_balanced() {
    let inputs = [
        ("7", 0),
        ("1 + 2", 1),
        ("1 + 2 * 3", 2),
        ("(1 + 2) * (3 - 4) / 5", 4),
        ("((1)) - ((2 * (3 + 4)))", 3),
        ("10 / 2 / 5 * 3 - 1 + 0", 5),
    ];

    for (input, operators) in inputs {
        let rendered = evaluate_line(input).unwrap();
        assert_eq!(count(&rendered, '('), operators, "input {:?}", input);
        assert_eq!(count(&rendered, ')'), operators, "input {:?}", input);
    }
}

#[test]
fn test_lines_are_independent() {
    assert!(evaluate_line("(1 +").is_err());
    assert!(evaluate_line("").is_err());
    assert!(evaluate_line("   ").is_err());

    // Nothing from the failed lines leaks into the next one
    assert_eq!(evaluate_line("3 * 3").unwrap(), "(* 3 3)");
}

#[test]
fn test_error_diagnostic_uses_file_label() {
    let source = "2 * (3 + x)";
    let error = evaluate_source(source, Some("session.calc".to_string()), ParseMode::Lenient).unwrap_err();

    assert_eq!(error.get_position().1.as_str(), "session.calc");

    let diagnostic = format_error(&error, source);
    assert!(diagnostic.starts_with("Error: LexError (Unknown character `x`)\n-> session.calc\n"));
    assert!(diagnostic.ends_with("  | ---------^"));
}

#[test]
fn test_deep_nesting_is_an_error_not_a_crash() {
    for source in ["(".repeat(500), format!("{}1{}", "(".repeat(400), ")".repeat(400))] {
        let error = evaluate_line(&source).unwrap_err();
        assert!(matches!(error.kind(), ErrorImpl::NestingTooDeep { .. }));
    }
}

#[test]
fn test_long_operator_chain_is_an_error_not_a_crash() {
    let error = evaluate_line(&vec!["1"; 10_000].join("+")).unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::NestingTooDeep { .. }));

    // The line after a rejected one is unaffected
    assert_eq!(evaluate_line("1 + 1").unwrap(), "(+ 1 1)");
}

#[test]
fn test_nesting_diagnostic() {
    let source = "(".repeat(70);
    let error = evaluate_line(&source).unwrap_err();

    let diagnostic = format_error(&error, &source);
    assert!(diagnostic.starts_with("Error: NestingTooDeep (Expression nests deeper than 64 levels)"));
}
