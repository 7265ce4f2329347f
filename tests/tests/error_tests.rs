//! The error taxonomy, exercised end to end.

use solvent::{evaluate, Error, EvalError, ParseError};

#[test]
fn empty_or_whitespace_input_is_empty_expression() {
    for source in ["", "   ", "\t\n"] {
        assert!(
            matches!(
                evaluate(source),
                Err(Error::Parse(ParseError::EmptyExpression))
            ),
            "input {source:?}"
        );
    }
}

#[test]
fn unbalanced_parens_fail_regardless_of_position() {
    for source in ["(1 + 2", "1 + 2)", "((1)", "(1))", "avg(1, 2", "1, 2"] {
        assert!(
            matches!(
                evaluate(source),
                Err(Error::Parse(ParseError::MismatchedParentheses))
            ),
            "input {source:?}"
        );
    }
}

#[test]
fn missing_operator_is_malformed() {
    assert!(matches!(
        evaluate("(1)(2)"),
        Err(Error::Parse(ParseError::MalformedExpression(_)))
    ));
}

#[test]
fn unary_minus_is_not_supported() {
    // Known limitation carried over from the engine's design: operators
    // are strictly binary.
    assert!(matches!(
        evaluate("-5"),
        Err(Error::Parse(ParseError::MalformedExpression(_)))
    ));
    assert!(matches!(
        evaluate("3 * -2"),
        Err(Error::Parse(ParseError::MalformedExpression(_)))
    ));
}

#[test]
fn invalid_literal_is_numeric_format() {
    match evaluate("1.2.3 + 1") {
        Err(Error::Eval(EvalError::NumericFormat { lexeme })) => {
            assert_eq!(lexeme, "1.2.3");
        }
        other => panic!("expected NumericFormat, got {other:?}"),
    }
}

#[test]
fn unbound_variable_is_unknown_symbol() {
    match evaluate("2 * radius") {
        Err(Error::Eval(EvalError::UnknownSymbol { name })) => {
            assert_eq!(name, "radius");
        }
        other => panic!("expected UnknownSymbol, got {other:?}"),
    }
}

#[test]
fn unresolved_function_reports_the_requested_name() {
    match evaluate("frobnicate(1, 2)") {
        Err(Error::Eval(EvalError::UnknownFunction { name })) => {
            assert_eq!(name, "frobnicate");
        }
        other => panic!("expected UnknownFunction, got {other:?}"),
    }
    // Wrong arity for a provider function reports the same way.
    match evaluate("sqrt(1, 2)") {
        Err(Error::Eval(EvalError::UnknownFunction { name })) => {
            assert_eq!(name, "sqrt");
        }
        other => panic!("expected UnknownFunction, got {other:?}"),
    }
}

#[test]
fn error_display_names_the_offender() {
    let message = evaluate("nope(1)").unwrap_err().to_string();
    assert!(message.contains("nope"), "message was {message:?}");
}
