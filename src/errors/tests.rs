//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::{
    ast::types::DataType,
    errors::errors::{
        AssignContext, Error, ErrorImpl, ErrorTip, Expected, SemanticError, SemanticErrorKind,
    },
    lexer::tokens::TokenKind,
};

fn unexpected(expected: Expected, found: TokenKind, value: &str, line: usize) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            expected,
            found,
            value: value.to_string(),
        },
        line,
    )
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        10,
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_phase(), "Lexical");
    assert_eq!(error.get_line(), 10);
    assert_eq!(error.found_value(), "@");
    assert_eq!(error.found(), None);
}

#[test]
fn test_unexpected_token_fields() {
    let error = unexpected(Expected::Token(TokenKind::CloseParen), TokenKind::OpenCurly, "{", 2);

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_phase(), "Syntax");
    assert_eq!(error.expected(), Some(&Expected::Token(TokenKind::CloseParen)));
    assert_eq!(error.found(), Some(TokenKind::OpenCurly));
    assert_eq!(error.found_value(), "{");
}

#[test]
fn test_error_display() {
    let error = unexpected(Expected::Token(TokenKind::Semicolon), TokenKind::Identifier, "y", 3);

    assert_eq!(
        error.to_string(),
        "Syntax error at line 3: expected Semicolon but found Identifier (\"y\")"
    );

    let lexical = Error::new(ErrorImpl::UnrecognisedToken { token: "@".to_string() }, 1);
    assert_eq!(lexical.to_string(), "Lexical error at line 1: unexpected token \"@\"");
}

#[test]
fn test_error_tips() {
    let semicolon = unexpected(Expected::Token(TokenKind::Semicolon), TokenKind::Identifier, "y", 1);
    match semicolon.get_tip() {
        ErrorTip::Suggestion(msg) => assert!(msg.contains("did you miss a semicolon?")),
        ErrorTip::None => panic!("Expected a suggestion"),
    }

    let statement = unexpected(Expected::Statement, TokenKind::Integer, "5", 1);
    assert!(matches!(statement.get_tip(), ErrorTip::Suggestion(_)));

    let lexical = Error::new(ErrorImpl::UnrecognisedToken { token: "@".to_string() }, 1);
    assert_eq!(lexical.get_tip().to_string(), "`@` is not part of the DR alphabet");

    let other = unexpected(Expected::Expression, TokenKind::Semicolon, ";", 1);
    assert!(matches!(other.get_tip(), ErrorTip::None));
    assert_eq!(other.get_tip().to_string(), "");
}

#[test]
fn test_expected_display() {
    assert_eq!(Expected::Token(TokenKind::OpenParen).to_string(), "OpenParen");
    assert_eq!(Expected::Statement.to_string(), "statement");
    assert_eq!(Expected::Expression.to_string(), "expression");
    assert_eq!(Expected::Declaration.to_string(), "declaration");
}

#[test]
fn test_semantic_error_messages() {
    let cases = vec![
        (
            SemanticErrorKind::Redeclaration {
                name: "x".to_string(),
                previous_line: 1,
            },
            "redeclaration of 'x'; previously declared at line 1",
        ),
        (
            SemanticErrorKind::UndeclaredIdentifier { name: "y".to_string() },
            "undefined identifier 'y'",
        ),
        (
            SemanticErrorKind::TypeMismatch {
                context: AssignContext::Initialization,
                name: "s".to_string(),
                expected: DataType::Status,
                found: DataType::Int,
            },
            "type mismatch in initialization of 's': cannot assign 'int' to 'status'",
        ),
        (
            SemanticErrorKind::NonBooleanCondition {
                construct: "CHECK".to_string(),
                found: DataType::Note,
            },
            "CHECK condition should be boolean but found 'note'",
        ),
        (
            SemanticErrorKind::InvalidArithmeticOperands {
                left: DataType::Str,
                operator: "+".to_string(),
                right: DataType::Int,
            },
            "invalid operands for arithmetic 'string' + 'int'",
        ),
        (
            SemanticErrorKind::InvalidRelationalOperands {
                left: DataType::Bool,
                operator: "<".to_string(),
                right: DataType::Double,
            },
            "invalid operands for relational 'bool' < 'double'",
        ),
        (
            SemanticErrorKind::EntryPointRedefined { previous_line: 4 },
            "entry point already defined at line 4",
        ),
    ];

    for (kind, message) in cases {
        assert_eq!(SemanticError::new(1, kind).message(), message);
    }
}

#[test]
fn test_semantic_error_display() {
    let error = SemanticError::new(
        7,
        SemanticErrorKind::UndeclaredIdentifier { name: "missing".to_string() },
    );

    assert_eq!(
        error.to_string(),
        "Semantic Error (line 7): undefined identifier 'missing'"
    );
}

#[test]
fn test_error_serialization() {
    let error = unexpected(Expected::Token(TokenKind::CloseParen), TokenKind::OpenCurly, "{", 2);
    let json = serde_json::to_value(&error).unwrap();

    assert_eq!(json["kind"], "Syntax");
    assert_eq!(json["line"], 2);
    assert_eq!(json["expected"], "CloseParen");
    assert_eq!(json["found"], "OpenCurly");
    assert_eq!(json["value"], "{");

    let lexical = Error::new(ErrorImpl::UnrecognisedToken { token: "@".to_string() }, 5);
    let json = serde_json::to_value(&lexical).unwrap();
    assert_eq!(json["kind"], "Lexical");
    assert!(json["expected"].is_null());
    assert!(json["found"].is_null());
}

#[test]
fn test_semantic_error_serialization() {
    let error = SemanticError::new(
        3,
        SemanticErrorKind::UndeclaredIdentifier { name: "z".to_string() },
    );
    let json = serde_json::to_value(&error).unwrap();

    assert_eq!(json["line"], 3);
    assert_eq!(json["message"], "undefined identifier 'z'");
}
