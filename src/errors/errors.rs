use std::fmt::Display;

use serde::{ser::SerializeStruct, Serialize, Serializer};
use thiserror::Error;

use crate::{ast::types::DataType, lexer::tokens::TokenKind};

/// A fatal lexical or syntax error. Aborts the whole compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    /// "Lexical" or "Syntax", for headings.
    pub fn get_phase(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "Lexical",
            ErrorImpl::UnexpectedToken { .. } => "Syntax",
        }
    }

    /// What the parser was looking for. Lexical errors have no expectation.
    pub fn expected(&self) -> Option<&Expected> {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => None,
            ErrorImpl::UnexpectedToken { expected, .. } => Some(expected),
        }
    }

    pub fn found(&self) -> Option<TokenKind> {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => None,
            ErrorImpl::UnexpectedToken { found, .. } => Some(*found),
        }
    }

    pub fn found_value(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } => token,
            ErrorImpl::UnexpectedToken { value, .. } => value,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } => {
                ErrorTip::Suggestion(format!("`{}` is not part of the DR alphabet", token))
            }
            ErrorImpl::UnexpectedToken {
                expected: Expected::Token(TokenKind::Semicolon),
                value,
                ..
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                value
            )),
            ErrorImpl::UnexpectedToken {
                expected: Expected::Statement,
                ..
            } => ErrorTip::Suggestion(String::from(
                "statements start with a type, an identifier, or a keyword such as CHECK or SHOW",
            )),
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} error at line {}: {}",
            self.get_phase(),
            self.line,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Error", 5)?;
        state.serialize_field("kind", self.get_phase())?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("expected", &self.expected().map(|e| e.to_string()))?;
        state.serialize_field("found", &self.found())?;
        state.serialize_field("value", self.found_value())?;
        state.end()
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// What a production required when it met the wrong token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expected {
    Token(TokenKind),
    Statement,
    Expression,
    Declaration,
    AssignmentOrCall,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Statement => write!(f, "statement"),
            Expected::Expression => write!(f, "expression"),
            Expected::Declaration => write!(f, "declaration"),
            Expected::AssignmentOrCall => write!(f, "assignment, increment, or call"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token {token:?}")]
    UnrecognisedToken { token: String },
    #[error("expected {expected} but found {found} ({value:?})")]
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        value: String,
    },
}

/// Which statement form a type mismatch was found in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssignContext {
    Initialization,
    Assignment,
    Update,
}

impl Display for AssignContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignContext::Initialization => write!(f, "initialization"),
            AssignContext::Assignment => write!(f, "assignment"),
            AssignContext::Update => write!(f, "update"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticErrorKind {
    #[error("redeclaration of '{name}'; previously declared at line {previous_line}")]
    Redeclaration { name: String, previous_line: usize },
    #[error("undefined identifier '{name}'")]
    UndeclaredIdentifier { name: String },
    #[error("type mismatch in {context} of '{name}': cannot assign '{found}' to '{expected}'")]
    TypeMismatch {
        context: AssignContext,
        name: String,
        expected: DataType,
        found: DataType,
    },
    #[error("{construct} condition should be boolean but found '{found}'")]
    NonBooleanCondition { construct: String, found: DataType },
    #[error("invalid operands for arithmetic '{left}' {operator} '{right}'")]
    InvalidArithmeticOperands {
        left: DataType,
        operator: String,
        right: DataType,
    },
    #[error("invalid operands for relational '{left}' {operator} '{right}'")]
    InvalidRelationalOperands {
        left: DataType,
        operator: String,
        right: DataType,
    },
    #[error("entry point already defined at line {previous_line}")]
    EntryPointRedefined { previous_line: usize },
}

/// A recoverable diagnostic. Analysis continues after one is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticError {
    pub line: usize,
    pub kind: SemanticErrorKind,
}

impl SemanticError {
    pub fn new(line: usize, kind: SemanticErrorKind) -> Self {
        SemanticError { line, kind }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Semantic Error (line {}): {}", self.line, self.kind)
    }
}

impl Serialize for SemanticError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SemanticError", 2)?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}
