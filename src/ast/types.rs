//! Type tags carried by parse nodes and symbols.
//!
//! DR declares variables with four source-level keywords (`file`,
//! `duration`, `note`, `status`). Each maps onto one of four base types,
//! which is what the type rules compare. A handful of extra tags cover
//! nodes that carry no value and the fallback used after a semantic error.

use std::fmt::Display;

use serde::Serialize;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    // Declared source types
    File,
    Duration,
    Note,
    Status,

    // Base types
    Int,
    Double,
    #[serde(rename = "string")]
    Str,
    Bool,

    /// Marker nodes for `#ATTACH`.
    Include,
    /// Statements and operator leaves.
    Void,
    /// Fallback after a semantic error; also the type of call expressions.
    Unknown,
}

impl DataType {
    /// Maps a type keyword token to its declared type.
    pub fn from_keyword(kind: TokenKind) -> Option<DataType> {
        match kind {
            TokenKind::File => Some(DataType::File),
            TokenKind::Duration => Some(DataType::Duration),
            TokenKind::Note => Some(DataType::Note),
            TokenKind::Status => Some(DataType::Status),
            _ => None,
        }
    }

    /// The base type a declared type stands for. Base types map to themselves.
    pub fn base(self) -> DataType {
        match self {
            DataType::File => DataType::Int,
            DataType::Duration => DataType::Double,
            DataType::Note => DataType::Str,
            DataType::Status => DataType::Bool,
            other => other,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self.base(), DataType::Int | DataType::Double)
    }

    pub fn is_boolean_like(self) -> bool {
        matches!(self.base(), DataType::Bool | DataType::Int)
    }

    pub fn is_unknown(self) -> bool {
        self == DataType::Unknown
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::File => "file",
            DataType::Duration => "duration",
            DataType::Note => "note",
            DataType::Status => "status",
            DataType::Int => "int",
            DataType::Double => "double",
            DataType::Str => "string",
            DataType::Bool => "bool",
            DataType::Include => "include",
            DataType::Void => "void",
            DataType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}
