use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("plan", TokenKind::Plan);
        map.insert("MORNING_COFFEE", TokenKind::Main);
        map.insert("SHOW", TokenKind::Output);
        map.insert("RECEIVE", TokenKind::Input);
        map.insert("CHECK", TokenKind::If);
        map.insert("REJECT", TokenKind::Else);
        map.insert("REWORK", TokenKind::While);
        map.insert("CHECKLIST", TokenKind::For);
        map.insert("SUBMIT", TokenKind::Return);
        map.insert("OFFICE", TokenKind::Namespace);
        map.insert("file", TokenKind::File);
        map.insert("duration", TokenKind::Duration);
        map.insert("note", TokenKind::Note);
        map.insert("status", TokenKind::Status);
        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    EOF,
    Identifier,

    // Literals
    String,
    Integer,
    Double,
    Boolean,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Semicolon,
    Comma,
    Dollar,

    PlusPlus,
    MinusMinus,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Plan,
    Main,
    Output,
    Input,
    If,
    Else,
    While,
    For,
    Return,
    Namespace,
    Include,

    // Type keywords
    File,
    Duration,
    Note,
    Status,
}

impl TokenKind {
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::File | TokenKind::Duration | TokenKind::Note | TokenKind::Status
        )
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Greater
                | TokenKind::GreaterEquals
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) at line {}", self.kind, self.value, self.line)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// Short form used by token listings: literals and identifiers show
    /// their text, everything else only its kind.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Double,
            TokenKind::Boolean,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
