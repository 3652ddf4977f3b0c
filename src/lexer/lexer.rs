use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    // Tried in order; two-character operators sit above their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("#ATTACH", MK_DEFAULT_HANDLER!(TokenKind::Include, "#ATTACH")),
        RegexPattern::new("[0-9]+\\.[0-9]+", double_handler),
        RegexPattern::new("[0-9]+", integer_handler),
        RegexPattern::new("[ \\t\\r]+", skip_handler),
        RegexPattern::new("\\n", newline_handler),
        RegexPattern::new("\"[^\"]*\"", string_handler),
        RegexPattern::new("//[^\\n]*", skip_handler),
        RegexPattern::new("\\+\\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++")),
        RegexPattern::new("--", MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--")),
        RegexPattern::new("<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        RegexPattern::new(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        RegexPattern::new("==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        RegexPattern::new(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new("\\$", MK_DEFAULT_HANDLER!(TokenKind::Dollar, "$")),
        RegexPattern::new("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new("<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new(">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!("token {}", token);
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn integer_handler(lexer: &mut Lexer, lexeme: &str) {
    let line = lexer.line;
    lexer.push(MK_TOKEN!(TokenKind::Integer, lexeme.to_string(), line));
    lexer.advance_n(lexeme.len());
}

fn double_handler(lexer: &mut Lexer, lexeme: &str) {
    let line = lexer.line;
    lexer.push(MK_TOKEN!(TokenKind::Double, lexeme.to_string(), line));
    lexer.advance_n(lexeme.len());
}

fn skip_handler(lexer: &mut Lexer, lexeme: &str) {
    lexer.advance_n(lexeme.len());
}

fn newline_handler(lexer: &mut Lexer, lexeme: &str) {
    lexer.line += 1;
    lexer.advance_n(lexeme.len());
}

fn string_handler(lexer: &mut Lexer, lexeme: &str) {
    let line = lexer.line;
    let contents = &lexeme[1..lexeme.len() - 1];

    lexer.push(MK_TOKEN!(TokenKind::String, contents.to_string(), line));
    lexer.line += contents.matches('\n').count();
    lexer.advance_n(lexeme.len());
}

fn symbol_handler(lexer: &mut Lexer, lexeme: &str) {
    let line = lexer.line;
    let kind = RESERVED_LOOKUP.get(lexeme).copied().unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, lexeme.to_string(), line));
    lexer.advance_n(lexeme.len());
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            let lexeme = match pattern.regex.find(lex.remainder()) {
                Some(found) => found.as_str().to_string(),
                None => continue,
            };

            (pattern.handler)(&mut lex, &lexeme);
            matched = true;
            break;
        }

        if !matched {
            let token = lex.remainder().chars().next().map(String::from).unwrap_or_default();
            return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, lex.line));
        }
    }

    let line = lex.line;
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), line));
    Ok(lex.tokens)
}
