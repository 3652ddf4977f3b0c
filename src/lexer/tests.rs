//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Reserved words and identifiers
//! - Numeric, string and boolean literals
//! - Operators and longest-match priority
//! - Comments and line tracking
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "plan MORNING_COFFEE SHOW RECEIVE CHECK REJECT REWORK CHECKLIST SUBMIT OFFICE #ATTACH";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plan);
    assert_eq!(tokens[1].kind, TokenKind::Main);
    assert_eq!(tokens[2].kind, TokenKind::Output);
    assert_eq!(tokens[3].kind, TokenKind::Input);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::While);
    assert_eq!(tokens[7].kind, TokenKind::For);
    assert_eq!(tokens[8].kind, TokenKind::Return);
    assert_eq!(tokens[9].kind, TokenKind::Namespace);
    assert_eq!(tokens[10].kind, TokenKind::Include);
    assert_eq!(tokens[11].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_type_keywords() {
    assert_eq!(
        kinds("file duration note status"),
        vec![
            TokenKind::File,
            TokenKind::Duration,
            TokenKind::Note,
            TokenKind::Status,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_reserved_words_are_case_sensitive() {
    let tokens = tokenize("check File Plan show").unwrap();

    for token in &tokens[..4] {
        assert_eq!(token.kind, TokenKind::Identifier, "{}", token.value);
    }
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore planner").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    // Reserved words only match whole lexemes.
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "planner");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Double);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[3].kind, TokenKind::Double);
    assert_eq!(tokens[3].value, "100.5");
}

#[test]
fn test_minus_is_not_part_of_a_number() {
    assert_eq!(
        kinds("-5"),
        vec![TokenKind::Dash, TokenKind::Integer, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
}

#[test]
fn test_strings_have_no_escapes() {
    let tokens = tokenize(r#""a\nb""#).unwrap();

    assert_eq!(tokens[0].value, "a\\nb");
}

#[test]
fn test_tokenize_booleans() {
    let tokens = tokenize("true false").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Boolean);
    assert_eq!(tokens[0].value, "true");
    assert_eq!(tokens[1].kind, TokenKind::Boolean);
    assert_eq!(tokens[1].value, "false");
}

#[test]
fn test_increment_is_one_token() {
    let tokens = tokenize("x++;").unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::PlusPlus);
    assert_eq!(tokens[1].value, "++");
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("++ -- <= >= == != < > = + - * /"),
        vec![
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_longest_match_without_spaces() {
    assert_eq!(
        kinds("a+++b"),
        vec![
            TokenKind::Identifier,
            TokenKind::PlusPlus,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
    assert_eq!(
        kinds("x<=y"),
        vec![TokenKind::Identifier, TokenKind::LessEquals, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } ; , $"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Dollar,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    let tokens = tokenize("//NOTE this is ignored\nfile x; // trailing").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::File);
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_line_numbers() {
    let tokens = tokenize("file a;\r\n\n  note b;\n").unwrap();

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[3].kind, TokenKind::Note);
    assert_eq!(tokens[3].line, 3);
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.value, "EOF");
    assert_eq!(eof.line, 4);
}

#[test]
fn test_multiline_string_keeps_lines_in_step() {
    let tokens = tokenize("SHOW \"one\ntwo\";\nfile x;").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].line, 1);
    assert_eq!(tokens[3].kind, TokenKind::File);
    assert_eq!(tokens[3].line, 3);
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].line, 1);
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("file x = 1;\nfile y = 2 @ 3;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line(), 2);
    assert_eq!(error.found_value(), "@");
    assert!(error.expected().is_none());
}

#[test]
fn test_lone_bang_is_an_error() {
    let error = tokenize("x ! y").unwrap_err();

    assert_eq!(error.found_value(), "!");
}

#[test]
fn test_unterminated_string_is_an_error() {
    let error = tokenize("SHOW \"oops;").unwrap_err();

    assert_eq!(error.found_value(), "\"");
}

#[test]
fn test_token_debug() {
    let tokens = tokenize("count ;").unwrap();

    assert_eq!(tokens[0].debug(), "Identifier (count)");
    assert_eq!(tokens[1].debug(), "Semicolon ()");
}
