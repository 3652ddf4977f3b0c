//! Parser implementation for building the annotated parse tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Statements are dispatched through a lookup table keyed by the leading
//! token; expressions use NUD/LED handlers with binding powers.
//!
//! The parser also owns the symbol table and the semantic diagnostics, so
//! every handler type-checks what it builds before returning it.

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::{ast::ParseNode, types::DataType},
    errors::errors::{Error, ErrorImpl, Expected, SemanticError, SemanticErrorKind},
    lexer::tokens::{Token, TokenKind},
    type_checker::symbol_table::SymbolTable,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt_list,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Scopes visible at the current position
    symbols: SymbolTable,
    /// Semantic errors in discovery order
    diagnostics: Vec<SemanticError>,
    /// Line of the first `plan MORNING_COFFEE` definition
    entry_point: Option<usize>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// `tokenize` always ends its output with EOF. Token vectors built by
    /// hand may not, so a missing terminator is supplied here and the
    /// cursor never runs off the end of the stream.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EOF) {
            let line = tokens.last().map(|t| t.line).unwrap_or(1);
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                line,
            });
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            symbols: SymbolTable::new(),
            diagnostics: vec![],
            entry_point: None,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_kind(&self) -> TokenKind {
        self.tokens[(self.pos + 1).min(self.tokens.len() - 1)].kind
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    /// Builds the fatal error for the current token.
    pub fn unexpected(&self, expected: Expected) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: token.kind,
                value: token.value.clone(),
            },
            token.line,
        )
    }

    /// Expects a token of the specified kind and consumes it.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.unexpected(Expected::Token(expected_kind)))
        } else {
            Ok(self.advance())
        }
    }

    /// Returns true while the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Records a semantic error and keeps going.
    pub fn add_error(&mut self, line: usize, kind: SemanticErrorKind) {
        let error = SemanticError::new(line, kind);
        debug!("{}", error);
        self.diagnostics.push(error);
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn diagnostics(&self) -> &[SemanticError] {
        &self.diagnostics
    }

    /// Consumes the parser, handing back the symbol table and diagnostics.
    pub fn into_parts(self) -> (SymbolTable, Vec<SemanticError>) {
        (self.symbols, self.diagnostics)
    }

    /// Records the entry point definition, returning the line of an
    /// earlier one if this is a redefinition.
    pub fn define_entry_point(&mut self, line: usize) -> Option<usize> {
        match self.entry_point {
            Some(previous) => Some(previous),
            None => {
                self.entry_point = Some(line);
                None
            }
        }
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    pub fn get_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a stream of tokens into an annotated parse tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding the symbol table and semantic errors
/// - Result containing either the `Program` root node or a fatal Error
pub fn parse(tokens: Vec<Token>) -> (Parser, Result<ParseNode, Error>) {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let result = parse_program(&mut parser);
    (parser, result)
}

fn parse_program(parser: &mut Parser) -> Result<ParseNode, Error> {
    let mut root = ParseNode::typed("Program", 0, DataType::Void);
    parse_stmt_list(parser, &mut root)?;
    parser.expect(TokenKind::EOF)?;

    debug!(
        "parsed {} top-level statements, {} semantic errors",
        root.children.len(),
        parser.diagnostics().len()
    );
    Ok(root)
}
