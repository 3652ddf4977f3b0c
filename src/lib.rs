#![allow(clippy::module_inception)]

use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::{
    ast::ast::ParseNode,
    errors::errors::{Error, ErrorTip, SemanticError},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
    type_checker::symbol_table::SymbolInfo,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

/// Everything a successful compilation produces.
#[derive(Debug, Clone, Serialize)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub tree: ParseNode,
    /// Every declaration, in source order, including ones from closed scopes.
    pub symbols: Vec<SymbolInfo>,
    /// Semantic errors in discovery order. May be empty.
    pub errors: Vec<SemanticError>,
}

impl Compilation {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

pub type CompileResult = Result<Compilation, Error>;

/// Compiles DR source text.
///
/// Lexical and syntax errors are fatal and returned as `Err`. Semantic
/// errors never abort; they are returned inside the `Compilation`
/// alongside the full tree and symbol log.
pub fn compile(source: &str) -> CompileResult {
    let tokens = tokenize(source)?;
    debug!("tokenized {} tokens", tokens.len());

    let (parser, tree) = parse(tokens.clone());
    let tree = tree?;
    let (symbols, errors) = parser.into_parts();

    Ok(Compilation {
        tokens,
        tree,
        symbols: symbols.into_declared(),
        errors,
    })
}

/// Returns the text of a 1-based line, without its terminator.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.trim_end_matches('\r'))
}

/// Renders a fatal error with the offending source line.
///
/// ```text
/// Syntax error: expected Semicolon but found Identifier ("y") (Unexpected token: `y`, did you miss a semicolon?)
/// -> demo.dr
///   |
/// 3 | file x = 5 y
///   |
/// ```
pub fn format_error(error: &Error, source: &str, file: &Path) -> String {
    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("{} error: {}\n", error.get_phase(), error.get_internal_error()));
    } else {
        out.push_str(&format!(
            "{} error: {} ({})\n",
            error.get_phase(),
            error.get_internal_error(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file.display()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(text) = get_line(source, error.get_line()) {
        out.push_str(&format!("{} | {}\n", line_string, text.trim()));
        out.push_str(&format!("{:>padding$}\n", "|"));
    }

    out
}
