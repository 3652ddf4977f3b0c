//! Parser and semantic analyzer.
//!
//! This module turns a token stream into an annotated parse tree in a
//! single pass. Each production builds its subtree and resolves its type
//! at the same time, checking it against the symbol table:
//!
//! - Statement parsing through a lookup table keyed by the leading token
//! - Expression parsing with NUD (null denotation) and LED (left
//!   denotation) handlers and binding powers for `+ - * /`
//! - Conditions with at most one relational comparison
//!
//! Syntax errors abort the pass. Semantic errors are recorded on the
//! parser and the pass continues with a fallback type.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
