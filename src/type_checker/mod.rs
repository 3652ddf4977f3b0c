//! Type rules and scope tracking for semantic analysis.
//!
//! DR is checked in the same pass that parses it, so this module holds no
//! tree walker of its own. It provides what the parser consults while it
//! builds the tree:
//!
//! - The symbol table: a stack of lexical frames plus a declaration log
//! - Assignability between declared and inferred types
//! - Result types for arithmetic and relational operators
//! - Condition gating for loops and branches

pub mod symbol_table;
pub mod type_checker;
