//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout compilation:
//!
//! - Fatal lexical and syntax errors, which abort a compilation
//! - Recoverable semantic errors, which are collected and reported together
//! - Error formatting helpers and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
