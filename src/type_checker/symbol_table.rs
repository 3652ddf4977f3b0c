use std::{collections::HashMap, fmt::Display};

use log::{debug, warn};
use serde::Serialize;

use crate::ast::types::DataType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolInfo {
    pub name: String,
    pub data_type: DataType,
    pub line: usize,
}

impl Display for SymbolInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {} (line {})", self.name, self.data_type, self.line)
    }
}

/// A single lexical frame.
#[derive(Debug, Default)]
pub struct Environment {
    pub variable_lookup: HashMap<String, SymbolInfo>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&SymbolInfo> {
        self.variable_lookup.get(variable_name)
    }
}

/// Scope stack plus a flat log of every declaration ever made.
///
/// Frames are pushed on block and function entry and popped on exit. The
/// log keeps entries from popped frames for reporting; lookups only ever
/// consult live frames.
#[derive(Debug)]
pub struct SymbolTable {
    environments: Vec<Environment>,
    declared: Vec<SymbolInfo>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates a table with the global frame already open.
    pub fn new() -> Self {
        SymbolTable {
            environments: vec![Environment::new()],
            declared: vec![],
        }
    }

    pub fn enter_scope(&mut self) {
        self.environments.push(Environment::new());
        debug!("entered scope (depth {})", self.environments.len());
    }

    /// Pops the innermost frame. The global frame stays open.
    pub fn exit_scope(&mut self) {
        if self.environments.len() > 1 {
            self.environments.pop();
            debug!("exited scope (depth {})", self.environments.len());
        } else {
            warn!("attempted to exit the global scope");
        }
    }

    pub fn depth(&self) -> usize {
        self.environments.len()
    }

    /// Declares `name` in the innermost frame.
    ///
    /// Fails with the existing declaration when the name is already bound in
    /// that same frame. Names bound in outer frames are shadowed.
    pub fn declare(&mut self, name: &str, data_type: DataType, line: usize) -> Result<(), SymbolInfo> {
        let innermost = self.environments.len() - 1;
        let current = &mut self.environments[innermost];

        if let Some(existing) = current.get_variable(name) {
            return Err(existing.clone());
        }

        let symbol = SymbolInfo {
            name: name.to_string(),
            data_type,
            line,
        };
        current.variable_lookup.insert(name.to_string(), symbol.clone());
        self.declared.push(symbol);
        Ok(())
    }

    /// Innermost binding of `name` among the live frames.
    pub fn lookup(&self, name: &str) -> Option<&SymbolInfo> {
        self.environments
            .iter()
            .rev()
            .find_map(|environment| environment.get_variable(name))
    }

    pub fn all_declared(&self) -> &[SymbolInfo] {
        &self.declared
    }

    pub fn into_declared(self) -> Vec<SymbolInfo> {
        self.declared
    }
}
