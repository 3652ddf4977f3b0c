use std::{fmt::Display, slice::Iter};

use serde::Serialize;

use super::types::DataType;

/// Parse Node
///
/// One node of the annotated parse tree. Each node owns its children, so
/// the tree has a single owner and is walked strictly top-down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseNode {
    pub label: String,
    pub data_type: DataType,
    pub line: usize,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Creates a childless node typed `void`.
    pub fn new(label: impl Into<String>, line: usize) -> Self {
        ParseNode {
            label: label.into(),
            data_type: DataType::Void,
            line,
            children: vec![],
        }
    }

    pub fn typed(label: impl Into<String>, line: usize, data_type: DataType) -> Self {
        ParseNode {
            data_type,
            ..ParseNode::new(label, line)
        }
    }

    pub fn push(&mut self, child: ParseNode) {
        self.children.push(child);
    }

    pub fn iter(&self) -> Iter<'_, ParseNode> {
        self.children.iter()
    }

    /// Depth-first search for the first node with the given label,
    /// including this one.
    pub fn find(&self, label: &str) -> Option<&ParseNode> {
        if self.label == label {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(label))
    }

    /// Indented rendering, two spaces per level.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, 0);
        out
    }

    fn write_pretty(&self, out: &mut String, indent: usize) {
        out.push_str(&"  ".repeat(indent));
        out.push_str(&self.to_string());
        out.push('\n');
        for child in &self.children {
            child.write_pretty(out, indent + 1);
        }
    }
}

impl Display for ParseNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {} (line {})", self.label, self.data_type, self.line)
    }
}
