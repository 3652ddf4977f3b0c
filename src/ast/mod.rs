/// Parse tree module
/// Contains the annotated tree produced by the parser
///
/// Submodules:
/// - ast: The parse node and its rendering
/// - types: Type tags attached to nodes and symbols
pub mod ast;
pub mod types;
