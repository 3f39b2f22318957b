//! JSON export of the syntax tree
//!
//! Every node object carries a `"type"` field naming the node; literals are
//! `{"type": "DecimalLiteral", "value": 5}`. Output is pretty-printed with a
//! trailing newline.

use crate::parser::ast::FileNode;

pub fn to_json(file: &FileNode) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(file)?;
    json.push('\n');
    Ok(json)
}

/// The tree as a JSON value, for callers that post-process it.
pub fn to_value(file: &FileNode) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(file)
}
