//! Parser problem index
//!
//! The parser reports problems by attaching an `error` message to nodes of
//! the tree it emits as JSON. This module reads that tree leniently and
//! flattens the error-bearing nodes into a line-keyed index for gutter marks
//! and tooltips.
//!
//! ```text
//! { "type": "0", "children": [
//!     { "type": 19, "error": "bad token", "line": 2, "column": 3 } ] }
//! ```

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// The `type` value the parser gives its dedicated error nodes
pub const ERROR_NODE_TYPE: u64 = 19;

/// Node kind: the dedicated error node, or any other parser node type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Error,
    Other(String),
}

impl NodeKind {
    fn from_json(value: Option<&Value>) -> Self {
        let code = match value {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };
        if code == Some(ERROR_NODE_TYPE) {
            return NodeKind::Error;
        }
        match value {
            Some(Value::String(s)) => NodeKind::Other(s.clone()),
            Some(Value::Null) | None => NodeKind::Other(String::new()),
            Some(other) => NodeKind::Other(other.to_string()),
        }
    }
}

/// A node of the problem tree; children are owned and ordered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemNode {
    pub kind: NodeKind,
    pub name: Option<String>,
    pub value: Option<String>,
    /// 1-based, 0 when the parser did not report it
    pub line: usize,
    /// 1-based, 0 when the parser did not report it
    pub column: usize,
    pub error: Option<String>,
    pub children: Vec<ProblemNode>,
}

/// Read an integer field that may be a number or a numeric string
fn position(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Number(n)) => n.as_u64().map_or(0, |n| n as usize),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}

impl ProblemNode {
    /// Build a node from parser JSON; `None` if `value` is not an object
    ///
    /// Children that are not objects are skipped.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let children: Vec<ProblemNode> = object
            .get("children")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(ProblemNode::from_json).collect())
            .unwrap_or_default();

        Some(Self {
            kind: NodeKind::from_json(object.get("type")),
            name: text(object.get("name")),
            value: text(object.get("value")),
            line: position(object.get("line")),
            column: position(object.get("column")),
            error: text(object.get("error")),
            children,
        })
    }

    /// Check if this node carries a non-empty error message
    pub fn has_error(&self) -> bool {
        self.error.as_deref().map_or(false, |e| !e.is_empty())
    }

    /// Visit this node and its descendants in pre-order
    pub fn preorder(&self) -> impl Iterator<Item = &ProblemNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// A normalized problem record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemEntry {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Problems in tree pre-order, queryable by line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorIndex {
    entries: Vec<ProblemEntry>,
}

impl ErrorIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every error-bearing node of `root`
    ///
    /// The dedicated error node type is not special-cased: it contributes
    /// exactly when it carries a message, like any other node.
    pub fn build(root: &ProblemNode) -> Self {
        let entries: Vec<_> = root
            .preorder()
            .filter(|node| node.has_error())
            .map(|node| ProblemEntry {
                message: node.error.clone().unwrap_or_default(),
                line: node.line,
                column: node.column,
            })
            .collect();
        debug!(problems = entries.len(), "built error index");
        Self { entries }
    }

    /// Build from an already-parsed JSON tree; a non-object root is empty
    pub fn from_json(value: &Value) -> Self {
        ProblemNode::from_json(value)
            .map(|root| Self::build(&root))
            .unwrap_or_default()
    }

    /// Parse JSON text and build the index
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_json(&value))
    }

    /// All entries, in pre-order
    pub fn entries(&self) -> &[ProblemEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if any problem is reported on `line` (1-based)
    pub fn has_error_on_line(&self, line: usize) -> bool {
        self.entries.iter().any(|e| e.line == line)
    }

    /// The first problem reported on `line` (1-based)
    ///
    /// Later problems on the same line are only reachable through
    /// [`ErrorIndex::entries`].
    pub fn first_error_on_line(&self, line: usize) -> Option<&ProblemEntry> {
        self.entries.iter().find(|e| e.line == line)
    }
}
