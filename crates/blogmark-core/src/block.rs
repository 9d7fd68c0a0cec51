//! Block nodes: the pre-parsed structural units of a document.
//!
//! Block nodes are produced upstream and arrive as JSON objects tagged by a
//! `type` field. [`BlockNode::from_json`] turns any JSON value into a node
//! without failing: objects of an unknown kind, or whose fields do not fit
//! the known shape, become [`BlockNode::Unsupported`].

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The `type` tags accepted on the wire.
pub const KNOWN_BLOCK_KINDS: [&str; 6] = [
    "Header",
    "Code",
    "OrderedList",
    "UnorderedList",
    "Table",
    "Paragraph",
];

/// One structural document unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BlockNode {
    /// Heading. `level` is kept as given; renderers clamp it.
    Header {
        #[serde(default, deserialize_with = "lenient_level")]
        level: i64,
        content: String,
    },
    /// Preformatted code, one entry per source line.
    #[serde(rename = "Code")]
    CodeBlock {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        language: String,
        #[serde(rename = "code")]
        lines: Vec<String>,
    },
    OrderedList {
        #[serde(rename = "list")]
        items: Vec<String>,
    },
    UnorderedList {
        #[serde(rename = "list")]
        items: Vec<String>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Lines are kept separate; they are never joined.
    Paragraph { lines: Vec<String> },
    /// A block whose kind is not recognised.
    #[serde(skip_deserializing)]
    Unsupported { kind: String },
}

/// Accept any JSON for a heading level; anything that is not a whole number reads as 0.
fn lenient_level<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let level = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    });
    Ok(level.unwrap_or(0))
}

impl BlockNode {
    /// Convert one JSON value into a block node. Never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use blogmark_core::BlockNode;
    /// use serde_json::json;
    ///
    /// let node = BlockNode::from_json(json!({"type": "Header", "level": 2, "content": "Intro"}));
    /// assert_eq!(node, BlockNode::Header { level: 2, content: "Intro".to_string() });
    ///
    /// let node = BlockNode::from_json(json!({"type": "Quote", "text": "hi"}));
    /// assert_eq!(node, BlockNode::Unsupported { kind: "Quote".to_string() });
    /// ```
    pub fn from_json(value: Value) -> Self {
        let kind = match value.get("type") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "<missing type>".to_string(),
        };

        if !KNOWN_BLOCK_KINDS.contains(&kind.as_str()) {
            warn!("unrecognised block kind {:?}", kind);
            return BlockNode::Unsupported { kind };
        }

        match serde_json::from_value::<BlockNode>(value) {
            Ok(node) => node,
            Err(e) => {
                warn!("malformed {} block: {}", kind, e);
                BlockNode::Unsupported { kind }
            }
        }
    }

    /// Convert a JSON array of blocks. A non-array value yields no blocks.
    pub fn list_from_json(value: Value) -> Vec<Self> {
        match value {
            Value::Array(items) => items.into_iter().map(Self::from_json).collect(),
            other => {
                warn!("expected an array of blocks, found {}", json_kind(&other));
                Vec::new()
            }
        }
    }

    /// The wire `type` tag of this node.
    pub fn kind(&self) -> &str {
        match self {
            BlockNode::Header { .. } => "Header",
            BlockNode::CodeBlock { .. } => "Code",
            BlockNode::OrderedList { .. } => "OrderedList",
            BlockNode::UnorderedList { .. } => "UnorderedList",
            BlockNode::Table { .. } => "Table",
            BlockNode::Paragraph { .. } => "Paragraph",
            BlockNode::Unsupported { kind } => kind,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
