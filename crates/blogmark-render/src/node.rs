//! Presentation nodes.
//!
//! The block renderer produces these; the terminal and HTML writers consume
//! them. They are plain data and serialise to JSON with a `type` tag.

use blogmark_core::{InlineToken, ListType};
use serde::Serialize;

/// One scanned line of text.
pub type InlineLine = Vec<InlineToken>;

/// A rendered block, ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum RenderNode {
    /// Heading, level always in 1..=6.
    Heading { level: u8, text: String },
    /// Preformatted text with its lines joined by `\n`.
    Preformatted {
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        text: String,
    },
    List { kind: ListType, items: Vec<InlineLine> },
    /// Rows are kept at whatever length they arrived with.
    Table {
        headers: Vec<InlineLine>,
        rows: Vec<Vec<InlineLine>>,
    },
    /// Each line is its own text block.
    Paragraph { lines: Vec<InlineLine> },
    /// Stands in for a block that could not be rendered.
    Diagnostic { kind: String, message: String },
}

impl RenderNode {
    /// Diagnostic for a block kind the renderer does not know.
    pub fn unsupported(kind: &str) -> Self {
        RenderNode::Diagnostic {
            kind: kind.to_string(),
            message: format!("ERROR: unsupported block type {}", kind),
        }
    }

    pub fn is_diagnostic(&self) -> bool {
        matches!(self, RenderNode::Diagnostic { .. })
    }
}

/// Clamp a heading level: 1 to 5 are kept, anything else becomes 6.
///
/// # Example
///
/// ```
/// use blogmark_render::heading_level;
/// assert_eq!(heading_level(2), 2);
/// assert_eq!(heading_level(0), 6);
/// assert_eq!(heading_level(42), 6);
/// ```
pub fn heading_level(level: i64) -> u8 {
    match level {
        1..=5 => level as u8,
        _ => 6,
    }
}
