//! Blogmark Render
//!
//! This crate turns block nodes into presentation nodes and writes those
//! out as styled terminal text or HTML.
//!
//! # Overview
//!
//! - [`BlockRenderer`] - Total mapping from [`BlockNode`](blogmark_core::BlockNode)
//!   to [`RenderNode`], scanning text-bearing blocks for inline markup
//! - [`TerminalRenderer`] - ANSI output with visible-width aware wrapping
//! - [`to_html`] - HTML fragment output
//!
//! # Example
//!
//! ```
//! use blogmark_core::BlockNode;
//! use blogmark_render::{BlockRenderer, TerminalRenderer};
//!
//! let nodes = BlockRenderer::new().render(&[BlockNode::Paragraph {
//!     lines: vec!["Run `cargo doc` to build the docs.".to_string()],
//! }]);
//!
//! let mut output = Vec::new();
//! TerminalRenderer::new(&mut output, 80).write_nodes(&nodes).unwrap();
//! ```

pub mod block;
pub mod code;
pub mod heading;
pub mod html;
pub mod list;
pub mod node;
pub mod table;
pub mod terminal;
pub mod text;

pub use block::BlockRenderer;
pub use code::{render_code, CODEPAD_BOTTOM, CODEPAD_TOP};
pub use heading::render_heading;
pub use html::{inline_html, to_html};
pub use list::{list_marker, render_list, BULLET};
pub use node::{heading_level, InlineLine, RenderNode};
pub use table::{render_table, TableState};
pub use terminal::TerminalRenderer;
pub use text::{render_inline, simple_wrap, wrap_inline};

pub use blogmark_ansi::color::{bg_color, fg_color};

use blogmark_config::StyleConfig;

/// Colours used by the terminal writer, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    /// Level 1 and 2 headings
    pub bright: String,
    /// Level 3 and 4 headings
    pub head: String,
    /// List markers, table separators, diagnostics
    pub symbol: String,
    /// Level 6 headings, link URLs, rules
    pub grey: String,
    /// Code background and table body
    pub dark: String,
    /// Table header background
    pub mid: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}

impl RenderStyle {
    /// Take the colour palette from style configuration.
    pub fn from_config(config: &StyleConfig) -> Self {
        Self {
            bright: config.bright.clone(),
            head: config.head.clone(),
            symbol: config.symbol.clone(),
            grey: config.grey.clone(),
            dark: config.dark.clone(),
            mid: config.mid.clone(),
        }
    }
}
