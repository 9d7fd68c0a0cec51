//! Terminal writer.
//!
//! Writes presentation nodes to any `Write` as ANSI-styled text, one block
//! after another with a blank line between them.

use std::io::Write;

use blogmark_ansi::codes::{BOLD_OFF, BOLD_ON, RESET};
use blogmark_ansi::sanitize::sanitize_for_terminal;
use blogmark_config::StyleConfig;
use blogmark_core::Result;

use crate::code::render_code;
use crate::heading::render_heading;
use crate::list::render_list;
use crate::node::RenderNode;
use crate::table::render_table;
use crate::text::wrap_inline;
use crate::{fg_color, RenderStyle};

/// Writes presentation nodes as styled terminal text.
pub struct TerminalRenderer<W: Write> {
    writer: W,
    width: usize,
    style: RenderStyle,
    margin: usize,
    list_indent: usize,
    pretty_pad: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a writer with the default style.
    pub fn new(writer: W, width: usize) -> Self {
        Self::with_style(writer, width, RenderStyle::default())
    }

    pub fn with_style(writer: W, width: usize, style: RenderStyle) -> Self {
        Self {
            writer,
            width,
            style,
            margin: 0,
            list_indent: 0,
            pretty_pad: true,
        }
    }

    /// Create a writer from style configuration, resolving the terminal width.
    pub fn from_config(writer: W, config: &StyleConfig) -> Self {
        Self {
            writer,
            width: config.effective_width(),
            style: RenderStyle::from_config(config),
            margin: config.margin,
            list_indent: config.list_indent,
            pretty_pad: config.pretty_pad,
        }
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    pub fn set_pretty_pad(&mut self, enabled: bool) {
        self.pretty_pad = enabled;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Consume the renderer and give back the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn left_margin(&self) -> String {
        " ".repeat(self.margin)
    }

    /// Width left for content after the left margin.
    fn content_width(&self) -> usize {
        self.width.saturating_sub(self.margin).max(1)
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.writer, "{}", line)?;
        }
        Ok(())
    }

    /// Format one node without writing it.
    pub fn format_node(&self, node: &RenderNode) -> Vec<String> {
        let margin = self.left_margin();
        let width = self.content_width();

        match node {
            RenderNode::Heading { level, text } => {
                render_heading(*level, text, width, &margin, &self.style)
            }

            RenderNode::Preformatted { language, text } => render_code(
                language.as_deref(),
                text,
                width,
                &margin,
                &self.style,
                self.pretty_pad,
            ),

            RenderNode::List { kind, items } => {
                render_list(*kind, items, width, &margin, self.list_indent, &self.style)
            }

            RenderNode::Table { headers, rows } => {
                render_table(headers, rows, width, &margin, &self.style)
            }

            RenderNode::Paragraph { lines } => lines
                .iter()
                .flat_map(|line| wrap_inline(line, width, &self.style))
                .map(|line| format!("{}{}", margin, line))
                .collect(),

            RenderNode::Diagnostic { message, .. } => vec![format!(
                "{}{}{}{}{}{}",
                margin,
                BOLD_ON,
                fg_color(&self.style.symbol),
                sanitize_for_terminal(message),
                BOLD_OFF,
                RESET
            )],
        }
    }

    /// Write one node followed by a blank line.
    pub fn write_node(&mut self, node: &RenderNode) -> Result<()> {
        let lines = self.format_node(node);
        self.write_lines(&lines)?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// Write every node in order.
    pub fn write_nodes(&mut self, nodes: &[RenderNode]) -> Result<()> {
        for node in nodes {
            self.write_node(node)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogmark_ansi::utils::visible;
    use blogmark_core::{InlineToken, ListType};

    fn render(nodes: &[RenderNode], width: usize) -> String {
        let mut out = Vec::new();
        TerminalRenderer::new(&mut out, width).write_nodes(nodes).unwrap();
        visible(&String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_paragraph_lines_are_separate() {
        let text = render(
            &[RenderNode::Paragraph {
                lines: vec![
                    vec![InlineToken::plain("first")],
                    vec![InlineToken::plain("second")],
                ],
            }],
            40,
        );
        assert_eq!(text, "first\nsecond\n\n");
    }

    #[test]
    fn test_diagnostic_is_visible() {
        let text = render(&[RenderNode::unsupported("Quote")], 40);
        assert_eq!(text, "ERROR: unsupported block type Quote\n\n");
    }

    #[test]
    fn test_every_node_kind_writes() {
        let nodes = vec![
            RenderNode::Heading {
                level: 3,
                text: "H".to_string(),
            },
            RenderNode::Preformatted {
                language: Some("sh".to_string()),
                text: "ls".to_string(),
            },
            RenderNode::List {
                kind: ListType::Ordered,
                items: vec![vec![InlineToken::plain("a")]],
            },
            RenderNode::Table {
                headers: vec![vec![InlineToken::plain("h")]],
                rows: vec![vec![vec![InlineToken::plain("c")]]],
            },
            RenderNode::Paragraph { lines: Vec::new() },
            RenderNode::unsupported("X"),
        ];
        let text = render(&nodes, 30);
        assert!(text.contains("1. a"));
        assert!(text.contains("[sh]"));
        assert!(text.contains("ERROR"));
    }

    #[test]
    fn test_margin_from_config() {
        let config = StyleConfig {
            width: 40,
            margin: 3,
            ..StyleConfig::default()
        };
        let mut out = Vec::new();
        let mut renderer = TerminalRenderer::from_config(&mut out, &config);
        assert_eq!(renderer.width(), 40);
        renderer
            .write_node(&RenderNode::Paragraph {
                lines: vec![vec![InlineToken::plain("x")]],
            })
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "   x\n\n");
    }

    #[test]
    fn test_tiny_width_does_not_panic() {
        let nodes = vec![
            RenderNode::Heading {
                level: 1,
                text: "Centred".to_string(),
            },
            RenderNode::Table {
                headers: Vec::new(),
                rows: vec![vec![vec![InlineToken::plain("cell")]]],
            },
        ];
        render(&nodes, 0);
    }
}
