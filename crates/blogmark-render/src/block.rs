//! Block renderer.
//!
//! Turns block nodes into presentation nodes, one for one. The match over
//! block kinds is total: every node produces output, and a kind that cannot
//! be rendered produces a diagnostic instead of an error.

use blogmark_config::FeaturesConfig;
use blogmark_core::{BlockNode, DataAccess, ListType};
use blogmark_parser::InlineScanner;
use log::trace;

use crate::node::{heading_level, InlineLine, RenderNode};

/// Renders block nodes, scanning text-bearing nodes for inline markup.
#[derive(Debug, Clone, Default)]
pub struct BlockRenderer {
    scanner: InlineScanner,
}

impl BlockRenderer {
    /// Create a renderer that recognises every inline feature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer around a configured scanner.
    pub fn with_scanner(scanner: InlineScanner) -> Self {
        Self { scanner }
    }

    /// Create a renderer honouring the feature switches from configuration.
    pub fn from_features(features: &FeaturesConfig) -> Self {
        Self::with_scanner(InlineScanner::with_features(&features.enabled()))
    }

    pub fn scanner(&self) -> &InlineScanner {
        &self.scanner
    }

    /// Render a sequence of blocks, one presentation node per block.
    ///
    /// # Example
    ///
    /// ```
    /// use blogmark_core::BlockNode;
    /// use blogmark_render::{BlockRenderer, RenderNode};
    ///
    /// let nodes = BlockRenderer::new().render(&[BlockNode::Header {
    ///     level: 9,
    ///     content: "Deep".to_string(),
    /// }]);
    /// assert_eq!(nodes, vec![RenderNode::Heading { level: 6, text: "Deep".to_string() }]);
    /// ```
    pub fn render(&self, blocks: &[BlockNode]) -> Vec<RenderNode> {
        blocks.iter().map(|block| self.render_block(block)).collect()
    }

    /// Render a single block.
    pub fn render_block(&self, block: &BlockNode) -> RenderNode {
        trace!("rendering {} block", block.kind());

        match block {
            BlockNode::Header { level, content } => RenderNode::Heading {
                level: heading_level(*level),
                text: content.clone(),
            },

            BlockNode::CodeBlock { language, lines } => RenderNode::Preformatted {
                language: (!language.is_empty()).then(|| language.clone()),
                text: lines.join("\n"),
            },

            BlockNode::OrderedList { items } => RenderNode::List {
                kind: ListType::Ordered,
                items: self.scan_lines(items),
            },

            BlockNode::UnorderedList { items } => RenderNode::List {
                kind: ListType::Bullet,
                items: self.scan_lines(items),
            },

            BlockNode::Table { headers, rows } => RenderNode::Table {
                headers: self.scan_lines(headers),
                rows: rows.iter().map(|row| self.scan_lines(row)).collect(),
            },

            BlockNode::Paragraph { lines } => RenderNode::Paragraph {
                lines: self.scan_lines(lines),
            },

            BlockNode::Unsupported { kind } => RenderNode::unsupported(kind),
        }
    }

    /// Fetch a document and render it. Unknown language or title renders nothing.
    pub fn render_document<A>(&self, access: &A, language: &str, title: &str) -> Vec<RenderNode>
    where
        A: DataAccess + ?Sized,
    {
        self.render(&access.get_document(language, title))
    }

    /// Render every document in the store, grouped under a heading per
    /// language and a heading per title.
    ///
    /// A language listed more than once is only rendered the first time.
    pub fn render_hub<A>(&self, access: &A) -> Vec<RenderNode>
    where
        A: DataAccess + ?Sized,
    {
        let mut nodes = Vec::new();
        let mut seen: Vec<String> = Vec::new();

        for language in access.list_languages() {
            if seen.contains(&language) {
                continue;
            }
            nodes.push(RenderNode::Heading {
                level: 1,
                text: language.clone(),
            });
            for title in access.list_titles(&language) {
                nodes.push(RenderNode::Heading {
                    level: 2,
                    text: title.clone(),
                });
                nodes.extend(self.render_document(access, &language, &title));
            }
            seen.push(language);
        }

        nodes
    }

    fn scan_lines(&self, lines: &[String]) -> Vec<InlineLine> {
        lines.iter().map(|line| self.scanner.scan(line)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogmark_core::{Feature, InlineToken};

    struct OneDoc;

    impl DataAccess for OneDoc {
        fn list_languages(&self) -> Vec<String> {
            vec!["Rust".to_string()]
        }

        fn list_titles(&self, language: &str) -> Vec<String> {
            if language == "Rust" {
                vec!["Ownership".to_string()]
            } else {
                Vec::new()
            }
        }

        fn get_document(&self, language: &str, title: &str) -> Vec<BlockNode> {
            if language == "Rust" && title == "Ownership" {
                vec![BlockNode::Paragraph {
                    lines: vec!["Values have `one` owner.".to_string()],
                }]
            } else {
                Vec::new()
            }
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_keeps_raw_content() {
        let node = BlockRenderer::new().render_block(&BlockNode::Header {
            level: 1,
            content: "Use `cargo` **now**".to_string(),
        });
        assert_eq!(
            node,
            RenderNode::Heading {
                level: 1,
                text: "Use `cargo` **now**".to_string()
            }
        );
    }

    #[test]
    fn test_header_level_out_of_range() {
        let renderer = BlockRenderer::new();
        for level in [0, 6, 7, -1, 100] {
            let node = renderer.render_block(&BlockNode::Header {
                level,
                content: "h".to_string(),
            });
            assert!(matches!(node, RenderNode::Heading { level: 6, .. }));
        }
    }

    #[test]
    fn test_code_block_joins_lines() {
        let node = BlockRenderer::new().render_block(&BlockNode::CodeBlock {
            language: "rust".to_string(),
            lines: strings(&["fn main() {", "    // `not scanned`", "}"]),
        });
        assert_eq!(
            node,
            RenderNode::Preformatted {
                language: Some("rust".to_string()),
                text: "fn main() {\n    // `not scanned`\n}".to_string(),
            }
        );
    }

    #[test]
    fn test_code_block_without_language() {
        let node = BlockRenderer::new().render_block(&BlockNode::CodeBlock {
            language: String::new(),
            lines: Vec::new(),
        });
        assert_eq!(
            node,
            RenderNode::Preformatted {
                language: None,
                text: String::new(),
            }
        );
    }

    #[test]
    fn test_lists_scan_each_item() {
        let renderer = BlockRenderer::new();
        let items = strings(&["plain", "with `code`"]);

        let ordered = renderer.render_block(&BlockNode::OrderedList {
            items: items.clone(),
        });
        let bullet = renderer.render_block(&BlockNode::UnorderedList { items });

        let expected_items = vec![
            vec![InlineToken::plain("plain")],
            vec![
                InlineToken::plain("with "),
                InlineToken::code("code"),
                InlineToken::plain(""),
            ],
        ];
        assert_eq!(
            ordered,
            RenderNode::List {
                kind: ListType::Ordered,
                items: expected_items.clone(),
            }
        );
        assert_eq!(
            bullet,
            RenderNode::List {
                kind: ListType::Bullet,
                items: expected_items,
            }
        );
    }

    #[test]
    fn test_table_with_ragged_rows() {
        let node = BlockRenderer::new().render_block(&BlockNode::Table {
            headers: strings(&["Name", "Value"]),
            rows: vec![
                strings(&["a"]),
                strings(&["b", "2", "extra"]),
                Vec::new(),
            ],
        });
        match node {
            RenderNode::Table { headers, rows } => {
                assert_eq!(headers.len(), 2);
                let lengths: Vec<usize> = rows.iter().map(Vec::len).collect();
                assert_eq!(lengths, vec![1, 3, 0]);
                assert_eq!(rows[1][2], vec![InlineToken::plain("extra")]);
            }
            other => panic!("expected a table, got {:?}", other),
        }
    }

    #[test]
    fn test_paragraph_lines_stay_separate() {
        let node = BlockRenderer::new().render_block(&BlockNode::Paragraph {
            lines: strings(&["first line", "second **line**"]),
        });
        assert_eq!(
            node,
            RenderNode::Paragraph {
                lines: vec![
                    vec![InlineToken::plain("first line")],
                    vec![
                        InlineToken::plain("second "),
                        InlineToken::bold("line"),
                        InlineToken::plain(""),
                    ],
                ],
            }
        );
    }

    #[test]
    fn test_unsupported_block_renders_diagnostic() {
        let nodes = BlockRenderer::new().render(&[
            BlockNode::Unsupported {
                kind: "Blockquote".to_string(),
            },
            BlockNode::Paragraph {
                lines: strings(&["still rendered"]),
            },
        ]);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0], RenderNode::unsupported("Blockquote"));
        assert!(!nodes[1].is_diagnostic());
    }

    #[test]
    fn test_render_empty_document() {
        assert!(BlockRenderer::new().render(&[]).is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let blocks = vec![
            BlockNode::Paragraph {
                lines: strings(&["[a](b) `c` **d**"]),
            },
            BlockNode::Table {
                headers: strings(&["x"]),
                rows: vec![strings(&["`y`"])],
            },
        ];
        let renderer = BlockRenderer::new();
        assert_eq!(renderer.render(&blocks), renderer.render(&blocks));
    }

    #[test]
    fn test_render_document_through_access() {
        let renderer = BlockRenderer::new();
        let nodes = renderer.render_document(&OneDoc, "Rust", "Ownership");
        assert_eq!(nodes.len(), 1);

        assert!(renderer.render_document(&OneDoc, "Rust", "Lifetimes").is_empty());
        assert!(renderer.render_document(&OneDoc, "Go", "Ownership").is_empty());
    }

    #[test]
    fn test_render_document_through_trait_object() {
        let access: &dyn DataAccess = &OneDoc;
        let nodes = BlockRenderer::new().render_document(access, "Rust", "Ownership");
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_render_hub_groups_by_language() {
        let nodes = BlockRenderer::new().render_hub(&OneDoc);
        assert_eq!(nodes.len(), 3);
        assert_eq!(
            nodes[0],
            RenderNode::Heading {
                level: 1,
                text: "Rust".to_string()
            }
        );
        assert_eq!(
            nodes[1],
            RenderNode::Heading {
                level: 2,
                text: "Ownership".to_string()
            }
        );
        assert!(matches!(nodes[2], RenderNode::Paragraph { .. }));
    }

    #[test]
    fn test_from_features_disables_matchers() {
        let features = FeaturesConfig {
            links: true,
            code: false,
            bold: true,
        };
        let renderer = BlockRenderer::from_features(&features);
        assert_eq!(renderer.scanner().features(), vec![Feature::Link, Feature::Bold]);

        let node = renderer.render_block(&BlockNode::Paragraph {
            lines: strings(&["`literal`"]),
        });
        assert_eq!(
            node,
            RenderNode::Paragraph {
                lines: vec![vec![InlineToken::plain("`literal`")]],
            }
        );
    }
}
