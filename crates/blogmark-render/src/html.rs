//! HTML writer.
//!
//! Produces a fragment of HTML for a sequence of presentation nodes, one
//! element per node. All text and attribute values are escaped.

use blogmark_ansi::sanitize::is_safe_url;
use blogmark_core::{InlineToken, ListType};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::node::{InlineLine, RenderNode};

/// Render nodes as an HTML fragment, one element per line of output.
///
/// # Example
///
/// ```
/// use blogmark_core::InlineToken;
/// use blogmark_render::{to_html, RenderNode};
///
/// let html = to_html(&[RenderNode::Paragraph {
///     lines: vec![vec![InlineToken::plain("a < b")]],
/// }]);
/// assert_eq!(html, "<p>a &lt; b</p>\n");
/// ```
pub fn to_html(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &RenderNode) {
    match node {
        RenderNode::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            out.push_str(&format!("<h{}>{}</h{}>\n", level, encode_text(text), level));
        }

        RenderNode::Preformatted { language, text } => {
            match language {
                Some(lang) => out.push_str(&format!(
                    "<pre><code class=\"language-{}\">",
                    encode_double_quoted_attribute(lang)
                )),
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&encode_text(text));
            out.push_str("</code></pre>\n");
        }

        RenderNode::List { kind, items } => {
            let tag = match kind {
                ListType::Ordered => "ol",
                ListType::Bullet => "ul",
            };
            out.push_str(&format!("<{}>\n", tag));
            for item in items {
                out.push_str(&format!("<li>{}</li>\n", inline_html(item)));
            }
            out.push_str(&format!("</{}>\n", tag));
        }

        RenderNode::Table { headers, rows } => {
            out.push_str("<table>\n");
            if !headers.is_empty() {
                out.push_str("<thead>\n");
                write_row(out, headers, "th");
                out.push_str("</thead>\n");
            }
            out.push_str("<tbody>\n");
            for row in rows {
                write_row(out, row, "td");
            }
            out.push_str("</tbody>\n</table>\n");
        }

        RenderNode::Paragraph { lines } => {
            for line in lines {
                out.push_str(&format!("<p>{}</p>\n", inline_html(line)));
            }
        }

        RenderNode::Diagnostic { message, .. } => {
            out.push_str(&format!("<p class=\"error\">{}</p>\n", encode_text(message)));
        }
    }
}

fn write_row(out: &mut String, cells: &[InlineLine], tag: &str) {
    out.push_str("<tr>");
    for cell in cells {
        out.push_str(&format!("<{}>{}</{}>", tag, inline_html(cell), tag));
    }
    out.push_str("</tr>\n");
}

/// Render one line of inline tokens as HTML.
///
/// A link whose URL does not have a safe scheme keeps its description as
/// plain text and gets no `<a>`.
pub fn inline_html(tokens: &[InlineToken]) -> String {
    tokens
        .iter()
        .map(|token| match token {
            InlineToken::PlainText { text } => encode_text(text).into_owned(),
            InlineToken::Hyperlink { description, url } if is_safe_url(url) => format!(
                "<a href=\"{}\" target=\"_blank\">{}</a>",
                encode_double_quoted_attribute(url),
                encode_text(description)
            ),
            InlineToken::Hyperlink { description, .. } => encode_text(description).into_owned(),
            InlineToken::CodeSpan { text } => format!("<code>{}</code>", encode_text(text)),
            InlineToken::Bold { text } => format!("<b>{}</b>", encode_text(text)),
        })
        .collect()
}
