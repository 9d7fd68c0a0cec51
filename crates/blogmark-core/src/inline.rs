//! Inline tokens produced by scanning one line of text.

use serde::{Deserialize, Serialize};

use crate::types::Span;

/// One parsed unit within a line, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InlineToken {
    /// Literal text, with escapes already stripped
    PlainText { text: String },
    /// `[description](url)`
    Hyperlink { description: String, url: String },
    /// `` `text` ``
    CodeSpan { text: String },
    /// `**text**`
    Bold { text: String },
}

impl InlineToken {
    /// Build a [`InlineToken::PlainText`].
    pub fn plain(text: impl Into<String>) -> Self {
        InlineToken::PlainText { text: text.into() }
    }

    /// Build a [`InlineToken::Hyperlink`].
    pub fn link(description: impl Into<String>, url: impl Into<String>) -> Self {
        InlineToken::Hyperlink {
            description: description.into(),
            url: url.into(),
        }
    }

    /// Build a [`InlineToken::CodeSpan`].
    pub fn code(text: impl Into<String>) -> Self {
        InlineToken::CodeSpan { text: text.into() }
    }

    /// Build a [`InlineToken::Bold`].
    pub fn bold(text: impl Into<String>) -> Self {
        InlineToken::Bold { text: text.into() }
    }

    /// The text a reader would see for this token.
    pub fn text(&self) -> &str {
        match self {
            InlineToken::PlainText { text }
            | InlineToken::CodeSpan { text }
            | InlineToken::Bold { text } => text,
            InlineToken::Hyperlink { description, .. } => description,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, InlineToken::PlainText { .. })
    }
}

/// A single matcher hit: `[start, end)` of the searched text plus the token it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    pub start: usize,
    pub end: usize,
    pub token: InlineToken,
}

impl InlineMatch {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_text() {
        assert_eq!(InlineToken::plain("a").text(), "a");
        assert_eq!(InlineToken::link("desc", "http://x").text(), "desc");
        assert_eq!(InlineToken::code("x()").text(), "x()");
        assert_eq!(InlineToken::bold("hey").text(), "hey");
    }

    #[test]
    fn test_token_serializes_with_type_tag() {
        let json = serde_json::to_string(&InlineToken::code("ls")).unwrap();
        assert_eq!(json, r#"{"type":"CodeSpan","text":"ls"}"#);
    }

    #[test]
    fn test_match_span() {
        let m = InlineMatch {
            start: 2,
            end: 8,
            token: InlineToken::code("abcd"),
        };
        assert_eq!(m.span(), Span::new(2, 8));
    }
}
