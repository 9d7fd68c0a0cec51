//! Inline text rendering and wrapping.
//!
//! Inline tokens are broken into pieces (words and whitespace runs), each
//! carrying its own ANSI styling, so a line can be wrapped anywhere there
//! is whitespace without losing styles across the break.

use blogmark_ansi::codes::{
    link_open, BGRESET, BOLD_OFF, BOLD_ON, LINK_END, RESET, UNDERLINE_OFF, UNDERLINE_ON,
};
use blogmark_ansi::sanitize::{is_safe_url, sanitize_for_terminal};
use blogmark_ansi::utils::plain_width;
use blogmark_core::InlineToken;

use crate::{bg_color, fg_color, RenderStyle};

/// A word or whitespace run with its styling applied.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Piece {
    text: String,
    width: usize,
    space: bool,
}

#[derive(Default)]
struct Pieces(Vec<Piece>);

impl Pieces {
    /// Add `text` split at whitespace, wrapping every run in `on`/`off`.
    fn push_styled(&mut self, text: &str, on: &str, off: &str) {
        let text = sanitize_for_terminal(text);
        for (run, space) in runs(&text) {
            let width = if space { 1 } else { plain_width(run) };
            let rendered = if space && on.is_empty() {
                " ".to_string()
            } else if space {
                format!("{} {}", on, off)
            } else {
                format!("{}{}{}", on, run, off)
            };
            self.push(Piece {
                text: rendered,
                width,
                space,
            });
        }
    }

    fn push(&mut self, piece: Piece) {
        match self.0.last_mut() {
            // Words that touch must stay on one line.
            Some(last) if !last.space && !piece.space => {
                last.text.push_str(&piece.text);
                last.width += piece.width;
            }
            // Collapse consecutive whitespace.
            Some(last) if last.space && piece.space => {}
            _ => self.0.push(piece),
        }
    }
}

/// Split text into alternating runs of whitespace and non-whitespace.
fn runs(text: &str) -> Vec<(&str, bool)> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        match current {
            Some(kind) if kind != space => {
                result.push((&text[start..i], kind));
                start = i;
            }
            _ => {}
        }
        current = Some(space);
    }

    if let Some(kind) = current {
        result.push((&text[start..], kind));
    }

    result
}

fn pieces(tokens: &[InlineToken], style: &RenderStyle) -> Vec<Piece> {
    let mut out = Pieces::default();

    for token in tokens {
        match token {
            InlineToken::PlainText { text } => out.push_styled(text, "", ""),
            InlineToken::Bold { text } => out.push_styled(text, BOLD_ON, BOLD_OFF),
            InlineToken::CodeSpan { text } => {
                let bg = bg_color(&style.dark);
                out.push_styled(text, &bg, BGRESET);
            }
            InlineToken::Hyperlink { description, url } => {
                if is_safe_url(url) {
                    let on = format!("{}{}", link_open(url), UNDERLINE_ON);
                    let off = format!("{}{}", UNDERLINE_OFF, LINK_END);
                    out.push_styled(description, &on, &off);
                } else {
                    out.push_styled(description, UNDERLINE_ON, UNDERLINE_OFF);
                }
                out.push_styled(" ", "", "");
                let grey = fg_color(&style.grey);
                out.push_styled(&format!("({})", url), &grey, RESET);
            }
        }
    }

    out.0
}

/// Render inline tokens on one line, without wrapping.
///
/// # Example
///
/// ```
/// use blogmark_ansi::utils::visible;
/// use blogmark_core::InlineToken;
/// use blogmark_render::{render_inline, RenderStyle};
///
/// let line = render_inline(
///     &[InlineToken::plain("see "), InlineToken::link("docs", "https://docs.rs")],
///     &RenderStyle::default(),
/// );
/// assert_eq!(visible(&line), "see docs (https://docs.rs)");
/// ```
pub fn render_inline(tokens: &[InlineToken], style: &RenderStyle) -> String {
    pieces(tokens, style)
        .into_iter()
        .map(|piece| piece.text)
        .collect()
}

/// Render inline tokens wrapped to `width` visible columns.
///
/// Breaks only at whitespace; a word wider than `width` gets a line of its
/// own. Always returns at least one line.
pub fn wrap_inline(tokens: &[InlineToken], width: usize, style: &RenderStyle) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut pending_space: Option<Piece> = None;

    for piece in pieces(tokens, style) {
        if piece.space {
            if current_width > 0 {
                pending_space = Some(piece);
            }
            continue;
        }

        let space_width = pending_space.as_ref().map_or(0, |s| s.width);
        if current_width > 0 && current_width + space_width + piece.width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
            pending_space = None;
        }

        if let Some(space) = pending_space.take() {
            current.push_str(&space.text);
            current_width += space.width;
        }
        current.push_str(&piece.text);
        current_width += piece.width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Wrap unstyled text at whitespace to `width` columns.
///
/// A `width` of zero disables wrapping.
pub fn simple_wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            plain_width(word)
        } else {
            plain_width(&current) + 1 + plain_width(word)
        };

        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
