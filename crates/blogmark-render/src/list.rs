//! List rendering.
//!
//! Bulleted items get `•`; ordered items are numbered from 1 with the
//! numbers right-aligned. Continuation lines of a wrapped item line up with
//! the item text.

use blogmark_ansi::codes::RESET;
use blogmark_ansi::utils::plain_width;
use blogmark_core::ListType;

use crate::node::InlineLine;
use crate::text::wrap_inline;
use crate::{fg_color, RenderStyle};

/// Bullet for unordered items.
pub const BULLET: &str = "•";

/// The marker text for item `index` (zero based) of a list with `count` items.
pub fn list_marker(kind: ListType, index: usize, count: usize) -> String {
    match kind {
        ListType::Bullet => BULLET.to_string(),
        ListType::Ordered => {
            let digits = count.max(1).to_string().len();
            format!("{:>width$}.", index + 1, width = digits)
        }
    }
}

/// Render a list as terminal lines.
pub fn render_list(
    kind: ListType,
    items: &[InlineLine],
    width: usize,
    left_margin: &str,
    indent: usize,
    style: &RenderStyle,
) -> Vec<String> {
    let fg = fg_color(&style.symbol);
    let lead = " ".repeat(indent);
    let mut lines = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let marker = list_marker(kind, index, items.len());
        let marker_width = plain_width(&marker);
        let hang = " ".repeat(marker_width + 1);
        let text_width = width.saturating_sub(indent + marker_width + 1).max(1);

        for (i, line) in wrap_inline(item, text_width, style).into_iter().enumerate() {
            if i == 0 {
                lines.push(format!(
                    "{}{}{}{}{} {}",
                    left_margin, lead, fg, marker, RESET, line
                ));
            } else {
                lines.push(format!("{}{}{}{}", left_margin, lead, hang, line));
            }
        }
    }

    lines
}
