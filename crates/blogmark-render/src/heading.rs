//! Heading rendering.
//!
//! - h1: bold, bright, centred, preceded by a blank line
//! - h2: bold, bright, preceded by a blank line
//! - h3: bold, head colour
//! - h4: head colour
//! - h5: symbol colour
//! - h6: grey

use blogmark_ansi::codes::{BOLD_OFF, BOLD_ON, RESET};
use blogmark_ansi::sanitize::sanitize_for_terminal;
use blogmark_ansi::utils::plain_width;

use crate::text::simple_wrap;
use crate::{fg_color, RenderStyle};

/// Render a heading as terminal lines.
///
/// `level` is expected in 1..=6; anything above 6 is drawn like h6.
pub fn render_heading(
    level: u8,
    text: &str,
    width: usize,
    left_margin: &str,
    style: &RenderStyle,
) -> Vec<String> {
    let text = sanitize_for_terminal(text);
    let (colour, bold) = match level {
        1 | 2 => (&style.bright, true),
        3 => (&style.head, true),
        4 => (&style.head, false),
        5 => (&style.symbol, false),
        _ => (&style.grey, false),
    };
    let fg = fg_color(colour);
    let (on, off) = if bold { (BOLD_ON, BOLD_OFF) } else { ("", "") };

    let mut lines = Vec::new();
    if level <= 2 {
        lines.push(String::new());
    }

    for line in simple_wrap(&text, width) {
        let indent = if level == 1 {
            " ".repeat(width.saturating_sub(plain_width(&line)) / 2)
        } else {
            String::new()
        };
        lines.push(format!(
            "{}{}{}{}{}{}{}",
            left_margin, indent, on, fg, line, off, RESET
        ));
    }

    lines
}
