//! Preformatted block rendering.
//!
//! Code sits on the dark background, padded to the full width. With pretty
//! padding the block gets half-block borders (▄▄▄ / ▀▀▀) above and below;
//! without it, plain background lines that copy-paste cleanly.

use blogmark_ansi::codes::RESET;
use blogmark_ansi::sanitize::sanitize_for_terminal;
use blogmark_ansi::utils::plain_width;

use crate::{bg_color, fg_color, RenderStyle};

/// Top border character.
pub const CODEPAD_TOP: char = '▄';
/// Bottom border character.
pub const CODEPAD_BOTTOM: char = '▀';

const TAB_WIDTH: usize = 4;

/// Render a preformatted block as terminal lines.
pub fn render_code(
    language: Option<&str>,
    text: &str,
    width: usize,
    left_margin: &str,
    style: &RenderStyle,
    pretty_pad: bool,
) -> Vec<String> {
    let bg = bg_color(&style.dark);
    let mut lines = vec![border(CODEPAD_TOP, width, left_margin, style, pretty_pad)];

    if let Some(lang) = language.filter(|l| !l.is_empty()) {
        let label = format!("[{}]", sanitize_for_terminal(lang));
        let padding = width.saturating_sub(plain_width(&label));
        lines.push(format!(
            "{}{}{}{}{}{}",
            left_margin,
            bg,
            fg_color(&style.symbol),
            label,
            " ".repeat(padding),
            RESET
        ));
    }

    for line in text.split('\n') {
        let line = sanitize_for_terminal(&line.replace('\t', &" ".repeat(TAB_WIDTH)));
        let line = line.trim_end();
        let padding = width.saturating_sub(plain_width(line));
        lines.push(format!(
            "{}{}{}{}{}",
            left_margin,
            bg,
            line,
            " ".repeat(padding),
            RESET
        ));
    }

    lines.push(border(CODEPAD_BOTTOM, width, left_margin, style, pretty_pad));
    lines
}

fn border(pad: char, width: usize, left_margin: &str, style: &RenderStyle, pretty: bool) -> String {
    if pretty {
        // Half blocks in the code background colour over the terminal background.
        format!(
            "{}{}{}{}",
            left_margin,
            fg_color(&style.dark),
            pad.to_string().repeat(width),
            RESET
        )
    } else {
        format!(
            "{}{}{}{}",
            left_margin,
            bg_color(&style.dark),
            " ".repeat(width),
            RESET
        )
    }
}
