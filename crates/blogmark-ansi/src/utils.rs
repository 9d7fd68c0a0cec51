//! Measuring styled text.
//!
//! Terminal lines mix printable text with SGR and OSC 8 sequences. Layout
//! works in display columns, so escapes are stripped before measuring and
//! wide characters count double.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// CSI sequences (`ESC [ ... letter`) and OSC 8 links (`ESC ] 8 ;; ... ESC \`).
static ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b(?:\[[0-9;?]*[a-zA-Z]|\][0-9]*;;.*?\x1b\\)").unwrap());

/// `text` with every escape sequence removed.
///
/// # Example
///
/// ```
/// use blogmark_ansi::utils::visible;
/// assert_eq!(visible("\x1b[1mBold\x1b[0m text"), "Bold text");
/// ```
pub fn visible(text: &str) -> String {
    ESCAPE_RE.replace_all(text, "").into_owned()
}

/// Display columns taken by `text` once escapes are removed.
///
/// ```
/// use blogmark_ansi::utils::visible_length;
/// assert_eq!(visible_length("\x1b[1mHello\x1b[0m"), 5);
/// assert_eq!(visible_length("你好"), 4);
/// ```
pub fn visible_length(text: &str) -> usize {
    visible(text).width()
}

/// Display columns taken by text that has no escapes in it.
pub fn plain_width(text: &str) -> usize {
    text.width()
}

/// Pad styled `text` with trailing spaces to `width` display columns.
pub fn pad_to(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_length(text));
    let mut padded = String::with_capacity(text.len() + fill);
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(fill));
    padded
}
