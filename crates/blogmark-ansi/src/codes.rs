//! SGR and OSC 8 sequences used by the terminal writer.

/// Clears every attribute.
pub const RESET: &str = "\x1b[0m";

/// Restores the terminal's own background.
pub const BGRESET: &str = "\x1b[49m";

pub const BOLD_ON: &str = "\x1b[1m";
/// Normal intensity.
pub const BOLD_OFF: &str = "\x1b[22m";

pub const UNDERLINE_ON: &str = "\x1b[4m";
pub const UNDERLINE_OFF: &str = "\x1b[24m";

/// Opens an OSC 8 hyperlink; the URL and [`ST`] follow.
pub const LINK_START: &str = "\x1b]8;;";

/// String terminator.
pub const ST: &str = "\x1b\\";

/// Closes an OSC 8 hyperlink.
pub const LINK_END: &str = "\x1b]8;;\x1b\\";

/// The OSC 8 sequence that makes following text a link to `url`.
///
/// The caller is responsible for checking the URL with
/// [`is_safe_url`](crate::sanitize::is_safe_url) first.
pub fn link_open(url: &str) -> String {
    format!("{}{}{}", LINK_START, url, ST)
}
