//! Keeping library text from driving the terminal.
//!
//! Document text and URLs come from a JSON file. Anything written to the
//! terminal goes through [`sanitize_for_terminal`] first. Only URLs accepted
//! by [`is_safe_url`] become links, as OSC 8 in the terminal or `<a href>` in
//! HTML.

/// Schemes that may become clickable links.
const LINK_SCHEMES: [&str; 4] = ["http://", "https://", "mailto:", "file://"];

/// Drop control characters other than newline and tab.
///
/// # Example
/// ```
/// use blogmark_ansi::sanitize::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("Hello\x1b[31mWorld"), "Hello[31mWorld");
/// ```
pub fn sanitize_for_terminal(s: &str) -> String {
    s.chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .collect()
}

/// Whether `url` may be embedded in an OSC 8 hyperlink.
///
/// # Example
/// ```
/// use blogmark_ansi::sanitize::is_safe_url;
///
/// assert!(is_safe_url("https://www.google.com"));
/// assert!(!is_safe_url("javascript:alert(1)"));
/// assert!(!is_safe_url("https://evil.com\x1b]0;pwned\x07"));
/// ```
pub fn is_safe_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    LINK_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
        && !url.chars().any(char::is_control)
}
