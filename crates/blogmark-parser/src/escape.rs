//! Backslash escapes in literal text.

/// Characters that lose a preceding backslash in literal text.
pub const ESCAPABLE: [char; 6] = ['[', ']', '(', ')', '*', '`'];

/// Strip the backslash from every escaped markup character.
///
/// `\[`, `\]`, `\(`, `\)`, `\*` and `` \` `` become the bare character; any
/// other backslash is kept as is.
///
/// # Example
///
/// ```
/// use blogmark_parser::unescape;
/// assert_eq!(unescape(r"Source \[1\]"), "Source [1]");
/// assert_eq!(unescape(r"C:\temp"), r"C:\temp");
/// ```
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if ESCAPABLE.contains(&next) {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }

    result
}
