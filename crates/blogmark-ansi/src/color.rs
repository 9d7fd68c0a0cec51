//! `#rrggbb` colours as 24-bit SGR escapes.

/// A colour read from the `[style]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb`; the leading `#` may be left out.
    ///
    /// # Example
    ///
    /// ```
    /// use blogmark_ansi::color::Rgb;
    /// assert_eq!(Rgb::parse("#87ceeb"), Some(Rgb { r: 0x87, g: 0xce, b: 0xeb }));
    /// assert_eq!(Rgb::parse("skyblue"), None);
    /// ```
    pub fn parse(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Foreground escape.
    pub fn fg(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Background escape.
    pub fn bg(self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Foreground escape for `hex`. A colour that does not parse gives no styling.
pub fn fg_color(hex: &str) -> String {
    Rgb::parse(hex).map(Rgb::fg).unwrap_or_default()
}

/// Background escape for `hex`. A colour that does not parse gives no styling.
pub fn bg_color(hex: &str) -> String {
    Rgb::parse(hex).map(Rgb::bg).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Rgb::parse("#ffffff"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(Rgb::parse("000000"), Some(Rgb { r: 0, g: 0, b: 0 }));
        assert_eq!(Rgb::parse("#fff"), None);
        assert_eq!(Rgb::parse("#gg0000"), None);
        assert_eq!(Rgb::parse("#ééé"), None);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(fg_color("#ff0000"), "\x1b[38;2;255;0;0m");
        assert_eq!(bg_color("#00ff00"), "\x1b[48;2;0;255;0m");
        assert_eq!(fg_color("bad"), "");
        assert_eq!(bg_color(""), "");
    }
}
