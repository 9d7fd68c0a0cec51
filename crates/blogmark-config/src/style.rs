//! The `[style]` section: terminal layout and the colour palette.

use serde::{Deserialize, Serialize};

/// Layout and colours for the terminal writer. Colours are `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StyleConfig {
    /// Left margin in characters.
    /// Default: 2
    #[serde(default = "default_margin")]
    pub margin: usize,

    /// Indentation before list markers.
    /// Default: 2
    #[serde(default = "default_list_indent")]
    pub list_indent: usize,

    /// Draw half-block borders above and below code blocks.
    /// Default: true
    #[serde(default = "default_true")]
    pub pretty_pad: bool,

    /// Terminal width override (0 = auto-detect).
    /// Default: 0
    #[serde(default)]
    pub width: usize,

    /// Level 1 and 2 headings.
    #[serde(default = "default_bright")]
    pub bright: String,

    /// Level 3 and 4 headings.
    #[serde(default = "default_head")]
    pub head: String,

    /// Bullets, numbers and table borders.
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Level 6 headings, link URLs and rules.
    #[serde(default = "default_grey")]
    pub grey: String,

    /// Code backgrounds.
    #[serde(default = "default_dark")]
    pub dark: String,

    /// Table header background.
    #[serde(default = "default_mid")]
    pub mid: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            list_indent: default_list_indent(),
            pretty_pad: true,
            width: 0,
            bright: default_bright(),
            head: default_head(),
            symbol: default_symbol(),
            grey: default_grey(),
            dark: default_dark(),
            mid: default_mid(),
        }
    }
}

impl StyleConfig {
    /// The configured width, or the terminal's when it is 0 (80 if that is unknown).
    pub fn effective_width(&self) -> usize {
        if self.width == 0 {
            crossterm::terminal::size()
                .map(|(w, _)| w as usize)
                .unwrap_or(80)
        } else {
            self.width
        }
    }
}

fn default_margin() -> usize {
    2
}

fn default_list_indent() -> usize {
    2
}

fn default_true() -> bool {
    true
}

fn default_bright() -> String {
    "#87ceeb".to_string()
}

fn default_head() -> String {
    "#98fb98".to_string()
}

fn default_symbol() -> String {
    "#dda0dd".to_string()
}

fn default_grey() -> String {
    "#808080".to_string()
}

fn default_dark() -> String {
    "#1a1a2e".to_string()
}

fn default_mid() -> String {
    "#2d2d44".to_string()
}
