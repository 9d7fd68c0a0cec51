//! Terminal escape helpers for blogmark.
//!
//! - [`codes`]: SGR and OSC 8 sequences
//! - [`color`]: `#rrggbb` colours as 24-bit escapes
//! - [`sanitize`]: stripping control characters and vetting link URLs
//! - [`utils`]: display width of styled text
//!
//! ```
//! use blogmark_ansi::{codes, utils};
//!
//! let text = format!("{}bold text{}", codes::BOLD_ON, codes::BOLD_OFF);
//! assert_eq!(utils::visible_length(&text), 9);
//! ```

pub mod codes;
pub mod color;
pub mod sanitize;
pub mod utils;
