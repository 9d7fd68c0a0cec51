//! Blogmark Parser
//!
//! Inline markup scanning for blogmark documents. Block structure arrives
//! pre-parsed from the library, so the only parsing left is within a line:
//! links, inline code and bold text.
//!
//! # Overview
//!
//! - [`FeatureMatcher`] - Finds the first occurrence of one feature
//! - [`InlineScanner`] - Picks the leftmost match of all enabled matchers,
//!   repeatedly, and turns everything between matches into literal text
//! - [`unescape`] - Backslash escape stripping for literal text
//!
//! # Example
//!
//! ```
//! use blogmark_core::InlineToken;
//! use blogmark_parser::parse_line;
//!
//! let tokens = parse_line("There is info at [this link](https://www.google.com) for more");
//! assert_eq!(tokens[1], InlineToken::link("this link", "https://www.google.com"));
//! ```

pub mod escape;
pub mod matcher;
pub mod scanner;

pub use escape::{unescape, ESCAPABLE};
pub use matcher::{matcher_for, FeatureMatcher, MATCHERS};
pub use scanner::{parse_line, InlineScanner};
