//! Feature matchers.
//!
//! Each matcher recognises one inline markup pattern anywhere in a piece of
//! text and reports the first occurrence. The set is closed and small, so it
//! is a static table of `{feature, pattern, builder}` records rather than a
//! trait hierarchy.

use blogmark_core::{Feature, InlineMatch, InlineToken};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for links: `[description](url)`
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Regex for inline code: `` `contents` ``
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Regex for bold: `**contents**`, where contents may hold escaped asterisks
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*{2}((?:[^*]|\\\*)+)\*{2}").unwrap());

/// A stateless rule recognising one inline feature.
pub struct FeatureMatcher {
    pub feature: Feature,
    pattern: &'static LazyLock<Regex>,
    build: fn(&Captures<'_>) -> InlineToken,
}

impl std::fmt::Debug for FeatureMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureMatcher")
            .field("feature", &self.feature)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

impl FeatureMatcher {
    /// Find the first occurrence of this feature in `text`.
    ///
    /// Offsets in the result are byte offsets into `text`.
    pub fn try_match(&self, text: &str) -> Option<InlineMatch> {
        let caps = self.pattern.captures(text)?;
        let whole = caps.get(0)?;
        Some(InlineMatch {
            start: whole.start(),
            end: whole.end(),
            token: (self.build)(&caps),
        })
    }
}

fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

fn build_link(caps: &Captures<'_>) -> InlineToken {
    InlineToken::link(group(caps, 1), group(caps, 2))
}

fn build_code(caps: &Captures<'_>) -> InlineToken {
    InlineToken::code(group(caps, 1))
}

fn build_bold(caps: &Captures<'_>) -> InlineToken {
    // Only the first escaped asterisk is unescaped.
    InlineToken::bold(group(caps, 1).replacen(r"\*", "*", 1))
}

/// All matchers, in tie-break order.
pub static MATCHERS: [FeatureMatcher; 3] = [
    FeatureMatcher {
        feature: Feature::Link,
        pattern: &LINK_RE,
        build: build_link,
    },
    FeatureMatcher {
        feature: Feature::Code,
        pattern: &CODE_RE,
        build: build_code,
    },
    FeatureMatcher {
        feature: Feature::Bold,
        pattern: &BOLD_RE,
        build: build_bold,
    },
];

/// Look up the matcher for a feature.
pub fn matcher_for(feature: Feature) -> &'static FeatureMatcher {
    match feature {
        Feature::Link => &MATCHERS[0],
        Feature::Code => &MATCHERS[1],
        Feature::Bold => &MATCHERS[2],
    }
}
