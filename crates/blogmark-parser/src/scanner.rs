//! Inline scanner.
//!
//! Splits one line into literal text and recognised markup. At each step
//! every enabled matcher is run against the unscanned suffix and the match
//! that starts earliest wins; the text before it becomes a literal token.
//! Nothing here can fail: markup that does not match stays literal text.

use blogmark_core::{Feature, InlineMatch, InlineToken, Span};

use crate::escape::unescape;
use crate::matcher::{matcher_for, FeatureMatcher, MATCHERS};

/// Scans lines with a fixed set of feature matchers.
#[derive(Debug, Clone)]
pub struct InlineScanner {
    matchers: Vec<&'static FeatureMatcher>,
}

impl Default for InlineScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineScanner {
    /// Create a scanner with every feature enabled.
    pub fn new() -> Self {
        Self {
            matchers: MATCHERS.iter().collect(),
        }
    }

    /// Create a scanner that only recognises `features`.
    ///
    /// Matchers keep their tie-break order regardless of the order given here.
    pub fn with_features(features: &[Feature]) -> Self {
        Self {
            matchers: Feature::ALL
                .into_iter()
                .filter(|f| features.contains(f))
                .map(matcher_for)
                .collect(),
        }
    }

    /// The features this scanner recognises, in tie-break order.
    pub fn features(&self) -> Vec<Feature> {
        self.matchers.iter().map(|m| m.feature).collect()
    }

    /// Parse a line into inline tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use blogmark_core::InlineToken;
    /// use blogmark_parser::InlineScanner;
    ///
    /// let tokens = InlineScanner::new().scan("Use `ls` here");
    /// assert_eq!(
    ///     tokens,
    ///     vec![
    ///         InlineToken::plain("Use "),
    ///         InlineToken::code("ls"),
    ///         InlineToken::plain(" here"),
    ///     ]
    /// );
    /// ```
    pub fn scan(&self, line: &str) -> Vec<InlineToken> {
        self.scan_spans(line)
            .into_iter()
            .map(|(_, token)| token)
            .collect()
    }

    /// Parse a line into inline tokens, each paired with the byte range of
    /// `line` it was produced from.
    ///
    /// The spans are contiguous and cover the whole line. A literal prefix is
    /// only emitted when it is non-empty; the final literal suffix is always
    /// emitted, with an empty span at the end of the line when nothing is left.
    pub fn scan_spans(&self, line: &str) -> Vec<(Span, InlineToken)> {
        let mut tokens = Vec::new();
        let mut cursor = 0;

        while let Some(found) = self.leftmost(&line[cursor..]) {
            let start = cursor + found.start;
            let end = cursor + found.end;

            if start > cursor {
                let prefix = &line[cursor..start];
                tokens.push((Span::new(cursor, start), InlineToken::plain(unescape(prefix))));
            }
            tokens.push((Span::new(start, end), found.token));

            // Every pattern consumes at least one byte.
            debug_assert!(end > cursor);
            cursor = end;
        }

        tokens.push((
            Span::new(cursor, line.len()),
            InlineToken::plain(unescape(&line[cursor..])),
        ));

        tokens
    }

    /// The earliest-starting match across all matchers, first matcher winning ties.
    fn leftmost(&self, text: &str) -> Option<InlineMatch> {
        let mut earliest: Option<InlineMatch> = None;

        for matcher in &self.matchers {
            if let Some(candidate) = matcher.try_match(text) {
                let better = earliest
                    .as_ref()
                    .map_or(true, |current| candidate.start < current.start);
                if better {
                    earliest = Some(candidate);
                }
            }
        }

        earliest
    }
}

/// Parse a line with every feature enabled.
///
/// # Example
///
/// ```
/// use blogmark_core::InlineToken;
/// use blogmark_parser::parse_line;
///
/// assert_eq!(
///     parse_line(r"The prompt \(PS2\) will be shown."),
///     vec![InlineToken::plain("The prompt (PS2) will be shown.")]
/// );
/// ```
pub fn parse_line(line: &str) -> Vec<InlineToken> {
    InlineScanner::new().scan(line)
}
