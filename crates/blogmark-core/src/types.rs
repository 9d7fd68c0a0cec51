//! Core types for blogmark

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// First byte covered
    pub start: usize,
    /// One past the last byte covered
    pub end: usize,
}

impl Span {
    /// Create a new span from start and end offsets
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} after end {}", start, end);
        Self { start, end }
    }

    /// Number of bytes covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers nothing.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shift both ends right by `offset`.
    pub fn shifted(self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(3, 10).len(), 7);
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    fn test_span_shifted() {
        assert_eq!(Span::new(1, 2).shifted(10), Span::new(11, 12));
    }
}
