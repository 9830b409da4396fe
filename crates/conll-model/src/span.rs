//! Stand-off text spans.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Half-open byte range `[begin, end)` into a document's text.
///
/// Spans order the way an annotation index does: ascending `begin`, and for
/// equal starts the longer span first. Sorting tokens by span therefore gives
/// reading order, and an enclosing annotation sorts before what it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub begin: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Length in bytes (zero for inverted spans).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `other` lies entirely inside this span.
    #[must_use]
    pub const fn covers(&self, other: &Span) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }
}

impl Ord for Span {
    fn cmp(&self, other: &Self) -> Ordering {
        self.begin
            .cmp(&other.begin)
            .then_with(|| other.end.cmp(&self.end))
    }
}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_is_inclusive_of_bounds() {
        let sentence = Span::new(0, 10);
        assert!(sentence.covers(&Span::new(0, 4)));
        assert!(sentence.covers(&Span::new(5, 10)));
        assert!(sentence.covers(&sentence));
        assert!(!sentence.covers(&Span::new(8, 11)));
    }

    #[test]
    fn test_ordering_puts_enclosing_span_first() {
        let mut spans = vec![Span::new(5, 9), Span::new(0, 4), Span::new(0, 9)];
        spans.sort();
        assert_eq!(
            spans,
            vec![Span::new(0, 9), Span::new(0, 4), Span::new(5, 9)]
        );
    }
}
