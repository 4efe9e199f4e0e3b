//! Source location tracking for diagnostics and tree nodes.
//!
//! Provides [`Span`] to track where tokens, nodes, and diagnostics occur in
//! source text.

use std::fmt;

/// A half-open byte range of source text, plus the line and column where it
/// starts.
///
/// Offsets are byte offsets into the source buffer. Line and column are
/// 1-indexed; columns count bytes, like rustc.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first byte covered.
    pub start: u32,
    /// Byte offset one past the last byte covered.
    pub end: u32,
    /// Line number of `start` (1-indexed).
    pub line: u32,
    /// Column number of `start` (1-indexed, byte-based).
    pub col: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub fn new(start: u32, end: u32, line: u32, col: u32) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            line,
            col,
        }
    }

    /// Create a zero-length span at a position.
    #[inline]
    pub fn point(offset: u32, line: u32, col: u32) -> Self {
        Self {
            start: offset,
            end: offset,
            line,
            col,
        }
    }

    /// Whether this span is empty (zero length).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The length of this span in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Merge two spans into the smallest span covering both.
    ///
    /// Line and column are taken from whichever span starts first.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let (first, _) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            col: first.col,
        }
    }

    /// Whether `other` lies entirely within this span.
    #[inline]
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The byte range covered, for slicing the source.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}@{}:{}", self.start, self.end, self.line, self.col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_basics() {
        let span = Span::new(4, 14, 1, 5);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());

        let empty = Span::point(4, 1, 5);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn span_display() {
        let span = Span::new(40, 45, 3, 15);
        assert_eq!(format!("{}", span), "3:15");
    }

    #[test]
    fn span_debug_separates_offsets_from_position() {
        let span = Span::new(40, 45, 3, 15);
        assert_eq!(format!("{:?}", span), "40..45@3:15");
    }

    #[test]
    fn span_merge_ordered() {
        let first = Span::new(4, 7, 1, 5);
        let second = Span::new(9, 12, 1, 10);
        let merged = first.merge(second);

        assert_eq!(merged.start, 4);
        assert_eq!(merged.end, 12);
        assert_eq!(merged.col, 5);
    }

    #[test]
    fn span_merge_reverse_order() {
        let later = Span::new(20, 25, 2, 3);
        let earlier = Span::new(2, 6, 1, 3);
        let merged = later.merge(earlier);

        assert_eq!(merged.start, 2);
        assert_eq!(merged.end, 25);
        assert_eq!(merged.line, 1);
    }

    #[test]
    fn span_merge_with_point() {
        let span = Span::new(4, 14, 1, 5);
        let point = Span::point(8, 1, 9);
        assert_eq!(span.merge(point), span);
    }

    #[test]
    fn span_contains() {
        let outer = Span::new(0, 10, 1, 1);
        assert!(outer.contains(Span::new(2, 5, 1, 3)));
        assert!(outer.contains(Span::point(10, 1, 11)));
        assert!(!outer.contains(Span::new(8, 12, 1, 9)));
    }

    #[test]
    fn span_range_slices_source() {
        let source = ": sq dup * ;";
        let span = Span::new(2, 4, 1, 3);
        assert_eq!(&source[span.range()], "sq");
    }
}
