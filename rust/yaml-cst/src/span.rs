// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Span types for tracking source locations.
//!
//! Spans are byte offsets into the (possibly normalized) source buffer. When
//! the buffer handed to the scanner had its `\r\n` line breaks collapsed, an
//! [`OriginMap`] translates offsets back to the original file.

use chumsky::span::{SimpleSpan, Span as _};

/// A span representing a range in the source code.
///
/// This is an alias for chumsky's `SimpleSpan`, which tracks byte offsets.
/// The span is a half-open range `[start, end)`.
pub type Span = SimpleSpan<usize>;

/// Errors raised when building a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SpanError {
    #[display("invalid span: start {start} is past end {end}")]
    InvalidSpan { start: usize, end: usize },
}

impl std::error::Error for SpanError {}

/// Extension methods for [`Span`].
pub trait SpanExt: Sized {
    /// Build a span, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::InvalidSpan`] if `start` is past `end`.
    fn checked(start: usize, end: usize) -> Result<Self, SpanError>;

    /// Returns `true` if the span covers no bytes.
    fn is_zero_width(&self) -> bool;

    /// Translate both endpoints to original-source coordinates.
    ///
    /// `from` is the index into the map's break list at which to begin
    /// searching. Returns the remapped span together with the index reached
    /// for the start endpoint, so that a caller walking spans in source order
    /// can resume from there.
    fn remap_origin(&self, map: &OriginMap, from: usize) -> (Self, usize);
}

impl SpanExt for Span {
    fn checked(start: usize, end: usize) -> Result<Self, SpanError> {
        if start > end {
            return Err(SpanError::InvalidSpan { start, end });
        }
        Ok(Self::new((), start..end))
    }

    fn is_zero_width(&self) -> bool {
        self.start == self.end
    }

    fn remap_origin(&self, map: &OriginMap, from: usize) -> (Self, usize) {
        if map.is_empty() {
            return (*self, from);
        }
        let (start, next) = map.to_original(self.start, from);
        let (end, _) = map.to_original(self.end, next);
        (Self::new((), start..end), next)
    }
}

/// Offset translation between a `\r\n`-normalized buffer and its original.
///
/// Holds the normalized offsets of every `\n` that was preceded by a removed
/// `\r`, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginMap {
    breaks: Vec<usize>,
}

impl OriginMap {
    /// Create a map from the normalized offsets of collapsed line breaks.
    #[must_use]
    pub fn new(mut breaks: Vec<usize>) -> Self {
        breaks.sort_unstable();
        Self { breaks }
    }

    /// Collapse every `\r\n` in `original` to `\n`.
    ///
    /// Returns the normalized buffer and the map back to `original`.
    #[must_use]
    pub fn normalize(original: &str) -> (String, Self) {
        let mut normalized = String::with_capacity(original.len());
        let mut breaks = Vec::new();
        let mut chars = original.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                breaks.push(normalized.len());
                continue;
            }
            normalized.push(ch);
        }
        (normalized, Self { breaks })
    }

    /// Returns `true` if no line break was collapsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    /// Map a normalized offset to the original source.
    ///
    /// The search over the break list starts at index `from`; the index
    /// reached is returned alongside the translated offset.
    #[must_use]
    pub fn to_original(&self, offset: usize, from: usize) -> (usize, usize) {
        let mut idx = from.min(self.breaks.len());
        while self.breaks.get(idx).is_some_and(|&brk| brk < offset) {
            idx += 1;
        }
        (offset + idx, idx)
    }

    /// Map an original-source offset back to the normalized buffer.
    #[must_use]
    pub fn to_normalized(&self, original: usize) -> usize {
        // The i-th collapsed `\r` sits at original offset `breaks[i] + i`.
        let removed = self
            .breaks
            .iter()
            .enumerate()
            .take_while(|&(idx, &brk)| brk + idx < original)
            .count();
        original - removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_span() {
        let span = Span::checked(2, 5).unwrap();
        assert_eq!(span.start, 2);
        assert_eq!(span.end, 5);
        assert!(!span.is_zero_width());
        assert!(Span::checked(3, 3).unwrap().is_zero_width());
    }

    #[test]
    fn test_invalid_span() {
        let err = Span::checked(5, 2).unwrap_err();
        assert_eq!(err, SpanError::InvalidSpan { start: 5, end: 2 });
        assert_eq!(err.to_string(), "invalid span: start 5 is past end 2");
    }

    #[test]
    fn test_normalize_records_breaks() {
        let (normalized, map) = OriginMap::normalize("a\r\nbc\r\nd\ne");
        assert_eq!(normalized, "a\nbc\nd\ne");
        assert_eq!(map, OriginMap::new(vec![1, 4]));
    }

    #[test]
    fn test_remap_without_breaks_is_identity() {
        let map = OriginMap::default();
        let span = Span::checked(1, 4).unwrap();
        assert_eq!(span.remap_origin(&map, 0), (span, 0));
    }

    #[test]
    fn test_remap_origin() {
        let original = "a\r\nbc\r\nd";
        let (normalized, map) = OriginMap::normalize(original);
        // "bc" in the normalized buffer
        let span = Span::checked(2, 4).unwrap();
        assert_eq!(normalized.get(span.start..span.end), Some("bc"));

        let (orig, next) = span.remap_origin(&map, 0);
        assert_eq!(original.get(orig.start..orig.end), Some("bc"));
        assert_eq!(next, 1);

        // "d" resumes the search where "bc" stopped
        let (orig, next) = Span::checked(5, 6).unwrap().remap_origin(&map, next);
        assert_eq!(original.get(orig.start..orig.end), Some("d"));
        assert_eq!(next, 2);
    }

    #[test]
    fn test_remap_round_trip() {
        let original = "key: |\r\n  one\r\n\r\n  two\r\nrest\n";
        let (normalized, map) = OriginMap::normalize(original);
        for start in 0..=normalized.len() {
            for end in start..=normalized.len() {
                let span = Span::checked(start, end).unwrap();
                let (orig, _) = span.remap_origin(&map, 0);
                assert_eq!(map.to_normalized(orig.start), start);
                assert_eq!(map.to_normalized(orig.end), end);
            }
        }
    }
}
