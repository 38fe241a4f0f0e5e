//! Core types for mathtext

use crate::enums::SegmentKind;
use serde::{Deserialize, Serialize};

/// Represents a position in the raw content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number in characters (0-indexed)
    pub column: usize,
    /// Byte offset from start
    pub offset: usize,
}

impl Position {
    /// Locate a byte offset within `source`.
    ///
    /// Offsets past the end are clamped to the end of the source.
    pub fn locate(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = source.get(..offset).unwrap_or(source);
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count();
        Self {
            line,
            column,
            offset,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Byte range of a segment in the raw content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span from start and end offsets
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The source text this span covers.
    ///
    /// Returns an empty string if the span does not lie on character
    /// boundaries of `source`.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// One classified chunk of raw content.
///
/// For text segments `value` is the prose with escaped dollars already
/// resolved. For math segments it is the source between the delimiters,
/// untrimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// What the segment is
    pub kind: SegmentKind,
    /// Segment content
    pub value: String,
    /// Where the segment came from, delimiters included
    pub span: Span,
}

impl Segment {
    /// Create a text segment.
    pub fn text(value: impl Into<String>, span: Span) -> Self {
        Self {
            kind: SegmentKind::Text,
            value: value.into(),
            span,
        }
    }

    /// Create an inline math segment.
    pub fn inline_math(value: impl Into<String>, span: Span) -> Self {
        Self {
            kind: SegmentKind::InlineMath,
            value: value.into(),
            span,
        }
    }

    /// Create a display math segment.
    pub fn display_math(value: impl Into<String>, span: Span) -> Self {
        Self {
            kind: SegmentKind::DisplayMath,
            value: value.into(),
            span,
        }
    }

    /// Check if this is a text segment.
    pub fn is_text(&self) -> bool {
        self.kind == SegmentKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_first_line() {
        let pos = Position::locate("abc $x$", 4);
        assert_eq!(pos.line, 0);
        assert_eq!(pos.column, 4);
        assert_eq!(pos.to_string(), "1:5");
    }

    #[test]
    fn test_locate_later_line_counts_chars() {
        let source = "first\nπ = $x$";
        let offset = source.find('$').unwrap();
        let pos = Position::locate(source, offset);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 4);
        assert_eq!(pos.offset, offset);
    }

    #[test]
    fn test_locate_clamps() {
        let pos = Position::locate("ab", 10);
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.column, 2);
    }

    #[test]
    fn test_span() {
        let span = Span::new(3, 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::new(2, 2).is_empty());
        assert_eq!(Span::new(2, 5).slice("a $x$ b"), "$x$");
        assert_eq!(Span::new(0, 1).slice("π"), "");
    }

    #[test]
    fn test_segment_constructors() {
        let seg = Segment::inline_math("x+1", Span::new(0, 5));
        assert_eq!(seg.kind, SegmentKind::InlineMath);
        assert!(!seg.is_text());
        assert!(Segment::text("a", Span::new(0, 1)).is_text());
    }
}
