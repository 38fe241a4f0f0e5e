//! Low-level scanning helpers.
//!
//! All delimiters are ASCII, so every index these helpers return lies on
//! a character boundary of the scanned string.

use mathtext_core::{Segment, Span};

/// Check for a backslash-escaped dollar at `i`.
pub(crate) fn is_escaped_dollar(bytes: &[u8], i: usize) -> bool {
    bytes.get(i) == Some(&b'\\') && bytes.get(i + 1) == Some(&b'$')
}

/// Find the opening `$` of the closing `$$` for a display span.
///
/// Searching starts at `from`, just past the opening `$$`.
pub(crate) fn find_display_close(bytes: &[u8], from: usize, escapes: bool) -> Option<usize> {
    let mut j = from;
    while j + 1 < bytes.len() {
        if escapes && is_escaped_dollar(bytes, j) {
            j += 2;
            continue;
        }
        if bytes[j] == b'$' && bytes[j + 1] == b'$' {
            return Some(j);
        }
        j += 1;
    }
    None
}

/// Find the closing `$` of an inline span.
///
/// A `$$` pair met on the way is skipped as a whole; only a lone `$`
/// closes the span.
pub(crate) fn find_inline_close(bytes: &[u8], from: usize, escapes: bool) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        if escapes && is_escaped_dollar(bytes, j) {
            j += 2;
            continue;
        }
        if bytes[j] == b'$' {
            if bytes.get(j + 1) == Some(&b'$') {
                j += 2;
                continue;
            }
            return Some(j);
        }
        j += 1;
    }
    None
}

/// Find where the plain run starting at `from` ends.
///
/// The run stops before the next byte that could start a delimiter or an
/// escape.
pub(crate) fn plain_run_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == b'$' || b == b'\\')
        .map(|p| from + p)
        .unwrap_or(bytes.len())
}

/// Accumulates segments, merging consecutive text.
#[derive(Debug, Default)]
pub(crate) struct SegmentBuilder {
    segments: Vec<Segment>,
    text: String,
    text_span: Option<Span>,
}

impl SegmentBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append to the active text run; `start..end` is the source it came from.
    pub(crate) fn push_text(&mut self, value: &str, start: usize, end: usize) {
        self.text.push_str(value);
        self.text_span = Some(match self.text_span {
            Some(span) => Span::new(span.start, end),
            None => Span::new(start, end),
        });
    }

    /// Close the active text run and append a math segment.
    pub(crate) fn push_math(&mut self, segment: Segment) {
        self.flush_text();
        self.segments.push(segment);
    }

    fn flush_text(&mut self) {
        if let Some(span) = self.text_span.take() {
            let text = std::mem::take(&mut self.text);
            self.segments.push(Segment::text(text, span));
        }
    }

    pub(crate) fn finish(mut self) -> Vec<Segment> {
        self.flush_text();
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_display_close() {
        assert_eq!(find_display_close(b"$$x$$", 2, true), Some(3));
        assert_eq!(find_display_close(b"$$x$", 2, true), None);
        assert_eq!(find_display_close(b"$$$$", 2, true), Some(2));
    }

    #[test]
    fn test_find_display_close_skips_escape() {
        assert_eq!(find_display_close(br"$$a\$$b$$", 2, true), Some(7));
        assert_eq!(find_display_close(br"$$a\$$b$$", 2, false), Some(4));
    }

    #[test]
    fn test_find_inline_close() {
        assert_eq!(find_inline_close(b"$x$", 1, true), Some(2));
        assert_eq!(find_inline_close(b"$x", 1, true), None);
        assert_eq!(find_inline_close(b"$a$$b$", 1, true), Some(5));
        assert_eq!(find_inline_close(b"$a$$", 1, true), None);
    }

    #[test]
    fn test_find_inline_close_skips_escape() {
        assert_eq!(find_inline_close(br"$a\$b$", 1, true), Some(5));
        assert_eq!(find_inline_close(br"$a\$b$", 1, false), Some(3));
    }

    #[test]
    fn test_plain_run_end() {
        assert_eq!(plain_run_end(b"abc$d", 0), 3);
        assert_eq!(plain_run_end(br"ab\c", 0), 2);
        assert_eq!(plain_run_end(b"abc", 1), 3);
    }

    #[test]
    fn test_builder_merges_text() {
        let mut builder = SegmentBuilder::new();
        builder.push_text("a", 0, 1);
        builder.push_text("$", 1, 3);
        builder.push_math(Segment::inline_math("x", Span::new(3, 6)));
        builder.push_text("b", 6, 7);
        let segments = builder.finish();
        assert_eq!(
            segments,
            vec![
                Segment::text("a$", Span::new(0, 3)),
                Segment::inline_math("x", Span::new(3, 6)),
                Segment::text("b", Span::new(6, 7)),
            ]
        );
    }
}
