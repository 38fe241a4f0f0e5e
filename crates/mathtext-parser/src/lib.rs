//! Mathtext Parser
//!
//! This crate splits raw content into an ordered list of text and math
//! [`Segment`]s in a single left-to-right scan.
//!
//! # Delimiters
//!
//! - `$$...$$` - display math
//! - `$...$` - inline math
//! - `\$` - a literal dollar sign that never opens or closes math
//!
//! An unterminated delimiter degrades to a literal `$`. An inline span
//! whose content is a plain number (`$100$`) stays text, so prices are not
//! typeset as equations.
//!
//! # Example
//!
//! ```
//! use mathtext_core::SegmentKind;
//! use mathtext_parser::Segmenter;
//!
//! let segments = Segmenter::new().segment("a $x+1$ b $$y=2$$ c");
//! let kinds: Vec<_> = segments.iter().map(|s| s.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         SegmentKind::Text,
//!         SegmentKind::InlineMath,
//!         SegmentKind::Text,
//!         SegmentKind::DisplayMath,
//!         SegmentKind::Text,
//!     ]
//! );
//! assert_eq!(segments[1].value, "x+1");
//! ```

pub mod currency;
mod scan;

pub use currency::is_currency;
pub use mathtext_core::{Segment, SegmentKind, Span};

use scan::{
    find_display_close, find_inline_close, is_escaped_dollar, plain_run_end, SegmentBuilder,
};

/// Splits raw content into text and math segments.
///
/// The segmenter holds only its settings; every call to
/// [`segment`](Self::segment) keeps its cursor locally, so one instance
/// can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    /// Treat `\$` as a literal dollar sign
    pub escaped_dollars: bool,
    /// Keep purely numeric inline spans as text
    pub currency: bool,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Create a segmenter with escaped dollars and currency detection on.
    pub fn new() -> Self {
        Self {
            escaped_dollars: true,
            currency: true,
        }
    }

    /// Create a segmenter with specific settings.
    pub fn with_settings(escaped_dollars: bool, currency: bool) -> Self {
        Self {
            escaped_dollars,
            currency,
        }
    }

    /// Split `content` into segments in source order.
    ///
    /// Consecutive text is merged into one segment. The spans of the
    /// returned segments are contiguous and cover all of `content`.
    pub fn segment(&self, content: &str) -> Vec<Segment> {
        let bytes = content.as_bytes();
        let mut builder = SegmentBuilder::new();
        let mut i = 0;

        while i < bytes.len() {
            if self.escaped_dollars && is_escaped_dollar(bytes, i) {
                builder.push_text("$", i, i + 2);
                i += 2;
                continue;
            }

            if bytes[i] != b'$' {
                let end = plain_run_end(bytes, i + 1);
                builder.push_text(&content[i..end], i, end);
                i = end;
                continue;
            }

            if bytes.get(i + 1) == Some(&b'$') {
                match find_display_close(bytes, i + 2, self.escaped_dollars) {
                    Some(close) => {
                        let span = Span::new(i, close + 2);
                        builder.push_math(Segment::display_math(&content[i + 2..close], span));
                        i = close + 2;
                    }
                    None => {
                        builder.push_text("$", i, i + 1);
                        i += 1;
                    }
                }
                continue;
            }

            match find_inline_close(bytes, i + 1, self.escaped_dollars) {
                Some(close) if close > i + 1 => {
                    let inner = &content[i + 1..close];
                    if self.currency && is_currency(inner) {
                        builder.push_text(&content[i..=close], i, close + 1);
                    } else {
                        let span = Span::new(i, close + 1);
                        builder.push_math(Segment::inline_math(inner, span));
                    }
                    i = close + 1;
                }
                _ => {
                    builder.push_text("$", i, i + 1);
                    i += 1;
                }
            }
        }

        builder.finish()
    }
}

/// Segment `content` with the default settings.
pub fn segment(content: &str) -> Vec<Segment> {
    Segmenter::new().segment(content)
}
