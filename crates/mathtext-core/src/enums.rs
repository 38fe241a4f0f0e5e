//! Classification enums for segmented content.

use serde::{Deserialize, Serialize};

/// The kind of a segment produced while scanning raw content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    /// Plain prose, HTML-escaped on output
    Text,
    /// Math delimited by single `$`
    InlineMath,
    /// Math delimited by `$$`
    DisplayMath,
}

impl SegmentKind {
    /// The presentation mode for math segments, `None` for text.
    pub fn math_mode(self) -> Option<MathMode> {
        match self {
            SegmentKind::Text => None,
            SegmentKind::InlineMath => Some(MathMode::Inline),
            SegmentKind::DisplayMath => Some(MathMode::Display),
        }
    }

    /// Check if this is a math segment.
    pub fn is_math(self) -> bool {
        self.math_mode().is_some()
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentKind::Text => write!(f, "text"),
            SegmentKind::InlineMath => write!(f, "inline-math"),
            SegmentKind::DisplayMath => write!(f, "display-math"),
        }
    }
}

/// How a math expression is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathMode {
    /// Flows within a line of text
    Inline,
    /// Rendered as its own block
    Display,
}

impl MathMode {
    /// Whether this is display (block) presentation.
    pub fn is_display(self) -> bool {
        matches!(self, MathMode::Display)
    }
}

impl std::fmt::Display for MathMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathMode::Inline => write!(f, "inline"),
            MathMode::Display => write!(f, "display"),
        }
    }
}
