//! Style configuration.
//!
//! This module contains the `StyleConfig` struct which holds the
//! class names and tokens used when assembling markup.

use mathtext_html::markup;
use serde::{Deserialize, Serialize};

/// Style configuration.
///
/// Class names are emitted as-is into `class` attributes (escaped);
/// the renderer never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StyleConfig {
    /// Class of the container produced for a class hint.
    /// Default: "math-content"
    #[serde(default = "default_container_class")]
    pub container_class: String,

    /// Class of the block wrapped around rendered display math.
    /// Default: "math-display"
    #[serde(default = "default_display_class")]
    pub display_class: String,

    /// Class of the inline fallback for math that failed to typeset.
    #[serde(default = "default_inline_fallback_class")]
    pub inline_fallback_class: String,

    /// Class of the block fallback for math that failed to typeset.
    #[serde(default = "default_display_fallback_class")]
    pub display_fallback_class: String,

    /// Markup inserted for each newline in text.
    /// Default: "<br/>"
    #[serde(default = "default_line_break")]
    pub line_break: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            container_class: default_container_class(),
            display_class: default_display_class(),
            inline_fallback_class: default_inline_fallback_class(),
            display_fallback_class: default_display_fallback_class(),
            line_break: default_line_break(),
        }
    }
}

fn default_container_class() -> String {
    markup::CONTAINER_CLASS.to_string()
}

fn default_display_class() -> String {
    markup::DISPLAY_CLASS.to_string()
}

fn default_inline_fallback_class() -> String {
    markup::INLINE_FALLBACK_CLASS.to_string()
}

fn default_display_fallback_class() -> String {
    markup::DISPLAY_FALLBACK_CLASS.to_string()
}

fn default_line_break() -> String {
    markup::BREAK.to_string()
}
