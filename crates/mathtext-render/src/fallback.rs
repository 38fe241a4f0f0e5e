//! Fallback markup for math that failed to typeset.
//!
//! The source is shown escaped in a code element so a reader can still see
//! what was meant. Inline fallbacks stay inline; display fallbacks are
//! block-level.

use mathtext_core::MathMode;
use mathtext_html::{escape_html, markup::element};

/// Inline fallback: `<code class="..">source</code>`.
pub fn inline_fallback(source: &str, class: &str) -> String {
    element("code", class, &escape_html(source))
}

/// Display fallback: `<div class=".."><code>source</code></div>`.
pub fn display_fallback(source: &str, class: &str) -> String {
    element("div", class, &element("code", "", &escape_html(source)))
}

/// Fallback for either presentation.
///
/// `source` is the trimmed math handed to the typesetter, not the raw span
/// between the delimiters.
pub fn fallback(source: &str, mode: MathMode, inline_class: &str, display_class: &str) -> String {
    match mode {
        MathMode::Inline => inline_fallback(source, inline_class),
        MathMode::Display => display_fallback(source, display_class),
    }
}
