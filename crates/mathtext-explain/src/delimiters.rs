//! Repair of math that arrives without `$` delimiters.
//!
//! Generated explanations sometimes contain bare LaTeX such as
//! `\frac{1}{2}mv^2` with no delimiters, which the renderer would show as
//! prose. Lines that look like standalone equations are wrapped as display
//! math; text that already uses `$` anywhere is trusted as-is.

use regex::{Regex, RegexSet};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Constructs that mark a string as containing LaTeX.
static LATEX_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"\\frac\{[^}]+\}\{[^}]+\}",
        r"\\sqrt\{[^}]+\}",
        r"\\text\{[^}]+\}",
        r"\\Delta\s*\w+",
        r"\\vec\{[^}]+\}",
        r"\\(?:sum|int|prod)",
        r"\\(?:alpha|beta|gamma|theta|omega|lambda|mu|sigma|pi)",
        r"\\(?:times|div|pm|mp|cdot)",
        r"\\(?:leq|geq|neq|approx)",
        r"\^\{[^}]+\}|_\{[^}]+\}",
    ])
    .unwrap()
});

static COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\[a-zA-Z]").unwrap());

/// Check whether `text` contains recognizable LaTeX.
pub fn has_latex(text: &str) -> bool {
    LATEX_PATTERNS.is_match(text)
}

/// Wrap bare equations in `$$...$$`.
///
/// Text containing any `$` is returned unchanged, as is text with no
/// recognizable LaTeX. Otherwise each line that starts with a backslash
/// command, or has an `=` alongside one, becomes `$$line$$` (trimmed).
///
/// # Example
/// ```
/// use mathtext_explain::ensure_latex_delimiters;
///
/// let text = "Kinetic energy:\n\\frac{1}{2}mv^2";
/// assert_eq!(ensure_latex_delimiters(text), "Kinetic energy:\n$$\\frac{1}{2}mv^2$$");
/// assert_eq!(ensure_latex_delimiters("$x$ and \\pi"), "$x$ and \\pi");
/// ```
pub fn ensure_latex_delimiters(text: &str) -> Cow<'_, str> {
    if text.contains('$') || !has_latex(text) {
        return Cow::Borrowed(text);
    }

    let lines: Vec<Cow<'_, str>> = text
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if is_equation_line(trimmed) {
                Cow::Owned(format!("$${}$$", trimmed))
            } else {
                Cow::Borrowed(line)
            }
        })
        .collect();

    Cow::Owned(lines.join("\n"))
}

fn is_equation_line(trimmed: &str) -> bool {
    let starts_with_command = trimmed
        .strip_prefix('\\')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic());
    starts_with_command || (trimmed.contains('=') && COMMAND_RE.is_match(trimmed))
}

/// Apply [`ensure_latex_delimiters`] to every string in a JSON value.
///
/// Object keys and non-string scalars are left alone.
pub fn repair_value(value: Value) -> Value {
    match value {
        Value::String(s) => match ensure_latex_delimiters(&s) {
            Cow::Borrowed(_) => Value::String(s),
            Cow::Owned(repaired) => Value::String(repaired),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(repair_value).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, repair_value(value)))
                .collect(),
        ),
        other => other,
    }
}
