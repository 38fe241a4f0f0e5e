//! Markup constants and element builders.

/// Default explicit line-break token.
pub const BREAK: &str = "<br/>";

/// Default class for the container produced when a class hint is given.
pub const CONTAINER_CLASS: &str = "math-content";

/// Default class wrapped around successfully rendered display math.
pub const DISPLAY_CLASS: &str = "math-display";

/// Default class for the inline fallback when math fails to typeset.
pub const INLINE_FALLBACK_CLASS: &str = "math-fallback math-fallback-inline";

/// Default class for the block fallback when math fails to typeset.
pub const DISPLAY_FALLBACK_CLASS: &str = "math-fallback math-fallback-display";

/// Build an element around already-safe inner markup.
///
/// `class` is escaped; `inner` is inserted as-is, so callers must only
/// pass markup they have escaped or otherwise trust. An empty class
/// omits the attribute.
///
/// # Example
/// ```
/// use mathtext_html::markup::element;
///
/// assert_eq!(element("div", "a b", "x"), r#"<div class="a b">x</div>"#);
/// assert_eq!(element("code", "", "x"), "<code>x</code>");
/// ```
pub fn element(tag: &str, class: &str, inner: &str) -> String {
    let class = crate::escape::escape_class_list(class);
    let mut out = String::with_capacity(tag.len() * 2 + class.len() + inner.len() + 16);
    out.push('<');
    out.push_str(tag);
    if !class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&class);
        out.push('"');
    }
    out.push('>');
    out.push_str(inner);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

/// Join class lists, skipping empty ones.
///
/// # Example
/// ```
/// use mathtext_html::markup::join_classes;
///
/// assert_eq!(join_classes(&["math-content", "", "text-muted"]), "math-content text-muted");
/// ```
pub fn join_classes(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_escapes_class() {
        assert_eq!(
            element("span", "a\"b", "inner"),
            "<span class=\"a&quot;b\">inner</span>"
        );
    }

    #[test]
    fn test_element_inner_verbatim() {
        assert_eq!(element("div", "k", "<b>x</b>"), "<div class=\"k\"><b>x</b></div>");
    }

    #[test]
    fn test_join_classes_whitespace_only() {
        assert_eq!(join_classes(&["  ", "a"]), "a");
        assert_eq!(join_classes(&[]), "");
    }
}
