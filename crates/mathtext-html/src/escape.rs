//! HTML escaping utilities.
//!
//! Everything that did not come out of a math typesetter goes through
//! these functions before it reaches the output, which prevents markup
//! injection from the raw content.

/// Escape the five HTML-significant characters.
///
/// `&`, `<`, `>`, `"` and `'` are replaced by entities. The result is
/// safe both as element content and inside a quoted attribute value.
///
/// # Example
/// ```
/// use mathtext_html::escape::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("Tom & 'Jerry'"), "Tom &amp; &#39;Jerry&#39;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 8);
    push_escaped(&mut result, s);
    result
}

/// Append `s` to `out`, HTML-escaped.
pub fn push_escaped(out: &mut String, s: &str) {
    let mut last = 0;
    for (i, b) in s.bytes().enumerate() {
        let entity = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        out.push_str(&s[last..i]);
        out.push_str(entity);
        last = i + 1;
    }
    out.push_str(&s[last..]);
}

/// Escape a run of prose and turn its newlines into `line_break` markup.
///
/// Newlines are converted after escaping so the break token itself is
/// never escaped. A `\r\n` pair counts as one newline.
///
/// # Example
/// ```
/// use mathtext_html::escape::escape_text;
///
/// assert_eq!(escape_text("x > 1\r\ny", "<br/>"), "x &gt; 1<br/>y");
/// ```
pub fn escape_text(s: &str, line_break: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 8);
    let mut lines = s.split('\n').peekable();
    let mut first = true;
    while let Some(line) = lines.next() {
        if !first {
            result.push_str(line_break);
        }
        first = false;
        let line = match lines.peek() {
            Some(_) => line.strip_suffix('\r').unwrap_or(line),
            None => line,
        };
        push_escaped(&mut result, line);
    }
    result
}

/// Normalize a whitespace-separated list of class names for an attribute.
///
/// Runs of whitespace collapse to one space and the result is escaped, so
/// an opaque style hint can never break out of the attribute.
///
/// # Example
/// ```
/// use mathtext_html::escape::escape_class_list;
///
/// assert_eq!(escape_class_list("  a   b\"c "), "a b&quot;c");
/// ```
pub fn escape_class_list(classes: &str) -> String {
    let joined = classes.split_whitespace().collect::<Vec<_>>().join(" ");
    escape_html(&joined)
}
