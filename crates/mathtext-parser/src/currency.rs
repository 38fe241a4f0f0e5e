//! Currency detection for inline math candidates.

use regex::Regex;
use std::sync::LazyLock;

/// Check whether an inline span's content is a plain amount of money.
///
/// Digits with at most one `.` or `,` separator followed by more digits,
/// after trimming surrounding whitespace. `$100$` and `$2,50$` match;
/// `$x$`, `$1.2.3$` and `$100 and $` do not.
///
/// # Example
/// ```
/// use mathtext_parser::currency::is_currency;
///
/// assert!(is_currency("100"));
/// assert!(is_currency(" 9.99 "));
/// assert!(!is_currency("x+1"));
/// ```
pub fn is_currency(content: &str) -> bool {
    static CURRENCY_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[0-9]+([.,][0-9]+)?$").unwrap());

    CURRENCY_RE.is_match(content.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert!(is_currency("5"));
        assert!(is_currency("100"));
        assert!(is_currency("  200\n"));
    }

    #[test]
    fn test_decimal_separators() {
        assert!(is_currency("3.50"));
        assert!(is_currency("3,50"));
    }

    #[test]
    fn test_rejects_math() {
        assert!(!is_currency("x"));
        assert!(!is_currency("1+1"));
        assert!(!is_currency("100 and "));
        assert!(!is_currency("-5"));
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        assert!(!is_currency(""));
        assert!(!is_currency("   "));
        assert!(!is_currency("1.2.3"));
        assert!(!is_currency("1,000.50"));
        assert!(!is_currency(".5"));
        assert!(!is_currency("5."));
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        assert!(!is_currency("١٠٠"));
    }
}
