//! Locale numeral normalisation.

use super::PERSIAN_DIGITS;

/// Normalises a raw input string to a canonical ASCII digit string.
///
/// Three things happen, in one pass over the input:
/// - grouping separators (Persian U+066C and the ASCII comma) are dropped,
/// - each Persian digit glyph is replaced by the ASCII digit at the same
///   ordinal position,
/// - every remaining non-digit character is dropped.
///
/// The three operations act on disjoint character classes, so their order
/// is immaterial. Returns an empty string when no digits remain; this is
/// not an error condition, it is how stray keystrokes are silently
/// discarded before validation ever runs.
///
/// Normalisation is idempotent: applying it to an already-canonical string
/// returns the string unchanged.
///
/// # Examples
///
/// ```
/// use picker_core::numeral::normalize;
///
/// assert_eq!(normalize("۱۲۳"), "123");
/// assert_eq!(normalize("۱٬۲۳۴٬۵۶۷"), "1234567");
/// assert_eq!(normalize("1,234"), "1234");
/// assert_eq!(normalize("abc"), "");
/// assert_eq!(normalize(normalize("۴۲").as_str()), "42");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| {
            if c.is_ascii_digit() {
                Some(c)
            } else {
                PERSIAN_DIGITS
                    .iter()
                    .position(|&glyph| glyph == c)
                    .map(|value| char::from(b'0' + value as u8))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_persian_digits_translate() {
        assert_eq!(normalize("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
    }

    #[test]
    fn test_ascii_digits_pass_through() {
        assert_eq!(normalize("0123456789"), "0123456789");
    }

    #[test]
    fn test_separators_stripped() {
        assert_eq!(normalize("۱٬۰۰۰٬۰۰۰"), "1000000");
        assert_eq!(normalize("1,000,000"), "1000000");
    }

    #[test]
    fn test_mixed_glyphs() {
        // Users paste mixed ASCII/Persian input more often than one would hope.
        assert_eq!(normalize("1۲3۴"), "1234");
    }

    #[test]
    fn test_non_digits_discarded() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  42  "), "42");
        assert_eq!(normalize("x1y2z"), "12");
        assert_eq!(normalize("سلام"), "");
        assert_eq!(normalize("-۵"), "5");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn test_idempotence(raw in ".*") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn test_output_is_canonical(raw in ".*") {
            prop_assert!(normalize(&raw).bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
