//! Display formatting of canonical values.

use super::{PERSIAN_DECIMAL_SEPARATOR, PERSIAN_DIGITS, PERSIAN_GROUP_SEPARATOR};

/// Renders a digit string in Persian glyphs with fa-IR grouping.
///
/// `digits` must be non-empty ASCII digits without leading zeros.
fn localise_grouped(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len * 3);
    for (i, b) in digits.bytes().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(PERSIAN_GROUP_SEPARATOR);
        }
        out.push(PERSIAN_DIGITS[usize::from(b - b'0')]);
    }
    out
}

/// Formats an integer in display form: Persian digit glyphs with a grouping
/// separator every third digit from the least-significant end.
///
/// Negative values keep a leading ASCII `-`; the input panels only ever
/// produce non-negative canonical numerals, but derived quantities (sums)
/// can be negative.
///
/// # Examples
///
/// ```
/// use picker_core::numeral::format_int;
///
/// assert_eq!(format_int(0), "۰");
/// assert_eq!(format_int(42), "۴۲");
/// assert_eq!(format_int(1_234_567), "۱٬۲۳۴٬۵۶۷");
/// assert_eq!(format_int(-1000), "-۱٬۰۰۰");
/// ```
pub fn format_int(value: i64) -> String {
    let grouped = localise_grouped(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats a canonical digit string in display form.
///
/// Leading zeros are dropped, mirroring numeric display semantics. An empty
/// or non-canonical input maps to an empty display string rather than an
/// error, so a cleared field simply renders as blank.
///
/// # Examples
///
/// ```
/// use picker_core::numeral::format_canonical;
///
/// assert_eq!(format_canonical("1234"), "۱٬۲۳۴");
/// assert_eq!(format_canonical("007"), "۷");
/// assert_eq!(format_canonical("000"), "۰");
/// assert_eq!(format_canonical(""), "");
/// assert_eq!(format_canonical("12x"), "");
/// ```
pub fn format_canonical(canonical: &str) -> String {
    if canonical.is_empty() || !canonical.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }
    let trimmed = canonical.trim_start_matches('0');
    if trimmed.is_empty() {
        return PERSIAN_DIGITS[0].to_string();
    }
    localise_grouped(trimmed)
}

/// Formats a fractional value in display form with at most two fractional
/// digits, trailing zeros trimmed, using the Persian decimal separator.
///
/// This is where the mean's two-decimal rounding lives; the aggregator
/// itself stays exact. Non-finite input maps to an empty string.
///
/// # Examples
///
/// ```
/// use picker_core::numeral::format_decimal;
///
/// assert_eq!(format_decimal(3.2), "۳٫۲");
/// assert_eq!(format_decimal(3.0), "۳");
/// assert_eq!(format_decimal(1.0 / 3.0), "۰٫۳۳");
/// assert_eq!(format_decimal(1234.56), "۱٬۲۳۴٫۵۶");
/// assert_eq!(format_decimal(f64::NAN), "");
/// ```
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    // Work in hundredths so rounding happens exactly once.
    let scaled = (value * 100.0).round() as i64;
    let magnitude = scaled.unsigned_abs();
    let int_part = magnitude / 100;
    let frac_part = magnitude % 100;

    let mut out = String::new();
    if scaled < 0 {
        out.push('-');
    }
    out.push_str(&localise_grouped(&int_part.to_string()));
    if frac_part != 0 {
        out.push(PERSIAN_DECIMAL_SEPARATOR);
        out.push(PERSIAN_DIGITS[(frac_part / 10) as usize]);
        if frac_part % 10 != 0 {
            out.push(PERSIAN_DIGITS[(frac_part % 10) as usize]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::normalize;
    use proptest::prelude::*;

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(format_int(1), "۱");
        assert_eq!(format_int(999), "۹۹۹");
        assert_eq!(format_int(1_000), "۱٬۰۰۰");
        assert_eq!(format_int(999_999), "۹۹۹٬۹۹۹");
        assert_eq!(format_int(1_000_000), "۱٬۰۰۰٬۰۰۰");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_int(-1), "-۱");
        assert_eq!(format_int(-12_345), "-۱۲٬۳۴۵");
    }

    #[test]
    fn test_decimal_rounding_to_two_places() {
        assert_eq!(format_decimal(2.678), "۲٫۶۸");
        assert_eq!(format_decimal(0.005), "۰٫۰۱");
        assert_eq!(format_decimal(-1.5), "-۱٫۵");
        assert_eq!(format_decimal(0.0), "۰");
    }

    #[test]
    fn test_decimal_trailing_zero_trimmed() {
        assert_eq!(format_decimal(2.50), "۲٫۵");
        assert_eq!(format_decimal(2.05), "۲٫۰۵");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        // Formatting then normalising recovers the canonical value.
        #[test]
        fn test_round_trip(n in 0i64..=i64::MAX) {
            prop_assert_eq!(normalize(&format_int(n)), n.to_string());
        }

        #[test]
        fn test_canonical_round_trip(n in 0u32..=u32::MAX) {
            let canonical = n.to_string();
            prop_assert_eq!(normalize(&format_canonical(&canonical)), canonical);
        }
    }
}
