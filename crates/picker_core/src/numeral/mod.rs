//! Persian-locale numeral handling.
//!
//! Two directions, deliberately asymmetric:
//!
//! - [`normalize`] maps any user-typed string to a **canonical numeral**: a
//!   string of ASCII digits only, no separators. It is the sole way back
//!   from display form to something parseable.
//! - [`format_int`], [`format_canonical`] and [`format_decimal`] render
//!   canonical values in **display form**: Persian digit glyphs with fa-IR
//!   grouping. Display strings are presentation-only and must never be
//!   parsed directly; round-trip through [`normalize`] instead.
//!
//! All functions here are pure and total. Malformed input produces an empty
//! string, never an error, so intermediate keystrokes can be re-normalised
//! on every edit without surfacing failures.

mod format;
mod normalize;

pub use format::{format_canonical, format_decimal, format_int};
pub use normalize::normalize;

/// The ten Persian digit glyphs (U+06F0 through U+06F9), ordered by value.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Persian thousands separator (U+066C), inserted every third digit.
pub const PERSIAN_GROUP_SEPARATOR: char = '٬';

/// Persian decimal separator (U+066B), used by [`format_decimal`].
pub const PERSIAN_DECIMAL_SEPARATOR: char = '٫';
