//! User-facing validation errors.
//!
//! Every failure a generation request can produce is one of the variants
//! below, returned as a value; nothing is thrown past the engine boundary.
//! `Display` renders the exact Persian message the presentation layer shows
//! verbatim, numerals already in display form.

use std::fmt;

use crate::numeral::format_int;

/// First-violated-constraint error from request validation.
///
/// Validation evaluates its checks in a fixed precedence and short-circuits,
/// so a request violating several constraints reports only the earliest one:
/// numeral parsing, then domain range checks (`pool_size` bounds, `min <= max`),
/// then count positivity, then the count-versus-pool bound for
/// without-replacement draws.
///
/// # Examples
///
/// ```
/// use picker_core::types::ValidationError;
///
/// let err = ValidationError::CountNotPositive { count: 0 };
/// assert_eq!(err.to_string(), "تعداد خروجی باید حداقل ۱ باشد.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field did not normalise to a parseable integer.
    InvalidNumeral {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Requested pool size outside `[1, total]`.
    PoolSizeOutOfRange {
        /// The requested pool size.
        requested: i64,
        /// Total size of the reference table.
        total: usize,
    },

    /// Lower bound greater than upper bound.
    MinExceedsMax {
        /// Parsed lower bound.
        min: i64,
        /// Parsed upper bound.
        max: i64,
    },

    /// Requested output count below one.
    CountNotPositive {
        /// Parsed count.
        count: i64,
    },

    /// Requested count exceeds the available distinct items.
    CountExceedsPool {
        /// Parsed count.
        count: i64,
        /// Effective pool size the count was checked against.
        available: usize,
    },

    /// Free-text pool contained zero non-empty entries after trimming.
    EmptyUserPool,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumeral { .. } => {
                write!(f, "لطفاً مقادیر معتبر عددی وارد کنید.")
            }
            Self::PoolSizeOutOfRange { total, .. } => {
                write!(
                    f,
                    "تعداد مخزن باید عددی بین ۱ و {} باشد.",
                    format_int(*total as i64)
                )
            }
            Self::MinExceedsMax { .. } => {
                write!(f, "مقدار حداقل نمی‌تواند از حداکثر بیشتر باشد.")
            }
            Self::CountNotPositive { .. } => {
                write!(f, "تعداد خروجی باید حداقل ۱ باشد.")
            }
            Self::CountExceedsPool { available, .. } => {
                write!(
                    f,
                    "تعداد درخواستی از تعداد موارد موجود ({}) بیشتر است.",
                    format_int(*available as i64)
                )
            }
            Self::EmptyUserPool => {
                write!(f, "لطفاً حداقل یک اسم وارد کنید.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_use_display_numerals() {
        let err = ValidationError::PoolSizeOutOfRange {
            requested: 99,
            total: 40,
        };
        assert!(err.to_string().contains("۴۰"));

        let err = ValidationError::CountExceedsPool {
            count: 3,
            available: 2,
        };
        assert!(err.to_string().contains("۲"));
    }

    #[test]
    fn test_variants_carry_offending_values() {
        let err = ValidationError::MinExceedsMax { min: 5, max: 1 };
        assert_eq!(err, ValidationError::MinExceedsMax { min: 5, max: 1 });

        let err = ValidationError::InvalidNumeral { field: "count" };
        assert!(format!("{:?}", err).contains("count"));
    }
}
