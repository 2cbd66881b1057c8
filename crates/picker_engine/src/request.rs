//! Generation requests and their validation.
//!
//! One request type per generation panel. Fields that come from numeric
//! form inputs are carried as raw strings in display or canonical form;
//! `validate()` normalises and parses them, then checks the panel's
//! constraints in a fixed precedence, returning the **first** violation:
//!
//! 1. every required numeral field parses to an integer (`InvalidNumeral`),
//! 2. domain range checks: `pool_size` within `[1, total]`
//!    (`PoolSizeOutOfRange`), `min <= max` (`MinExceedsMax`),
//! 3. `count >= 1` (`CountNotPositive`),
//! 4. for without-replacement panels, `count` fits the effective pool
//!    (`CountExceedsPool`); the free-text pool must be non-empty before
//!    that bound can be checked (`EmptyUserPool`).
//!
//! Validation is pure and total: no panics, no partial state, the same
//! fields always produce the same verdict. On success each request yields
//! a typed params struct carrying parsed integers plus the resolved
//! effective pool.

use picker_core::numeral::normalize;
use picker_core::types::{Discipline, ValidationError};
use picker_pools::{Alphabet, Color, Jurisdiction, COLORS, COUNTRIES};

/// Normalises and parses one required numeral field.
fn parse_field(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    normalize(raw)
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumeral { field })
}

fn check_count_positive(count: i64) -> Result<usize, ValidationError> {
    if count < 1 {
        return Err(ValidationError::CountNotPositive { count });
    }
    Ok(count as usize)
}

fn check_count_within(count: usize, available: usize) -> Result<(), ValidationError> {
    if count > available {
        return Err(ValidationError::CountExceedsPool {
            count: count as i64,
            available,
        });
    }
    Ok(())
}

/// Dice panel request: roll `count` dice.
///
/// Faces are fixed at `1..=6` and each die is drawn independently, so the
/// only constraint is a positive count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRequest {
    /// Requested number of dice, raw numeral field.
    pub count: String,
}

/// Validated dice parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceParams {
    /// Number of dice to roll.
    pub count: usize,
}

impl DiceRequest {
    /// Validates the request. See the module docs for the precedence.
    pub fn validate(&self) -> Result<DiceParams, ValidationError> {
        let count = parse_field("count", &self.count)?;
        let count = check_count_positive(count)?;
        Ok(DiceParams { count })
    }

    /// Dice draw independently; repeats are expected.
    pub fn discipline(&self) -> Discipline {
        Discipline::WithReplacement
    }
}

/// Ranged-integer panel request: `count` uniform draws from `[min, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangedRequest {
    /// Lower bound, raw numeral field.
    pub min: String,
    /// Upper bound, raw numeral field.
    pub max: String,
    /// Requested number of draws, raw numeral field.
    pub count: String,
}

/// Validated ranged-integer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangedParams {
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
    /// Number of draws.
    pub count: usize,
}

impl RangedRequest {
    /// Validates the request. Numeral fields parse in panel order
    /// (`min`, `max`, `count`) before any range check runs, so a request
    /// violating several constraints reports the earliest failure only.
    pub fn validate(&self) -> Result<RangedParams, ValidationError> {
        let min = parse_field("min", &self.min)?;
        let max = parse_field("max", &self.max)?;
        let count = parse_field("count", &self.count)?;
        if min > max {
            return Err(ValidationError::MinExceedsMax { min, max });
        }
        let count = check_count_positive(count)?;
        Ok(RangedParams { min, max, count })
    }

    /// Ranged draws are independent; repeats are expected.
    pub fn discipline(&self) -> Discipline {
        Discipline::WithReplacement
    }
}

/// Letter panel request: `count` letters from one alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRequest {
    /// Which alphabet to draw from.
    pub alphabet: Alphabet,
    /// Requested number of letters, raw numeral field.
    pub count: String,
}

/// Validated letter parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterParams {
    /// Resolved alphabet.
    pub alphabet: Alphabet,
    /// Number of letters to draw.
    pub count: usize,
}

impl LetterRequest {
    /// Validates the request; letters draw with replacement, so the count
    /// is not bounded by the alphabet size.
    pub fn validate(&self) -> Result<LetterParams, ValidationError> {
        let count = parse_field("count", &self.count)?;
        let count = check_count_positive(count)?;
        Ok(LetterParams {
            alphabet: self.alphabet,
            count,
        })
    }

    /// Letter draws are independent; repeats are expected.
    pub fn discipline(&self) -> Discipline {
        Discipline::WithReplacement
    }
}

/// Name panel request: `count` names from a caller-supplied list.
///
/// The pool is free text: entries are trimmed and blanks dropped, but
/// duplicates are deliberately kept. Uniqueness of results holds at the
/// pool-index level only; two identical entries can both be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRequest {
    /// Raw user-entered pool entries.
    pub entries: Vec<String>,
    /// Requested number of names, raw numeral field.
    pub count: String,
}

/// Validated name parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParams {
    /// Trimmed, non-empty pool entries in original order.
    pub entries: Vec<String>,
    /// Number of names to draw.
    pub count: usize,
}

impl NameRequest {
    /// Validates the request. The trimmed pool must be non-empty before
    /// the count-versus-pool bound can be checked, so `EmptyUserPool`
    /// outranks `CountExceedsPool` but not `CountNotPositive`.
    pub fn validate(&self) -> Result<NameParams, ValidationError> {
        let count = parse_field("count", &self.count)?;
        let count = check_count_positive(count)?;
        let entries: Vec<String> = self
            .entries
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(String::from)
            .collect();
        if entries.is_empty() {
            return Err(ValidationError::EmptyUserPool);
        }
        check_count_within(count, entries.len())?;
        Ok(NameParams { entries, count })
    }

    /// Names draw without replacement.
    pub fn discipline(&self) -> Discipline {
        Discipline::WithoutReplacement
    }
}

/// Country panel request: `count` countries from the full table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRequest {
    /// Requested number of countries, raw numeral field.
    pub count: String,
}

/// Validated country parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryParams {
    /// Number of countries to draw.
    pub count: usize,
}

impl CountryRequest {
    /// Validates the request against the full country table.
    pub fn validate(&self) -> Result<CountryParams, ValidationError> {
        let count = parse_field("count", &self.count)?;
        let count = check_count_positive(count)?;
        check_count_within(count, COUNTRIES.len())?;
        Ok(CountryParams { count })
    }

    /// Countries draw without replacement.
    pub fn discipline(&self) -> Discipline {
        Discipline::WithoutReplacement
    }
}

/// Region panel request: `count` regions from one jurisdiction's table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRequest {
    /// Which jurisdiction's table to draw from.
    pub jurisdiction: Jurisdiction,
    /// Requested number of regions, raw numeral field.
    pub count: String,
}

/// Validated region parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionParams {
    /// Resolved jurisdiction.
    pub jurisdiction: Jurisdiction,
    /// Number of regions to draw.
    pub count: usize,
}

impl RegionRequest {
    /// Validates the request against the selected jurisdiction's table.
    pub fn validate(&self) -> Result<RegionParams, ValidationError> {
        let count = parse_field("count", &self.count)?;
        let count = check_count_positive(count)?;
        check_count_within(count, self.jurisdiction.regions().len())?;
        Ok(RegionParams {
            jurisdiction: self.jurisdiction,
            count,
        })
    }

    /// Regions draw without replacement.
    pub fn discipline(&self) -> Discipline {
        Discipline::WithoutReplacement
    }
}

/// Color panel request: `count` colors from a prefix of the color table.
///
/// This is the one panel with a configurable pool: `pool_size` restricts
/// consideration to the first N table entries. When absent, the whole
/// table is the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRequest {
    /// Optional pool restriction, raw numeral field.
    pub pool_size: Option<String>,
    /// Requested number of colors, raw numeral field.
    pub count: String,
}

/// Validated color parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorParams {
    /// The effective pool: a prefix slice of the color table.
    pub pool: &'static [Color],
    /// Number of colors to draw.
    pub count: usize,
}

impl ColorRequest {
    /// Validates the request. Numeral fields parse in panel order
    /// (`pool_size`, `count`); the pool bound is then checked before count
    /// positivity per the fixed precedence.
    pub fn validate(&self) -> Result<ColorParams, ValidationError> {
        let pool_size = match &self.pool_size {
            Some(raw) => parse_field("pool_size", raw)?,
            None => COLORS.len() as i64,
        };
        let count = parse_field("count", &self.count)?;
        if pool_size < 1 || pool_size > COLORS.len() as i64 {
            return Err(ValidationError::PoolSizeOutOfRange {
                requested: pool_size,
                total: COLORS.len(),
            });
        }
        let count = check_count_positive(count)?;
        let pool = &COLORS[..pool_size as usize];
        check_count_within(count, pool.len())?;
        Ok(ColorParams { pool, count })
    }

    /// Colors draw without replacement.
    pub fn discipline(&self) -> Discipline {
        Discipline::WithoutReplacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persian_numerals_accepted() {
        let request = RangedRequest {
            min: "۱".to_string(),
            max: "۱٬۰۰۰".to_string(),
            count: "۵".to_string(),
        };
        let params = request.validate().unwrap();
        assert_eq!(params.min, 1);
        assert_eq!(params.max, 1000);
        assert_eq!(params.count, 5);
    }

    #[test]
    fn test_unparseable_field_reports_invalid_numeral() {
        let request = RangedRequest {
            min: "abc".to_string(),
            max: "10".to_string(),
            count: "0".to_string(),
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::InvalidNumeral { field: "min" })
        );
    }

    #[test]
    fn test_empty_field_reports_invalid_numeral() {
        let request = DiceRequest {
            count: String::new(),
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::InvalidNumeral { field: "count" })
        );
    }

    // The canonical precedence scenario: min > max and count = 0 both hold,
    // but the range check outranks count positivity.
    #[test]
    fn test_range_check_outranks_count_check() {
        let request = RangedRequest {
            min: "5".to_string(),
            max: "1".to_string(),
            count: "0".to_string(),
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::MinExceedsMax { min: 5, max: 1 })
        );
    }

    #[test]
    fn test_numeral_check_outranks_range_check() {
        let request = ColorRequest {
            pool_size: Some("0".to_string()),
            count: "x".to_string(),
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::InvalidNumeral { field: "count" })
        );
    }

    #[test]
    fn test_count_not_positive() {
        let request = LetterRequest {
            alphabet: Alphabet::Persian,
            count: "۰".to_string(),
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::CountNotPositive { count: 0 })
        );
    }

    #[test]
    fn test_pool_size_bounds() {
        let too_small = ColorRequest {
            pool_size: Some("0".to_string()),
            count: "1".to_string(),
        };
        assert_eq!(
            too_small.validate(),
            Err(ValidationError::PoolSizeOutOfRange {
                requested: 0,
                total: COLORS.len(),
            })
        );

        let too_large = ColorRequest {
            pool_size: Some((COLORS.len() + 1).to_string()),
            count: "1".to_string(),
        };
        assert!(matches!(
            too_large.validate(),
            Err(ValidationError::PoolSizeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_color_pool_is_table_prefix() {
        let request = ColorRequest {
            pool_size: Some("۱۰".to_string()),
            count: "3".to_string(),
        };
        let params = request.validate().unwrap();
        assert_eq!(params.pool.len(), 10);
        assert_eq!(params.pool[0], COLORS[0]);
    }

    #[test]
    fn test_color_pool_defaults_to_full_table() {
        let request = ColorRequest {
            pool_size: None,
            count: "1".to_string(),
        };
        assert_eq!(request.validate().unwrap().pool.len(), COLORS.len());
    }

    #[test]
    fn test_count_exceeds_pool() {
        let request = NameRequest {
            entries: vec!["Ali".to_string(), "Sara".to_string()],
            count: "3".to_string(),
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::CountExceedsPool {
                count: 3,
                available: 2,
            })
        );
    }

    #[test]
    fn test_blank_entries_trimmed_out() {
        let request = NameRequest {
            entries: vec!["  ".to_string(), String::new(), "\t".to_string()],
            count: "1".to_string(),
        };
        assert_eq!(request.validate(), Err(ValidationError::EmptyUserPool));
    }

    #[test]
    fn test_count_check_outranks_empty_pool() {
        let request = NameRequest {
            entries: vec![],
            count: "0".to_string(),
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::CountNotPositive { count: 0 })
        );
    }

    #[test]
    fn test_duplicate_entries_survive_validation() {
        let request = NameRequest {
            entries: vec!["علی".to_string(), "علی".to_string()],
            count: "2".to_string(),
        };
        let params = request.validate().unwrap();
        assert_eq!(params.entries.len(), 2);
    }

    #[test]
    fn test_replacement_panels_allow_count_beyond_pool() {
        // 100 letters from a 26-letter alphabet is fine with replacement.
        let request = LetterRequest {
            alphabet: Alphabet::English,
            count: "100".to_string(),
        };
        assert_eq!(request.validate().unwrap().count, 100);
    }

    #[test]
    fn test_without_replacement_bound_is_exact() {
        let at_bound = CountryRequest {
            count: COUNTRIES.len().to_string(),
        };
        assert!(at_bound.validate().is_ok());

        let past_bound = CountryRequest {
            count: (COUNTRIES.len() + 1).to_string(),
        };
        assert!(matches!(
            past_bound.validate(),
            Err(ValidationError::CountExceedsPool { .. })
        ));
    }

    #[test]
    fn test_disciplines_per_panel() {
        use picker_core::types::Discipline;

        let dice = DiceRequest {
            count: "1".to_string(),
        };
        assert_eq!(dice.discipline(), Discipline::WithReplacement);

        let names = NameRequest {
            entries: vec!["a".to_string()],
            count: "1".to_string(),
        };
        assert_eq!(names.discipline(), Discipline::WithoutReplacement);
    }
}
