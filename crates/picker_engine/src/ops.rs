//! Per-domain generation operations.
//!
//! Each operation is the whole pipeline for one panel: validate the request,
//! draw under the panel's discipline, aggregate where the domain is numeric.
//! All of them are pure apart from consuming randomness from the `&mut`
//! generator, and every failure is the request's first-violated constraint
//! returned as a value.

use picker_core::types::ValidationError;
use picker_pools::{dice, Color, Country, COUNTRIES};
use serde::Serialize;

use crate::aggregate::{aggregate, Aggregate};
use crate::request::{
    ColorRequest, CountryRequest, DiceRequest, LetterRequest, NameRequest, RangedRequest,
    RegionRequest,
};
use crate::rng::PickRng;
use crate::sampler;

/// Outcome of a numeric-domain generation: ordered values plus statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericOutcome {
    /// Ordered draw results.
    pub values: Vec<i64>,
    /// Sum and arithmetic mean of `values`.
    pub stats: Aggregate,
}

/// Rolls dice: `count` independent faces in `1..=6`, plus statistics.
pub fn roll_dice(
    rng: &mut PickRng,
    request: &DiceRequest,
) -> Result<NumericOutcome, ValidationError> {
    let params = request.validate()?;
    let values = sampler::draw_integers(rng, 1, dice::FACES, params.count);
    let stats = aggregate(&values);
    Ok(NumericOutcome { values, stats })
}

/// Draws uniform integers in `[min, max]` inclusive, plus statistics.
pub fn pick_numbers(
    rng: &mut PickRng,
    request: &RangedRequest,
) -> Result<NumericOutcome, ValidationError> {
    let params = request.validate()?;
    let values = sampler::draw_integers(rng, params.min, params.max, params.count);
    let stats = aggregate(&values);
    Ok(NumericOutcome { values, stats })
}

/// Draws letters from the selected alphabet, with replacement.
pub fn pick_letters(
    rng: &mut PickRng,
    request: &LetterRequest,
) -> Result<Vec<&'static str>, ValidationError> {
    let params = request.validate()?;
    let letters = params.alphabet.letters();
    Ok(sampler::draw_indices(rng, letters.len(), params.count)
        .into_iter()
        .map(|i| letters[i])
        .collect())
}

/// Draws names from the caller-supplied pool, without replacement.
pub fn draw_names(
    rng: &mut PickRng,
    request: &NameRequest,
) -> Result<Vec<String>, ValidationError> {
    let params = request.validate()?;
    Ok(sampler::shuffle_take(rng, &params.entries, params.count))
}

/// Draws countries from the full table, without replacement.
pub fn draw_countries(
    rng: &mut PickRng,
    request: &CountryRequest,
) -> Result<Vec<&'static Country>, ValidationError> {
    let params = request.validate()?;
    let pool: Vec<&'static Country> = COUNTRIES.iter().collect();
    Ok(sampler::shuffle_take(rng, &pool, params.count))
}

/// Draws regions from the selected jurisdiction's table, without
/// replacement.
pub fn draw_regions(
    rng: &mut PickRng,
    request: &RegionRequest,
) -> Result<Vec<&'static str>, ValidationError> {
    let params = request.validate()?;
    Ok(sampler::shuffle_take(
        rng,
        params.jurisdiction.regions(),
        params.count,
    ))
}

/// Draws colors from the effective pool (a prefix of the color table),
/// without replacement.
pub fn draw_colors(
    rng: &mut PickRng,
    request: &ColorRequest,
) -> Result<Vec<&'static Color>, ValidationError> {
    let params = request.validate()?;
    let pool: Vec<&'static Color> = params.pool.iter().collect();
    Ok(sampler::shuffle_take(rng, &pool, params.count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_dice_faces_in_range() {
        let mut rng = PickRng::new();
        let request = DiceRequest {
            count: "۵".to_string(),
        };
        let outcome = roll_dice(&mut rng, &request).unwrap();
        assert_eq!(outcome.values.len(), 5);
        assert!(outcome.values.iter().all(|v| (1..=6).contains(v)));
        assert_eq!(
            outcome.stats.sum,
            outcome.values.iter().sum::<i64>()
        );
    }

    #[test]
    fn test_pick_numbers_degenerate_range() {
        let mut rng = PickRng::new();
        let request = RangedRequest {
            min: "9".to_string(),
            max: "9".to_string(),
            count: "4".to_string(),
        };
        let outcome = pick_numbers(&mut rng, &request).unwrap();
        assert_eq!(outcome.values, vec![9; 4]);
        assert_eq!(outcome.stats.sum, 36);
        assert_eq!(outcome.stats.mean, 9.0);
    }

    #[test]
    fn test_pick_letters_come_from_selected_alphabet() {
        let mut rng = PickRng::new();
        let request = LetterRequest {
            alphabet: picker_pools::Alphabet::Greek,
            count: "10".to_string(),
        };
        let letters = pick_letters(&mut rng, &request).unwrap();
        assert_eq!(letters.len(), 10);
        let greek = picker_pools::Alphabet::Greek.letters();
        assert!(letters.iter().all(|l| greek.contains(l)));
    }

    #[test]
    fn test_draw_names_error_produces_no_results() {
        let mut rng = PickRng::new();
        let request = NameRequest {
            entries: vec!["Ali".to_string(), "Sara".to_string()],
            count: "3".to_string(),
        };
        assert!(draw_names(&mut rng, &request).is_err());
    }

    #[test]
    fn test_draw_countries_are_distinct() {
        let mut rng = PickRng::new();
        let request = CountryRequest {
            count: "10".to_string(),
        };
        let drawn = draw_countries(&mut rng, &request).unwrap();
        assert_eq!(drawn.len(), 10);
        for (i, country) in drawn.iter().enumerate() {
            assert!(!drawn[i + 1..]
                .iter()
                .any(|c| std::ptr::eq(*c, *country)));
        }
    }

    #[test]
    fn test_draw_colors_respects_pool_restriction() {
        let mut rng = PickRng::new();
        let request = ColorRequest {
            pool_size: Some("10".to_string()),
            count: "3".to_string(),
        };
        let drawn = draw_colors(&mut rng, &request).unwrap();
        assert_eq!(drawn.len(), 3);
        let prefix = &picker_pools::COLORS[..10];
        assert!(drawn.iter().all(|c| prefix.contains(c)));
    }
}
