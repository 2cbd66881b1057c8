//! Sampling disciplines.

use serde::Serialize;

/// How a selection request draws from its pool.
///
/// The per-domain assignment is deliberate and must not be unified: dice,
/// ranged integers and letters draw independently with replacement, while
/// the list domains (names, countries, regions, colors) shuffle without
/// replacement. The two disciplines differ materially; rejection sampling
/// is not an acceptable substitute for the shuffle.
///
/// # Examples
///
/// ```
/// use picker_core::types::Discipline;
///
/// assert!(Discipline::WithReplacement.allows_repeats());
/// assert!(!Discipline::WithoutReplacement.allows_repeats());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// Independent uniform draws; repeats are permitted and expected.
    WithReplacement,

    /// Partial Fisher-Yates shuffle; every result references a distinct
    /// pool index. Values may still repeat when the pool itself contains
    /// duplicate entries.
    WithoutReplacement,
}

impl Discipline {
    /// Returns `true` when two results may reference the same pool index.
    #[inline]
    pub fn allows_repeats(&self) -> bool {
        matches!(self, Discipline::WithReplacement)
    }
}
