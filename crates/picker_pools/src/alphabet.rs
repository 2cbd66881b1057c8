//! Selectable alphabets.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PoolError;

/// Persian alphabet, 32 letters in dictionary order.
static PERSIAN: &[&str] = &[
    "ا", "ب", "پ", "ت", "ث", "ج", "چ", "ح", "خ", "د", "ذ", "ر", "ز", "ژ", "س", "ش", "ص", "ض",
    "ط", "ظ", "ع", "غ", "ف", "ق", "ک", "گ", "ل", "م", "ن", "و", "ه", "ی",
];

/// English alphabet, 26 uppercase letters.
static ENGLISH: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// Greek alphabet, 24 uppercase letters.
static GREEK: &[&str] = &[
    "Α", "Β", "Γ", "Δ", "Ε", "Ζ", "Η", "Θ", "Ι", "Κ", "Λ", "Μ", "Ν", "Ξ", "Ο", "Π", "Ρ", "Σ",
    "Τ", "Υ", "Φ", "Χ", "Ψ", "Ω",
];

/// One of the three selectable letter pools.
///
/// Each variant resolves to a fixed, ordered table of letters. Letter draws
/// sample with replacement, so the tables are only ever indexed, never
/// sliced or shuffled.
///
/// # Examples
///
/// ```
/// use picker_pools::Alphabet;
///
/// let alphabet: Alphabet = "persian".parse().unwrap();
/// assert_eq!(alphabet.letters().len(), 32);
/// assert_eq!(alphabet.letters()[0], "ا");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// Persian alphabet (32 letters).
    #[default]
    Persian,
    /// English alphabet (26 letters).
    English,
    /// Greek alphabet (24 letters).
    Greek,
}

impl Alphabet {
    /// Returns the ordered letter table for this alphabet.
    #[inline]
    pub fn letters(&self) -> &'static [&'static str] {
        match self {
            Alphabet::Persian => PERSIAN,
            Alphabet::English => ENGLISH,
            Alphabet::Greek => GREEK,
        }
    }

    /// Returns the selector spelling used on the CLI.
    pub fn code(&self) -> &'static str {
        match self {
            Alphabet::Persian => "persian",
            Alphabet::English => "english",
            Alphabet::Greek => "greek",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Alphabet {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "persian" | "fa" => Ok(Alphabet::Persian),
            "english" | "en" => Ok(Alphabet::English),
            "greek" | "el" => Ok(Alphabet::Greek),
            _ => Err(PoolError::UnknownAlphabet(s.to_string())),
        }
    }
}
