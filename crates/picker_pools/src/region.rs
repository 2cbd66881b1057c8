//! First-level administrative regions.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PoolError;

/// Iran's 31 provinces, Persian names, official ordering.
static IRAN_PROVINCES: &[&str] = &[
    "آذربایجان شرقی",
    "آذربایجان غربی",
    "اردبیل",
    "اصفهان",
    "البرز",
    "ایلام",
    "بوشهر",
    "تهران",
    "چهارمحال و بختیاری",
    "خراسان جنوبی",
    "خراسان رضوی",
    "خراسان شمالی",
    "خوزستان",
    "زنجان",
    "سمنان",
    "سیستان و بلوچستان",
    "فارس",
    "قزوین",
    "قم",
    "کردستان",
    "کرمان",
    "کرمانشاه",
    "کهگیلویه و بویراحمد",
    "گلستان",
    "گیلان",
    "لرستان",
    "مازندران",
    "مرکزی",
    "هرمزگان",
    "همدان",
    "یزد",
];

/// The 50 US states, Persian spellings, alphabetical by English name.
static US_STATES: &[&str] = &[
    "آلاباما",
    "آلاسکا",
    "آریزونا",
    "آرکانزاس",
    "کالیفرنیا",
    "کلرادو",
    "کانتیکت",
    "دلاویر",
    "فلوریدا",
    "جورجیا",
    "هاوایی",
    "آیداهو",
    "ایلینوی",
    "ایندیانا",
    "آیووا",
    "کانزاس",
    "کنتاکی",
    "لوئیزیانا",
    "مین",
    "مریلند",
    "ماساچوست",
    "میشیگان",
    "مینه‌سوتا",
    "می‌سی‌سی‌پی",
    "میزوری",
    "مونتانا",
    "نبراسکا",
    "نوادا",
    "نیوهمپشایر",
    "نیوجرسی",
    "نیومکزیکو",
    "نیویورک",
    "کارولینای شمالی",
    "داکوتای شمالی",
    "اوهایو",
    "اوکلاهما",
    "اورگن",
    "پنسیلوانیا",
    "رود آیلند",
    "کارولینای جنوبی",
    "داکوتای جنوبی",
    "تنسی",
    "تگزاس",
    "یوتا",
    "ورمانت",
    "ویرجینیا",
    "واشینگتن",
    "ویرجینیای غربی",
    "ویسکانسین",
    "وایومینگ",
];

/// Which jurisdiction's region table to draw from.
///
/// # Examples
///
/// ```
/// use picker_pools::Jurisdiction;
///
/// assert_eq!(Jurisdiction::Iran.regions().len(), 31);
/// assert_eq!(Jurisdiction::UnitedStates.regions().len(), 50);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    /// Iran: 31 provinces.
    #[default]
    Iran,
    /// United States: 50 states.
    UnitedStates,
}

impl Jurisdiction {
    /// Returns the ordered region table for this jurisdiction.
    #[inline]
    pub fn regions(&self) -> &'static [&'static str] {
        match self {
            Jurisdiction::Iran => IRAN_PROVINCES,
            Jurisdiction::UnitedStates => US_STATES,
        }
    }

    /// Returns the selector spelling used on the CLI.
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::Iran => "iran",
            Jurisdiction::UnitedStates => "usa",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Jurisdiction {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iran" | "ir" => Ok(Jurisdiction::Iran),
            "usa" | "us" | "united-states" => Ok(Jurisdiction::UnitedStates),
            _ => Err(PoolError::UnknownJurisdiction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(Jurisdiction::Iran.regions().len(), 31);
        assert_eq!(Jurisdiction::UnitedStates.regions().len(), 50);
    }

    #[test]
    fn test_regions_are_unique() {
        for jurisdiction in [Jurisdiction::Iran, Jurisdiction::UnitedStates] {
            let regions = jurisdiction.regions();
            for (i, region) in regions.iter().enumerate() {
                assert!(
                    !regions[i + 1..].contains(region),
                    "duplicate region {}",
                    region
                );
            }
        }
    }

    #[test]
    fn test_parse_selector() {
        assert_eq!("iran".parse::<Jurisdiction>().unwrap(), Jurisdiction::Iran);
        assert_eq!(
            "USA".parse::<Jurisdiction>().unwrap(),
            Jurisdiction::UnitedStates
        );
        assert!("france".parse::<Jurisdiction>().is_err());
    }
}
