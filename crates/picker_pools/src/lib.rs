//! # picker_pools: Reference tables for the randpick selection engine
//!
//! ## Layer Role
//!
//! This crate holds every static pool the engine can draw from:
//! - `dice`: die faces and their dot-pattern presentation metadata
//! - `alphabet`: the three selectable alphabets (Persian, English, Greek)
//! - `country`: countries with their capitals, Persian display names
//! - `region`: first-level administrative regions for two jurisdictions
//! - `color`: named colors with English name and hex code
//!
//! Tables are ordered, immutable and `'static`: constructed at compile time,
//! shared read-only, never copied per request. The engine slices them
//! (`pool_size` restriction) but never mutates them. Items carry a Persian
//! display name plus whatever secondary label their domain needs; the engine
//! passes items through untouched.
//!
//! Pool selectors ([`Alphabet`], [`Jurisdiction`]) parse case-insensitively
//! from their CLI spellings and fail with a [`PoolError`].

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alphabet;
pub mod color;
pub mod country;
pub mod dice;
mod error;
pub mod region;

pub use alphabet::Alphabet;
pub use color::{Color, COLORS};
pub use country::{Country, COUNTRIES};
pub use error::PoolError;
pub use region::Jurisdiction;
