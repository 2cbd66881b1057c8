//! # picker_core: Foundation for the randpick selection engine
//!
//! ## Layer Role
//!
//! picker_core is the bottom layer of the four-crate workspace, providing:
//! - Persian-locale numeral normalisation and display formatting (`numeral`)
//! - The sampling-discipline type (`types::discipline`)
//! - The user-facing validation error taxonomy (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other workspace crates and a minimal
//! external footprint (`serde` for result serialisation only). Everything in
//! it is a pure, total function or a plain value type; nothing here touches
//! randomness, reference tables, or I/O.
//!
//! ## Usage Examples
//!
//! ```rust
//! use picker_core::numeral::{format_int, normalize};
//!
//! // Canonicalise user keystrokes (Persian digits, grouping separators)
//! assert_eq!(normalize("۱٬۲۳۴"), "1234");
//!
//! // Render a value back in display form
//! assert_eq!(format_int(1234), "۱٬۲۳۴");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod numeral;
pub mod types;
