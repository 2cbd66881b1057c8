//! # picker_engine: The selection-and-validation kernel
//!
//! ## Layer Role
//!
//! This crate is the kernel of the randpick workspace. It turns raw form
//! fields into validated parameters, draws results under one of two sampling
//! disciplines, and aggregates simple statistics:
//!
//! - [`request`]: one request type per generation panel, each with a
//!   `validate()` that checks constraints in a fixed precedence and returns
//!   the first violation as a value
//! - [`rng`]: the non-seedable uniform generator every draw consumes
//! - [`sampler`]: independent with-replacement draws and the partial
//!   Fisher-Yates shuffle for without-replacement draws
//! - [`aggregate`]: exact sum and arithmetic mean over numeric results
//! - [`ops`]: per-domain operations wiring the above together
//! - [`session`]: the pure panel-phase transitions the caller drives
//!
//! ## Statelessness
//!
//! Every function here is reentrant: the engine holds nothing between
//! calls. Reference pools come in as `'static` slices from `picker_pools`,
//! the generator is threaded through as `&mut`, and results go out by
//! value. The only caller-owned state is the panel phase (see [`session`]),
//! including the "ignore triggers while a dice roll is pending" guard.
//!
//! ## Usage Examples
//!
//! ```rust
//! use picker_engine::ops::pick_numbers;
//! use picker_engine::request::RangedRequest;
//! use picker_engine::rng::PickRng;
//!
//! let mut rng = PickRng::new();
//! let request = RangedRequest {
//!     min: "۱".to_string(),
//!     max: "۶".to_string(),
//!     count: "5".to_string(),
//! };
//! let outcome = pick_numbers(&mut rng, &request).unwrap();
//! assert_eq!(outcome.values.len(), 5);
//! assert!(outcome.values.iter().all(|v| (1..=6).contains(v)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod aggregate;
pub mod ops;
pub mod request;
pub mod rng;
pub mod sampler;
pub mod session;

pub use aggregate::{aggregate, Aggregate};
pub use ops::NumericOutcome;
pub use rng::PickRng;
