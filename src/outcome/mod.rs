//! The [`Outcome`] container and its combinators.
//!
//! # Key Components
//!
//! - [`Outcome`] - `Ok(T)` or `Err(E)`, immutable once built
//! - [`ok`] / [`err`] - factory functions for the two variants
//! - Iterator adapters over the success value
//! - Conversions with [`Result`] and collection from iterators
//!
//! # Examples
//!
//! ```
//! use result_rail::outcome::{err, ok, Outcome};
//!
//! let parsed: Outcome<i32, String> = ok("42")
//!     .and_then(|s: &str| match s.parse::<i32>() {
//!         Ok(n) => ok(n),
//!         Err(e) => err(e.to_string()),
//!     })
//!     .map(|n| n + 1);
//!
//! assert!(parsed.contains(&43));
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
// Note: traits module provides From/FromIterator impls for Outcome
// which are automatically available when this module is compiled
