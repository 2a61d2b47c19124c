//! Traits that let generic code treat [`Outcome`](crate::Outcome) and the standard
//! library containers uniformly.
//!
//! - [`WithError`]: Abstraction for types that carry a remappable error variant
//! - [`ErrorOps`]: Recovery and bidirectional mapping
//! - [`IntoOutcome`] / [`IntoMaybe`]: Method-position lifting of `Result` / `Option`
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::{IntoOutcome, WithError};
//!
//! let outcome = Err::<i32, u16>(404).into_outcome();
//! let described = outcome.fmap_error(|code| format!("status {code}"));
//! assert!(described.contains_err(&"status 404".to_string()));
//! ```

pub mod error_ops;
pub mod into_outcome;
pub mod with_error;

pub use error_ops::ErrorOps;
pub use into_outcome::{IntoMaybe, IntoOutcome};
pub use with_error::WithError;
