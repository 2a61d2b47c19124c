//! A two-variant container for fallible operations, with a complete combinator algebra.
//!
//! [`Outcome<T, E>`](Outcome) holds either a success value (`Ok`) or a failure value
//! (`Err`). Failures travel as ordinary values through mapping, chaining and
//! defaulting combinators; only the explicit "I know which variant this is"
//! extractors ([`Outcome::unwrap`], [`Outcome::expect`], and their `_err` twins) panic,
//! with a fixed diagnostic format described in [`misuse`].
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `result_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use result_rail::{err, ok, Outcome};
//!
//! let sq = |x: i32| ok::<i32, i32>(x * x);
//! let fail = |x: i32| err::<i32, i32>(x);
//!
//! assert!(ok(2).and_then(sq).and_then(sq).contains(&16));
//! assert!(ok(2).and_then(sq).and_then(fail).contains_err(&4));
//! assert!(err(3).or_else(sq).or_else(fail).contains(&9));
//! ```
//!
//! ## Projection
//!
//! ```
//! use result_rail::{err, ok, Outcome};
//!
//! assert_eq!(ok::<i32, &str>(2).ok().unwrap(), 2);
//! assert!(err::<i32, &str>("nothing here").ok().is_none());
//! ```
//!
//! ## Misuse diagnostics
//!
//! ```
//! use result_rail::{err, Outcome};
//!
//! let caught = std::panic::catch_unwind(|| {
//!     err::<i32, &str>("boom").expect("msg");
//! });
//! let payload = caught.unwrap_err();
//! assert_eq!(payload.downcast_ref::<String>().unwrap(), "panics with `msg: boom`");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Allocation type aliases shared by `std` and `no_std` builds
pub mod alloc_type;
/// Conversion helpers between Outcome, Maybe, Result and Option
pub mod convert;
/// Macros for lifting and early return
pub mod macros;
/// The optional companion container
pub mod maybe;
/// Misuse failures and the panic path of the unwrapping extractors
pub mod misuse;
/// The Outcome container and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits shared by Outcome and the standard library containers
pub mod traits;

pub use convert::*;
pub use maybe::Maybe;
pub use misuse::{MisuseError, MisuseKind};
pub use outcome::{err, ok, Outcome};
pub use traits::*;
