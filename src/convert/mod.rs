//! Conversion helpers between `Outcome`, `Maybe`, and the standard library types.
//!
//! These adapters make it straightforward to adopt `result-rail` at the edge of an
//! existing codebase: wrap the `Result`s and `Option`s coming in, and hand plain
//! standard types back out when calling external APIs.
//!
//! # Examples
//!
//! ```
//! use result_rail::convert::*;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_ok());
//!
//! let option = maybe_to_option(outcome.ok());
//! assert_eq!(option, Some(42));
//! ```

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Converts an `Outcome` to a standard `Result`.
///
/// # Examples
///
/// ```
/// use result_rail::convert::outcome_to_result;
/// use result_rail::{err, ok};
///
/// assert_eq!(outcome_to_result(ok::<i32, &str>(7)), Ok(7));
/// assert_eq!(outcome_to_result(err::<i32, &str>("boom")), Err("boom"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts a standard `Result` to an `Outcome`.
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Converts a `Maybe` to a standard `Option`.
#[inline]
pub fn maybe_to_option<T>(maybe: Maybe<T>) -> Option<T> {
    maybe.into_option()
}

/// Converts a standard `Option` to a `Maybe`.
#[inline]
pub fn option_to_maybe<T>(option: Option<T>) -> Maybe<T> {
    option.into()
}

/// Collapses `Outcome<Outcome<T, E>, E>` into `Outcome<T, E>`.
///
/// # Examples
///
/// ```
/// use result_rail::convert::flatten_outcome;
/// use result_rail::{err, ok, Outcome};
///
/// let nested: Outcome<Outcome<i32, &str>, &str> = err("outer");
/// assert!(flatten_outcome(nested).contains_err(&"outer"));
/// ```
#[inline]
pub fn flatten_outcome<T, E>(nested: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
    nested.flatten()
}

/// Exchanges the roles of the two variants: `Ok(v)` becomes `Err(v)` and vice versa.
///
/// # Examples
///
/// ```
/// use result_rail::convert::swap_outcome;
/// use result_rail::{err, ok, Outcome};
///
/// assert!(swap_outcome(ok::<i32, &str>(1)).contains_err(&1));
/// assert!(swap_outcome(err::<i32, &str>("e")).contains(&"e"));
/// ```
#[inline]
pub fn swap_outcome<T, E>(outcome: Outcome<T, E>) -> Outcome<E, T> {
    match outcome {
        Outcome::Ok(value) => Outcome::Err(value),
        Outcome::Err(error) => Outcome::Ok(error),
    }
}
