//! Extension traits for lifting standard library types into this crate's containers.
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::{IntoMaybe, IntoOutcome};
//!
//! let parsed = "17".parse::<u8>().into_outcome();
//! assert!(parsed.contains(&17));
//!
//! let first = [3, 4].first().copied().into_maybe();
//! assert!(first.contains(&3));
//! ```

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Lifts a standard [`Result`] into an [`Outcome`] in method position.
pub trait IntoOutcome<T, E> {
    /// Converts `Ok`/`Err` into the matching `Outcome` variant.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}

/// Lifts a standard [`Option`] into a [`Maybe`] in method position.
pub trait IntoMaybe<T> {
    /// Converts `Some`/`None` into the matching `Maybe` variant.
    fn into_maybe(self) -> Maybe<T>;

    /// Lifts straight into an `Outcome`, using `error` for the `None` case.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::IntoMaybe;
    ///
    /// let missing: Option<i32> = None;
    /// assert!(missing.into_outcome_or("missing").contains_err(&"missing"));
    /// ```
    #[inline]
    fn into_outcome_or<E>(self, error: E) -> Outcome<T, E>
    where
        Self: Sized,
    {
        self.into_maybe().ok_or(error)
    }
}

impl<T> IntoMaybe<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from(self)
    }
}
