//! Ergonomic macros for working with [`Outcome`](crate::Outcome).
//!
//! - [`macro@crate::rail`] - Lifts a `Result`-producing expression or block into an `Outcome`.
//! - [`macro@crate::attempt`] - Unwraps an `Ok` or returns early with the `Err`, playing
//!   the role `?` plays for `Result`.
//!
//! # Examples
//!
//! ```
//! use result_rail::{attempt, ok, rail, Outcome};
//!
//! fn parse_sum(a: &str, b: &str) -> Outcome<i32, std::num::ParseIntError> {
//!     let a = attempt!(rail!(a.parse::<i32>()));
//!     let b = attempt!(rail!(b.parse::<i32>()));
//!     ok(a + b)
//! }
//!
//! assert!(parse_sum("2", "40").contains(&42));
//! assert!(parse_sum("2", "forty").is_err());
//! ```

/// Lifts a `Result`-producing expression or block into an [`Outcome`](crate::Outcome).
///
/// # Syntax
///
/// - `rail!(expr)` - Wraps a single `Result`-producing expression
/// - `rail!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```rust
/// use result_rail::rail;
///
/// let outcome = rail!(Err::<(), &str>("failed"));
/// assert!(outcome.contains_err(&"failed"));
///
/// let outcome = rail!({
///     let raw = "12";
///     raw.parse::<u32>()
/// });
/// assert!(outcome.contains(&12));
/// ```
#[macro_export]
macro_rules! rail {
    ($expr:expr $(,)?) => {
        $crate::Outcome::from_result($expr)
    };
}

/// Evaluates an [`Outcome`](crate::Outcome), yielding its success value or returning
/// its error from the enclosing function.
///
/// The error is passed through [`From::from`], so a function returning
/// `Outcome<_, Outer>` can `attempt!` an `Outcome<_, Inner>` whenever
/// `Outer: From<Inner>`.
///
/// # Examples
///
/// ```rust
/// use result_rail::{attempt, err, ok, Outcome};
///
/// fn checked_half(x: u32) -> Outcome<u32, String> {
///     if x % 2 == 0 { ok(x / 2) } else { err(format!("{x} is odd")) }
/// }
///
/// fn quarter(x: u32) -> Outcome<u32, String> {
///     let half = attempt!(checked_half(x));
///     checked_half(half)
/// }
///
/// assert!(quarter(12).contains(&3));
/// assert!(quarter(6).contains_err(&"3 is odd".to_string()));
/// assert!(quarter(5).contains_err(&"5 is odd".to_string()));
/// ```
#[macro_export]
macro_rules! attempt {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(error) => {
                return $crate::Outcome::Err(::core::convert::From::from(error));
            }
        }
    };
}
