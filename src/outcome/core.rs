use crate::maybe::Maybe;
use crate::misuse::{self, MisuseError, MisuseKind};
use core::fmt::Display;

/// The outcome of a fallible operation: a success value or a failure value, never both.
///
/// `Outcome<T, E>` is immutable once built. Every combinator takes `self` by value and
/// hands back a new `Outcome` (or a plain value for the terminal extractors), so a chain
/// reads top to bottom as a railway: `Ok` values travel down the success track, and the
/// first `Err` switches the rest of the chain onto the failure track.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure value type
///
/// # Variants
///
/// * `Ok(T)` - Contains a successful value
/// * `Err(E)` - Contains a failure value
///
/// # Examples
///
/// ```
/// use result_rail::{err, ok, Outcome};
///
/// fn halve(x: i32) -> Outcome<i32, String> {
///     if x % 2 == 0 {
///         ok(x / 2)
///     } else {
///         err(format!("{x} is odd"))
///     }
/// }
///
/// assert!(halve(8).and_then(halve).contains(&2));
/// assert!(halve(6).and_then(halve).contains_err(&"3 is odd".to_string()));
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

/// Creates an `Ok` outcome holding `value`.
///
/// # Examples
///
/// ```
/// use result_rail::{ok, Outcome};
///
/// let x: Outcome<i32, &str> = ok(-1);
/// assert!(x.is_ok());
/// ```
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Creates an `Err` outcome holding `error`.
///
/// # Examples
///
/// ```
/// use result_rail::{err, Outcome};
///
/// let x: Outcome<i32, &str> = err("this is an error");
/// assert!(x.is_err());
/// ```
#[inline]
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

impl<T, E> Outcome<T, E> {
    /// Creates an `Ok` outcome. Equivalent to [`ok`].
    #[inline]
    pub fn ok_value(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates an `Err` outcome. Equivalent to [`err`].
    #[inline]
    pub fn err_value(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` if the outcome is `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// assert!(ok::<i32, &str>(-1).is_ok());
    /// assert!(!err::<i32, &str>("failure").is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome is `Err`.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the outcome is `Ok` and its value equals `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// assert!(ok::<i32, &str>(2).contains(&2));
    /// assert!(!ok::<i32, &str>(3).contains(&2));
    /// assert!(!err::<i32, &str>("Some error message").contains(&2));
    /// ```
    #[must_use]
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Ok(v) => v == value,
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if the outcome is `Err` and its error equals `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// assert!(err::<i32, &str>("Some error message").contains_err(&"Some error message"));
    /// assert!(!ok::<i32, &str>(2).contains_err(&"Some error message"));
    /// ```
    #[must_use]
    #[inline]
    pub fn contains_err(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(e) => e == error,
        }
    }

    /// Projects onto the success value, discarding any error.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// assert_eq!(ok::<i32, &str>(2).ok().unwrap(), 2);
    /// assert!(err::<i32, &str>("nothing here").ok().is_none());
    /// ```
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(v) => Maybe::Some(v),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Projects onto the error value, discarding any success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// assert!(ok::<i32, &str>(2).err().is_none());
    /// assert_eq!(err::<i32, &str>("nothing here").err().unwrap(), "nothing here");
    /// ```
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(e) => Maybe::Some(e),
        }
    }

    /// Borrows both payloads, producing `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Mutably borrows both payloads, producing `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Maps the success value, leaving an error untouched.
    ///
    /// `f` runs exactly once on `Ok` and never on `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// assert!(ok::<i32, i32>(2).map(|v| v * 2).contains(&4));
    /// assert!(err::<i32, i32>(2).map(|v| v + 2).contains_err(&2));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(v) => Outcome::Ok(f(v)),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Maps the error value, leaving a success value untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// let stringify = |x: i32| format!("error code: {x}");
    ///
    /// assert!(ok::<i32, i32>(2).map_err(stringify).contains(&2));
    /// assert!(err::<i32, i32>(13)
    ///     .map_err(stringify)
    ///     .contains_err(&"error code: 13".to_string()));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(f(e)),
        }
    }

    /// Applies `f` to the success value, or returns `default` on `Err`.
    ///
    /// `default` is an already evaluated value; use [`map_or_else`](Self::map_or_else)
    /// when computing the fallback is expensive.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// assert_eq!(ok::<&str, &str>("foo").map_or(42, |v| v.len()), 3);
    /// assert_eq!(err::<&str, &str>("bar").map_or(42, |v| v.len()), 42);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(_) => default,
        }
    }

    /// Applies `f_ok` to a success value or `f_err` to an error.
    ///
    /// Only the function for the present variant is invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// let k = 21;
    /// assert_eq!(ok::<&str, &str>("foo").map_or_else(|_| k * 2, |v| v.len()), 3);
    /// assert_eq!(err::<&str, &str>("foo").map_or_else(|_| k * 2, |v| v.len()), 42);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, f_err: D, f_ok: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(v) => f_ok(v),
            Self::Err(e) => f_err(e),
        }
    }

    /// Calls `f` with a reference to the success value, then returns `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(v) = &self {
            f(v);
        }
        self
    }

    /// Calls `f` with a reference to the error value, then returns `self` unchanged.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(e) = &self {
            f(e);
        }
        self
    }

    /// Returns `other` if `self` is `Ok`, otherwise keeps the error of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// let late: Outcome<&str, &str> = err("late error");
    /// assert!(ok::<i32, &str>(2).and(late).contains_err(&"late error"));
    ///
    /// let early: Outcome<i32, &str> = err("early error");
    /// assert!(early.and(ok::<&str, &str>("foo")).contains_err(&"early error"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Chains a fallible step onto a success value.
    ///
    /// `f` runs only on `Ok`; an `Err` passes through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// let sq = |x: i32| ok::<i32, i32>(x * x);
    /// let error = |x: i32| err::<i32, i32>(x);
    ///
    /// assert!(ok(2).and_then(sq).and_then(sq).contains(&16));
    /// assert!(ok(2).and_then(sq).and_then(error).contains_err(&4));
    /// assert!(err(3).and_then(sq).and_then(sq).contains_err(&3));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Returns `self` if it is `Ok`, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// assert!(ok::<i32, &str>(2).or(err::<i32, &str>("late error")).contains(&2));
    /// assert!(err::<&str, &str>("early error").or(ok::<&str, &str>("foo")).contains(&"foo"));
    /// ```
    #[inline]
    pub fn or<G>(self, other: Outcome<T, G>) -> Outcome<T, G> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(_) => other,
        }
    }

    /// Recovers from an error with a fallible step.
    ///
    /// `f` runs only on `Err`; a success value passes through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// let sq = |x: i32| ok::<i32, i32>(x * x);
    /// let error = |x: i32| err::<i32, i32>(x);
    ///
    /// assert!(ok(2).or_else(sq).or_else(sq).contains(&2));
    /// assert!(err(3).or_else(sq).or_else(error).contains(&9));
    /// assert!(err(3).or_else(error).or_else(error).contains_err(&3));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => f(e),
        }
    }

    /// Returns the success value, or `default` on `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// assert_eq!(ok::<i32, i32>(9).unwrap_or(2), 9);
    /// assert_eq!(err::<i32, i32>(9).unwrap_or(2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// let count = |x: &str| x.len();
    /// assert_eq!(ok::<usize, &str>(2).unwrap_or_else(count), 2);
    /// assert_eq!(err::<usize, &str>("foo").unwrap_or_else(count), 3);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => f(e),
        }
    }

    /// Returns the success value, or `T::default()` on `Err`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(v) => v,
            Self::Err(_) => T::default(),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Err` with the message ``panics with `<error>` ``.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{ok, Outcome};
    ///
    /// assert_eq!(ok::<i32, &str>(2).unwrap(), 2);
    /// ```
    ///
    /// ```should_panic
    /// use result_rail::{err, Outcome};
    ///
    /// err::<i32, &str>("emergency failure").unwrap(); // panics with `emergency failure`
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Display,
    {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => misuse::fail(MisuseError::new(MisuseKind::UnwrapOnErr, &e)),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Err` with the message ``panics with `<message>: <error>` ``.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{ok, Outcome};
    ///
    /// assert_eq!(ok::<i32, &str>(40).expect("should have a value"), 40);
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: Display,
    {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => {
                misuse::fail(MisuseError::with_context(MisuseKind::UnwrapOnErr, message, &e))
            }
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics on `Ok` with the message ``panics with `<value>` ``.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, Outcome};
    ///
    /// assert_eq!(err::<i32, &str>("emergency failure").unwrap_err(), "emergency failure");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Display,
    {
        match self {
            Self::Ok(v) => misuse::fail(MisuseError::new(MisuseKind::UnwrapErrOnOk, &v)),
            Self::Err(e) => e,
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics on `Ok` with the message ``panics with `<message>: <value>` ``.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E
    where
        T: Display,
    {
        match self {
            Self::Ok(v) => {
                misuse::fail(MisuseError::with_context(MisuseKind::UnwrapErrOnOk, message, &v))
            }
            Self::Err(e) => e,
        }
    }

    /// Checked counterpart of [`unwrap`](Self::unwrap).
    ///
    /// Returns the diagnostic `unwrap` would have panicked with instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// assert_eq!(ok::<i32, &str>(2).try_unwrap().unwrap(), 2);
    ///
    /// let misuse = err::<i32, &str>("boom").try_unwrap().unwrap_err();
    /// assert_eq!(misuse.to_string(), "panics with `boom`");
    /// ```
    pub fn try_unwrap(self) -> Result<T, MisuseError>
    where
        E: Display,
    {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => Err(MisuseError::new(MisuseKind::UnwrapOnErr, &e)),
        }
    }

    /// Checked counterpart of [`unwrap_err`](Self::unwrap_err).
    pub fn try_unwrap_err(self) -> Result<E, MisuseError>
    where
        T: Display,
    {
        match self {
            Self::Ok(v) => Err(MisuseError::new(MisuseKind::UnwrapErrOnOk, &v)),
            Self::Err(e) => Ok(e),
        }
    }

    /// Converts into a standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => Err(e),
        }
    }

    /// Wraps a standard library `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Err(e),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{err, ok, Outcome};
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = ok(ok(1));
    /// assert!(nested.flatten().contains(&1));
    ///
    /// let inner_err: Outcome<Outcome<i32, &str>, &str> = ok(err("inner"));
    /// assert!(inner_err.flatten().contains_err(&"inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Outcome<Maybe<T>, E> {
    /// Swaps an `Outcome` of a `Maybe` into a `Maybe` of an `Outcome`.
    ///
    /// `Ok(None)` maps to `None`; `Ok(Some(v))` to `Some(Ok(v))`; `Err(e)` to `Some(Err(e))`.
    #[inline]
    pub fn transpose(self) -> Maybe<Outcome<T, E>> {
        match self {
            Self::Ok(Maybe::Some(v)) => Maybe::Some(Outcome::Ok(v)),
            Self::Ok(Maybe::None) => Maybe::None,
            Self::Err(e) => Maybe::Some(Outcome::Err(e)),
        }
    }
}
