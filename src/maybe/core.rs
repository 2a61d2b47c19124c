use crate::misuse::{self, MisuseError, MisuseKind};
use crate::outcome::Outcome;

/// Diagnostic context used when [`Maybe::unwrap`] hits `None`.
pub const UNWRAP_NONE_MESSAGE: &str = "called unwrap on a None value";

/// An optional value: `Some(T)` or `None`.
///
/// `Maybe` is the projection target of [`Outcome::ok`] and [`Outcome::err`], and the
/// way back into an `Outcome` via [`ok_or`](Maybe::ok_or) /
/// [`ok_or_else`](Maybe::ok_or_else). It converts losslessly to and from
/// [`Option`].
///
/// # Examples
///
/// ```
/// use result_rail::{ok, Maybe, Outcome};
///
/// let value: Maybe<i32> = ok::<i32, &str>(2).ok();
/// assert!(value.is_some());
/// assert_eq!(value.into_option(), Some(2));
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash, Default)]
pub enum Maybe<T> {
    Some(T),
    #[default]
    None,
}

impl<T> Maybe<T> {
    /// Returns `true` if this is `Some`.
    #[must_use]
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[must_use]
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns `true` if this is `Some` and its value equals `value`.
    #[must_use]
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Some(v) => v == value,
            Self::None => false,
        }
    }

    /// Borrows the contained value as `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(v) => Maybe::Some(v),
            Self::None => Maybe::None,
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics on `None` with ``panics with `called unwrap on a None value` ``.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => {
                misuse::fail(MisuseError::bare(MisuseKind::UnwrapOnNone, UNWRAP_NONE_MESSAGE))
            }
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics on `None` with ``panics with `<message>` ``.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use result_rail::Maybe;
    ///
    /// Maybe::<i32>::None.expect("config loaded"); // panics with `config loaded`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => misuse::fail(MisuseError::bare(MisuseKind::UnwrapOnNone, message)),
        }
    }

    /// Returns the contained value or the eagerly evaluated `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes one with `f`.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(v) => v,
            Self::None => f(),
        }
    }

    /// Applies `f` to the contained value, leaving `None` untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(v) => Maybe::Some(f(v)),
            Self::None => Maybe::None,
        }
    }

    /// Chains `f` on `Some`; `None` short-circuits.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(v) => f(v),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(v) if predicate(&v) => Self::Some(v),
            _ => Self::None,
        }
    }

    /// Turns `Some(v)` into `Ok(v)` and `None` into `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Maybe;
    ///
    /// assert!(Maybe::Some(3).ok_or("missing").contains(&3));
    /// assert!(Maybe::<i32>::None.ok_or("missing").contains_err(&"missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(v) => Outcome::Ok(v),
            Self::None => Outcome::Err(error),
        }
    }

    /// Lazy form of [`ok_or`](Self::ok_or); `f` runs only on `None`.
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(v) => Outcome::Ok(v),
            Self::None => Outcome::Err(f()),
        }
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(v) => Some(v),
            Self::None => None,
        }
    }
}

impl<T, E> Maybe<Outcome<T, E>> {
    /// Swaps a `Maybe` of an `Outcome` into an `Outcome` of a `Maybe`.
    ///
    /// Inverse of [`Outcome::transpose`].
    #[inline]
    pub fn transpose(self) -> Outcome<Maybe<T>, E> {
        match self {
            Self::Some(Outcome::Ok(v)) => Outcome::Ok(Maybe::Some(v)),
            Self::Some(Outcome::Err(e)) => Outcome::Err(e),
            Self::None => Outcome::Ok(Maybe::None),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(v) => Self::Some(v),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
