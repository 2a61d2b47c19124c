use crate::outcome::Outcome;

/// Abstraction over types that carry an error variant which can be remapped.
///
/// Implemented for both [`Outcome`] and the standard [`Result`], so generic code can
/// rewrite the failure side of either without caring which one it was handed.
///
/// # Type Parameters
///
/// * `E` - The current error type contained in the implementor
///
/// # Associated Types
///
/// * `Success` - The success value type when no error is present
/// * `ErrorOutput<G>` - The output type after mapping the error to type `G`
///
/// # Examples
///
/// ```
/// use result_rail::traits::WithError;
/// use result_rail::{err, Outcome};
///
/// let outcome: Outcome<i32, u32> = err(404);
/// let mapped = outcome.fmap_error(|code| format!("HTTP {}", code));
/// assert!(mapped.contains_err(&"HTTP 404".to_string()));
///
/// let result: Result<i32, u32> = Err(500);
/// assert_eq!(result.fmap_error(|code| code + 1), Err(501));
/// ```
pub trait WithError<E> {
    type Success;

    type ErrorOutput<G>;

    /// Maps the error value using `f`, producing a new container with error type `G`.
    ///
    /// The success case is left untouched and `f` is not invoked for it.
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G;

    /// Converts the container into an [`Outcome`].
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::WithError;
    ///
    /// let result: Result<i32, &str> = Ok(42);
    /// assert!(result.to_outcome().contains(&42));
    /// ```
    fn to_outcome(self) -> Outcome<Self::Success, E>;
}

impl<T, E> WithError<E> for Outcome<T, E> {
    type Success = T;
    type ErrorOutput<G> = Outcome<T, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_err(f)
    }

    #[inline]
    fn to_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<T, E> WithError<E> for Result<T, E> {
    type Success = T;
    type ErrorOutput<G> = Result<T, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Ok(t) => Ok(t),
            Err(e) => Err(f(e)),
        }
    }

    #[inline]
    fn to_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}
