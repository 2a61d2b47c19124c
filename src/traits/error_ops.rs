use crate::outcome::Outcome;
use crate::traits::with_error::WithError;

/// Recovery and bidirectional mapping on top of [`WithError`].
///
/// # Examples
///
/// ```
/// use result_rail::traits::ErrorOps;
/// use result_rail::{err, ok, Outcome};
///
/// let failed: Outcome<i32, &str> = err("timeout");
/// assert!(failed.recover(|_| ok(0)).contains(&0));
///
/// let both = ok::<i32, &str>(20).bimap(|v| v + 1, |e| e.len());
/// assert!(both.contains(&21));
/// ```
pub trait ErrorOps<E>: WithError<E> {
    /// Replaces an error with the outcome of `recovery`; success passes through.
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
        Self: Sized;

    /// Maps both sides at once, invoking only the function for the present variant.
    fn bimap<B, G, SuccessF, ErrorF>(self, success_f: SuccessF, error_f: ErrorF) -> Outcome<B, G>
    where
        SuccessF: FnOnce(Self::Success) -> B,
        ErrorF: FnOnce(E) -> G,
        Self: Sized;
}

impl<T, E> ErrorOps<E> for Outcome<T, E> {
    #[inline]
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        self.or_else(recovery)
    }

    #[inline]
    fn bimap<B, G, SuccessF, ErrorF>(self, success_f: SuccessF, error_f: ErrorF) -> Outcome<B, G>
    where
        SuccessF: FnOnce(T) -> B,
        ErrorF: FnOnce(E) -> G,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(success_f(value)),
            Outcome::Err(error) => Outcome::Err(error_f(error)),
        }
    }
}

impl<T, E> ErrorOps<E> for Result<T, E> {
    #[inline]
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => recovery(error),
        }
    }

    #[inline]
    fn bimap<B, G, SuccessF, ErrorF>(self, success_f: SuccessF, error_f: ErrorF) -> Outcome<B, G>
    where
        SuccessF: FnOnce(T) -> B,
        ErrorF: FnOnce(E) -> G,
    {
        match self {
            Ok(value) => Outcome::Ok(success_f(value)),
            Err(error) => Outcome::Err(error_f(error)),
        }
    }
}
