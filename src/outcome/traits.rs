use crate::outcome::core::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Collects an iterator of outcomes, stopping at the first `Err`.
///
/// Items after the first failure are never pulled from the source iterator.
/// Errors are not accumulated; the first one wins.
///
/// # Examples
///
/// ```
/// use result_rail::{err, ok, Outcome};
///
/// let all_ok: Outcome<Vec<i32>, &str> = vec![ok(1), ok(2)].into_iter().collect();
/// assert!(all_ok.contains(&vec![1, 2]));
///
/// let first_err: Outcome<Vec<i32>, &str> =
///     vec![ok(1), err("first"), err("second")].into_iter().collect();
/// assert!(first_err.contains_err(&"first"));
/// ```
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Outcome::Ok(value) => Some(value),
                Outcome::Err(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Outcome::Err(error),
            None => Outcome::Ok(collected),
        }
    }
}
