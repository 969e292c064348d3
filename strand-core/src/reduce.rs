use std::error::Error as StdError;
use std::marker::PhantomData;

/// A contract for behaviors that fold a slice into a single value, and may
/// fail while doing so.
///
/// Unlike the other contracts, `Reduce` declares a failure channel: the
/// associated `Error` type names the failure kinds the operation may raise,
/// and `call` returns a `Result`, so callers are statically forced to handle
/// both outcomes. Each invocation ends in exactly one of two terminal states,
/// a value or a failure; there is no third option and no partial result.
///
/// Implementations must not swallow a failure and substitute a default; the
/// failure propagates to the caller unchanged.
pub trait Reduce {
    type Item;
    type Output;
    type Error: StdError + Send + Sync + 'static;

    /// Folds `items` into a single output value.
    ///
    /// # Errors
    ///
    /// Each behavior defines its own `Error` type, which determines what
    /// counts as a failure within its domain.
    fn call(&self, items: &[Self::Item]) -> Result<Self::Output, Self::Error>;
}

/// A [`Reduce`] behavior backed by a closure.
///
/// Created by [`reduce_fn`].
pub struct ReduceFn<T, O, E, F> {
    f: F,
    _shape: PhantomData<fn(T) -> Result<O, E>>,
}

/// Binds a fallible folding closure to the [`Reduce`] contract.
pub fn reduce_fn<T, O, E, F>(f: F) -> ReduceFn<T, O, E, F>
where
    F: Fn(&[T]) -> Result<O, E>,
    E: StdError + Send + Sync + 'static,
{
    ReduceFn {
        f,
        _shape: PhantomData,
    }
}

impl<T, O, E, F> Reduce for ReduceFn<T, O, E, F>
where
    F: Fn(&[T]) -> Result<O, E>,
    E: StdError + Send + Sync + 'static,
{
    type Item = T;
    type Output = O;
    type Error = E;

    fn call(&self, items: &[T]) -> Result<O, E> {
        (self.f)(items)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct NoItems;

    impl fmt::Display for NoItems {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "no items to fold")
        }
    }

    impl StdError for NoItems {}

    fn sum() -> impl Reduce<Item = i64, Output = i64, Error = NoItems> {
        reduce_fn(|items: &[i64]| {
            if items.is_empty() {
                Err(NoItems)
            } else {
                Ok(items.iter().sum())
            }
        })
    }

    #[test]
    fn folds_to_a_value() {
        assert_eq!(sum().call(&[1, 2, 3]), Ok(6));
    }

    #[test]
    fn failure_reaches_the_caller() {
        assert_eq!(sum().call(&[]), Err(NoItems));
    }
}
