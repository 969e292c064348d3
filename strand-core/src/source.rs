/// A contract for behaviors that produce a value from no input.
///
/// `Source` is the simplest contract in Strand: a single zero-argument
/// operation returning `Self::Output`. The output type is fixed when a
/// behavior is bound to the contract and never varies per invocation.
///
/// A `Source`-typed reference can be rebound to any other behavior producing
/// the same output type, and invocation always dispatches to the behavior
/// currently bound.
///
/// # Example
///
/// ```
/// use strand_core::{source_fn, Source};
///
/// let mut value: Box<dyn Source<Output = f64>> = Box::new(source_fn(|| 12345.678));
/// assert_eq!(value.call(), 12345.678);
///
/// value = Box::new(source_fn(|| 2.0 * 3.0));
/// assert_eq!(value.call(), 6.0);
/// ```
pub trait Source {
    type Output;

    /// Produces the next value.
    fn call(&self) -> Self::Output;
}

/// A [`Source`] behavior backed by a closure.
///
/// Created by [`source_fn`].
pub struct SourceFn<F> {
    f: F,
}

/// Binds a zero-argument closure to the [`Source`] contract.
///
/// The closure may capture values from its defining scope, but the `Fn` bound
/// means it can only read them; a captured binding cannot be reassigned from
/// inside the behavior.
pub fn source_fn<T, F>(f: F) -> SourceFn<F>
where
    F: Fn() -> T,
{
    SourceFn { f }
}

impl<T, F> Source for SourceFn<F>
where
    F: Fn() -> T,
{
    type Output = T;

    fn call(&self) -> T {
        (self.f)()
    }
}
