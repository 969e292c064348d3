use std::marker::PhantomData;

/// A contract for behaviors that test a condition on their input.
///
/// A single-operand test uses the operand type directly as `Input`; a
/// multi-operand test uses a tuple, destructured inside the behavior.
///
/// # Example
///
/// ```
/// use strand_core::{predicate_fn, Predicate};
///
/// let is_even = predicate_fn(|n: i64| n % 2 == 0);
/// assert!(is_even.call(10));
/// assert!(!is_even.call(9));
///
/// let is_factor = predicate_fn(|(n, d): (i64, i64)| n % d == 0);
/// assert!(is_factor.call((10, 2)));
/// ```
pub trait Predicate {
    type Input;

    /// Tests the condition against the given input.
    fn call(&self, input: Self::Input) -> bool;
}

/// A [`Predicate`] behavior backed by a closure.
///
/// Created by [`predicate_fn`].
pub struct PredicateFn<T, F> {
    f: F,
    _input: PhantomData<fn(T)>,
}

/// Binds a boolean-returning closure to the [`Predicate`] contract.
pub fn predicate_fn<T, F>(f: F) -> PredicateFn<T, F>
where
    F: Fn(T) -> bool,
{
    PredicateFn {
        f,
        _input: PhantomData,
    }
}

impl<T, F> Predicate for PredicateFn<T, F>
where
    F: Fn(T) -> bool,
{
    type Input = T;

    fn call(&self, input: T) -> bool {
        (self.f)(input)
    }
}
