//! Generic invokers.
//!
//! Each function here accepts a behavior through its contract plus the
//! operands the contract calls for, and executes it. Invokers are transparent
//! pass-throughs: they add no behavior, recover from no failure, and return
//! whatever the behavior produced. The `?Sized` bounds let the same invokers
//! run boxed (`dyn`) behaviors and concrete ones alike.

use crate::{Predicate, Reduce, Search, Source, Transform};

/// Invokes a [`Source`] behavior.
pub fn produce<S>(source: &S) -> S::Output
where
    S: Source + ?Sized,
{
    source.call()
}

/// Invokes a [`Predicate`] behavior against the given input.
pub fn test<P>(predicate: &P, input: P::Input) -> bool
where
    P: Predicate + ?Sized,
{
    predicate.call(input)
}

/// Invokes a [`Transform`] behavior on the given value.
pub fn apply<T>(transform: &T, value: T::Value) -> T::Value
where
    T: Transform + ?Sized,
{
    transform.call(value)
}

/// Invokes a [`Search`] behavior over the given slice and target.
pub fn count<S>(search: &S, items: &[S::Item], target: &S::Item) -> usize
where
    S: Search + ?Sized,
{
    search.call(items, target)
}

/// Invokes a [`Reduce`] behavior over the given slice.
///
/// # Errors
///
/// Returns the behavior's failure unchanged; the invoker never recovers on
/// the behavior's behalf.
pub fn reduce<R>(reduce: &R, items: &[R::Item]) -> Result<R::Output, R::Error>
where
    R: Reduce + ?Sized,
{
    reduce.call(items)
}

#[cfg(test)]
mod tests {
    use crate::{predicate_fn, source_fn, transform_fn, Transform};

    use super::*;

    #[test]
    fn invokers_pass_results_through_unmodified() {
        assert_eq!(produce(&source_fn(|| 7)), 7);
        assert!(test(&predicate_fn(|n: i32| n > 0), 3));
        assert_eq!(apply(&transform_fn(|n: i32| n * 2), 21), 42);
    }

    #[test]
    fn invokers_accept_boxed_behaviors() {
        let behavior: Box<dyn Transform<Value = String>> =
            Box::new(transform_fn(|s: String| s.to_lowercase()));
        assert_eq!(apply(behavior.as_ref(), "Hi".to_string()), "hi");
    }
}
