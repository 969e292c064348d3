use std::marker::PhantomData;

/// A contract for behaviors that count occurrences of a target in a slice.
///
/// The item type is resolved at the binding site, so the same behavior shape
/// works over integers, strings, or any other element type.
///
/// # Example
///
/// ```
/// use strand_core::{search_fn, Search};
///
/// let count_equal = search_fn(|items: &[i32], target: &i32| {
///     items.iter().filter(|item| *item == target).count()
/// });
///
/// assert_eq!(count_equal.call(&[1, 2, 3, 4, 2, 3, 4, 4, 5], &4), 3);
/// ```
pub trait Search {
    type Item;

    /// Returns how many elements of `items` match `target`.
    fn call(&self, items: &[Self::Item], target: &Self::Item) -> usize;
}

/// A [`Search`] behavior backed by a closure.
///
/// Created by [`search_fn`].
pub struct SearchFn<T, F> {
    f: F,
    _item: PhantomData<fn(T)>,
}

/// Binds a counting closure to the [`Search`] contract.
pub fn search_fn<T, F>(f: F) -> SearchFn<T, F>
where
    F: Fn(&[T], &T) -> usize,
{
    SearchFn {
        f,
        _item: PhantomData,
    }
}

impl<T, F> Search for SearchFn<T, F>
where
    F: Fn(&[T], &T) -> usize,
{
    type Item = T;

    fn call(&self, items: &[T], target: &T) -> usize {
        (self.f)(items, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_equal<T: PartialEq>() -> SearchFn<T, impl Fn(&[T], &T) -> usize> {
        search_fn(|items: &[T], target: &T| items.iter().filter(|item| *item == target).count())
    }

    #[test]
    fn counts_integer_matches() {
        let search = count_equal();
        assert_eq!(search.call(&[1, 2, 3, 4, 2, 3, 4, 4, 5], &4), 3);
        assert_eq!(search.call(&[1, 2, 3], &9), 0);
    }

    #[test]
    fn counts_string_matches() {
        let search = count_equal();
        assert_eq!(search.call(&["One", "Two", "Three", "Two"], &"Two"), 2);
    }

    #[test]
    fn empty_slice_has_no_matches() {
        let search = count_equal::<i32>();
        assert_eq!(search.call(&[], &1), 0);
    }
}
