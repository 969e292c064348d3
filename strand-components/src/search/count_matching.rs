use std::marker::PhantomData;

use strand_core::Search;

/// A behavior that counts how many elements of a slice equal a target value.
///
/// Implements [`Search`] for any item type with `PartialEq`. Matching uses
/// value equality, so two distinct allocations with equal contents count as
/// a match.
///
/// # Example
///
/// ```
/// use strand_components::search::CountMatching;
/// use strand_core::Search;
///
/// let count = CountMatching::new();
/// assert_eq!(count.call(&["One", "Two", "Three", "Two"], &"Two"), 2);
/// ```
pub struct CountMatching<T> {
    _item: PhantomData<T>,
}

impl<T> CountMatching<T> {
    /// Creates a new [`CountMatching`] behavior.
    #[must_use]
    pub fn new() -> Self {
        Self { _item: PhantomData }
    }
}

impl<T> Default for CountMatching<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Search for CountMatching<T>
where
    T: PartialEq,
{
    type Item = T;

    fn call(&self, items: &[T], target: &T) -> usize {
        items.iter().filter(|item| *item == target).count()
    }
}
