use std::marker::PhantomData;

use num_traits::Float;
use strand_core::Reduce;
use thiserror::Error;

/// The failure raised when a sequence-to-scalar behavior receives no input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("empty input sequence")]
pub struct EmptyInput;

/// A behavior that computes the arithmetic mean of a slice of floats.
///
/// Implements [`Reduce`] for any floating-point item type. A slice of length
/// one yields its sole element; the empty slice is the one failure case,
/// reported as [`EmptyInput`] rather than a `NaN` from dividing by zero.
///
/// # Example
///
/// ```
/// use strand_components::stats::{EmptyInput, Mean};
/// use strand_core::Reduce;
///
/// let mean = Mean::new();
/// assert_eq!(mean.call(&[1.0, 2.0, 3.0]), Ok(2.0));
/// assert_eq!(mean.call(&[]), Err(EmptyInput));
/// ```
pub struct Mean<T> {
    _item: PhantomData<T>,
}

impl<T> Mean<T> {
    /// Creates a new [`Mean`] behavior.
    #[must_use]
    pub fn new() -> Self {
        Self { _item: PhantomData }
    }
}

impl<T> Default for Mean<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Reduce for Mean<T>
where
    T: Float,
{
    type Item = T;
    type Output = T;
    type Error = EmptyInput;

    fn call(&self, items: &[T]) -> Result<T, EmptyInput> {
        if items.is_empty() {
            return Err(EmptyInput);
        }

        let sum = items.iter().fold(T::zero(), |acc, &item| acc + item);

        // The unwrap is safe because every float type can represent a slice
        // length, if only approximately.
        let len = T::from(items.len()).unwrap();

        Ok(sum / len)
    }
}
