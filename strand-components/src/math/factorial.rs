use std::marker::PhantomData;

use num_traits::{PrimInt, Unsigned};
use strand_core::Transform;

/// A behavior that computes the factorial of an unsigned integer.
///
/// Implements [`Transform`] over any primitive unsigned integer type. The
/// factorial of zero is one.
///
/// Overflow follows the arithmetic of the chosen integer type; `u64` holds
/// factorials up to 20!.
///
/// # Example
///
/// ```
/// use strand_components::math::Factorial;
/// use strand_core::Transform;
///
/// let factorial = Factorial::<u64>::new();
/// assert_eq!(factorial.call(5), 120);
/// ```
pub struct Factorial<T> {
    _value: PhantomData<T>,
}

impl<T> Factorial<T> {
    /// Creates a new [`Factorial`] behavior.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<T> Default for Factorial<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Transform for Factorial<T>
where
    T: PrimInt + Unsigned,
{
    type Value = T;

    fn call(&self, value: T) -> T {
        let one = T::one();
        let mut product = one;
        let mut i = one;
        while i <= value {
            product = product * i;
            i = i + one;
        }
        product
    }
}
