use strand_core::Predicate;

/// A behavior that tests whether one integer is a multiple of another.
///
/// Implements [`Predicate`] over an `(i64, i64)` pair: the candidate value
/// first, the divisor second. A zero divisor divides nothing, so the test
/// returns `false` rather than panicking.
pub struct MultipleOf;

impl Predicate for MultipleOf {
    type Input = (i64, i64);

    fn call(&self, (value, divisor): (i64, i64)) -> bool {
        divisor != 0 && value % divisor == 0
    }
}
