use strand_core::Transform;

/// A behavior that reverses the character order of a string.
///
/// Implements [`Transform`] over `String`. Reversal operates on `char`
/// boundaries, not bytes, so multi-byte characters stay intact. Applying the
/// behavior twice returns the original string.
///
/// # Example
///
/// ```
/// use strand_components::text::Reverse;
/// use strand_core::Transform;
///
/// assert_eq!(Reverse.call("Lambda".to_string()), "adbmaL");
/// ```
pub struct Reverse;

impl Transform for Reverse {
    type Value = String;

    fn call(&self, value: String) -> String {
        value.chars().rev().collect()
    }
}
