//! Shared behaviors for the integration tests.

pub mod behaviors {
    use strand_core::{Predicate, Transform};

    /// A transform that clamps values into a fixed range.
    ///
    /// The bounds are captured as immutable fields when the behavior is
    /// constructed, the struct-based analog of a closure capture.
    pub struct Clamp {
        pub min: f64,
        pub max: f64,
    }

    impl Transform for Clamp {
        type Value = f64;

        fn call(&self, value: f64) -> f64 {
            value.max(self.min).min(self.max)
        }
    }

    /// A predicate that tests inclusive range membership.
    pub struct InRange {
        pub min: i64,
        pub max: i64,
    }

    impl Predicate for InRange {
        type Input = i64;

        fn call(&self, input: i64) -> bool {
            self.min <= input && input <= self.max
        }
    }
}
