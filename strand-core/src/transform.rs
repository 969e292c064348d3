use std::marker::PhantomData;

/// A contract for behaviors that map a value to another value of the same type.
///
/// The value type is a single associated type, so one trait covers numeric
/// transformers, string transformers, and everything in between; each binding
/// site picks its own `Value`. Two references may hold `Transform` behaviors
/// instantiated at different types at the same time, and neither binding
/// affects the other.
///
/// # Example
///
/// ```
/// use strand_core::{transform_fn, Transform};
///
/// let square = transform_fn(|n: i32| n * n);
/// let shout = transform_fn(|s: String| s.to_uppercase());
///
/// assert_eq!(square.call(12), 144);
/// assert_eq!(shout.call("lambda".to_string()), "LAMBDA");
/// ```
pub trait Transform {
    type Value;

    /// Maps the given value to its transformed counterpart.
    fn call(&self, value: Self::Value) -> Self::Value;
}

/// A [`Transform`] behavior backed by a closure.
///
/// Created by [`transform_fn`].
pub struct TransformFn<T, F> {
    f: F,
    _value: PhantomData<fn(T) -> T>,
}

/// Binds a `T -> T` closure to the [`Transform`] contract.
pub fn transform_fn<T, F>(f: F) -> TransformFn<T, F>
where
    F: Fn(T) -> T,
{
    TransformFn {
        f,
        _value: PhantomData,
    }
}

impl<T, F> Transform for TransformFn<T, F>
where
    F: Fn(T) -> T,
{
    type Value = T;

    fn call(&self, value: T) -> T {
        (self.f)(value)
    }
}
