mod factorial;
mod multiple_of;

pub use factorial::Factorial;
pub use multiple_of::MultipleOf;
