mod mean;

pub use mean::{EmptyInput, Mean};
