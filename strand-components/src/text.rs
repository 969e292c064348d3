mod reverse;

pub use reverse::Reverse;
