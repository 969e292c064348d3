//! Ready-made behaviors implementing the `strand-core` contracts.

pub mod math;
pub mod search;
pub mod stats;
pub mod text;
