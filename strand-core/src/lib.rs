//! Core contracts for Strand.
//!
//! A *contract* is a trait with exactly one required method, whose associated
//! types fix the operation's parameter, return, and failure shape. A
//! *behavior* is any value implementing a contract: a named struct, or an
//! anonymous closure wrapped by one of the `*_fn` adapters. Generic *invoker*
//! functions execute a behavior through its contract, passing results and
//! failures through unchanged.

mod invoke;
mod predicate;
mod reduce;
mod search;
mod source;
mod transform;

pub use invoke::{apply, count, produce, reduce, test};
pub use predicate::{predicate_fn, Predicate, PredicateFn};
pub use reduce::{reduce_fn, Reduce, ReduceFn};
pub use search::{search_fn, Search, SearchFn};
pub use source::{source_fn, Source, SourceFn};
pub use transform::{transform_fn, Transform, TransformFn};
