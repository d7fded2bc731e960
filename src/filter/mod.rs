//! Predicate trees and the filtering iterator built on them.

pub mod filter_iterator;
pub mod predicate;

pub use filter_iterator::FilterIterator;
pub use predicate::{and, not, or, Predicate};
