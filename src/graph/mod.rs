//! In-memory graph operations: the core data structure.

pub mod builder;
pub mod registry;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use registry::{IteratorId, ValidityRegistry};
pub use traversal::{SearchType, Traversal};
pub use undirected::{EdgeInsert, Graph};
