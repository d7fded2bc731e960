//! walkgraph: an undirected in-memory graph with checked traversal cursors.
//!
//! Nodes are identified by their own value. Every structural change
//! invalidates all outstanding BFS/DFS cursors, which then fail with
//! [`GraphError::StaleIterator`] instead of walking stale state. Cursor
//! output can be narrowed with a [`FilterIterator`] over a [`Predicate`]
//! tree.

pub mod cli;
pub mod cursor;
pub mod filter;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use cursor::{Cursor, IterCursor, Values};
pub use filter::{FilterIterator, Predicate};
pub use graph::{
    EdgeInsert, Graph, GraphBuilder, IteratorId, SearchType, Traversal, ValidityRegistry,
};
pub use types::{Edge, EdgeId, GraphError, GraphResult, Node, NodeValue, DEFAULT_WEIGHT};
