//! All data types for the walkgraph library.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::{Edge, EdgeId};
pub use error::{GraphError, GraphResult};
pub use node::Node;

/// Weight given to edges added without one.
pub const DEFAULT_WEIGHT: &str = "";

/// Bounds every node value must satisfy: it is its own hashable key.
pub trait NodeValue: Clone + Eq + std::hash::Hash + std::fmt::Debug {}

impl<T: Clone + Eq + std::hash::Hash + std::fmt::Debug> NodeValue for T {}
