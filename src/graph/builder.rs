//! Fluent API for building Graph instances.

use crate::types::{GraphResult, NodeValue, DEFAULT_WEIGHT};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes are added before edges; `build` reports the first failure.
pub struct GraphBuilder<T> {
    nodes: Vec<T>,
    edges: Vec<(T, T, String)>,
}

impl<T: NodeValue> GraphBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node.
    pub fn node(&mut self, value: T) -> &mut Self {
        self.nodes.push(value);
        self
    }

    /// Add several nodes.
    pub fn nodes(&mut self, values: impl IntoIterator<Item = T>) -> &mut Self {
        self.nodes.extend(values);
        self
    }

    /// Connect two nodes with an empty weight.
    pub fn edge(&mut self, source: T, destination: T) -> &mut Self {
        self.weighted_edge(source, destination, DEFAULT_WEIGHT)
    }

    /// Connect two nodes with a weight.
    pub fn weighted_edge(
        &mut self,
        source: T,
        destination: T,
        weight: impl Into<String>,
    ) -> &mut Self {
        self.edges.push((source, destination, weight.into()));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<T>> {
        let mut graph = Graph::new();
        for value in self.nodes {
            graph.add_node(value)?;
        }
        for (source, destination, weight) in self.edges {
            graph.add_weighted_edge(&source, &destination, weight)?;
        }
        Ok(graph)
    }
}

impl<T: NodeValue> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
