//! Graph vertices.

use std::fmt;

use super::EdgeId;

/// A vertex identified by its value, holding its edges in insertion order.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) edges: Vec<EdgeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            edges: Vec::new(),
        }
    }

    /// The value identifying this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Number of edges touching this node.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Ids of this node's edges, oldest first.
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    /// Drop `edge` from the list. Returns false if it was not attached.
    pub(crate) fn detach(&mut self, edge: EdgeId) -> bool {
        match self.edges.iter().position(|&e| e == edge) {
            Some(pos) => {
                self.edges.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({} edges)", self.value, self.edges.len())
    }
}
