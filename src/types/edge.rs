//! The undirected edge record shared by both of its endpoints.

use std::fmt;

/// Identity of an edge inside one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) u64);

impl EdgeId {
    /// The raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A weighted, undirected connection between two node values.
///
/// One record exists per connection. The graph owns it; both endpoint nodes
/// refer to it by [`EdgeId`], so the weight seen from either side is always
/// the same.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<T> {
    /// Stable id within the owning graph.
    pub(crate) id: EdgeId,
    /// The two endpoints in the order they were first connected.
    pub(crate) endpoints: (T, T),
    /// Free-form label. Never used for ordering or routing.
    pub(crate) weight: String,
}

impl<T: PartialEq> Edge<T> {
    pub(crate) fn new(id: EdgeId, first: T, second: T, weight: String) -> Self {
        Self {
            id,
            endpoints: (first, second),
            weight,
        }
    }

    /// Id of this edge.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Both endpoints, in the order they were first connected.
    pub fn endpoints(&self) -> (&T, &T) {
        (&self.endpoints.0, &self.endpoints.1)
    }

    /// Current weight label.
    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: String) {
        self.weight = weight;
    }

    /// The endpoint opposite `from`, or `None` if `from` is not on this edge.
    pub fn opposite(&self, from: &T) -> Option<&T> {
        if self.endpoints.0 == *from {
            Some(&self.endpoints.1)
        } else if self.endpoints.1 == *from {
            Some(&self.endpoints.0)
        } else {
            None
        }
    }

    /// True if this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &T, b: &T) -> bool {
        (self.endpoints.0 == *a && self.endpoints.1 == *b)
            || (self.endpoints.0 == *b && self.endpoints.1 == *a)
    }
}

impl<T: fmt::Debug> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -- {:?}", self.endpoints.0, self.endpoints.1)?;
        if !self.weight.is_empty() {
            write!(f, " [{}]", self.weight)?;
        }
        Ok(())
    }
}
