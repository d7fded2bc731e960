//! Error types for the walkgraph library.

use thiserror::Error;

/// All errors that can occur in the walkgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A required argument (node value, edge endpoint, weight) was absent.
    #[error("Missing required value: {0}")]
    NullValue(&'static str),

    /// A node with this value already exists.
    #[error("Node {0} already exists")]
    DuplicateKey(String),

    /// No node with this value exists.
    #[error("Node {0} not found")]
    NotFound(String),

    /// The request is structurally disallowed (self-loops).
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// The graph changed after this iterator was issued.
    #[error("Graph was modified after the iterator was created; request a new iterator")]
    StaleIterator,

    /// `next` was called with no element left.
    #[error("No more elements")]
    Exhausted,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph document.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GraphError {
    pub(crate) fn not_found<Q: std::fmt::Debug + ?Sized>(value: &Q) -> Self {
        Self::NotFound(format!("{:?}", value))
    }

    pub(crate) fn duplicate<Q: std::fmt::Debug + ?Sized>(value: &Q) -> Self {
        Self::DuplicateKey(format!("{:?}", value))
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Convenience result type for walkgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
