//! JSON graph documents consumed by the CLI.
//!
//! ```json
//! {
//!   "nodes": ["Manhattan", "Brooklyn"],
//!   "edges": [{"source": "Manhattan", "destination": "Brooklyn", "weight": "2"}]
//! }
//! ```
//!
//! `weight` may be omitted (empty weight). A `null` anywhere a value is
//! required is reported as [`GraphError::NullValue`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, GraphBuilder};
use crate::types::{GraphError, GraphResult, DEFAULT_WEIGHT};

/// A graph as written in a JSON file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Node values, in insertion order.
    #[serde(default)]
    pub nodes: Vec<Option<String>>,
    /// Connections, in insertion order.
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

/// One connection in a [`GraphDocument`].
#[derive(Debug, Serialize, Deserialize)]
pub struct EdgeDocument {
    pub source: Option<String>,
    pub destination: Option<String>,
    #[serde(default = "default_weight")]
    pub weight: Option<String>,
}

fn default_weight() -> Option<String> {
    Some(DEFAULT_WEIGHT.to_string())
}

impl GraphDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a document from a file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build the graph, adding nodes then edges in document order.
    pub fn into_graph(self) -> GraphResult<Graph<String>> {
        let mut builder = GraphBuilder::new();
        for value in self.nodes {
            builder.node(value.ok_or(GraphError::NullValue("node value"))?);
        }
        for edge in self.edges {
            let source = edge.source.ok_or(GraphError::NullValue("edge source"))?;
            let destination = edge
                .destination
                .ok_or(GraphError::NullValue("edge destination"))?;
            let weight = edge.weight.ok_or(GraphError::NullValue("edge weight"))?;
            builder.weighted_edge(source, destination, weight);
        }
        builder.build()
    }
}

/// Load a graph straight from a JSON file.
pub fn load_graph(path: &Path) -> GraphResult<Graph<String>> {
    GraphDocument::read_from_file(path)?.into_graph()
}
