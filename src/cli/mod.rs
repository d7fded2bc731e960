//! Command-line front end: graph documents and command implementations.

pub mod commands;
pub mod document;

pub use document::{load_graph, EdgeDocument, GraphDocument};
