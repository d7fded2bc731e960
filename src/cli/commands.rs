//! CLI command implementations.

use std::path::Path;

use crate::cursor::Cursor;
use crate::filter::Predicate;
use crate::graph::{Graph, SearchType};
use crate::types::GraphResult;

use super::document::load_graph;

/// Build the value filter described by `--skip`, `--keep` and `--any`.
///
/// Each skipped char becomes a "lacks" leaf, each kept char a "has" leaf.
/// Leaves are joined with AND, or with OR when `any` is set. Returns `None`
/// when no leaf was requested.
pub fn build_filter(skip: &[char], keep: &[char], any: bool) -> Option<Predicate<String>> {
    skip.iter()
        .map(|&c| Predicate::lacks_char(c))
        .chain(keep.iter().map(|&c| Predicate::contains_char(c)))
        .reduce(|acc, leaf| if any { acc.or(leaf) } else { acc.and(leaf) })
}

/// Run a traversal from `start`, optionally filtered, and collect the values.
pub fn traverse_filtered(
    graph: &Graph<String>,
    start: &str,
    mode: SearchType,
    filter: Option<Predicate<String>>,
) -> GraphResult<Vec<String>> {
    let traversal = graph.traverse(start, mode)?;
    match filter {
        Some(predicate) => traversal.filter_by(predicate).values().collect(),
        None => traversal.values().collect(),
    }
}

/// Display node and connection counts plus each node's degree.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let mut values = graph.values();
    values.sort();

    let mut degrees = Vec::with_capacity(values.len());
    for value in &values {
        degrees.push((value.as_str(), graph.degree(value.as_str())?));
    }

    if json {
        let nodes: Vec<serde_json::Value> = degrees
            .iter()
            .map(|(value, degree)| serde_json::json!({"value": value, "degree": degree}))
            .collect();
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "degrees": nodes,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Degrees:");
        for (value, degree) in degrees {
            println!("  {}: {}", value, degree);
        }
    }
    Ok(())
}

/// List the neighbors of a node with the weight of each connection.
pub fn cmd_neighbors(path: &Path, value: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let mut rows = Vec::new();
    for neighbor in graph.neighbors(value)? {
        let weight = graph
            .weight(value, neighbor.as_str())?
            .unwrap_or_default();
        rows.push((neighbor, weight));
    }

    if json {
        let list: Vec<serde_json::Value> = rows
            .iter()
            .map(|(n, w)| serde_json::json!({"value": n, "weight": w}))
            .collect();
        println!(
            "{}",
            serde_json::json!({"node": value, "neighbors": list})
        );
    } else if rows.is_empty() {
        println!("{} has no neighbors", value);
    } else {
        println!("Neighbors of {}:", value);
        for (neighbor, weight) in rows {
            if weight.is_empty() {
                println!("  {}", neighbor);
            } else {
                println!("  {} [{}]", neighbor, weight);
            }
        }
    }
    Ok(())
}

/// Traverse from a start node and print the (optionally filtered) order.
pub fn cmd_traverse(
    path: &Path,
    start: &str,
    mode: SearchType,
    skip: &[char],
    keep: &[char],
    any: bool,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let filter = build_filter(skip, keep, any);
    let filter_text = filter.as_ref().map(|p| p.to_string());
    let values = traverse_filtered(&graph, start, mode, filter)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "start": start,
                "mode": mode.name(),
                "filter": filter_text,
                "values": values,
            })
        );
    } else {
        match filter_text {
            Some(text) => println!("{} from {} where {}:", mode, start, text),
            None => println!("{} from {}:", mode, start),
        }
        for (i, value) in values.iter().enumerate() {
            println!("  {}. {}", i + 1, value);
        }
    }
    Ok(())
}
