//! Core graph structure: value-keyed nodes, shared undirected edges, and the
//! validity registry for issued traversal iterators.

use std::borrow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use log::debug;

use crate::types::{Edge, EdgeId, GraphError, GraphResult, Node, NodeValue, DEFAULT_WEIGHT};

use super::registry::ValidityRegistry;
use super::traversal::{SearchType, Traversal};

/// Outcome of a successful edge insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    /// A new connection was created.
    Created,
    /// The nodes were already connected; only the weight changed.
    Reweighted,
}

/// Graph state shared between the [`Graph`] handle and its iterators.
#[derive(Debug)]
pub(crate) struct GraphState<T> {
    pub(crate) nodes: HashMap<T, Node<T>>,
    pub(crate) edges: HashMap<EdgeId, Edge<T>>,
    pub(crate) registry: ValidityRegistry,
    next_edge_id: u64,
}

impl<T: NodeValue> GraphState<T> {
    fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
            registry: ValidityRegistry::new(),
            next_edge_id: 0,
        }
    }

    /// The stored key equal to `value`.
    fn key_of<Q>(&self, value: &Q) -> GraphResult<T>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.nodes
            .get_key_value(value)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| GraphError::not_found(value))
    }

    /// The edge joining `a` and `b`, if any.
    fn find_edge(&self, a: &T, b: &T) -> Option<EdgeId> {
        self.nodes.get(a)?.edges.iter().copied().find(|id| {
            self.edges.get(id).is_some_and(|edge| edge.connects(a, b))
        })
    }

    fn invalidate(&mut self, cause: &str) {
        let flipped = self.registry.invalidate_all();
        if flipped > 0 {
            debug!("{}: invalidated {} iterator(s)", cause, flipped);
        }
    }

    fn add_node(&mut self, value: T) -> GraphResult<()> {
        if self.nodes.contains_key(&value) {
            return Err(GraphError::duplicate(&value));
        }
        debug!("add_node {:?}", value);
        self.nodes.insert(value.clone(), Node::new(value));
        self.invalidate("add_node");
        Ok(())
    }

    fn add_edge<Q>(
        &mut self,
        source: &Q,
        destination: &Q,
        weight: String,
    ) -> GraphResult<EdgeInsert>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        if source == destination {
            return Err(GraphError::InvalidOperation(format!(
                "self-loop on {:?} is not allowed",
                source
            )));
        }
        let source = self.key_of(source)?;
        let destination = self.key_of(destination)?;

        let outcome = match self.find_edge(&source, &destination) {
            Some(id) => {
                if let Some(edge) = self.edges.get_mut(&id) {
                    edge.set_weight(weight);
                }
                EdgeInsert::Reweighted
            }
            None => {
                let id = EdgeId(self.next_edge_id);
                self.next_edge_id += 1;
                for end in [&source, &destination] {
                    if let Some(node) = self.nodes.get_mut::<T>(end) {
                        node.attach(id);
                    }
                }
                self.edges
                    .insert(id, Edge::new(id, source.clone(), destination.clone(), weight));
                EdgeInsert::Created
            }
        };

        debug!("add_edge {:?} -- {:?}: {:?}", source, destination, outcome);
        self.invalidate("add_edge");
        Ok(outcome)
    }

    fn remove_node<Q>(&mut self, value: &Q) -> GraphResult<T>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let (key, node) = self
            .nodes
            .remove_entry(value)
            .ok_or_else(|| GraphError::not_found(value))?;

        for id in node.edges {
            let Some(edge) = self.edges.remove(&id) else {
                continue;
            };
            let neighbor = edge.opposite(&key).and_then(|n| self.nodes.get_mut::<T>(n));
            if let Some(neighbor) = neighbor {
                neighbor.detach(id);
            }
        }

        debug!("remove_node {:?}", key);
        self.invalidate("remove_node");
        Ok(key)
    }

    fn remove_edge<Q>(&mut self, source: &Q, destination: &Q) -> GraphResult<bool>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let source = self.key_of(source)?;
        let destination = self.key_of(destination)?;

        let removed = match self.find_edge(&source, &destination) {
            Some(id) => {
                self.edges.remove(&id);
                let mut detached = true;
                for end in [&source, &destination] {
                    detached &= self
                        .nodes
                        .get_mut::<T>(end)
                        .is_some_and(|node| node.detach(id));
                }
                detached
            }
            None => false,
        };

        debug!("remove_edge {:?} -- {:?}: removed={}", source, destination, removed);
        self.invalidate("remove_edge");
        Ok(removed)
    }
}

/// An undirected graph keyed by node value.
///
/// Every structural change (adding or removing a node or an edge) invalidates
/// all traversal iterators issued so far; they fail with
/// [`GraphError::StaleIterator`] on their next use.
///
/// The graph is single-threaded. Iterators share its state through an `Rc`,
/// so neither the graph nor its iterators are `Send`.
pub struct Graph<T> {
    state: Rc<RefCell<GraphState<T>>>,
}

impl<T: NodeValue> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(GraphState::new())),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.state.borrow().nodes.len()
    }

    /// Number of undirected connections.
    pub fn edge_count(&self) -> usize {
        self.state.borrow().edges.len()
    }

    /// Whether a node with this value exists.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.state.borrow().nodes.contains_key(value)
    }

    /// Number of edges touching `value`.
    pub fn degree<Q>(&self, value: &Q) -> GraphResult<usize>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.state
            .borrow()
            .nodes
            .get(value)
            .map(Node::degree)
            .ok_or_else(|| GraphError::not_found(value))
    }

    /// Neighbors of `value` in edge-insertion order.
    pub fn neighbors<Q>(&self, value: &Q) -> GraphResult<Vec<T>>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let state = self.state.borrow();
        let node = state
            .nodes
            .get(value)
            .ok_or_else(|| GraphError::not_found(value))?;
        let neighbors = node
            .edges
            .iter()
            .filter_map(|id| state.edges.get(id))
            .filter_map(|edge| edge.opposite(&node.value))
            .cloned()
            .collect();
        Ok(neighbors)
    }

    /// Weight of the connection between `a` and `b`, or `None` if they are
    /// not connected.
    pub fn weight<Q>(&self, a: &Q, b: &Q) -> GraphResult<Option<String>>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let state = self.state.borrow();
        let a = state.key_of(a)?;
        let b = state.key_of(b)?;
        let weight = state
            .find_edge(&a, &b)
            .and_then(|id| state.edges.get(&id))
            .map(|edge| edge.weight().to_string());
        Ok(weight)
    }

    /// All node values, in no particular order.
    pub fn values(&self) -> Vec<T> {
        self.state.borrow().nodes.keys().cloned().collect()
    }

    /// Snapshot of every edge, in no particular order.
    pub fn edges(&self) -> Vec<Edge<T>> {
        self.state.borrow().edges.values().cloned().collect()
    }

    /// Add a node with no edges.
    pub fn add_node(&mut self, value: T) -> GraphResult<()> {
        self.state.borrow_mut().add_node(value)
    }

    /// Connect two existing nodes with an empty weight.
    pub fn add_edge<Q>(&mut self, source: &Q, destination: &Q) -> GraphResult<EdgeInsert>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.add_weighted_edge(source, destination, DEFAULT_WEIGHT)
    }

    /// Connect two existing nodes, or re-weight their existing connection.
    pub fn add_weighted_edge<Q>(
        &mut self,
        source: &Q,
        destination: &Q,
        weight: impl Into<String>,
    ) -> GraphResult<EdgeInsert>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.state
            .borrow_mut()
            .add_edge(source, destination, weight.into())
    }

    /// Remove a node and every edge touching it. Returns the removed value.
    pub fn remove_node<Q>(&mut self, value: &Q) -> GraphResult<T>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.state.borrow_mut().remove_node(value)
    }

    /// Remove the connection between two nodes, from both sides.
    ///
    /// Returns `Ok(false)` if both nodes exist but were not connected.
    pub fn remove_edge<Q>(&mut self, source: &Q, destination: &Q) -> GraphResult<bool>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.state.borrow_mut().remove_edge(source, destination)
    }

    /// Issue a traversal iterator starting at `start`.
    pub fn traverse<Q>(&self, start: &Q, mode: SearchType) -> GraphResult<Traversal<T>>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let (start, id) = {
            let mut state = self.state.borrow_mut();
            let start = state.key_of(start)?;
            (start, state.registry.register())
        };
        debug!("traverse {:?} from {:?} as {:?}", mode, start, id);
        Ok(Traversal::new(Rc::clone(&self.state), id, start, mode))
    }

    /// Breadth-first iterator from `start`.
    pub fn bfs<Q>(&self, start: &Q) -> GraphResult<Traversal<T>>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.traverse(start, SearchType::Bfs)
    }

    /// Depth-first iterator from `start`.
    pub fn dfs<Q>(&self, start: &Q) -> GraphResult<Traversal<T>>
    where
        T: borrow::Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.traverse(start, SearchType::Dfs)
    }

    /// Iterators issued and not yet dropped.
    pub fn outstanding_iterators(&self) -> usize {
        self.state.borrow().registry.outstanding()
    }

    /// Iterators issued, not yet dropped, and still valid.
    pub fn live_iterators(&self) -> usize {
        self.state.borrow().registry.live()
    }
}

impl<T: NodeValue> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph").field("state", &self.state).finish()
    }
}

impl<T: NodeValue> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph [{} nodes, {} edges]",
            self.node_count(),
            self.edge_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_during_borrow_keeps_registry_entry() {
        let mut graph = Graph::new();
        graph.add_node("A".to_string()).unwrap();
        let traversal = graph.bfs("A").unwrap();

        let guard = graph.state.borrow();
        drop(traversal);
        assert_eq!(guard.registry.outstanding(), 1);
        drop(guard);

        let second = graph.bfs("A").unwrap();
        drop(second);
        assert_eq!(graph.outstanding_iterators(), 1);
    }
}
