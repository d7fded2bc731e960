//! Graph traversal cursors (BFS and DFS).

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;

use log::{trace, warn};

use crate::cursor::Cursor;
use crate::types::{GraphError, GraphResult, NodeValue};

use super::registry::IteratorId;
use super::undirected::GraphState;

/// Order in which a traversal visits the reachable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
    /// Breadth-first: neighbors are queued in edge-insertion order.
    Bfs,
    /// Depth-first: neighbors are stacked in edge-insertion order, so the
    /// most recently connected neighbor is explored first.
    Dfs,
}

impl SearchType {
    /// Return a short name for this search type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    /// Parse a search type from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" | "breadth_first" => Some(Self::Bfs),
            "dfs" | "depth" | "depth_first" => Some(Self::Dfs),
            _ => None,
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Pending nodes: FIFO for BFS, LIFO for DFS.
#[derive(Debug)]
enum Frontier<T> {
    Queue(VecDeque<T>),
    Stack(Vec<T>),
}

impl<T> Frontier<T> {
    fn seeded(mode: SearchType, start: T) -> Self {
        match mode {
            SearchType::Bfs => Self::Queue(VecDeque::from([start])),
            SearchType::Dfs => Self::Stack(vec![start]),
        }
    }

    fn push(&mut self, value: T) {
        match self {
            Self::Queue(queue) => queue.push_back(value),
            Self::Stack(stack) => stack.push(value),
        }
    }

    fn pop(&mut self) -> Option<T> {
        match self {
            Self::Queue(queue) => queue.pop_front(),
            Self::Stack(stack) => stack.pop(),
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize {
        match self {
            Self::Queue(queue) => queue.len(),
            Self::Stack(stack) => stack.len(),
        }
    }
}

/// A pull-based BFS/DFS cursor over the component reachable from its start.
///
/// The cursor owns its frontier and visited set and reads nodes from the
/// graph only while stepping. Once the graph is mutated, every call fails
/// with [`GraphError::StaleIterator`].
pub struct Traversal<T: NodeValue> {
    graph: Rc<RefCell<GraphState<T>>>,
    id: IteratorId,
    mode: SearchType,
    frontier: Frontier<T>,
    visited: HashSet<T>,
}

impl<T: NodeValue> Traversal<T> {
    pub(crate) fn new(
        graph: Rc<RefCell<GraphState<T>>>,
        id: IteratorId,
        start: T,
        mode: SearchType,
    ) -> Self {
        let visited = HashSet::from([start.clone()]);
        Self {
            graph,
            id,
            mode,
            frontier: Frontier::seeded(mode, start),
            visited,
        }
    }

    /// The search order of this cursor.
    pub fn mode(&self) -> SearchType {
        self.mode
    }

    /// Registry identity of this cursor.
    pub fn id(&self) -> IteratorId {
        self.id
    }

    /// False once the graph has been mutated since this cursor was issued.
    pub fn is_valid(&self) -> bool {
        self.graph.borrow().registry.is_valid(self.id)
    }

    /// Nodes discovered so far, including ones not yet returned.
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }

    /// Nodes discovered but not yet returned.
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }

    fn ensure_valid(&self) -> GraphResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GraphError::StaleIterator)
        }
    }
}

impl<T: NodeValue> Cursor for Traversal<T> {
    type Item = T;

    fn has_next(&mut self) -> GraphResult<bool> {
        self.ensure_valid()?;
        Ok(!self.frontier.is_empty())
    }

    fn next_value(&mut self) -> GraphResult<T> {
        let state = self.graph.borrow();
        if !state.registry.is_valid(self.id) {
            return Err(GraphError::StaleIterator);
        }
        let current = self.frontier.pop().ok_or(GraphError::Exhausted)?;
        let node = state
            .nodes
            .get(&current)
            .ok_or_else(|| GraphError::not_found(&current))?;

        for neighbor in node
            .edges
            .iter()
            .filter_map(|id| state.edges.get(id))
            .filter_map(|edge| edge.opposite(&current))
        {
            if self.visited.insert(neighbor.clone()) {
                self.frontier.push(neighbor.clone());
            }
        }

        trace!(
            "{} step {:?}: {:?} ({} pending)",
            self.mode,
            self.id,
            current,
            self.frontier.len()
        );
        Ok(current)
    }
}

impl<T: NodeValue> Drop for Traversal<T> {
    fn drop(&mut self) {
        match self.graph.try_borrow_mut() {
            Ok(mut state) => state.registry.release(self.id),
            Err(_) => warn!(
                "{:?} dropped while graph state is borrowed; entry not released",
                self.id
            ),
        }
    }
}

impl<T: NodeValue> fmt::Debug for Traversal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("frontier", &self.frontier)
            .field("visited", &self.visited.len())
            .finish()
    }
}
