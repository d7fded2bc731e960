//! Phase 3 tests: predicate trees and the filter iterator.

use std::cell::Cell;
use std::rc::Rc;

use walkgraph::cursor::{Cursor, IterCursor};
use walkgraph::filter::{and, not, or, FilterIterator, Predicate};
use walkgraph::graph::{Graph, SearchType};
use walkgraph::types::{GraphError, GraphResult};

// ==================== Helpers ====================

fn boroughs() -> Graph<String> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut graph = Graph::new();
    for b in ["Manhattan", "Brooklyn", "Bronx", "Queens", "Staten Island"] {
        graph.add_node(b.to_string()).unwrap();
    }
    graph.add_edge("Manhattan", "Brooklyn").unwrap();
    graph.add_edge("Manhattan", "Bronx").unwrap();
    graph.add_edge("Manhattan", "Queens").unwrap();
    graph.add_edge("Brooklyn", "Staten Island").unwrap();
    graph
}

fn skip(c: char) -> Predicate<String> {
    Predicate::lacks_char(c)
}

fn filtered_bfs(graph: &Graph<String>, predicate: Predicate<String>) -> Vec<String> {
    let mut it = FilterIterator::new(
        graph.traverse("Manhattan", SearchType::Bfs).unwrap(),
        predicate,
    );
    let mut out = Vec::new();
    while it.has_next().unwrap() {
        out.push(it.next_value().unwrap());
    }
    out
}

/// A cursor that counts how many values were pulled from it.
struct Counting {
    inner: IterCursor<std::vec::IntoIter<u32>>,
    pulls: Rc<Cell<usize>>,
}

impl Cursor for Counting {
    type Item = u32;

    fn has_next(&mut self) -> GraphResult<bool> {
        self.inner.has_next()
    }

    fn next_value(&mut self) -> GraphResult<u32> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.next_value()
    }
}

// ==================== Predicate Tests ====================

#[test]
fn test_leaf_predicates() {
    let m = "Manhattan".to_string();
    let q = "Queens".to_string();
    assert!(!skip('M').accept(&m));
    assert!(skip('M').accept(&q));
    assert!(Predicate::<String>::contains_char('Q').accept(&q));
    assert!(!Predicate::<String>::lacks_substring("een").accept(&q));
    assert!(Predicate::<String>::always().accept(&m));
}

#[test]
fn test_combinators() {
    let bronx = "Bronx".to_string();
    let queens = "Queens".to_string();
    assert!(!and(skip('M'), skip('B')).accept(&bronx));
    assert!(and(skip('M'), skip('B')).accept(&queens));
    assert!(or(skip('B'), skip('Q')).accept(&bronx));
    assert!(!or(skip('B'), skip('x')).accept(&bronx));
    assert!(not(skip('B')).accept(&bronx));
    assert!((skip('M') & !skip('Q')).accept(&queens));
    assert!((skip('Q') | skip('M')).accept(&queens));
}

#[test]
fn test_and_short_circuits() {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let counted = Predicate::leaf("counted", move |_: &u32| {
        seen.set(seen.get() + 1);
        true
    });
    let never = Predicate::leaf("never", |_: &u32| false);

    assert!(!never.and(counted).accept(&1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_or_short_circuits() {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let counted = Predicate::leaf("counted", move |_: &u32| {
        seen.set(seen.get() + 1);
        false
    });

    assert!(Predicate::always().or(counted).accept(&1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_predicate_display() {
    let p = and(skip('M'), not(or(skip('B'), skip('Q'))));
    assert_eq!(
        p.to_string(),
        "(lacks 'M' AND NOT (lacks 'B' OR lacks 'Q'))"
    );
    assert_eq!(p.leaf_count(), 3);
}

// ==================== FilterIterator Tests ====================

#[test]
fn test_bfs_single_predicate() {
    let graph = boroughs();
    assert_eq!(
        filtered_bfs(&graph, skip('M')),
        vec!["Brooklyn", "Bronx", "Queens", "Staten Island"]
    );
}

#[test]
fn test_bfs_and_predicate() {
    let graph = boroughs();
    assert_eq!(
        filtered_bfs(&graph, and(skip('M'), skip('B'))),
        vec!["Queens", "Staten Island"]
    );
}

#[test]
fn test_bfs_or_predicate() {
    let graph = boroughs();
    assert_eq!(
        filtered_bfs(&graph, or(skip('M'), skip('B'))),
        vec!["Manhattan", "Brooklyn", "Bronx", "Queens", "Staten Island"]
    );
}

#[test]
fn test_bfs_nested_predicates() {
    let graph = boroughs();
    assert_eq!(
        filtered_bfs(&graph, and(skip('M'), not(skip('Q')))),
        vec!["Queens"]
    );
}

#[test]
fn test_dfs_filter_preserves_order() {
    let graph = boroughs();
    let values: Vec<String> = graph
        .dfs("Manhattan")
        .unwrap()
        .filter_by(skip('Q'))
        .values()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(values, vec!["Manhattan", "Bronx", "Brooklyn", "Staten Island"]);
}

#[test]
fn test_filter_exhausted_is_repeatable() {
    let graph = boroughs();
    let mut it = graph.bfs("Manhattan").unwrap().filter_by(skip('M'));
    for _ in 0..4 {
        it.next_value().unwrap();
    }
    assert!(!it.has_next().unwrap());
    for _ in 0..3 {
        assert!(matches!(it.next_value(), Err(GraphError::Exhausted)));
    }
}

#[test]
fn test_filter_nothing_accepted() {
    let even = Predicate::leaf("even", |v: &u32| v % 2 == 0);
    let mut it = IterCursor::new(vec![1u32, 3, 5]).filter_by(even);
    assert!(!it.has_next().unwrap());
    assert!(matches!(it.next_value(), Err(GraphError::Exhausted)));
}

#[test]
fn test_next_without_has_next() {
    let even = Predicate::leaf("even", |v: &u32| v % 2 == 0);
    let mut it = IterCursor::new(vec![1u32, 2, 3, 4]).filter_by(even);
    assert_eq!(it.next_value().unwrap(), 2);
    assert_eq!(it.next_value().unwrap(), 4);
    assert!(matches!(it.next_value(), Err(GraphError::Exhausted)));
}

#[test]
fn test_has_next_does_not_repull() {
    let pulls = Rc::new(Cell::new(0));
    let source = Counting {
        inner: IterCursor::new(vec![1, 2, 3, 4, 5, 6]),
        pulls: Rc::clone(&pulls),
    };
    let mut it = FilterIterator::new(source, Predicate::leaf("gt3", |v: &u32| *v > 3));

    assert!(it.has_next().unwrap());
    assert_eq!(pulls.get(), 4);
    assert!(it.has_next().unwrap());
    assert!(it.has_next().unwrap());
    assert_eq!(pulls.get(), 4);

    assert_eq!(it.next_value().unwrap(), 4);
    assert_eq!(pulls.get(), 4);
    assert_eq!(it.next_value().unwrap(), 5);
    assert_eq!(pulls.get(), 5);
}

#[test]
fn test_filter_over_plain_iterator() {
    let words = ["Harlem", "Midtown", "Tribeca", "Soho"];
    let kept: Vec<&str> = IterCursor::new(words)
        .filter_by(Predicate::leaf("no M", |w: &&str| !w.contains('M')))
        .values()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(kept, vec!["Harlem", "Tribeca", "Soho"]);
}

#[test]
fn test_stale_error_propagates_through_filter() {
    let mut graph = boroughs();
    let mut it = graph.bfs("Manhattan").unwrap().filter_by(skip('M'));
    assert_eq!(it.next_value().unwrap(), "Brooklyn");

    graph.add_node("Hoboken".to_string()).unwrap();

    assert!(matches!(it.has_next(), Err(GraphError::StaleIterator)));
    assert!(matches!(it.next_value(), Err(GraphError::StaleIterator)));
}

#[test]
fn test_buffered_value_survives_mutation() {
    // A value already pulled by has_next belongs to the filter, not the graph.
    let mut graph = boroughs();
    let mut it = graph.bfs("Manhattan").unwrap().filter_by(skip('M'));
    assert!(it.has_next().unwrap());

    graph.add_node("Hoboken".to_string()).unwrap();

    assert_eq!(it.next_value().unwrap(), "Brooklyn");
    assert!(matches!(it.has_next(), Err(GraphError::StaleIterator)));
}

#[test]
fn test_restart_by_rewrapping() {
    let graph = boroughs();
    let first: Vec<String> = graph
        .bfs("Manhattan")
        .unwrap()
        .filter_by(skip('B'))
        .values()
        .collect::<Result<_, _>>()
        .unwrap();
    let second: Vec<String> = graph
        .bfs("Manhattan")
        .unwrap()
        .filter_by(skip('B'))
        .values()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec!["Manhattan", "Queens", "Staten Island"]);
}
