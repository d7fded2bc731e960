//! Criterion benchmarks for walkgraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use walkgraph::cursor::Cursor;
use walkgraph::filter::Predicate;
use walkgraph::graph::{Graph, SearchType};

/// Build a random graph with roughly `edges_per_node` connections per node.
fn make_graph(node_count: u64, edges_per_node: usize) -> Graph<u64> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();
    for i in 0..node_count {
        let _ = graph.add_node(i);
    }
    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..node_count);
            if target != i {
                let _ = graph.add_weighted_edge(&i, &target, "1");
            }
        }
    }
    graph
}

fn bench_add_node(c: &mut Criterion) {
    let mut graph = make_graph(10_000, 3);
    let mut next = 10_000u64;

    c.bench_function("add_node_to_10k", |b| {
        b.iter(|| {
            let _ = graph.add_node(next);
            next += 1;
        })
    });
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph = make_graph(10_000, 3);

    c.bench_function("add_edge_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let src = rng.gen_range(0..10_000u64);
            let tgt = rng.gen_range(0..10_000u64);
            if src != tgt {
                let _ = graph.add_edge(&src, &tgt);
            }
        })
    });
}

fn bench_full_traversal(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);

    for mode in [SearchType::Bfs, SearchType::Dfs] {
        c.bench_function(&format!("{}_10k", mode), |b| {
            b.iter(|| {
                let count = graph
                    .traverse(&0, mode)
                    .map(|t| t.values().count())
                    .unwrap_or(0);
                criterion::black_box(count)
            })
        });
    }
}

fn bench_filtered_traversal(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);

    c.bench_function("bfs_filtered_10k", |b| {
        b.iter(|| {
            let even = Predicate::leaf("even", |v: &u64| v % 2 == 0);
            let small = Predicate::leaf("small", |v: &u64| *v < 5_000);
            let count = graph
                .bfs(&0)
                .map(|t| t.filter_by(even & !small).values().count())
                .unwrap_or(0);
            criterion::black_box(count)
        })
    });
}

criterion_group!(
    benches,
    bench_add_node,
    bench_add_edge,
    bench_full_traversal,
    bench_filtered_traversal
);
criterion_main!(benches);
