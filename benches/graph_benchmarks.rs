use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use grafo::algo;
use grafo::graph::{Graph, VertexId};

/// Ring of rings: `size` vertices split into cycles of 10, each cycle
/// linked forward to the next
fn ring_of_rings(kind: i64, size: u64) -> Graph {
    let mut graph = Graph::new(kind);
    for i in 0..size {
        graph
            .add_vertex(VertexId::new(i), format!("Stop{}", i), Vec::new())
            .unwrap();
    }
    for i in 0..size {
        let block = i / 10 * 10;
        let next = block + (i + 1) % 10;
        if next < size {
            graph
                .add_edge(VertexId::new(i), VertexId::new(next), None)
                .unwrap();
        }
        if i % 10 == 0 && block + 10 < size {
            graph
                .add_edge(VertexId::new(i), VertexId::new(block + 10), Some("1 km".into()))
                .unwrap();
        }
    }
    graph
}

/// Benchmark vertex and edge insertion throughput
fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| criterion::black_box(ring_of_rings(3, size)));
        });
    }
    group.finish();
}

/// Benchmark Kosaraju over directed graphs
fn bench_scc(c: &mut Criterion) {
    let mut group = c.benchmark_group("scc");

    for size in [100, 1000, 10_000, 100_000].iter() {
        let graph = ring_of_rings(1, *size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let scc = algo::strongly_connected_components(&graph);
                criterion::black_box(scc.len());
            });
        });
    }
    group.finish();
}

/// Benchmark the undirected connectivity check
fn bench_connectivity(c: &mut Criterion) {
    let mut group = c.benchmark_group("connectivity");

    for size in [100, 1000, 10_000, 100_000].iter() {
        let graph = ring_of_rings(3, *size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(algo::connectivity(&graph)));
        });
    }
    group.finish();
}

/// Benchmark degree computation over canonical edges
fn bench_degree_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("degree_sequence");

    for size in [1000, 10_000].iter() {
        let graph = ring_of_rings(3, *size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| criterion::black_box(graph.degree_sequence().len()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insertion,
    bench_scc,
    bench_connectivity,
    bench_degree_sequence
);
criterion_main!(benches);
