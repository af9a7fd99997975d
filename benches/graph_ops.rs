use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weightgraph::Graph;

const N: i64 = 200;

fn ring(directed: bool) -> Graph {
    let mut graph = Graph::new(directed);
    let vertices: Vec<_> = (0..N).map(|v| graph.create_vertex(v)).collect();
    let edges: Vec<_> = (0..vertices.len())
        .map(|i| {
            let next = (i + 1) % vertices.len();
            graph
                .create_edge(vertices[i], vertices[next], i as f64)
                .expect("vertex exists")
        })
        .collect();
    graph.add_edges(&edges).expect("fresh edges");
    graph
}

fn bench_add_edges(c: &mut Criterion) {
    c.bench_function("add_edges_ring_200", |b| b.iter(|| black_box(ring(false))));
}

fn bench_reverse(c: &mut Criterion) {
    let mut graph = ring(true);
    c.bench_function("reverse_ring_200", |b| b.iter(|| graph.reverse()));
}

fn bench_adjacency_matrix(c: &mut Criterion) {
    let graph = ring(false);
    c.bench_function("adjacency_matrix_ring_200", |b| {
        b.iter(|| black_box(graph.adjacency_matrix()))
    });
}

criterion_group!(benches, bench_add_edges, bench_reverse, bench_adjacency_matrix);
criterion_main!(benches);
