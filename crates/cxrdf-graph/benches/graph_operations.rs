use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cxrdf_graph::export::{export_ntriples, export_turtle};
use cxrdf_graph::{BlankNode, Literal, NamedNode, RdfGraph};

fn populate(size: usize) -> RdfGraph {
    let mut graph = RdfGraph::new();
    graph.bind("ex", "http://example.org/").unwrap();
    let id = NamedNode::new_unchecked("http://example.org/id");
    let label = NamedNode::new_unchecked("http://example.org/label");
    for i in 0..size {
        let node = BlankNode::default();
        graph.add(node.clone(), id.clone(), Literal::from(i as i64));
        graph.add(node, label.clone(), Literal::new_simple_literal(format!("node_{i}")));
    }
    graph
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("populate", size), size, |b, &size| {
            b.iter(|| black_box(populate(size)));
        });
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let graph = populate(10_000);

    group.bench_function("ntriples", |b| {
        b.iter(|| black_box(export_ntriples(&graph).unwrap()))
    });
    group.bench_function("turtle", |b| b.iter(|| black_box(export_turtle(&graph).unwrap())));

    group.finish();
}

criterion_group!(benches, bench_insert, bench_serialize);
criterion_main!(benches);
