use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use filmgraph::graph::{CreatorRecord, Dataset, GraphStore, WorkRecord};
use filmgraph::query::{execute, library, Depth};

/// Synthetic catalogue: `size` works over 50 directors and 30 genres
fn catalogue(size: usize) -> GraphStore {
    let works = (0..size)
        .map(|i| WorkRecord {
            id: format!("Q{}", i),
            title: format!("Film {}", i),
            year: (i % 7 != 0).then_some(1950 + (i % 70) as i64),
            creators: vec![CreatorRecord {
                id: format!("Q9{:04}", i % 50),
                name: Some(format!("Director {}", i % 50)),
            }],
            topics: vec![format!("Genre {}", i % 30), format!("Genre {}", (i * 7) % 30)],
        })
        .collect();
    Dataset { works }.into_store().unwrap()
}

/// Related-works scoring against every other work
fn bench_related_works(c: &mut Criterion) {
    let mut group = c.benchmark_group("related_works");

    for size in [100, 1000, 10_000].iter() {
        let store = catalogue(*size);
        let query = library::related_works("Q1", 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(execute(&store, &query).unwrap()));
        });
    }
    group.finish();
}

/// One- and two-hop topic co-occurrence
fn bench_topic_subgraph(c: &mut Criterion) {
    let mut group = c.benchmark_group("topic_subgraph");
    let store = catalogue(10_000);

    for depth in [Depth::One, Depth::Two] {
        let query = library::topic_subgraph("Genre 3", depth, 25);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(execute(&store, &query).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_related_works, bench_topic_subgraph);
criterion_main!(benches);
