use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use frontier_sssp::graph::generators::{generate_chain, generate_grid, generate_random};
use frontier_sssp::{Dijkstra, FrontierSearch};

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    for &size in &[500usize, 2_000, 5_000] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let mut graph = generate_random(size, 4.0, 100, &mut rng).unwrap();
        let source = graph.nodes().next().map(|(id, _)| id).unwrap();

        group.bench_with_input(BenchmarkId::new("frontier", size), &size, |b, _| {
            b.iter(|| FrontierSearch::new().run(&mut graph, black_box(source), None).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("dijkstra", size), &size, |b, _| {
            b.iter(|| Dijkstra::new().shortest_paths(&graph, black_box(source)).unwrap())
        });
    }
    group.finish();
}

fn bench_grid_to_corner(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(9);
    let mut graph = generate_grid(40, 40, 9, &mut rng).unwrap();
    let source = graph.require("v0").unwrap();
    let target = graph.require("v1599").unwrap();

    c.bench_function("grid 40x40 corner to corner", |b| {
        b.iter(|| FrontierSearch::new().run(&mut graph, source, Some(black_box(target))).unwrap())
    });
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    for &size in &[250usize, 1_000] {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let mut graph = generate_chain(size, 10, &mut rng).unwrap();
        let source = graph.require("v0").unwrap();

        group.bench_with_input(BenchmarkId::new("frontier", size), &size, |b, _| {
            b.iter(|| FrontierSearch::new().run(&mut graph, black_box(source), None).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random, bench_grid_to_corner, bench_chain);
criterion_main!(benches);
