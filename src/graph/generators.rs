use crate::graph::{DirectedGraph, NodeId};
use crate::Result;
use rand::prelude::*;

/// Name given to vertex `i` by the generators
pub fn vertex_name(i: usize) -> String {
    format!("v{}", i)
}

fn draw_weight<R: Rng>(rng: &mut R, max_weight: i64) -> i64 {
    rng.gen_range(1..=max_weight.max(1))
}

fn add_vertices(graph: &mut DirectedGraph<i64>, n: usize) -> Vec<NodeId> {
    (0..n).map(|i| graph.lookup_or_create(&vertex_name(i))).collect()
}

/// Generates a random directed graph with about `edge_factor * n` links.
/// Weights are drawn from `1..=max_weight`; self-loops are skipped.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: i64,
    rng: &mut R,
) -> Result<DirectedGraph<i64>> {
    let mut graph = DirectedGraph::new(format!("random-{}", n));
    let ids = add_vertices(&mut graph, n);
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = draw_weight(rng, max_weight);
            graph.add_link(ids[u], ids[v], weight)?;
        }
    }

    Ok(graph)
}

/// Generates a `width x height` grid with 4-connectivity in both directions.
/// Each directed link gets its own random weight in `1..=max_weight`.
pub fn generate_grid<R: Rng>(
    width: usize,
    height: usize,
    max_weight: i64,
    rng: &mut R,
) -> Result<DirectedGraph<i64>> {
    let mut graph = DirectedGraph::new(format!("grid-{}x{}", width, height));
    let ids = add_vertices(&mut graph, width * height);

    let index = |x: usize, y: usize| y * width + x;
    let mut connect = |graph: &mut DirectedGraph<i64>, a: usize, b: usize| -> Result<()> {
        let weight = draw_weight(&mut *rng, max_weight);
        graph.add_link(ids[a], ids[b], weight)?;
        Ok(())
    };

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                connect(&mut graph, current, index(x + 1, y))?;
                connect(&mut graph, index(x + 1, y), current)?;
            }
            if y + 1 < height {
                connect(&mut graph, current, index(x, y + 1))?;
                connect(&mut graph, index(x, y + 1), current)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a chain `v0 -> v1 -> ... -> v{n-1}` with random weights.
///
/// Every pass of a frontier search can only reach the next vertex, so this
/// is the shape that makes a full run take the most passes.
pub fn generate_chain<R: Rng>(n: usize, max_weight: i64, rng: &mut R) -> Result<DirectedGraph<i64>> {
    let mut graph = DirectedGraph::new(format!("chain-{}", n));
    let ids = add_vertices(&mut graph, n);

    for pair in ids.windows(2) {
        let weight = draw_weight(rng, max_weight);
        graph.add_link(pair[0], pair[1], weight)?;
    }

    Ok(graph)
}
