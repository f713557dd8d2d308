use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use frontier_sssp::graph::generators::{generate_chain, generate_grid, generate_random};
use frontier_sssp::graph::NodeId;
use frontier_sssp::{DirectedGraph, Dijkstra, FrontierSearch, ShortestPathAlgorithm};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &mut DirectedGraph<i64>, source: NodeId) -> (Duration, usize)
where
    A: ShortestPathAlgorithm<i64>,
{
    println!("Running {} on graph with {} nodes...", algorithm.name(), graph.node_count());

    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("  - failed: {}", e);
            return (Duration::ZERO, 0);
        }
    };
    let duration = start.elapsed();

    // Count reachable nodes
    let reachable = result.distances.iter().filter(|d| d.is_some()).count();
    println!("  - Found {} reachable nodes in {:?}", reachable, duration);

    (duration, reachable)
}

fn main() {
    env_logger::init();

    // Frontier scans are linear in the frontier size, so keep sizes modest
    let graph_sizes = vec![1_000, 5_000, 10_000, 20_000];
    let edge_factor = 4.0;
    let max_weight = 100;
    // a chain takes one pass per node
    let chain_limit = 5_000;

    println!("=====================================================");
    println!("Benchmark: FrontierSearch vs Dijkstra");
    println!("Edge factor: {} links per node (on average)", edge_factor);
    println!("=====================================================");

    let frontier = FrontierSearch::new();
    let dijkstra = Dijkstra::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let side = (size as f64).sqrt() as usize;
        let graphs = [
            ("random", generate_random(size, edge_factor, max_weight, &mut rng)),
            ("grid", generate_grid(side, side, max_weight, &mut rng)),
            ("chain", generate_chain(size.min(chain_limit), max_weight, &mut rng)),
        ];
        for (kind, generated) in graphs {
            let mut graph = match generated {
                Ok(graph) => graph,
                Err(e) => {
                    eprintln!("cannot generate {} graph: {}", kind, e);
                    continue;
                }
            };
            println!("\n{} graph {}: {} nodes, {} links", kind, graph.name(), graph.node_count(), graph.edge_count());
            let source = match graph.node_id("v0") {
                Some(id) => id,
                None => continue,
            };

            let (frontier_time, frontier_reached) = benchmark_algorithm(&frontier, &mut graph, source);
            let (dijkstra_time, dijkstra_reached) = benchmark_algorithm(&dijkstra, &mut graph, source);
            if frontier_reached != dijkstra_reached {
                eprintln!("  ! reachable counts differ: {} vs {}", frontier_reached, dijkstra_reached);
            }

            let ratio = frontier_time.as_secs_f64() / dijkstra_time.as_secs_f64().max(f64::EPSILON);
            println!("FrontierSearch / Dijkstra time ratio: {:.2}x", ratio);
            results.push((kind, graph.node_count(), frontier_time, dijkstra_time, ratio));
        }
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<8} | {:<8} | {:<15} | {:<15} | {:<8}", "Kind", "Nodes", "Frontier (ms)", "Dijkstra (ms)", "Ratio");
    println!("-----------------------------------------------------");

    for (kind, nodes, frontier_time, dijkstra_time, ratio) in &results {
        println!(
            "{:<8} | {:<8} | {:<15} | {:<15} | {:<8.2}",
            kind,
            nodes,
            frontier_time.as_millis(),
            dijkstra_time.as_millis(),
            ratio
        );
    }
}
