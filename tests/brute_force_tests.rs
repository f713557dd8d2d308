use frontier_sssp::graph::generators::{generate_chain, generate_grid, vertex_name};
use frontier_sssp::{
    reconstruct_route, DirectedGraph, Dijkstra, FrontierSearch, NodeId, ShortestPathAlgorithm,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds a graph whose node `i` is named `n{i}` and has id index `i`
fn build(n: usize, links: &[(usize, usize, i64)]) -> (DirectedGraph<i64>, Vec<NodeId>) {
    let mut graph = DirectedGraph::new("prop");
    let ids: Vec<NodeId> = (0..n).map(|i| graph.lookup_or_create(&format!("n{}", i))).collect();
    for &(u, v, w) in links {
        graph.add_link(ids[u], ids[v], w).unwrap();
    }
    (graph, ids)
}

/// Minimum cost over every simple path from `origin`, by exhaustive search
fn brute_force(graph: &DirectedGraph<i64>, origin: NodeId) -> Vec<Option<i64>> {
    fn walk(
        graph: &DirectedGraph<i64>,
        at: NodeId,
        cost: i64,
        on_path: &mut Vec<bool>,
        best: &mut Vec<Option<i64>>,
    ) {
        let slot = &mut best[at.index()];
        if slot.map_or(true, |b| cost < b) {
            *slot = Some(cost);
        }
        for link in graph.outgoing(at).unwrap() {
            if !on_path[link.to.index()] {
                on_path[link.to.index()] = true;
                walk(graph, link.to, cost + link.weight, on_path, best);
                on_path[link.to.index()] = false;
            }
        }
    }

    let mut best = vec![None; graph.node_count()];
    let mut on_path = vec![false; graph.node_count()];
    on_path[origin.index()] = true;
    walk(graph, origin, 0, &mut on_path, &mut best);
    best
}

fn small_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (1usize..7).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0i64..20), 0..24),
        )
    })
}

proptest! {
    #[test]
    fn prop_costs_match_exhaustive_search((n, links) in small_graph(), origin in 0usize..7) {
        let origin = origin % n;
        let (mut graph, ids) = build(n, &links);
        let expected = brute_force(&graph, ids[origin]);

        FrontierSearch::new().run(&mut graph, ids[origin], None).unwrap();

        for (i, &id) in ids.iter().enumerate() {
            let node = graph.node(id).unwrap();
            prop_assert_eq!(node.is_reached(), expected[i].is_some());
            if let Some(cost) = expected[i] {
                prop_assert_eq!(node.cost(), cost);
            }
        }
    }

    #[test]
    fn prop_routes_follow_real_links((n, links) in small_graph(), origin in 0usize..7) {
        let origin = origin % n;
        let (mut graph, ids) = build(n, &links);
        let passes = FrontierSearch::new().run(&mut graph, ids[origin], None).unwrap();

        let reached = graph.nodes().filter(|(_, node)| node.is_reached()).count();
        prop_assert_eq!(passes, reached);

        for &id in &ids {
            let route = reconstruct_route(&graph, id).unwrap();
            if !route.is_reached() {
                continue;
            }
            let hops = route.hops();
            prop_assert_eq!(hops[0].node, ids[origin]);
            prop_assert_eq!(hops[0].cost, 0);
            for pair in hops.windows(2) {
                let weight = graph.get_edge_weight(pair[0].node, pair[1].node);
                prop_assert_eq!(weight.map(|w| pair[0].cost + w), Some(pair[1].cost));
            }
        }
    }

    #[test]
    fn prop_destination_run_agrees_with_full_run(
        (n, links) in small_graph(),
        origin in 0usize..7,
        target in 0usize..7,
    ) {
        let (origin, target) = (origin % n, target % n);
        let (mut graph, ids) = build(n, &links);

        FrontierSearch::new().run(&mut graph, ids[origin], None).unwrap();
        let full = reconstruct_route(&graph, ids[target]).unwrap();

        FrontierSearch::new().run(&mut graph, ids[origin], Some(ids[target])).unwrap();
        let early = reconstruct_route(&graph, ids[target]).unwrap();

        prop_assert_eq!(full, early);
    }
}

#[test]
fn test_matches_reference_dijkstra_on_grids() {
    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = generate_grid(12, 9, 15, &mut rng).unwrap();
        let source = graph.require("v0").unwrap();

        let reference = Dijkstra::new().shortest_paths(&graph, source).unwrap();
        let result = FrontierSearch::new().compute_shortest_paths(&mut graph, source).unwrap();

        assert_eq!(result.distances, reference.distances, "seed {}", seed);

        let corner = graph.require("v107").unwrap();
        let path = FrontierSearch::new().get_path(&result, corner).unwrap();
        assert_eq!(path.first(), Some(&source));
        assert_eq!(path.last(), Some(&corner));
        for pair in path.windows(2) {
            assert!(graph.has_edge(pair[0], pair[1]));
        }
    }
}

#[test]
fn test_chain_reaches_one_node_per_pass() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut graph = generate_chain(30, 9, &mut rng).unwrap();
    let source = graph.require("v0").unwrap();
    let last = graph.require(&vertex_name(29)).unwrap();

    let passes = FrontierSearch::new().run(&mut graph, source, None).unwrap();
    // 29 selections plus the final pass that finds nothing
    assert_eq!(passes, 30);

    let route = reconstruct_route(&graph, last).unwrap();
    assert_eq!(route.hops().len(), 30);
    let expected: i64 = (0..29)
        .map(|i| {
            let from = graph.require(&vertex_name(i)).unwrap();
            let to = graph.require(&vertex_name(i + 1)).unwrap();
            graph.get_edge_weight(from, to).unwrap()
        })
        .sum();
    assert_eq!(graph.node(last).unwrap().cost(), expected);

    let passes = FrontierSearch::new().run(&mut graph, source, Some(last)).unwrap();
    assert_eq!(passes, 29);
}
