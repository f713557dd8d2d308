use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::CostQueue;
use crate::graph::{DirectedGraph, NodeId, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a binary heap.
///
/// Reads the graph without touching per-node search state, which makes it
/// a handy reference to check [`FrontierSearch`](crate::FrontierSearch)
/// against.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs the search without needing mutable access to the graph
    pub fn shortest_paths<W: Weight>(
        &self,
        graph: &DirectedGraph<W>,
        source: NodeId,
    ) -> Result<ShortestPathResult<W>> {
        if !graph.contains(source) {
            return Err(Error::UnknownNode(source.index()));
        }

        let n = graph.node_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
        let mut settled = vec![false; n];

        distances[source.index()] = Some(W::zero());
        let mut queue = CostQueue::with_capacity(n);
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            if settled[u.index()] {
                continue;
            }
            settled[u.index()] = true;

            for link in graph.outgoing(u)? {
                let v = link.to.index();
                if settled[v] {
                    continue;
                }
                let new_dist = dist_u.accumulate(link.weight);
                let improves = match distances[v] {
                    None => true,
                    Some(current) => new_dist < current,
                };
                if improves {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(link.to, new_dist);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

impl<W: Weight> ShortestPathAlgorithm<W> for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &mut DirectedGraph<W>,
        source: NodeId,
    ) -> Result<ShortestPathResult<W>> {
        self.shortest_paths(graph, source)
    }
}
