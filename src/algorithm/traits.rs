use std::collections::HashSet;

use log::warn;

use crate::graph::{DirectedGraph, NodeId, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W> {
    /// Distances from source to each node, indexed by [`NodeId::index`]
    pub distances: Vec<Option<W>>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: Vec<Option<NodeId>>,

    /// Source node
    pub source: NodeId,
}

impl<W: Weight> ShortestPathResult<W> {
    /// Harvests cost and predecessor of every reached node after a search
    pub fn from_search_state(graph: &DirectedGraph<W>, source: NodeId) -> Self {
        let mut distances = vec![None; graph.node_count()];
        let mut predecessors = vec![None; graph.node_count()];
        for (id, node) in graph.nodes() {
            if node.is_reached() {
                distances[id.index()] = Some(node.cost());
                predecessors[id.index()] = node.back();
            }
        }
        ShortestPathResult {
            distances,
            predecessors,
            source,
        }
    }

    pub fn distance(&self, target: NodeId) -> Option<W> {
        self.distances.get(target.index()).copied().flatten()
    }
}

/// Trait for shortest path algorithms over a [`DirectedGraph`]
pub trait ShortestPathAlgorithm<W: Weight> {
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(
        &self,
        graph: &mut DirectedGraph<W>,
        source: NodeId,
    ) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<W>, target: NodeId) -> Option<Vec<NodeId>> {
        result.distance(target)?;

        let mut path = vec![target];
        let mut visited = HashSet::new();
        let mut current = target;

        while current != result.source {
            if !visited.insert(current) {
                warn!("cycle in predecessor chain at node {}", current);
                return None;
            }
            current = result.predecessors[current.index()]?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}
