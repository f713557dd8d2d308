use log::{debug, trace};

use crate::graph::adjacency::Link;
use crate::graph::node::{Node, NodeId};
use crate::graph::registry::NodeRegistry;
use crate::graph::traits::Weight;
use crate::{Error, Result};

/// A named, directed, weighted graph built from named nodes.
///
/// The graph owns every node and link. Nodes are created on first
/// reference through [`DirectedGraph::lookup_or_create`] and are never
/// removed; [`NodeId`] handles stay valid for the life of the graph.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W> {
    /// Display name, usually the input it was loaded from
    name: String,

    /// Node arena and name index
    registry: NodeRegistry<W>,
}

impl<W: Weight> DirectedGraph<W> {
    /// Creates a new empty graph
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("new graph {}", name);
        DirectedGraph {
            name,
            registry: NodeRegistry::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of links in the graph
    pub fn edge_count(&self) -> usize {
        self.registry.iter().map(|(_, node)| node.adjacency().len()).sum()
    }

    /// Returns the node called `name`, creating it if it does not exist yet
    pub fn lookup_or_create(&mut self, name: &str) -> NodeId {
        self.registry.lookup_or_create(name)
    }

    /// Finds a node by name without creating it
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.registry.lookup(name)
    }

    /// Like [`DirectedGraph::node_id`] but reports a missing name as an error
    pub fn require(&self, name: &str) -> Result<NodeId> {
        self.node_id(name)
            .ok_or_else(|| Error::NodeNotFound(name.to_owned()))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.registry.contains(id)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node<W>> {
        self.registry.get(id)
    }

    /// Name of a node, or `"?"` for an id from another graph
    pub fn node_name(&self, id: NodeId) -> &str {
        self.registry.get(id).map(Node::name).unwrap_or("?")
    }

    /// Adds the link `from -> to`, or overwrites its weight if it exists.
    ///
    /// The weight is not validated; see [`DirectedGraph::validate_non_negative`].
    pub fn add_link(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<&Link<W>> {
        if !self.registry.contains(to) {
            return Err(Error::UnknownNode(to.index()));
        }
        let node = self.registry.get_mut(from)?;
        let (pos, existed) = node.adjacency.upsert(from, to, weight);
        if existed {
            trace!("link {} -> {} re-weighted to {}", from, to, weight);
        } else {
            trace!("link {} -> {} added with weight {}", from, to, weight);
        }
        Ok(&node.adjacency[pos])
    }

    /// Convenience form of [`DirectedGraph::add_link`] taking node names
    pub fn add_link_by_name(&mut self, from: &str, to: &str, weight: W) -> Result<&Link<W>> {
        let from = self.lookup_or_create(from);
        let to = self.lookup_or_create(to);
        self.add_link(from, to, weight)
    }

    /// Returns the link `from -> to`, if any
    pub fn link(&self, from: NodeId, to: NodeId) -> Option<&Link<W>> {
        self.registry.get(from).ok()?.adjacency().find(to)
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.link(from, to).is_some()
    }

    pub fn get_edge_weight(&self, from: NodeId, to: NodeId) -> Option<W> {
        self.link(from, to).map(|link| link.weight)
    }

    /// Outgoing links of a node, in their current order
    pub fn outgoing(&self, id: NodeId) -> Result<&[Link<W>]> {
        Ok(self.registry.get(id)?.adjacency().as_slice())
    }

    /// Sorts the adjacency of every dirty node. Returns how many were sorted.
    pub fn sort(&mut self) -> usize {
        let sorted = self
            .registry
            .nodes_mut()
            .map(|node| node.adjacency.sort_if_dirty())
            .filter(|&sorted| sorted)
            .count();
        debug!("graph {}: sorted {} nodes", self.name, sorted);
        sorted
    }

    /// Prepares the graph for a new search.
    ///
    /// Sorts dirty adjacencies and clears cost, predecessor, reached flag,
    /// resume cursor and frontier hooks on every node.
    pub fn reset(&mut self) {
        for node in self.registry.nodes_mut() {
            node.reset();
        }
        debug!("graph {}: reset {} nodes", self.name, self.registry.len());
    }

    /// Lazily walks every node in name order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<W>)> + '_ {
        self.registry.iter()
    }

    /// Calls `visitor` for each node in name order
    pub fn for_each_node<F>(&self, visitor: F)
    where
        F: FnMut(NodeId, &Node<W>),
    {
        self.registry.for_each(visitor)
    }

    pub fn registry(&self) -> &NodeRegistry<W> {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut NodeRegistry<W> {
        &mut self.registry
    }

    /// Checks that no link has a negative weight.
    ///
    /// The search never calls this itself: non-negative weights are a
    /// precondition that callers must establish.
    pub fn validate_non_negative(&self) -> Result<()> {
        for (_, node) in self.nodes() {
            for link in node.adjacency() {
                if link.weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: node.name().to_owned(),
                        to: self.node_name(link.to).to_owned(),
                        weight: link.weight.to_i64().unwrap_or(i64::MIN),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_link_creates_and_overwrites() {
        let mut graph: DirectedGraph<i64> = DirectedGraph::new("g");
        let a = graph.lookup_or_create("A");
        let b = graph.lookup_or_create("B");

        graph.add_link(a, b, 3).unwrap();
        let link = *graph.add_link(a, b, 2).unwrap();

        assert_eq!(link.weight, 2);
        assert_eq!(link.from, a);
        assert_eq!(link.to, b);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_edge_weight(a, b), Some(2));
        assert!(graph.node(a).unwrap().is_dirty());
    }

    #[test]
    fn test_add_link_rejects_unknown_ids() {
        let mut graph: DirectedGraph<i64> = DirectedGraph::new("g");
        let a = graph.lookup_or_create("A");
        let mut other: DirectedGraph<i64> = DirectedGraph::new("other");
        other.lookup_or_create("X");
        let far = other.lookup_or_create("Y");

        assert!(matches!(graph.add_link(a, far, 1), Err(Error::UnknownNode(1))));
        assert!(matches!(graph.add_link(far, a, 1), Err(Error::UnknownNode(1))));
    }

    #[test]
    fn test_sort_only_touches_dirty_nodes() {
        let mut graph: DirectedGraph<i64> = DirectedGraph::new("g");
        graph.add_link_by_name("A", "B", 5).unwrap();
        graph.add_link_by_name("A", "C", 1).unwrap();
        graph.add_link_by_name("B", "C", 1).unwrap();

        assert_eq!(graph.sort(), 2);
        assert_eq!(graph.sort(), 0);

        let a = graph.require("A").unwrap();
        let order: Vec<&str> = graph
            .outgoing(a)
            .unwrap()
            .iter()
            .map(|link| graph.node_name(link.to))
            .collect();
        assert_eq!(order, vec!["C", "B"]);
    }

    #[test]
    fn test_validate_non_negative() {
        let mut graph: DirectedGraph<i64> = DirectedGraph::new("g");
        graph.add_link_by_name("A", "B", 0).unwrap();
        assert!(graph.validate_non_negative().is_ok());

        graph.add_link_by_name("B", "C", -4).unwrap();
        match graph.validate_non_negative() {
            Err(Error::NegativeWeight { from, to, weight }) => {
                assert_eq!(from, "B");
                assert_eq!(to, "C");
                assert_eq!(weight, -4);
            }
            other => panic!("expected NegativeWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_require_unknown_name() {
        let graph: DirectedGraph<i64> = DirectedGraph::new("g");
        assert!(matches!(graph.require("nope"), Err(Error::NodeNotFound(name)) if name == "nope"));
    }
}
