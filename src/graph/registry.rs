use std::collections::BTreeMap;

use log::trace;

use crate::data_structures::{FrontierLink, FrontierSlots};
use crate::graph::node::{Node, NodeId};
use crate::graph::traits::Weight;
use crate::{Error, Result};

/// Name-keyed arena owning every node of one graph.
///
/// Nodes live in a `Vec` and are addressed by [`NodeId`]; a `BTreeMap`
/// keeps the name index so traversal is always in name order.
#[derive(Debug, Clone)]
pub struct NodeRegistry<W> {
    nodes: Vec<Node<W>>,
    by_name: BTreeMap<String, NodeId>,
}

impl<W: Weight> NodeRegistry<W> {
    pub fn new() -> Self {
        NodeRegistry {
            nodes: Vec::new(),
            by_name: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node called `name`, creating an empty one if needed
    pub fn lookup_or_create(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name));
        self.by_name.insert(name.to_owned(), id);
        trace!("created node {} as {}", name, id);
        id
    }

    /// Looks a node up by name without creating it
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Result<&Node<W>> {
        self.nodes.get(id.0).ok_or(Error::UnknownNode(id.0))
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut Node<W>> {
        self.nodes.get_mut(id.0).ok_or(Error::UnknownNode(id.0))
    }

    /// Lazily walks all nodes in name order. Each call starts over.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<W>)> + '_ {
        self.by_name.values().map(move |&id| (id, &self.nodes[id.0]))
    }

    /// Calls `visitor` for each node in name order
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(NodeId, &Node<W>),
    {
        for (id, node) in self.iter() {
            visitor(id, node);
        }
    }

    /// Mutable access to every node, in arena order
    pub(crate) fn nodes_mut(&mut self) -> std::slice::IterMut<'_, Node<W>> {
        self.nodes.iter_mut()
    }

    /// Unchecked access for ids the caller already validated
    pub(crate) fn node(&self, id: NodeId) -> &Node<W> {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<W> {
        &mut self.nodes[id.0]
    }
}

impl<W: Weight> Default for NodeRegistry<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> FrontierSlots for NodeRegistry<W> {
    fn slot(&self, id: NodeId) -> &FrontierLink {
        &self.nodes[id.0].frontier
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut FrontierLink {
        &mut self.nodes[id.0].frontier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_or_create_is_idempotent() {
        let mut registry: NodeRegistry<i64> = NodeRegistry::new();
        let a = registry.lookup_or_create("A");
        let b = registry.lookup_or_create("B");
        assert_ne!(a, b);
        assert_eq!(registry.lookup_or_create("A"), a);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("B"), Some(b));
        assert_eq!(registry.lookup("C"), None);
    }

    #[test]
    fn test_new_node_starts_cleared() {
        let mut registry: NodeRegistry<i64> = NodeRegistry::new();
        let a = registry.lookup_or_create("A");
        let node = registry.get(a).unwrap();
        assert_eq!(node.name(), "A");
        assert!(node.adjacency().is_empty());
        assert!(!node.is_reached());
        assert_eq!(node.cost(), 0);
        assert_eq!(node.back(), None);
        assert!(!node.in_frontier());
    }

    #[test]
    fn test_iteration_is_name_ordered_and_restartable() {
        let mut registry: NodeRegistry<i64> = NodeRegistry::new();
        for name in ["delta", "alpha", "charlie", "bravo"] {
            registry.lookup_or_create(name);
        }
        let names: Vec<&str> = registry.iter().map(|(_, n)| n.name()).collect();
        assert_eq!(names, vec!["alpha", "bravo", "charlie", "delta"]);
        assert_eq!(registry.iter().count(), 4);

        let mut visited = Vec::new();
        registry.for_each(|id, _| visited.push(id));
        assert_eq!(visited.len(), 4);
    }

    #[test]
    fn test_get_rejects_foreign_id() {
        let registry: NodeRegistry<i64> = NodeRegistry::new();
        assert!(matches!(registry.get(NodeId(3)), Err(Error::UnknownNode(3))));
    }
}
