use std::ops::Index;

use log::debug;
use serde::Serialize;

use crate::graph::node::NodeId;
use crate::graph::traits::Weight;

/// Directed, weighted link owned by its source node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link<W> {
    pub weight: W,
    pub from: NodeId,
    pub to: NodeId,
}

/// Outgoing links of one node.
///
/// Links keep insertion order until [`Adjacency::sort_if_dirty`] runs, which
/// stable-sorts them ascending by weight. Any append or weight overwrite
/// marks the store dirty again.
#[derive(Debug, Clone, Default)]
pub struct Adjacency<W> {
    links: Vec<Link<W>>,
    dirty: bool,
}

impl<W: Weight> Adjacency<W> {
    pub fn new() -> Self {
        Adjacency {
            links: Vec::new(),
            dirty: false,
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn as_slice(&self) -> &[Link<W>] {
        &self.links
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link<W>> {
        self.links.iter()
    }

    /// Returns the link towards `to`, if any
    pub fn find(&self, to: NodeId) -> Option<&Link<W>> {
        self.links.iter().find(|link| link.to == to)
    }

    /// Adds a link `from -> to`, or overwrites the weight of the existing one.
    ///
    /// Returns the position of the link and whether it already existed.
    /// Either way the store becomes dirty.
    pub(crate) fn upsert(&mut self, from: NodeId, to: NodeId, weight: W) -> (usize, bool) {
        self.dirty = true;
        if let Some(pos) = self.links.iter().position(|link| link.to == to) {
            self.links[pos].weight = weight;
            return (pos, true);
        }
        self.links.push(Link { weight, from, to });
        (self.links.len() - 1, false)
    }

    /// Stable-sorts by ascending weight when dirty. Returns true if it sorted.
    pub fn sort_if_dirty(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.links.sort_by_key(|link| link.weight);
        self.dirty = false;
        debug!("sorted {} links", self.links.len());
        true
    }
}

impl<W> Index<usize> for Adjacency<W> {
    type Output = Link<W>;

    fn index(&self, index: usize) -> &Link<W> {
        &self.links[index]
    }
}

impl<'a, W> IntoIterator for &'a Adjacency<W> {
    type Item = &'a Link<W>;
    type IntoIter = std::slice::Iter<'a, Link<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
