use std::fmt;

use serde::Serialize;

use crate::data_structures::FrontierLink;
use crate::graph::adjacency::Adjacency;
use crate::graph::traits::Weight;

/// Handle to a node inside one graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-run algorithm state of a node.
///
/// Only meaningful after [`DirectedGraph::reset`](crate::graph::DirectedGraph::reset)
/// and a search on the same graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState<W> {
    /// Cumulative path weight from the origin
    pub cost: W,
    /// Predecessor on the shortest path, `None` for the origin and unreached nodes
    pub back: Option<NodeId>,
    /// Cost and predecessor are final for this run
    pub reached: bool,
    /// First link in the sorted adjacency not yet proven dead or consumed
    pub resume_cursor: usize,
}

impl<W: Weight> SearchState<W> {
    pub(crate) fn cleared() -> Self {
        SearchState {
            cost: W::zero(),
            back: None,
            reached: false,
            resume_cursor: 0,
        }
    }
}

/// A named vertex owning its outgoing links
#[derive(Debug, Clone)]
pub struct Node<W> {
    name: String,
    pub(crate) adjacency: Adjacency<W>,
    pub(crate) state: SearchState<W>,
    pub(crate) frontier: FrontierLink,
}

impl<W: Weight> Node<W> {
    pub(crate) fn new(name: &str) -> Self {
        Node {
            name: name.to_owned(),
            adjacency: Adjacency::new(),
            state: SearchState::cleared(),
            frontier: FrontierLink::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing links, sorted by weight unless [`Node::is_dirty`]
    pub fn adjacency(&self) -> &Adjacency<W> {
        &self.adjacency
    }

    /// True when a link was added or re-weighted since the last sort
    pub fn is_dirty(&self) -> bool {
        self.adjacency.is_dirty()
    }

    pub fn state(&self) -> &SearchState<W> {
        &self.state
    }

    pub fn cost(&self) -> W {
        self.state.cost
    }

    pub fn back(&self) -> Option<NodeId> {
        self.state.back
    }

    pub fn is_reached(&self) -> bool {
        self.state.reached
    }

    pub fn resume_cursor(&self) -> usize {
        self.state.resume_cursor
    }

    /// True while the node sits in a search frontier
    pub fn in_frontier(&self) -> bool {
        self.frontier.is_member()
    }

    /// Sorts the adjacency if dirty, then clears all per-run state
    pub(crate) fn reset(&mut self) {
        self.adjacency.sort_if_dirty();
        self.state = SearchState::cleared();
        self.frontier = FrontierLink::default();
    }
}
