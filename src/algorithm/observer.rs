use log::{debug, log_enabled, trace, Level};

use crate::graph::{DirectedGraph, NodeId, Weight};

/// Something that happened during a frontier search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent<W> {
    /// All per-run node state was cleared
    Reset { nodes: usize },
    /// The origin was marked reached and put in the frontier
    Seeded { origin: NodeId },
    PassStart { pass: usize, frontier_len: usize },
    /// A frontier member is about to be scanned from its resume cursor
    ScanNode { pass: usize, node: NodeId },
    /// A link was skipped for good because its target is already reached
    AlreadyReached { from: NodeId, to: NodeId },
    /// A link improved on the best candidate of the current pass
    CandidateFound { from: NodeId, to: NodeId, weight: W, cost: W },
    /// A node ran out of live links and left the frontier
    NodeExhausted { node: NodeId },
    /// The pass winner was applied and its target joined the frontier
    CandidateSelected { from: NodeId, to: NodeId, weight: W, cost: W },
    PassEnd { pass: usize, frontier_len: usize },
}

/// Receives [`SearchEvent`]s as a search runs
pub trait SearchObserver<W: Weight> {
    fn on_event(&mut self, graph: &DirectedGraph<W>, event: &SearchEvent<W>);
}

/// Ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<W: Weight> SearchObserver<W> for NoopObserver {
    fn on_event(&mut self, _graph: &DirectedGraph<W>, _event: &SearchEvent<W>) {}
}

/// Writes events to the `log` facade: pass boundaries and selections at
/// debug level, per-link detail at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<W: Weight> SearchObserver<W> for LogObserver {
    fn on_event(&mut self, graph: &DirectedGraph<W>, event: &SearchEvent<W>) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        let name = |id: &NodeId| graph.node_name(*id);
        match event {
            SearchEvent::Reset { nodes } => {
                debug!("resetting graph {} ({} nodes)", graph.name(), nodes)
            }
            SearchEvent::Seeded { origin } => {
                debug!("add node {} to the frontier", name(origin))
            }
            SearchEvent::PassStart { pass, frontier_len } => {
                debug!("pass #{} START ({} nodes in the frontier)", pass, frontier_len)
            }
            SearchEvent::ScanNode { node, .. } => trace!(" - frontier node {}", name(node)),
            SearchEvent::AlreadyReached { from, to } => {
                trace!("   skip {} -> {}: already reached", name(from), name(to))
            }
            SearchEvent::CandidateFound { from, to, weight, cost } => debug!(
                "   got a candidate: {}(c={}) -[w={}]-> {}(c={})",
                name(from),
                graph.node(*from).map(|n| n.cost()).unwrap_or_else(|_| W::zero()),
                weight,
                name(to),
                cost
            ),
            SearchEvent::NodeExhausted { node } => {
                debug!("   eliminate node {} from the frontier", name(node))
            }
            SearchEvent::CandidateSelected { from, to, weight, cost } => debug!(
                "   selected candidate: {} >=[w={}]=> {}(c={}), added to the frontier",
                name(from),
                weight,
                name(to),
                cost
            ),
            SearchEvent::PassEnd { pass, frontier_len } => {
                debug!("pass #{} END ({} nodes in the frontier)", pass, frontier_len)
            }
        }
    }
}

/// Keeps every event, in order
#[derive(Debug, Clone)]
pub struct RecordingObserver<W> {
    pub events: Vec<SearchEvent<W>>,
}

impl<W> RecordingObserver<W> {
    pub fn new() -> Self {
        RecordingObserver { events: Vec::new() }
    }

    /// Nodes that left the frontier, in order
    pub fn exhausted(&self) -> Vec<NodeId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::NodeExhausted { node } => Some(*node),
                _ => None,
            })
            .collect()
    }

    /// `(pass, node)` for every frontier scan
    pub fn scans(&self) -> Vec<(usize, NodeId)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::ScanNode { pass, node } => Some((*pass, *node)),
                _ => None,
            })
            .collect()
    }
}

impl<W> Default for RecordingObserver<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> SearchObserver<W> for RecordingObserver<W> {
    fn on_event(&mut self, _graph: &DirectedGraph<W>, event: &SearchEvent<W>) {
        self.events.push(event.clone());
    }
}
