use log::debug;

use crate::algorithm::observer::{LogObserver, SearchEvent, SearchObserver};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{DirectedGraph, Link, NodeId, Weight};
use crate::{Error, Result};

/// Pass-based shortest path search that needs no priority queue.
///
/// Every node's links are sorted by weight, so the first link from a
/// reached node towards an unreached one is the cheapest way out of that
/// node. Each pass scans the frontier (reached nodes that may still have
/// such links), picks the overall cheapest one, and finalizes its target.
/// This is the extract-min step of Dijkstra done with a linear scan.
///
/// Links towards nodes that are already reached are dead for the rest of
/// the run. Each node keeps a resume cursor past its dead prefix, so every
/// link is skipped at most once per run and the total cost is
/// O(V^2 + E).
///
/// Weights must be non-negative. Negative weights are not rejected but
/// the resulting costs are meaningless.
#[derive(Debug, Clone, Default)]
pub struct FrontierSearch {
    /// Stop after this many passes even if the search is not finished
    max_passes: Option<usize>,
}

/// Cheapest live link seen so far in a pass
#[derive(Debug, Clone, Copy)]
struct Candidate<W> {
    link: Link<W>,
    /// Index of `link` in its source's adjacency
    position: usize,
    cost: W,
}

/// Result of scanning one frontier node
enum Scan<W> {
    Live { link: Link<W>, position: usize },
    Exhausted,
}

impl FrontierSearch {
    /// Creates a search with no pass limit
    pub fn new() -> Self {
        FrontierSearch { max_passes: None }
    }

    /// Caps the number of passes a run may execute
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    pub fn max_passes(&self) -> Option<usize> {
        self.max_passes
    }

    /// Resets `graph` and searches from `origin`, logging every step.
    ///
    /// With a `destination` the run stops as soon as that node is reached;
    /// without one it continues until no reachable node is left, so every
    /// reachable node ends with its final cost and predecessor.
    ///
    /// Returns the number of passes executed. An unreachable destination
    /// is not an error: it is simply left unreached.
    pub fn run<W: Weight>(
        &self,
        graph: &mut DirectedGraph<W>,
        origin: NodeId,
        destination: Option<NodeId>,
    ) -> Result<usize> {
        self.run_with_observer(graph, origin, destination, &mut LogObserver)
    }

    /// Same as [`FrontierSearch::run`], reporting each step to `observer`
    pub fn run_with_observer<W, O>(
        &self,
        graph: &mut DirectedGraph<W>,
        origin: NodeId,
        destination: Option<NodeId>,
        observer: &mut O,
    ) -> Result<usize>
    where
        W: Weight,
        O: SearchObserver<W> + ?Sized,
    {
        if !graph.contains(origin) {
            return Err(Error::UnknownNode(origin.index()));
        }
        if let Some(dest) = destination {
            if !graph.contains(dest) {
                return Err(Error::UnknownNode(dest.index()));
            }
        }

        debug!(
            "search on {} from {} to {}",
            graph.name(),
            graph.node_name(origin),
            destination.map_or("<all>", |dest| graph.node_name(dest))
        );

        graph.reset();
        observer.on_event(graph, &SearchEvent::Reset { nodes: graph.node_count() });

        let mut frontier = Frontier::new();
        {
            let registry = graph.registry_mut();
            let state = &mut registry.node_mut(origin).state;
            state.reached = true;
            state.cost = W::zero();
            frontier.push_front(registry, origin);
        }
        observer.on_event(graph, &SearchEvent::Seeded { origin });

        let mut pass = 0;
        loop {
            if self.max_passes.map_or(false, |max| pass >= max) {
                debug!("stopping after {} passes", pass);
                break;
            }
            pass += 1;
            observer.on_event(graph, &SearchEvent::PassStart { pass, frontier_len: frontier.len() });

            let best = Self::scan_frontier(graph, &mut frontier, pass, observer);
            if let Some(candidate) = best {
                Self::apply(graph, &mut frontier, candidate);
                observer.on_event(
                    graph,
                    &SearchEvent::CandidateSelected {
                        from: candidate.link.from,
                        to: candidate.link.to,
                        weight: candidate.link.weight,
                        cost: candidate.cost,
                    },
                );
            }
            observer.on_event(graph, &SearchEvent::PassEnd { pass, frontier_len: frontier.len() });

            match best {
                None => break,
                Some(candidate) if Some(candidate.link.to) == destination => break,
                Some(_) => {}
            }
        }

        debug!("search on {} finished after {} passes", graph.name(), pass);
        Ok(pass)
    }

    /// One pass over the frontier: returns the cheapest live link and drops
    /// exhausted nodes from the frontier.
    fn scan_frontier<W, O>(
        graph: &mut DirectedGraph<W>,
        frontier: &mut Frontier,
        pass: usize,
        observer: &mut O,
    ) -> Option<Candidate<W>>
    where
        W: Weight,
        O: SearchObserver<W> + ?Sized,
    {
        let mut best: Option<Candidate<W>> = None;
        let mut cursor = frontier.first();

        while let Some(id) = cursor {
            cursor = frontier.next(graph.registry(), id);
            observer.on_event(graph, &SearchEvent::ScanNode { pass, node: id });

            match Self::scan_node(graph, id, observer) {
                Scan::Live { link, position } => {
                    let cost = graph.registry().node(id).cost().accumulate(link.weight);
                    if best.map_or(true, |b| cost < b.cost) {
                        best = Some(Candidate { link, position, cost });
                        observer.on_event(
                            graph,
                            &SearchEvent::CandidateFound {
                                from: link.from,
                                to: link.to,
                                weight: link.weight,
                                cost,
                            },
                        );
                    }
                }
                Scan::Exhausted => {
                    frontier.remove(graph.registry_mut(), id);
                    observer.on_event(graph, &SearchEvent::NodeExhausted { node: id });
                }
            }
        }

        best
    }

    /// Advances `id`'s resume cursor over links into reached nodes and
    /// reports the first live link, if any.
    fn scan_node<W, O>(graph: &mut DirectedGraph<W>, id: NodeId, observer: &mut O) -> Scan<W>
    where
        W: Weight,
        O: SearchObserver<W> + ?Sized,
    {
        let (position, live) = {
            let view: &DirectedGraph<W> = graph;
            let registry = view.registry();
            let node = registry.node(id);
            let links = node.adjacency().as_slice();

            let mut position = node.resume_cursor();
            let mut live = None;
            while position < links.len() {
                let link = links[position];
                if registry.node(link.to).is_reached() {
                    observer.on_event(view, &SearchEvent::AlreadyReached { from: id, to: link.to });
                    position += 1;
                } else {
                    live = Some(link);
                    break;
                }
            }
            (position, live)
        };

        graph.registry_mut().node_mut(id).state.resume_cursor = position;
        match live {
            Some(link) => Scan::Live { link, position },
            None => Scan::Exhausted,
        }
    }

    /// Finalizes the pass winner and puts its target in the frontier
    fn apply<W: Weight>(graph: &mut DirectedGraph<W>, frontier: &mut Frontier, candidate: Candidate<W>) {
        let registry = graph.registry_mut();
        let Link { from, to, .. } = candidate.link;

        let target = &mut registry.node_mut(to).state;
        target.cost = candidate.cost;
        target.back = Some(from);
        target.reached = true;

        registry.node_mut(from).state.resume_cursor = candidate.position + 1;
        frontier.push_front(registry, to);
    }
}

impl<W: Weight> ShortestPathAlgorithm<W> for FrontierSearch {
    fn name(&self) -> &'static str {
        "FrontierSearch"
    }

    fn compute_shortest_paths(
        &self,
        graph: &mut DirectedGraph<W>,
        source: NodeId,
    ) -> Result<ShortestPathResult<W>> {
        self.run(graph, source, None)?;
        Ok(ShortestPathResult::from_search_state(graph, source))
    }
}
