use std::fmt;

use log::warn;
use serde::Serialize;

use crate::graph::{DirectedGraph, NodeId, Weight};
use crate::Result;

/// One node on a route, with the cumulative cost to reach it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteHop<W> {
    pub node: NodeId,
    pub name: String,
    pub cost: W,
}

/// Path from the search origin to a node, origin first.
///
/// For a node the last search did not reach, the route holds that node
/// alone and [`Route::is_reached`] is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<W> {
    hops: Vec<RouteHop<W>>,
    reached: bool,
}

impl<W: Weight> Route<W> {
    pub fn is_reached(&self) -> bool {
        self.reached
    }

    pub fn hops(&self) -> &[RouteHop<W>] {
        &self.hops
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Total cost, or `None` if there is no path
    pub fn total_cost(&self) -> Option<W> {
        if !self.reached {
            return None;
        }
        self.hops.last().map(|hop| hop.cost)
    }

    pub fn names(&self) -> Vec<&str> {
        self.hops.iter().map(|hop| hop.name.as_str()).collect()
    }

    pub fn destination(&self) -> &str {
        self.hops.last().map_or("", |hop| hop.name.as_str())
    }
}

impl<W: Weight> fmt::Display for Route<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.reached {
            return write!(f, "no path to {}", self.destination());
        }
        for (i, hop) in self.hops.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "[{}:c={}]", hop.name, hop.cost)?;
        }
        Ok(())
    }
}

/// Walks predecessor links from `target` back to the search origin.
///
/// Only meaningful after a search on `graph`. The walk is iterative and
/// gives up after `node_count` steps, which only a stale predecessor chain
/// could exceed.
pub fn reconstruct_route<W: Weight>(graph: &DirectedGraph<W>, target: NodeId) -> Result<Route<W>> {
    let node = graph.node(target)?;
    let hop = |id: NodeId, name: &str, cost: W| RouteHop {
        node: id,
        name: name.to_owned(),
        cost,
    };

    if !node.is_reached() {
        return Ok(Route {
            hops: vec![hop(target, node.name(), node.cost())],
            reached: false,
        });
    }

    let mut hops = vec![hop(target, node.name(), node.cost())];
    let mut current = node.back();
    while let Some(id) = current {
        if hops.len() > graph.node_count() {
            warn!("predecessor chain of {} does not end at an origin", node.name());
            break;
        }
        let prev = graph.node(id)?;
        hops.push(hop(id, prev.name(), prev.cost()));
        current = prev.back();
    }

    hops.reverse();
    Ok(Route {
        hops,
        reached: true,
    })
}
