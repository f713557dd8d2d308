//! Human and JSON renderings of graphs and search results.

use std::fmt;

use serde::Serialize;

use crate::algorithm::Route;
use crate::graph::{DirectedGraph, Weight};

/// Plain text dump of a graph: every node in name order with its links
pub struct GraphDump<'a, W>(pub &'a DirectedGraph<W>);

impl<W: Weight> fmt::Display for GraphDump<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        writeln!(f, "Graph {}:", graph.name())?;
        for (_, node) in graph.nodes() {
            writeln!(
                f,
                "  Node {}: dirty={} reached={}",
                node.name(),
                node.is_dirty(),
                node.is_reached()
            )?;
            for link in node.adjacency() {
                writeln!(f, "    Next={}, wgt={}", graph.node_name(link.to), link.weight)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSnapshot<W> {
    pub to: String,
    pub weight: W,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot<W> {
    pub name: String,
    pub reached: bool,
    pub cost: Option<W>,
    pub back: Option<String>,
    pub links: Vec<LinkSnapshot<W>>,
}

/// Serializable copy of a graph and its last search state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot<W> {
    pub name: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<NodeSnapshot<W>>,
}

impl<W: Weight> GraphSnapshot<W> {
    pub fn capture(graph: &DirectedGraph<W>) -> Self {
        let nodes = graph
            .nodes()
            .map(|(_, node)| NodeSnapshot {
                name: node.name().to_owned(),
                reached: node.is_reached(),
                cost: node.is_reached().then(|| node.cost()),
                back: node.back().map(|id| graph.node_name(id).to_owned()),
                links: node
                    .adjacency()
                    .iter()
                    .map(|link| LinkSnapshot {
                        to: graph.node_name(link.to).to_owned(),
                        weight: link.weight,
                    })
                    .collect(),
            })
            .collect();

        GraphSnapshot {
            name: graph.name().to_owned(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            nodes,
        }
    }
}

/// Outcome of one search, as printed by `frontier-route --json`
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport<W> {
    pub graph: String,
    pub source: String,
    pub passes: usize,
    pub routes: Vec<Route<W>>,
}

impl<W: Weight + Serialize> RouteReport<W> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
