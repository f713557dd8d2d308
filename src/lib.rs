//! Frontier SSSP - single-source shortest paths without a priority queue
//!
//! Graphs are built incrementally from named nodes and weighted links.
//! Each node keeps its outgoing links sorted by weight, and the search
//! keeps a frontier of reached nodes that still have live links. Every
//! pass takes the cheapest first-live-link across the frontier, which is
//! Dijkstra's extract-min done by a linear scan, and a per-node resume
//! cursor guarantees every link is skipped at most once per run.
//!
//! ```
//! use frontier_sssp::{reconstruct_route, DirectedGraph, FrontierSearch};
//!
//! let mut graph: DirectedGraph<i64> = DirectedGraph::new("triangle");
//! graph.add_link_by_name("A", "B", 4).unwrap();
//! graph.add_link_by_name("A", "C", 1).unwrap();
//! graph.add_link_by_name("C", "B", 1).unwrap();
//!
//! let a = graph.require("A").unwrap();
//! let b = graph.require("B").unwrap();
//! let passes = FrontierSearch::new().run(&mut graph, a, Some(b)).unwrap();
//!
//! assert_eq!(passes, 2);
//! assert_eq!(reconstruct_route(&graph, b).unwrap().to_string(), "[A:c=0]->[C:c=1]->[B:c=2]");
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod edge_list;
pub mod graph;
pub mod report;

pub use algorithm::{
    reconstruct_route, Dijkstra, FrontierSearch, Route, SearchEvent, SearchObserver,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, NodeId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown node id: {0}")]
    UnknownNode(usize),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Negative edge weight: {from} -> {to} ({weight})")]
    NegativeWeight { from: String, to: String, weight: i64 },

    #[error("{source_name}:{line}: invalid weight {text:?}")]
    InvalidWeight {
        source_name: String,
        line: usize,
        text: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
