pub mod adjacency;
pub mod directed;
pub mod generators;
pub mod node;
pub mod registry;
pub mod traits;

pub use adjacency::{Adjacency, Link};
pub use directed::DirectedGraph;
pub use node::{Node, NodeId, SearchState};
pub use registry::NodeRegistry;
pub use traits::Weight;
