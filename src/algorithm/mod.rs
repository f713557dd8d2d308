pub mod dijkstra;
pub mod frontier_search;
pub mod observer;
pub mod route;
pub mod traits;

pub use dijkstra::Dijkstra;
pub use frontier_search::FrontierSearch;
pub use observer::{LogObserver, NoopObserver, RecordingObserver, SearchEvent, SearchObserver};
pub use route::{reconstruct_route, Route, RouteHop};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
