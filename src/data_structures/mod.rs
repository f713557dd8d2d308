pub mod frontier;
pub mod priority_queue;

pub use frontier::{Frontier, FrontierIter, FrontierLink, FrontierSlots};
pub use priority_queue::CostQueue;
