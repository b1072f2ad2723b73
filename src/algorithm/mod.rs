pub mod dijkstra;
pub mod message_passing;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
