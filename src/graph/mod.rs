pub mod edge;
pub mod generators;
pub mod network;
pub mod vertex;

pub use edge::Edge;
pub use network::Graph;
pub use vertex::{Message, Vertex};

/// Vertex identifier as it appears in the input triples
pub type Rank = i64;

/// Edge length and path distance
pub type Distance = i64;

/// Distance of a vertex that no message has reached yet
pub const INFINITY: Distance = 30000;

/// Handle to a vertex owned by a [`Graph`]
///
/// Carries the rank alongside the storage index so that diagnostics can name
/// the vertex without going back to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId {
    index: usize,
    rank: Rank,
}

impl VertexId {
    pub(crate) fn new(index: usize, rank: Rank) -> Self {
        VertexId { index, rank }
    }

    /// Position of the vertex in graph storage
    pub fn index(&self) -> usize {
        self.index
    }

    /// Rank of the vertex
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

/// Handle to an edge owned by a [`Graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Position of the edge in graph storage
    pub fn index(&self) -> usize {
        self.0
    }
}
