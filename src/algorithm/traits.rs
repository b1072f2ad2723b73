use std::collections::HashSet;

use log::warn;

use crate::graph::{Distance, Graph, Rank};
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// All vectors are indexed by vertex storage position in the source graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult {
    /// Rank of each vertex
    pub ranks: Vec<Rank>,

    /// Distances from source to each vertex
    pub distances: Vec<Option<Distance>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex position
    pub source: usize,
}

impl ShortestPathResult {
    fn position(&self, rank: Rank) -> Option<usize> {
        self.ranks.iter().position(|&r| r == rank)
    }

    /// Distance to the vertex with `rank`, `None` if unknown or unreachable
    pub fn distance_to(&self, rank: Rank) -> Option<Distance> {
        self.position(rank).and_then(|index| self.distances[index])
    }

    /// Number of vertices with a finite distance, source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm {
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &Graph, source: Rank) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of ranks
    fn get_path(&self, result: &ShortestPathResult, target: Rank) -> Option<Vec<Rank>> {
        let mut current = result.position(target)?;
        result.distances[current]?;

        let mut path = Vec::new();
        let mut seen = HashSet::new();

        // Build path in reverse order
        while current != result.source {
            if !seen.insert(current) {
                warn!("Cycle detected in path reconstruction at v{}", result.ranks[current]);
                return None;
            }
            path.push(result.ranks[current]);
            current = result.predecessors[current]?;
        }

        path.push(result.ranks[result.source]);
        path.reverse();

        Some(path)
    }
}
