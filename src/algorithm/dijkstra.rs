use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Distance, Graph, Rank, INFINITY};
use crate::Result;

/// Classic heap-based Dijkstra, used as a reference for [`super::message_passing::MessagePassing`]
///
/// Leaves the graph untouched. Distances reaching the infinity sentinel are
/// treated as unreachable, matching the message-passing relaxation rule.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &Graph, source: Rank) -> Result<ShortestPathResult> {
        let source = graph.find_vertex(source)?.index();
        let n = graph.vertex_count();

        let mut distances: Vec<Option<Distance>> = vec![None; n];
        let mut predecessors = vec![None; n];
        distances[source] = Some(0);

        let mut queue: BinaryHeapWrapper<usize, Distance> = BinaryHeapWrapper::new();
        queue.push(source, 0);

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry
            if distances[u].map_or(false, |current| current < dist_u) {
                continue;
            }

            for (v, length) in graph.neighbours(u) {
                let new_dist = dist_u + length;
                if new_dist >= INFINITY {
                    continue;
                }
                if distances[v].map_or(true, |current| new_dist < current) {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        Ok(ShortestPathResult {
            ranks: graph.vertices().map(|(id, _)| id.rank()).collect(),
            distances,
            predecessors,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_prefers_two_hops_over_direct_edge() {
        let graph = Graph::build(&[1, 2, 5, 2, 3, 3, 1, 3, 10], false).unwrap();
        let dijkstra = Dijkstra::new();
        let result = dijkstra.compute_shortest_paths(&graph, 1).unwrap();

        assert_eq!(result.distance_to(3), Some(8));
        assert_eq!(dijkstra.get_path(&result, 3), Some(vec![1, 2, 3]));
        assert_eq!(result.reachable_count(), 3);
    }

    #[test]
    fn test_respects_orientation() {
        let graph = Graph::build(&[1, 2, 5, 3, 1, 1], true).unwrap();
        let result = Dijkstra::new().compute_shortest_paths(&graph, 1).unwrap();
        assert_eq!(result.distance_to(2), Some(5));
        assert_eq!(result.distance_to(3), None);
    }

    #[test]
    fn test_unknown_source() {
        let graph = Graph::build(&[1, 2, 5], true).unwrap();
        assert!(matches!(
            Dijkstra::new().compute_shortest_paths(&graph, 8),
            Err(Error::VertexNotFound { rank: 8 })
        ));
    }
}
