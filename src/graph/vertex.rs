use crate::diagnostics::{Advisory, AdvisoryKind};
use crate::graph::{Distance, Edge, EdgeId, Rank, VertexId, INFINITY};
use crate::{Error, Result};

/// Outgoing edge as seen from its origin vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Outgoing {
    edge: EdgeId,
    target: VertexId,
    length: Distance,
}

/// Relaxation offer sent along an edge during a broadcast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub sender: VertexId,
    pub recipient: VertexId,
    pub candidate: Distance,
}

/// A graph node and its shortest-path state
#[derive(Debug, Clone)]
pub struct Vertex {
    rank: Rank,
    edges: Vec<Outgoing>,
    shortest_path: Distance,
    predecessor: Option<VertexId>,
    visited: bool,
}

impl Vertex {
    /// Creates an unreached vertex. Ranks must be non-negative.
    pub fn new(rank: Rank) -> Result<Self> {
        if rank < 0 {
            return Err(Error::NegativeRank { rank });
        }
        Ok(Vertex {
            rank,
            edges: Vec::new(),
            shortest_path: INFINITY,
            predecessor: None,
            visited: false,
        })
    }

    /// Identifier from the input triples
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Best distance known so far, `INFINITY` while unreached
    pub fn shortest_path(&self) -> Distance {
        self.shortest_path
    }

    /// Vertex whose message set the current distance
    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    /// Whether the vertex has been selected and has broadcast
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Whether some message has lowered the distance below infinity
    pub fn is_reached(&self) -> bool {
        self.shortest_path < INFINITY
    }

    /// Outgoing edge handles in creation order
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().map(|outgoing| outgoing.edge)
    }

    /// Number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// True if one of the outgoing edges already leads to `target`
    pub fn leads_to(&self, target: VertexId) -> bool {
        self.edges.iter().any(|outgoing| outgoing.target == target)
    }

    /// Appends an outgoing edge; at most one edge per target is allowed.
    ///
    /// The edge must start at this vertex. Its target and length are copied,
    /// so later broadcasts do not look the edge up again.
    pub fn add_outgoing_edge(&mut self, id: EdgeId, edge: &Edge) -> Result<()> {
        if edge.origin().rank() != self.rank {
            return Err(Error::ForeignEdge {
                rank: self.rank,
                origin: edge.origin().rank(),
                edge: id.index(),
            });
        }
        if self.leads_to(edge.target()) {
            return Err(Error::DuplicateTarget {
                rank: self.rank,
                target: edge.target().rank(),
            });
        }
        self.edges.push(Outgoing {
            edge: id,
            target: edge.target(),
            length: edge.length(),
        });
        Ok(())
    }

    /// Pins the distance of the query origin.
    pub(crate) fn mark_origin(&mut self) {
        self.shortest_path = 0;
    }

    /// Accepts `candidate` if it beats the current distance.
    ///
    /// Returns whether the distance changed. A visited vertex is final, so any
    /// message reaching one is an algorithm error.
    pub fn relax(&mut self, sender: VertexId, candidate: Distance) -> Result<bool> {
        if self.visited {
            return Err(Error::RelaxVisited {
                rank: self.rank,
                sender: sender.rank(),
                candidate,
            });
        }
        if candidate < self.shortest_path {
            self.shortest_path = candidate;
            self.predecessor = Some(sender);
            return Ok(true);
        }
        Ok(false)
    }

    /// Marks the vertex visited and produces one message per outgoing edge.
    ///
    /// `me` is this vertex's own handle. Recipients that are already visited
    /// are filtered by the caller.
    pub fn broadcast(&mut self, me: VertexId) -> (Vec<Message>, Option<Advisory>) {
        self.visited = true;
        if self.edges.is_empty() {
            return (Vec::new(), None);
        }

        let advisory = (!self.is_reached()).then(|| {
            Advisory::new(
                AdvisoryKind::UnreachedBroadcast,
                vec![("Vertex rank", self.rank)],
            )
        });

        let messages = self
            .edges
            .iter()
            .map(|outgoing| Message {
                sender: me,
                recipient: outgoing.target,
                candidate: outgoing.length + self.shortest_path,
            })
            .collect();

        (messages, advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vertex_is_unreached() {
        let vertex = Vertex::new(4).unwrap();
        assert_eq!(vertex.rank(), 4);
        assert_eq!(vertex.shortest_path(), INFINITY);
        assert_eq!(vertex.predecessor(), None);
        assert!(!vertex.is_visited());
        assert_eq!(vertex.out_degree(), 0);
    }

    #[test]
    fn test_negative_rank_rejected() {
        assert!(matches!(Vertex::new(-3), Err(Error::NegativeRank { rank: -3 })));
        assert!(Vertex::new(0).is_ok());
    }

    #[test]
    fn test_relax_keeps_the_shorter_offer() {
        let mut vertex = Vertex::new(2).unwrap();
        let a = VertexId::new(0, 1);
        let b = VertexId::new(2, 3);

        assert!(vertex.relax(a, 10).unwrap());
        assert!(!vertex.relax(b, 10).unwrap());
        assert_eq!(vertex.predecessor(), Some(a));

        assert!(vertex.relax(b, 6).unwrap());
        assert_eq!(vertex.shortest_path(), 6);
        assert_eq!(vertex.predecessor(), Some(b));
    }

    #[test]
    fn test_relax_after_visit_fails() {
        let mut vertex = Vertex::new(2).unwrap();
        let me = VertexId::new(0, 2);
        vertex.broadcast(me);
        let err = vertex.relax(VertexId::new(1, 9), 1).unwrap_err();
        assert!(matches!(
            err,
            Error::RelaxVisited { rank: 2, sender: 9, candidate: 1 }
        ));
    }

    #[test]
    fn test_duplicate_target_rejected() {
        let a = VertexId::new(0, 1);
        let b = VertexId::new(1, 2);
        let (first, _) = Edge::new(a, b, 3).unwrap();
        let (second, _) = Edge::new(a, b, 4).unwrap();

        let mut vertex = Vertex::new(1).unwrap();
        vertex.add_outgoing_edge(EdgeId(0), &first).unwrap();
        assert!(matches!(
            vertex.add_outgoing_edge(EdgeId(1), &second),
            Err(Error::DuplicateTarget { rank: 1, target: 2 })
        ));
        assert_eq!(vertex.edges().collect::<Vec<_>>(), vec![EdgeId(0)]);
    }

    #[test]
    fn test_broadcast_offers_length_plus_distance() {
        let a = VertexId::new(0, 1);
        let b = VertexId::new(1, 2);
        let c = VertexId::new(2, 3);
        let (ab, _) = Edge::new(a, b, 5).unwrap();
        let (ac, _) = Edge::new(a, c, 2).unwrap();
        let edges = vec![ab, ac];

        let mut vertex = Vertex::new(1).unwrap();
        vertex.add_outgoing_edge(EdgeId(0), &edges[0]).unwrap();
        vertex.add_outgoing_edge(EdgeId(1), &edges[1]).unwrap();
        vertex.relax(VertexId::new(3, 7), 4).unwrap();

        let (messages, advisory) = vertex.broadcast(a);
        assert!(vertex.is_visited());
        assert!(advisory.is_none());
        assert_eq!(
            messages,
            vec![
                Message { sender: a, recipient: b, candidate: 9 },
                Message { sender: a, recipient: c, candidate: 6 },
            ]
        );
    }

    #[test]
    fn test_broadcast_from_unreached_vertex_warns() {
        let a = VertexId::new(0, 1);
        let b = VertexId::new(1, 2);
        let (ab, _) = Edge::new(a, b, 5).unwrap();
        let mut vertex = Vertex::new(1).unwrap();
        vertex.add_outgoing_edge(EdgeId(0), &ab).unwrap();

        let (messages, advisory) = vertex.broadcast(a);
        assert_eq!(messages[0].candidate, INFINITY + 5);
        assert_eq!(advisory.unwrap().kind, AdvisoryKind::UnreachedBroadcast);
    }

    #[test]
    fn test_edge_from_another_vertex_rejected() {
        let a = VertexId::new(0, 1);
        let b = VertexId::new(1, 2);
        let (ab, _) = Edge::new(a, b, 5).unwrap();

        let mut vertex = Vertex::new(3).unwrap();
        assert!(matches!(
            vertex.add_outgoing_edge(EdgeId(2), &ab),
            Err(Error::ForeignEdge { rank: 3, origin: 1, edge: 2 })
        ));
        assert_eq!(vertex.out_degree(), 0);
    }

    #[test]
    fn test_broadcast_uses_length_recorded_at_insertion() {
        let a = VertexId::new(0, 1);
        let b = VertexId::new(1, 2);
        let (ab, _) = Edge::new(a, b, 5).unwrap();

        // The id points past any edge storage; only the recorded length matters.
        let mut vertex = Vertex::new(1).unwrap();
        vertex.add_outgoing_edge(EdgeId(40), &ab).unwrap();
        vertex.mark_origin();

        let (messages, _) = vertex.broadcast(a);
        assert_eq!(messages, vec![Message { sender: a, recipient: b, candidate: 5 }]);
    }
}
