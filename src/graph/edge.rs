use crate::diagnostics::{Advisory, AdvisoryKind};
use crate::graph::{Distance, VertexId, INFINITY};
use crate::{Error, Result};

/// A directed weighted connection between two vertices of the same graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    origin: VertexId,
    target: VertexId,
    length: Distance,
}

impl Edge {
    /// Validates the length and creates the edge.
    ///
    /// Self-loops and zero-length edges are accepted; each one is reported as
    /// an advisory in the returned list.
    pub fn new(
        origin: VertexId,
        target: VertexId,
        length: Distance,
    ) -> Result<(Self, Vec<Advisory>)> {
        if length >= INFINITY {
            return Err(Error::LengthOverInfinity { length });
        }
        if length < 0 {
            return Err(Error::NegativeLength { length });
        }

        let mut advisories = Vec::new();
        if origin == target {
            advisories.push(Advisory::new(
                AdvisoryKind::SelfLoop,
                vec![("Vertex rank where the cycle was found", origin.rank())],
            ));
        }
        if length == 0 {
            advisories.push(Advisory::new(
                AdvisoryKind::ZeroLength,
                vec![("Origin", origin.rank()), ("Target", target.rank())],
            ));
        }

        Ok((Edge { origin, target, length }, advisories))
    }

    /// Vertex the edge starts at
    pub fn origin(&self) -> VertexId {
        self.origin
    }

    /// Vertex the edge leads to
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Weight, always in `0..INFINITY`
    pub fn length(&self) -> Distance {
        self.length
    }

    /// True for an edge that starts and ends at the same vertex
    pub fn is_loop(&self) -> bool {
        self.origin == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (VertexId, VertexId) {
        (VertexId::new(0, 1), VertexId::new(1, 2))
    }

    #[test]
    fn test_new_plain_edge() {
        let (a, b) = ids();
        let (edge, advisories) = Edge::new(a, b, 7).unwrap();
        assert_eq!(edge.origin(), a);
        assert_eq!(edge.target(), b);
        assert_eq!(edge.length(), 7);
        assert!(!edge.is_loop());
        assert!(advisories.is_empty());
    }

    #[test]
    fn test_length_bounds() {
        let (a, b) = ids();
        assert!(matches!(
            Edge::new(a, b, INFINITY),
            Err(Error::LengthOverInfinity { length: INFINITY })
        ));
        assert!(matches!(
            Edge::new(a, b, -1),
            Err(Error::NegativeLength { length: -1 })
        ));
        assert!(Edge::new(a, b, INFINITY - 1).is_ok());
    }

    #[test]
    fn test_anomalies_are_advisories() {
        let (a, _) = ids();
        let (edge, advisories) = Edge::new(a, a, 0).unwrap();
        assert!(edge.is_loop());
        let kinds: Vec<_> = advisories.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AdvisoryKind::SelfLoop, AdvisoryKind::ZeroLength]);
    }
}
