use std::collections::HashMap;

use log::warn;

use crate::diagnostics::Advisory;
use crate::graph::{Distance, Edge, EdgeId, Rank, Vertex, VertexId};
use crate::trace::Trace;
use crate::{Error, Result};

/// Weighted graph built once from `(origin, target, length)` triples
///
/// Vertices and edges live in flat vectors; edges and predecessor links refer
/// to them through [`VertexId`] and [`EdgeId`] handles.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    ranks: HashMap<Rank, usize>,
    pub(crate) advisories: Vec<Advisory>,
    pub(crate) spent: bool,
}

impl Graph {
    /// Builds a graph from a flat list of triples.
    ///
    /// When `oriented` is false every triple also yields the reverse edge, and
    /// a second triple over the same unordered pair is rejected.
    pub fn build(triples: &[i64], oriented: bool) -> Result<Self> {
        if triples.is_empty() {
            return Err(Error::EmptyEdgeList);
        }
        if triples.len() % 3 != 0 {
            return Err(Error::MisalignedEdgeList { len: triples.len() });
        }

        let mut graph = Graph::default();
        for triple in triples.chunks_exact(3) {
            let (a, b, length) = (triple[0], triple[1], triple[2]);
            graph.add_path(a, b, length, oriented)?;
        }
        Ok(graph)
    }

    /// Adds the edge(s) for one input triple, creating missing endpoints.
    fn add_path(&mut self, a: Rank, b: Rank, length: Distance, oriented: bool) -> Result<()> {
        let origin = self.create_vertex(a)?;
        let target = self.create_vertex(b)?;

        if !oriented && (self.has_edge(a, b) || self.has_edge(b, a)) {
            return Err(Error::DuplicateUndirectedEdge { first: a, second: b });
        }

        self.create_edge(origin, target, length)?;
        // An undirected self-loop is its own reverse.
        if !oriented && origin != target {
            self.create_edge(target, origin, length)?;
        }
        Ok(())
    }

    /// Returns the vertex with `rank`, creating it on first use.
    fn create_vertex(&mut self, rank: Rank) -> Result<VertexId> {
        if let Some(&index) = self.ranks.get(&rank) {
            return Ok(VertexId::new(index, rank));
        }
        let vertex = Vertex::new(rank)?;
        let index = self.vertices.len();
        self.vertices.push(vertex);
        self.ranks.insert(rank, index);
        Ok(VertexId::new(index, rank))
    }

    fn create_edge(&mut self, origin: VertexId, target: VertexId, length: Distance) -> Result<EdgeId> {
        for end in [origin, target] {
            if self.vertex(end).is_none() {
                return Err(Error::UnknownEndpoint { index: end.index(), length });
            }
        }

        let (edge, advisories) = Edge::new(origin, target, length)?;
        for advisory in advisories {
            self.record(advisory);
        }

        let id = EdgeId(self.edges.len());
        self.vertices[origin.index()].add_outgoing_edge(id, &edge)?;
        self.edges.push(edge);
        Ok(id)
    }

    /// Stores an advisory and reports it on the `warn` channel.
    pub(crate) fn record(&mut self, advisory: Advisory) {
        warn!("{}", advisory);
        self.advisories.push(advisory);
    }

    /// Looks up a vertex handle by rank.
    pub fn find_vertex(&self, rank: Rank) -> Result<VertexId> {
        self.ranks
            .get(&rank)
            .map(|&index| VertexId::new(index, rank))
            .ok_or(Error::VertexNotFound { rank })
    }

    /// Vertex behind a handle, if the handle belongs to this graph
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices
            .get(id.index())
            .filter(|vertex| vertex.rank() == id.rank())
    }

    /// Edge behind a handle, if it exists
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Vertices in storage order, i.e. order of first appearance in the input
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (VertexId::new(index, vertex.rank()), vertex))
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges, so an undirected triple counts twice
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if a vertex with `rank` exists
    pub fn has_vertex(&self, rank: Rank) -> bool {
        self.ranks.contains_key(&rank)
    }

    /// True if the directed edge `from -> to` exists
    pub fn has_edge(&self, from: Rank, to: Rank) -> bool {
        self.edge_length(from, to).is_some()
    }

    /// Length of the directed edge `from -> to`, if present
    pub fn edge_length(&self, from: Rank, to: Rank) -> Option<Distance> {
        let origin = self.find_vertex(from).ok()?;
        self.vertices[origin.index()]
            .edges()
            .map(|id| self.edges[id.index()])
            .find(|edge| edge.target().rank() == to)
            .map(|edge| edge.length())
    }

    /// Outgoing `(target rank, length)` pairs of the vertex at `index`
    pub(crate) fn neighbours(&self, index: usize) -> impl Iterator<Item = (usize, Distance)> + '_ {
        self.vertices[index]
            .edges()
            .map(|id| self.edges[id.index()])
            .map(|edge| (edge.target().index(), edge.length()))
    }

    /// Advisories raised so far, in emission order
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Ranks from the path origin to `rank`, following predecessor links.
    ///
    /// A vertex without predecessor yields a one-element path.
    pub fn path_to(&self, rank: Rank) -> Result<Vec<Rank>> {
        let mut current = self.find_vertex(rank)?;
        let mut path = vec![current.rank()];

        while let Some(predecessor) = self.vertices[current.index()].predecessor() {
            if path.len() > self.vertices.len() {
                return Err(Error::BrokenPredecessorChain { rank, steps: path.len() });
            }
            path.push(predecessor.rank());
            current = predecessor;
        }

        path.reverse();
        Ok(path)
    }

    /// Trace of the vertex with `rank` in its current state.
    pub fn trace(&self, rank: Rank) -> Result<Trace> {
        let id = self.find_vertex(rank)?;
        let vertex = &self.vertices[id.index()];
        if vertex.predecessor().is_none() {
            return Ok(Trace::Single { rank });
        }
        Ok(Trace::Reached {
            path: self.path_to(rank)?,
            distance: vertex.shortest_path(),
        })
    }
}
