//! Message-passing Dijkstra.
//!
//! The closest unvisited vertex is found with a linear scan, marked visited,
//! and broadcasts `distance + length` along each outgoing edge. Recipients
//! keep the offer if it beats their current distance. The loop ends when no
//! unvisited vertex has been reached.

use log::{debug, info};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::diagnostics::param_table;
use crate::graph::{Graph, Rank, VertexId};
use crate::trace::{QueryReport, Trace};
use crate::{Error, Result};

impl Graph {
    /// Unvisited reached vertex with the smallest distance.
    ///
    /// Ties go to the vertex stored first.
    pub fn select_next(&self) -> Option<VertexId> {
        let mut best: Option<VertexId> = None;
        let mut best_distance = crate::INFINITY;

        for (id, vertex) in self.vertices() {
            if vertex.is_visited() || !vertex.is_reached() {
                continue;
            }
            if best.is_none() || vertex.shortest_path() < best_distance {
                best = Some(id);
                best_distance = vertex.shortest_path();
            }
        }
        best
    }

    /// Visits `id` and delivers its messages to unvisited neighbours.
    ///
    /// Returns the number of relaxations that lowered a distance.
    pub fn broadcast(&mut self, id: VertexId) -> Result<usize> {
        let vertex = self
            .vertices
            .get_mut(id.index())
            .filter(|vertex| vertex.rank() == id.rank())
            .ok_or(Error::VertexNotFound { rank: id.rank() })?;
        let (messages, advisory) = vertex.broadcast(id);
        if let Some(advisory) = advisory {
            self.record(advisory);
        }

        let mut accepted = 0;
        for message in messages {
            let recipient = &mut self.vertices[message.recipient.index()];
            if recipient.is_visited() {
                continue;
            }
            if recipient.relax(message.sender, message.candidate)? {
                debug!(
                    "Relaxed vertex\n{}",
                    param_table(&[
                        ("Vertex rank", recipient.rank()),
                        ("Sender rank", message.sender.rank()),
                        ("Distance", message.candidate),
                    ])
                );
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Runs the select/broadcast loop from `origin` until nothing is left.
    pub(crate) fn run_from(&mut self, origin: VertexId) -> Result<usize> {
        self.vertices[origin.index()].mark_origin();

        let mut visited = 0;
        while let Some(next) = self.select_next() {
            debug!(
                "Visiting vertex\n{}",
                param_table(&[
                    ("Vertex rank", next.rank()),
                    ("Distance", self.vertices[next.index()].shortest_path()),
                ])
            );
            self.broadcast(next)?;
            visited += 1;
        }
        Ok(visited)
    }

    /// Answers the single query this graph supports.
    ///
    /// With `show_all`, every vertex other than origin and target is traced
    /// too, in storage order.
    pub fn shortest_path(&mut self, origin: Rank, target: Rank, show_all: bool) -> Result<QueryReport> {
        if self.spent {
            return Err(Error::GraphSpent { origin });
        }
        let origin_id = self.find_vertex(origin)?;
        let target_id = self.find_vertex(target)?;
        self.spent = true;

        if origin_id == target_id {
            return Ok(QueryReport {
                origin,
                target,
                others: Vec::new(),
                result: Trace::Identity { rank: origin },
            });
        }

        let visited = self.run_from(origin_id)?;
        info!(
            "Visited {} of {} vertices from v{}",
            visited,
            self.vertex_count(),
            origin
        );

        let mut others = Vec::new();
        if show_all {
            for (id, _) in self.vertices() {
                if id != origin_id && id != target_id {
                    others.push(self.trace(id.rank())?);
                }
            }
        }

        Ok(QueryReport {
            origin,
            target,
            others,
            result: self.trace(target)?,
        })
    }

    /// Distance and predecessor snapshot of the current vertex state
    pub fn snapshot(&self, source: VertexId) -> ShortestPathResult {
        ShortestPathResult {
            ranks: self.vertices().map(|(id, _)| id.rank()).collect(),
            distances: self
                .vertices()
                .map(|(_, vertex)| vertex.is_reached().then(|| vertex.shortest_path()))
                .collect(),
            predecessors: self
                .vertices()
                .map(|(_, vertex)| vertex.predecessor().map(|p| p.index()))
                .collect(),
            source: source.index(),
        }
    }
}

/// The message-passing loop behind [`ShortestPathAlgorithm`]
///
/// Works on a clone, so the caller's graph stays unqueried.
#[derive(Debug, Default)]
pub struct MessagePassing;

impl MessagePassing {
    /// Creates a new message-passing algorithm instance
    pub fn new() -> Self {
        MessagePassing
    }
}

impl ShortestPathAlgorithm for MessagePassing {
    fn name(&self) -> &'static str {
        "Message passing"
    }

    fn compute_shortest_paths(&self, graph: &Graph, source: Rank) -> Result<ShortestPathResult> {
        if graph.spent {
            return Err(Error::GraphSpent { origin: source });
        }
        let source = graph.find_vertex(source)?;
        let mut graph = graph.clone();
        graph.run_from(source)?;
        Ok(graph.snapshot(source))
    }
}
