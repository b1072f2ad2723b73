//! Broadcast SSSP - message-passing Dijkstra on small weighted graphs
//!
//! A graph is built once from a flat list of `(origin, target, length)` triples.
//! Every vertex, once selected as the closest unvisited vertex, broadcasts its
//! distance to its neighbours, which relax themselves if the offer is shorter.
//! The path to the queried target is then recovered from predecessor links.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod diagnostics;
pub mod graph;
pub mod trace;

pub use algorithm::{
    dijkstra::Dijkstra, message_passing::MessagePassing, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use config::QueryConfig;
pub use diagnostics::{Advisory, AdvisoryKind, Diagnostic};
/// Re-export main types for convenient use
pub use graph::{Distance, Graph, Rank, INFINITY};
pub use trace::{QueryReport, Trace};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Edge list is empty!")]
    EmptyEdgeList,

    #[error("Edge list length is not a multiple of three!")]
    MisalignedEdgeList { len: usize },

    #[error("Rank is less than zero!")]
    NegativeRank { rank: Rank },

    #[error("Attempt to get a vertex that does not exists!")]
    VertexNotFound { rank: Rank },

    #[error("Trying to add edge with an unknown vertex as one of the ends!")]
    UnknownEndpoint { index: usize, length: Distance },

    #[error("Attempt to assign an edge that starts at another vertex!")]
    ForeignEdge { rank: Rank, origin: Rank, edge: usize },

    #[error("Multiple edges lead to one vertex!")]
    DuplicateTarget { rank: Rank, target: Rank },

    #[error("An edge between these vertices already exists!")]
    DuplicateUndirectedEdge { first: Rank, second: Rank },

    #[error("Trying to add an edge with length below zero!")]
    NegativeLength { length: Distance },

    #[error("Trying to add an edge with length over infinity!")]
    LengthOverInfinity { length: Distance },

    #[error("Visited vertex received a relaxing message!")]
    RelaxVisited {
        rank: Rank,
        sender: Rank,
        candidate: Distance,
    },

    #[error("Predecessor chain does not end at a path origin!")]
    BrokenPredecessorChain { rank: Rank, steps: usize },

    #[error("Shortest path was already computed on this graph!")]
    GraphSpent { origin: Rank },

    #[error("Cannot read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Cannot parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of a full configured run
#[derive(Debug, Clone)]
pub struct Solution {
    pub report: QueryReport,
    pub advisories: Vec<Advisory>,
}

/// Builds the graph described by `config` and answers its single query.
pub fn solve(config: &QueryConfig) -> Result<Solution> {
    let mut graph = Graph::build(&config.edges, config.oriented)?;
    let report = graph.shortest_path(config.start_point, config.end_point, config.show_all)?;
    Ok(Solution {
        report,
        advisories: graph.advisories().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_default_config() {
        let solution = solve(&QueryConfig::default()).unwrap();
        assert_eq!(solution.report.result.to_string(), "v1 => v2 => v3 - 8");
        assert!(solution.advisories.is_empty());
    }

    #[test]
    fn test_solve_propagates_build_errors() {
        let config = QueryConfig {
            edges: vec![1, 2, 5, 4],
            ..QueryConfig::default()
        };
        assert!(matches!(
            solve(&config),
            Err(Error::MisalignedEdgeList { len: 4 })
        ));
    }

    #[test]
    fn test_solve_collects_advisories() {
        let config = QueryConfig {
            edges: vec![1, 1, 2, 1, 2, 0],
            start_point: 1,
            end_point: 2,
            oriented: true,
            ..QueryConfig::default()
        };
        let solution = solve(&config).unwrap();
        assert_eq!(solution.report.result.to_string(), "v1 => v2 - 0");
        let kinds: Vec<_> = solution.advisories.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AdvisoryKind::SelfLoop, AdvisoryKind::ZeroLength]);
    }
}
