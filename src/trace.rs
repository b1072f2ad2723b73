//! Path traces and the printable query report.
//!
//! Collecting the path (see [`crate::Graph::path_to`]) and formatting it are
//! separate steps, so the rank sequence can be inspected without parsing text.

use std::fmt;

use crate::graph::{Distance, Rank};

/// Printable outcome for a single vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trace {
    /// The vertex was reached; `path` runs from the query origin to it.
    Reached { path: Vec<Rank>, distance: Distance },
    /// No message ever reached the vertex.
    Single { rank: Rank },
    /// Origin and target coincide, so nothing was traversed.
    Identity { rank: Rank },
}

impl Trace {
    /// Rank of the vertex this trace describes
    pub fn rank(&self) -> Rank {
        match self {
            Trace::Reached { path, .. } => path.last().copied().unwrap_or_default(),
            Trace::Single { rank } | Trace::Identity { rank } => *rank,
        }
    }

    /// Total path length, or `None` when unreached
    pub fn distance(&self) -> Option<Distance> {
        match self {
            Trace::Reached { distance, .. } => Some(*distance),
            Trace::Single { .. } => None,
            Trace::Identity { .. } => Some(0),
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trace::Reached { path, distance } => {
                let hops: Vec<String> = path.iter().map(|rank| format!("v{}", rank)).collect();
                write!(f, "{} - {}", hops.join(" => "), distance)
            }
            Trace::Single { rank } => write!(f, "v{} - Single", rank),
            Trace::Identity { rank } => write!(f, "v{} ==> v{} - 0", rank, rank),
        }
    }
}

/// Everything a query prints, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReport {
    pub origin: Rank,
    pub target: Rank,
    /// Traces of the other vertices, filled only in show-all mode
    pub others: Vec<Trace>,
    pub result: Trace,
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Trace::Identity { .. } = self.result {
            return writeln!(f, "{}", self.result);
        }
        for trace in &self.others {
            writeln!(f, "{}", trace)?;
        }
        writeln!(f)?;
        writeln!(f, "Result:")?;
        writeln!(f, "{}", self.result)
    }
}
