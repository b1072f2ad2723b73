use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::Rank;
use crate::Result;

/// Input for one shortest-path run
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Flat `(origin, target, length)` triples
    pub edges: Vec<i64>,
    pub start_point: Rank,
    pub end_point: Rank,
    /// Directed edges only; otherwise each triple is inserted both ways
    pub oriented: bool,
    /// Also print the trace of every vertex other than start and end
    pub show_all: bool,
    /// Enable the debug diagnostic channel
    pub debug: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            edges: vec![1, 2, 5, 2, 3, 3, 1, 3, 10],
            start_point: 1,
            end_point: 3,
            oriented: false,
            show_all: false,
            debug: false,
        }
    }
}

impl QueryConfig {
    /// Parses a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
