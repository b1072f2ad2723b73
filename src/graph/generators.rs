use std::collections::HashSet;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::{Distance, Rank};

/// Generates a connected random graph as flat `(origin, target, length)` triples.
///
/// Vertex `i` gets rank `3 * i + 1`, so ranks are sparse. A random spanning tree
/// links all `n` vertices, then up to `extra` further edges are added. No
/// unordered pair appears twice, so the output is valid in both oriented and
/// undirected mode. Lengths are drawn from `1..=max_len`.
pub fn random_triples(n: usize, extra: usize, max_len: Distance, seed: u64) -> Vec<i64> {
    assert!(n >= 2, "n must be at least 2");
    assert!(max_len >= 1, "max_len must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let rank = |i: usize| 3 * i as Rank + 1;
    let mut pairs = HashSet::new();
    let mut triples = Vec::with_capacity(3 * (n - 1 + extra));

    for i in 1..n {
        let parent = rng.gen_range(0..i);
        pairs.insert((parent, i));
        triples.extend([rank(parent), rank(i), rng.gen_range(1..=max_len)]);
    }

    let mut attempts = 0;
    let mut added = 0;
    while added < extra && attempts < extra * 10 {
        attempts += 1;
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v || !pairs.insert((u.min(v), u.max(v))) {
            continue;
        }
        triples.extend([rank(u), rank(v), rng.gen_range(1..=max_len)]);
        added += 1;
    }

    triples
}
