//! Deterministic edge-list generators for benchmarks.
//!
//! All generators are seeded so that runs are reproducible; none of them
//! consult a store, so the same list can be replayed against stores of
//! different universe sizes (as long as the ids fit).

use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

/// A linear chain `0→1→…→n-1`: every attempt is accepted and each
/// insertion's propagation sweep grows with the chain.
pub fn chain_edges(node_count: usize) -> Vec<(usize, usize)> {
    (1..node_count).map(|i| (i - 1, i)).collect()
}

/// A fan-out from node 0 to every other node: accepted attempts whose
/// propagation touches exactly one row each.
pub fn fanout_edges(node_count: usize) -> Vec<(usize, usize)> {
    (1..node_count).map(|i| (0, i)).collect()
}

/// `count` uniformly random pairs over `[0, node_count)`.
///
/// Produces a realistic mix of accepted edges, cycle rejections, and
/// self-loops once the graph becomes dense.
pub fn random_edges(node_count: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect()
}
