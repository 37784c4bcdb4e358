//! Property-based tests for the reachability store.
//!
//! Replays `proptest`-generated edge scripts (small universes, up to a few
//! hundred attempts) through a [`ReachabilityStore`] and checks the outcome
//! of every attempt and the final matrix against a naive reference model
//! that keeps the literal accepted edge list and answers reachability by
//! BFS.
#![allow(clippy::expect_used)]

use std::collections::VecDeque;

use cyclegate_core::{InsertOutcome, ReachabilityStore};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Reference model
// ---------------------------------------------------------------------------

/// Adjacency-list model holding the edges the store accepted.
struct ReferenceGraph {
    successors: Vec<Vec<usize>>,
}

impl ReferenceGraph {
    fn new(node_count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); node_count],
        }
    }

    fn add_edge(&mut self, source: usize, target: usize) {
        self.successors[source].push(target);
    }

    /// BFS reachability: `true` when `to == from` or a directed path
    /// `from → … → to` exists.
    fn reaches(&self, from: usize, to: usize) -> bool {
        if from == to {
            return true;
        }
        let mut visited = vec![false; self.successors.len()];
        let mut queue = VecDeque::from([from]);
        visited[from] = true;
        while let Some(node) = queue.pop_front() {
            for &next in &self.successors[node] {
                if next == to {
                    return true;
                }
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }
}

// ---------------------------------------------------------------------------
// Script strategy
// ---------------------------------------------------------------------------

/// A universe size and a sequence of edge attempts within it.
fn edge_script() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..24).prop_flat_map(|n| {
        let attempts = prop::collection::vec((0..n, 0..n), 0..200);
        (Just(n), attempts)
    })
}

proptest! {
    /// Every verdict matches what the reference model predicts: self-loops
    /// rejected, attempts whose target already reaches their source
    /// rejected as cycles, everything else accepted.
    #[test]
    fn verdicts_match_reference_model((n, attempts) in edge_script()) {
        let mut store = ReachabilityStore::new(n);
        let mut reference = ReferenceGraph::new(n);

        for &(source, target) in &attempts {
            let outcome = store.try_insert_edge(source, target).expect("ids in range");
            let expected = if source == target {
                InsertOutcome::RejectedSelfLoop
            } else if reference.reaches(target, source) {
                InsertOutcome::RejectedCycle
            } else {
                InsertOutcome::Accepted
            };
            prop_assert_eq!(outcome, expected, "attempt {} -> {}", source, target);

            if outcome.is_accepted() {
                reference.add_edge(source, target);
            }
        }
    }

    /// After any script, the matrix equals the reflexive-transitive
    /// reachability of the accepted edge set — exact closure, no more and
    /// no less.
    #[test]
    fn final_matrix_is_exact_closure((n, attempts) in edge_script()) {
        let mut store = ReachabilityStore::new(n);
        let mut reference = ReferenceGraph::new(n);

        for &(source, target) in &attempts {
            if store
                .try_insert_edge(source, target)
                .expect("ids in range")
                .is_accepted()
            {
                reference.add_edge(source, target);
            }
        }

        for i in 0..n {
            for j in 0..n {
                let recorded = store.is_ancestor(i, j).expect("ids in range");
                prop_assert_eq!(
                    recorded,
                    reference.reaches(j, i),
                    "ancestors[{}][{}] disagrees with BFS reachability",
                    i,
                    j
                );
            }
        }
    }

    /// The accepted edge set is always acyclic: no node reaches itself
    /// through one or more accepted edges.
    #[test]
    fn accepted_edges_stay_acyclic((n, attempts) in edge_script()) {
        let mut store = ReachabilityStore::new(n);
        let mut reference = ReferenceGraph::new(n);

        for &(source, target) in &attempts {
            if store
                .try_insert_edge(source, target)
                .expect("ids in range")
                .is_accepted()
            {
                reference.add_edge(source, target);
            }
        }

        for node in 0..n {
            for &next in &reference.successors[node] {
                prop_assert!(
                    !reference.reaches(next, node),
                    "accepted edge {} -> {} sits on a cycle",
                    node,
                    next
                );
            }
        }
    }

    /// Rejected attempts never mutate the matrix.
    #[test]
    fn rejections_do_not_mutate((n, attempts) in edge_script()) {
        let mut store = ReachabilityStore::new(n);

        for &(source, target) in &attempts {
            let before = store.corner(0, 0, n).expect("full matrix in range");
            let outcome = store.try_insert_edge(source, target).expect("ids in range");
            if !outcome.is_accepted() {
                let after = store.corner(0, 0, n).expect("full matrix in range");
                prop_assert_eq!(before, after, "rejection of {} -> {} mutated state", source, target);
            }
        }
    }

    /// Reflexivity survives every script.
    #[test]
    fn reflexivity_is_permanent((n, attempts) in edge_script()) {
        let mut store = ReachabilityStore::new(n);
        for &(source, target) in &attempts {
            store.try_insert_edge(source, target).expect("ids in range");
        }
        for i in 0..n {
            prop_assert!(store.is_ancestor(i, i).expect("ids in range"));
        }
    }
}
