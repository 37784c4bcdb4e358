//! The reachability store: an incrementally maintained transitive closure
//! over a fixed universe of node ids, used to admit or reject directed edges.
//!
//! # Representation
//!
//! The sole persistent state is an `N × N` boolean matrix `ancestors`, one
//! [`BitRow`] per node. `ancestors[i]` holds bit `j` exactly when node `j`
//! is an ancestor of node `i` — there is a path `j → … → i` among the edges
//! accepted so far, or `i == j`. The matrix is always the exact reflexive
//! transitive closure of the accepted edge set: never a subset (a missed
//! ancestor would let a cycle slip through) and never a superset (a spurious
//! ancestor would reject a legal edge).
//!
//! # Update Rule
//!
//! Admitting an edge `source → target` is a single membership test: if
//! `target` is already an ancestor of `source`, the edge would close the
//! cycle `target → … → source → target` and is rejected. Otherwise every
//! node that descends from `target` (every row with the `target` bit set,
//! including `target` itself via reflexivity) gains all of `source`'s
//! ancestors in one row-wise OR sweep. No other rows change, and the sweep
//! order is irrelevant because row unions are independent and idempotent.
//!
//! Edges themselves are never recorded. Re-presenting an edge that is
//! already implied by the closure passes the cycle test again and reports
//! acceptance with no matrix change.
//!
//! # Complexity
//!
//! Rejections and [`ReachabilityStore::is_ancestor`] cost O(1). An accepted
//! insertion scans all `N` rows and ORs `N/64` words into each matching row,
//! O(N²/64) worst case. Space is N² bits, fixed at construction.
use serde::Serialize;

use crate::bitrow::BitRow;

// ---------------------------------------------------------------------------
// Outcome and error types
// ---------------------------------------------------------------------------

/// Verdict of one edge admission attempt.
///
/// Rejections are expected outcomes of the decision rule, not errors; only
/// out-of-range node ids surface as [`StoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertOutcome {
    /// The edge does not close a cycle; the closure has been updated.
    Accepted,
    /// The target is already an ancestor of the source; committing the edge
    /// would close a cycle. No state change.
    RejectedCycle,
    /// Source and target are the same node — a cycle of length one. No
    /// state change.
    RejectedSelfLoop,
}

impl InsertOutcome {
    /// Returns `true` for [`InsertOutcome::Accepted`].
    pub fn is_accepted(self) -> bool {
        matches!(self, InsertOutcome::Accepted)
    }
}

/// Which argument of an edge operation carried an invalid node id.
///
/// Follows the start/end vocabulary of edge pairs: the first argument of
/// [`ReachabilityStore::try_insert_edge`] (and the row argument of
/// [`ReachabilityStore::is_ancestor`]) is `Start`; the second (the column
/// argument) is `End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// The edge's starting node (first argument).
    Start,
    /// The edge's ending node (second argument).
    End,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Errors produced at the store boundary.
///
/// Every operation validates its node ids before touching the matrix, so an
/// out-of-range id can never read or write past a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A node id is outside the universe `[0, node_count)`.
    NodeOutOfRange {
        /// Which argument carried the bad id.
        endpoint: Endpoint,
        /// The offending node id.
        node: usize,
        /// The store's node universe size.
        node_count: usize,
    },
    /// A requested matrix sub-block extends past the matrix bounds.
    RegionOutOfRange {
        /// One past the last requested row.
        row_end: usize,
        /// One past the last requested column.
        col_end: usize,
        /// The store's node universe size.
        node_count: usize,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NodeOutOfRange {
                endpoint,
                node,
                node_count,
            } => {
                write!(
                    f,
                    "{endpoint} (= {node}) must be less than the node count (= {node_count})"
                )
            }
            StoreError::RegionOutOfRange {
                row_end,
                col_end,
                node_count,
            } => {
                write!(
                    f,
                    "matrix corner extends to row {row_end}, column {col_end}, \
                     past the node count (= {node_count})"
                )
            }
        }
    }
}

impl std::error::Error for StoreError {}

// ---------------------------------------------------------------------------
// CornerView
// ---------------------------------------------------------------------------

/// A read-only snapshot of a square sub-block of the ancestor matrix.
///
/// Produced by [`ReachabilityStore::corner`] for debug visualization; the
/// store exposes the raw booleans and leaves rendering to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CornerView {
    /// First row of the block.
    pub row_start: usize,
    /// First column of the block.
    pub col_start: usize,
    /// Row-major block contents; `rows[r][c]` is
    /// `ancestors[row_start + r][col_start + c]`.
    pub rows: Vec<Vec<bool>>,
}

// ---------------------------------------------------------------------------
// ReachabilityStore
// ---------------------------------------------------------------------------

/// An owned ancestor matrix over a fixed node universe.
///
/// Constructed once with [`ReachabilityStore::new`], mutated in place by
/// accepted insertions, and never shrunk or reset. Multiple independent
/// stores may coexist; each owns its matrix.
///
/// Single-threaded by design: [`ReachabilityStore::try_insert_edge`] is a
/// read-then-write sequence, so concurrent callers would need to treat the
/// whole call as one critical section to keep the closure exact.
#[derive(Debug, Clone)]
pub struct ReachabilityStore {
    ancestors: Vec<BitRow>,
    node_count: usize,
}

impl ReachabilityStore {
    /// Creates a store over the node universe `[0, node_count)` with every
    /// diagonal entry set and nothing else.
    ///
    /// Every node starts as its own ancestor; the diagonal is never cleared.
    /// Allocates `node_count²` bits up front — for the default CLI universe
    /// of 65536 nodes that is 512 MiB, a construction-time cost paid once.
    pub fn new(node_count: usize) -> Self {
        let mut ancestors = Vec::with_capacity(node_count);
        for i in 0..node_count {
            let mut row = BitRow::new(node_count);
            row.set(i);
            ancestors.push(row);
        }
        Self {
            ancestors,
            node_count,
        }
    }

    /// Returns the size of the node universe.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns whether `candidate` is currently an ancestor of `node`.
    ///
    /// Reads `ancestors[node][candidate]`; no side effects. Reflexive:
    /// `is_ancestor(x, x)` is always `Ok(true)` for in-range `x`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NodeOutOfRange`] if either id is outside the universe
    /// (`node` reported as [`Endpoint::Start`], `candidate` as
    /// [`Endpoint::End`]).
    pub fn is_ancestor(&self, node: usize, candidate: usize) -> Result<bool, StoreError> {
        self.check_range(node, Endpoint::Start)?;
        self.check_range(candidate, Endpoint::End)?;
        Ok(self.ancestors[node].test(candidate))
    }

    /// Attempts to admit the directed edge `source → target`.
    ///
    /// The decision rule:
    ///
    /// 1. `source == target` — rejected as a self-loop (a cycle of length
    ///    one; the closure test would also catch it via the diagonal, but
    ///    the explicit check names the reason).
    /// 2. `target` already an ancestor of `source` — accepting would close
    ///    a cycle; rejected with no state change.
    /// 3. Otherwise the closure is updated and the edge reported accepted.
    ///
    /// Duplicate and already-implied edges are not detected: they re-enter
    /// the rule, pass the cycle test, and report `Accepted` while changing
    /// nothing (the update is idempotent).
    ///
    /// # Errors
    ///
    /// [`StoreError::NodeOutOfRange`] if either endpoint is outside the
    /// universe. The matrix is untouched in that case.
    pub fn try_insert_edge(
        &mut self,
        source: usize,
        target: usize,
    ) -> Result<InsertOutcome, StoreError> {
        self.check_range(source, Endpoint::Start)?;
        self.check_range(target, Endpoint::End)?;

        if source == target {
            return Ok(InsertOutcome::RejectedSelfLoop);
        }
        if self.ancestors[source].test(target) {
            return Ok(InsertOutcome::RejectedCycle);
        }

        self.propagate(source, target);
        Ok(InsertOutcome::Accepted)
    }

    /// Recomputes the closure after accepting `source → target`.
    ///
    /// Works from a snapshot of `source`'s row: every row with the `target`
    /// bit set (every descendant of `target`, including `target` itself via
    /// reflexivity) is unioned with the snapshot, so each such node gains
    /// `source` and all of `source`'s ancestors. `source`'s own row never
    /// matches — `ancestors[source][target]` was just checked clear — so
    /// the snapshot stays equal to the live row throughout the sweep.
    fn propagate(&mut self, source: usize, target: usize) {
        let source_row = self.ancestors[source].clone();
        for row in &mut self.ancestors {
            if row.test(target) {
                row.union_with(&source_row);
            }
        }
    }

    /// Snapshots the `size × size` sub-block of the matrix anchored at
    /// (`row_start`, `col_start`).
    ///
    /// # Errors
    ///
    /// [`StoreError::RegionOutOfRange`] if the block extends past the
    /// matrix in either dimension.
    pub fn corner(
        &self,
        row_start: usize,
        col_start: usize,
        size: usize,
    ) -> Result<CornerView, StoreError> {
        let row_end = row_start.saturating_add(size);
        let col_end = col_start.saturating_add(size);
        if row_end > self.node_count || col_end > self.node_count {
            return Err(StoreError::RegionOutOfRange {
                row_end,
                col_end,
                node_count: self.node_count,
            });
        }

        let rows = (row_start..row_end)
            .map(|r| {
                (col_start..col_end)
                    .map(|c| self.ancestors[r].test(c))
                    .collect()
            })
            .collect();

        Ok(CornerView {
            row_start,
            col_start,
            rows,
        })
    }

    /// Returns an error if `node` is outside the universe.
    fn check_range(&self, node: usize, endpoint: Endpoint) -> Result<(), StoreError> {
        if node >= self.node_count {
            return Err(StoreError::NodeOutOfRange {
                endpoint,
                node,
                node_count: self.node_count,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
