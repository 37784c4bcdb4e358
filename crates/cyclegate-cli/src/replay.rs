//! Turning input lines into edge-admission attempts.
//!
//! Both `repl` and `check` feed lines through [`admit_line`]: parse two
//! non-negative integers, hand them to the store, and fold the result into
//! a caller-facing [`Verdict`] plus an optional explanatory note. Malformed
//! input never reaches the store.
use cyclegate_core::{InsertOutcome, ReachabilityStore, StoreError};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Caller-facing outcome of one input line.
///
/// `Cycle` and `SelfLoop` both render as "Cycle found" in human output (a
/// self-loop is a cycle of length one); JSON output keeps them distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The edge was committed.
    Accepted,
    /// The edge would close a cycle.
    Cycle,
    /// Source and target are the same node.
    SelfLoop,
    /// The line was malformed or named an out-of-range node; the store was
    /// not consulted or refused the ids.
    BadData,
}

impl Verdict {
    /// Returns `true` when the attempt committed an edge.
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// One processed input line: the parsed endpoints (when parseable), the
/// verdict, and an optional note explaining a rejection or parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    /// Parsed starting node, if the line had one.
    pub start: Option<usize>,
    /// Parsed ending node, if the line had one.
    pub end: Option<usize>,
    /// The outcome.
    pub verdict: Verdict,
    /// Explanation for non-accepted outcomes, in "input ignored: …" form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// ---------------------------------------------------------------------------
// Line admission
// ---------------------------------------------------------------------------

/// Parses one line as `start end` and attempts the edge against `store`.
///
/// Parsing accepts exactly two whitespace-separated tokens, each a
/// non-negative integer; anything else is [`Verdict::BadData`] without
/// touching the store. In-range parse results run the store's decision
/// rule; out-of-range ids come back from the store as
/// [`StoreError::NodeOutOfRange`] and also fold to [`Verdict::BadData`].
pub fn admit_line(store: &mut ReachabilityStore, line: &str) -> Attempt {
    let (start, end) = match parse_pair(line) {
        Ok(pair) => pair,
        Err(attempt) => return attempt,
    };

    match store.try_insert_edge(start, end) {
        Ok(InsertOutcome::Accepted) => Attempt {
            start: Some(start),
            end: Some(end),
            verdict: Verdict::Accepted,
            note: None,
        },
        Ok(InsertOutcome::RejectedCycle) => Attempt {
            start: Some(start),
            end: Some(end),
            verdict: Verdict::Cycle,
            note: None,
        },
        Ok(InsertOutcome::RejectedSelfLoop) => Attempt {
            start: Some(start),
            end: Some(end),
            verdict: Verdict::SelfLoop,
            note: Some(format!(
                "input ignored: start and end are identical (= {end})"
            )),
        },
        Err(e @ StoreError::NodeOutOfRange { .. }) => Attempt {
            start: Some(start),
            end: Some(end),
            verdict: Verdict::BadData,
            note: Some(format!("input ignored: {e}")),
        },
        // try_insert_edge never reports a region error; treat it like any
        // other refusal if the store ever grows one.
        Err(e @ StoreError::RegionOutOfRange { .. }) => Attempt {
            start: Some(start),
            end: Some(end),
            verdict: Verdict::BadData,
            note: Some(format!("input ignored: {e}")),
        },
    }
}

/// Splits a line into exactly two non-negative integers.
///
/// On failure returns the fully-formed [`Verdict::BadData`] attempt so the
/// caller can render it directly.
fn parse_pair(line: &str) -> Result<(usize, usize), Attempt> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next();
    let second = tokens.next();
    let extra = tokens.next();

    let (Some(first), Some(second)) = (first, second) else {
        return Err(bad_data(None, None, "expected two integers: start end"));
    };
    if extra.is_some() {
        return Err(bad_data(
            None,
            None,
            "expected exactly two integers: start end",
        ));
    }

    let start = match first.parse::<usize>() {
        Ok(v) => v,
        Err(_) => {
            return Err(bad_data(
                None,
                None,
                &format!("start ({first:?}) is not a non-negative integer"),
            ));
        }
    };
    let end = match second.parse::<usize>() {
        Ok(v) => v,
        Err(_) => {
            return Err(bad_data(
                Some(start),
                None,
                &format!("end ({second:?}) is not a non-negative integer"),
            ));
        }
    };

    Ok((start, end))
}

/// Builds a [`Verdict::BadData`] attempt with an "input ignored" note.
fn bad_data(start: Option<usize>, end: Option<usize>, reason: &str) -> Attempt {
    Attempt {
        start,
        end,
        verdict: Verdict::BadData,
        note: Some(format!("input ignored: {reason}")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
