//! Conflict resolution between overlapping candidates
//!
//! Candidates are ordered by start ascending, then end descending (longest
//! match first), then priority descending (later rule first). A single
//! greedy pass keeps every candidate that does not intersect one already
//! kept. The kept set is returned ordered by start.

use std::cmp::Ordering;

use super::rules::Token;

fn candidate_order(a: &Token<'_>, b: &Token<'_>) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.end.cmp(&a.end))
        .then_with(|| b.priority.cmp(&a.priority))
}

/// Reduce candidates to a non-overlapping, start-ascending sequence
pub fn resolve(mut candidates: Vec<Token<'_>>) -> Vec<Token<'_>> {
    candidates.sort_by(candidate_order);

    let mut accepted: Vec<Token<'_>> = Vec::with_capacity(candidates.len());
    // Candidates arrive start-ascending, so a candidate intersects some
    // accepted token iff it starts before the furthest accepted end.
    let mut frontier = 0;
    for candidate in candidates {
        if candidate.start < frontier {
            continue;
        }
        frontier = candidate.end;
        accepted.push(candidate);
    }

    accepted.sort_by_key(|t| t.start);
    accepted
}
