//! Path reconstruction from predecessor records

use crate::graph::types::{DistanceRecord, Vertex};
use std::collections::HashMap;

/// Walk predecessor links back from `target` and return the path start-first.
///
/// Returns `[target]` when `target` is the start, unreachable, or unknown;
/// those are the cases with an empty predecessor chain.
pub fn reconstruct_path<V: Vertex>(
    records: &HashMap<V, DistanceRecord<V>>,
    target: &V,
) -> Vec<V> {
    let mut path = vec![target.clone()];
    let mut current = target;

    // Bounded by the record count so hand-built cyclic records terminate
    for _ in 0..records.len() {
        match records.get(current).and_then(|r| r.predecessor.as_ref()) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
