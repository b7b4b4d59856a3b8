use crate::bail_unknown_vertex;
use crate::error::Result;
use crate::graph::algos::shared::{check_weight, HeapEntry};
use crate::graph::store::WeightedGraph;
use crate::graph::types::{DistanceRecord, ShortestPaths, Vertex};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

/// State tracked during a Dijkstra run
struct DijkstraState<V> {
    records: HashMap<V, DistanceRecord<V>>,
    settled: HashSet<V>,
    heap: BinaryHeap<Reverse<HeapEntry<V>>>,
    seq: u64,
}

impl<V: Vertex> DijkstraState<V> {
    fn new(graph: &WeightedGraph<V>, start: &V) -> Self {
        let mut records: HashMap<V, DistanceRecord<V>> = graph
            .vertices()
            .iter()
            .map(|v| (v.clone(), DistanceRecord::unreached()))
            .collect();
        records.insert(start.clone(), DistanceRecord::origin());

        let mut state = Self {
            records,
            settled: HashSet::new(),
            heap: BinaryHeap::new(),
            seq: 0,
        };
        state.push(start.clone(), 0.0);
        state
    }

    fn push(&mut self, vertex: V, distance: f64) {
        self.heap.push(Reverse(HeapEntry {
            key: distance,
            seq: self.seq,
            item: vertex,
        }));
        self.seq += 1;
    }

    /// Relax the edge `from -> to`; returns true if `to` improved
    fn relax(&mut self, from: &V, to: &V, weight: f64) -> bool {
        let base = self.records[from].distance;
        let Some(record) = self.records.get_mut(to) else {
            return false;
        };
        let candidate = base + weight;
        if candidate < record.distance {
            record.distance = candidate;
            record.predecessor = Some(from.clone());
            self.push(to.clone(), candidate);
            return true;
        }
        false
    }
}

/// Single-source shortest paths over non-negative weights.
///
/// Negative weights are not rejected, but the result is then unspecified;
/// use [`bellman_ford`](super::bellman_ford) for them. The frontier is a
/// binary min-heap with lazy deletion: stale entries for settled vertices are
/// skipped when popped. Equal tentative distances are settled in the order
/// they were pushed.
#[tracing::instrument(skip_all, fields(start = ?start, vertices = graph.vertex_count()))]
pub fn dijkstra<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Result<ShortestPaths<V>> {
    if !graph.contains(start) {
        bail_unknown_vertex!(start);
    }

    let started = Instant::now();
    let mut state = DijkstraState::new(graph, start);

    while let Some(Reverse(HeapEntry { item: current, .. })) = state.heap.pop() {
        if !state.settled.insert(current.clone()) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(&current)? {
            check_weight(&current, neighbor, *weight)?;
            if state.settled.contains(neighbor) {
                continue;
            }
            state.relax(&current, neighbor, *weight);
        }
    }

    crate::trace_time!(started, "dijkstra", settled = state.settled.len());
    tracing::debug!(reached = state.settled.len(), "dijkstra complete");

    Ok(ShortestPaths {
        start: start.clone(),
        records: state.records,
    })
}
