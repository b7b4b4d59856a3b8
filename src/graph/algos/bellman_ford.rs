//! Bellman-Ford Algorithm.
//!
//! Computes shortest paths from a start vertex over arbitrary real weights
//! and detects negative cycles reachable from the start.

use crate::bail_unknown_vertex;
use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{index_vertices, resolve_edges};
use crate::graph::types::{DistanceRecord, ShortestPaths, Vertex, WeightedEdge};
use std::time::Instant;

/// Shortest paths from `start` over the edge list `edges`.
///
/// Every edge is relaxed `|V| - 1` times (stopping early once a pass changes
/// nothing), then once more: if that extra pass still improves a distance, a
/// negative cycle is reachable and [`GraphError::NegativeCycle`] is returned
/// instead of a misleading distance map. Cycles unreachable from `start` do
/// not affect the result.
#[tracing::instrument(skip_all, fields(start = ?start, vertices = vertices.len(), edges = edges.len()))]
pub fn bellman_ford<V: Vertex>(
    vertices: &[V],
    edges: &[WeightedEdge<V>],
    start: &V,
) -> Result<ShortestPaths<V>> {
    let index = index_vertices(vertices);
    let Some(&source) = index.get(start) else {
        bail_unknown_vertex!(start);
    };
    let arcs = resolve_edges(&index, edges)?;

    let started = Instant::now();
    let n = index.len();
    let mut dist = vec![f64::INFINITY; vertices.len()];
    let mut pred: Vec<Option<usize>> = vec![None; vertices.len()];
    dist[source] = 0.0;

    // Relax V-1 times
    let mut passes = 0;
    for _ in 0..n.saturating_sub(1) {
        passes += 1;
        let mut changed = false;
        for &(u, v, weight) in &arcs {
            if dist[u] == f64::INFINITY {
                continue;
            }
            if dist[u] + weight < dist[v] {
                dist[v] = dist[u] + weight;
                pred[v] = Some(u);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    // Check for negative cycles
    for &(u, v, weight) in &arcs {
        if dist[u] != f64::INFINITY && dist[u] + weight < dist[v] {
            tracing::warn!(vertex = ?vertices[v], "negative cycle detected");
            return Err(GraphError::negative_cycle(&vertices[v]));
        }
    }

    crate::trace_time!(started, "bellman_ford", passes = passes);

    let records = index
        .iter()
        .map(|(vertex, &slot)| {
            let record = DistanceRecord {
                distance: dist[slot],
                predecessor: pred[slot].map(|p| vertices[p].clone()),
            };
            (vertex.clone(), record)
        })
        .collect();

    Ok(ShortestPaths {
        start: start.clone(),
        records,
    })
}
