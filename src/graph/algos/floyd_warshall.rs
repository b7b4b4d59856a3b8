//! Floyd-Warshall all-pairs shortest paths.

use crate::config::AlgoConfig;
use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{index_vertices, resolve_edges};
use crate::graph::types::{DistanceMatrix, Vertex, WeightedEdge};
use std::collections::HashSet;
use std::time::Instant;

/// All-pairs shortest distances with the default [`AlgoConfig`]
pub fn floyd_warshall<V: Vertex>(
    vertices: &[V],
    edges: &[WeightedEdge<V>],
) -> Result<DistanceMatrix<V>> {
    floyd_warshall_with(vertices, edges, &AlgoConfig::default())
}

/// All-pairs shortest distances.
///
/// The matrix starts at 0 on the diagonal, the edge weight where a direct
/// edge exists (the last one wins for duplicates) and infinity elsewhere. A
/// self-loop only lowers its diagonal entry. Negative cycles are not an
/// error: they leave a negative diagonal entry, reported by
/// [`DistanceMatrix::has_negative_cycle`].
///
/// Fails with [`GraphError::LimitExceeded`] when there are more vertices than
/// `config.max_matrix_vertices`.
#[tracing::instrument(skip_all, fields(vertices = vertices.len(), edges = edges.len()))]
pub fn floyd_warshall_with<V: Vertex>(
    vertices: &[V],
    edges: &[WeightedEdge<V>],
    config: &AlgoConfig,
) -> Result<DistanceMatrix<V>> {
    // Compact to unique vertices so slots are dense
    let mut seen = HashSet::with_capacity(vertices.len());
    let unique: Vec<V> = vertices
        .iter()
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect();

    let n = unique.len();
    if n > config.max_matrix_vertices {
        return Err(GraphError::limit_exceeded(
            "matrix vertices",
            config.max_matrix_vertices,
            n,
        ));
    }

    let index = index_vertices(&unique);
    let arcs = resolve_edges(&index, edges)?;

    let started = Instant::now();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];
    for i in 0..n {
        dist[i][i] = 0.0;
        next[i][i] = Some(i);
    }
    for (u, v, weight) in arcs {
        if u == v {
            dist[u][u] = dist[u][u].min(weight);
        } else {
            dist[u][v] = weight;
            next[u][v] = Some(v);
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                if dist[k][j] == f64::INFINITY {
                    continue;
                }
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    crate::trace_time!(started, "floyd_warshall", vertices = n);

    let matrix = DistanceMatrix {
        vertices: unique,
        index,
        dist,
        next,
    };
    if matrix.has_negative_cycle() {
        tracing::warn!(
            vertices = ?matrix.negative_cycle_vertices(),
            "negative cycle: distances are not meaningful"
        );
    }
    Ok(matrix)
}
