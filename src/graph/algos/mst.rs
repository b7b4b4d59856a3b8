//! Minimum Spanning Tree builders.
//!
//! - [`prim_mst`] grows one tree from a start vertex over a min-heap of
//!   boundary edges.
//! - [`kruskal_mst`] scans all edges by ascending weight and joins trees with
//!   [`UnionFind`].
//!
//! On a connected undirected graph both produce a tree of the same total
//! weight, though the edge sets may differ when weights tie.

use crate::bail_unknown_vertex;
use crate::error::Result;
use crate::graph::algos::shared::{check_weight, index_vertices, resolve_edges, HeapEntry};
use crate::graph::algos::union_find::UnionFind;
use crate::graph::store::WeightedGraph;
use crate::graph::types::{MinimumSpanningTree, Vertex, WeightedEdge};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

/// Prim's algorithm from `start`.
///
/// Only the start's component is spanned: on a disconnected graph the result
/// reports [`MinimumSpanningTree::is_spanning`] as false. Candidate edges
/// whose destination was visited after they were pushed are discarded when
/// popped. Equal weights are taken in the order the edges were pushed.
#[tracing::instrument(skip_all, fields(start = ?start, vertices = graph.vertex_count()))]
pub fn prim_mst<V: Vertex>(graph: &WeightedGraph<V>, start: &V) -> Result<MinimumSpanningTree<V>> {
    if !graph.contains(start) {
        bail_unknown_vertex!(start);
    }

    let started = Instant::now();
    let mut visited: HashSet<&V> = HashSet::new();
    let mut pool: BinaryHeap<Reverse<HeapEntry<(&V, &V)>>> = BinaryHeap::new();
    let mut seq = 0u64;
    let mut edges = Vec::new();
    let mut total_weight = 0.0;

    let mut frontier = Some(start);
    while let Some(vertex) = frontier.take() {
        visited.insert(vertex);
        for (neighbor, weight) in graph.neighbors(vertex)? {
            check_weight(vertex, neighbor, *weight)?;
            if !visited.contains(neighbor) {
                pool.push(Reverse(HeapEntry {
                    key: *weight,
                    seq,
                    item: (vertex, neighbor),
                }));
                seq += 1;
            }
        }

        while let Some(Reverse(HeapEntry { key, item: (from, to), .. })) = pool.pop() {
            if visited.contains(to) {
                continue;
            }
            edges.push(WeightedEdge::new(from.clone(), to.clone(), key));
            total_weight += key;
            frontier = Some(to);
            break;
        }
    }

    crate::trace_time!(started, "prim", accepted = edges.len());
    tracing::debug!(total_weight, edges = edges.len(), "prim complete");

    let tree = MinimumSpanningTree {
        edges,
        total_weight,
        vertices_spanned: visited.len(),
        vertex_count: graph.vertex_count(),
    };
    if !tree.is_spanning() {
        tracing::warn!(
            spanned = tree.vertices_spanned,
            vertices = tree.vertex_count,
            "graph is disconnected: tree covers only the start's component"
        );
    }
    Ok(tree)
}

/// Kruskal's algorithm over an edge list.
///
/// Edges are stably sorted by weight, so equal weights keep their input
/// order, and accepted in that order whenever they join two different trees.
/// Stops once `|V| - 1` edges are accepted. A disconnected input yields a
/// spanning forest, reported through [`MinimumSpanningTree::is_spanning`].
#[tracing::instrument(skip_all, fields(vertices = vertices.len(), edges = edges.len()))]
pub fn kruskal_mst<V: Vertex>(
    vertices: &[V],
    edges: &[WeightedEdge<V>],
) -> Result<MinimumSpanningTree<V>> {
    let index = index_vertices(vertices);
    let n = index.len();
    let arcs = resolve_edges(&index, edges)?;

    let started = Instant::now();
    let mut order: Vec<usize> = (0..arcs.len()).collect();
    order.sort_by(|&a, &b| arcs[a].2.total_cmp(&arcs[b].2));

    let mut forest: UnionFind<usize> = (0..n).collect();
    let mut accepted = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0.0;

    for position in order {
        if accepted.len() + 1 >= n {
            break;
        }
        let (u, v, weight) = arcs[position];
        if forest.union(u, v) {
            accepted.push(edges[position].clone());
            total_weight += weight;
        }
    }

    crate::trace_time!(started, "kruskal", accepted = accepted.len());
    tracing::debug!(total_weight, edges = accepted.len(), "kruskal complete");

    let vertices_spanned = forest.sets().iter().map(Vec::len).max().unwrap_or(0);
    let tree = MinimumSpanningTree {
        edges: accepted,
        total_weight,
        vertices_spanned,
        vertex_count: n,
    };
    if !tree.is_spanning() {
        tracing::debug!(trees = forest.set_count(), "spanning forest");
    }
    Ok(tree)
}
