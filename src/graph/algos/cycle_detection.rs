//! Cycle Detection Algorithms.
//!
//! Undirected detection tracks each vertex's DFS parent; directed detection
//! tracks the active DFS path. Both walk with explicit stacks.

use crate::error::Result;
use crate::graph::algos::shared::postorder;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;
use std::collections::HashSet;

/// Whether an undirected graph contains a cycle.
///
/// An edge to an already-visited vertex other than the current vertex's
/// parent closes a cycle. Self-loops count; parallel edges between the same
/// two vertices do not.
#[tracing::instrument(skip_all, fields(vertices = graph.vertices().len()))]
pub fn has_cycle_undirected<V, G>(graph: &G) -> Result<bool>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let mut visited: HashSet<&V> = HashSet::new();

    for root in graph.vertices() {
        if !visited.insert(root) {
            continue;
        }

        // (vertex, parent, successors, next index)
        let mut stack: Vec<(&V, Option<&V>, Vec<&V>, usize)> =
            vec![(root, None, graph.successors(root)?, 0)];

        while let Some(frame) = stack.last_mut() {
            if frame.3 >= frame.2.len() {
                stack.pop();
                continue;
            }

            let current = frame.0;
            let parent = frame.1;
            let next = frame.2[frame.3];
            frame.3 += 1;

            if parent == Some(next) {
                continue;
            }
            if !visited.insert(next) {
                tracing::debug!(at = ?next, "undirected cycle found");
                return Ok(true);
            }
            stack.push((next, Some(current), graph.successors(next)?, 0));
        }
    }

    Ok(false)
}

/// First directed cycle found, as a closed vertex sequence (first == last).
///
/// An edge onto a vertex still on the active DFS path closes a cycle; an edge
/// to a vertex whose exploration already finished does not.
#[tracing::instrument(skip_all, fields(vertices = graph.vertices().len()))]
pub fn find_directed_cycle<V, G>(graph: &G) -> Result<Option<Vec<V>>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let walk = postorder(graph, true)?;
    Ok(walk
        .cycle
        .map(|cycle| cycle.into_iter().cloned().collect()))
}

/// Whether a directed graph contains a cycle
pub fn has_cycle_directed<V, G>(graph: &G) -> Result<bool>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    Ok(find_directed_cycle(graph)?.is_some())
}
