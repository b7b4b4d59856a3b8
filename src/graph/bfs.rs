//! Breadth-first traversal
//!
//! Vertices are marked visited when enqueued, so each reachable vertex is
//! emitted once, in non-decreasing hop distance from the start. Neighbors
//! are enqueued in adjacency order.

use crate::bail_unknown_vertex;
use crate::config::AlgoConfig;
use crate::error::Result;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;
use std::collections::{HashMap, HashSet, VecDeque};

fn ensure_vertex<V: Vertex, G: GraphProvider<V> + ?Sized>(graph: &G, vertex: &V) -> Result<()> {
    if !graph.contains(vertex) {
        bail_unknown_vertex!(vertex);
    }
    Ok(())
}

/// Visit order of every vertex reachable from `start`
#[tracing::instrument(skip_all, fields(start = ?start))]
pub fn bfs<V, G>(graph: &G, start: &V) -> Result<Vec<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    bfs_with(graph, start, &AlgoConfig::default())
}

/// [`bfs`] honoring `config.traversal.max_visits`
#[tracing::instrument(skip_all, fields(start = ?start, max_visits = ?config.traversal.max_visits))]
pub fn bfs_with<V, G>(graph: &G, start: &V, config: &AlgoConfig) -> Result<Vec<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    ensure_vertex(graph, start)?;

    let max_visits = config.traversal.max_visits.unwrap_or(usize::MAX);
    let mut order = Vec::new();
    let mut visited: HashSet<&V> = HashSet::new();
    let mut queue: VecDeque<&V> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if order.len() >= max_visits {
            tracing::warn!(max_visits, "bfs truncated at max_visits");
            break;
        }
        order.push(current.clone());

        for neighbor in graph.successors(current)? {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs complete");
    Ok(order)
}

/// Fewest-hop path from `start` to `target`, or `None` if unreachable
#[tracing::instrument(skip_all, fields(start = ?start, target = ?target))]
pub fn bfs_shortest_path<V, G>(graph: &G, start: &V, target: &V) -> Result<Option<Vec<V>>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    ensure_vertex(graph, start)?;
    ensure_vertex(graph, target)?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut predecessors: HashMap<V, V> = HashMap::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        if &current == target {
            return Ok(Some(trace_back(&predecessors, start, target)));
        }

        for neighbor in graph.successors(&current)? {
            if visited.insert(neighbor.clone()) {
                predecessors.insert(neighbor.clone(), current.clone());
                queue.push_back(neighbor.clone());
            }
        }
    }

    tracing::debug!("target unreachable");
    Ok(None)
}

fn trace_back<V: Vertex>(predecessors: &HashMap<V, V>, start: &V, target: &V) -> Vec<V> {
    let mut path = vec![target.clone()];
    let mut current = target;
    while current != start {
        match predecessors.get(current) {
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

/// Vertices grouped by hop distance from `start`; level 0 is `[start]`
#[tracing::instrument(skip_all, fields(start = ?start))]
pub fn bfs_levels<V, G>(graph: &G, start: &V) -> Result<Vec<Vec<V>>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    ensure_vertex(graph, start)?;

    let mut levels: Vec<Vec<V>> = Vec::new();
    let mut visited: HashSet<V> = HashSet::new();
    let mut queue: VecDeque<(V, usize)> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back((start.clone(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        // FIFO order means depth never decreases, so a new level is always
        // exactly one past the last
        if levels.len() == depth {
            levels.push(Vec::new());
        }

        for neighbor in graph.successors(&current)? {
            if visited.insert(neighbor.clone()) {
                queue.push_back((neighbor.clone(), depth + 1));
            }
        }
        levels[depth].push(current);
    }

    tracing::debug!(levels = levels.len(), "bfs levels complete");
    Ok(levels)
}

#[cfg(test)]
mod tests;
