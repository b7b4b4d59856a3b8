//! Depth-first traversal
//!
//! The default walks use an explicit stack so graph depth never translates
//! into call-stack depth. A vertex is marked visited when popped, and popped
//! vertices that were already visited are skipped. Neighbors are pushed in
//! reverse so the first neighbor in adjacency order is explored first.

use crate::bail_unknown_vertex;
use crate::config::AlgoConfig;
use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;
use std::collections::HashSet;

/// Iterative walk from `start`, appending newly visited vertices to `order`
/// until it holds `max_visits` vertices.
///
/// Returns false if the walk stopped at `max_visits` with work left.
pub(crate) fn walk_from<'g, V, G>(
    graph: &'g G,
    start: &'g V,
    visited: &mut HashSet<&'g V>,
    order: &mut Vec<V>,
    max_visits: usize,
) -> Result<bool>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let mut stack: Vec<&V> = vec![start];

    while let Some(current) = stack.pop() {
        if visited.contains(current) {
            continue;
        }
        if order.len() >= max_visits {
            return Ok(false);
        }
        visited.insert(current);
        order.push(current.clone());

        for neighbor in graph.successors(current)?.into_iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(true)
}

/// Depth-first visit order of every vertex reachable from `start`
#[tracing::instrument(skip_all, fields(start = ?start))]
pub fn dfs<V, G>(graph: &G, start: &V) -> Result<Vec<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    dfs_with(graph, start, &AlgoConfig::default())
}

/// [`dfs`] honoring `config.traversal.max_visits`
#[tracing::instrument(skip_all, fields(start = ?start, max_visits = ?config.traversal.max_visits))]
pub fn dfs_with<V, G>(graph: &G, start: &V, config: &AlgoConfig) -> Result<Vec<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let Some(start) = graph.resolve(start) else {
        bail_unknown_vertex!(start);
    };

    let max_visits = config.traversal.max_visits.unwrap_or(usize::MAX);
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    if !walk_from(graph, start, &mut visited, &mut order, max_visits)? {
        tracing::warn!(max_visits, "dfs truncated at max_visits");
    }

    tracing::debug!(visited = order.len(), "dfs complete");
    Ok(order)
}

/// Depth-first order over the whole graph.
///
/// Starts a fresh walk from each unvisited vertex in registration order and
/// concatenates the results, so every vertex appears exactly once.
#[tracing::instrument(skip_all)]
pub fn dfs_all<V, G>(graph: &G) -> Result<Vec<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let mut visited = HashSet::new();
    let mut order = Vec::with_capacity(graph.vertices().len());
    let mut walks = 0usize;

    for vertex in graph.vertices() {
        if !visited.contains(vertex) {
            walks += 1;
            walk_from(graph, vertex, &mut visited, &mut order, usize::MAX)?;
        }
    }

    tracing::debug!(visited = order.len(), walks, "dfs_all complete");
    Ok(order)
}

/// Recursive depth-first walk for graphs of known, bounded depth.
///
/// Produces the same order as [`dfs`]. Fails with
/// [`GraphError::RecursionLimit`] instead of exhausting the call stack when
/// the walk descends deeper than `config.recursion_limit`.
#[tracing::instrument(skip_all, fields(start = ?start, limit = config.recursion_limit))]
pub fn dfs_recursive<V, G>(graph: &G, start: &V, config: &AlgoConfig) -> Result<Vec<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let Some(start) = graph.resolve(start) else {
        bail_unknown_vertex!(start);
    };

    let mut descent = Descent {
        limit: config.recursion_limit,
        visited: HashSet::new(),
        order: Vec::new(),
        failure: None,
    };
    descend(graph, start, 1, &mut descent);

    match descent.failure {
        Some(err) => Err(err),
        None => Ok(descent.order),
    }
}

/// State shared by every level of [`descend`], held outside the recursive
/// frames
struct Descent<'g, V> {
    limit: usize,
    visited: HashSet<&'g V>,
    order: Vec<V>,
    failure: Option<GraphError>,
}

/// Returns false once `descent.failure` is set
fn descend<'g, V, G>(
    graph: &'g G,
    current: &'g V,
    depth: usize,
    descent: &mut Descent<'g, V>,
) -> bool
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    if depth > descent.limit {
        descent.failure = Some(GraphError::RecursionLimit {
            limit: descent.limit,
        });
        return false;
    }

    descent.visited.insert(current);
    descent.order.push(current.clone());

    let successors = match graph.successors(current) {
        Ok(successors) => successors,
        Err(err) => {
            descent.failure = Some(err);
            return false;
        }
    };
    for neighbor in successors {
        if !descent.visited.contains(neighbor) && !descend(graph, neighbor, depth + 1, descent) {
            return false;
        }
    }
    true
}

/// First path found from `start` to `target` by depth-first search.
///
/// The path is not necessarily the shortest. Each stack entry owns its own
/// copy of the path, so abandoned branches never leak into the result.
#[tracing::instrument(skip_all, fields(start = ?start, target = ?target))]
pub fn find_path<V, G>(graph: &G, start: &V, target: &V) -> Result<Option<Vec<V>>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    if !graph.contains(start) {
        bail_unknown_vertex!(start);
    }
    if !graph.contains(target) {
        bail_unknown_vertex!(target);
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut stack: Vec<(V, Vec<V>)> = vec![(start.clone(), vec![start.clone()])];

    while let Some((current, path)) = stack.pop() {
        if &current == target {
            return Ok(Some(path));
        }
        if !visited.insert(current.clone()) {
            continue;
        }

        for neighbor in graph.successors(&current)?.into_iter().rev() {
            if !visited.contains(neighbor) {
                let mut branch = path.clone();
                branch.push(neighbor.clone());
                stack.push((neighbor.clone(), branch));
            }
        }
    }

    Ok(None)
}
