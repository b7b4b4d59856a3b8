//! Topological Sort Algorithms.
//!
//! Two variants that may return different valid orders for the same DAG:
//! - [`topo_sort_kahn`] repeatedly removes in-degree-zero vertices.
//! - [`topo_sort_dfs`] reverses depth-first finish order.
//!
//! Both return [`GraphError::CycleDetected`] rather than a partial order when
//! the graph has a cycle.

use crate::error::{GraphError, Result};
use crate::graph::algos::shared::postorder;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;
use std::collections::{HashMap, VecDeque};

/// Kahn's algorithm.
///
/// The initial queue holds in-degree-zero vertices in registration order and
/// is processed FIFO.
#[tracing::instrument(skip_all, fields(vertices = graph.vertices().len()))]
pub fn topo_sort_kahn<V, G>(graph: &G) -> Result<Vec<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let vertices = graph.vertices();

    // 1. Compute in-degrees
    let mut in_degree: HashMap<&V, usize> = vertices.iter().map(|v| (v, 0)).collect();
    for vertex in vertices {
        for neighbor in graph.successors(vertex)? {
            *in_degree.entry(neighbor).or_insert(0) += 1;
        }
    }

    // 2. Initialize queue with vertices having in-degree 0
    let mut queue: VecDeque<&V> = vertices
        .iter()
        .filter(|v| in_degree.get(v).copied() == Some(0))
        .collect();

    // 3. Process
    let mut sorted = Vec::with_capacity(vertices.len());
    while let Some(current) = queue.pop_front() {
        sorted.push(current.clone());

        for neighbor in graph.successors(current)? {
            if let Some(degree) = in_degree.get_mut(neighbor) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    // 4. Check for cycles
    if sorted.len() < vertices.len() {
        let unordered = vertices.len() - sorted.len();
        tracing::debug!(unordered, "cycle prevents topological order");
        return Err(GraphError::CycleDetected { unordered });
    }

    Ok(sorted)
}

/// Depth-first topological sort.
///
/// A vertex is emitted after everything reachable from it, and the finish
/// order is reversed. Reaching a vertex that is still on the active path
/// means the graph has a cycle.
#[tracing::instrument(skip_all, fields(vertices = graph.vertices().len()))]
pub fn topo_sort_dfs<V, G>(graph: &G) -> Result<Vec<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let walk = postorder(graph, true)?;

    if let Some(cycle) = walk.cycle {
        tracing::debug!(cycle = ?cycle, "cycle prevents topological order");
        return Err(GraphError::CycleDetected {
            unordered: graph.vertices().len() - walk.finished.len(),
        });
    }

    Ok(walk.finished.into_iter().rev().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::graph::store::Graph;

    fn diamond() -> Graph<&'static str> {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B");
        graph.add_edge("A", "C");
        graph.add_edge("B", "D");
        graph.add_edge("C", "D");
        graph
    }

    fn assert_respects_edges(graph: &Graph<&'static str>, order: &[&'static str]) {
        let position = |v: &&str| order.iter().position(|x| x == v).unwrap();
        for (from, to) in graph.edges() {
            assert!(position(from) < position(to), "{from} must precede {to}");
        }
    }

    #[test]
    fn test_kahn_diamond() {
        let graph = diamond();
        let order = topo_sort_kahn(&graph).unwrap();
        assert_eq!(order, vec!["A", "B", "C", "D"]);
        assert_respects_edges(&graph, &order);
    }

    #[test]
    fn test_dfs_diamond() {
        let graph = diamond();
        let order = topo_sort_dfs(&graph).unwrap();
        assert_eq!(order, vec!["A", "C", "B", "D"]);
        assert_respects_edges(&graph, &order);
    }

    #[test]
    fn test_kahn_seeds_in_registration_order() {
        let mut graph = Graph::directed();
        graph.add_vertex("X");
        graph.add_vertex("Y");
        graph.add_edge("Y", "Z");
        graph.add_edge("X", "Z");
        assert_eq!(topo_sort_kahn(&graph).unwrap(), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_cycle_fails_both_variants() {
        let mut graph = diamond();
        graph.add_edge("D", "B");

        let err = topo_sort_kahn(&graph).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CycleDetected);
        assert!(matches!(err, GraphError::CycleDetected { unordered: 2 }));

        let err = topo_sort_dfs(&graph).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CycleDetected);
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 1);
        assert!(topo_sort_kahn(&graph).is_err());
        assert!(topo_sort_dfs(&graph).is_err());
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u8> = Graph::directed();
        assert!(topo_sort_kahn(&graph).unwrap().is_empty());
        assert!(topo_sort_dfs(&graph).unwrap().is_empty());
    }

    #[test]
    fn test_isolated_vertices_included() {
        let mut graph = diamond();
        graph.add_vertex("E");
        assert_eq!(topo_sort_kahn(&graph).unwrap().len(), 5);
        assert_eq!(topo_sort_dfs(&graph).unwrap().len(), 5);
    }
}
