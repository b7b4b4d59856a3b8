//! Connected and strongly connected components.
//!
//! Both collect components with the iterative DFS walker, so every vertex
//! lands in exactly one component and component members appear in DFS visit
//! order.

use crate::error::Result;
use crate::graph::algos::shared::postorder;
use crate::graph::dfs::walk_from;
use crate::graph::store::Graph;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;
use std::collections::HashSet;
use std::time::Instant;

/// Connected components, one DFS per unvisited vertex in registration order.
///
/// On a directed graph edge direction is ignored, which yields the weakly
/// connected components.
#[tracing::instrument(skip_all, fields(vertices = graph.vertex_count(), directed = graph.is_directed()))]
pub fn connected_components<V: Vertex>(graph: &Graph<V>) -> Result<Vec<Vec<V>>> {
    let components = if graph.is_directed() {
        let closure = symmetric_closure(graph);
        collect_components(&closure, closure.vertices())?
    } else {
        collect_components(graph, graph.vertices())?
    };

    tracing::debug!(count = components.len(), "connected components");
    Ok(components)
}

/// Strongly connected components (Kosaraju).
///
/// A full DFS records finish order; vertices are then taken in reverse finish
/// order and each unvisited one seeds a DFS over the transposed graph that
/// collects exactly one component. The transpose is a private copy.
#[tracing::instrument(skip_all, fields(vertices = graph.vertex_count()))]
pub fn strongly_connected_components<V: Vertex>(graph: &Graph<V>) -> Result<Vec<Vec<V>>> {
    let started = Instant::now();

    // Phase 1: finish order on the input graph
    let walk = postorder(graph, false)?;

    // Phase 2: collect components on the transpose
    let transposed = graph.transpose();
    let components = collect_components(&transposed, walk.finished.into_iter().rev())?;

    crate::trace_time!(started, "kosaraju", components = components.len());
    Ok(components)
}

/// One DFS per root not yet reached, each producing one component
fn collect_components<'g, V, G, I>(graph: &'g G, roots: I) -> Result<Vec<Vec<V>>>
where
    V: Vertex + 'g,
    G: GraphProvider<V> + ?Sized,
    I: IntoIterator<Item = &'g V>,
{
    let mut visited: HashSet<&V> = HashSet::new();
    let mut components = Vec::new();

    for root in roots {
        if visited.contains(root) {
            continue;
        }
        let mut component = Vec::new();
        walk_from(graph, root, &mut visited, &mut component, usize::MAX)?;
        components.push(component);
    }

    Ok(components)
}

/// Undirected copy of a graph with the same vertex order
fn symmetric_closure<V: Vertex>(graph: &Graph<V>) -> Graph<V> {
    let mut closure = Graph::undirected();
    for vertex in graph.vertices() {
        closure.add_vertex(vertex.clone());
    }
    for (from, to) in graph.edges() {
        closure.add_edge(from.clone(), to.clone());
    }
    closure
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut components: Vec<Vec<&'static str>>) -> Vec<Vec<&'static str>> {
        for component in &mut components {
            component.sort_unstable();
        }
        components.sort();
        components
    }

    #[test]
    fn test_connected_components_undirected() {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("X", "Y");
        graph.add_vertex("Z");

        let components = connected_components(&graph).unwrap();
        assert_eq!(
            components,
            vec![vec!["A", "B", "C"], vec!["X", "Y"], vec!["Z"]]
        );
    }

    #[test]
    fn test_connected_components_directed_ignores_direction() {
        let mut graph = Graph::directed();
        graph.add_edge("B", "A");
        graph.add_edge("C", "A");
        graph.add_edge("D", "E");

        let components = connected_components(&graph).unwrap();
        assert_eq!(sorted(components), vec![vec!["A", "B", "C"], vec!["D", "E"]]);
    }

    #[test]
    fn test_connected_components_empty() {
        let graph: Graph<u8> = Graph::undirected();
        assert!(connected_components(&graph).unwrap().is_empty());
    }

    #[test]
    fn test_scc_kosaraju() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "A");
        graph.add_edge("C", "D");

        let components = strongly_connected_components(&graph).unwrap();
        assert_eq!(components, vec![vec!["A", "C", "B"], vec!["D"]]);
    }

    #[test]
    fn test_scc_two_cycles_joined_one_way() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B");
        graph.add_edge("B", "A");
        graph.add_edge("B", "C");
        graph.add_edge("C", "D");
        graph.add_edge("D", "C");
        graph.add_vertex("E");

        let components = strongly_connected_components(&graph).unwrap();
        assert_eq!(
            sorted(components),
            vec![vec!["A", "B"], vec!["C", "D"], vec!["E"]]
        );
    }

    #[test]
    fn test_scc_dag_is_all_singletons() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(1, 3);

        let components = strongly_connected_components(&graph).unwrap();
        assert_eq!(components.len(), 3);
        assert!(components.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_scc_does_not_mutate_input() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2);
        strongly_connected_components(&graph).unwrap();
        assert_eq!(graph.neighbors(&1).unwrap(), &[2]);
        assert!(graph.neighbors(&2).unwrap().is_empty());
    }
}
