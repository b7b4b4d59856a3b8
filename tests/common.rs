use graphwalk::{Graph, WeightedGraph};

/// Directed or undirected graph over `0..n` with the given edges
#[allow(dead_code)]
pub fn graph_from(directed: bool, n: u32, edges: &[(u32, u32)]) -> Graph<u32> {
    let mut graph = Graph::new(directed);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for &(from, to) in edges {
        graph.add_edge(from, to);
    }
    graph
}

/// Weighted graph over `0..n` with the given edges
#[allow(dead_code)]
pub fn weighted_from(directed: bool, n: u32, edges: &[(u32, u32, f64)]) -> WeightedGraph<u32> {
    let mut graph = WeightedGraph::new(directed);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight);
    }
    graph
}

/// Pentagon used by the traversal scenarios: A-B, A-C, B-D, C-E, D-E
#[allow(dead_code)]
pub fn pentagon() -> Graph<&'static str> {
    let mut graph = Graph::undirected();
    for (from, to) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "E"), ("D", "E")] {
        graph.add_edge(from, to);
    }
    graph
}
