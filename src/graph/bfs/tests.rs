use crate::config::{AlgoConfig, TraversalConfig};
use crate::graph::bfs::*;
use crate::graph::store::{Graph, WeightedGraph};

/// Undirected A-B, A-C, B-D, C-E, D-E
fn pentagon() -> Graph<&'static str> {
    let mut graph = Graph::undirected();
    graph.add_edge("A", "B");
    graph.add_edge("A", "C");
    graph.add_edge("B", "D");
    graph.add_edge("C", "E");
    graph.add_edge("D", "E");
    graph
}

#[test]
fn test_bfs_visit_order() {
    let graph = pentagon();
    assert_eq!(bfs(&graph, &"A").unwrap(), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_bfs_levels_partition_by_hops() {
    let graph = pentagon();
    let levels = bfs_levels(&graph, &"A").unwrap();
    assert_eq!(levels, vec![vec!["A"], vec!["B", "C"], vec!["D", "E"]]);
}

#[test]
fn test_bfs_skips_unreachable() {
    let mut graph = Graph::directed();
    graph.add_edge(1, 2);
    graph.add_edge(3, 1);
    assert_eq!(bfs(&graph, &1).unwrap(), vec![1, 2]);
}

#[test]
fn test_bfs_unknown_start_errors() {
    let graph = pentagon();
    assert!(bfs(&graph, &"Z").is_err());
    assert!(bfs_levels(&graph, &"Z").is_err());
}

#[test]
fn test_bfs_with_max_visits() {
    let graph = pentagon();
    let config = AlgoConfig {
        traversal: TraversalConfig {
            max_visits: Some(2),
        },
        ..Default::default()
    };
    assert_eq!(bfs_with(&graph, &"A", &config).unwrap(), vec!["A", "B"]);
}

/// Test that the shortest path picks the fewest hops over the first found
#[test]
fn test_bfs_shortest_path_minimal_hops() {
    let mut graph = Graph::directed();
    graph.add_edge("S", "A");
    graph.add_edge("A", "B");
    graph.add_edge("B", "T");
    graph.add_edge("S", "T");

    let path = bfs_shortest_path(&graph, &"S", &"T").unwrap();
    assert_eq!(path, Some(vec!["S", "T"]));
}

#[test]
fn test_bfs_shortest_path_to_self() {
    let graph = pentagon();
    assert_eq!(
        bfs_shortest_path(&graph, &"C", &"C").unwrap(),
        Some(vec!["C"])
    );
}

#[test]
fn test_bfs_shortest_path_unreachable() {
    let mut graph = Graph::directed();
    graph.add_edge("A", "B");
    graph.add_vertex("C");
    assert_eq!(bfs_shortest_path(&graph, &"A", &"C").unwrap(), None);
    // Direction matters
    assert_eq!(bfs_shortest_path(&graph, &"B", &"A").unwrap(), None);
}

#[test]
fn test_bfs_shortest_path_unknown_target_errors() {
    let graph = pentagon();
    assert!(bfs_shortest_path(&graph, &"A", &"Q").is_err());
}

#[test]
fn test_bfs_runs_on_weighted_graph() {
    let graph = WeightedGraph::from_edges(true, [("A", "B", 9.0), ("A", "C", 1.0)]);
    assert_eq!(bfs(&graph, &"A").unwrap(), vec!["A", "B", "C"]);
    assert_eq!(
        bfs_levels(&graph, &"A").unwrap(),
        vec![vec!["A"], vec!["B", "C"]]
    );
}

#[test]
fn test_bfs_levels_with_cycle() {
    let mut graph = Graph::directed();
    graph.add_edge(0, 1);
    graph.add_edge(1, 2);
    graph.add_edge(2, 0);
    graph.add_edge(0, 2);
    let levels = bfs_levels(&graph, &0).unwrap();
    assert_eq!(levels, vec![vec![0], vec![1, 2]]);
}
