//! Property-based checks over small random graphs.
//!
//! Vertices are `0..n`; edges are drawn with replacement, so parallel edges
//! and self-loops occur.

mod common;

use common::{graph_from, weighted_from};
use graphwalk::{
    bellman_ford, bfs, bfs_levels, bfs_shortest_path, connected_components, dfs, dijkstra,
    floyd_warshall, has_cycle_directed, kruskal_mst, prim_mst, strongly_connected_components,
    topo_sort_dfs, topo_sort_kahn, ErrorKind,
};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};
use std::collections::HashSet;

const GRAPH_PROP_CASES: u32 = 128;
const MAX_VERTICES: u32 = 12;

fn edges_strategy() -> impl Strategy<Value = (u32, Vec<(u32, u32)>)> {
    (1..=MAX_VERTICES).prop_flat_map(|n| (proptest::strategy::Just(n), vec((0..n, 0..n), 0..30)))
}

fn weighted_strategy() -> impl Strategy<Value = (u32, Vec<(u32, u32, f64)>)> {
    (1..=MAX_VERTICES).prop_flat_map(|n| {
        (
            proptest::strategy::Just(n),
            vec((0..n, 0..n, 0u32..20).prop_map(|(a, b, w)| (a, b, f64::from(w))), 0..30),
        )
    })
}

/// Small graphs with signed integer weights, so negative cycles are common
fn signed_strategy() -> impl Strategy<Value = (u32, Vec<(u32, u32, f64)>)> {
    (1..=6u32).prop_flat_map(|n| {
        (
            proptest::strategy::Just(n),
            vec((0..n, 0..n, -5i32..10).prop_map(|(a, b, w)| (a, b, f64::from(w))), 0..12),
        )
    })
}

/// Hop distances by repeated frontier expansion, independent of the BFS code
fn hop_distances(graph: &graphwalk::Graph<u32>, start: u32) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.vertex_count()];
    dist[start as usize] = Some(0);
    let mut hops = 0;
    loop {
        let mut changed = false;
        for v in graph.vertices() {
            if dist[*v as usize] != Some(hops) {
                continue;
            }
            for n in graph.neighbors(v).unwrap() {
                if dist[*n as usize].is_none() {
                    dist[*n as usize] = Some(hops + 1);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
        hops += 1;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(GRAPH_PROP_CASES))]

    #[test]
    fn prop_bfs_and_dfs_reach_same_set((n, edges) in edges_strategy(), directed in proptest::bool::ANY) {
        let graph = graph_from(directed, n, &edges);
        let by_bfs = bfs(&graph, &0).unwrap();
        let by_dfs = dfs(&graph, &0).unwrap();

        prop_assert_eq!(by_bfs.len(), by_dfs.len());
        let bfs_set: HashSet<_> = by_bfs.iter().collect();
        let dfs_set: HashSet<_> = by_dfs.iter().collect();
        prop_assert_eq!(bfs_set.len(), by_bfs.len());
        prop_assert_eq!(bfs_set, dfs_set);
    }

    #[test]
    fn prop_levels_match_hop_distance((n, edges) in edges_strategy()) {
        let graph = graph_from(true, n, &edges);
        let expected = hop_distances(&graph, 0);

        for (depth, level) in bfs_levels(&graph, &0).unwrap().iter().enumerate() {
            for v in level {
                prop_assert_eq!(expected[*v as usize], Some(depth));
            }
        }
        for target in 0..n {
            let path = bfs_shortest_path(&graph, &0, &target).unwrap();
            prop_assert_eq!(path.map(|p| p.len() - 1), expected[target as usize]);
        }
    }

    #[test]
    fn prop_topo_orders_respect_edges((n, edges) in edges_strategy()) {
        // Orient every edge low -> high so the graph is a DAG
        let dag: Vec<_> = edges
            .iter()
            .filter(|(a, b)| a != b)
            .map(|&(a, b)| (a.min(b), a.max(b)))
            .collect();
        let graph = graph_from(true, n, &dag);

        for order in [topo_sort_kahn(&graph).unwrap(), topo_sort_dfs(&graph).unwrap()] {
            prop_assert_eq!(order.len(), n as usize);
            let mut position = vec![0; n as usize];
            for (i, v) in order.iter().enumerate() {
                position[*v as usize] = i;
            }
            for (a, b) in &dag {
                prop_assert!(position[*a as usize] < position[*b as usize]);
            }
        }
    }

    #[test]
    fn prop_cycle_detection_agrees_with_kahn((n, edges) in edges_strategy()) {
        let graph = graph_from(true, n, &edges);
        let cyclic = has_cycle_directed(&graph).unwrap();
        prop_assert_eq!(cyclic, topo_sort_kahn(&graph).is_err());
        prop_assert_eq!(cyclic, topo_sort_dfs(&graph).is_err());
    }

    #[test]
    fn prop_dijkstra_matches_bellman_ford((n, edges) in weighted_strategy(), directed in proptest::bool::ANY) {
        let graph = weighted_from(directed, n, &edges);
        let fast = dijkstra(&graph, &0).unwrap();
        let general = bellman_ford(graph.vertices(), &graph.edge_list(), &0).unwrap();

        for v in graph.vertices() {
            prop_assert_eq!(fast.distance(v), general.distance(v));
        }
    }

    #[test]
    fn prop_prim_and_kruskal_agree_on_weight((n, edges) in weighted_strategy()) {
        // Chain all vertices with heavy edges so the graph is connected
        let mut connected = edges.clone();
        connected.extend((1..n).map(|v| (v - 1, v, 100.0)));
        let graph = weighted_from(false, n, &connected);

        let prim = prim_mst(&graph, &0).unwrap();
        let kruskal = kruskal_mst(graph.vertices(), graph.edges()).unwrap();

        prop_assert!(prim.is_spanning());
        prop_assert!(kruskal.is_spanning());
        prop_assert_eq!(prim.edges.len(), n as usize - 1);
        prop_assert_eq!(prim.total_weight, kruskal.total_weight);
    }

    #[test]
    fn prop_components_partition_vertices((n, edges) in edges_strategy(), directed in proptest::bool::ANY) {
        let graph = graph_from(directed, n, &edges);

        for components in [
            connected_components(&graph).unwrap(),
            strongly_connected_components(&graph).unwrap(),
        ] {
            let mut seen = HashSet::new();
            for component in &components {
                prop_assert!(!component.is_empty());
                for v in component {
                    prop_assert!(seen.insert(*v));
                }
            }
            prop_assert_eq!(seen.len(), n as usize);
        }
    }

    #[test]
    fn prop_bellman_ford_fails_iff_reachable_negative_cycle((n, edges) in signed_strategy()) {
        let graph = weighted_from(true, n, &edges);
        let arcs = graph.edge_list();
        let matrix = floyd_warshall(graph.vertices(), &arcs).unwrap();
        let reachable = bfs(&graph, &0).unwrap();
        let negative_cycle_reachable = reachable
            .iter()
            .any(|v| matrix.distance(v, v).is_some_and(|d| d < 0.0));

        match bellman_ford(graph.vertices(), &arcs, &0) {
            Err(err) => {
                prop_assert_eq!(err.kind(), ErrorKind::NegativeCycle);
                prop_assert!(negative_cycle_reachable);
            }
            Ok(paths) => {
                prop_assert!(!negative_cycle_reachable);
                // Row 0 of the matrix never routes through an unreachable cycle
                for v in graph.vertices() {
                    let expected = matrix.distance(&0, v).filter(|d| d.is_finite());
                    prop_assert_eq!(paths.distance(v), expected);
                }
            }
        }
    }
}
