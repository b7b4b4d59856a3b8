//! Graph store and algorithms
//!
//! Provides the in-memory graph substrate and the algorithms that read it:
//! - BFS/DFS traversal, level partitioning and path finding
//! - Shortest paths (Dijkstra, Bellman-Ford, Floyd-Warshall)
//! - Topological ordering and cycle detection
//! - Connected and strongly connected components
//! - Minimum spanning trees (Prim, Kruskal) and a standalone union-find

pub mod algos;
pub mod bfs;
pub mod dfs;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{
    bellman_ford, connected_components, dijkstra, find_directed_cycle, floyd_warshall,
    floyd_warshall_with, has_cycle_directed, has_cycle_undirected, kruskal_mst, prim_mst,
    reconstruct_path, strongly_connected_components, topo_sort_dfs, topo_sort_kahn, UnionFind,
};
pub use bfs::{bfs, bfs_levels, bfs_shortest_path, bfs_with};
pub use dfs::{dfs, dfs_all, dfs_recursive, dfs_with, find_path};
pub use store::{Graph, WeightedGraph};
pub use traversal::GraphProvider;
pub use types::{
    DistanceMatrix, DistanceRecord, MinimumSpanningTree, ShortestPaths, Vertex, WeightedEdge,
};
