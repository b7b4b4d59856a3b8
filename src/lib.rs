//! Graphwalk
//!
//! Exact graph algorithms over in-memory directed and undirected graphs:
//! traversal, shortest paths, topological ordering, cycle detection,
//! connected components and minimum spanning trees.
//!
//! Every algorithm is a synchronous function that borrows the graph and
//! returns an owned result. Callers must not mutate a graph while an
//! algorithm holds a borrow of it; shared read-only use across threads is
//! fine when the vertex type is `Sync`.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

pub use config::{AlgoConfig, TraversalConfig};
pub use error::{ErrorKind, GraphError, Result};
pub use graph::{
    bellman_ford, bfs, bfs_levels, bfs_shortest_path, bfs_with, connected_components, dfs,
    dfs_all, dfs_recursive, dfs_with, dijkstra, find_directed_cycle, find_path, floyd_warshall,
    floyd_warshall_with, has_cycle_directed, has_cycle_undirected, kruskal_mst, prim_mst,
    reconstruct_path, strongly_connected_components, topo_sort_dfs, topo_sort_kahn,
    DistanceMatrix, DistanceRecord, Graph, GraphProvider, MinimumSpanningTree, ShortestPaths,
    UnionFind, Vertex, WeightedEdge, WeightedGraph,
};
