//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dijkstra`, `bellman_ford`, `floyd_warshall`: shortest paths
//! - `path`: predecessor-chain path reconstruction
//! - `topological_sort`, `cycle_detection`: ordering and cycle analysis
//! - `components`: connected and strongly connected components
//! - `union_find`, `mst`: disjoint sets and minimum spanning trees
//! - `shared`: min-heap entries and weight validation

pub mod bellman_ford;
pub mod components;
pub mod cycle_detection;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod mst;
pub mod path;
pub mod shared;
pub mod topological_sort;
pub mod union_find;

pub use bellman_ford::bellman_ford;
pub use components::{connected_components, strongly_connected_components};
pub use cycle_detection::{find_directed_cycle, has_cycle_directed, has_cycle_undirected};
pub use dijkstra::dijkstra;
pub use floyd_warshall::{floyd_warshall, floyd_warshall_with};
pub use mst::{kruskal_mst, prim_mst};
pub use path::reconstruct_path;
pub use topological_sort::{topo_sort_dfs, topo_sort_kahn};
pub use union_find::UnionFind;
