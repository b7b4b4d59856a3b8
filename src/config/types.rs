//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default cap on vertices for dense |V|x|V| algorithms
pub const DEFAULT_MAX_MATRIX_VERTICES: usize = 4096;

/// Default recursion depth for the recursive DFS variant
pub const DEFAULT_RECURSION_LIMIT: usize = 1_000;

/// Resource limits applied by the `*_with` algorithm variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgoConfig {
    /// Largest vertex count Floyd-Warshall will allocate a matrix for
    #[serde(default = "default_max_matrix_vertices")]
    pub max_matrix_vertices: usize,

    /// Deepest recursion the recursive DFS will descend to
    #[serde(default = "default_recursion_limit")]
    pub recursion_limit: usize,

    /// Traversal limits
    #[serde(default)]
    pub traversal: TraversalConfig,
}

/// Limits for the `bfs_with` and `dfs_with` walks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Stop after emitting this many vertices (None = unbounded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_visits: Option<usize>,
}

impl Default for AlgoConfig {
    fn default() -> Self {
        Self {
            max_matrix_vertices: default_max_matrix_vertices(),
            recursion_limit: default_recursion_limit(),
            traversal: TraversalConfig::default(),
        }
    }
}

fn default_max_matrix_vertices() -> usize {
    DEFAULT_MAX_MATRIX_VERTICES
}

fn default_recursion_limit() -> usize {
    DEFAULT_RECURSION_LIMIT
}
