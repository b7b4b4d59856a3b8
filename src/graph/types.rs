use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Bound satisfied by every vertex identifier.
///
/// Vertices are opaque to the library: they are only cloned, hashed,
/// compared and formatted for error messages.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// A weighted edge in triple form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedEdge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> WeightedEdge<V> {
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

impl<V> From<(V, V, f64)> for WeightedEdge<V> {
    fn from((from, to, weight): (V, V, f64)) -> Self {
        Self { from, to, weight }
    }
}

/// Best known distance to a vertex and the vertex it was reached from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceRecord<V> {
    pub distance: f64,
    pub predecessor: Option<V>,
}

impl<V> DistanceRecord<V> {
    pub(crate) fn unreached() -> Self {
        Self {
            distance: f64::INFINITY,
            predecessor: None,
        }
    }

    pub(crate) fn origin() -> Self {
        Self {
            distance: 0.0,
            predecessor: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Single-source shortest path result (Dijkstra, Bellman-Ford)
///
/// Holds one record per registered vertex. Unreachable vertices keep an
/// infinite distance and no predecessor.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths<V: Vertex> {
    pub start: V,
    pub records: HashMap<V, DistanceRecord<V>>,
}

impl<V: Vertex> ShortestPaths<V> {
    pub fn record(&self, vertex: &V) -> Option<&DistanceRecord<V>> {
        self.records.get(vertex)
    }

    /// Distance to `vertex`, or `None` if it is unknown or unreachable
    pub fn distance(&self, vertex: &V) -> Option<f64> {
        self.records
            .get(vertex)
            .filter(|record| record.is_reachable())
            .map(|record| record.distance)
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    /// Distances of all reachable vertices
    pub fn distances(&self) -> HashMap<V, f64> {
        self.records
            .iter()
            .filter(|(_, record)| record.is_reachable())
            .map(|(vertex, record)| (vertex.clone(), record.distance))
            .collect()
    }

    /// Path from the start to `target` following predecessor links
    pub fn path_to(&self, target: &V) -> Vec<V> {
        super::algos::reconstruct_path(&self.records, target)
    }
}

/// All-pairs shortest path result (Floyd-Warshall)
#[derive(Debug, Clone, Serialize)]
pub struct DistanceMatrix<V: Vertex> {
    pub(crate) vertices: Vec<V>,
    #[serde(skip)]
    pub(crate) index: HashMap<V, usize>,
    pub(crate) dist: Vec<Vec<f64>>,
    #[serde(skip)]
    pub(crate) next: Vec<Vec<Option<usize>>>,
}

impl<V: Vertex> DistanceMatrix<V> {
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Shortest distance from `from` to `to`; infinite when unreachable,
    /// `None` when either vertex is unknown
    pub fn distance(&self, from: &V, to: &V) -> Option<f64> {
        let i = *self.index.get(from)?;
        let j = *self.index.get(to)?;
        Some(self.dist[i][j])
    }

    /// Whether some vertex can reach itself with negative total weight.
    ///
    /// When this is true the other distances are not meaningful.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.vertices.len()).any(|i| self.dist[i][i] < 0.0)
    }

    /// Vertices lying on a negative cycle, in registration order
    pub fn negative_cycle_vertices(&self) -> Vec<V> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(i, _)| self.dist[*i][*i] < 0.0)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Vertex sequence of a shortest path, or `None` if unreachable.
    ///
    /// Returns `None` as well when the matrix has a negative cycle, since
    /// such paths are unbounded.
    pub fn path(&self, from: &V, to: &V) -> Option<Vec<V>> {
        let mut i = *self.index.get(from)?;
        let j = *self.index.get(to)?;
        if self.has_negative_cycle() || !self.dist[i][j].is_finite() {
            return None;
        }

        let mut path = vec![self.vertices[i].clone()];
        while i != j {
            i = self.next[i][j]?;
            path.push(self.vertices[i].clone());
        }
        Some(path)
    }

    /// Nested mapping view: source -> target -> distance
    pub fn to_nested_map(&self) -> HashMap<V, HashMap<V, f64>> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, from)| {
                let row = self
                    .vertices
                    .iter()
                    .enumerate()
                    .map(|(j, to)| (to.clone(), self.dist[i][j]))
                    .collect();
                (from.clone(), row)
            })
            .collect()
    }
}

/// Edges accepted by an MST builder
#[derive(Debug, Clone, Serialize)]
pub struct MinimumSpanningTree<V> {
    /// Accepted edges in acceptance order
    pub edges: Vec<WeightedEdge<V>>,
    pub total_weight: f64,
    /// Vertices in the largest tree of the result (Prim: the start's tree)
    pub vertices_spanned: usize,
    /// Vertices in the input
    pub vertex_count: usize,
}

impl<V> MinimumSpanningTree<V> {
    /// Whether the result spans every input vertex.
    ///
    /// A disconnected input yields a tree over the start's component (Prim)
    /// or a spanning forest (Kruskal); both report `false` here.
    pub fn is_spanning(&self) -> bool {
        self.vertices_spanned == self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_edge_from_tuple() {
        let edge: WeightedEdge<&str> = ("A", "B", 2.5).into();
        assert_eq!(edge, WeightedEdge::new("A", "B", 2.5));
    }

    #[test]
    fn test_shortest_paths_hides_unreachable() {
        let mut records = HashMap::new();
        records.insert("A", DistanceRecord::origin());
        records.insert("B", DistanceRecord::unreached());
        let paths = ShortestPaths {
            start: "A",
            records,
        };

        assert_eq!(paths.distance(&"A"), Some(0.0));
        assert_eq!(paths.distance(&"B"), None);
        assert_eq!(paths.distance(&"C"), None);
        assert!(paths.record(&"B").is_some());
        assert_eq!(paths.distances().len(), 1);
    }

    #[test]
    fn test_mst_spanning_flag() {
        let tree: MinimumSpanningTree<u32> = MinimumSpanningTree {
            edges: Vec::new(),
            total_weight: 0.0,
            vertices_spanned: 1,
            vertex_count: 2,
        };
        assert!(!tree.is_spanning());
    }
}
