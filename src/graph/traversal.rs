use crate::error::Result;
use crate::graph::store::{Graph, WeightedGraph};
use crate::graph::types::Vertex;

/// Trait for providing graph adjacency to traversal algorithms
pub trait GraphProvider<V: Vertex> {
    /// All vertices in registration order
    fn vertices(&self) -> &[V];

    /// Outgoing neighbors of `vertex` in adjacency order
    fn successors(&self, vertex: &V) -> Result<Vec<&V>>;

    /// The graph's own reference to `vertex`, found in O(1)
    fn resolve(&self, vertex: &V) -> Option<&V>;

    fn contains(&self, vertex: &V) -> bool {
        self.resolve(vertex).is_some()
    }

    fn is_directed(&self) -> bool;
}

impl<V: Vertex> GraphProvider<V> for Graph<V> {
    fn vertices(&self) -> &[V] {
        Graph::vertices(self)
    }

    fn successors(&self, vertex: &V) -> Result<Vec<&V>> {
        Ok(self.neighbors(vertex)?.iter().collect())
    }

    fn resolve(&self, vertex: &V) -> Option<&V> {
        Graph::resolve(self, vertex)
    }

    fn is_directed(&self) -> bool {
        Graph::is_directed(self)
    }
}

impl<V: Vertex> GraphProvider<V> for WeightedGraph<V> {
    fn vertices(&self) -> &[V] {
        WeightedGraph::vertices(self)
    }

    fn successors(&self, vertex: &V) -> Result<Vec<&V>> {
        Ok(self.neighbors(vertex)?.iter().map(|(to, _)| to).collect())
    }

    fn resolve(&self, vertex: &V) -> Option<&V> {
        WeightedGraph::resolve(self, vertex)
    }

    fn is_directed(&self) -> bool {
        WeightedGraph::is_directed(self)
    }
}
