//! In-memory graph stores
//!
//! [`Graph`] holds unweighted adjacency lists, [`WeightedGraph`] holds
//! `(neighbor, weight)` adjacency lists. Both keep vertices and neighbors in
//! insertion order; that order is the tie-break every traversal observes.

use crate::bail_unknown_vertex;
use crate::error::Result;
use crate::graph::types::{Vertex, WeightedEdge};
use std::collections::HashMap;

/// Insertion-ordered vertex registry shared by both stores
#[derive(Debug, Clone)]
struct VertexIndex<V> {
    vertices: Vec<V>,
    slots: HashMap<V, usize>,
}

impl<V: Vertex> VertexIndex<V> {
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Register `vertex` if absent and return its slot
    fn insert(&mut self, vertex: V) -> (usize, bool) {
        if let Some(&slot) = self.slots.get(&vertex) {
            return (slot, false);
        }
        let slot = self.vertices.len();
        self.slots.insert(vertex.clone(), slot);
        self.vertices.push(vertex);
        (slot, true)
    }

    fn slot(&self, vertex: &V) -> Option<usize> {
        self.slots.get(vertex).copied()
    }

    fn resolve(&self, vertex: &V) -> Option<&V> {
        self.slot(vertex).map(|slot| &self.vertices[slot])
    }
}

/// Unweighted graph store
#[derive(Debug, Clone)]
pub struct Graph<V> {
    directed: bool,
    index: VertexIndex<V>,
    adjacency: Vec<Vec<V>>,
    edges: Vec<(V, V)>,
}

impl<V: Vertex> Graph<V> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            index: VertexIndex::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Register a vertex; no-op if already present
    pub fn add_vertex(&mut self, vertex: V) {
        self.register(vertex);
    }

    fn register(&mut self, vertex: V) -> usize {
        let (slot, inserted) = self.index.insert(vertex);
        if inserted {
            self.adjacency.push(Vec::new());
        }
        slot
    }

    /// Add an edge, registering both endpoints.
    ///
    /// Undirected graphs also record the mirrored edge; a self-loop is
    /// recorded once.
    pub fn add_edge(&mut self, from: V, to: V) {
        let from_slot = self.register(from.clone());
        let to_slot = self.register(to.clone());

        self.adjacency[from_slot].push(to.clone());
        if !self.directed && from_slot != to_slot {
            self.adjacency[to_slot].push(from.clone());
        }
        self.edges.push((from, to));
    }

    /// Outgoing neighbors of `vertex` in insertion order
    pub fn neighbors(&self, vertex: &V) -> Result<&[V]> {
        match self.index.slot(vertex) {
            Some(slot) => Ok(&self.adjacency[slot]),
            None => bail_unknown_vertex!(vertex),
        }
    }

    /// All registered vertices in insertion order
    pub fn vertices(&self) -> &[V] {
        &self.index.vertices
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.slot(vertex).is_some()
    }

    /// The stored copy of `vertex`, if registered
    pub fn resolve(&self, vertex: &V) -> Option<&V> {
        self.index.resolve(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.index.vertices.len()
    }

    /// Number of `add_edge` calls (mirrored entries are not counted twice)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges as added
    pub fn edges(&self) -> &[(V, V)] {
        &self.edges
    }

    /// Copy of this graph with every edge reversed.
    ///
    /// Vertex order is preserved. Reversing an undirected graph yields an
    /// equivalent graph.
    pub(crate) fn transpose(&self) -> Self {
        let mut reversed = Self::new(self.directed);
        for vertex in self.vertices() {
            reversed.add_vertex(vertex.clone());
        }
        for (from, to) in &self.edges {
            reversed.add_edge(to.clone(), from.clone());
        }
        reversed
    }
}

/// Weighted graph store (the mapping representation of weighted edges)
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    directed: bool,
    index: VertexIndex<V>,
    adjacency: Vec<Vec<(V, f64)>>,
    edges: Vec<WeightedEdge<V>>,
}

impl<V: Vertex> WeightedGraph<V> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            index: VertexIndex::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Build a graph from weighted triples, in order
    pub fn from_edges<I, E>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<V>>,
    {
        let mut graph = Self::new(directed);
        for edge in edges {
            let edge = edge.into();
            graph.add_edge(edge.from, edge.to, edge.weight);
        }
        graph
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn add_vertex(&mut self, vertex: V) {
        self.register(vertex);
    }

    fn register(&mut self, vertex: V) -> usize {
        let (slot, inserted) = self.index.insert(vertex);
        if inserted {
            self.adjacency.push(Vec::new());
        }
        slot
    }

    /// Add a weighted edge, registering both endpoints and mirroring it when
    /// the graph is undirected
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        let from_slot = self.register(from.clone());
        let to_slot = self.register(to.clone());

        self.adjacency[from_slot].push((to.clone(), weight));
        if !self.directed && from_slot != to_slot {
            self.adjacency[to_slot].push((from.clone(), weight));
        }
        self.edges.push(WeightedEdge::new(from, to, weight));
    }

    /// Outgoing `(neighbor, weight)` pairs of `vertex` in insertion order
    pub fn neighbors(&self, vertex: &V) -> Result<&[(V, f64)]> {
        match self.index.slot(vertex) {
            Some(slot) => Ok(&self.adjacency[slot]),
            None => bail_unknown_vertex!(vertex),
        }
    }

    pub fn vertices(&self) -> &[V] {
        &self.index.vertices
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.slot(vertex).is_some()
    }

    /// The stored copy of `vertex`, if registered
    pub fn resolve(&self, vertex: &V) -> Option<&V> {
        self.index.resolve(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.index.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges as added, one triple per `add_edge` call
    pub fn edges(&self) -> &[WeightedEdge<V>] {
        &self.edges
    }

    /// Every traversable arc as a triple.
    ///
    /// For undirected graphs each edge appears in both directions, which is
    /// the shape Bellman-Ford and Floyd-Warshall expect.
    pub fn edge_list(&self) -> Vec<WeightedEdge<V>> {
        self.index
            .vertices
            .iter()
            .zip(&self.adjacency)
            .flat_map(|(from, targets)| {
                targets
                    .iter()
                    .map(move |(to, weight)| WeightedEdge::new(from.clone(), to.clone(), *weight))
            })
            .collect()
    }

    /// Drop weights, keeping vertex and neighbor order
    pub fn to_unweighted(&self) -> Graph<V> {
        let mut graph = Graph::new(self.directed);
        for vertex in self.vertices() {
            graph.add_vertex(vertex.clone());
        }
        for edge in &self.edges {
            graph.add_edge(edge.from.clone(), edge.to.clone());
        }
        graph
    }
}
