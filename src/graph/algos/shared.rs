use crate::bail_unknown_vertex;
use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Vertex, WeightedEdge};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Min-heap entry ordered by key, then by push sequence.
///
/// Wrap in `std::cmp::Reverse` for use with `BinaryHeap`. Equal keys pop in
/// push order, which makes Dijkstra and Prim deterministic.
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub key: f64,
    pub seq: u64,
    pub item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Reject weights that cannot be ordered
pub fn check_weight<V: Vertex>(from: &V, to: &V, weight: f64) -> Result<()> {
    if weight.is_nan() {
        return Err(GraphError::invalid_weight(from, to, weight));
    }
    Ok(())
}

/// Map each vertex to its position in `vertices`; duplicates keep the first
pub fn index_vertices<V: Vertex>(vertices: &[V]) -> HashMap<V, usize> {
    let mut index = HashMap::with_capacity(vertices.len());
    for (slot, vertex) in vertices.iter().enumerate() {
        index.entry(vertex.clone()).or_insert(slot);
    }
    index
}

/// Resolve an edge list against a vertex index, validating endpoints and
/// weights
pub fn resolve_edges<V: Vertex>(
    index: &HashMap<V, usize>,
    edges: &[WeightedEdge<V>],
) -> Result<Vec<(usize, usize, f64)>> {
    let mut resolved = Vec::with_capacity(edges.len());
    for edge in edges {
        let Some(&from) = index.get(&edge.from) else {
            bail_unknown_vertex!(&edge.from);
        };
        let Some(&to) = index.get(&edge.to) else {
            bail_unknown_vertex!(&edge.to);
        };
        check_weight(&edge.from, &edge.to, edge.weight)?;
        resolved.push((from, to, edge.weight));
    }
    Ok(resolved)
}

/// Outcome of an explicit-stack depth-first walk over a whole graph
pub struct PostOrder<'g, V> {
    /// Vertices in the order their exploration finished
    pub finished: Vec<&'g V>,
    /// First cycle closed by an edge back onto the active path, first == last
    pub cycle: Option<Vec<&'g V>>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the active path
    Active,
    Finished,
}

/// Depth-first walk from every unvisited vertex in registration order,
/// recording finish order.
///
/// Uses an explicit stack of `(vertex, successors, next index)` frames, so the
/// active path is always the stack itself. When `stop_on_cycle` is set, the
/// walk ends at the first edge onto the active path and reports that cycle.
pub fn postorder<'g, V, G>(graph: &'g G, stop_on_cycle: bool) -> Result<PostOrder<'g, V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let mut marks: HashMap<&V, Mark> = HashMap::new();
    let mut finished = Vec::with_capacity(graph.vertices().len());

    for root in graph.vertices() {
        if marks.contains_key(root) {
            continue;
        }

        marks.insert(root, Mark::Active);
        let mut stack: Vec<(&V, Vec<&V>, usize)> = vec![(root, graph.successors(root)?, 0)];

        while let Some(frame) = stack.last_mut() {
            if frame.2 < frame.1.len() {
                let next = frame.1[frame.2];
                frame.2 += 1;

                match marks.get(next).copied() {
                    Some(Mark::Finished) => {}
                    Some(Mark::Active) => {
                        if stop_on_cycle {
                            let cycle = close_cycle(&stack, next);
                            return Ok(PostOrder {
                                finished,
                                cycle: Some(cycle),
                            });
                        }
                    }
                    None => {
                        marks.insert(next, Mark::Active);
                        stack.push((next, graph.successors(next)?, 0));
                    }
                }
            } else if let Some((vertex, _, _)) = stack.pop() {
                marks.insert(vertex, Mark::Finished);
                finished.push(vertex);
            }
        }
    }

    Ok(PostOrder {
        finished,
        cycle: None,
    })
}

/// Slice the active path from `entry` to the top of the stack and close it
fn close_cycle<'g, V: Vertex>(stack: &[(&'g V, Vec<&'g V>, usize)], entry: &'g V) -> Vec<&'g V> {
    let from = stack
        .iter()
        .position(|(vertex, _, _)| *vertex == entry)
        .unwrap_or(0);
    let mut cycle: Vec<&V> = stack[from..].iter().map(|(vertex, _, _)| *vertex).collect();
    cycle.push(entry);
    cycle
}
