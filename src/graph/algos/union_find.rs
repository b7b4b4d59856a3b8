//! Union-Find (disjoint sets).
//!
//! Elements are interned into dense slots; `parent` and `rank` are indexed by
//! slot. Every parent chain ends at a root whose parent is itself. Path
//! compression and union by rank only shorten chains, they never change which
//! elements share a root.

use crate::graph::types::Vertex;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Disjoint-set forest over arbitrary hashable elements
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    slots: HashMap<T, usize>,
    elements: Vec<T>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl<T: Vertex> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Vertex> UnionFind<T> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            elements: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            sets: 0,
        }
    }

    /// Register `element` as a singleton set; returns false if already known
    pub fn make_set(&mut self, element: T) -> bool {
        if self.slots.contains_key(&element) {
            return false;
        }
        self.slot_or_insert(element);
        true
    }

    fn slot_or_insert(&mut self, element: T) -> usize {
        if let Some(&slot) = self.slots.get(&element) {
            return slot;
        }
        let slot = self.elements.len();
        self.slots.insert(element.clone(), slot);
        self.elements.push(element);
        self.parent.push(slot);
        self.rank.push(0);
        self.sets += 1;
        slot
    }

    /// Root slot with path halving
    fn root(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Root slot without touching the forest
    fn root_of(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Representative of the set containing `element`, or `None` if unknown
    pub fn find(&mut self, element: &T) -> Option<T> {
        let slot = *self.slots.get(element)?;
        let root = self.root(slot);
        Some(self.elements[root].clone())
    }

    /// Merge the sets of `a` and `b`, registering either if needed.
    ///
    /// Returns true if two distinct sets were merged, false if they already
    /// shared a representative.
    pub fn union(&mut self, a: T, b: T) -> bool {
        let a = self.slot_or_insert(a);
        let b = self.slot_or_insert(b);
        self.union_slots(a, b)
    }

    fn union_slots(&mut self, a: usize, b: usize) -> bool {
        let ra = self.root(a);
        let rb = self.root(b);
        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
        self.sets -= 1;
        true
    }

    /// Whether `a` and `b` are known and in the same set
    pub fn connected(&mut self, a: &T, b: &T) -> bool {
        match (self.slots.get(a).copied(), self.slots.get(b).copied()) {
            (Some(a), Some(b)) => self.root(a) == self.root(b),
            _ => false,
        }
    }

    pub fn contains(&self, element: &T) -> bool {
        self.slots.contains_key(element)
    }

    /// Number of registered elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Current partition. Sets are ordered by their first-registered member,
    /// members by registration order.
    pub fn sets(&self) -> Vec<Vec<T>> {
        let mut position: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<T>> = Vec::with_capacity(self.sets);

        for (slot, element) in self.elements.iter().enumerate() {
            let root = self.root_of(slot);
            let group = *position.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(element.clone());
        }
        groups
    }
}

impl<T: Vertex> FromIterator<T> for UnionFind<T> {
    /// Singleton sets for every element
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut uf = Self::new();
        for element in iter {
            uf.make_set(element);
        }
        uf
    }
}
