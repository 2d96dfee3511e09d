use std::{
    collections::hash_set::Iter,
    fmt::Debug,
    hash::Hash,
    iter::Map,
};

use super::*;

/// Trait for methods on the Neighborhood of a specified vertex.
///
/// A neighborhood stores *entries*: the target vertex of an outgoing edge plus whatever the edge
/// carries (nothing for plain graphs, a weight for networks). Each neighborhood type is paired
/// with the edge type that the owning graph keeps in its edge list.
pub trait Neighborhood: Default + Clone {
    type V: Vertex;

    /// What is stored per outgoing edge
    type Entry: Clone + Eq + Hash;

    /// Edge list representation matching `Entry`
    type Edge: Endpoints<Self::V> + Clone + Eq + Hash + Debug;

    type NeighborhoodIter<'a>: Iterator<Item = &'a Self::V>
    where
        Self: 'a;

    /// Splits off the entry stored at `edge.source()`
    fn entry_of(edge: &Self::Edge) -> Self::Entry;

    /// Same edge with switched endpoints
    fn reverse(edge: &Self::Edge) -> Self::Edge;

    /// Returns the number of entries in the Neighborhood
    fn num_of_neighbors(&self) -> usize;

    /// Returns an iterator over all neighbors, once per entry
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if exactly this entry is present
    fn has_entry(&self, entry: &Self::Entry) -> bool;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: &Self::V) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Inserts an entry. Returns *true* if it was not present before.
    fn insert_entry(&mut self, entry: Self::Entry) -> bool;

    /// Removes an entry. Returns *true* if it was present before.
    fn remove_entry(&mut self, entry: &Self::Entry) -> bool;

    /// Removes all entries pointing to `v` and returns how many there were
    fn remove_neighbor(&mut self, v: &Self::V) -> usize;
}

/// Plain neighborhood: a set of out-neighbors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNeighborhood<V: Vertex>(VertexSet<V>);

impl<V: Vertex> Default for SetNeighborhood<V> {
    fn default() -> Self {
        Self(VertexSet::default())
    }
}

impl<V: Vertex> SetNeighborhood<V> {
    /// The neighbors as a set
    pub fn as_set(&self) -> &VertexSet<V> {
        &self.0
    }
}

impl<V: Vertex> Neighborhood for SetNeighborhood<V> {
    type V = V;
    type Entry = V;
    type Edge = Edge<V>;

    type NeighborhoodIter<'a>
        = Iter<'a, V>
    where
        Self: 'a;

    fn entry_of(edge: &Edge<V>) -> V {
        edge.1.clone()
    }

    fn reverse(edge: &Edge<V>) -> Edge<V> {
        edge.reverse()
    }

    fn num_of_neighbors(&self) -> usize {
        self.0.len()
    }

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter()
    }

    fn has_entry(&self, entry: &V) -> bool {
        self.0.contains(entry)
    }

    fn has_neighbor(&self, v: &V) -> bool {
        self.0.contains(v)
    }

    fn insert_entry(&mut self, entry: V) -> bool {
        self.0.insert(entry)
    }

    fn remove_entry(&mut self, entry: &V) -> bool {
        self.0.remove(entry)
    }

    fn remove_neighbor(&mut self, v: &V) -> usize {
        self.0.remove(v) as usize
    }
}

/// Weighted neighborhood: a set of `(neighbor, weight)` pairs.
/// Parallel edges to the same neighbor are allowed if their weights differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedNeighborhood<V: Vertex>(FxHashSet<(V, Weight)>);

impl<V: Vertex> Default for WeightedNeighborhood<V> {
    fn default() -> Self {
        Self(FxHashSet::default())
    }
}

pub type WeightedNeighborhoodIter<'a, V> =
    Map<Iter<'a, (V, Weight)>, fn(&'a (V, Weight)) -> (&'a V, Weight)>;

impl<V: Vertex> WeightedNeighborhood<V> {
    /// The entries as a set
    pub fn as_set(&self) -> &FxHashSet<(V, Weight)> {
        &self.0
    }

    /// Returns an iterator over `(neighbor, weight)` pairs
    pub fn weighted_neighbors<'a>(&'a self) -> WeightedNeighborhoodIter<'a, V> {
        let split: fn(&'a (V, Weight)) -> (&'a V, Weight) = |(v, w)| (v, *w);
        self.0.iter().map(split)
    }
}

impl<V: Vertex> Neighborhood for WeightedNeighborhood<V> {
    type V = V;
    type Entry = (V, Weight);
    type Edge = WeightedEdge<V>;

    type NeighborhoodIter<'a>
        = Map<Iter<'a, (V, Weight)>, fn(&'a (V, Weight)) -> &'a V>
    where
        Self: 'a;

    fn entry_of(edge: &WeightedEdge<V>) -> (V, Weight) {
        (edge.1.clone(), edge.2)
    }

    fn reverse(edge: &WeightedEdge<V>) -> WeightedEdge<V> {
        edge.reverse()
    }

    fn num_of_neighbors(&self) -> usize {
        self.0.len()
    }

    fn neighbors<'a>(&'a self) -> Self::NeighborhoodIter<'a> {
        let target: fn(&'a (V, Weight)) -> &'a V = |(v, _)| v;
        self.0.iter().map(target)
    }

    fn has_entry(&self, entry: &(V, Weight)) -> bool {
        self.0.contains(entry)
    }

    fn insert_entry(&mut self, entry: (V, Weight)) -> bool {
        self.0.insert(entry)
    }

    fn remove_entry(&mut self, entry: &(V, Weight)) -> bool {
        self.0.remove(entry)
    }

    fn remove_neighbor(&mut self, v: &V) -> usize {
        let before = self.0.len();
        self.0.retain(|(u, _)| u != v);
        before - self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn weighted_parallel_entries() {
        let mut nbs = WeightedNeighborhood::default();
        assert!(nbs.insert_entry(('b', 3)));
        assert!(nbs.insert_entry(('b', 5)));
        assert!(!nbs.insert_entry(('b', 3)));
        assert!(nbs.insert_entry(('c', 1)));

        assert_eq!(nbs.num_of_neighbors(), 3);
        assert!(nbs.has_neighbor(&'b'));
        assert_eq!(
            nbs.weighted_neighbors()
                .filter(|(v, _)| **v == 'b')
                .map(|(_, w)| w)
                .sorted()
                .collect_vec(),
            vec![3, 5]
        );

        assert_eq!(nbs.remove_neighbor(&'b'), 2);
        assert_eq!(nbs.neighbors().collect_vec(), vec![&'c']);
        assert!(!nbs.remove_entry(&('c', 2)));
        assert!(nbs.remove_entry(&('c', 1)));
        assert_eq!(nbs.num_of_neighbors(), 0);
    }

    #[test]
    fn set_entries() {
        let mut nbs = SetNeighborhood::default();
        assert!(nbs.insert_entry(1));
        assert!(!nbs.insert_entry(1));
        assert_eq!(SetNeighborhood::<i32>::entry_of(&Edge(0, 1)), 1);
        assert_eq!(nbs.remove_neighbor(&1), 1);
        assert_eq!(nbs.remove_neighbor(&1), 0);
    }
}
