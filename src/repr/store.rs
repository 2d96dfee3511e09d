use std::fmt::Debug;

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Shared storage of all graph representations: a vertex set, an adjacency index and an edge
/// list, kept consistent with each other by every mutating call.
///
/// Undirected graphs store a logical edge `{u, v}` as the two entries `u -> v` and `v -> u`
/// (a self-loop only once). Whether a call is undirected is decided by the owning graph.
pub struct AdjacencyStore<N: Neighborhood> {
    vertices: VertexSet<N::V>,
    adjacency: VertexMap<N::V, N>,
    edges: Vec<N::Edge>,
}

impl<N: Neighborhood> Default for AdjacencyStore<N> {
    fn default() -> Self {
        Self {
            vertices: VertexSet::default(),
            adjacency: VertexMap::default(),
            edges: Vec::new(),
        }
    }
}

impl<N: Neighborhood> Clone for AdjacencyStore<N> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            adjacency: self.adjacency.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl<N: Neighborhood> Debug for AdjacencyStore<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjacencyStore")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}

/// Weak equality: same vertex set and same edge multiset. The adjacency index is derived from
/// both and therefore not compared.
impl<N: Neighborhood> PartialEq for AdjacencyStore<N> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
            && self.edges.len() == other.edges.len()
            && self.edges.iter().counts() == other.edges.iter().counts()
    }
}

impl<N: Neighborhood> Eq for AdjacencyStore<N> {}

impl<N: Neighborhood> AdjacencyStore<N> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> std::collections::hash_set::Iter<'_, N::V> {
        self.vertices.iter()
    }

    pub fn contains(&self, u: &N::V) -> bool {
        self.vertices.contains(u)
    }

    pub fn vertex_set(&self) -> &VertexSet<N::V> {
        &self.vertices
    }

    pub fn adjacency(&self) -> &VertexMap<N::V, N> {
        &self.adjacency
    }

    pub fn edges(&self) -> &[N::Edge] {
        &self.edges
    }

    /// Neighborhood of `u`, `None` if `u` is not a vertex
    pub fn neighborhood(&self, u: &N::V) -> Option<&N> {
        self.adjacency.get(u)
    }

    /// Neighbors of `u`; empty if `u` is not a vertex
    pub fn neighbors_of(
        &self,
        u: &N::V,
    ) -> std::iter::Flatten<std::option::IntoIter<N::NeighborhoodIter<'_>>> {
        self.adjacency.get(u).map(N::neighbors).into_iter().flatten()
    }

    /// Returns *true* if `u` was not present before
    pub fn add_vertex(&mut self, u: N::V) -> bool {
        if self.vertices.insert(u.clone()) {
            self.adjacency.insert(u, N::default());
            true
        } else {
            false
        }
    }

    /// Purges `u` from the vertex set, the adjacency index (as key and as neighbor) and the
    /// edge list
    pub fn remove_vertex(&mut self, u: &N::V) -> Result<()> {
        if !self.vertices.remove(u) {
            return Err(GraphError::VertexNotFound);
        }

        self.adjacency.remove(u);
        let mut dropped_entries = 0;
        for nbs in self.adjacency.values_mut() {
            dropped_entries += nbs.remove_neighbor(u);
        }
        self.edges.retain(|e| !e.touches(u));

        debug!(vertex = ?u, dropped_entries, "vertex purged");
        Ok(())
    }

    /// Returns *true* if exactly this (directed) edge entry exists
    pub fn has_edge(&self, edge: &N::Edge) -> bool {
        self.adjacency
            .get(edge.source())
            .is_some_and(|nbs| nbs.has_entry(&N::entry_of(edge)))
    }

    /// Inserts `edge` and its missing endpoints. Undirected insertions also store the reverse
    /// entry. Returns *false* and does nothing if the edge already exists.
    pub fn insert_edge(&mut self, edge: N::Edge, undirected: bool) -> bool {
        if self.has_edge(&edge) {
            return false;
        }

        self.add_vertex(edge.source().clone());
        self.add_vertex(edge.target().clone());

        self.attach(&edge);
        if undirected && edge.source() != edge.target() {
            let rev = N::reverse(&edge);
            self.attach(&rev);
            self.edges.push(edge);
            self.edges.push(rev);
        } else {
            self.edges.push(edge);
        }

        true
    }

    /// Removes `edge` from edge list and adjacency (both directions if `undirected`).
    /// Returns *false* if the edge does not exist.
    pub fn remove_edge(&mut self, edge: &N::Edge, undirected: bool) -> bool {
        if !self.has_edge(edge) {
            return false;
        }

        let rev = N::reverse(edge);
        self.detach(edge);
        if undirected {
            self.detach(&rev);
        }
        self.edges
            .retain(|e| e != edge && !(undirected && *e == rev));

        true
    }

    /// Iterates the edge list; in undirected mode only the first entry of each `u -> v`,
    /// `v -> u` pair is reported
    pub fn logical_edges(&self, undirected: bool) -> impl Iterator<Item = &N::Edge> + '_ {
        let mut seen: FxHashSet<N::Edge> = FxHashSet::default();
        self.edges.iter().filter(move |&e| {
            if !undirected {
                return true;
            }
            if seen.contains(&N::reverse(e)) {
                false
            } else {
                seen.insert(e.clone());
                true
            }
        })
    }

    pub fn edge_count(&self, undirected: bool) -> usize {
        if undirected {
            self.logical_edges(true).count()
        } else {
            self.edges.len()
        }
    }

    fn attach(&mut self, edge: &N::Edge) {
        self.adjacency
            .entry(edge.source().clone())
            .or_default()
            .insert_entry(N::entry_of(edge));
    }

    fn detach(&mut self, edge: &N::Edge) {
        if let Some(nbs) = self.adjacency.get_mut(edge.source()) {
            nbs.remove_entry(&N::entry_of(edge));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Store = AdjacencyStore<SetNeighborhood<u32>>;
    type WeightedStore = AdjacencyStore<WeightedNeighborhood<u32>>;

    #[test]
    fn undirected_insert_and_remove() {
        let mut store = Store::default();
        assert!(store.insert_edge(Edge(0, 1), true));
        assert!(!store.insert_edge(Edge(1, 0), true));
        assert!(store.insert_edge(Edge(2, 2), true));

        assert_eq!(store.edges().len(), 3);
        assert_eq!(store.edge_count(true), 2);
        assert!(store.has_edge(&Edge(1, 0)));

        assert!(store.remove_edge(&Edge(1, 0), true));
        assert!(!store.has_edge(&Edge(0, 1)));
        assert_eq!(store.edges(), &[Edge(2, 2)]);
        assert_eq!(store.vertex_count(), 3);
    }

    #[test]
    fn remove_vertex_purges_everything() {
        let mut store = WeightedStore::default();
        store.insert_edge(WeightedEdge(0, 1, 10), true);
        store.insert_edge(WeightedEdge(0, 2, 10), true);
        store.insert_edge(WeightedEdge(1, 2, 3), true);

        assert_eq!(store.remove_vertex(&7), Err(GraphError::VertexNotFound));
        store.remove_vertex(&0).unwrap();

        assert!(!store.contains(&0));
        assert!(store.adjacency().get(&0).is_none());
        assert!(store.adjacency().values().all(|nbs| !nbs.has_neighbor(&0)));
        assert_eq!(store.edge_count(true), 1);
        assert_eq!(store.neighbors_of(&0).count(), 0);
    }

    #[test]
    fn weak_equality() {
        let mut a = Store::default();
        let mut b = Store::default();
        a.insert_edge(Edge(0, 1), false);
        a.insert_edge(Edge(1, 2), false);
        b.insert_edge(Edge(1, 2), false);
        b.insert_edge(Edge(0, 1), false);
        assert_eq!(a, b);

        b.add_vertex(3);
        assert_ne!(a, b);
    }
}
