/*!
# Directed Graph Representation

[`DirectedGraph`] stores only outgoing neighborhoods. Incoming neighborhoods are derived by
scanning all vertices (costly); algorithms needing them on every vertex, such as the second
pass of Kosaraju's algorithm, build a reversed adjacency snapshot once instead.
*/

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A directed graph over vertices of type `V` storing only **outgoing neighborhoods**.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectedGraph<V: Vertex> {
    store: AdjacencyStore<SetNeighborhood<V>>,
}

impl_common_graph_ops!([V: Vertex] DirectedGraph<V> => SetNeighborhood<V>, Directed);

impl<V: Vertex> GraphNew for DirectedGraph<V> {
    fn new() -> Self {
        Self {
            store: AdjacencyStore::default(),
        }
    }
}

impl<V: Vertex> DirectedGraph<V> {
    /// Returns an iterator over the in-neighbors of `u`.
    /// Scans all vertices, so prefer a reversed snapshot for repeated use.
    pub fn in_neighbors_of<'a>(&'a self, u: &'a V) -> impl Iterator<Item = &'a V> + 'a {
        self.vertices().filter(move |w| self.has_edge(w, u))
    }

    /// Returns the number of in-neighbors of `u`
    pub fn in_degree(&self, u: &V) -> Result<usize> {
        self.require_vertex(u)?;
        Ok(self.in_neighbors_of(u).count())
    }

    /// Adds the edge `u -> v`, creating missing endpoints. Returns *false* if the edge was
    /// already present. Directed graphs accept every edge, so unlike
    /// [`GraphEdgeEditing::add_edge`] this cannot fail.
    pub fn insert_edge(&mut self, u: V, v: V) -> bool {
        self.store.insert_edge(Edge(u, v), false)
    }
}

impl<V: Vertex> GraphVertexEditing for DirectedGraph<V> {
    fn add_vertex(&mut self, u: V) -> bool {
        self.store.add_vertex(u)
    }

    fn remove_vertex(&mut self, u: &V) -> Result<()> {
        self.store.remove_vertex(u)
    }
}

impl<V: Vertex> GraphEdgeEditing for DirectedGraph<V> {
    fn add_edge(&mut self, u: V, v: V) -> Result<bool> {
        Ok(self.insert_edge(u, v))
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        self.store.remove_edge(&Edge(u.clone(), v.clone()), false)
    }
}

test_graph_ops!(
    test_directed_graph,
    DirectedGraph<u32>,
    false,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphVertexEditing)
);

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn in_neighbors() {
        let g = DirectedGraph::from_edges([(0, 1), (2, 1), (1, 3)]).unwrap();
        assert_eq!(g.in_neighbors_of(&1).copied().sorted().collect_vec(), vec![0, 2]);
        assert_eq!(g.in_degree(&3), Ok(1));
        assert_eq!(g.in_degree(&0), Ok(0));
        assert_eq!(g.in_degree(&9), Err(GraphError::VertexNotFound));
    }

    #[test]
    fn duplicate_edges_and_loops() {
        let mut g = DirectedGraph::new();
        assert_eq!(g.add_edge('a', 'b'), Ok(true));
        assert_eq!(g.add_edge('a', 'b'), Ok(false));
        assert_eq!(g.add_edge('b', 'a'), Ok(true));
        assert_eq!(g.add_edge('c', 'c'), Ok(true));

        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.degree(&'c'), Ok(1));
        assert!(g.is_directed());

        assert!(g.remove_edge(&'a', &'b'));
        assert!(!g.remove_edge(&'a', &'b'));
        assert!(g.has_edge(&'b', &'a'));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.vertex_count(), 3);

        assert!(g.insert_edge('d', 'a'));
        assert!(!g.insert_edge('d', 'a'));
        assert!(g.has_edge(&'d', &'a'));
        assert_eq!(g.vertex_count(), 4);
    }
}
