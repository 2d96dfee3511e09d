/*!
# Forest

An undirected graph that rejects every edge closing a cycle. Acyclicity is maintained by a
[`DisjointSetUnion`] over the vertices: an edge `{u, v}` is accepted iff `u` and `v` are in
different sets.
*/

use tracing::debug;

use crate::{
    repr::macros::impl_common_graph_ops, testing::test_graph_ops, utils::DisjointSetUnion,
};

use super::*;

/// An undirected acyclic graph over vertices of type `V`.
///
/// ```
/// use lgraphs::prelude::*;
///
/// let mut forest = Forest::from_edges([(0, 1), (1, 2), (3, 4)]).unwrap();
/// assert_eq!(forest.add_edge(4, 3), Ok(false));
/// assert_eq!(forest.add_edge(2, 0), Err(GraphError::CycleViolation));
///
/// // removing an edge splits a tree, so it can be closed elsewhere
/// assert!(forest.remove_edge(&0, &1));
/// assert_eq!(forest.add_edge(2, 0), Ok(true));
/// ```
#[derive(Clone, Debug)]
pub struct Forest<V: Vertex> {
    store: AdjacencyStore<SetNeighborhood<V>>,
    components: DisjointSetUnion<V>,
}

impl_common_graph_ops!([V: Vertex] Forest<V> => SetNeighborhood<V>, Undirected);

impl<V: Vertex> GraphNew for Forest<V> {
    fn new() -> Self {
        Self {
            store: AdjacencyStore::default(),
            components: DisjointSetUnion::new(),
        }
    }
}

impl<V: Vertex> PartialEq for Forest<V> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<V: Vertex> Eq for Forest<V> {}

impl<V: Vertex> Forest<V> {
    /// Returns *true* if `u` and `v` are in the same tree
    pub fn same_tree(&self, u: &V, v: &V) -> bool {
        self.components.connected(u, v)
    }

    /// Number of trees (isolated vertices count as trees)
    pub fn number_of_trees(&self) -> usize {
        self.components.number_of_sets()
    }

    /// Recomputes the components from the remaining edges
    fn rebuild_components(&mut self) {
        let mut components: DisjointSetUnion<V> = self.store.vertices().cloned().collect();
        for Edge(u, v) in self.store.logical_edges(true) {
            components.union(u, v);
        }
        self.components = components;
    }
}

impl<V: Vertex> GraphVertexEditing for Forest<V> {
    fn add_vertex(&mut self, u: V) -> bool {
        self.components.make_set(u.clone());
        self.store.add_vertex(u)
    }

    fn remove_vertex(&mut self, u: &V) -> Result<()> {
        self.store.remove_vertex(u)?;
        self.rebuild_components();
        Ok(())
    }
}

impl<V: Vertex> GraphEdgeEditing for Forest<V> {
    fn add_edge(&mut self, u: V, v: V) -> Result<bool> {
        if self.store.has_edge(&Edge(u.clone(), v.clone())) {
            return Ok(false);
        }

        if u == v || !self.components.union(&u, &v) {
            debug!(?u, ?v, "forest rejected edge closing a cycle");
            return Err(GraphError::CycleViolation);
        }

        Ok(self.store.insert_edge(Edge(u, v), true))
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        if self.store.remove_edge(&Edge(u.clone(), v.clone()), true) {
            self.rebuild_components();
            true
        } else {
            false
        }
    }
}

test_graph_ops!(
    test_forest,
    Forest<u32>,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphVertexEditing)
);
