/*!
# Weighted Networks

[`Network`] stores weighted edges; its directedness is fixed by the type parameter `D`
([`DiNetwork`] for flow networks, [`UnNetwork`] for spanning trees and undirected shortest
paths). Besides the edges, a network carries the [`EdgeOrdering`] that spanning-tree
construction sorts its edges by.
*/

use std::marker::PhantomData;

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A weighted network over vertices of type `V`.
///
/// Parallel edges between the same endpoints are allowed if they carry different weights.
#[derive(Clone, Debug)]
pub struct Network<V: Vertex, D: GraphDir = Undirected> {
    store: AdjacencyStore<WeightedNeighborhood<V>>,
    ordering: EdgeOrdering<V>,
    _dir: PhantomData<D>,
}

/// Directed weighted network
pub type DiNetwork<V> = Network<V, Directed>;

/// Undirected weighted network
pub type UnNetwork<V> = Network<V, Undirected>;

impl_common_graph_ops!([V: Vertex, D: GraphDir] Network<V, D> => WeightedNeighborhood<V>, D);

impl<V: Vertex, D: GraphDir> GraphNew for Network<V, D> {
    fn new() -> Self {
        Self {
            store: AdjacencyStore::default(),
            ordering: EdgeOrdering::default(),
            _dir: PhantomData,
        }
    }
}

/// Networks are equal if their vertex sets and weighted edge multisets are; the edge ordering is
/// not compared.
impl<V: Vertex, D: GraphDir> PartialEq for Network<V, D> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<V: Vertex, D: GraphDir> Eq for Network<V, D> {}

impl<V: Vertex, D: GraphDir> Network<V, D> {
    /// Builds a network from weighted edges
    pub fn from_weighted_edges<E>(edges: impl IntoIterator<Item = E>) -> Self
    where
        E: Into<WeightedEdge<V>>,
    {
        let mut network = Self::new();
        network.add_weighted_edges(edges);
        network
    }

    /// The ordering used to sort edges for spanning-tree construction
    pub fn edge_ordering(&self) -> &EdgeOrdering<V> {
        &self.ordering
    }

    /// Replaces the edge ordering
    pub fn set_edge_ordering(&mut self, ordering: EdgeOrdering<V>) -> &mut Self {
        self.ordering = ordering;
        self
    }

    /// Replaces the edge ordering; fails with `NullArgument` if `ordering` is `None`
    pub fn try_set_edge_ordering(&mut self, ordering: Option<EdgeOrdering<V>>) -> Result<()> {
        let ordering = ordering.ok_or(GraphError::NullArgument {
            argument: "ordering",
        })?;
        self.set_edge_ordering(ordering);
        Ok(())
    }

    /// Builder variant of [`Network::set_edge_ordering`]
    pub fn with_edge_ordering(mut self, ordering: EdgeOrdering<V>) -> Self {
        self.set_edge_ordering(ordering);
        self
    }

    /// Logical edges (one entry per undirected edge) in insertion order
    pub fn logical_edges(&self) -> impl Iterator<Item = &WeightedEdge<V>> + '_ {
        self.store.logical_edges(!D::DIRECTED)
    }

    /// Logical edges, stably sorted under `ordering`
    pub fn edges_sorted(&self, ordering: &EdgeOrdering<V>) -> Vec<WeightedEdge<V>> {
        let mut edges: Vec<_> = self.logical_edges().cloned().collect();
        ordering.sort(&mut edges);
        edges
    }

    /// Returns *true* if the edge `(u, v)` with weight `w` exists
    pub fn has_weighted_edge(&self, u: &V, v: &V, w: Weight) -> bool {
        self.store
            .has_edge(&WeightedEdge(u.clone(), v.clone(), w))
    }
}

impl<V: Vertex, D: GraphDir> WeightedAdjacencyList for Network<V, D> {
    type WeightedNeighborIter<'a>
        = std::iter::Flatten<std::option::IntoIter<WeightedNeighborhoodIter<'a, V>>>
    where
        Self: 'a;

    fn weighted_neighbors_of(&self, u: &V) -> Self::WeightedNeighborIter<'_> {
        self.store
            .neighborhood(u)
            .map(WeightedNeighborhood::weighted_neighbors)
            .into_iter()
            .flatten()
    }
}

impl<V: Vertex, D: GraphDir> GraphVertexEditing for Network<V, D> {
    fn add_vertex(&mut self, u: V) -> bool {
        self.store.add_vertex(u)
    }

    fn remove_vertex(&mut self, u: &V) -> Result<()> {
        self.store.remove_vertex(u)
    }
}

impl<V: Vertex, D: GraphDir> WeightedGraphEditing for Network<V, D> {
    fn add_edge(&mut self, u: V, v: V, w: Weight) -> bool {
        self.store
            .insert_edge(WeightedEdge(u, v, w), !D::DIRECTED)
    }

    fn remove_edge(&mut self, u: &V, v: &V, w: Weight) -> bool {
        self.store
            .remove_edge(&WeightedEdge(u.clone(), v.clone(), w), !D::DIRECTED)
    }

    fn edge_sum(&self) -> Weight {
        self.logical_edges().map(WeightedEdge::weight).sum()
    }
}

test_graph_ops!(
    test_un_network,
    UnNetwork<u32>,
    true,
    (GraphNew, AdjacencyList, WeightedGraphEditing, GraphVertexEditing)
);

test_graph_ops!(
    test_di_network,
    DiNetwork<u32>,
    false,
    (GraphNew, AdjacencyList, WeightedGraphEditing, GraphVertexEditing)
);
