/*!
# Capability traits

Graph representations do not form a hierarchy. Instead every representation implements the
subset of these flat traits that makes sense for it, and algorithms are written against exactly
the capabilities they need:

- [`GraphType`] fixes the directedness at the type level,
- [`GraphVertexOrder`] / [`GraphEdgeOrder`] give sizes and vertex iteration,
- [`AdjacencyList`] / [`WeightedAdjacencyList`] give (weighted) neighborhoods,
- [`GraphVertexEditing`], [`GraphEdgeEditing`] and [`WeightedGraphEditing`] mutate,
- [`GraphIntrospection`] exposes the raw storage read-only.
*/

use crate::{edge::*, error::*, vertex::*};

/// Type-level marker for the directedness of a graph
pub trait GraphDir {
    const DIRECTED: bool;
}

/// Marker for directed graphs: an edge `(u, v)` only connects `u` to `v`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Marker for undirected graphs: an edge `(u, v)` is stored as `u -> v` and `v -> u`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl GraphDir for Directed {
    const DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const DIRECTED: bool = false;
}

/// Fixes the directedness of a graph representation
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if edges are directed
    fn is_directed(&self) -> bool {
        Self::Dir::DIRECTED
    }

    /// Returns *true* if edges are undirected
    fn is_undirected(&self) -> bool {
        !Self::Dir::DIRECTED
    }
}

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphVertexOrder {
    /// Label type of the vertices
    type V: Vertex;

    type VertexIter<'a>: Iterator<Item = &'a Self::V>
    where
        Self: 'a;

    /// Returns the number of vertices of the graph
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertices in unspecified order
    fn vertices(&self) -> Self::VertexIter<'_>;

    /// Returns *true* if `u` is a vertex of the graph
    fn contains(&self, u: &Self::V) -> bool;

    /// Returns `Err(VertexNotFound)` if `u` is not a vertex of the graph
    fn require_vertex(&self, u: &Self::V) -> Result<()> {
        if self.contains(u) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound)
        }
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of logical edges; in undirected graphs `u -> v` and `v -> u` are
    /// counted once
    fn edge_count(&self) -> usize;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.edge_count() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphVertexOrder + GraphType + Sized {
    type NeighborIter<'a>: Iterator<Item = &'a Self::V>
    where
        Self: 'a;

    /// Returns an iterator over the (out-)neighbors of `u`.
    /// The iterator is empty if `u` is not a vertex of the graph.
    ///
    /// In a network with parallel edges of different weights, a neighbor is reported once per
    /// edge.
    fn neighbors_of(&self, u: &Self::V) -> Self::NeighborIter<'_>;

    /// Returns the number of (outgoing) neighbors of `u`
    fn degree(&self, u: &Self::V) -> Result<usize> {
        self.require_vertex(u)?;
        Ok(self.neighbors_of(u).count())
    }

    /// Returns *true* if the edge `(u, v)` exists
    fn has_edge(&self, u: &Self::V, v: &Self::V) -> bool {
        self.neighbors_of(u).any(|w| w == v)
    }

    /// Returns an iterator over the outgoing edges of `u`
    fn edges_of<'a>(&'a self, u: &'a Self::V) -> impl Iterator<Item = Edge<Self::V>> + 'a {
        self.neighbors_of(u).map(move |v| Edge(u.clone(), v.clone()))
    }
}

/// Weighted neighborhoods of networks
pub trait WeightedAdjacencyList: AdjacencyList {
    type WeightedNeighborIter<'a>: Iterator<Item = (&'a Self::V, Weight)>
    where
        Self: 'a;

    /// Returns an iterator over `(neighbor, weight)` pairs of the outgoing edges of `u`.
    /// The iterator is empty if `u` is not a vertex of the graph.
    fn weighted_neighbors_of(&self, u: &Self::V) -> Self::WeightedNeighborIter<'_>;

    /// Returns an iterator over the weighted outgoing edges of `u`
    fn weighted_edges_of<'a>(
        &'a self,
        u: &'a Self::V,
    ) -> impl Iterator<Item = WeightedEdge<Self::V>> + 'a {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge(u.clone(), v.clone(), w))
    }
}

/// Provides functions to insert and delete vertices
pub trait GraphVertexEditing: GraphVertexOrder {
    /// Adds `u` as an isolated vertex. Returns *true* if `u` was not present before.
    fn add_vertex(&mut self, u: Self::V) -> bool;

    /// Removes `u`, all edges incident to `u`, and `u` from every neighborhood.
    /// Fails with `VertexNotFound` (and changes nothing) if `u` does not exist.
    fn remove_vertex(&mut self, u: &Self::V) -> Result<()>;

    /// Adds all vertices of the iterator
    fn add_vertices(&mut self, vertices: impl IntoIterator<Item = Self::V>) {
        for u in vertices {
            self.add_vertex(u);
        }
    }
}

/// Provides functions to insert and delete unweighted edges
pub trait GraphEdgeEditing: GraphVertexEditing {
    /// Adds the edge `(u, v)`, inserting missing endpoints first.
    /// Returns `Ok(false)` if the edge already existed.
    fn add_edge(&mut self, u: Self::V, v: Self::V) -> Result<bool>;

    /// Removes the edge `(u, v)` (both directions in undirected graphs).
    /// Returns *true* if the edge existed.
    fn remove_edge(&mut self, u: &Self::V, v: &Self::V) -> bool;

    /// Adds all edges of the iterator and stops at the first error
    fn add_edges<E>(&mut self, edges: impl IntoIterator<Item = E>) -> Result<()>
    where
        E: Into<Edge<Self::V>>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}

/// Provides functions to insert and delete weighted edges
pub trait WeightedGraphEditing: GraphVertexEditing {
    /// Adds the edge `(u, v)` with weight `w`, inserting missing endpoints first.
    /// Returns *false* if exactly this weighted edge already existed.
    fn add_edge(&mut self, u: Self::V, v: Self::V, w: Weight) -> bool;

    /// Removes the edge `(u, v)` with weight `w` (both directions in undirected graphs).
    /// Returns *true* if the edge existed.
    fn remove_edge(&mut self, u: &Self::V, v: &Self::V, w: Weight) -> bool;

    /// Sum of the weights of all logical edges
    fn edge_sum(&self) -> Weight;

    /// Adds an already built weighted edge
    fn add_weighted_edge(&mut self, edge: WeightedEdge<Self::V>) -> bool {
        let WeightedEdge(u, v, w) = edge;
        self.add_edge(u, v, w)
    }

    /// Adds all edges of the iterator
    fn add_weighted_edges<E>(&mut self, edges: impl IntoIterator<Item = E>)
    where
        E: Into<WeightedEdge<Self::V>>,
    {
        for e in edges {
            self.add_weighted_edge(e.into());
        }
    }
}

/// Read-only access to the underlying storage
pub trait GraphIntrospection: GraphVertexOrder {
    type Neighborhood;
    type EdgeRepr;

    /// Vertex -> neighborhood index; every vertex has an entry
    fn adjacency_list(&self) -> &VertexMap<Self::V, Self::Neighborhood>;

    /// The set of all vertices
    fn vertex_set(&self) -> &VertexSet<Self::V>;

    /// All directed edge entries in insertion order. Undirected graphs store both directions.
    fn edges(&self) -> &[Self::EdgeRepr];
}

/// Creates an empty graph
pub trait GraphNew {
    fn new() -> Self;
}

/// Builds a graph from an edge list
pub trait GraphFromEdges: GraphVertexOrder + Sized {
    fn from_edges<E>(edges: impl IntoIterator<Item = E>) -> Result<Self>
    where
        E: Into<Edge<Self::V>>;
}

impl<G> GraphFromEdges for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn from_edges<E>(edges: impl IntoIterator<Item = E>) -> Result<Self>
    where
        E: Into<Edge<Self::V>>,
    {
        let mut graph = Self::new();
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
