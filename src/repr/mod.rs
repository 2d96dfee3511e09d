/*!
# Graph representations

All representations are built on the same [`AdjacencyStore`] and differ in the edges they
accept:

- [`DirectedGraph`]: unweighted directed edges,
- [`Forest`]: unweighted undirected edges that never close a cycle,
- [`Network`]: weighted edges, directed ([`DiNetwork`]) or undirected ([`UnNetwork`]).
*/

use fxhash::FxHashSet;

use crate::{edge::*, error::*, ops::*, vertex::*};

mod directed;
mod forest;
mod neighborhood;
mod network;
mod store;

pub use directed::*;
pub use forest::*;
pub use neighborhood::*;
pub use network::*;
pub use store::*;

pub(crate) mod macros {
    /// Implements the read-only capability traits for a graph struct whose `store` field is an
    /// `AdjacencyStore<$nbs>`.
    macro_rules! impl_common_graph_ops {
        ([$($generics:tt)*] $struct:ty => $nbs:ty, $dir:ty) => {
            impl<$($generics)*> GraphType for $struct {
                type Dir = $dir;
            }

            impl<$($generics)*> GraphVertexOrder for $struct {
                type V = V;

                type VertexIter<'a>
                    = std::collections::hash_set::Iter<'a, V>
                where
                    Self: 'a;

                fn vertex_count(&self) -> usize {
                    self.store.vertex_count()
                }

                fn vertices(&self) -> Self::VertexIter<'_> {
                    self.store.vertices()
                }

                fn contains(&self, u: &V) -> bool {
                    self.store.contains(u)
                }
            }

            impl<$($generics)*> GraphEdgeOrder for $struct {
                fn edge_count(&self) -> usize {
                    self.store.edge_count(!<$dir as GraphDir>::DIRECTED)
                }
            }

            impl<$($generics)*> AdjacencyList for $struct {
                type NeighborIter<'a>
                    = std::iter::Flatten<
                        std::option::IntoIter<<$nbs as Neighborhood>::NeighborhoodIter<'a>>,
                    >
                where
                    Self: 'a;

                fn neighbors_of(&self, u: &V) -> Self::NeighborIter<'_> {
                    self.store.neighbors_of(u)
                }

                fn degree(&self, u: &V) -> Result<usize> {
                    self.store
                        .neighborhood(u)
                        .map(|nbs| nbs.num_of_neighbors())
                        .ok_or(GraphError::VertexNotFound)
                }
            }

            impl<$($generics)*> GraphIntrospection for $struct {
                type Neighborhood = $nbs;
                type EdgeRepr = <$nbs as Neighborhood>::Edge;

                fn adjacency_list(&self) -> &VertexMap<V, $nbs> {
                    self.store.adjacency()
                }

                fn vertex_set(&self) -> &VertexSet<V> {
                    self.store.vertex_set()
                }

                fn edges(&self) -> &[Self::EdgeRepr] {
                    self.store.edges()
                }
            }

            impl<$($generics)*> Default for $struct {
                fn default() -> Self {
                    Self::new()
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}
