/*!
# Cycles and orderings of directed graphs

- [`CycleDetection::is_cyclic`] runs a three-colour depth-first search,
- [`CycleDetection::topological_sort`] returns the reversed DFS post-order of an acyclic graph,
- [`Transpose`] builds the graph with every edge reversed.

All searches use explicit stacks, so deep graphs do not overflow the call stack.
*/

use itertools::Itertools;

use super::{connectivity::dfs_finish_order, *};

/// Vertex state during the three-colour search. Vertices without an entry are unvisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    /// On the current DFS path
    Gray,
    /// Fully explored
    Black,
}

pub trait CycleDetection: AdjacencyList + GraphType<Dir = Directed> {
    /// Returns *true* if the graph contains a directed cycle (self-loops included).
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = DirectedGraph::from_edges([(0, 1), (1, 2)]).unwrap();
    /// assert!(!g.is_cyclic());
    ///
    /// g.add_edge(2, 0).unwrap();
    /// assert!(g.is_cyclic());
    /// ```
    fn is_cyclic(&self) -> bool {
        let mut colour: VertexMap<&Self::V, Colour> = VertexMap::default();
        let mut stack: Vec<(&Self::V, Self::NeighborIter<'_>)> = Vec::new();

        for root in self.vertices() {
            if colour.contains_key(root) {
                continue;
            }
            colour.insert(root, Colour::Gray);
            stack.push((root, self.neighbors_of(root)));

            while let Some((u, neighbors)) = stack.last_mut() {
                let u = *u;
                match neighbors.next() {
                    Some(v) => match colour.get(v) {
                        None => {
                            colour.insert(v, Colour::Gray);
                            stack.push((v, self.neighbors_of(v)));
                        }
                        Some(Colour::Gray) => return true,
                        Some(Colour::Black) => {}
                    },
                    None => {
                        colour.insert(u, Colour::Black);
                        stack.pop();
                    }
                }
            }
        }

        false
    }

    /// Returns an order of all vertices in which every edge points forward, or `None` if the
    /// graph is cyclic.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([("shirt", "tie"), ("tie", "jacket"), ("pants", "jacket")])
    ///     .unwrap();
    /// let order = g.topological_sort().unwrap();
    /// let pos = |x: &str| order.iter().position(|y| *y == x).unwrap();
    ///
    /// assert!(pos("shirt") < pos("tie"));
    /// assert!(pos("tie") < pos("jacket"));
    /// assert!(pos("pants") < pos("jacket"));
    /// ```
    fn topological_sort(&self) -> Option<Vec<Self::V>> {
        if self.is_cyclic() {
            return None;
        }

        Some(
            dfs_finish_order(self)
                .into_iter()
                .rev()
                .cloned()
                .collect_vec(),
        )
    }

    /// Returns *true* if the graph has no directed cycle
    fn is_acyclic(&self) -> bool {
        !self.is_cyclic()
    }
}

impl<G> CycleDetection for G where G: AdjacencyList + GraphType<Dir = Directed> {}

/// Reversal of all edges
pub trait Transpose {
    /// Returns a new graph with the same vertex set and every edge `u -> v` replaced by
    /// `v -> u`. Isolated vertices are kept.
    fn transpose(&self) -> Self;
}

impl<V: Vertex> Transpose for DirectedGraph<V> {
    fn transpose(&self) -> Self {
        let mut transposed = Self::new();
        transposed.add_vertices(self.vertices().cloned());
        for Edge(u, v) in self.edges() {
            transposed.insert_edge(v.clone(), u.clone());
        }
        transposed
    }
}

impl<V: Vertex> Transpose for DiNetwork<V> {
    fn transpose(&self) -> Self {
        let mut transposed = Self::new().with_edge_ordering(self.edge_ordering().clone());
        transposed.add_vertices(self.vertices().cloned());
        for edge in self.edges() {
            transposed.add_weighted_edge(edge.reverse());
        }
        transposed
    }
}
