/*!
# Substructure Generators

Plants common motifs into an existing unweighted graph:

- **Paths**
- **Cycles**
- **Stars**
- **Cliques**

Each helper inserts its edges in order and stops at the first rejected insertion, e.g. a
[`Forest`] refusing an edge that would close a cycle.

```rust
use lgraphs::{prelude::*, gens::*};

let mut g = DirectedGraph::new();
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();

assert_eq!(g.edge_count(), 5);
assert!(g.has_edge(&4, &2));
```
*/

use itertools::Itertools;

use super::*;

/// Creating additional substructures inside an already existing graph
pub trait GeneratorSubstructures: GraphEdgeEditing + GraphType {
    /// Connects consecutive vertices with an edge.
    ///
    /// # Example
    /// ```rust
    /// use lgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = Forest::new();
    /// g.connect_path(["a", "b", "c"]).unwrap();
    ///
    /// assert!(g.has_edge(&"a", &"b"));
    /// assert!(g.has_edge(&"c", &"b"));
    /// ```
    fn connect_path<P>(&mut self, vertices_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Self::V>,
    {
        for (u, v) in vertices_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Connects consecutive vertices and additionally the last vertex back to the first.
    /// A single vertex receives a self-loop.
    fn connect_cycle<C>(&mut self, vertices_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Self::V>,
    {
        let mut iter = vertices_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first.clone();
            for cur in iter {
                self.add_edge(prev, cur.clone())?;
                prev = cur;
            }

            self.add_edge(prev, first)?;
        }
        Ok(())
    }

    /// Connects `center` to every leaf (`center -> leaf` in directed graphs)
    fn connect_star<L>(&mut self, center: Self::V, leaves: L) -> Result<()>
    where
        L: IntoIterator<Item = Self::V>,
    {
        for leaf in leaves {
            self.add_edge(center.clone(), leaf)?;
        }
        Ok(())
    }

    /// Connects every pair of the given vertices. Undirected graphs receive one edge per pair;
    /// self-loops are added only if `with_loops` is set.
    fn connect_clique(&mut self, vertices: &[Self::V], with_loops: bool) -> Result<()> {
        for (i, u) in vertices.iter().enumerate() {
            for (j, v) in vertices.iter().enumerate() {
                if (i == j && !with_loops) || (self.is_undirected() && j < i) {
                    continue;
                }
                self.add_edge(u.clone(), v.clone())?;
            }
        }
        Ok(())
    }
}

impl<G> GeneratorSubstructures for G where G: GraphEdgeEditing + GraphType {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g: DirectedGraph<u32> = DirectedGraph::new();
            g.connect_path([]).unwrap();
            assert_eq!(g.edge_count(), 0);
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_path([1]).unwrap();
            assert_eq!(g.edge_count(), 0);
            assert!(g.is_empty());
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_path([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.edges().iter().cloned().sorted().collect_vec(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = DirectedGraph::new();
            g.connect_cycle([1]).unwrap();
            assert_eq!(g.edge_count(), 1);
            assert!(g.has_edge(&1, &1));
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_cycle([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.edges().iter().cloned().sorted().collect_vec(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1), Edge(4, 0)]
            );
        }

        {
            let mut g = Forest::new();
            assert_eq!(
                g.connect_cycle([0, 1, 2]),
                Err(GraphError::CycleViolation)
            );
            assert_eq!(g.edge_count(), 2);
        }
    }

    #[test]
    fn test_connect_star() {
        let mut g = Forest::new();
        g.connect_star(0, 1..5).unwrap();
        assert_eq!(g.degree(&0), Ok(4));
        assert_eq!(g.degree(&3), Ok(1));
        assert_eq!(g.number_of_trees(), 1);
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g = DirectedGraph::new();
            g.connect_clique(&[1, 2, 4], false).unwrap();
            assert_eq!(g.edge_count(), 6);
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_clique(&[1, 2, 4], true).unwrap();
            assert_eq!(g.edge_count(), 9);
        }

        {
            let mut g = DirectedGraph::new();
            g.connect_clique(&[7], false).unwrap();
            assert!(g.is_empty());
        }
    }
}
