/*!
# Bipartite Graph Algorithms

Testing undirected graphs for bipartiteness and computing a witness bipartition.

A bipartition is represented by the set of vertices on the **right** side; all other vertices
are on the **left** side.
*/

use std::collections::VecDeque;

use super::*;

/// Side of a vertex in a two-colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Testing and computing bipartitions of undirected graphs.
pub trait BipartiteTest: AdjacencyList + GraphType<Dir = Undirected> {
    /// Tests whether the graph is bipartite by two-colouring every component in BFS order.
    /// Stops at the first edge whose endpoints share a colour. Empty graphs are bipartite.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = Forest::new();
    /// g.connect_path(0..10).unwrap();
    /// assert!(g.is_bipartite());
    ///
    /// let mut net = UnNetwork::new();
    /// net.add_weighted_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
    /// assert!(!net.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        let mut side: VertexMap<&Self::V, Side> = VertexMap::default();
        let mut queue = VecDeque::new();

        for root in self.vertices() {
            if side.contains_key(root) {
                continue;
            }
            side.insert(root, Side::Left);
            queue.push_back(root);

            while let Some(u) = queue.pop_front() {
                let opposite = side[u].opposite();
                for v in self.neighbors_of(u) {
                    match side.get(v) {
                        None => {
                            side.insert(v, opposite);
                            queue.push_back(v);
                        }
                        Some(&s) if s != opposite => return false,
                        Some(_) => {}
                    }
                }
            }
        }

        true
    }

    /// Tests whether `right` (together with its complement) is a valid bipartition, i.e. every
    /// edge has exactly one endpoint in `right`.
    fn is_bipartition(&self, right: &VertexSet<Self::V>) -> bool {
        self.vertices().all(|u| {
            self.neighbors_of(u)
                .all(|v| right.contains(u) != right.contains(v))
        })
    }

    /// Computes the right side of a bipartition, or `None` if the graph is not bipartite.
    ///
    /// Every BFS tree edge places a vertex on the side opposite to its predecessor; the
    /// proposal is verified against all edges afterwards.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = Forest::new();
    /// g.connect_path(0..10).unwrap();
    ///
    /// let right = g.compute_bipartition().unwrap();
    /// assert_eq!(right.len(), 5);
    /// assert!(g.is_bipartition(&right));
    /// ```
    fn compute_bipartition(&self) -> Option<VertexSet<Self::V>> {
        let mut right = VertexSet::default();

        let Some(root) = self.vertices().next() else {
            return Some(right);
        };
        let mut bfs = self.bfs_with_predecessor(root).ok()?;

        loop {
            for PredecessorOf(p, x) in bfs.by_ref() {
                if p != x && !right.contains(&p) {
                    right.insert(x);
                }
            }

            if !bfs.try_restart_at_unvisited() {
                break;
            }
        }

        self.is_bipartition(&right).then_some(right)
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList + GraphType<Dir = Undirected> {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    #[test]
    fn forests_are_bipartite() {
        let g = Forest::from_edges([(0, 1), (1, 2), (3, 4), (4, 5), (6, 7), (7, 8)]).unwrap();
        assert!(g.is_bipartite());

        let right = g.compute_bipartition().unwrap();
        assert!(g.is_bipartition(&right));

        let empty: Forest<u32> = Forest::new();
        assert!(empty.is_bipartite());
        assert_eq!(empty.compute_bipartition(), Some(VertexSet::default()));

        let mut single = Forest::new();
        single.add_vertex('x');
        assert!(single.is_bipartite());
    }

    #[test]
    fn cycles() {
        for n in 3..10u32 {
            let mut net = UnNetwork::new();
            net.add_weighted_edges((0..n).map(|i| (i, (i + 1) % n, 1)));

            assert_eq!(net.is_bipartite(), n % 2 == 0);
            assert_eq!(net.compute_bipartition().is_some(), n % 2 == 0);
        }

        let mut net = UnNetwork::new();
        net.add_edge(0, 0, 1);
        assert!(!net.is_bipartite());
    }

    #[test]
    fn invalid_bipartition() {
        let mut g = Forest::new();
        g.connect_path(0..4u32).unwrap();

        let right: VertexSet<u32> = [0, 1].into_iter().collect();
        assert!(!g.is_bipartition(&right));

        let right: VertexSet<u32> = [1, 3].into_iter().collect();
        assert!(g.is_bipartition(&right));
    }

    #[test]
    fn random_networks_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [4u32, 8, 16] {
            for p in [0.05, 0.1, 0.3] {
                let mut net = UnNetwork::new();
                net.add_weighted_edges(Gnp::new().nodes(n).prob(p).weighted_stream(rng, 1..2));

                let by_colouring = net.is_bipartite();
                let witness = net.compute_bipartition();
                assert_eq!(by_colouring, witness.is_some());

                // no odd closed walk of length 3 may survive in a bipartite graph
                if by_colouring {
                    let vs = net.vertices().copied().collect_vec();
                    for (a, b, c) in vs.iter().tuple_combinations() {
                        assert!(!(net.has_edge(a, b) && net.has_edge(b, c) && net.has_edge(c, a)));
                    }
                }
            }
        }
    }
}
