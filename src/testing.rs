#[cfg(test)]
use crate::{ops::*, repr::*};

/// Uniform edge insertion/removal for the invariant tests below. Networks use weight `1`, so
/// every test edge is a single adjacency entry.
#[cfg(test)]
pub(crate) trait EditForTest {
    /// Returns *true* if the edge was newly inserted
    fn insert_for_test(&mut self, u: u32, v: u32) -> bool;

    /// Returns *true* if the edge existed
    fn remove_for_test(&mut self, u: u32, v: u32) -> bool;
}

#[cfg(test)]
impl EditForTest for DirectedGraph<u32> {
    fn insert_for_test(&mut self, u: u32, v: u32) -> bool {
        matches!(self.add_edge(u, v), Ok(true))
    }

    fn remove_for_test(&mut self, u: u32, v: u32) -> bool {
        self.remove_edge(&u, &v)
    }
}

#[cfg(test)]
impl EditForTest for Forest<u32> {
    fn insert_for_test(&mut self, u: u32, v: u32) -> bool {
        matches!(self.add_edge(u, v), Ok(true))
    }

    fn remove_for_test(&mut self, u: u32, v: u32) -> bool {
        self.remove_edge(&u, &v)
    }
}

#[cfg(test)]
impl<D: GraphDir> EditForTest for Network<u32, D> {
    fn insert_for_test(&mut self, u: u32, v: u32) -> bool {
        self.add_edge(u, v, 1)
    }

    fn remove_for_test(&mut self, u: u32, v: u32) -> bool {
        self.remove_edge(&u, &v, 1)
    }
}

/// Every graph should keep its vertex set, adjacency index and edge list consistent under
/// random insertions and removals. Checks run against a `BTreeMap` reference adjacency.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use std::collections::{BTreeMap, BTreeSet};

            use crate::{edge::*, error::*, ops::*, repr::*, testing::*};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            type Reference = BTreeMap<u32, BTreeSet<u32>>;

            /// Creates a list of `m_ub` random vertex pairs over `0..n` (duplicates included)
            fn random_edges<R: Rng>(rng: &mut R, n: u32, m_ub: u32) -> Vec<(u32, u32)> {
                (0..m_ub)
                    .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            /// Inserts all pairs and mirrors every accepted edge in the reference
            fn build(edges: &[(u32, u32)]) -> ($graph, Reference) {
                let mut graph = <$graph>::new();
                let mut reference = Reference::new();

                for &(u, v) in edges {
                    let known = reference.get(&u).is_some_and(|nbs| nbs.contains(&v));
                    if graph.insert_for_test(u, v) {
                        assert!(!known);
                        reference.entry(u).or_default().insert(v);
                        reference.entry(v).or_default();
                        if $undirected {
                            reference.entry(v).or_default().insert(u);
                        }
                    }
                }

                (graph, reference)
            }

            fn logical_edge_count(reference: &Reference) -> usize {
                let entries: usize = reference.values().map(|nbs| nbs.len()).sum();
                if $undirected {
                    let loops = reference.iter().filter(|(u, nbs)| nbs.contains(u)).count();
                    (entries - loops) / 2 + loops
                } else {
                    entries
                }
            }

            fn assert_consistent(graph: &$graph, reference: &Reference) {
                assert_eq!(graph.vertex_count(), reference.len());
                assert_eq!(graph.edge_count(), logical_edge_count(reference));
                assert_eq!(
                    graph.edges().len(),
                    reference.values().map(|nbs| nbs.len()).sum::<usize>()
                );

                for (u, nbs) in reference {
                    assert!(graph.contains(u));
                    assert_eq!(
                        graph.neighbors_of(u).copied().sorted().collect_vec(),
                        nbs.iter().copied().collect_vec()
                    );
                    assert_eq!(graph.degree(u), Ok(nbs.len()));
                    assert_eq!(graph.adjacency_list()[u].num_of_neighbors(), nbs.len());
                }

                for e in graph.edges() {
                    assert!(graph.has_edge(e.source(), e.target()));
                }
            }

            $(
                test_graph_ops!($graph, $undirected: $trait);
            )*
        }
    };
    ($graph:ty, $undirected:literal: GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = <$graph>::new();

            assert!(graph.is_empty());
            assert!(graph.is_edgeless());
            assert_eq!(graph.vertices().count(), 0);
            assert_eq!(graph.is_directed(), !$undirected);
        }
    };
    ($graph:ty, $undirected:literal: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [5u32, 20, 50] {
                for m_ub in [n, n * 3] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub);
                        let (graph, reference) = build(&edges);
                        assert_consistent(&graph, &reference);

                        assert_eq!(graph.degree(&n), Err(GraphError::VertexNotFound));
                        assert_eq!(graph.neighbors_of(&n).count(), 0);
                    }
                }
            }
        }
    };
    ($graph:ty, $undirected:literal: GraphEdgeEditing) => {
        test_graph_ops!($graph, $undirected: EdgeEditing);
    };
    ($graph:ty, $undirected:literal: WeightedGraphEditing) => {
        test_graph_ops!($graph, $undirected: EdgeEditing);
    };
    ($graph:ty, $undirected:literal: EdgeEditing) => {
        #[test]
        fn test_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [5u32, 20, 50] {
                for m_ub in [n, n * 3] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub);
                        let (mut graph, mut reference) = build(&edges);

                        for _ in 0..m_ub {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            let known = reference.get(&u).is_some_and(|nbs| nbs.contains(&v));
                            assert_eq!(graph.remove_for_test(u, v), known);

                            if known {
                                reference.entry(u).or_default().remove(&v);
                                if $undirected {
                                    reference.entry(v).or_default().remove(&u);
                                }
                            }

                            assert_consistent(&graph, &reference);
                        }
                    }
                }
            }
        }
    };
    ($graph:ty, $undirected:literal: GraphVertexEditing) => {
        #[test]
        fn test_vertex_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [5u32, 20, 50] {
                for m_ub in [n, n * 3] {
                    for _ in 0..5 {
                        let edges = random_edges(rng, n, m_ub);
                        let (mut graph, mut reference) = build(&edges);

                        assert!(graph.add_vertex(n));
                        assert!(!graph.add_vertex(n));
                        reference.insert(n, BTreeSet::new());

                        for _ in 0..n / 2 {
                            let u = rng.random_range(0..=n);

                            if reference.remove(&u).is_some() {
                                assert_eq!(graph.remove_vertex(&u), Ok(()));
                                for nbs in reference.values_mut() {
                                    nbs.remove(&u);
                                }
                            } else {
                                assert_eq!(graph.remove_vertex(&u), Err(GraphError::VertexNotFound));
                            }

                            assert!(!graph.contains(&u));
                            assert!(graph.edges().iter().all(|e| !e.touches(&u)));
                            assert_consistent(&graph, &reference);
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
