/*!
# Minimum Spanning Trees

Kruskal's algorithm over undirected networks. Edges are stably sorted by an [`EdgeOrdering`]
and accepted whenever they join two different components of a [`DisjointSetUnion`]. On a
disconnected network the result is a spanning forest.

```
use lgraphs::{prelude::*, algo::*};

let net = UnNetwork::from_weighted_edges([(0, 1, 1), (1, 2, 2), (0, 2, 3)]);

let mst = net.spanning_tree().unwrap();
assert_eq!(mst.edge_sum(), 3);

let max = Kruskal::new()
    .ordering(EdgeOrdering::by_weight_descending())
    .run(&net)
    .unwrap();
assert_eq!(max.edge_sum(), 5);
```
*/

use tracing::{debug, trace};

use super::*;
use crate::utils::DisjointSetUnion;

/// Configurable Kruskal run. Without an explicit ordering the network's own
/// [`Network::edge_ordering`] is used.
#[derive(Debug, Clone)]
pub struct Kruskal<V> {
    ordering: Option<EdgeOrdering<V>>,
}

impl<V> Default for Kruskal<V> {
    fn default() -> Self {
        Self { ordering: None }
    }
}

impl<V: Vertex> Kruskal<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts edges by `ordering` instead of the network's ordering
    pub fn set_ordering(&mut self, ordering: EdgeOrdering<V>) {
        self.ordering = Some(ordering);
    }

    /// Builder variant of [`Kruskal::set_ordering`]
    pub fn ordering(mut self, ordering: EdgeOrdering<V>) -> Self {
        self.set_ordering(ordering);
        self
    }

    /// Computes the spanning tree (forest) of `network`.
    ///
    /// Returns `None` if the network is directed or has no edges. The tree contains every vertex
    /// of `network` and inherits its edge ordering.
    pub fn run<D: GraphDir>(&self, network: &Network<V, D>) -> Option<Network<V, D>> {
        if network.is_directed() || network.is_edgeless() {
            return None;
        }

        let ordering = self
            .ordering
            .as_ref()
            .unwrap_or_else(|| network.edge_ordering());
        let edges = network.edges_sorted(ordering);

        let mut components: DisjointSetUnion<V> = network.vertices().cloned().collect();
        let mut tree = Network::new().with_edge_ordering(network.edge_ordering().clone());
        tree.add_vertices(network.vertices().cloned());

        let target = network.vertex_count() - 1;
        let mut accepted = 0;
        for edge in edges {
            if accepted == target {
                break;
            }
            if !components.union(edge.source(), edge.target()) {
                continue;
            }

            trace!(edge = ?edge, "accepted spanning tree edge");
            tree.add_weighted_edge(edge);
            accepted += 1;
        }

        debug!(
            vertices = network.vertex_count(),
            edges = accepted,
            weight = tree.edge_sum(),
            "spanning tree computed"
        );

        Some(tree)
    }
}

impl<V: Vertex, D: GraphDir> Network<V, D> {
    /// Spanning tree under the network's edge ordering (minimum spanning tree by default).
    /// `None` for directed or edgeless networks.
    pub fn spanning_tree(&self) -> Option<Self> {
        Kruskal::new().run(self)
    }

    /// Spanning tree under an explicitly given edge ordering
    pub fn spanning_tree_by(&self, ordering: &EdgeOrdering<V>) -> Option<Self> {
        Kruskal::new().ordering(ordering.clone()).run(self)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    fn clrs() -> UnNetwork<u32> {
        UnNetwork::from_weighted_edges([
            (0, 1, 4),
            (0, 7, 8),
            (1, 2, 8),
            (1, 7, 11),
            (2, 3, 7),
            (2, 8, 2),
            (2, 5, 4),
            (3, 4, 9),
            (3, 5, 14),
            (4, 5, 10),
            (5, 6, 2),
            (6, 7, 1),
            (6, 8, 6),
            (7, 8, 7),
        ])
    }

    #[test]
    fn minimum_spanning_tree() {
        let net = clrs();
        assert_eq!(net.edge_sum(), 93);

        let mst = net.spanning_tree().unwrap();
        assert_eq!(mst.edge_sum(), 37);
        assert_eq!(mst.edge_count(), 8);
        assert_eq!(mst.vertex_count(), 9);
        assert!(mst.is_undirected());

        let max = net
            .spanning_tree_by(&EdgeOrdering::by_weight_descending())
            .unwrap();
        assert_eq!(max.edge_count(), 8);
        assert!(max.edge_sum() > mst.edge_sum());
    }

    #[test]
    fn not_applicable() {
        let directed = DiNetwork::from_weighted_edges([(0, 1, 1)]);
        assert!(directed.spanning_tree().is_none());

        let mut edgeless: UnNetwork<u32> = UnNetwork::new();
        assert!(edgeless.spanning_tree().is_none());
        edgeless.add_vertex(3);
        assert!(edgeless.spanning_tree().is_none());
    }

    #[test]
    fn spanning_forest_keeps_isolated_vertices() {
        let mut net = UnNetwork::from_weighted_edges([(0, 1, 5), (2, 3, 1), (3, 4, 2), (2, 4, 9)]);
        net.add_vertex(10);

        let forest = net.spanning_tree().unwrap();
        assert_eq!(forest.vertex_count(), 6);
        assert_eq!(forest.edge_count(), 3);
        assert_eq!(forest.edge_sum(), 8);
        assert!(forest.contains(&10));
    }

    #[test]
    fn network_ordering_is_used() {
        let net = UnNetwork::from_weighted_edges([(0, 1, 1), (1, 2, 2), (0, 2, 3)])
            .with_edge_ordering(EdgeOrdering::by_weight_descending());
        assert_eq!(net.spanning_tree().unwrap().edge_sum(), 5);

        // ties are resolved by insertion order
        let net = UnNetwork::from_weighted_edges([(0, 1, 1), (1, 2, 1), (0, 2, 1)]);
        let tree = net.spanning_tree().unwrap();
        assert!(tree.has_weighted_edge(&0, &1, 1));
        assert!(tree.has_weighted_edge(&1, &2, 1));
        assert!(!tree.has_weighted_edge(&0, &2, 1));
    }

    /// Minimum weight over all spanning trees by enumerating edge subsets of size `n - 1`
    fn brute_force_minimum(net: &UnNetwork<u32>) -> Weight {
        let n = net.vertex_count();
        let edges = net.logical_edges().cloned().collect_vec();

        edges
            .iter()
            .combinations(n - 1)
            .filter(|subset| {
                let mut dsu = DisjointSetUnion::new();
                subset.iter().all(|e| dsu.union(e.source(), e.target()))
            })
            .map(|subset| subset.iter().map(|e| e.weight()).sum::<Weight>())
            .min()
            .unwrap_or(0)
    }

    #[test]
    fn matches_exhaustive_search() {
        let rng = &mut Pcg64Mcg::seed_from_u64(99);

        for _ in 0..30 {
            let mut net = UnNetwork::new();
            for (u, v) in (0..6u32).tuple_windows() {
                net.add_edge(u, v, rng.random_range(1..20));
            }
            net.add_weighted_edges(Gnp::new().nodes(6).prob(0.3).weighted_stream(rng, 1..20));

            let mst = net.spanning_tree().unwrap();
            assert_eq!(mst.edge_count(), 5);
            assert_eq!(mst.edge_sum(), brute_force_minimum(&net));
        }
    }
}
