/*!
# Shortest Paths

[`ShortestPath::shortest_path`] is available on every graph type:

- unweighted graphs ([`DirectedGraph`], [`Forest`]) report the number of edges on a shortest
  path (BFS levels),
- networks report the minimum weight sum, computed by the Shortest Path Faster Algorithm
  ([`Spfa`]), a queue-based Bellman-Ford variant.

Unreachable targets are reported as `Ok(None)`; absent endpoints fail with `VertexNotFound`.
Weighted distances of [`INFINITE_WEIGHT`] or more are indistinguishable from unreachable
targets and are reported as `Ok(None)` as well.
*/

use std::collections::VecDeque;

use tracing::trace;

use super::*;

pub trait ShortestPath: GraphVertexOrder {
    /// Length type of a path
    type Distance;

    /// Length of a shortest path from `u` to `v`; `Ok(Some(0))` if `u == v` and `Ok(None)` if
    /// `v` is not reachable from `u`.
    ///
    /// On networks a path whose weight reaches [`INFINITE_WEIGHT`] counts as unreachable.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([(1, 0), (0, 2), (2, 1), (0, 3), (3, 4)]).unwrap();
    /// assert_eq!(g.shortest_path(&0, &4), Ok(Some(2)));
    /// assert_eq!(g.shortest_path(&4, &0), Ok(None));
    ///
    /// let net = UnNetwork::from_weighted_edges([(0, 1, 4), (1, 2, 1), (0, 2, 7)]);
    /// assert_eq!(net.shortest_path(&0, &2), Ok(Some(5)));
    /// ```
    fn shortest_path(&self, u: &Self::V, v: &Self::V) -> Result<Option<Self::Distance>>;
}

impl<V: Vertex> ShortestPath for DirectedGraph<V> {
    type Distance = usize;

    fn shortest_path(&self, u: &V, v: &V) -> Result<Option<usize>> {
        self.hop_distance(u, v)
    }
}

impl<V: Vertex> ShortestPath for Forest<V> {
    type Distance = usize;

    fn shortest_path(&self, u: &V, v: &V) -> Result<Option<usize>> {
        self.hop_distance(u, v)
    }
}

impl<V: Vertex, D: GraphDir> ShortestPath for Network<V, D> {
    type Distance = Weight;

    fn shortest_path(&self, u: &V, v: &V) -> Result<Option<Weight>> {
        self.require_vertex(v)?;
        let distances = Spfa::new(self).distances_from(u)?;

        Ok(distances
            .get(v)
            .copied()
            .filter(|&d| d < INFINITE_WEIGHT))
    }
}

/// Single-source distances in weighted graphs
pub trait SingleSourceDistances: WeightedAdjacencyList {
    /// Distance from `source` to every vertex. Unreachable vertices keep [`INFINITE_WEIGHT`].
    /// Fails with `VertexNotFound` if `source` is absent.
    ///
    /// All edge weights must be non-negative; negative cycles are not detected.
    fn distances_from(&self, source: &Self::V) -> Result<VertexMap<Self::V, Weight>> {
        Spfa::new(self).distances_from(source)
    }
}

impl<G> SingleSourceDistances for G where G: WeightedAdjacencyList {}

/// Shortest Path Faster Algorithm.
///
/// All vertices start at [`INFINITE_WEIGHT`], the source at `0`. A FIFO queue holds vertices
/// whose distance improved; popping a vertex relaxes its outgoing edges and enqueues every
/// improved neighbor that is not already queued.
pub struct Spfa<'a, G: WeightedAdjacencyList> {
    graph: &'a G,
}

impl<'a, G: WeightedAdjacencyList> Spfa<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Runs the relaxation loop from `source` until the queue drains
    pub fn distances_from(&self, source: &G::V) -> Result<VertexMap<G::V, Weight>> {
        self.graph.require_vertex(source)?;

        let mut distance: VertexMap<G::V, Weight> = self
            .graph
            .vertices()
            .map(|u| (u.clone(), INFINITE_WEIGHT))
            .collect();
        distance.insert(source.clone(), 0);

        let mut queue = VecDeque::from([source.clone()]);
        let mut queued: VertexSet<G::V> = VertexSet::default();
        queued.insert(source.clone());

        while let Some(u) = queue.pop_front() {
            queued.remove(&u);
            let du = distance.get(&u).copied().unwrap_or(INFINITE_WEIGHT);

            for (v, w) in self.graph.weighted_neighbors_of(&u) {
                let Some(candidate) = du.checked_add(w) else {
                    continue;
                };
                let dv = distance.get(v).copied().unwrap_or(INFINITE_WEIGHT);
                if candidate >= dv {
                    continue;
                }

                trace!(from = ?u, to = ?v, distance = candidate, "relaxed edge");
                distance.insert(v.clone(), candidate);
                if queued.insert(v.clone()) {
                    queue.push_back(v.clone());
                }
            }
        }

        Ok(distance)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
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
    fn undirected_distances() {
        let net = clrs();
        let dist = net.distances_from(&0).unwrap();

        let expected = [0, 4, 12, 19, 21, 11, 9, 8, 14];
        for (v, d) in expected.into_iter().enumerate() {
            assert_eq!(dist[&(v as u32)], d, "distance to {v}");
            assert_eq!(net.shortest_path(&0, &(v as u32)), Ok(Some(d)));
        }
    }

    #[test]
    fn unreachable_and_absent() {
        let mut net = DiNetwork::from_weighted_edges([(0, 1, 3), (1, 2, 3)]);
        net.add_vertex(9);

        assert_eq!(net.shortest_path(&2, &0), Ok(None));
        assert_eq!(net.shortest_path(&0, &9), Ok(None));
        assert_eq!(net.shortest_path(&9, &9), Ok(Some(0)));
        assert_eq!(net.shortest_path(&0, &5), Err(GraphError::VertexNotFound));
        assert_eq!(net.shortest_path(&5, &0), Err(GraphError::VertexNotFound));

        let dist = net.distances_from(&1).unwrap();
        assert_eq!(dist[&0], INFINITE_WEIGHT);
        assert_eq!(dist[&2], 3);
        assert_eq!(dist.len(), 4);
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        let net = DiNetwork::from_weighted_edges([(0, 1, 1), (1, 2, Weight::MAX), (0, 3, 5)]);
        assert_eq!(net.shortest_path(&0, &2), Ok(None));
        assert_eq!(net.shortest_path(&0, &3), Ok(Some(5)));
        assert_eq!(net.shortest_path(&1, &2), Ok(None));

        let dist = net.distances_from(&0).unwrap();
        assert_eq!(dist[&1], 1);
        assert_eq!(dist[&2], INFINITE_WEIGHT);

        // distances at or beyond the sentinel are indistinguishable from unreachable
        let net = DiNetwork::from_weighted_edges([(0, 1, INFINITE_WEIGHT - 1), (1, 2, 1)]);
        assert_eq!(net.shortest_path(&0, &1), Ok(Some(INFINITE_WEIGHT - 1)));
        assert_eq!(net.shortest_path(&0, &2), Ok(None));
    }

    #[test]
    fn parallel_edges_take_lighter_weight() {
        let net = DiNetwork::from_weighted_edges([(0, 1, 9), (0, 1, 2), (1, 2, 1)]);
        assert_eq!(net.shortest_path(&0, &2), Ok(Some(3)));
    }

    #[test]
    fn unweighted_graphs_count_hops() {
        let g = DirectedGraph::from_edges([(1, 0), (0, 2), (2, 1), (0, 3), (3, 4)]).unwrap();
        assert_eq!(g.shortest_path(&0, &4), Ok(Some(2)));
        assert_eq!(g.shortest_path(&0, &0), Ok(Some(0)));
        assert_eq!(g.shortest_path(&4, &1), Ok(None));

        let f = Forest::from_edges([(0, 1), (1, 2), (3, 4)]).unwrap();
        assert_eq!(f.shortest_path(&2, &0), Ok(Some(2)));
        assert_eq!(f.shortest_path(&0, &4), Ok(None));
    }

    #[test]
    fn unit_weights_match_bfs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        for n in [5u32, 15, 40] {
            for p in [0.05, 0.1, 0.25] {
                let edges = Gnp::new().nodes(n).prob(p).generate(rng);
                let graph = DirectedGraph::from_edges(edges.iter().cloned()).unwrap();
                let net = DiNetwork::from_weighted_edges(
                    edges.iter().map(|Edge(u, v)| WeightedEdge(*u, *v, 1)),
                );

                for u in graph.vertices() {
                    let dist = net.distances_from(u).unwrap();
                    for v in graph.vertices() {
                        let hops = graph.shortest_path(u, v).unwrap();
                        assert_eq!(hops.map(|h| h as Weight), net.shortest_path(u, v).unwrap());
                        assert_eq!(
                            hops.map_or(INFINITE_WEIGHT, |h| h as Weight),
                            dist[v]
                        );
                    }
                }
            }
        }
    }
}
