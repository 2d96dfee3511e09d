/*!
# Maximum Flow

Edmonds–Karp over a residual graph: augmenting paths are found by BFS (fewest arcs first), so
the number of augmentations is bounded by `O(V E)`.

## Residual graph
Every capacity edge `(u, v, c)` becomes a forward arc `u -> v` with capacity `c` and a backward
arc `v -> u` with capacity `0`. Both arcs know each other's index; pushing `b` units along an arc
adds `b` to its flow and subtracts `b` from its partner's, so the residual capacity
`capacity - flow` of the partner grows by `b`. In undirected networks both directions of an
edge carry the full capacity.

## Usage
The quick way is [`MaxFlow::max_flow`]. [`EdmondsKarp`] gives access to the individual
augmenting paths, the flow per edge and a minimum cut:

```
use lgraphs::{prelude::*, algo::*};

let net = DiNetwork::from_weighted_edges([(0, 1, 3), (1, 2, 2), (0, 2, 1)]);
assert_eq!(net.max_flow(&0, &2), Ok(Some(3)));

let mut ek = EdmondsKarp::new(&net, &0, &2).unwrap();
let paths: Vec<_> = ek.by_ref().collect();
assert_eq!(paths[0].vertices, vec![0, 2]);
assert_eq!(paths[0].bottleneck, 1);

assert_eq!(ek.total_flow(), 3);
assert_eq!(ek.flow_on(&1, &2), 2);
assert_eq!(ek.min_cut_source_side().len(), 2);
```
*/

use std::{collections::VecDeque, iter::FusedIterator};

use tracing::{debug, trace};

use super::*;

/// An arc of the residual graph
#[derive(Debug, Clone, Copy)]
struct ResidualArc {
    target: usize,
    capacity: Weight,
    flow: Weight,
    /// Index of the paired arc in the opposite direction
    partner: usize,
    /// *false* for the zero-capacity partner arcs added by the construction
    forward: bool,
}

impl ResidualArc {
    fn residual(&self) -> Weight {
        self.capacity - self.flow
    }
}

/// Residual graph over dense vertex indices
#[derive(Debug, Clone)]
struct ResidualGraph<V: Vertex> {
    labels: Vec<V>,
    index: VertexMap<V, usize>,
    arcs: Vec<ResidualArc>,
    out: Vec<Vec<usize>>,
}

impl<V: Vertex> ResidualGraph<V> {
    fn new<G>(network: &G) -> Self
    where
        G: WeightedAdjacencyList<V = V>,
    {
        let labels: Vec<V> = network.vertices().cloned().collect();
        let index: VertexMap<V, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, u)| (u.clone(), i))
            .collect();

        let mut residual = Self {
            out: vec![Vec::new(); labels.len()],
            arcs: Vec::new(),
            labels,
            index,
        };

        for u in network.vertices() {
            for (v, capacity) in network.weighted_neighbors_of(u) {
                if u != v {
                    let (u, v) = (residual.index[u], residual.index[v]);
                    residual.add_arc(u, v, capacity);
                }
            }
        }

        residual
    }

    fn add_arc(&mut self, u: usize, v: usize, capacity: Weight) {
        let forward = self.arcs.len();
        let backward = forward + 1;

        self.arcs.push(ResidualArc {
            target: v,
            capacity,
            flow: 0,
            partner: backward,
            forward: true,
        });
        self.arcs.push(ResidualArc {
            target: u,
            capacity: 0,
            flow: 0,
            partner: forward,
            forward: false,
        });

        self.out[u].push(forward);
        self.out[v].push(backward);
    }

    fn push(&mut self, arc: usize, amount: Weight) {
        self.arcs[arc].flow += amount;
        let partner = self.arcs[arc].partner;
        self.arcs[partner].flow -= amount;
    }

    /// BFS over arcs with positive residual capacity. Returns for every vertex the arc it was
    /// reached by (`None` for the source and unreached vertices) and whether `sink` was reached.
    fn bfs(&self, source: usize, sink: Option<usize>) -> (Vec<Option<usize>>, Vec<bool>) {
        let mut via = vec![None; self.labels.len()];
        let mut reached = vec![false; self.labels.len()];
        reached[source] = true;

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            if Some(u) == sink {
                break;
            }

            for &a in &self.out[u] {
                let arc = &self.arcs[a];
                if arc.residual() > 0 && !reached[arc.target] {
                    reached[arc.target] = true;
                    via[arc.target] = Some(a);
                    queue.push_back(arc.target);
                }
            }
        }

        (via, reached)
    }
}

/// A single augmentation of the Edmonds–Karp algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath<V> {
    /// Vertices from source to sink
    pub vertices: Vec<V>,
    /// Flow pushed along the path (the minimum residual capacity on it)
    pub bottleneck: Weight,
}

/// Edmonds–Karp solver between a fixed source and sink.
///
/// Iterating yields the augmenting paths in the order they are applied; the iterator ends once
/// the sink is no longer reachable in the residual graph, at which point the flow is maximum.
pub struct EdmondsKarp<V: Vertex> {
    residual: ResidualGraph<V>,
    source: usize,
    sink: usize,
    total: Weight,
    exhausted: bool,
}

impl<V: Vertex> EdmondsKarp<V> {
    /// Builds the residual graph of `network`.
    /// Fails with `VertexNotFound` if `source` or `sink` is absent.
    pub fn new<G>(network: &G, source: &V, sink: &V) -> Result<Self>
    where
        G: WeightedAdjacencyList<V = V>,
    {
        network.require_vertex(source)?;
        network.require_vertex(sink)?;

        let residual = ResidualGraph::new(network);
        let source = residual.index[source];
        let sink = residual.index[sink];

        Ok(Self {
            exhausted: source == sink,
            residual,
            source,
            sink,
            total: 0,
        })
    }

    /// Runs all remaining augmentations and returns the value of the maximum flow
    pub fn max_flow(&mut self) -> Weight {
        self.by_ref().for_each(drop);
        self.total
    }

    /// Flow pushed so far
    pub fn total_flow(&self) -> Weight {
        self.total
    }

    /// Flow currently assigned to the edge `u -> v` (summed over parallel edges). Returns `0`
    /// if there is no such edge.
    pub fn flow_on(&self, u: &V, v: &V) -> Weight {
        let (Some(&u), Some(&v)) = (self.residual.index.get(u), self.residual.index.get(v)) else {
            return 0;
        };

        self.residual.out[u]
            .iter()
            .map(|&a| &self.residual.arcs[a])
            .filter(|arc| arc.forward && arc.target == v)
            .map(|arc| arc.flow)
            .sum()
    }

    /// Vertices reachable from the source in the residual graph. Once the iterator is exhausted
    /// this is the source side of a minimum cut.
    pub fn min_cut_source_side(&self) -> VertexSet<V> {
        let (_, reached) = self.residual.bfs(self.source, None);
        reached
            .into_iter()
            .zip(self.residual.labels.iter())
            .filter_map(|(r, u)| r.then(|| u.clone()))
            .collect()
    }
}

impl<V: Vertex> Iterator for EdmondsKarp<V> {
    type Item = AugmentingPath<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let (via, reached) = self.residual.bfs(self.source, Some(self.sink));
        if !reached[self.sink] {
            self.exhausted = true;
            debug!(flow = self.total, "maximum flow reached");
            return None;
        }

        let mut arcs = Vec::new();
        let mut v = self.sink;
        while let Some(a) = via[v] {
            arcs.push(a);
            v = self.residual.arcs[self.residual.arcs[a].partner].target;
        }
        arcs.reverse();

        let bottleneck = arcs
            .iter()
            .map(|&a| self.residual.arcs[a].residual())
            .min()?;

        for &a in &arcs {
            self.residual.push(a, bottleneck);
        }
        self.total += bottleneck;

        let vertices: Vec<V> = std::iter::once(self.source)
            .chain(arcs.iter().map(|&a| self.residual.arcs[a].target))
            .map(|u| self.residual.labels[u].clone())
            .collect();

        trace!(path = ?vertices, bottleneck, "augmenting path");

        Some(AugmentingPath {
            vertices,
            bottleneck,
        })
    }
}

impl<V: Vertex> FusedIterator for EdmondsKarp<V> {}

pub trait MaxFlow: WeightedAdjacencyList {
    /// Value of a maximum flow from `source` to `sink`, treating edge weights as capacities.
    ///
    /// Returns `Ok(None)` if `source == sink` and fails with `VertexNotFound` if either vertex
    /// is absent.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let net = DiNetwork::from_weighted_edges([
    ///     (0, 1, 16), (0, 2, 13), (1, 2, 10), (1, 3, 12), (2, 1, 4),
    ///     (2, 4, 14), (3, 2, 9), (3, 5, 20), (4, 3, 7), (4, 5, 4),
    /// ]);
    /// assert_eq!(net.max_flow(&0, &5), Ok(Some(23)));
    /// assert_eq!(net.max_flow(&0, &0), Ok(None));
    /// ```
    fn max_flow(&self, source: &Self::V, sink: &Self::V) -> Result<Option<Weight>> {
        self.require_vertex(source)?;
        self.require_vertex(sink)?;
        if source == sink {
            return Ok(None);
        }
        Ok(Some(EdmondsKarp::new(self, source, sink)?.max_flow()))
    }
}

impl<G> MaxFlow for G where G: WeightedAdjacencyList {}
