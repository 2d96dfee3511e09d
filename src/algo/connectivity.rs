use std::iter::FusedIterator;

use itertools::Itertools;
use tracing::debug;

use super::*;

pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Partitions the vertices of an undirected graph into connected components.
    /// Each component lists its vertices in DFS order from an arbitrary root.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Forest::from_edges([(0, 1), (2, 3)]).unwrap();
    /// g.add_vertex(4);
    /// assert_eq!(g.connected_components().len(), 3);
    /// ```
    fn connected_components(&self) -> Vec<Vec<Self::V>>
    where
        Self: GraphType<Dir = Undirected>,
    {
        ConnectedComponents::new(self).collect_vec()
    }

    /// Returns the strongly connected components of a directed graph (Kosaraju).
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([(0, 1), (1, 0), (1, 2)]).unwrap();
    /// let mut sccs = g.strongly_connected_components();
    /// sccs.iter_mut().for_each(|scc| scc.sort());
    /// sccs.sort();
    /// assert_eq!(sccs, vec![vec![0, 1], vec![2]]);
    /// ```
    fn strongly_connected_components(&self) -> Vec<Vec<Self::V>>
    where
        Self: GraphType<Dir = Directed>,
    {
        Kosaraju::new(self).components()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the connected components of an undirected graph.
///
/// All components share one visited set; each unvisited vertex seeds a DFS that yields its
/// component.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    graph: &'a G,
    roots: G::VertexIter<'a>,
    visited: VertexSet<G::V>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            roots: graph.vertices(),
            visited: VertexSet::default(),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    type Item = Vec<G::V>;

    fn next(&mut self) -> Option<Self::Item> {
        let root = self.roots.by_ref().find(|u| !self.visited.contains(*u))?;

        let visited = std::mem::take(&mut self.visited);
        let mut dfs = Dfs::resume(self.graph, root, visited).ok()?;
        let component = dfs.by_ref().collect_vec();
        self.visited = dfs.into_visited();

        Some(component)
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where
    G: AdjacencyList + GraphType<Dir = Undirected>
{
}

/// Returns all vertices ordered by their finishing time in a depth-first search that restarts
/// at every not yet visited vertex. Uses an explicit stack of neighbor iterators.
pub(crate) fn dfs_finish_order<G: AdjacencyList>(graph: &G) -> Vec<&G::V> {
    let mut visited: VertexSet<&G::V> = VertexSet::default();
    let mut order = Vec::with_capacity(graph.vertex_count());
    let mut stack: Vec<(&G::V, G::NeighborIter<'_>)> = Vec::new();

    for root in graph.vertices() {
        if !visited.insert(root) {
            continue;
        }
        stack.push((root, graph.neighbors_of(root)));

        while let Some((u, neighbors)) = stack.last_mut() {
            let u = *u;
            match neighbors.find(|v| !visited.contains(*v)) {
                Some(v) => {
                    visited.insert(v);
                    stack.push((v, graph.neighbors_of(v)));
                }
                None => {
                    order.push(u);
                    stack.pop();
                }
            }
        }
    }

    order
}

/// Kosaraju's algorithm for strongly connected components.
///
/// The first pass records the DFS finishing order on the graph. The second pass pops vertices
/// in reverse finishing order and runs a DFS on the transposed graph; every vertex not yet
/// assigned seeds a new component. The transpose is materialized once as a reversed adjacency
/// snapshot of references into the graph.
pub struct Kosaraju<'a, G: AdjacencyList> {
    graph: &'a G,
}

impl<'a, G> Kosaraju<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Directed>,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Computes all strongly connected components. Every vertex is in exactly one component;
    /// components are reported in topological order of the condensation.
    pub fn components(&self) -> Vec<Vec<G::V>> {
        let order = dfs_finish_order(self.graph);

        let mut reversed: VertexMap<&G::V, Vec<&G::V>> = VertexMap::default();
        for u in self.graph.vertices() {
            for v in self.graph.neighbors_of(u) {
                reversed.entry(v).or_default().push(u);
            }
        }

        let mut assigned: VertexSet<&G::V> = VertexSet::default();
        let mut components = Vec::new();

        for &root in order.iter().rev() {
            if !assigned.insert(root) {
                continue;
            }

            let mut component = Vec::new();
            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                component.push(u.clone());
                for &v in reversed.get(u).into_iter().flatten() {
                    if assigned.insert(v) {
                        stack.push(v);
                    }
                }
            }

            components.push(component);
        }

        debug!(
            vertices = self.graph.vertex_count(),
            components = components.len(),
            "strongly connected components computed"
        );

        components
    }
}

#[cfg(test)]
pub mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    fn normalized<V: Ord + Clone>(mut parts: Vec<Vec<V>>) -> Vec<Vec<V>> {
        parts.iter_mut().for_each(|p| p.sort());
        parts.sort();
        parts
    }

    #[test]
    fn cc() {
        let mut g = Forest::from_edges([(0, 1), (1, 2), (3, 4), (4, 5), (6, 7), (7, 8)]).unwrap();
        g.add_vertex(9);

        assert_eq!(
            normalized(g.connected_components()),
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]
        );

        let empty: Forest<u32> = Forest::new();
        assert!(empty.connected_components().is_empty());
    }

    #[test]
    fn scc() {
        let graph = DirectedGraph::from_edges([
            (0, 1),
            (1, 2),
            (1, 4),
            (1, 5),
            (2, 6),
            (2, 3),
            (3, 2),
            (3, 7),
            (4, 0),
            (4, 5),
            (5, 6),
            (6, 5),
            (7, 3),
            (7, 6),
        ])
        .unwrap();

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.len(), 3);
        assert_eq!(
            normalized(sccs),
            vec![vec![0, 1, 4], vec![2, 3, 7], vec![5, 6]]
        );
    }

    #[test]
    fn scc_topological_component_order() {
        let graph = DirectedGraph::from_edges([(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]).unwrap();
        let sccs = Kosaraju::new(&graph).components();
        assert_eq!(normalized(vec![sccs[0].clone()]), vec![vec![0, 1]]);
        assert_eq!(normalized(vec![sccs[1].clone()]), vec![vec![2, 3]]);
    }

    #[test]
    fn scc_singletons_on_dag() {
        let mut graph = DirectedGraph::new();
        graph.connect_path(0..6u32).unwrap();
        graph.add_vertex(10);
        assert_eq!(graph.strongly_connected_components().len(), 7);
    }

    #[test]
    fn scc_matches_reachability_closure() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);

        for n in [5u32, 12, 25] {
            for p in [0.05, 0.15, 0.3] {
                let graph = DirectedGraph::from_edges(Gnp::new().nodes(n).prob(p).stream(rng))
                    .unwrap();
                let sccs = graph.strongly_connected_components();

                let mut component_of = VertexMap::default();
                for (i, scc) in sccs.iter().enumerate() {
                    for u in scc {
                        assert!(component_of.insert(*u, i).is_none());
                    }
                }
                assert_eq!(component_of.len(), graph.vertex_count());

                for u in graph.vertices() {
                    for v in graph.vertices() {
                        let mutual = graph.is_reachable(u, v).unwrap()
                            && graph.is_reachable(v, u).unwrap();
                        assert_eq!(mutual, component_of[u] == component_of[v]);
                    }
                }
            }
        }
    }
}
