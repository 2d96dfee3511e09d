/*!
Graph traversal iterators and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking).
- The `TraversalTree` extension turning a predecessor-tracking traversal into parent and
  depth maps.
- A high-level `Traversal` trait that exposes traversals, reachability and hop distances
  directly as methods on graph data structures.

All iterators are lazy: vertices are discovered only as far as the caller advances.
Vertices are marked visited on discovery, so every reachable vertex is yielded exactly once.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **vertex currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
///
/// Two implementations are provided:
/// - `V` itself: stores only the vertex (no predecessor information).
/// - [`PredecessorOf<V>`]: stores `(predecessor, vertex)` pairs.
pub trait SequencedItem<V>: Clone {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: V, item: V) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: V) -> Self;

    /// Returns the vertex represented by this item.
    fn item(&self) -> &V;

    /// Returns the predecessor of this vertex, if any.
    fn predecessor(&self) -> Option<&V>;

    /// Returns a pair `(predecessor, item)`
    fn predecessor_with_item(&self) -> (Option<&V>, &V) {
        (self.predecessor(), self.item())
    }
}

impl<V: Vertex> SequencedItem<V> for V {
    fn new_with_predecessor(_: V, item: V) -> Self {
        item
    }
    fn new_without_predecessor(item: V) -> Self {
        item
    }
    fn item(&self) -> &V {
        self
    }
    fn predecessor(&self) -> Option<&V> {
        None
    }
}

/// Compact representation of `(predecessor, vertex)` used for
/// traversals with parent tracking.
///
/// The absence of a predecessor (the root) is encoded by
/// setting both entries to the same vertex.
///
/// Not `Hash`, hence never a [`Vertex`] itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorOf<V>(pub V, pub V);

impl<V: Vertex> SequencedItem<V> for PredecessorOf<V> {
    fn new_with_predecessor(predecessor: V, item: V) -> Self {
        PredecessorOf(predecessor, item)
    }
    fn new_without_predecessor(item: V) -> Self {
        PredecessorOf(item.clone(), item)
    }
    fn item(&self) -> &V {
        &self.1
    }
    fn predecessor(&self) -> Option<&V> {
        if self.0 == self.1 { None } else { Some(&self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait VertexSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> VertexSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> VertexSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of vertices to visit and
/// the set of discovered vertices. Parameterized by the container type for the
/// frontier and the type of items yielded (either `V` or [`PredecessorOf<V>`]).
///
/// The iterator borrows the graph, so the graph cannot be mutated while a
/// traversal is alive.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: VertexSequencer<I>,
    I: SequencedItem<G::V>,
{
    graph: &'a G,
    visited: VertexSet<G::V>,
    sequencer: S,
    stop_at: Option<G::V>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator visiting vertices in breadth-first order.
pub type Bfs<'a, G> =
    TraversalSearch<'a, G, VecDeque<<G as GraphVertexOrder>::V>, <G as GraphVertexOrder>::V>;

/// A DFS traversal iterator visiting vertices in depth-first order.
pub type Dfs<'a, G> =
    TraversalSearch<'a, G, Vec<<G as GraphVertexOrder>::V>, <G as GraphVertexOrder>::V>;

/// A BFS traversal iterator that records predecessor information.
pub type BfsWithPredecessor<'a, G> = TraversalSearch<
    'a,
    G,
    VecDeque<PredecessorOf<<G as GraphVertexOrder>::V>>,
    PredecessorOf<<G as GraphVertexOrder>::V>,
>;

/// A DFS traversal iterator that records predecessor information.
pub type DfsWithPredecessor<'a, G> = TraversalSearch<
    'a,
    G,
    Vec<PredecessorOf<<G as GraphVertexOrder>::V>>,
    PredecessorOf<<G as GraphVertexOrder>::V>,
>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: VertexSequencer<I>,
    I: SequencedItem<G::V>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at.as_ref() == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            let graph = self.graph;
            for v in graph.neighbors_of(u) {
                if !self.visited.contains(v) {
                    self.visited.insert(v.clone());
                    self.sequencer
                        .push(I::new_with_predecessor(u.clone(), v.clone()));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.sequencer.cardinality();
        (
            pending,
            Some(
                (pending + self.graph.vertex_count())
                    .saturating_sub(self.visited.len())
                    .max(pending),
            ),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: VertexSequencer<I>,
    I: SequencedItem<G::V>,
{
    /// Creates a new traversal iterator starting from `start`.
    /// Fails with `VertexNotFound` if `start` is not a vertex of `graph`.
    pub fn new(graph: &'a G, start: &G::V) -> Result<Self> {
        Self::resume(graph, start, VertexSet::default())
    }

    /// Creates a traversal iterator starting from `start` that treats all vertices in `visited`
    /// as already explored. Together with [`TraversalSearch::into_visited`] this lets several
    /// searches share one visited set.
    pub fn resume(graph: &'a G, start: &G::V, mut visited: VertexSet<G::V>) -> Result<Self> {
        graph.require_vertex(start)?;
        visited.insert(start.clone());
        Ok(Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start.clone())),
            stop_at: None,
            _item: PhantomData,
        })
    }

    /// Advances the iterator; fails with `IteratorExhausted` once every reachable vertex has
    /// been produced.
    pub fn try_next(&mut self) -> Result<I> {
        self.next().ok_or(GraphError::IteratorExhausted)
    }

    /// Returns the set of discovered vertices
    pub fn visited(&self) -> &VertexSet<G::V> {
        &self.visited
    }

    /// Returns *true* if `u` has already been discovered
    pub fn did_visit(&self, u: &G::V) -> bool {
        self.visited.contains(u)
    }

    /// Consumes the search and returns its visited set
    pub fn into_visited(self) -> VertexSet<G::V> {
        self.visited
    }

    /// Tries to restart the search at a yet unvisited vertex and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert_eq!(self.sequencer.cardinality(), 0);
        let vertex = self.graph.vertices().find(|u| !self.visited.contains(*u));
        match vertex {
            None => false,
            Some(x) => {
                self.visited.insert(x.clone());
                self.sequencer.push(I::new_without_predecessor(x.clone()));
                true
            }
        }
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: G::V) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: G::V) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a vertex from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that vertex will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the vertex is already in the frontier. It is
    /// therefore highly recommended to call this method directly after the constructor. Labels
    /// that are not vertices of the graph are ignored.
    pub fn exclude_vertex(&mut self, u: G::V) {
        if self.graph.contains(&u) {
            self.visited.insert(u);
        }
    }

    /// Builder variant of [`TraversalSearch::exclude_vertex`]
    pub fn with_vertex_excluded(mut self, u: G::V) -> Self {
        self.exclude_vertex(u);
        self
    }
}

/// Extension trait for traversal iterators that return [`PredecessorOf<V>`],
/// enabling extraction of the implied traversal tree (parents, depths).
pub trait TraversalTree<V: Vertex>: Iterator<Item = PredecessorOf<V>> + Sized {
    /// Consumes the iterator and returns the parent of every visited non-root vertex.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = Forest::from_edges([(0, 1), (1, 2)]).unwrap();
    ///
    /// let parents = g.bfs_with_predecessor(&0).unwrap().parent_map();
    /// assert_eq!(parents.get(&2), Some(&1));
    /// assert_eq!(parents.get(&0), None);
    /// ```
    fn parent_map(&mut self) -> VertexMap<V, V> {
        let mut tree = VertexMap::default();
        for PredecessorOf(p, u) in self.by_ref() {
            if p != u {
                tree.insert(u, p);
            }
        }
        tree
    }

    /// Consumes the iterator and computes the depth of each visited vertex in
    /// the traversal tree (root depth = 0).
    ///
    /// For a BFS the depth of a vertex is its hop distance from the root.
    fn depths(&mut self) -> VertexMap<V, usize> {
        let mut depths: VertexMap<V, usize> = VertexMap::default();
        for item in self.by_ref() {
            let depth = item
                .predecessor()
                .and_then(|p| depths.get(p))
                .map_or(0, |d| d + 1);
            depths.insert(item.1, depth);
        }
        depths
    }
}

impl<G, S> TraversalTree<G::V> for TraversalSearch<'_, G, S, PredecessorOf<G::V>>
where
    G: AdjacencyList,
    S: VertexSequencer<PredecessorOf<G::V>>,
{
}

/// Provides convenient traversal methods (BFS, DFS, reachability, hop distances)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([(0, 1), (1, 2)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(&0).unwrap().collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// assert!(g.bfs(&7).is_err());
    /// ```
    fn bfs(&self, start: &Self::V) -> Result<Bfs<'_, Self>> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([(0, 1)]).unwrap();
    ///
    /// let order: Vec<_> = g.dfs(&0).unwrap().collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn dfs(&self, start: &Self::V) -> Result<Dfs<'_, Self>> {
        Dfs::new(self, start)
    }

    /// Alias of [`Traversal::bfs`]
    fn breadth_first_iterator(&self, start: &Self::V) -> Result<Bfs<'_, Self>> {
        self.bfs(start)
    }

    /// Alias of [`Traversal::dfs`]
    fn depth_first_iterator(&self, start: &Self::V) -> Result<Dfs<'_, Self>> {
        self.dfs(start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([(0, 1)]).unwrap();
    ///
    /// let mut it = g.bfs_with_predecessor(&0).unwrap();
    /// assert_eq!(it.next().unwrap().item(), &0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(&0));
    /// ```
    fn bfs_with_predecessor(&self, start: &Self::V) -> Result<BfsWithPredecessor<'_, Self>> {
        BfsWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn dfs_with_predecessor(&self, start: &Self::V) -> Result<DfsWithPredecessor<'_, Self>> {
        DfsWithPredecessor::new(self, start)
    }

    /// Returns *true* if there is a (directed) path from `u` to `v`.
    /// Fails with `VertexNotFound` if either vertex is absent.
    fn is_reachable(&self, u: &Self::V, v: &Self::V) -> Result<bool> {
        self.require_vertex(v)?;
        Ok(self.bfs(u)?.any(|x| &x == v))
    }

    /// Computes a path with fewest edges from `u` to `v` using BFS, including both endpoints.
    ///
    /// - Returns `Ok(Some(path))` if a path exists (`[u]` if `u == v`).
    /// - Returns `Ok(None)` if no path exists.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([(0, 1), (1, 2), (0, 3)]).unwrap();
    ///
    /// assert_eq!(g.path_between(&0, &2), Ok(Some(vec![0, 1, 2])));
    /// assert_eq!(g.path_between(&2, &0), Ok(None));
    /// ```
    fn path_between(&self, u: &Self::V, v: &Self::V) -> Result<Option<Vec<Self::V>>> {
        self.require_vertex(v)?;

        let mut parent: VertexMap<Self::V, Self::V> = VertexMap::default();
        for PredecessorOf(p, x) in self.bfs_with_predecessor(u)? {
            let found = &x == v;
            if p != x {
                parent.insert(x.clone(), p);
            }

            if found {
                let mut path = vec![x];
                while let Some(p) = path.last().and_then(|x| parent.get(x)) {
                    path.push(p.clone());
                }
                path.reverse();
                return Ok(Some(path));
            }
        }

        Ok(None)
    }

    /// Number of edges on a shortest path from `u` to `v`, `Ok(None)` if `v` is unreachable.
    fn hop_distance(&self, u: &Self::V, v: &Self::V) -> Result<Option<usize>> {
        self.require_vertex(v)?;

        let mut depths: VertexMap<Self::V, usize> = VertexMap::default();
        for PredecessorOf(p, x) in self.bfs_with_predecessor(u)? {
            let depth = if p == x { 0 } else { depths.get(&p).map_or(0, |d| d + 1) };
            if &x == v {
                return Ok(Some(depth));
            }
            depths.insert(x, depth);
        }

        Ok(None)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
