use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    sync::Arc,
};

use crate::{error::*, vertex::*};

/// An edge is defined by two vertices/endpoints.
/// Whether it is directed or not is up to the graph storing it.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V>(pub V, pub V);

/// An edge with an integer weight attached.
///
/// Two weighted edges are equal iff their endpoints and weights are equal. How edges are ordered
/// for sorting is not part of the edge, see [`EdgeOrdering`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge<V>(pub V, pub V, pub Weight);

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<V: Display> Display for WeightedEdge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.0, self.1, self.2)
    }
}

impl<V: Debug> Debug for WeightedEdge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?};{})", self.0, self.1, self.2)
    }
}

impl<V: PartialEq> Edge<V> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl<V: Clone> Edge<V> {
    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }
}

impl<V> WeightedEdge<V> {
    /// Returns the weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }

    /// Drops the weight
    pub fn into_edge(self) -> Edge<V> {
        Edge(self.0, self.1)
    }
}

impl<V: PartialEq> WeightedEdge<V> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl<V: Clone> WeightedEdge<V> {
    /// Reverses the edge by switching the endpoints; the weight is kept
    pub fn reverse(&self) -> Self {
        WeightedEdge(self.1.clone(), self.0.clone(), self.2)
    }
}

/// Common access to the endpoints of [`Edge`] and [`WeightedEdge`].
pub trait Endpoints<V> {
    /// The tail (`u` in `u -> v`)
    fn source(&self) -> &V;

    /// The head (`v` in `u -> v`)
    fn target(&self) -> &V;

    /// Returns *true* if `x` is one of the endpoints
    fn touches(&self, x: &V) -> bool
    where
        V: PartialEq,
    {
        self.source() == x || self.target() == x
    }
}

impl<V> Endpoints<V> for Edge<V> {
    fn source(&self) -> &V {
        &self.0
    }

    fn target(&self) -> &V {
        &self.1
    }
}

impl<V> Endpoints<V> for WeightedEdge<V> {
    fn source(&self) -> &V {
        &self.0
    }

    fn target(&self) -> &V {
        &self.1
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Clone> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<V> From<(V, V, Weight)> for WeightedEdge<V> {
    fn from(value: (V, V, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<V: Clone> From<&(V, V, Weight)> for WeightedEdge<V> {
    fn from(value: &(V, V, Weight)) -> Self {
        WeightedEdge(value.0.clone(), value.1.clone(), value.2)
    }
}

/// Builds an edge from possibly missing endpoints, e.g. read from a sparse table.
///
/// ```
/// use lgraphs::prelude::*;
///
/// assert_eq!(Edge::try_from((Some(1), Some(2))), Ok(Edge(1, 2)));
/// assert_eq!(
///     Edge::<u32>::try_from((Some(1), None)),
///     Err(GraphError::NullArgument { argument: "v" })
/// );
/// ```
impl<V> TryFrom<(Option<V>, Option<V>)> for Edge<V> {
    type Error = GraphError;

    fn try_from(value: (Option<V>, Option<V>)) -> Result<Self> {
        let u = value.0.ok_or(GraphError::NullArgument { argument: "u" })?;
        let v = value.1.ok_or(GraphError::NullArgument { argument: "v" })?;
        Ok(Edge(u, v))
    }
}

impl<V> TryFrom<(Option<V>, Option<V>, Option<Weight>)> for WeightedEdge<V> {
    type Error = GraphError;

    fn try_from(value: (Option<V>, Option<V>, Option<Weight>)) -> Result<Self> {
        let Edge(u, v) = Edge::try_from((value.0, value.1))?;
        let weight = value
            .2
            .ok_or(GraphError::NullArgument { argument: "weight" })?;
        Ok(WeightedEdge(u, v, weight))
    }
}

/// Comparator used to order weighted edges, e.g. before building a spanning tree.
///
/// The ordering is a property of the computation, not of the edges: it is stored once per
/// network (see `Network::set_edge_ordering`) or passed explicitly to the sort step.
/// Cloning is cheap (reference counted).
#[derive(Clone)]
pub struct EdgeOrdering<V> {
    cmp: Arc<dyn Fn(&WeightedEdge<V>, &WeightedEdge<V>) -> Ordering + Send + Sync>,
}

impl<V> EdgeOrdering<V> {
    /// Wraps an arbitrary comparator
    pub fn new<F>(cmp: F) -> Self
    where
        F: Fn(&WeightedEdge<V>, &WeightedEdge<V>) -> Ordering + Send + Sync + 'static,
    {
        Self { cmp: Arc::new(cmp) }
    }

    /// Increasing weight (the default)
    pub fn by_weight() -> Self {
        Self::new(|a, b| a.2.cmp(&b.2))
    }

    /// Decreasing weight; a spanning tree built with it is a maximum spanning tree
    pub fn by_weight_descending() -> Self {
        Self::new(|a, b| b.2.cmp(&a.2))
    }

    /// Compares two edges
    pub fn compare(&self, a: &WeightedEdge<V>, b: &WeightedEdge<V>) -> Ordering {
        (self.cmp)(a, b)
    }

    /// Stable sort of `edges` under this ordering
    pub fn sort(&self, edges: &mut [WeightedEdge<V>]) {
        edges.sort_by(|a, b| self.compare(a, b));
    }
}

impl<V> Default for EdgeOrdering<V> {
    fn default() -> Self {
        Self::by_weight()
    }
}

impl<V> Debug for EdgeOrdering<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EdgeOrdering")
    }
}
