/*!
# Vertex Representation

Vertices are caller-chosen labels: any value that can be cloned, compared for equality, hashed and
printed for diagnostics qualifies. Identity is by equality only; the order in which vertices are
inserted carries no meaning.

In contrast to index-based graph libraries, vertices are not restricted to `0..n`. Integers,
strings, tuples or small enums all work:

```
use lgraphs::prelude::*;

let mut g = DirectedGraph::new();
g.add_edge("parse", "typecheck").unwrap();
g.add_edge("typecheck", "codegen").unwrap();

assert!(g.contains(&"parse"));
assert_eq!(g.vertex_count(), 3);
```
*/

use std::{fmt::Debug, hash::Hash};

use fxhash::{FxHashMap, FxHashSet};

/// Bound shared by all vertex labels.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Integer edge weight (and capacity in flow networks)
pub type Weight = i64;

/// Distance assigned to vertices that have not been reached (yet).
///
/// Lies well below `Weight::MAX`. Shortest path distances are only meaningful below this bound:
/// a vertex whose true distance is `INFINITE_WEIGHT` or more is reported as unreachable.
pub const INFINITE_WEIGHT: Weight = Weight::MAX / 4;

/// Set of vertices
pub type VertexSet<V> = FxHashSet<V>;

/// Map keyed by vertices
pub type VertexMap<V, T> = FxHashMap<V, T>;
