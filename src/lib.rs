/*!
`lgraphs` is an in-memory graph data structure & algorithms library for graphs whose vertices are
**l**abels of your choosing: integers, strings, tuples, anything that is
`Clone + Eq + Hash + Debug`.

# Representation

Vertices are stored in a hash set and every vertex owns a neighborhood in a hash-map adjacency
index. In addition, each graph keeps the list of stored edges in insertion order.

- In an **undirected** graph, an edge `{u, v}` is stored as `u -> v` *and* `v -> u`; a self-loop
  is stored once. Edge counts and weight sums count each logical edge once.
- In a **directed** graph, `Edge(u, v)` and `Edge(v, u)` are distinct.

### Available Representations

See the [`repr`] module:

- [`DirectedGraph`](crate::repr::DirectedGraph): unweighted, directed
- [`Forest`](crate::repr::Forest): unweighted, undirected and acyclic; an insertion that would
  close a cycle is rejected with [`GraphError::CycleViolation`](crate::error::GraphError)
- [`Network`](crate::repr::Network): weighted; directed ([`DiNetwork`](crate::repr::DiNetwork))
  or undirected ([`UnNetwork`](crate::repr::UnNetwork))

# Design

Graph capabilities are small, flat traits in [`ops`]. Algorithms are traits implemented for
every graph that has the capabilities they need, so `graph.bfs(&start)` or
`network.max_flow(&s, &t)` work without further setup. Algorithms with knobs are also available
as configurable structs following the *Builder* / *Setter* pattern (e.g. [`algo::Kruskal`]).

All searches use explicit stacks and queues; deep graphs do not overflow the call stack.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes vertices, edges, errors, the capability traits and all representations,
- [`algo`] includes traversals, connectivity, cycles, bipartiteness, shortest paths, spanning
  trees and maximum flow,
- [`gens`] includes random edge streams and deterministic substructures (paths, cycles, stars,
  cliques),
- [`utils`] includes helpers such as the [`DisjointSetUnion`](crate::utils::DisjointSetUnion).

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices:

```
use lgraphs::{prelude::*, algo::*};

let g = DirectedGraph::from_edges([(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)]).unwrap();
assert!(!g.is_cyclic());
assert_eq!(g.strongly_connected_components().len(), 6);

let net = DiNetwork::from_weighted_edges([(0, 1, 4), (1, 2, 3), (0, 2, 9)]);
assert_eq!(net.shortest_path(&0, &2), Ok(Some(7)));
assert_eq!(net.max_flow(&0, &2), Ok(Some(12)));
```

# Logging

Algorithms emit [`tracing`](https://docs.rs/tracing) events (`debug` for summaries and rejected
insertions, `trace` for individual steps). The library never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;
pub mod vertex;

/// `lgraphs::prelude` includes definitions for vertices, edges and errors, all basic graph
/// operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, vertex::*};
}
