/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversal, connectivity, cycles, bipartiteness, shortest paths, spanning
trees and maximum flow. Where it makes sense, algorithms are provided as **iterators**, making it
easy to consume results lazily.

Most algorithms are traits implemented for every graph with the required capabilities; which
graphs qualify is decided at compile time. Strongly connected components, for example, are only
available on directed graphs:

```compile_fail
use lgraphs::{prelude::*, algo::*};

let forest = Forest::from_edges([(0, 1)]).unwrap();
forest.strongly_connected_components();
```
*/

mod bipartite;
mod connectivity;
mod cycles;
mod network_flow;
mod shortest_path;
mod spanning_tree;
mod traversal;

use crate::prelude::*;

pub use bipartite::*;
pub use connectivity::*;
pub use cycles::*;
pub use network_flow::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
