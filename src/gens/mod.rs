/*!
# Graph Generators

Builders for random edge streams and helpers to plant deterministic substructures (paths,
cycles, stars, cliques) into existing graphs.

Random generators follow a builder pattern:

1. Create a generator instance (e.g. `Gnp::new()`).
2. Set parameters (e.g. `.nodes(n).prob(p)`).
3. Draw edges via `generate()` or `stream()`.

```
use lgraphs::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let g = DirectedGraph::from_edges(Gnp::new().nodes(10).prob(1.0).stream(rng)).unwrap();
assert_eq!(g.edge_count(), 90);
```
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Generators that allow setting the number of vertices
pub trait NumNodesGen {
    /// Sets the number of vertices; generated edges use the labels `0..n`
    fn nodes(self, n: u32) -> Self;
}

/// A configurable random edge generator
pub trait GraphGenerator {
    /// Collects a full list of random edges
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge<u32>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy stream of random edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge<u32>>
    where
        R: Rng;
}
