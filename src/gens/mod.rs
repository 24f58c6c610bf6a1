/*!
# Graph Generators

Builders for random digraphs and helpers to insert deterministic substructures (paths,
cycles) into existing graphs. Mostly used to produce test and benchmark instances.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `stream()` or a whole graph via `generate()`.

All randomness is drawn from a caller-provided [`rand::Rng`], so seeded generators
reproduce the same graphs.

```
use digraphs::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let g: AdjListGraph = Gnp::new().nodes(10).prob(0.2).generate(rng).unwrap();
assert_eq!(g.vertices(), (0..10).collect::<Vec<_>>());
```
*/

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}
