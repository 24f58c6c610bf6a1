/*!
`digraphs` is a small directed graph library for graphs that are
- **unlabelled** : Nodes are `u32` handles, they need not be contiguous (`{1, 3, 17}` is fine)
- **unweighted** : Neither nodes nor edges have a weight attached to them
- **directed** : `Edge(u, v)` and `Edge(v, u)` are distinct edges

# Representation

We represent **nodes** as `u32`; the value `u32::MAX` is reserved as [`INVALID_NODE`](node::INVALID_NODE).
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

A graph stores, for every registered node, the set of its out-neighbors. Nodes must be
registered before edges may reference them; removing a node removes every edge into and
out of it. All reads are **sorted ascending**, which makes every algorithm deterministic.

### Available Representations

See the [`repr`] module for the storage backends:

- [`AdjListGraph`](crate::repr::AdjListGraph)
- [`AdjMatrixGraph`](crate::repr::AdjMatrixGraph)
- [`EdgeSetGraph`](crate::repr::EdgeSetGraph)

They trade memory for lookup speed differently but are observationally equivalent.

# Design

The graph interface is split into small capability traits (see [`ops`]) and algorithms only
ask for the capabilities they use. The traits are object-safe, so algorithms also run on a
`Box<dyn Graph>`.

Algorithms are provided as configurable structs that one can alter using the *Builder* /
*Setter* pattern before running them on a graph. The most common functionality is
implemented via traits on the graph itself, usable without configuring anything.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all graph representations,
- [`algo`] includes algorithm traits implemented on graphs such as BFS (`graph.bfs(start_node)`), DFS in pre- and postorder, cycle detection and topological sorting,
- [`gens`] includes random graph generators and deterministic substructures such as paths/cycles,
- [`utils`] includes helper traits such as the [`Set`](utils::Set) abstraction used for visited-sets.

[`repr::digest`] computes a `Sha256`-hash for a given graph, independent of its representation.

In most use-cases, `use digraphs::{prelude::*, algo::*};` suffices.

```
use digraphs::{prelude::*, algo::*};

let mut g = AdjListGraph::from_edges(0..5, [(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)]).unwrap();
assert_eq!(g.traverse(TraversalOrder::Bfs), vec![0, 1, 2, 3, 4]);

assert_eq!(g.add_edge(0, 9), Err(GraphError::InvalidNodeReference { node: 9 }));

g.add_edge(4, 1).unwrap();
assert_eq!(g.find_back_edge().back_edge(), Some(Edge(4, 1)));
```

# Logging

Structural edits and algorithm milestones emit [`tracing`] events (`trace` for single
edits and traversal starts, `debug` for node purges and discovered back edges). The crate
never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `digraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
