/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the capability traits in
[`ops`](crate::ops). All algorithms are re-exported at the top level of this module, so you
can simply do:
```rust
use digraphs::algo::*;
```
and gain access to traversals, cycle detection and topological sorting.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.

Algorithms only read from the graph. They accept `?Sized` graphs and therefore also run on
`&dyn Graph`.
*/

mod cycles;
mod topo;
mod traversal;

use crate::{prelude::*, utils::*};

pub use cycles::*;
pub use topo::*;
pub use traversal::*;
