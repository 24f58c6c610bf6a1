/*!
# Graph Representations

Concrete storage backends implementing the traits in [`ops`](crate::ops):

- [`AdjListGraph`]: node id -> hash-set of out-neighbors (the general purpose default),
- [`AdjMatrixGraph`]: dense slot-indexed boolean matrix,
- [`EdgeSetGraph`]: ordered node-set plus ordered edge-set.

All of them accept arbitrary (non-contiguous) node ids, reject edges between unknown
nodes, and report nodes and neighborhoods in ascending order. They are therefore
observationally equivalent: every algorithm in [`algo`](crate::algo) produces the same
output on any of them. [`digest`] computes a fingerprint that witnesses this equivalence.
*/

use crate::{edge::*, error::*, node::*, ops::*};

mod adj_list;
mod adj_matrix;
mod edge_set;

pub mod digest;

pub use adj_list::*;
pub use adj_matrix::*;
pub use edge_set::*;
