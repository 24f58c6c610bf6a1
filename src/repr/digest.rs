/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which allows computing
**hash-based digests** of graphs that are independent of the underlying
data structure.

The digest encodes:
- the number of nodes,
- the sorted node ids (they are handles, not `0..n`), and
- the sorted edge list,

before feeding them into a cryptographic hash function.

## Example
```
use digraphs::{prelude::*, repr::digest::GraphDigest};

let list = AdjListGraph::from_edges([4, 1, 2, 3], [(4, 3), (1, 2)]).unwrap();
let matrix = AdjMatrixGraph::from_edges([1, 2, 3, 4], [(1, 2), (4, 3)]).unwrap();

assert_eq!(list.digest_sha256(), matrix.digest_sha256());
```
*/

use std::fmt::LowerHex;

use ::digest::{Digest, Output};

use super::*;

/// Trait for computing a **canonical hash digest** of a graph.
///
/// Digests are designed to be:
/// - **Graph-structure dependent**: equal node- and edge-sets yield equal digests.
/// - **Representation independent**: Works with any [`AdjacencyList`] implementation.
/// - **Deterministic**: Nodes and edges are encoded in sorted order.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: AdjacencyList + ?Sized,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        // first encode the number of nodes in the graph, then the node ids
        hasher.update(self.number_of_nodes().to_le_bytes());
        for u in self.vertices() {
            hasher.update(u.to_le_bytes());
        }

        // then append a sorted edge list
        for Edge(u, v) in self.edges() {
            hasher.update(u.to_le_bytes());
            hasher.update(v.to_le_bytes());
        }

        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_length() {
        let graph = EdgeSetGraph::from_edges([0, 1], [(0, 1)]).unwrap();
        assert_eq!(graph.digest_sha256().len(), 64);
    }

    #[test]
    fn isolated_nodes_matter() {
        let a = AdjListGraph::from_edges([0, 1], [(0, 1)]).unwrap();
        let b = AdjListGraph::from_edges([0, 1, 7], [(0, 1)]).unwrap();
        assert_ne!(a.digest_sha256(), b.digest_sha256());
    }

    #[test]
    fn direction_matters() {
        let a = AdjListGraph::from_edges([0, 1], [(0, 1)]).unwrap();
        let b = AdjListGraph::from_edges([0, 1], [(1, 0)]).unwrap();
        assert_ne!(a.digest_sha256(), b.digest_sha256());
    }

    #[test]
    fn representations_agree_after_edits() {
        let edges = [(0, 2), (2, 4), (4, 0), (9, 2), (4, 9)];

        let mut list = AdjListGraph::from_edges([0, 2, 4, 9], edges).unwrap();
        let mut matrix = AdjMatrixGraph::from_edges([9, 4, 2, 0], edges).unwrap();
        let mut set = EdgeSetGraph::from_edges([4, 0, 9, 2], edges).unwrap();

        list.remove_node(4);
        matrix.remove_node(4);
        set.remove_node(4);

        let digest = list.digest_sha256();
        assert_eq!(digest, matrix.digest_sha256());
        assert_eq!(digest, set.digest_sha256());

        let dyn_graph: &dyn Graph = &set;
        assert_eq!(digest, dyn_graph.digest_sha256());
    }
}
