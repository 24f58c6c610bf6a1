/*!
# Node and Edge Sets

[`EdgeSetGraph`] keeps the node-set and the edge-set as two independent ordered sets.
As [`Edge`] orders lexicographically, the out-neighborhood of `u` is the contiguous
range `Edge(u, 0)..=Edge(u, Node::MAX)`, which is already sorted.

All operations are `O(log m)` except `remove_node`, which filters the whole edge-set.
*/

use std::collections::BTreeSet;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::testing::test_graph_ops;

use super::*;

/// A directed graph stored as an ordered set of nodes and an ordered set of edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSetGraph {
    nodes: BTreeSet<Node>,
    edges: BTreeSet<Edge>,
}

impl EdgeSetGraph {
    /// Out-edges of `u` in ascending order
    fn out_edges(&self, u: Node) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.range(Edge(u, Node::MIN)..=Edge(u, Node::MAX))
    }
}

impl GraphNew for EdgeSetGraph {
    fn new() -> Self {
        Self::default()
    }
}

impl GraphNodeOrder for EdgeSetGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    fn vertices(&self) -> Vec<Node> {
        self.nodes.iter().copied().collect_vec()
    }

    fn has_node(&self, u: Node) -> bool {
        self.nodes.contains(&u)
    }

    fn first_node(&self) -> Option<Node> {
        self.nodes.first().copied()
    }
}

impl GraphEdgeOrder for EdgeSetGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyList for EdgeSetGraph {
    fn neighbors_of(&self, u: Node) -> Vec<Node> {
        self.out_edges(u).map(Edge::target).collect_vec()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_edges(u).count() as NumNodes
    }

    fn edges(&self) -> Vec<Edge> {
        self.edges.iter().copied().collect_vec()
    }
}

impl AdjacencyTest for EdgeSetGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edges.contains(&Edge(u, v))
    }
}

impl GraphNodeEditing for EdgeSetGraph {
    fn try_add_node(&mut self, u: Node) -> Result<bool> {
        if !is_valid_node(u) {
            return Err(GraphError::InvalidNodeReference { node: u });
        }

        let existed = !self.nodes.insert(u);
        if !existed {
            trace!(node = u, "node added");
        }
        Ok(existed)
    }

    fn remove_node(&mut self, u: Node) -> bool {
        if !self.nodes.remove(&u) {
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|e| e.0 != u && e.1 != u);
        let purged = before - self.edges.len();

        debug!(node = u, purged, "node removed");
        true
    }
}

impl GraphEdgeEditing for EdgeSetGraph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        let existed = !self.edges.insert(Edge(u, v));
        if !existed {
            trace!(source = u, target = v, "edge added");
        }
        Ok(existed)
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        let removed = self.edges.remove(&Edge(u, v));
        if removed {
            trace!(source = u, target = v, "edge removed");
        }
        removed
    }
}

test_graph_ops!(
    test_edge_set,
    EdgeSetGraph,
    (
        GraphNew,
        GraphNodeEditing,
        AdjacencyList,
        GraphEdgeEditing,
        Traversals
    )
);
