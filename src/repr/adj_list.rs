/*!
# Adjacency List

[`AdjListGraph`] maps every registered node to the hash-set of its out-neighbors.

- `has_edge`, `try_add_edge` and `try_remove_edge` are `O(1)` on average,
- adjacency sets cannot hold duplicates, so edge insertion is idempotent,
- `remove_node` is `O(n)` as every other adjacency set has to be purged.

Sparse and dynamically growing node sets cost memory linear in `n + m`.
*/

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use tracing::{debug, trace};

use crate::testing::test_graph_ops;

use super::*;

/// A directed graph storing the out-neighborhood of each node in a hash-set.
///
/// # Example
/// ```
/// use digraphs::prelude::*;
///
/// let mut graph = AdjListGraph::new();
/// graph.add_nodes([1, 3, 17]).unwrap();
/// graph.add_edges([(1, 3), (1, 17), (3, 17)]).unwrap();
///
/// graph.remove_node(17);
/// assert_eq!(graph.vertices(), vec![1, 3]);
/// assert_eq!(graph.neighbors_of(1), vec![3]);
/// assert!(graph.neighbors_of(3).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjListGraph {
    adj: FxHashMap<Node, FxHashSet<Node>>,
    num_edges: NumEdges,
}

impl GraphNew for AdjListGraph {
    fn new() -> Self {
        Self::default()
    }
}

impl GraphNodeOrder for AdjListGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }

    fn vertices(&self) -> Vec<Node> {
        self.adj.keys().copied().sorted_unstable().collect_vec()
    }

    fn has_node(&self, u: Node) -> bool {
        self.adj.contains_key(&u)
    }

    fn first_node(&self) -> Option<Node> {
        self.adj.keys().copied().min()
    }
}

impl GraphEdgeOrder for AdjListGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjListGraph {
    fn neighbors_of(&self, u: Node) -> Vec<Node> {
        self.adj
            .get(&u)
            .map(|nbs| nbs.iter().copied().sorted_unstable().collect_vec())
            .unwrap_or_default()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adj.get(&u).map_or(0, |nbs| nbs.len() as NumNodes)
    }
}

impl AdjacencyTest for AdjListGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adj.get(&u).is_some_and(|nbs| nbs.contains(&v))
    }
}

impl GraphNodeEditing for AdjListGraph {
    fn try_add_node(&mut self, u: Node) -> Result<bool> {
        if !is_valid_node(u) {
            return Err(GraphError::InvalidNodeReference { node: u });
        }

        if self.adj.contains_key(&u) {
            return Ok(true);
        }

        self.adj.insert(u, FxHashSet::default());
        trace!(node = u, "node added");
        Ok(false)
    }

    fn remove_node(&mut self, u: Node) -> bool {
        let Some(out_nbs) = self.adj.remove(&u) else {
            return false;
        };

        let in_edges = self
            .adj
            .values_mut()
            .map(|nbs| nbs.remove(&u))
            .filter(|&removed| removed)
            .count();

        let purged = (out_nbs.len() + in_edges) as NumEdges;
        self.num_edges -= purged;

        debug!(node = u, purged, "node removed");
        true
    }
}

impl GraphEdgeEditing for AdjListGraph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        let nbs = self
            .adj
            .get_mut(&u)
            .ok_or(GraphError::InvalidNodeReference { node: u })?;

        if !nbs.insert(v) {
            return Ok(true);
        }

        self.num_edges += 1;
        trace!(source = u, target = v, "edge added");
        Ok(false)
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        let removed = self.adj.get_mut(&u).is_some_and(|nbs| nbs.remove(&v));
        if removed {
            self.num_edges -= 1;
            trace!(source = u, target = v, "edge removed");
        }
        removed
    }
}

test_graph_ops!(
    test_adj_list,
    AdjListGraph,
    (
        GraphNew,
        GraphNodeEditing,
        AdjacencyList,
        GraphEdgeEditing,
        Traversals
    )
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_empty() {
        let graph = AdjListGraph::new();
        assert!(graph.vertices().is_empty());
        assert!(graph.is_empty());
        assert_eq!(graph.first_node(), None);
    }

    #[test]
    fn add_nodes_and_edges() {
        let mut graph = AdjListGraph::new();
        graph.add_node(1).unwrap();
        graph.add_node(3).unwrap();
        assert_eq!(graph.vertices(), vec![1, 3]);
        assert!(!graph.has_edge(1, 3));
        assert!(!graph.has_edge(3, 1));

        graph.add_edge(1, 3).unwrap();
        assert!(graph.has_edge(1, 3));
        // the graph is directed
        assert!(!graph.has_edge(3, 1));
    }

    #[test]
    fn remove_purges_incoming_edges() {
        let mut graph = AdjListGraph::from_edges([1, 3, 17], [(1, 3), (1, 17), (3, 17)]).unwrap();
        assert_eq!(graph.number_of_edges(), 3);

        assert!(graph.remove_node(17));
        assert_eq!(graph.vertices(), vec![1, 3]);
        assert_eq!(graph.neighbors_of(1), vec![3]);
        assert_eq!(graph.neighbors_of(3), Vec::<Node>::new());
        assert_eq!(graph.number_of_edges(), 1);

        assert!(!graph.remove_node(17));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn remove_node_with_self_loop() {
        let mut graph = AdjListGraph::from_edges([0, 1], [(0, 0), (0, 1), (1, 0)]).unwrap();
        assert!(graph.remove_node(0));
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.vertices(), vec![1]);
    }
}
