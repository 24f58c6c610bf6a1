/*!
# Adjacency Matrix

[`AdjMatrixGraph`] assigns every registered node a dense *slot* and stores edges in a
square boolean matrix indexed by slots. Slots of removed nodes are recycled, so the
matrix only grows if more nodes are alive at once than ever before.

Edge queries and edits are `O(1)`, whereas enumerating a neighborhood costs `O(n)`
and the matrix requires `O(n^2)` memory.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::testing::test_graph_ops;

use super::*;

/// A directed graph storing its edges in an adjacency matrix.
///
/// # Example
/// ```
/// use digraphs::prelude::*;
///
/// let graph = AdjMatrixGraph::from_edges([10, 20, 30], [(10, 30), (30, 20)]).unwrap();
/// assert!(graph.has_edge(10, 30));
/// assert!(!graph.has_edge(30, 10));
/// assert_eq!(graph.neighbors_of(30), vec![20]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjMatrixGraph {
    slots: FxHashMap<Node, usize>,
    /// Node stored in each slot, `INVALID_NODE` for free slots
    ids: Vec<Node>,
    free_slots: Vec<usize>,
    matrix: Vec<Vec<bool>>,
    num_edges: NumEdges,
}

impl AdjMatrixGraph {
    /// Returns the slot of `u` or an [`GraphError::InvalidNodeReference`]
    fn slot_of(&self, u: Node) -> Result<usize> {
        self.slots
            .get(&u)
            .copied()
            .ok_or(GraphError::InvalidNodeReference { node: u })
    }

    /// Returns a free slot, growing the matrix by one row and column if none is left
    fn allocate_slot(&mut self) -> usize {
        if let Some(slot) = self.free_slots.pop() {
            return slot;
        }

        let slot = self.ids.len();
        self.ids.push(INVALID_NODE);
        for row in self.matrix.iter_mut() {
            row.push(false);
        }
        self.matrix.push(vec![false; slot + 1]);
        slot
    }
}

impl GraphNew for AdjMatrixGraph {
    fn new() -> Self {
        Self::default()
    }
}

impl GraphNodeOrder for AdjMatrixGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.slots.len() as NumNodes
    }

    fn vertices(&self) -> Vec<Node> {
        self.slots.keys().copied().sorted_unstable().collect_vec()
    }

    fn has_node(&self, u: Node) -> bool {
        self.slots.contains_key(&u)
    }

    fn first_node(&self) -> Option<Node> {
        self.slots.keys().copied().min()
    }
}

impl GraphEdgeOrder for AdjMatrixGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjMatrixGraph {
    fn neighbors_of(&self, u: Node) -> Vec<Node> {
        let Ok(slot) = self.slot_of(u) else {
            return Vec::new();
        };

        self.matrix[slot]
            .iter()
            .zip(self.ids.iter())
            .filter_map(|(&is_edge, &v)| is_edge.then_some(v))
            .sorted_unstable()
            .collect_vec()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.slot_of(u).map_or(0, |slot| {
            self.matrix[slot].iter().filter(|&&is_edge| is_edge).count() as NumNodes
        })
    }
}

impl AdjacencyTest for AdjMatrixGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        match (self.slot_of(u), self.slot_of(v)) {
            (Ok(su), Ok(sv)) => self.matrix[su][sv],
            _ => false,
        }
    }
}

impl GraphNodeEditing for AdjMatrixGraph {
    fn try_add_node(&mut self, u: Node) -> Result<bool> {
        if !is_valid_node(u) {
            return Err(GraphError::InvalidNodeReference { node: u });
        }

        if self.slots.contains_key(&u) {
            return Ok(true);
        }

        let slot = self.allocate_slot();
        self.ids[slot] = u;
        self.slots.insert(u, slot);

        trace!(node = u, slot, "node added");
        Ok(false)
    }

    fn remove_node(&mut self, u: Node) -> bool {
        let Some(slot) = self.slots.remove(&u) else {
            return false;
        };

        let mut purged: NumEdges = 0;
        for (i, row) in self.matrix.iter_mut().enumerate() {
            // the row of `u` itself is cleared below; counting its diagonal here would count a self-loop twice
            if i != slot && std::mem::replace(&mut row[slot], false) {
                purged += 1;
            }
        }
        for cell in self.matrix[slot].iter_mut() {
            if std::mem::replace(cell, false) {
                purged += 1;
            }
        }

        self.num_edges -= purged;
        self.ids[slot] = INVALID_NODE;
        self.free_slots.push(slot);

        debug!(node = u, purged, "node removed");
        true
    }
}

impl GraphEdgeEditing for AdjMatrixGraph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        let su = self.slot_of(u)?;
        let sv = self.slot_of(v)?;

        let cell = &mut self.matrix[su][sv];
        if *cell {
            return Ok(true);
        }

        *cell = true;
        self.num_edges += 1;
        trace!(source = u, target = v, "edge added");
        Ok(false)
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        let (Ok(su), Ok(sv)) = (self.slot_of(u), self.slot_of(v)) else {
            return false;
        };

        let removed = std::mem::replace(&mut self.matrix[su][sv], false);
        if removed {
            self.num_edges -= 1;
            trace!(source = u, target = v, "edge removed");
        }
        removed
    }
}

test_graph_ops!(
    test_adj_matrix,
    AdjMatrixGraph,
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
    fn slots_are_recycled() {
        let mut graph = AdjMatrixGraph::from_edges([0, 1, 2], [(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(graph.matrix.len(), 3);

        assert!(graph.remove_node(1));
        assert_eq!(graph.number_of_edges(), 1);

        graph.add_node(42).unwrap();
        assert_eq!(graph.matrix.len(), 3);

        // the recycled slot must not inherit edges of the removed node
        assert!(graph.neighbors_of(42).is_empty());
        assert!(!graph.has_edge(0, 42));
        assert_eq!(graph.vertices(), vec![0, 2, 42]);
        assert_eq!(graph.edges(), vec![Edge(2, 0)]);
    }

    #[test]
    fn self_loop_counted_once() {
        let mut graph = AdjMatrixGraph::from_edges([5, 6], [(5, 5), (5, 6), (6, 5)]).unwrap();
        assert!(graph.has_self_loop(5));
        assert!(graph.remove_node(5));
        assert_eq!(graph.number_of_edges(), 0);
    }
}
