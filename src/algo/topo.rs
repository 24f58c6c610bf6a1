/*!
# Topological Order

Kahn's algorithm: repeatedly emit a node without remaining in-edges and remove its
out-edges. Among the ready nodes the smallest id is emitted first, so the produced order is
the lexicographically smallest topological order.

If the graph contains a cycle, the nodes on it (and everything only reachable through it)
never become ready and the iteration ends early.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use fxhash::FxHashMap;

use super::*;

/// Iterator over the nodes of a graph in topological order.
/// Yields fewer than `graph.len()` nodes iff the graph is cyclic.
pub struct TopoSearch<'a, G>
where
    G: AdjacencyList + ?Sized,
{
    graph: &'a G,
    in_degs: FxHashMap<Node, NumNodes>,
    ready: BinaryHeap<Reverse<Node>>,
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList + ?Sized,
{
    /// Counts in-degrees and collects the nodes without in-edges
    pub fn new(graph: &'a G) -> Self {
        let vertices = graph.vertices();

        let mut in_degs: FxHashMap<Node, NumNodes> =
            vertices.iter().map(|&u| (u, 0)).collect();
        for &u in &vertices {
            for v in graph.neighbors_of(u) {
                if let Some(d) = in_degs.get_mut(&v) {
                    *d += 1;
                }
            }
        }

        let ready = vertices
            .into_iter()
            .filter(|u| in_degs.get(u) == Some(&0))
            .map(Reverse)
            .collect();

        Self {
            graph,
            in_degs,
            ready,
        }
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList + ?Sized,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let Reverse(u) = self.ready.pop()?;

        for v in self.graph.neighbors_of(u) {
            if let Some(d) = self.in_degs.get_mut(&v) {
                *d -= 1;
                if *d == 0 {
                    self.ready.push(Reverse(v));
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ready.len(), Some(self.graph.len()))
    }
}

/// Provides topological sorting on every graph
pub trait TopologicalSort: AdjacencyList {
    /// Returns an iterator yielding nodes in **topological order**.
    /// Terminates early if the graph contains a cycle.
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(0..4, [(3, 0), (2, 1)]).unwrap();
    /// assert_eq!(g.topo_search().collect::<Vec<_>>(), vec![2, 1, 3, 0]);
    /// ```
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Returns the complete topological order or `None` if the graph is cyclic
    fn topological_order(&self) -> Option<Vec<Node>> {
        let order: Vec<Node> = self.topo_search().collect();
        (order.len() == self.len()).then_some(order)
    }

    /// Returns *true* if the graph has no directed cycle.
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(0..3, [(0, 1), (1, 2)]).unwrap();
    /// assert!(g.is_acyclic());
    /// ```
    fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.len()
    }
}

impl<G> TopologicalSort for G where G: AdjacencyList + ?Sized {}
