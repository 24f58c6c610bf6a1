/*!
# Substructure Generators

Utility methods to insert **paths** and **cycles** between already registered nodes.

# Example

```rust
use digraphs::{prelude::*, gens::*};

let mut g = AdjListGraph::new();
g.add_nodes(0..5).unwrap();
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();

assert_eq!(
    g.edges(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** inside an already existing graph.
///
/// Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a directed **path**.
    ///
    /// # Errors
    /// Fails with [`GraphError::InvalidNodeReference`] if a node is not registered.
    /// Edges before the offending node stay inserted.
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a directed **cycle**: consecutive nodes are
    /// connected, and additionally the last node to the first.
    /// A single node receives a self-loop.
    ///
    /// # Errors
    /// See [`GeneratorSubstructures::connect_path`].
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        nodes_on_path
            .into_iter()
            .tuple_windows()
            .try_for_each(|(u, v)| self.add_edge(u, v))
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // walk manually to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur)?;
                prev = cur;
            }

            self.add_edge(prev, first)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_nodes() -> AdjListGraph {
        let mut g = AdjListGraph::new();
        g.add_nodes(0..6).unwrap();
        g
    }

    #[test]
    fn test_connect_path() {
        {
            let mut g = graph_with_nodes();
            g.connect_path([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = graph_with_nodes();
            g.connect_path([1]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = graph_with_nodes();
            g.connect_path([2, 1]).unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(2, 1));
            assert!(!g.has_edge(1, 2));
        }

        {
            let mut g = graph_with_nodes();
            g.connect_path([0, 3, 1, 4]).unwrap();
            assert_eq!(g.edges(), vec![Edge(0, 3), Edge(1, 4), Edge(3, 1)]);
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = graph_with_nodes();
            g.connect_cycle([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = graph_with_nodes();
            g.connect_cycle([1]).unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_self_loop(1));
        }

        {
            let mut g = graph_with_nodes();
            g.connect_cycle([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.edges(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1), Edge(4, 0)]
            );
        }
    }

    #[test]
    fn unregistered_nodes_are_rejected() {
        let mut g = graph_with_nodes();
        assert_eq!(
            g.connect_path([0, 1, 9, 2]),
            Err(GraphError::InvalidNodeReference { node: 9 })
        );
        assert_eq!(g.edges(), vec![Edge(0, 1)]);

        assert_eq!(
            g.connect_cycle([3, 4, 7]),
            Err(GraphError::InvalidNodeReference { node: 7 })
        );
    }
}
