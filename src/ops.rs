/*!
# Graph Operations

The capability contract every representation implements, split into small traits so
that algorithms only ask for what they use:

- [`GraphNodeOrder`] / [`GraphEdgeOrder`]: sizes and the node enumeration,
- [`AdjacencyList`]: out-neighborhoods,
- [`AdjacencyTest`]: edge queries,
- [`GraphNodeEditing`] / [`GraphEdgeEditing`]: structural edits,
- [`GraphNew`] / [`GraphFromScratch`]: construction.

[`Graph`] bundles all read and edit capabilities into one object-safe trait, so that a
`Box<dyn Graph>` can stand in for any representation.

Every read returns an owned, **ascending** sequence. Representations are free to store
their data unordered; the order is normalized at the read boundary so that algorithms
built on top produce reproducible sequences.
*/

use itertools::Itertools;

use crate::{edge::*, error::*, node::*};

/// Provides getters pertaining to the node-set of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns all registered nodes in ascending order
    fn vertices(&self) -> Vec<Node>;

    /// Returns *true* if `u` is registered in the graph
    fn has_node(&self, u: Node) -> bool;

    /// Returns the smallest registered node or `None` if the graph is empty
    fn first_node(&self) -> Option<Node> {
        self.vertices().first().copied()
    }

    /// Returns `Ok(())` if `u` is registered and an
    /// [`GraphError::InvalidNodeReference`] otherwise
    fn check_node(&self, u: Node) -> Result<()> {
        if self.has_node(u) {
            Ok(())
        } else {
            Err(GraphError::InvalidNodeReference { node: u })
        }
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder {
    /// Returns the out-neighbors of `u` in ascending order.
    /// Returns an empty list if `u` is not registered.
    fn neighbors_of(&self, u: Node) -> Vec<Node>;

    /// Returns the number of out-neighbors of `u` (`0` if `u` is not registered)
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the out-edges of `u` sorted by target
    fn edges_of(&self, u: Node) -> Vec<Edge> {
        self.neighbors_of(u)
            .into_iter()
            .map(|v| Edge(u, v))
            .collect_vec()
    }

    /// Returns all edges of the graph in ascending order
    fn edges(&self) -> Vec<Edge> {
        self.vertices()
            .into_iter()
            .flat_map(|u| self.edges_of(u))
            .collect_vec()
    }

    /// Returns the nodes `v` with an edge `(v, u)` in ascending order.
    ///
    /// Scans every neighborhood and should be avoided in hot loops.
    fn in_neighbors_of(&self, u: Node) -> Vec<Node> {
        self.vertices()
            .into_iter()
            .filter(|&v| self.neighbors_of(v).binary_search(&u).is_ok())
            .collect_vec()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// Returns *false* (and does not fail) if `u` or `v` is not registered.
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates a graph without nodes
    fn new() -> Self;
}

/// Provides functions to register/unregister nodes
pub trait GraphNodeEditing {
    /// Registers `u` with an empty out-neighborhood.
    /// Returns *true* exactly if `u` was registered before; the graph is left unchanged then.
    ///
    /// # Errors
    /// Fails with [`GraphError::InvalidNodeReference`] if `u == INVALID_NODE`.
    fn try_add_node(&mut self, u: Node) -> Result<bool>;

    /// Registers `u`. Idempotent.
    ///
    /// # Errors
    /// Fails with [`GraphError::InvalidNodeReference`] if `u == INVALID_NODE`.
    fn add_node(&mut self, u: Node) -> Result<()> {
        self.try_add_node(u).map(|_| ())
    }

    /// Registers all nodes of the collection
    ///
    /// # Errors
    /// Stops at and returns the first failing insertion.
    fn add_nodes<I>(&mut self, nodes: I) -> Result<()>
    where
        I: IntoIterator<Item = Node>,
        Self: Sized,
    {
        nodes.into_iter().try_for_each(|u| self.add_node(u))
    }

    /// Removes `u` together with all edges into and out of `u`.
    /// Returns *true* if `u` was registered; removing an absent node is a no-op.
    fn remove_node(&mut self, u: Node) -> bool;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Adds the directed edge `(u, v)` to the graph.
    /// Returns *true* exactly if the edge was present previously.
    ///
    /// # Errors
    /// Fails with [`GraphError::InvalidNodeReference`] naming the first of `u`, `v`
    /// that is not registered. The graph is unchanged in this case.
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Adds the directed edge `(u, v)` to the graph. Idempotent.
    ///
    /// # Errors
    /// See [`GraphEdgeEditing::try_add_edge`].
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.try_add_edge(u, v).map(|_| ())
    }

    /// Adds all edges in the collection
    ///
    /// # Errors
    /// Stops at and returns the first failing insertion; earlier edges stay inserted.
    fn add_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
        Self: Sized,
    {
        edges.into_iter().try_for_each(|e| {
            let Edge(u, v) = e.into();
            self.add_edge(u, v)
        })
    }

    /// Removes the directed edge *(u,v)* from the graph. I.e., the edge FROM u TO v.
    /// If the edge was removed, returns *true* and *false* otherwise.
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;
}

/// A super trait for creating a graph from scratch from a set of nodes and edges
pub trait GraphFromScratch: Sized {
    /// Creates a graph with the given nodes and edges.
    ///
    /// # Errors
    /// Fails if a node is invalid or an edge references a node not contained in `nodes`.
    fn from_edges<N, I, E>(nodes: N, edges: I) -> Result<Self>
    where
        N: IntoIterator<Item = Node>,
        I: IntoIterator<Item = E>,
        E: Into<Edge>;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphNodeEditing + GraphEdgeEditing,
{
    fn from_edges<N, I, E>(nodes: N, edges: I) -> Result<Self>
    where
        N: IntoIterator<Item = Node>,
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new();
        graph.add_nodes(nodes)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }
}

/// The complete capability contract of a directed graph.
///
/// Implemented for every type providing all read and edit traits. The trait is
/// object-safe; algorithms accept `?Sized` graphs and thus also run on `&dyn Graph`.
pub trait Graph:
    GraphNodeOrder
    + GraphEdgeOrder
    + AdjacencyList
    + AdjacencyTest
    + GraphNodeEditing
    + GraphEdgeEditing
{
}

impl<G> Graph for G where
    G: GraphNodeOrder
        + GraphEdgeOrder
        + AdjacencyList
        + AdjacencyTest
        + GraphNodeEditing
        + GraphEdgeEditing
{
}
