/*!
Graph traversal algorithms.

This module provides:
- Lazy traversal iterators: [`BFS`], [`DfsPreorder`] and [`DfsPostorder`], each
  parameterized by the [`Set`] used to track discovered nodes.
- The recursive postorder [`dfs_postorder_recursive`], the reference the iterative
  [`DfsPostorder`] reproduces exactly.
- [`BFSWithPredecessor`] and the [`TraversalTree`] helpers that turn it into parent
  and depth maps.
- The [`Traversal`] trait exposing all of the above as methods on graphs, together
  with [`TraversalOrder`] to select an algorithm at runtime.

Every traversal explores neighbors in the ascending order reported by
[`AdjacencyList::neighbors_of`], so results are reproducible across representations.
The graph is borrowed immutably for the whole traversal; it cannot change underneath.
*/

use std::{collections::VecDeque, fmt, str::FromStr};

use fxhash::{FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::trace;

use super::*;

/// Abstraction for items yielded by a breadth-first search.
///
/// Two implementations are provided:
/// - [`Node`]: stores only the node (no predecessor information).
/// - [`PredecessorOfNode`]: stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without a predecessor (used for the start node).
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Breadth-first search iterator.
///
/// Nodes are marked as visited when they are **enqueued**, not when they are dequeued.
/// Hence a node reachable from several nodes of the same layer is queued only once.
pub struct BreadthFirstSearch<'a, G, I, V>
where
    G: AdjacencyList + ?Sized,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    queue: VecDeque<I>,
    stop_at: Option<Node>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = BreadthFirstSearch<'a, G, Node, FxHashSet<Node>>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    BreadthFirstSearch<'a, G, PredecessorOfNode, FxHashSet<Node>>;

impl<G, I, V> Iterator for BreadthFirstSearch<'_, G, I, V>
where
    G: AdjacencyList + ?Sized,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            self.queue.clear();
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.contains(&v) {
                    self.visited.insert(v);
                    self.queue.push_back(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // a stopper may end the search right at the next node
        let lower = if self.stop_at.is_some() {
            self.queue.len().min(1)
        } else {
            self.queue.len()
        };
        (lower, Some(self.graph.len()))
    }
}

impl<'a, G, I, V> BreadthFirstSearch<'a, G, I, V>
where
    G: AdjacencyList + ?Sized,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new BFS starting from `start`.
    /// If `start` is not registered in `graph`, the search yields nothing.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = V::from_capacity(graph.len());
        let mut queue = VecDeque::new();

        if graph.has_node(start) {
            visited.insert(start);
            queue.push_back(I::new_without_predecessor(start));
        }

        trace!(start, "starting bfs");
        Self {
            graph,
            visited,
            queue,
            stop_at: None,
        }
    }
}

impl<G, I, V> BreadthFirstSearch<'_, G, I, V>
where
    G: AdjacencyList + ?Sized,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already queued. Call it directly
    /// after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.insert(u);
    }

    /// Builder-variant of [`BreadthFirstSearch::exclude_node`] for multiple nodes
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
        self
    }

    /// Consumes the search and returns *true* iff there exists a directed path with
    /// at least one edge from the start node to `u`.
    ///
    /// In particular, `graph.bfs(u).is_node_reachable(u)` tests whether `u` lies on a cycle.
    ///
    /// # Warning
    /// The result is meaningless if the iterator was already advanced.
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        debug_assert!(self.queue.len() <= 1);
        self.visited.remove(&u);
        self.next();
        self.any(|v| v.item() == u)
    }
}

/// Depth-first search iterator emitting nodes in **preorder**.
///
/// Nodes live on a plain LIFO stack and are marked as visited when they are popped.
/// All neighbors of a freshly visited node are pushed in ascending order,
/// seen or not; as the stack reverses push order, the largest neighbor is explored first.
///
/// # Example
/// ```
/// use digraphs::{prelude::*, algo::*};
///
/// let g = AdjListGraph::from_edges(0..3, [(0, 1), (0, 2)]).unwrap();
/// assert_eq!(g.dfs(0).collect::<Vec<_>>(), vec![0, 2, 1]);
/// ```
pub struct DfsPreorder<'a, G, V = FxHashSet<Node>>
where
    G: AdjacencyList + ?Sized,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    stack: Vec<Node>,
}

impl<'a, G, V> DfsPreorder<'a, G, V>
where
    G: AdjacencyList + ?Sized,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new preorder DFS starting from `start`.
    /// If `start` is not registered in `graph`, the search yields nothing.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let stack = if graph.has_node(start) {
            vec![start]
        } else {
            Vec::new()
        };

        trace!(start, "starting dfs preorder");
        Self {
            graph,
            visited: V::from_capacity(graph.len()),
            stack,
        }
    }
}

impl<G, V> Iterator for DfsPreorder<'_, G, V>
where
    G: AdjacencyList + ?Sized,
    V: Set<Node>,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(u) = self.stack.pop() {
            if self.visited.insert(u) {
                continue;
            }

            self.stack.extend(self.graph.neighbors_of(u));
            return Some(u);
        }
        None
    }
}

/// Depth-first search iterator emitting nodes in **postorder**.
///
/// Simulates the recursion of [`dfs_postorder_recursive`] with a stack of
/// `(node, is_second_visit)` entries:
/// - on the first visit of an unseen node, it is marked, re-pushed as second visit, and
///   its unseen neighbors are pushed in *descending* order so that they are popped in
///   the ascending order the recursion would descend in;
/// - on the second visit, the node is emitted.
///
/// The output is identical to [`dfs_postorder_recursive`] on every graph, without
/// growing the call stack.
pub struct DfsPostorder<'a, G, V = FxHashSet<Node>>
where
    G: AdjacencyList + ?Sized,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    stack: Vec<(Node, bool)>,
}

impl<'a, G, V> DfsPostorder<'a, G, V>
where
    G: AdjacencyList + ?Sized,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new postorder DFS starting from `start`.
    /// If `start` is not registered in `graph`, the search yields nothing.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let stack = if graph.has_node(start) {
            vec![(start, false)]
        } else {
            Vec::new()
        };

        trace!(start, "starting dfs postorder");
        Self {
            graph,
            visited: V::from_capacity(graph.len()),
            stack,
        }
    }
}

impl<G, V> Iterator for DfsPostorder<'_, G, V>
where
    G: AdjacencyList + ?Sized,
    V: Set<Node>,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((u, is_second_visit)) = self.stack.pop() {
            if is_second_visit {
                return Some(u);
            }

            if self.visited.insert(u) {
                continue;
            }

            self.stack.push((u, true));
            for v in self.graph.neighbors_of(u).into_iter().rev() {
                if !self.visited.contains(&v) {
                    self.stack.push((v, false));
                }
            }
        }
        None
    }
}

/// Recursive postorder DFS from `start`: a node is appended after all of its
/// (unseen, ascending) neighbors have been fully explored.
///
/// Recursion depth equals the length of the longest DFS path; prefer [`DfsPostorder`]
/// for deep graphs. Returns an empty list if `start` is not registered.
pub fn dfs_postorder_recursive<G>(graph: &G, start: Node) -> Vec<Node>
where
    G: AdjacencyList + ?Sized,
{
    fn visit<G>(graph: &G, u: Node, visited: &mut FxHashSet<Node>, order: &mut Vec<Node>)
    where
        G: AdjacencyList + ?Sized,
    {
        visited.insert(u);
        for v in graph.neighbors_of(u) {
            if !visited.contains(&v) {
                visit(graph, v, visited, order);
            }
        }
        order.push(u);
    }

    let mut order = Vec::with_capacity(graph.len());
    if graph.has_node(start) {
        let mut visited = FxHashSet::default();
        visit(graph, start, &mut visited, &mut order);
    }
    order
}

/// Extension trait for BFS iterators yielding [`PredecessorOfNode`],
/// extracting the implied spanning tree structure (parents, depths).
pub trait TraversalTree: Iterator<Item = PredecessorOfNode> + Sized {
    /// Consumes the iterator and maps every visited node to its parent in the
    /// traversal tree. The start node is mapped to itself.
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(0..3, [(0, 1), (1, 2), (0, 2)]).unwrap();
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_map();
    /// assert_eq!(parents[&2], 0);
    /// assert_eq!(parents[&0], 0);
    /// ```
    fn parent_map(self) -> FxHashMap<Node, Node> {
        self.map(|item| (item.item(), item.predecessor().unwrap_or(item.item())))
            .collect()
    }

    /// Consumes the iterator and computes the depth of each visited node in
    /// the traversal tree (start depth = 0).
    ///
    /// For a BFS this is the distance from the start node.
    fn depths(self) -> FxHashMap<Node, NumNodes> {
        let mut depths = FxHashMap::default();
        for item in self {
            let depth = item
                .predecessor()
                .and_then(|p| depths.get(&p).copied())
                .map_or(0, |d: NumNodes| d + 1);
            depths.insert(item.item(), depth);
        }
        depths
    }
}

impl<G, V> TraversalTree for BreadthFirstSearch<'_, G, PredecessorOfNode, V>
where
    G: AdjacencyList + ?Sized,
    V: Set<Node>,
{
}

/// Selects one of the traversal algorithms of [`Traversal`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    /// Breadth-first search
    #[default]
    Bfs,
    /// Depth-first search, nodes emitted before their descendants
    DfsPreorder,
    /// Depth-first search, nodes emitted after their descendants (explicit stack)
    DfsPostorder,
    /// Same order as [`TraversalOrder::DfsPostorder`], computed recursively
    DfsPostorderRecursive,
}

/// Error returned when parsing an unknown [`TraversalOrder`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traversal order: {0}")]
pub struct UnknownTraversalOrder(pub String);

impl FromStr for TraversalOrder {
    type Err = UnknownTraversalOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(TraversalOrder::Bfs),
            "preorder" | "dfs-preorder" => Ok(TraversalOrder::DfsPreorder),
            "postorder" | "dfs-postorder" => Ok(TraversalOrder::DfsPostorder),
            "postorder-recursive" | "dfs-postorder-recursive" => {
                Ok(TraversalOrder::DfsPostorderRecursive)
            }
            _ => Err(UnknownTraversalOrder(s.to_string())),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TraversalOrder::Bfs => "bfs",
            TraversalOrder::DfsPreorder => "dfs-preorder",
            TraversalOrder::DfsPostorder => "dfs-postorder",
            TraversalOrder::DfsPostorderRecursive => "dfs-postorder-recursive",
        })
    }
}

/// Provides convenient traversal methods (BFS, DFS, ...) on every graph
pub trait Traversal: AdjacencyList {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(0..3, [(0, 2), (2, 1)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 2, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(0..2, [(0, 1)]).unwrap();
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().item(), 0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(0));
    /// ```
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first preorder**.
    fn dfs(&self, start: Node) -> DfsPreorder<'_, Self> {
        DfsPreorder::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first postorder**.
    fn dfs_postorder(&self, start: Node) -> DfsPostorder<'_, Self> {
        DfsPostorder::new(self, start)
    }

    /// Computes the **depth-first postorder** from `start` recursively.
    /// See [`dfs_postorder_recursive`].
    fn dfs_postorder_recursive(&self, start: Node) -> Vec<Node> {
        dfs_postorder_recursive(self, start)
    }

    /// Runs the selected traversal from `start` and collects the visited nodes.
    fn traverse_from(&self, start: Node, order: TraversalOrder) -> Vec<Node> {
        match order {
            TraversalOrder::Bfs => self.bfs(start).collect(),
            TraversalOrder::DfsPreorder => self.dfs(start).collect(),
            TraversalOrder::DfsPostorder => self.dfs_postorder(start).collect(),
            TraversalOrder::DfsPostorderRecursive => self.dfs_postorder_recursive(start),
        }
    }

    /// Runs the selected traversal from the smallest node of the graph.
    /// Returns an empty list for an empty graph.
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(0..5, [(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)]).unwrap();
    ///
    /// assert_eq!(g.traverse(TraversalOrder::Bfs), vec![0, 1, 2, 3, 4]);
    /// assert_eq!(g.traverse(TraversalOrder::DfsPreorder), vec![0, 2, 4, 1, 3]);
    /// assert_eq!(g.traverse(TraversalOrder::DfsPostorder), vec![4, 3, 1, 2, 0]);
    /// assert!(AdjListGraph::new().traverse(TraversalOrder::Bfs).is_empty());
    /// ```
    fn traverse(&self, order: TraversalOrder) -> Vec<Node> {
        self.first_node()
            .map(|start| self.traverse_from(start, order))
            .unwrap_or_default()
    }

    /// Returns *true* if there is a directed path from `u` to `v`.
    /// Every registered node reaches itself.
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        self.has_node(v) && self.bfs(u).stop_at(v).any(|w| w == v)
    }

    /// Returns *true* if node `u` lies on a directed cycle
    /// (a self-loop counts as a cycle).
    ///
    /// # Examples
    /// ```
    /// use digraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_edges(0..3, [(0, 1), (1, 2), (2, 1)]).unwrap();
    /// assert!(!g.is_node_on_cycle(0));
    /// assert!(g.is_node_on_cycle(1));
    /// ```
    fn is_node_on_cycle(&self, u: Node) -> bool {
        self.bfs(u).is_node_reachable(u)
    }
}

impl<G> Traversal for G where G: AdjacencyList + ?Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use std::collections::BTreeSet;

    fn diamond() -> AdjListGraph {
        AdjListGraph::from_edges(0..5, [(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)]).unwrap()
    }

    #[test]
    fn bfs_order() {
        let graph = diamond();
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(graph.bfs(1).collect_vec(), vec![1, 3, 4]);
        assert_eq!(graph.bfs(4).collect_vec(), vec![4]);
    }

    #[test]
    fn bfs_enqueues_each_node_once() {
        //  / 1 \
        // 0     3
        //  \ 2 /
        let graph = AdjListGraph::from_edges(0..4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn bfs_layers_are_non_decreasing() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for _ in 0..20 {
            let graph: AdjListGraph = Gnp::new().nodes(40).prob(0.05).generate(rng).unwrap();
            let start = graph.first_node().unwrap();

            let order = graph.bfs(start).collect_vec();
            let depths = graph.bfs_with_predecessor(start).depths();
            assert_eq!(order.len(), depths.len());
            assert!(order.iter().map(|u| depths[u]).tuple_windows().all(|(a, b)| a <= b));
        }
    }

    #[test]
    fn bfs_stopper() {
        let mut graph = AdjListGraph::new();
        graph.add_nodes(0..4).unwrap();
        graph.connect_path([0, 1, 2, 3]).unwrap();

        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
    }

    #[test]
    fn bfs_size_hint_with_stopper() {
        let graph = diamond();

        let mut bfs = graph.bfs(0).stop_at(1);
        assert_eq!(bfs.next(), Some(0));
        let (lower, upper) = bfs.size_hint();
        let remaining = bfs.count();
        assert_eq!(remaining, 1);
        assert!(lower <= remaining);
        assert!(upper.is_some_and(|upper| remaining <= upper));

        let mut bfs = graph.bfs(0);
        bfs.next();
        assert_eq!(bfs.size_hint().0, 2);
    }

    #[test]
    fn bfs_excluded_nodes() {
        let graph = diamond();
        assert_eq!(graph.bfs(0).with_nodes_excluded([1]).collect_vec(), vec![0, 2, 4]);
        assert_eq!(graph.bfs(0).with_nodes_excluded([2, 4]).collect_vec(), vec![0, 1, 3]);
    }

    #[test]
    fn bfs_tree() {
        let graph = diamond();
        let parents = graph.bfs_with_predecessor(0).parent_map();
        let expected: FxHashMap<Node, Node> =
            [(0, 0), (1, 0), (2, 0), (3, 1), (4, 2)].into_iter().collect();
        assert_eq!(parents, expected);

        let depths = graph.bfs_with_predecessor(0).depths();
        assert_eq!(depths[&4], 2);
        assert_eq!(depths[&0], 0);
    }

    #[test]
    fn dfs_preorder_explores_largest_neighbor_first() {
        let graph = diamond();
        assert_eq!(graph.dfs(0).collect_vec(), vec![0, 2, 4, 1, 3]);

        // 3 is popped right after 1, although 2 leads to 3 as well
        let graph = AdjListGraph::from_edges(0..4, [(0, 1), (1, 2), (1, 3), (2, 3)]).unwrap();
        assert_eq!(graph.dfs(0).collect_vec(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn dfs_preorder_with_btree_set() {
        let graph = diamond();
        let order = DfsPreorder::<_, BTreeSet<Node>>::new(&graph, 0).collect_vec();
        assert_eq!(order, vec![0, 2, 4, 1, 3]);
    }

    #[test]
    fn dfs_postorder() {
        let graph = diamond();
        assert_eq!(graph.dfs_postorder(0).collect_vec(), vec![4, 3, 1, 2, 0]);
        assert_eq!(graph.dfs_postorder_recursive(0), vec![4, 3, 1, 2, 0]);
    }

    #[test]
    fn dfs_postorder_handles_cycles() {
        let mut graph = diamond();
        graph.add_edge(4, 1).unwrap();
        graph.add_edge(3, 3).unwrap();

        let iterative = graph.dfs_postorder(0).collect_vec();
        assert_eq!(iterative, graph.dfs_postorder_recursive(0));
        assert_eq!(iterative.iter().copied().sorted().collect_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn postorder_variants_agree_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for n in [5, 20, 60] {
            for p in [0.02, 0.1, 0.3] {
                for _ in 0..10 {
                    let graph: AdjListGraph = Gnp::new().nodes(n).prob(p).generate(rng).unwrap();
                    for start in graph.vertices() {
                        assert_eq!(
                            graph.dfs_postorder(start).collect_vec(),
                            graph.dfs_postorder_recursive(start)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn every_node_visited_at_most_once() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        for _ in 0..20 {
            let graph: AdjListGraph = Gnp::new().nodes(30).prob(0.2).generate(rng).unwrap();
            for order in [
                TraversalOrder::Bfs,
                TraversalOrder::DfsPreorder,
                TraversalOrder::DfsPostorder,
            ] {
                let visited = graph.traverse(order);
                assert!(visited.iter().all_unique());
                assert_eq!(
                    visited.iter().copied().sorted().collect_vec(),
                    graph.bfs(0).sorted().collect_vec()
                );
            }
        }
    }

    #[test]
    fn unknown_start_yields_nothing() {
        let graph = diamond();
        assert_eq!(graph.bfs(17).count(), 0);
        assert_eq!(graph.dfs(17).count(), 0);
        assert_eq!(graph.dfs_postorder(17).count(), 0);
        assert!(graph.dfs_postorder_recursive(17).is_empty());
    }

    #[test]
    fn traversal_on_trait_object() {
        let graph = diamond();
        let dyn_graph: &dyn Graph = &graph;
        assert_eq!(dyn_graph.traverse(TraversalOrder::DfsPreorder), vec![0, 2, 4, 1, 3]);
        assert_eq!(
            dyn_graph.traverse(TraversalOrder::DfsPostorderRecursive),
            vec![4, 3, 1, 2, 0]
        );

        let boxed: Box<dyn Graph> = Box::new(EdgeSetGraph::from_edges([3, 8], [(8, 3)]).unwrap());
        assert_eq!(boxed.traverse(TraversalOrder::Bfs), vec![3]);
        assert_eq!(boxed.bfs(8).collect_vec(), vec![8, 3]);
    }

    #[test]
    fn reachability() {
        let graph = diamond();
        assert!(graph.is_reachable(0, 4));
        assert!(graph.is_reachable(3, 3));
        assert!(!graph.is_reachable(4, 0));
        assert!(!graph.is_reachable(0, 9));
    }

    #[test]
    fn node_on_cycle() {
        let mut graph = AdjListGraph::new();
        graph.add_nodes(0..6).unwrap();
        graph.connect_cycle([0, 1, 2, 3]).unwrap();
        graph.connect_path([3, 4, 5]).unwrap();

        assert!((0..4).all(|u| graph.is_node_on_cycle(u)));
        assert!(!graph.is_node_on_cycle(4));
        assert!(!graph.is_node_on_cycle(5));

        graph.add_edge(5, 2).unwrap();
        assert!(graph.vertices().into_iter().all(|u| graph.is_node_on_cycle(u)));
    }

    #[test]
    fn traversal_order_from_str() {
        for order in [
            TraversalOrder::Bfs,
            TraversalOrder::DfsPreorder,
            TraversalOrder::DfsPostorder,
            TraversalOrder::DfsPostorderRecursive,
        ] {
            assert_eq!(order.to_string().parse::<TraversalOrder>(), Ok(order));
        }
        assert_eq!("Preorder".parse::<TraversalOrder>(), Ok(TraversalOrder::DfsPreorder));
        assert!("inorder".parse::<TraversalOrder>().is_err());
    }
}
