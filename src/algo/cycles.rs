/*!
# Cycle Detection

A depth-first search that reports the first **back edge** it encounters, i.e. an edge
`(u, v)` where `v` is still on the active search path when `u` inspects it. Such an edge
closes a directed cycle `v -> ... -> u -> v`; conversely every directed cycle produces at
least one back edge in any complete DFS.

The search simulates recursion with an explicit stack of frames, so arbitrarily deep
graphs do not overflow the call stack. Neighbors are inspected in ascending order, which
makes the reported edge deterministic.

# Example
```
use digraphs::{prelude::*, algo::*};

let mut g = AdjListGraph::from_edges(0..5, [(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)]).unwrap();
assert!(!g.find_back_edge().found);

g.add_edge(4, 1).unwrap();
let report = g.find_back_edge();
assert_eq!((report.found, report.source, report.target), (true, 4, 1));
```
*/

use fxhash::FxHashSet;
use tracing::debug;

use super::*;

/// Outcome of a cycle search.
///
/// If `found` is *false*, `source` and `target` are both [`INVALID_NODE`] and do not name
/// nodes of the graph. Prefer [`CycleReport::back_edge`] which encodes this in the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleReport {
    /// *true* iff a back edge was found
    pub found: bool,
    /// Tail of the back edge
    pub source: Node,
    /// Head of the back edge; lies on the search path when the edge is inspected
    pub target: Node,
}

impl CycleReport {
    /// Report of a search that found no cycle
    pub const fn none() -> Self {
        Self {
            found: false,
            source: INVALID_NODE,
            target: INVALID_NODE,
        }
    }

    /// Report of a search that found the back edge `(source, target)`
    pub const fn with_back_edge(source: Node, target: Node) -> Self {
        Self {
            found: true,
            source,
            target,
        }
    }

    /// Returns the back edge if one was found
    pub fn back_edge(&self) -> Option<Edge> {
        self.found.then_some(Edge(self.source, self.target))
    }
}

impl Default for CycleReport {
    fn default() -> Self {
        Self::none()
    }
}

impl From<CycleReport> for (bool, Node, Node) {
    fn from(report: CycleReport) -> Self {
        (report.found, report.source, report.target)
    }
}

/// Configurable back-edge search.
///
/// By default the search starts at the smallest node and, once its DFS tree is
/// exhausted, restarts at every node not visited yet (ascending). Thus a cycle anywhere in
/// the graph is found.
///
/// # Example
/// ```
/// use digraphs::{prelude::*, algo::*};
///
/// // 0 -> 1 and a separate 2-cycle
/// let g = AdjListGraph::from_edges(0..4, [(0, 1), (2, 3), (3, 2)]).unwrap();
///
/// assert!(CycleDetector::new().detect(&g).found);
///
/// let local = CycleDetector::new().start_at(0).restart_at_unvisited(false);
/// assert!(!local.detect(&g).found);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleDetector {
    start: Option<Node>,
    restart_at_unvisited: bool,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self {
            start: None,
            restart_at_unvisited: true,
        }
    }
}

impl CycleDetector {
    /// Creates a detector with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first root of the search. An unregistered root is skipped.
    pub fn set_start_at(&mut self, start: Node) {
        self.start = Some(start);
    }

    /// Builder-style variant of [`Self::set_start_at`]
    pub fn start_at(mut self, start: Node) -> Self {
        self.set_start_at(start);
        self
    }

    /// If *false*, only nodes reachable from the first root are searched.
    pub fn set_restart_at_unvisited(&mut self, restart: bool) {
        self.restart_at_unvisited = restart;
    }

    /// Builder-style variant of [`Self::set_restart_at_unvisited`]
    pub fn restart_at_unvisited(mut self, restart: bool) -> Self {
        self.set_restart_at_unvisited(restart);
        self
    }

    /// Runs the search on `graph`.
    /// Returns [`CycleReport::none`] for an empty graph.
    pub fn detect<G>(&self, graph: &G) -> CycleReport
    where
        G: AdjacencyList + ?Sized,
    {
        let mut search = BackEdgeSearch::new(graph);

        let first_root = self
            .start
            .or_else(|| graph.first_node())
            .filter(|&u| graph.has_node(u));
        if let Some(Edge(u, v)) = first_root.and_then(|root| search.run_from(root)) {
            return CycleReport::with_back_edge(u, v);
        }

        if self.restart_at_unvisited {
            for root in graph.vertices() {
                if search.visited.contains(&root) {
                    continue;
                }
                if let Some(Edge(u, v)) = search.run_from(root) {
                    return CycleReport::with_back_edge(u, v);
                }
            }
        }

        CycleReport::none()
    }
}

/// A simulated call of the recursive search: `node` and the position of the next
/// neighbor to inspect.
struct Frame {
    node: Node,
    neighbors: Vec<Node>,
    cursor: usize,
}

impl Frame {
    fn new<G: AdjacencyList + ?Sized>(graph: &G, node: Node) -> Self {
        Self {
            node,
            neighbors: graph.neighbors_of(node),
            cursor: 0,
        }
    }

    fn next_neighbor(&mut self) -> Option<Node> {
        let v = self.neighbors.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(v)
    }
}

/// Search state shared between roots. A node is *unvisited*, *on the path*
/// (in `on_path`, hence also in `visited`) or *finished* (only in `visited`).
struct BackEdgeSearch<'a, G: ?Sized> {
    graph: &'a G,
    visited: FxHashSet<Node>,
    on_path: FxHashSet<Node>,
    stack: Vec<Frame>,
}

impl<'a, G> BackEdgeSearch<'a, G>
where
    G: AdjacencyList + ?Sized,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: FxHashSet::default(),
            on_path: FxHashSet::default(),
            stack: Vec::new(),
        }
    }

    fn enter(&mut self, u: Node) {
        self.visited.insert(u);
        self.on_path.insert(u);
        self.stack.push(Frame::new(self.graph, u));
    }

    /// Searches the DFS tree of the unvisited node `root`
    fn run_from(&mut self, root: Node) -> Option<Edge> {
        debug_assert!(self.stack.is_empty());
        self.enter(root);

        while let Some(frame) = self.stack.last_mut() {
            let u = frame.node;
            match frame.next_neighbor() {
                Some(v) if self.on_path.contains(&v) => {
                    debug!(source = u, target = v, "found back edge");
                    self.stack.clear();
                    return Some(Edge(u, v));
                }
                Some(v) => {
                    if !self.visited.contains(&v) {
                        self.enter(v);
                    }
                }
                None => {
                    self.on_path.remove(&u);
                    self.stack.pop();
                }
            }
        }

        None
    }
}

/// Provides cycle detection on every graph
pub trait CycleDetection: AdjacencyList {
    /// Runs a [`CycleDetector`] with the default configuration
    fn find_back_edge(&self) -> CycleReport {
        CycleDetector::new().detect(self)
    }

    /// Returns *true* if the graph contains a directed cycle (self-loops included)
    fn has_cycle(&self) -> bool {
        self.find_back_edge().found
    }
}

impl<G> CycleDetection for G where G: AdjacencyList + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn diamond() -> AdjListGraph {
        AdjListGraph::from_edges(0..5, [(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)]).unwrap()
    }

    #[test]
    fn dag_has_no_back_edge() {
        let report = diamond().find_back_edge();
        assert_eq!(report, CycleReport::none());
        assert_eq!(report.back_edge(), None);
        assert_eq!(<(bool, Node, Node)>::from(report), (false, INVALID_NODE, INVALID_NODE));
    }

    #[test]
    fn reports_first_back_edge() {
        let mut graph = diamond();
        graph.add_edge(4, 1).unwrap();
        assert_eq!(<(bool, Node, Node)>::from(graph.find_back_edge()), (true, 4, 1));

        // neighbors are inspected ascending: 1 closes its cycle before 2 is entered
        let graph = AdjListGraph::from_edges(0..3, [(0, 1), (0, 2), (1, 0), (2, 0)]).unwrap();
        assert_eq!(graph.find_back_edge().back_edge(), Some(Edge(1, 0)));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = AdjListGraph::from_edges([5], [(5, 5)]).unwrap();
        assert_eq!(graph.find_back_edge().back_edge(), Some(Edge(5, 5)));
    }

    #[test]
    fn cross_edges_are_not_back_edges() {
        // 2 -> 1 reaches a finished node
        let graph = AdjListGraph::from_edges(0..3, [(0, 1), (0, 2), (2, 1)]).unwrap();
        assert!(!graph.has_cycle());
    }

    #[test]
    fn empty_graph() {
        assert!(!AdjListGraph::new().has_cycle());
        assert_eq!(
            CycleDetector::new().start_at(3).detect(&EdgeSetGraph::new()),
            CycleReport::none()
        );
    }

    #[test]
    fn restart_finds_unreachable_cycles() {
        let graph = AdjListGraph::from_edges(0..4, [(0, 1), (2, 3), (3, 2)]).unwrap();

        assert_eq!(graph.find_back_edge().back_edge(), Some(Edge(3, 2)));
        assert!(!CycleDetector::new()
            .start_at(0)
            .restart_at_unvisited(false)
            .detect(&graph)
            .found);
        assert_eq!(
            CycleDetector::new()
                .start_at(3)
                .restart_at_unvisited(false)
                .detect(&graph)
                .back_edge(),
            Some(Edge(2, 3))
        );

        // an unregistered root is skipped
        assert!(CycleDetector::new().start_at(42).detect(&graph).found);
        assert!(!CycleDetector::new()
            .start_at(42)
            .restart_at_unvisited(false)
            .detect(&graph)
            .found);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let n = 100_000;
        let mut graph = AdjListGraph::new();
        graph.add_nodes(0..n).unwrap();
        graph.connect_path(0..n).unwrap();
        assert!(!graph.has_cycle());

        graph.add_edge(n - 1, 0).unwrap();
        assert_eq!(graph.find_back_edge().back_edge(), Some(Edge(n - 1, 0)));
    }

    #[test]
    fn random_back_edges_close_cycles() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        for n in [5, 20, 60] {
            for p in [0.01, 0.03, 0.1] {
                for _ in 0..10 {
                    let graph: AdjListGraph = Gnp::new().nodes(n).prob(p).generate(rng).unwrap();
                    let report = graph.find_back_edge();

                    let on_cycle = graph.vertices().into_iter().any(|u| graph.is_node_on_cycle(u));
                    assert_eq!(report.found, on_cycle);

                    if let Some(Edge(u, v)) = report.back_edge() {
                        assert!(graph.has_edge(u, v));
                        assert!(graph.is_reachable(v, u));
                    }
                }
            }
        }
    }

    #[test]
    fn detection_on_trait_object() {
        let graph: Box<dyn Graph> =
            Box::new(AdjMatrixGraph::from_edges([2, 7], [(2, 7), (7, 2)]).unwrap());
        assert_eq!(graph.find_back_edge().back_edge(), Some(Edge(7, 2)));
    }
}
