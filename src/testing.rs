/// Every graph representation has to pass the same contract tests.
/// Invoke as `test_graph_ops!(module_name, Representation, (Capability, ...));`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, edge::*, error::*, node::*, ops::*, repr::*, testing::test_graph_ops};
            use fxhash::FxHashSet;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates at most `m_ub` random edges between nodes of `nodes`
            fn random_edges<R: Rng>(rng: &mut R, nodes: &[Node], m_ub: usize) -> Vec<Edge> {
                let mut edges = (0..m_ub)
                    .map(|_| {
                        let u = nodes[rng.random_range(0..nodes.len())];
                        let v = nodes[rng.random_range(0..nodes.len())];
                        Edge(u, v)
                    })
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();
                edges
            }

            /// Creates `n` distinct, sparse node ids
            fn random_nodes<R: Rng>(rng: &mut R, n: usize) -> Vec<Node> {
                let mut nodes = FxHashSet::default();
                while nodes.len() < n {
                    nodes.insert(rng.random_range(0..(n as Node) * 10));
                }
                nodes.into_iter().collect_vec()
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            let graph = <$graph>::new();

            assert_eq!(graph.number_of_nodes(), 0);
            assert_eq!(graph.number_of_edges(), 0);
            assert!(graph.is_empty());
            assert!(graph.vertices().is_empty());
            assert_eq!(graph.first_node(), None);
            assert!(graph.neighbors_of(0).is_empty());
            assert!(!graph.has_edge(0, 0));
        }
    };
    ($graph:ident: GraphNodeEditing) => {
        #[test]
        fn test_graph_node_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1, 10, 50] {
                let nodes = random_nodes(rng, n);
                let mut graph = <$graph>::new();

                for &u in &nodes {
                    assert_eq!(graph.try_add_node(u), Ok(false));
                }
                // idempotent
                for &u in &nodes {
                    assert_eq!(graph.try_add_node(u), Ok(true));
                }

                let sorted = nodes.iter().copied().sorted().collect_vec();
                assert_eq!(graph.vertices(), sorted);
                assert_eq!(graph.first_node(), sorted.first().copied());
                assert_eq!(graph.len(), n);

                for &u in nodes.iter().step_by(2) {
                    assert!(graph.remove_node(u));
                    assert!(!graph.remove_node(u));
                    assert!(!graph.has_node(u));
                }

                let remaining = nodes.iter().copied().skip(1).step_by(2).sorted().collect_vec();
                assert_eq!(graph.vertices(), remaining);
            }

            let mut graph = <$graph>::new();
            assert_eq!(
                graph.add_node(INVALID_NODE),
                Err(GraphError::InvalidNodeReference { node: INVALID_NODE })
            );
            assert!(graph.is_empty());
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10, 20, 50] {
                for m_ub in [n * 2, n * 5] {
                    let nodes = random_nodes(rng, n);
                    let edges = random_edges(rng, &nodes, m_ub);

                    let graph = <$graph>::from_edges(nodes.iter().copied(), edges.iter()).unwrap();

                    assert_eq!(graph.number_of_nodes() as usize, n);
                    assert_eq!(graph.number_of_edges() as usize, edges.len());
                    assert_eq!(graph.edges(), edges);

                    for &u in &nodes {
                        let expected = edges
                            .iter()
                            .filter(|e| e.0 == u)
                            .map(|e| e.1)
                            .collect_vec();

                        let neighbors = graph.neighbors_of(u);
                        assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
                        assert_eq!(neighbors, expected);
                        assert_eq!(graph.degree_of(u) as usize, expected.len());

                        for &v in &nodes {
                            assert_eq!(graph.has_edge(u, v), expected.contains(&v));
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10, 20, 50] {
                let nodes = random_nodes(rng, n);
                let edges = random_edges(rng, &nodes, n * 5);

                let mut graph = <$graph>::new();
                graph.add_nodes(nodes.iter().copied()).unwrap();

                for &Edge(u, v) in &edges {
                    let reverse_before = graph.has_edge(v, u);
                    assert_eq!(graph.try_add_edge(u, v), Ok(false));
                    assert!(graph.has_edge(u, v));
                    if u != v {
                        // directed: the reverse edge is unaffected
                        assert_eq!(graph.has_edge(v, u), reverse_before);
                    }
                }

                let before = graph.edges();
                for &Edge(u, v) in &edges {
                    assert_eq!(graph.try_add_edge(u, v), Ok(true));
                }
                assert_eq!(graph.edges(), before);
                assert_eq!(graph.number_of_edges() as usize, edges.len());

                // re-registering an endpoint keeps its neighborhood
                for &Edge(u, v) in &edges {
                    assert_eq!(graph.try_add_node(u), Ok(true));
                    graph.add_node(v).unwrap();
                }
                assert_eq!(graph.edges(), before);
                assert_eq!(graph.number_of_edges() as usize, edges.len());

                // unregistered endpoints are rejected without touching the graph
                let unknown = nodes.iter().max().unwrap() + 1;
                assert_eq!(
                    graph.add_edge(unknown, nodes[0]),
                    Err(GraphError::InvalidNodeReference { node: unknown })
                );
                assert_eq!(
                    graph.add_edge(nodes[0], unknown),
                    Err(GraphError::InvalidNodeReference { node: unknown })
                );
                assert_eq!(graph.edges(), before);

                let mut m = graph.number_of_edges();
                for &Edge(u, v) in edges.iter().step_by(3) {
                    assert!(graph.try_remove_edge(u, v));
                    assert!(!graph.try_remove_edge(u, v));
                    m -= 1;
                    assert_eq!(graph.number_of_edges(), m);
                }

                // removing nodes purges every reference to them
                let removed = nodes.iter().copied().step_by(4).collect_vec();
                for &u in &removed {
                    graph.remove_node(u);
                }
                for u in graph.vertices() {
                    assert!(removed.iter().all(|x| !graph.neighbors_of(u).contains(x)));
                }
                assert_eq!(graph.number_of_edges() as usize, graph.edges().len());

                for u in graph.vertices() {
                    graph.remove_node(u);
                }
                assert!(graph.is_empty());
                assert!(graph.is_edgeless());
            }
        }
    };
    ($graph:ident: Traversals) => {
        #[test]
        fn test_traversals() {
            let graph = <$graph>::from_edges(0..5, [(0, 1), (0, 2), (1, 3), (2, 4), (3, 4)]).unwrap();

            assert_eq!(graph.traverse(TraversalOrder::Bfs), vec![0, 1, 2, 3, 4]);
            assert_eq!(graph.traverse(TraversalOrder::DfsPreorder), vec![0, 2, 4, 1, 3]);
            assert_eq!(graph.traverse(TraversalOrder::DfsPostorder), vec![4, 3, 1, 2, 0]);
            assert_eq!(graph.traverse(TraversalOrder::DfsPostorderRecursive), vec![4, 3, 1, 2, 0]);
            assert!(!graph.find_back_edge().found);

            let mut graph = graph;
            graph.add_edge(4, 1).unwrap();
            assert_eq!(graph.find_back_edge().back_edge(), Some(Edge(4, 1)));

            let empty = <$graph>::new();
            assert!(empty.traverse(TraversalOrder::Bfs).is_empty());
            assert!(!empty.find_back_edge().found);
        }
    };
}

pub(crate) use test_graph_ops;
