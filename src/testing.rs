/// Runs the same randomized checks against every graph representation.
///
/// Each listed trait expands to one test that compares the graph against a plain
/// `Vec<NodeBitSet>` reference adjacency.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::test_graph_ops, utils::count_connections};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use stream_bitset::prelude::*;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random pairs for nodes `0..n`; may contain loops
            fn random_pairs<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    Edge(u, v)
                }).collect_vec()
            }

            /// Reference adjacency built from `pairs`, ignoring loops
            fn reference(n: NumNodes, pairs: &[Edge]) -> Vec<NodeBitSet> {
                let mut adj = vec![NodeBitSet::new(n); n as usize];
                for &Edge(u, v) in pairs {
                    if u != v {
                        adj[u as usize].set_bit(v);
                        adj[v as usize].set_bit(u);
                    }
                }
                adj
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert_eq!(graph.connections().count(), 0);
            }

            assert_eq!(<$graph>::try_new(0), Err(GraphError::InvalidNodeCount(0)));
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let pairs = random_pairs(rng, n, m_ub as NumEdges);
                        let adj = reference(n, &pairs);
                        let graph = <$graph>::from_connections(n, pairs.iter());

                        let mut expected = pairs
                            .iter()
                            .filter(|e| !e.is_loop())
                            .map(|e| e.normalized())
                            .collect_vec();
                        expected.sort_unstable();
                        expected.dedup();

                        // canonical order, every pair once, smaller node first
                        let connections = graph.connections().collect_vec();
                        assert_eq!(connections, expected);
                        assert_eq!(count_connections(&graph), expected.len() as NumEdges);
                        assert_eq!(graph.number_of_edges(), expected.len() as NumEdges);

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of_as_bitset(u), adj[u as usize]);
                            assert_eq!(graph.degree_of(u), adj[u as usize].cardinality());
                            assert!(graph.neighbors_of(u).tuple_windows().all(|(a, b)| a < b));
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: AdjacencyTest) => {
        #[test]
        fn adjacency_test() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [2 as NumNodes, 10, 30] {
                for _ in 0..10 {
                    let pairs = random_pairs(rng, n, 3 * n as NumEdges);
                    let adj = reference(n, &pairs);
                    let graph = <$graph>::from_connections(n, pairs.iter());

                    for u in 0..n {
                        assert!(!graph.is_connected(u, u));
                        for v in 0..n {
                            assert_eq!(graph.is_connected(u, v), graph.is_connected(v, u));
                            assert_eq!(graph.is_connected(u, v), adj[u as usize].get_bit(v));
                        }
                    }

                    assert_eq!(
                        graph.try_is_connected(n, 0),
                        Err(GraphError::NodeOutOfRange { node: n, n })
                    );
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(7);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5] {
                    for _ in 0..10 {
                        let pairs = random_pairs(rng, n, m_ub as NumEdges);
                        let mut graph = <$graph>::new(n);
                        let mut adj = vec![NodeBitSet::new(n); n as usize];

                        for &Edge(u, v) in &pairs {
                            let expected = u != v && !adj[u as usize].set_bit(v);
                            if u != v {
                                adj[v as usize].set_bit(u);
                            }
                            assert_eq!(graph.set_connection(u, v), expected);
                        }

                        // set then remove restores the previous state
                        let before = graph.clone();
                        for _ in 0..20 {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);
                            let was_connected = graph.is_connected(u, v);

                            if !was_connected {
                                assert_eq!(graph.set_connection(u, v), u != v);
                                assert_eq!(graph.remove_connection(u, v), u != v);
                            }
                            assert_eq!(graph, before);
                        }

                        let mut m = graph.number_of_edges();
                        for Edge(u, v) in before.connections() {
                            assert!(graph.remove_connection(u, v));
                            assert!(!graph.remove_connection(v, u));
                            m -= 1;
                            assert_eq!(m, graph.number_of_edges());
                        }
                        assert!(graph.is_singleton_graph());

                        graph.set_connections(before.connections());
                        assert_eq!(graph, before);
                        graph.clear_connections();
                        assert!(graph.is_singleton_graph());
                        assert_eq!(graph.connections().count(), 0);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
