/// Every representation has to fulfil the same graph contract. Instantiates randomized tests for
/// a graph type `$graph`; `$convert` turns a `ListGraphData<String, i32>` into a `$graph`.
macro_rules! test_graph_contract {
    ($env:ident, $graph:ty, $convert:expr) => {
        #[cfg(test)]
        mod $env {
            use super::*;
            use crate::algo::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a package of `n` labelled nodes and `m` random edges with weights in `1..100`
            fn random_data<R: Rng>(
                rng: &mut R,
                n: NumNodes,
                m: NumEdges,
                directed: bool,
            ) -> ListGraphData<String, i32> {
                let labels = (0..n).map(|u| format!("v{u}")).collect_vec();
                let edges = (0..m)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        WeightedEdge::new(u, v, rng.random_range(1..100))
                    })
                    .collect_vec();

                ListGraphData::from_edges(labels, directed, edges).unwrap()
            }

            fn build(data: ListGraphData<String, i32>) -> $graph {
                ($convert)(data)
            }

            fn for_each_random_graph<F>(mut f: F)
            where
                F: FnMut(&ListGraphData<String, i32>, &$graph),
            {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [1 as NumNodes, 10, 30] {
                    for m in [0, n / 2, n, n * 3] {
                        for directed in [true, false] {
                            for _ in 0..5 {
                                let data = random_data(rng, n, m, directed);
                                let graph = build(data.clone());
                                f(&data, &graph);
                            }
                        }
                    }
                }
            }

            fn all_traversals(graph: &$graph) -> [TraversalResult<i32>; 3] {
                [
                    graph.depth_first_traversal(false),
                    graph.depth_first_traversal(true),
                    graph.breadth_first_traversal(),
                ]
            }

            /// Index of the forest tree each vertex belongs to
            fn tree_ids(result: &TraversalResult<i32>) -> Vec<usize> {
                let mut ids = vec![usize::MAX; result.discovery_numbers().count()];
                let mut current = 0;
                for &u in result.order() {
                    if result.roots().contains(&u) {
                        current = result.roots().iter().position(|&r| r == u).unwrap();
                    }
                    ids[u as usize] = current;
                }
                ids
            }

            #[test]
            fn counts_after_build() {
                for_each_random_graph(|data, graph| {
                    assert_eq!(graph.len(), data.number_of_nodes());
                    assert_eq!(graph.number_of_edges(), data.num_edges);
                    assert_eq!(
                        graph.labels().cloned().collect_vec(),
                        data.labels
                    );
                    assert_eq!(
                        graph.number_of_edge_entries(),
                        graph.degrees().map(|d| d as usize).sum::<usize>()
                    );

                    for u in graph.vertices() {
                        for v in graph.neighbors_of(u) {
                            assert!(graph.has_edge(u, v));
                        }
                    }
                });
            }

            #[test]
            fn traversals_visit_every_vertex_once() {
                for_each_random_graph(|_, graph| {
                    for result in all_traversals(graph) {
                        assert!(result.is_complete());
                        assert_eq!(
                            result.order().iter().copied().sorted().collect_vec(),
                            graph.vertices().collect_vec()
                        );

                        for (k, &u) in result.order().iter().enumerate() {
                            assert_eq!(result.discovery_number(u), Some(k as Node));
                        }

                        // iterative DFS records one edge per push, the others one per non-root
                        let non_roots = graph.len() - result.number_of_trees();
                        if result.kind() == TraversalKind::IterativeDepthFirst {
                            assert!(result.tree_edges().len() >= non_roots);
                        } else {
                            assert_eq!(result.tree_edges().len(), non_roots);
                        }
                        assert!(result.roots().iter().tuple_windows().all(|(a, b)| a < b));
                    }
                });
            }

            #[test]
            fn tree_edges_exist_and_point_forward() {
                for_each_random_graph(|_, graph| {
                    for result in all_traversals(graph) {
                        for e in result.tree_edges() {
                            assert!(
                                graph
                                    .weighted_neighbors_of(e.source)
                                    .contains(&(e.target, e.weight))
                            );
                            assert!(
                                result.discovery_number(e.source) < result.discovery_number(e.target)
                            );
                        }
                    }
                });
            }

            #[test]
            fn parents_form_the_traversal_forest() {
                for_each_random_graph(|_, graph| {
                    for result in all_traversals(graph) {
                        let parents = result.parents();
                        let depths = result.depths();

                        for u in graph.vertices() {
                            let p = parents[u as usize];
                            if result.roots().contains(&u) {
                                assert_eq!(p, u);
                                assert_eq!(depths[u as usize], 0);
                            } else {
                                assert!(result.tree_edges().iter().any(|e| e.source == p && e.target == u));
                                assert!(result.discovery_number(p) < result.discovery_number(u));
                                assert_eq!(depths[u as usize], depths[p as usize] + 1);
                            }
                        }
                    }
                });
            }

            #[test]
            fn all_traversals_agree_on_forest_trees() {
                for_each_random_graph(|_, graph| {
                    let [rec, iter, bfs] = all_traversals(graph);

                    assert_eq!(rec.roots(), iter.roots());
                    assert_eq!(rec.roots(), bfs.roots());
                    assert_eq!(tree_ids(&rec), tree_ids(&iter));
                    assert_eq!(tree_ids(&rec), tree_ids(&bfs));
                });
            }

            #[test]
            fn bfs_layers() {
                for_each_random_graph(|_, graph| {
                    let bfs = graph.breadth_first_traversal();
                    let depths = bfs.depths();
                    let ids = tree_ids(&bfs);

                    for (&u, &v) in bfs.order().iter().tuple_windows() {
                        if ids[u as usize] == ids[v as usize] {
                            assert!(depths[u as usize] <= depths[v as usize]);
                        }
                    }

                    for e in graph.weighted_edges() {
                        let (u, v) = (e.source as usize, e.target as usize);
                        if ids[u] == ids[v] {
                            assert!(depths[v] <= depths[u] + 1);
                        }
                    }
                });
            }

            #[test]
            fn round_trips_between_representations() {
                for_each_random_graph(|data, _| {
                    let list = AdjListGraph::from_data(data.clone()).unwrap();
                    let matrix =
                        AdjMatrixGraph::from_data(list.to_matrix_data(DEFAULT_INFINITY)).unwrap();
                    let back = AdjListGraph::from_data(matrix.to_list_data()).unwrap();

                    assert_eq!(back.number_of_edges(), data.num_edges);
                    assert_eq!(back.labels().collect_vec(), list.labels().collect_vec());

                    // loops vanish, parallel edges collapse to the last weight, columns ascend
                    for u in list.vertices() {
                        let expected: std::collections::BTreeMap<Node, i32> = list
                            .entries_of(u)
                            .iter()
                            .copied()
                            .filter(|&(v, _)| v != u)
                            .collect();
                        assert_eq!(back.entries_of(u), expected.into_iter().collect_vec().as_slice());
                    }

                    let again =
                        AdjMatrixGraph::from_data(back.to_matrix_data(DEFAULT_INFINITY)).unwrap();
                    assert_eq!(again, matrix);
                });
            }

            #[test]
            fn empty_graph() {
                let graph = build(ListGraphData::default());

                assert!(graph.is_empty());
                assert!(graph.is_singleton_graph());
                for result in all_traversals(&graph) {
                    assert!(result.order().is_empty());
                    assert!(result.tree_edges().is_empty());
                    assert_eq!(result.number_of_trees(), 0);
                }
            }
        }
    };
}

pub(crate) use test_graph_contract;
