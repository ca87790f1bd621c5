mod common;

/// Generates the property tests for one graph type.
macro_rules! graph_property_tests {
    ($name:ident, $graph:ty) => {
        mod $name {
            use std::collections::HashSet;

            use propgraph::{Graph, GraphMut};
            use quickcheck::TestResult;
            use quickcheck_macros::quickcheck;

            use crate::common::{ArbGraph, check_graph_consistency};

            type TestGraph = $graph;

            #[quickcheck]
            fn prop_generated_graph_is_consistent(ArbGraph { graph }: ArbGraph<TestGraph>) {
                check_graph_consistency(&graph);
            }

            fn vertex_rows(graph: &TestGraph) -> Vec<u8> {
                graph
                    .vertex_ids()
                    .map(|v| *graph.vertex(v).unwrap())
                    .collect()
            }

            fn edge_rows(graph: &TestGraph) -> Vec<(usize, usize, u16)> {
                graph
                    .edge_ids()
                    .map(|e| {
                        let (source, target) = graph.ends(e).unwrap();
                        (
                            graph.vertex_index(source).unwrap(),
                            graph.vertex_index(target).unwrap(),
                            *graph.edge(e).unwrap(),
                        )
                    })
                    .collect()
            }

            #[quickcheck]
            fn prop_clone_copies_contents_under_new_identity(
                ArbGraph { graph }: ArbGraph<TestGraph>,
            ) -> bool {
                let copy = graph.clone();
                check_graph_consistency(&copy);
                vertex_rows(&copy) == vertex_rows(&graph)
                    && edge_rows(&copy) == edge_rows(&graph)
                    && graph.vertex_ids().all(|v| copy.find_vertex(v).is_none())
                    && graph.edge_ids().all(|e| copy.find_edge(e).is_none())
                    && copy.vertex_ids().all(|v| graph.find_vertex(v).is_none())
            }

            #[quickcheck]
            fn prop_insert_vertex_has_no_edges(
                ArbGraph { mut graph }: ArbGraph<TestGraph>,
                property: u8,
            ) -> bool {
                let before = graph.num_vertices();
                let vid = graph.insert_vertex(property);
                graph.num_vertices() == before + 1
                    && graph.degree(vid) == Ok(0)
                    && graph.vertex(vid) == Ok(&property)
                    && graph.vertex_ids().any(|v| v == vid)
            }

            #[quickcheck]
            fn prop_insert_edge_registers_both_ends(
                ArbGraph { mut graph }: ArbGraph<TestGraph>,
                i: usize,
                j: usize,
                property: u16,
            ) -> TestResult {
                let vertices: Vec<_> = graph.vertex_ids().collect();
                if vertices.is_empty() {
                    return TestResult::discard();
                }
                let source = vertices[i % vertices.len()];
                let target = vertices[j % vertices.len()];
                let before = graph.num_edges();
                let eid = graph.insert_edge(source, target, property).unwrap();
                check_graph_consistency(&graph);
                TestResult::from_bool(
                    graph.num_edges() == before + 1
                        && graph.edge(eid) == Ok(&property)
                        && graph.ends(eid) == Ok((source, target))
                        && graph.out_edges(source).unwrap().filter(|e| *e == eid).count() == 1
                        && graph.in_edges(target).unwrap().filter(|e| *e == eid).count() == 1,
                )
            }

            #[quickcheck]
            fn prop_erase_edge_round_trip(
                ArbGraph { mut graph }: ArbGraph<TestGraph>,
                i: usize,
            ) -> TestResult {
                let edges: Vec<_> = graph.edge_ids().collect();
                if edges.is_empty() {
                    return TestResult::discard();
                }
                let eid = edges[i % edges.len()];
                let (source, target) = graph.ends(eid).unwrap();
                let property = *graph.edge(eid).unwrap();
                let before = graph.num_edges();

                assert_eq!(graph.erase_edge(eid), Ok(property));
                check_graph_consistency(&graph);
                assert_eq!(graph.num_edges(), before - 1);
                assert_eq!(graph.find_edge(eid), None);
                assert!(graph.erase_edge(eid).is_err());

                let new_eid = graph.insert_edge(source, target, property).unwrap();
                check_graph_consistency(&graph);
                TestResult::from_bool(
                    graph.num_edges() == before && graph.ends(new_eid) == Ok((source, target)),
                )
            }

            #[quickcheck]
            fn prop_erase_vertex_removes_incident_edges(
                ArbGraph { mut graph }: ArbGraph<TestGraph>,
                i: usize,
            ) -> TestResult {
                let vertices: Vec<_> = graph.vertex_ids().collect();
                if vertices.is_empty() {
                    return TestResult::discard();
                }
                let vid = vertices[i % vertices.len()];
                let incident: HashSet<_> = graph
                    .in_edges(vid)
                    .unwrap()
                    .chain(graph.out_edges(vid).unwrap())
                    .collect();
                let property = *graph.vertex(vid).unwrap();
                let (num_vertices, num_edges) = (graph.num_vertices(), graph.num_edges());

                assert_eq!(graph.erase_vertex(vid), Ok(property));
                check_graph_consistency(&graph);
                assert_eq!(graph.find_vertex(vid), None);
                assert!(graph.vertex(vid).is_err());
                TestResult::from_bool(
                    graph.num_vertices() == num_vertices - 1
                        && graph.num_edges() == num_edges - incident.len()
                        && incident.iter().all(|eid| !graph.contains_edge(*eid)),
                )
            }

            #[quickcheck]
            fn prop_clear_invalidates_everything(ArbGraph { mut graph }: ArbGraph<TestGraph>) -> bool {
                let vertices: Vec<_> = graph.vertex_ids().collect();
                let edges: Vec<_> = graph.edge_ids().collect();
                graph.clear();
                check_graph_consistency(&graph);
                let vid = graph.insert_vertex(0);
                !graph.is_empty()
                    && graph.num_vertices() == 1
                    && graph.num_edges() == 0
                    && vertices.iter().all(|v| *v != vid && !graph.contains_vertex(*v))
                    && edges.iter().all(|e| !graph.contains_edge(*e))
            }

            #[quickcheck]
            fn prop_find_edge_between_finds_every_edge(ArbGraph { graph }: ArbGraph<TestGraph>) -> bool {
                graph.edge_ids().all(|eid| {
                    let (source, target) = graph.ends(eid).unwrap();
                    match graph.find_edge_between(source, target) {
                        Ok(Some(found)) => graph.ends(found) == Ok((source, target)),
                        _ => false,
                    }
                })
            }

            #[quickcheck]
            fn prop_find_adjacent_finds_every_neighbor(ArbGraph { graph }: ArbGraph<TestGraph>) -> bool {
                graph.edge_ids().all(|eid| {
                    let (source, target) = graph.ends(eid).unwrap();
                    let forward = graph.find_adjacent(source, target).unwrap().unwrap();
                    let backward = graph.find_adjacent(target, source).unwrap().unwrap();
                    graph.opposite(forward, source) == Ok(Some(target))
                        && graph.opposite(backward, target) == Ok(Some(source))
                })
            }

            #[quickcheck]
            fn prop_vertex_refs_match_graph(ArbGraph { graph }: ArbGraph<TestGraph>) -> bool {
                graph.vertices().all(|vertex| {
                    graph.vertex(vertex.id()) == Ok(vertex.property())
                        && graph.degree(vertex.id()) == Ok(vertex.degree())
                        && vertex.out_edges().all(|edge| edge.source().id() == vertex.id())
                        && vertex.in_edges().all(|edge| edge.target().id() == vertex.id())
                })
            }
        }
    };
}

graph_property_tests!(handle_graph, propgraph::HandleGraph<u8, u16>);
graph_property_tests!(
    handle_graph_hash_set,
    propgraph::HandleGraph<u8, u16, std::collections::HashSet<propgraph::ArenaKey>>
);
graph_property_tests!(descriptor_graph, propgraph::DescriptorGraph<u8, u16>);
