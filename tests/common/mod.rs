#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet, VecDeque},
    fmt::Debug,
    hash::Hash,
    ops::ControlFlow,
};

use propgraph::{Graph, GraphMut, Visitor, tracing_support::init_tracing};
use quickcheck::Arbitrary;

/// A randomly generated graph with self-loops, parallel edges and a few
/// erased vertices, so that storage slots get reused.
#[derive(Debug, Clone)]
pub struct ArbGraph<G> {
    pub graph: G,
}

impl<G> Arbitrary for ArbGraph<G>
where
    G: GraphMut + Clone + Debug + 'static,
    G::VertexData: Arbitrary,
    G::EdgeData: Arbitrary,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let num_extra_parallel_edges = usize::arbitrary(g) % 5;
        let num_extra_self_loops = usize::arbitrary(g) % 5;
        let num_erased = usize::arbitrary(g) % 4;

        let mut graph = G::new();
        let mut vertices: Vec<_> = (0..num_vertices)
            .map(|_| graph.insert_vertex(G::VertexData::arbitrary(g)))
            .collect();

        for i in 0..num_edges {
            if vertices.is_empty() {
                break;
            }
            let source = vertices[usize::arbitrary(g) % vertices.len()];
            let target = vertices[usize::arbitrary(g) % vertices.len()];
            graph
                .insert_edge(source, target, G::EdgeData::arbitrary(g))
                .unwrap();
            if i < num_extra_parallel_edges {
                graph
                    .insert_edge(source, target, G::EdgeData::arbitrary(g))
                    .unwrap();
            }
            if i < num_extra_self_loops {
                graph
                    .insert_edge(source, source, G::EdgeData::arbitrary(g))
                    .unwrap();
            }
        }

        for _ in 0..num_erased {
            if vertices.is_empty() {
                break;
            }
            let victim = vertices.swap_remove(usize::arbitrary(g) % vertices.len());
            graph.erase_vertex(victim).unwrap();
            vertices.push(graph.insert_vertex(G::VertexData::arbitrary(g)));
        }

        ArbGraph { graph }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks the internal consistency of a graph: every edge is listed exactly
/// once in its source's outgoing edges and once in its target's incoming
/// edges, and nothing else is listed anywhere.
pub fn check_graph_consistency<G: Graph>(graph: &G) {
    init_tracing();

    let vertex_ids: Vec<_> = graph.vertex_ids().collect();
    assert_eq!(vertex_ids.len(), graph.num_vertices());
    assert!(!has_duplicates(vertex_ids.iter().copied()));
    assert_eq!(graph.is_empty(), vertex_ids.is_empty());

    let edge_ids: Vec<_> = graph.edge_ids().collect();
    assert_eq!(edge_ids.len(), graph.num_edges());
    assert!(!has_duplicates(edge_ids.iter().copied()));

    let mut indices = HashSet::new();
    let mut total_out = 0;
    let mut total_in = 0;
    for &vid in &vertex_ids {
        assert_eq!(graph.check_valid_vertex_id(vid), Ok(()));
        assert_eq!(graph.find_vertex(vid), Some(vid));

        let index = graph.vertex_index(vid).unwrap();
        assert!(index < graph.vertex_bound());
        assert!(indices.insert(index));

        let out_edges: Vec<_> = graph.out_edges(vid).unwrap().collect();
        let in_edges: Vec<_> = graph.in_edges(vid).unwrap().collect();
        assert_eq!(out_edges.len(), graph.out_degree(vid).unwrap());
        assert_eq!(in_edges.len(), graph.in_degree(vid).unwrap());
        assert_eq!(
            graph.degree(vid).unwrap(),
            out_edges.len() + in_edges.len()
        );
        assert!(!has_duplicates(out_edges.iter().copied()));
        assert!(!has_duplicates(in_edges.iter().copied()));
        for eid in out_edges {
            assert_eq!(graph.source(eid), Ok(vid));
        }
        for eid in in_edges {
            assert_eq!(graph.target(eid), Ok(vid));
        }
        total_out += graph.out_degree(vid).unwrap();
        total_in += graph.in_degree(vid).unwrap();
    }
    assert_eq!(total_out, graph.num_edges());
    assert_eq!(total_in, graph.num_edges());

    for &eid in &edge_ids {
        assert_eq!(graph.check_valid_edge_id(eid), Ok(()));
        assert_eq!(graph.find_edge(eid), Some(eid));
        let (source, target) = graph.ends(eid).unwrap();
        assert!(graph.contains_vertex(source));
        assert!(graph.contains_vertex(target));
        assert_eq!(
            graph
                .out_edges(source)
                .unwrap()
                .filter(|e| *e == eid)
                .count(),
            1
        );
        assert_eq!(
            graph
                .in_edges(target)
                .unwrap()
                .filter(|e| *e == eid)
                .count(),
            1
        );
        assert_eq!(graph.opposite(eid, source), Ok(Some(target)));
        assert_eq!(graph.opposite(eid, target), Ok(Some(source)));
    }
}

/// Vertices reachable from `start` by following outgoing edges.
pub fn reachable_from<G: Graph>(graph: &G, start: G::VertexId) -> HashSet<G::VertexId> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(vid) = queue.pop_front() {
        for next in graph.successors(vid).unwrap() {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// A visitor that records the events it sees, with a logical clock for
/// discovery and finishing times.
pub struct Tally<G: Graph> {
    pub initialized: usize,
    pub discovered: Vec<G::VertexId>,
    pub examined_vertices: usize,
    pub examined_edges: usize,
    pub tree_edges: Vec<G::EdgeId>,
    pub non_tree_edges: usize,
    pub grey_targets: usize,
    pub black_targets: usize,
    pub finished: Vec<G::VertexId>,
    pub discover_time: HashMap<G::VertexId, usize>,
    pub finish_time: HashMap<G::VertexId, usize>,
    clock: usize,
}

impl<G: Graph> Tally<G> {
    pub fn new() -> Self {
        Self {
            initialized: 0,
            discovered: Vec::new(),
            examined_vertices: 0,
            examined_edges: 0,
            tree_edges: Vec::new(),
            non_tree_edges: 0,
            grey_targets: 0,
            black_targets: 0,
            finished: Vec::new(),
            discover_time: HashMap::new(),
            finish_time: HashMap::new(),
            clock: 0,
        }
    }

    fn tick(&mut self) -> usize {
        self.clock += 1;
        self.clock
    }
}

impl<G: Graph> Visitor<G> for Tally<G> {
    fn initialize_vertex(&mut self, _vertex: G::VertexId, _graph: &G) -> ControlFlow<()> {
        self.initialized += 1;
        ControlFlow::Continue(())
    }

    fn discover_vertex(&mut self, vertex: G::VertexId, _graph: &G) -> ControlFlow<()> {
        let time = self.tick();
        self.discover_time.insert(vertex, time);
        self.discovered.push(vertex);
        ControlFlow::Continue(())
    }

    fn examine_vertex(&mut self, _vertex: G::VertexId, _graph: &G) -> ControlFlow<()> {
        self.examined_vertices += 1;
        ControlFlow::Continue(())
    }

    fn examine_edge(&mut self, _edge: G::EdgeId, _graph: &G) -> ControlFlow<()> {
        self.examined_edges += 1;
        ControlFlow::Continue(())
    }

    fn tree_edge(&mut self, edge: G::EdgeId, _graph: &G) -> ControlFlow<()> {
        self.tree_edges.push(edge);
        ControlFlow::Continue(())
    }

    fn non_tree_edge(&mut self, _edge: G::EdgeId, _graph: &G) -> ControlFlow<()> {
        self.non_tree_edges += 1;
        ControlFlow::Continue(())
    }

    fn grey_target(&mut self, _edge: G::EdgeId, _graph: &G) -> ControlFlow<()> {
        self.grey_targets += 1;
        ControlFlow::Continue(())
    }

    fn black_target(&mut self, _edge: G::EdgeId, _graph: &G) -> ControlFlow<()> {
        self.black_targets += 1;
        ControlFlow::Continue(())
    }

    fn finish_vertex(&mut self, vertex: G::VertexId, _graph: &G) -> ControlFlow<()> {
        let time = self.tick();
        self.finish_time.insert(vertex, time);
        self.finished.push(vertex);
        ControlFlow::Continue(())
    }
}
