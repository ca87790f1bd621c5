//! Visitor-driven breadth-first and depth-first search.
//!
//! Both searches label vertices with the usual three colors: white vertices
//! have not been reached, grey vertices have been discovered but not
//! finished, and black vertices are finished.  Every event is reported to a
//! [`Visitor`], which may stop the search by returning
//! [`ControlFlow::Break`].

use std::{collections::VecDeque, ops::ControlFlow};

use bitvec::vec::BitVec;

use crate::{
    Graph,
    error::Result,
    tracing_support::{debug, trace_span},
    visitor::Visitor,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Grey,
    Black,
}

/// Per-vertex colors, stored as two bits per dense vertex index.
#[derive(Clone, Debug)]
pub struct ColorMap {
    discovered: BitVec,
    finished: BitVec,
}

impl ColorMap {
    /// Creates a map with every index in `0..len` colored white.
    pub fn new(len: usize) -> Self {
        Self {
            discovered: BitVec::repeat(false, len),
            finished: BitVec::repeat(false, len),
        }
    }

    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }

    pub fn get(&self, index: usize) -> Color {
        match (self.discovered[index], self.finished[index]) {
            (false, _) => Color::White,
            (true, false) => Color::Grey,
            (true, true) => Color::Black,
        }
    }

    pub fn set(&mut self, index: usize, color: Color) {
        let (discovered, finished) = match color {
            Color::White => (false, false),
            Color::Grey => (true, false),
            Color::Black => (true, true),
        };
        self.discovered.set(index, discovered);
        self.finished.set(index, finished);
    }
}

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every reachable vertex was finished.
    Finished,
    /// A visitor hook returned [`ControlFlow::Break`].
    Aborted,
}

impl From<ControlFlow<()>> for SearchOutcome {
    fn from(flow: ControlFlow<()>) -> Self {
        match flow {
            ControlFlow::Continue(()) => SearchOutcome::Finished,
            ControlFlow::Break(()) => SearchOutcome::Aborted,
        }
    }
}

/// Runs a breadth-first search.
///
/// Every vertex is initialized first.  The search starts from `start`, or
/// from the first vertex in iteration order when `start` is `None`.  With
/// `visit_all_components`, the search restarts from each vertex still
/// white afterwards, in iteration order, until every vertex is finished.
///
/// Returns an error only if `start` is not a valid vertex of `graph`; in
/// that case no events are reported.
pub fn breadth_first_search<G, V>(
    graph: &G,
    mut visitor: V,
    start: Option<G::VertexId>,
    visit_all_components: bool,
) -> Result<SearchOutcome>
where
    G: Graph,
    V: Visitor<G>,
{
    let _span = trace_span!("breadth_first_search", vertices = graph.num_vertices()).entered();
    if let Some(start) = start {
        graph.check_valid_vertex_id(start)?;
    }
    let mut search = Search::new(graph, &mut visitor);
    let flow = search.run_breadth_first(start, visit_all_components);
    Ok(search.finish(flow))
}

/// Runs a depth-first search from `start`, or from the first vertex in
/// iteration order when `start` is `None`.  Vertices not reachable from the
/// start stay white; see [`depth_first_forest`] to cover them too.
///
/// Returns an error only if `start` is not a valid vertex of `graph`.
pub fn depth_first_search<G, V>(
    graph: &G,
    mut visitor: V,
    start: Option<G::VertexId>,
) -> Result<SearchOutcome>
where
    G: Graph,
    V: Visitor<G>,
{
    let _span = trace_span!("depth_first_search", vertices = graph.num_vertices()).entered();
    if let Some(start) = start {
        graph.check_valid_vertex_id(start)?;
    }
    let mut search = Search::new(graph, &mut visitor);
    let flow = search.run_depth_first(start);
    Ok(search.finish(flow))
}

/// Runs a depth-first search from every vertex still white, in iteration
/// order, so that every vertex is discovered and finished exactly once.
pub fn depth_first_forest<G, V>(graph: &G, mut visitor: V) -> SearchOutcome
where
    G: Graph,
    V: Visitor<G>,
{
    let _span = trace_span!("depth_first_forest", vertices = graph.num_vertices()).entered();
    let mut search = Search::new(graph, &mut visitor);
    let flow = search.run_depth_first_forest();
    search.finish(flow)
}

enum Frame<VertexId, EdgeId> {
    /// Visit `vertex`, reached through `via` unless it is a root.
    Enter {
        vertex: VertexId,
        via: Option<EdgeId>,
    },
    /// Finish `vertex` once everything pushed after it is done.
    Exit(VertexId),
}

struct Search<'g, G: Graph, V> {
    graph: &'g G,
    visitor: V,
    colors: ColorMap,
}

impl<'g, G, V> Search<'g, G, V>
where
    G: Graph,
    V: Visitor<G>,
{
    fn new(graph: &'g G, visitor: V) -> Self {
        Self {
            graph,
            visitor,
            colors: ColorMap::new(graph.vertex_bound()),
        }
    }

    fn finish(&self, flow: ControlFlow<()>) -> SearchOutcome {
        let outcome = SearchOutcome::from(flow);
        if outcome == SearchOutcome::Aborted {
            debug!("search aborted by visitor");
        }
        outcome
    }

    fn index(&self, vertex: G::VertexId) -> usize {
        self.graph
            .vertex_index(vertex)
            .expect("search only reaches live vertices")
    }

    fn color(&self, vertex: G::VertexId) -> Color {
        self.colors.get(self.index(vertex))
    }

    fn set_color(&mut self, vertex: G::VertexId, color: Color) {
        let index = self.index(vertex);
        self.colors.set(index, color);
    }

    fn target(&self, edge: G::EdgeId) -> G::VertexId {
        self.graph
            .target(edge)
            .expect("search only reaches live edges")
    }

    fn initialize(&mut self) -> ControlFlow<()> {
        let graph = self.graph;
        for vertex in graph.vertex_ids() {
            self.visitor.initialize_vertex(vertex, graph)?;
        }
        ControlFlow::Continue(())
    }

    /// Reports an edge whose target has already been discovered.
    fn non_tree_edge(&mut self, edge: G::EdgeId, target: G::VertexId) -> ControlFlow<()> {
        let graph = self.graph;
        self.visitor.non_tree_edge(edge, graph)?;
        match self.color(target) {
            Color::Grey => self.visitor.grey_target(edge, graph),
            color => {
                debug_assert_eq!(color, Color::Black);
                self.visitor.black_target(edge, graph)
            }
        }
    }

    fn first_root(&self, start: Option<G::VertexId>) -> Option<G::VertexId> {
        start.or_else(|| self.graph.vertex_ids().next())
    }

    fn run_breadth_first(
        &mut self,
        start: Option<G::VertexId>,
        visit_all_components: bool,
    ) -> ControlFlow<()> {
        self.initialize()?;
        let Some(root) = self.first_root(start) else {
            return ControlFlow::Continue(());
        };
        self.breadth_first_from(root)?;
        if visit_all_components {
            let graph = self.graph;
            for vertex in graph.vertex_ids() {
                if self.color(vertex) == Color::White {
                    self.breadth_first_from(vertex)?;
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn breadth_first_from(&mut self, root: G::VertexId) -> ControlFlow<()> {
        let graph = self.graph;
        let mut queue = VecDeque::new();
        self.set_color(root, Color::Grey);
        self.visitor.discover_vertex(root, graph)?;
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            self.visitor.examine_vertex(current, graph)?;
            let out_edges = graph
                .out_edges(current)
                .expect("search only reaches live vertices");
            for edge in out_edges {
                self.visitor.examine_edge(edge, graph)?;
                let target = self.target(edge);
                if self.color(target) == Color::White {
                    self.set_color(target, Color::Grey);
                    self.visitor.tree_edge(edge, graph)?;
                    self.visitor.discover_vertex(target, graph)?;
                    queue.push_back(target);
                } else {
                    self.non_tree_edge(edge, target)?;
                }
            }
            self.set_color(current, Color::Black);
            self.visitor.finish_vertex(current, graph)?;
        }
        ControlFlow::Continue(())
    }

    fn run_depth_first(&mut self, start: Option<G::VertexId>) -> ControlFlow<()> {
        self.initialize()?;
        match self.first_root(start) {
            Some(root) => self.depth_first_from(root),
            None => ControlFlow::Continue(()),
        }
    }

    fn run_depth_first_forest(&mut self) -> ControlFlow<()> {
        self.initialize()?;
        let graph = self.graph;
        for vertex in graph.vertex_ids() {
            if self.color(vertex) == Color::White {
                self.depth_first_from(vertex)?;
            }
        }
        ControlFlow::Continue(())
    }

    fn depth_first_from(&mut self, root: G::VertexId) -> ControlFlow<()> {
        let graph = self.graph;
        let mut stack = vec![Frame::Enter {
            vertex: root,
            via: None,
        }];

        while let Some(frame) = stack.pop() {
            let (vertex, via) = match frame {
                Frame::Exit(vertex) => {
                    self.set_color(vertex, Color::Black);
                    self.visitor.finish_vertex(vertex, graph)?;
                    continue;
                }
                Frame::Enter { vertex, via } => (vertex, via),
            };

            // Reached again through another edge before this frame came up.
            if self.color(vertex) != Color::White {
                if let Some(edge) = via {
                    self.non_tree_edge(edge, vertex)?;
                }
                continue;
            }

            if let Some(edge) = via {
                self.visitor.tree_edge(edge, graph)?;
            }
            self.set_color(vertex, Color::Grey);
            self.visitor.discover_vertex(vertex, graph)?;
            stack.push(Frame::Exit(vertex));

            let children_start = stack.len();
            let out_edges = graph
                .out_edges(vertex)
                .expect("search only reaches live vertices");
            for edge in out_edges {
                self.visitor.examine_edge(edge, graph)?;
                let target = self.target(edge);
                if self.color(target) == Color::White {
                    stack.push(Frame::Enter {
                        vertex: target,
                        via: Some(edge),
                    });
                } else {
                    self.non_tree_edge(edge, target)?;
                }
            }
            // Pop children in adjacency order.
            stack[children_start..].reverse();
        }
        ControlFlow::Continue(())
    }
}
