use std::{
    collections::HashMap,
    fmt::{Debug, Formatter},
};

use crate::Graph;

/// Formats a graph for debug output with automatic vertex numbering.
///
/// Vertices are labeled with their position in iteration order (0, 1, 2,
/// ...) and edges by the labels of their endpoints.  Properties of
/// zero-sized types are omitted.
pub fn format_debug<G>(graph: &G, fmt: &mut Formatter<'_>, name: &str) -> std::fmt::Result
where
    G: Graph,
    G::VertexData: Debug,
    G::EdgeData: Debug,
{
    let vertex_tags: HashMap<G::VertexId, usize> = graph
        .vertex_ids()
        .enumerate()
        .map(|(i, vid)| (vid, i))
        .collect();
    let mut vertex_order: Vec<_> = vertex_tags.keys().copied().collect();
    vertex_order.sort_by_key(|vid| vertex_tags[vid]);

    let mut edges: Vec<_> = graph
        .edges()
        .map(|edge| {
            let tags = (
                vertex_tags[&edge.source().id()],
                vertex_tags[&edge.target().id()],
            );
            (tags, edge.property())
        })
        .collect();
    edges.sort_by_key(|(tags, _)| *tags);

    fmt.debug_struct(name)
        .field(
            "vertices",
            &FormatDebugWith(|f: &mut Formatter<'_>| {
                if size_of::<G::VertexData>() == 0 {
                    f.debug_list()
                        .entries(vertex_order.iter().map(|vid| vertex_tags[vid]))
                        .finish()
                } else {
                    f.debug_map()
                        .entries(vertex_order.iter().map(|vid| {
                            let property = graph.vertex(*vid).expect("listed vertex is live");
                            (vertex_tags[vid], property)
                        }))
                        .finish()
                }
            }),
        )
        .field(
            "edges",
            &FormatDebugWith(|f: &mut Formatter<'_>| {
                let edge_tag = |(source, target): (usize, usize)| {
                    FormatDebugAs(format!("{source} -> {target}"))
                };
                if size_of::<G::EdgeData>() == 0 {
                    f.debug_list()
                        .entries(edges.iter().map(|(tags, _)| edge_tag(*tags)))
                        .finish()
                } else {
                    f.debug_map()
                        .entries(
                            edges
                                .iter()
                                .map(|(tags, property)| (edge_tag(*tags), property)),
                        )
                        .finish()
                }
            }),
        )
        .finish()
}

/// Writes a string verbatim, without the quotes `Debug` would add.
struct FormatDebugAs(String);

impl Debug for FormatDebugAs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formats with a closure.
struct FormatDebugWith<F>(F);

impl<F> Debug for FormatDebugWith<F>
where
    F: Fn(&mut Formatter<'_>) -> std::fmt::Result,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        (self.0)(f)
    }
}
