use std::fmt::Display;

use dot::{Edges, GraphWalk, Labeller, Nodes};

use crate::dfs::{ArcKind, dfs_classify};
use crate::digraph::Digraph;
use crate::types::VertexId;

type Node = usize;

#[derive(Debug, Clone)]
struct Arc {
    source: Node,
    target: Node,
    kind: ArcKind,
}

struct Forest {
    labels: Vec<String>,
    discovery: Vec<usize>,
    finish: Vec<usize>,
    arcs: Vec<Arc>,
}

impl<'a> Labeller<'a, Node, Arc> for Forest {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("dfs_forest").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        dot::LabelText::label(format!(
            "{}\nd:{} f:{}",
            self.labels[*n], self.discovery[*n], self.finish[*n]
        ))
    }

    fn edge_label(&self, e: &Arc) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("{:?}", e.kind))
    }
}

impl<'a> GraphWalk<'a, Node, Arc> for Forest {
    fn nodes(&self) -> Nodes<'_, Node> {
        (0..self.labels.len()).collect()
    }

    fn edges(&self) -> Edges<'_, Arc> {
        self.arcs.as_slice().into()
    }

    fn source(&self, e: &Arc) -> Node {
        e.source
    }

    fn target(&self, e: &Arc) -> Node {
        e.target
    }
}

/// Renders a digraph's DFS forest in dot format: every vertex carries its
/// discovery and finish times, every arc its classification.
///
/// Use returned string with `dot` not `neato`.
pub fn draw_dfs_forest<V: VertexId + Display>(g: &Digraph<V>) -> String {
    let result = dfs_classify(g);
    let index: hashbrown::HashMap<&V, usize> = g
        .vertices()
        .iter()
        .enumerate()
        .map(|(i, v)| (v, i))
        .collect();

    let mut arcs = Vec::new();
    let classes = [
        (&result.tree, ArcKind::Tree),
        (&result.back, ArcKind::Back),
        (&result.forward, ArcKind::Forward),
        (&result.cross, ArcKind::Cross),
    ];
    for (pairs, kind) in classes {
        for (a, b) in pairs.iter() {
            arcs.push(Arc {
                source: index[a],
                target: index[b],
                kind,
            });
        }
    }

    let forest = Forest {
        labels: g.vertices().iter().map(|v| v.to_string()).collect(),
        discovery: g.vertices().iter().map(|v| result.discovery[v]).collect(),
        finish: g.vertices().iter().map(|v| result.finish[v]).collect(),
        arcs,
    };

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&forest, &mut buffer).unwrap();
    String::from_utf8(buffer.into_inner()).unwrap()
}
