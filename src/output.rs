use std::fmt::Display;

use petgraph::visit::EdgeRef;

use crate::digraph::Digraph;
use crate::graph::Graph;
use crate::types::VertexId;

/// Returns a graph in DOT format.
///
/// It shows your vertex labels, not the internal indices.
///
/// Intended to be used with `neato`.
pub fn draw_graph<V: VertexId + Display>(graph: &Graph<V>) -> String {
    let pg = graph.to_petgraph();
    let mut output = String::from("graph {\n");
    output.push_str("  mode=sgd;\n");
    output.push_str("  maxiter=1000;\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for node_idx in pg.node_indices() {
        let label = pg.node_weight(node_idx).unwrap();
        output.push_str(&format!("  {} [label=\"{}\"];\n", node_idx.index(), label));
    }
    for edge in pg.edge_references() {
        let (a, b) = (edge.source().index(), edge.target().index());
        output.push_str(&format!("  {} -- {};\n", a, b));
    }
    output.push_str("}\n");
    output
}

/// Returns a digraph in DOT format; arcs keep their direction.
pub fn draw_digraph<V: VertexId + Display>(graph: &Digraph<V>) -> String {
    let pg = graph.to_petgraph();
    let mut output = String::from("digraph {\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for node_idx in pg.node_indices() {
        let label = pg.node_weight(node_idx).unwrap();
        output.push_str(&format!("  {} [label=\"{}\"];\n", node_idx.index(), label));
    }
    for edge in pg.edge_references() {
        let (a, b) = (edge.source().index(), edge.target().index());
        output.push_str(&format!("  {} -> {};\n", a, b));
    }
    output.push_str("}\n");
    output
}

/// Writes the graph to a file in DOT format.
pub fn to_dot_file<V: VertexId + Display>(graph: &Graph<V>, path: &str) {
    to_file(&draw_graph(graph), path);
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) {
    std::fs::write(path, content).expect("Rust should write to file");
}
