use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

use crate::digraph::Digraph;
use crate::graph::Graph;

/// Reads an undirected graph from a file.
///
/// Edge-list input:
/// - one line, one edge in format "u,v",
/// - by convention start numbering from 0; every label up to the largest one
///   mentioned becomes a vertex, so gaps come out as isolated vertices.
///
/// <div class="warning">
///
/// > Malformed lines panic. This loader is meant for trusted local files;
/// > build a [`Graph`] directly when the input needs validation.
///
/// </div>
///
/// Example input:
/// ```text
/// 0,1
/// 1,2
/// 2,3
/// 2,4
/// 2,0
/// ```
pub fn from_file(path: &str) -> Graph<u32> {
    let file = File::open(path).expect("File should exist and be readable");
    let (vertices, edges) = parse_edge_list(BufReader::new(file));
    Graph::new(vertices, edges)
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Graph<u32> {
    let (vertices, edges) = parse_edge_list(BufReader::new(Cursor::new(input)));
    Graph::new(vertices, edges)
}

/// Reads a digraph from a file; same format as [`from_file`], each line being
/// an arc "origin,destination".
pub fn digraph_from_file(path: &str) -> Digraph<u32> {
    let file = File::open(path).expect("File should exist and be readable");
    let (vertices, arcs) = parse_edge_list(BufReader::new(file));
    Digraph::new(vertices, arcs)
}

/// This is equivalent to [`digraph_from_file`], but takes string as an input.
pub fn digraph_from_str(input: &str) -> Digraph<u32> {
    let (vertices, arcs) = parse_edge_list(BufReader::new(Cursor::new(input)));
    Digraph::new(vertices, arcs)
}

fn parse_edge_list<R: BufRead>(reader: R) -> (Vec<u32>, Vec<(u32, u32)>) {
    let mut edges = Vec::new();
    let mut max_node: u32 = 0;

    for line in reader.lines() {
        let line = line.expect("Line should be readable");
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parts: Vec<_> = line.split(',').collect();
        if parts.len() != 2 {
            panic!("Wrong format, expected 'u,v' for an edge");
        }
        let u: u32 = parts[0]
            .parse()
            .expect("Node index should be a non-negative number");
        let v: u32 = parts[1]
            .parse()
            .expect("Node index should be a non-negative number");
        max_node = max_node.max(u).max(v);
        edges.push((u, v));
    }

    ((0..=max_node).collect(), edges)
}
