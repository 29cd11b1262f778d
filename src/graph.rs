use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use crate::error::{GraphError, Result};
use crate::types::{AdjacencyList, Matrix, UnGraph, VertexId};

/// An undirected graph held as explicit vertex and edge collections.
///
/// Vertices are kept sorted under the label's total order, which fixes the
/// index `0..n-1` of every vertex; all matrix rows and traversal tie-breaks
/// follow that order. Edges stay in insertion order and are NOT deduplicated,
/// so multi-edges keep their own incidence-matrix columns.
///
/// An edge endpoint missing from the vertex set is tolerated: builders skip
/// such edges silently instead of erroring. Only the mutation operations
/// validate their inputs strictly.
#[derive(Debug, Clone)]
pub struct Graph<V: VertexId> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
    index_of: HashMap<V, usize>,
}

impl<V: VertexId> Graph<V> {
    /// Builds a graph from any vertex and edge collections.
    ///
    /// Vertices are sorted and deduplicated; edges are taken as given.
    pub fn new<I, E>(vertices: I, edges: E) -> Self
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut vertices: Vec<V> = vertices.into_iter().collect();
        vertices.sort();
        vertices.dedup();
        let index_of = build_index(&vertices);
        Graph {
            vertices,
            edges: edges.into_iter().collect(),
            index_of,
        }
    }

    /// Vertex labels in sorted order. Position in this slice is the vertex
    /// index used by every matrix representation.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Raw edge list, in insertion order, duplicates included.
    pub fn edges(&self) -> &[(V, V)] {
        &self.edges
    }

    /// Index of a label in the sorted vertex order.
    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.index_of.get(v).copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adjacency list with neighbor vectors in edge-insertion order.
    ///
    /// Edge `(u, v)` contributes `v` to `u`'s list and `u` to `v`'s list, so a
    /// self-loop lands twice in its own list. Edges with an endpoint missing
    /// from the vertex set are skipped.
    pub fn adjacency_list(&self) -> AdjacencyList<V> {
        let mut list: AdjacencyList<V> = self
            .vertices
            .iter()
            .map(|v| (v.clone(), Vec::new()))
            .collect();
        for (a, b) in &self.edges {
            if !list.contains_key(a) || !list.contains_key(b) {
                continue;
            }
            list.get_mut(a).unwrap().push(b.clone());
            list.get_mut(b).unwrap().push(a.clone());
        }
        list
    }

    /// Symmetric 0/1 adjacency matrix. Multi-edges saturate the cell at 1.
    pub fn adjacency_matrix(&self) -> Matrix {
        let n = self.vertices.len();
        let mut matrix = vec![vec![0; n]; n];
        for (a, b) in &self.edges {
            if let (Some(&i), Some(&j)) = (self.index_of.get(a), self.index_of.get(b)) {
                matrix[i][j] = 1;
                matrix[j][i] = 1;
            }
        }
        matrix
    }

    /// Incidence matrix: one column per raw edge, 1 where the vertex
    /// participates. Endpoints are resolved independently, so an edge with one
    /// dangling endpoint still marks the other.
    pub fn incidence_matrix(&self) -> Matrix {
        let n = self.vertices.len();
        let m = self.edges.len();
        let mut matrix = vec![vec![0; m]; n];
        for (col, (a, b)) in self.edges.iter().enumerate() {
            if let Some(&i) = self.index_of.get(a) {
                matrix[i][col] = 1;
            }
            if let Some(&j) = self.index_of.get(b) {
                matrix[j][col] = 1;
            }
        }
        matrix
    }

    /// Degree of every vertex, counting each edge once per containing vertex.
    /// A self-loop therefore adds one, not two.
    pub fn degrees(&self) -> HashMap<V, usize> {
        self.vertices
            .iter()
            .map(|v| {
                let d = self.edges.iter().filter(|(a, b)| a == v || b == v).count();
                (v.clone(), d)
            })
            .collect()
    }

    /// True when some edge contains both labels.
    pub fn is_adjacent(&self, a: &V, b: &V) -> bool {
        self.edges
            .iter()
            .any(|(x, y)| (x == a || y == a) && (x == b || y == b))
    }

    /// Inserts a vertex, optionally with edges attaching it to the graph.
    ///
    /// Every supplied edge must involve the new vertex
    /// ([`GraphError::InvalidEdge`] otherwise) and its other endpoint must
    /// already be present ([`GraphError::UnknownVertex`]). The vertex lands at
    /// its sorted position and the index map is rebuilt.
    pub fn insert_vertex(&mut self, id: V, new_edges: &[(V, V)]) -> Result<()> {
        if self.index_of.contains_key(&id) {
            return Err(GraphError::duplicate_vertex(&id));
        }
        for (a, b) in new_edges {
            if *a != id && *b != id {
                return Err(GraphError::invalid_edge(a, b));
            }
            let other = if *a == id { b } else { a };
            if *other != id && !self.index_of.contains_key(other) {
                return Err(GraphError::unknown_vertex(other));
            }
        }
        let pos = self.vertices.binary_search(&id).unwrap_err();
        self.vertices.insert(pos, id);
        self.index_of = build_index(&self.vertices);
        self.edges.extend_from_slice(new_edges);
        Ok(())
    }

    /// Removes a vertex together with every incident edge.
    pub fn delete_vertex(&mut self, id: &V) -> Result<()> {
        let pos = match self.index_of.get(id) {
            Some(&pos) => pos,
            None => return Err(GraphError::unknown_vertex(id)),
        };
        self.vertices.remove(pos);
        self.edges.retain(|(a, b)| a != id && b != id);
        self.index_of = build_index(&self.vertices);
        Ok(())
    }

    /// Petgraph view of this store. Node `i` is `vertices()[i]`; edge weights
    /// carry the position of the edge in the raw list. Dangling edges are
    /// skipped, consistent with the builders.
    pub fn to_petgraph(&self) -> UnGraph<V> {
        let mut graph = UnGraph::with_capacity(self.vertices.len(), self.edges.len());
        for v in &self.vertices {
            graph.add_node(v.clone());
        }
        for (pos, (a, b)) in self.edges.iter().enumerate() {
            if let (Some(&i), Some(&j)) = (self.index_of.get(a), self.index_of.get(b)) {
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), pos);
            }
        }
        graph
    }

    /// Index-based adjacency consumed by the traversal engines: for each
    /// vertex index, its neighbor indices in ascending order. Sorting indices
    /// equals sorting labels, which is what makes every traversal
    /// deterministic. Multi-edge copies are kept.
    pub(crate) fn neighbor_indices(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.vertices.len()];
        for (a, b) in &self.edges {
            if let (Some(&i), Some(&j)) = (self.index_of.get(a), self.index_of.get(b)) {
                adj[i].push(j);
                adj[j].push(i);
            }
        }
        for row in &mut adj {
            radsort::sort(row);
        }
        adj
    }
}

pub(crate) fn build_index<V: VertexId>(vertices: &[V]) -> HashMap<V, usize> {
    vertices
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), i))
        .collect()
}
