use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, build_index};
use crate::types::{AdjacencyList, DiGraph, Matrix, VertexId};

/// A digraph held as explicit vertex and arc collections.
///
/// Same conventions as [`Graph`]: sorted unique vertices define the index
/// order, arcs stay positional with duplicates preserved, and builders skip
/// arcs whose endpoints are missing from the vertex set.
#[derive(Debug, Clone)]
pub struct Digraph<V: VertexId> {
    vertices: Vec<V>,
    arcs: Vec<(V, V)>,
    index_of: HashMap<V, usize>,
}

impl<V: VertexId> Digraph<V> {
    /// Builds a digraph from any vertex and arc collections. Arcs are
    /// `(origin, destination)` pairs.
    pub fn new<I, A>(vertices: I, arcs: A) -> Self
    where
        I: IntoIterator<Item = V>,
        A: IntoIterator<Item = (V, V)>,
    {
        let mut vertices: Vec<V> = vertices.into_iter().collect();
        vertices.sort();
        vertices.dedup();
        let index_of = build_index(&vertices);
        Digraph {
            vertices,
            arcs: arcs.into_iter().collect(),
            index_of,
        }
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Raw arc list, in insertion order, duplicates included.
    pub fn arcs(&self) -> &[(V, V)] {
        &self.arcs
    }

    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.index_of.get(v).copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Adjacency list of out-neighbors only: arc `(u, v)` contributes `v` to
    /// `u`'s list and nothing to `v`'s.
    pub fn adjacency_list(&self) -> AdjacencyList<V> {
        let mut list: AdjacencyList<V> = self
            .vertices
            .iter()
            .map(|v| (v.clone(), Vec::new()))
            .collect();
        for (origin, destination) in &self.arcs {
            if !list.contains_key(origin) || !list.contains_key(destination) {
                continue;
            }
            list.get_mut(origin).unwrap().push(destination.clone());
        }
        list
    }

    /// 0/1 adjacency matrix, entry `[i][j] = 1` iff some arc goes i → j.
    pub fn adjacency_matrix(&self) -> Matrix {
        let n = self.vertices.len();
        let mut matrix = vec![vec![0; n]; n];
        for (origin, destination) in &self.arcs {
            if let (Some(&i), Some(&j)) = (
                self.index_of.get(origin),
                self.index_of.get(destination),
            ) {
                matrix[i][j] = 1;
            }
        }
        matrix
    }

    /// Incidence matrix: +1 for the arc's origin, −1 for its destination.
    ///
    /// For a self-loop both writes target the same cell and the destination
    /// write wins, leaving −1. Inherited behavior, kept as is.
    pub fn incidence_matrix(&self) -> Matrix {
        let n = self.vertices.len();
        let m = self.arcs.len();
        let mut matrix = vec![vec![0; m]; n];
        for (col, (origin, destination)) in self.arcs.iter().enumerate() {
            if let Some(&i) = self.index_of.get(origin) {
                matrix[i][col] = 1;
            }
            if let Some(&j) = self.index_of.get(destination) {
                matrix[j][col] = -1;
            }
        }
        matrix
    }

    /// Drops arc directions, producing an undirected store over the same
    /// vertex set with one edge per arc. Opposed arc pairs like `(a, b)` and
    /// `(b, a)` stay as two raw edges; adjacency views collapse them anyway.
    pub fn underlying_graph(&self) -> Graph<V> {
        Graph::new(self.vertices.iter().cloned(), self.arcs.iter().cloned())
    }

    /// Inserts a vertex, optionally with arcs attaching it to the digraph.
    /// Validation matches [`Graph::insert_vertex`].
    pub fn insert_vertex(&mut self, id: V, new_arcs: &[(V, V)]) -> Result<()> {
        if self.index_of.contains_key(&id) {
            return Err(GraphError::duplicate_vertex(&id));
        }
        for (origin, destination) in new_arcs {
            if *origin != id && *destination != id {
                return Err(GraphError::invalid_edge(origin, destination));
            }
            let other = if *origin == id { destination } else { origin };
            if *other != id && !self.index_of.contains_key(other) {
                return Err(GraphError::unknown_vertex(other));
            }
        }
        let pos = self.vertices.binary_search(&id).unwrap_err();
        self.vertices.insert(pos, id);
        self.index_of = build_index(&self.vertices);
        self.arcs.extend_from_slice(new_arcs);
        Ok(())
    }

    /// Removes a vertex together with every incident arc, in either role.
    pub fn delete_vertex(&mut self, id: &V) -> Result<()> {
        let pos = match self.index_of.get(id) {
            Some(&pos) => pos,
            None => return Err(GraphError::unknown_vertex(id)),
        };
        self.vertices.remove(pos);
        self.arcs.retain(|(a, b)| a != id && b != id);
        self.index_of = build_index(&self.vertices);
        Ok(())
    }

    /// Petgraph view of this store; node `i` is `vertices()[i]`, edge weights
    /// carry arc positions, dangling arcs are skipped.
    pub fn to_petgraph(&self) -> DiGraph<V> {
        let mut graph = DiGraph::with_capacity(self.vertices.len(), self.arcs.len());
        for v in &self.vertices {
            graph.add_node(v.clone());
        }
        for (pos, (origin, destination)) in self.arcs.iter().enumerate() {
            if let (Some(&i), Some(&j)) = (
                self.index_of.get(origin),
                self.index_of.get(destination),
            ) {
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), pos);
            }
        }
        graph
    }

    /// Out-neighbor indices in ascending order, one row per vertex.
    pub(crate) fn neighbor_indices(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.vertices.len()];
        for (origin, destination) in &self.arcs {
            if let (Some(&i), Some(&j)) = (
                self.index_of.get(origin),
                self.index_of.get(destination),
            ) {
                adj[i].push(j);
            }
        }
        for row in &mut adj {
            radsort::sort(row);
        }
        adj
    }
}
