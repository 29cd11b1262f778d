//! Vertex insertion and deletion applied directly to derived
//! representations, for callers that hold an adjacency list or matrix
//! without the store it came from. The store-level operations live on
//! [`crate::Graph`] and [`crate::Digraph`].

use hashbrown::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::build_index;
use crate::types::{AdjacencyList, Matrix, VertexId};

/// Adds an isolated vertex to an adjacency list.
pub fn insert_vertex_adjacency_list<V: VertexId>(
    list: &AdjacencyList<V>,
    new_id: V,
) -> Result<AdjacencyList<V>> {
    if list.contains_key(&new_id) {
        return Err(GraphError::duplicate_vertex(&new_id));
    }
    let mut updated = list.clone();
    updated.insert(new_id, Vec::new());
    Ok(updated)
}

/// Removes a vertex from an adjacency list together with every mention of it
/// in the remaining neighbor vectors.
pub fn delete_vertex_adjacency_list<V: VertexId>(
    list: &AdjacencyList<V>,
    id: &V,
) -> Result<AdjacencyList<V>> {
    if !list.contains_key(id) {
        return Err(GraphError::unknown_vertex(id));
    }
    Ok(list
        .iter()
        .filter(|(v, _)| *v != id)
        .map(|(v, neighbors)| {
            let kept: Vec<V> = neighbors.iter().filter(|n| *n != id).cloned().collect();
            (v.clone(), kept)
        })
        .collect())
}

/// Grows an adjacency matrix by one all-zero row and column for `new_id`.
///
/// The new vertex takes its sorted position, so existing entries are remapped
/// through the new index order. Returns the resized matrix together with the
/// updated vertex ordering and index map.
pub fn insert_vertex_adjacency_matrix<V: VertexId>(
    matrix: &Matrix,
    vertices: &[V],
    new_id: V,
) -> Result<(Matrix, Vec<V>, HashMap<V, usize>)> {
    if vertices.contains(&new_id) {
        return Err(GraphError::duplicate_vertex(&new_id));
    }
    let mut updated_vertices = vertices.to_vec();
    updated_vertices.push(new_id);
    updated_vertices.sort();
    let index = build_index(&updated_vertices);

    let n = updated_vertices.len();
    let mut updated = vec![vec![0; n]; n];
    for (i, a) in vertices.iter().enumerate() {
        for (j, b) in vertices.iter().enumerate() {
            updated[index[a]][index[b]] = matrix[i][j];
        }
    }
    Ok((updated, updated_vertices, index))
}

/// Shrinks an adjacency matrix by the row and column of `id`, keeping the
/// remaining rows and columns in their relative order.
pub fn delete_vertex_adjacency_matrix<V: VertexId>(
    matrix: &Matrix,
    vertices: &[V],
    id: &V,
) -> Result<(Matrix, Vec<V>, HashMap<V, usize>)> {
    let removed = match vertices.iter().position(|v| v == id) {
        Some(pos) => pos,
        None => return Err(GraphError::unknown_vertex(id)),
    };
    let updated_vertices: Vec<V> = vertices.iter().filter(|v| *v != id).cloned().collect();
    let index = build_index(&updated_vertices);

    let updated = matrix
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != removed)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|(j, _)| *j != removed)
                .map(|(_, &cell)| cell)
                .collect()
        })
        .collect();
    Ok((updated, updated_vertices, index))
}
