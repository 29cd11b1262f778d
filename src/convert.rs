//! Conversions between the adjacency matrix and adjacency list views.
//! Both directions apply the builders' permissive policy: labels that do not
//! resolve against the supplied vertex ordering are skipped, never an error.

use crate::types::{AdjacencyList, Matrix, VertexId};

/// Reads a 0/1 adjacency matrix back into an adjacency list. Neighbor
/// vectors come out in ascending vertex order, one entry per saturated cell.
pub fn adjacency_matrix_to_list<V: VertexId>(
    matrix: &Matrix,
    vertices: &[V],
) -> AdjacencyList<V> {
    let mut list: AdjacencyList<V> = vertices
        .iter()
        .map(|v| (v.clone(), Vec::new()))
        .collect();
    for (i, origin) in vertices.iter().enumerate() {
        for (j, destination) in vertices.iter().enumerate() {
            if matrix[i][j] == 1 {
                list.get_mut(origin).unwrap().push(destination.clone());
            }
        }
    }
    list
}

/// Writes an adjacency list into a 0/1 matrix under the supplied vertex
/// ordering. Unknown keys or neighbors are skipped silently.
pub fn adjacency_list_to_matrix<V: VertexId>(list: &AdjacencyList<V>, vertices: &[V]) -> Matrix {
    let n = vertices.len();
    let index = crate::graph::build_index(vertices);
    let mut matrix = vec![vec![0; n]; n];
    for (origin, neighbors) in list {
        let Some(&i) = index.get(origin) else {
            continue;
        };
        for destination in neighbors {
            if let Some(&j) = index.get(destination) {
                matrix[i][j] = 1;
            }
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digraph::Digraph;
    use crate::graph::Graph;

    #[test]
    fn test_matrix_round_trips_through_list() {
        let g = Graph::new(
            ["a", "b", "c", "d"],
            [("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")],
        );
        let matrix = g.adjacency_matrix();
        let list = adjacency_matrix_to_list(&matrix, g.vertices());
        assert_eq!(list["a"], vec!["b", "d"]);
        assert_eq!(adjacency_list_to_matrix(&list, g.vertices()), matrix);
    }

    #[test]
    fn test_directed_matrix_stays_directed() {
        let g = Digraph::new(["a", "b", "c"], [("a", "b"), ("b", "c")]);
        let matrix = g.adjacency_matrix();
        let list = adjacency_matrix_to_list(&matrix, g.vertices());
        assert_eq!(list["a"], vec!["b"]);
        assert_eq!(list["c"], Vec::<&str>::new());
        assert_eq!(adjacency_list_to_matrix(&list, g.vertices()), matrix);
    }

    #[test]
    fn test_unknown_labels_are_skipped() {
        let g = Graph::new(["a", "b"], [("a", "b")]);
        let mut list = g.adjacency_list();
        list.insert("ghost", vec!["a"]);
        list.get_mut("a").unwrap().push("phantom");
        let matrix = adjacency_list_to_matrix(&list, g.vertices());
        assert_eq!(matrix, vec![vec![0, 1], vec![1, 0]]);
    }
}
