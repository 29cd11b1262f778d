use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};

use crate::digraph::Digraph;
use crate::graph::Graph;
use crate::types::VertexId;

/// Outcome of the two-coloring test.
#[derive(Debug, Clone)]
pub enum Bipartiteness<V> {
    /// The graph admits a 2-coloring; the two partitions cover every vertex.
    Bipartite { partitions: [HashSet<V>; 2] },
    /// The first same-color conflict found, reported as the odd cycle through
    /// the conflicting edge.
    OddCycle { cycle: Vec<V> },
}

impl<V> Bipartiteness<V> {
    pub fn is_bipartite(&self) -> bool {
        matches!(self, Bipartiteness::Bipartite { .. })
    }
}

/// Two-colors the graph one connected component at a time.
///
/// Components are entered from their sorted-first vertex, which always gets
/// color 0, so isolated vertices land in the first partition. Every
/// neighbor must take the color opposite to its visitor; the first neighbor
/// found wearing its visitor's own color proves an odd cycle and the search
/// stops right there, remaining components unvisited. The witness cycle is
/// rebuilt by walking both endpoints' BFS parents up to their lowest common
/// ancestor, so its length is always odd.
pub fn is_bipartite<V: VertexId>(g: &Graph<V>) -> Bipartiteness<V> {
    let vertices = g.vertices();
    let adj = g.neighbor_indices();
    let n = vertices.len();

    let mut color: Vec<Option<u8>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];

    for root in 0..n {
        if color[root].is_some() {
            continue;
        }
        color[root] = Some(0);
        let mut queue = VecDeque::new();
        queue.push_back(root);
        while let Some(u) = queue.pop_front() {
            for &v in &adj[u] {
                match color[v] {
                    None => {
                        color[v] = Some(1 - color[u].unwrap());
                        parent[v] = Some(u);
                        queue.push_back(v);
                    }
                    Some(c) if c == color[u].unwrap() => {
                        let cycle = odd_cycle(u, v, &parent)
                            .into_iter()
                            .map(|w| vertices[w].clone())
                            .collect();
                        return Bipartiteness::OddCycle { cycle };
                    }
                    Some(_) => {}
                }
            }
        }
    }

    let mut partitions = [HashSet::new(), HashSet::new()];
    for u in 0..n {
        partitions[color[u].unwrap() as usize].insert(vertices[u].clone());
    }
    Bipartiteness::Bipartite { partitions }
}

/// Two-colors the underlying graph of a digraph (arc directions ignored).
pub fn is_bipartite_digraph<V: VertexId>(g: &Digraph<V>) -> Bipartiteness<V> {
    is_bipartite(&g.underlying_graph())
}

/// Closes the conflicting edge `(u, v)` into a cycle: `u`'s ancestor chain
/// down to the lowest common ancestor, then back down to `v`. A self-loop
/// degenerates to the single-vertex cycle.
fn odd_cycle(u: usize, v: usize, parent: &[Option<usize>]) -> Vec<usize> {
    let mut ancestors = vec![u];
    let mut x = u;
    while let Some(p) = parent[x] {
        ancestors.push(p);
        x = p;
    }
    let position: HashMap<usize, usize> =
        ancestors.iter().enumerate().map(|(i, &w)| (w, i)).collect();

    let mut tail = Vec::new();
    let mut y = v;
    while !position.contains_key(&y) {
        tail.push(y);
        y = parent[y].expect("conflicting endpoints share a BFS tree");
    }

    let mut cycle = ancestors[..=position[&y]].to_vec();
    tail.reverse();
    cycle.extend(tail);
    cycle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partitions_of<V: VertexId>(r: &Bipartiteness<V>) -> [Vec<V>; 2] {
        match r {
            Bipartiteness::Bipartite { partitions } => {
                let mut a: Vec<V> = partitions[0].iter().cloned().collect();
                let mut b: Vec<V> = partitions[1].iter().cloned().collect();
                a.sort();
                b.sort();
                [a, b]
            }
            Bipartiteness::OddCycle { .. } => panic!("expected a bipartite graph"),
        }
    }

    fn witness_of<V: VertexId>(r: &Bipartiteness<V>) -> Vec<V> {
        match r {
            Bipartiteness::OddCycle { cycle } => cycle.clone(),
            Bipartiteness::Bipartite { .. } => panic!("expected an odd cycle"),
        }
    }

    #[test]
    fn test_path_splits_by_parity() {
        let g = Graph::new(
            ["a", "b", "c", "d", "e"],
            [("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")],
        );
        let r = is_bipartite(&g);
        assert!(r.is_bipartite());
        assert_eq!(partitions_of(&r), [vec!["a", "c", "e"], vec!["b", "d"]]);
    }

    #[test]
    fn test_even_cycle_is_balanced() {
        let g = Graph::new(
            ["a", "b", "c", "d"],
            [("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")],
        );
        let r = is_bipartite(&g);
        assert_eq!(partitions_of(&r), [vec!["a", "c"], vec!["b", "d"]]);
    }

    #[test]
    fn test_triangle_yields_odd_witness() {
        let g = Graph::new(["a", "b", "c"], [("a", "b"), ("b", "c"), ("c", "a")]);
        let r = is_bipartite(&g);
        assert!(!r.is_bipartite());
        let cycle = witness_of(&r);
        assert_eq!(cycle.len(), 3);
    }

    #[test]
    fn test_witness_is_a_real_odd_cycle() {
        let g = Graph::new(
            ["a", "b", "c", "d", "e"],
            [("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "a")],
        );
        let r = is_bipartite(&g);
        let cycle = witness_of(&r);
        assert_eq!(cycle.len() % 2, 1);
        for i in 0..cycle.len() {
            let u = cycle[i];
            let v = cycle[(i + 1) % cycle.len()];
            assert!(g.is_adjacent(&u, &v), "{:?} and {:?} must be adjacent", u, v);
        }
    }

    #[test]
    fn test_self_loop_is_the_shortest_odd_cycle() {
        let g = Graph::new(["a"], [("a", "a")]);
        let r = is_bipartite(&g);
        assert_eq!(witness_of(&r), vec!["a"]);
    }

    #[test]
    fn test_components_merge_into_global_partitions() {
        // two disjoint edges plus an isolated vertex; every component start
        // takes color 0
        let g = Graph::new(["a", "b", "x", "y", "z"], [("a", "b"), ("x", "y")]);
        let r = is_bipartite(&g);
        assert_eq!(partitions_of(&r), [vec!["a", "x", "z"], vec!["b", "y"]]);
    }

    #[test]
    fn test_conflict_in_a_later_component_is_found() {
        let g = Graph::new(
            ["a", "b", "x", "y", "z"],
            [("a", "b"), ("x", "y"), ("y", "z"), ("z", "x")],
        );
        assert!(!is_bipartite(&g).is_bipartite());
    }

    #[test]
    fn test_digraph_uses_underlying_graph() {
        // a → b ← c with c → a: a triangle once direction is dropped
        let g = Digraph::new(["a", "b", "c"], [("a", "b"), ("c", "b"), ("c", "a")]);
        assert!(!is_bipartite_digraph(&g).is_bipartite());

        let chain = Digraph::new(["a", "b", "c"], [("a", "b"), ("c", "b")]);
        let r = is_bipartite_digraph(&chain);
        assert_eq!(partitions_of(&r), [vec!["a", "c"], vec!["b"]]);
    }
}
