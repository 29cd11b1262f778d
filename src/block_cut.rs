use fixedbitset::FixedBitSet;
use hashbrown::HashSet;

use crate::graph::Graph;
use crate::types::VertexId;

/// Articulation points and blocks of an undirected graph.
///
/// A block is a maximal 2-edge-connected subgraph or a bridge, reported as
/// its vertex set. A cut vertex belongs to every block it separates, so the
/// same vertex can appear in several blocks. Isolated vertices belong to no
/// block at all.
#[derive(Debug, Clone)]
pub struct BlockCut<V> {
    pub articulation_points: HashSet<V>,
    pub blocks: Vec<HashSet<V>>,
}

/// Frame of the explicit DFS stack: vertex, next neighbor position and the
/// number of tree children found so far.
struct Frame {
    u: usize,
    pos: usize,
    children: usize,
}

/// Computes articulation points and blocks with the DFS low-point method.
///
/// For every vertex the traversal tracks its discovery time and the lowest
/// discovery time reachable from its subtree using at most one back edge.
/// Tree and back edges are pushed on an edge stack as normalized pairs; a
/// back edge is pushed only when it leads to an earlier discovery time, which
/// keeps the pair from being pushed again from the other endpoint. When a
/// finished child `v` of `u` satisfies `low[v] >= d[u]` (and `u` is not a
/// root), `u` is a cut vertex and the stack is popped down to the tree edge
/// `(u, v)`, the popped edges forming one block. A root is a cut vertex when
/// it has more than one tree child, with the same extraction at each
/// qualifying child. Whatever remains on the stack when a component's
/// traversal ends forms that component's last block.
///
/// The DFS runs on an explicit frame stack, so recursion depth is not bound
/// to the graph's depth; results match the recursive formulation exactly.
pub fn articulation_points_and_blocks<V: VertexId>(g: &Graph<V>) -> BlockCut<V> {
    let vertices = g.vertices();
    let adj = g.neighbor_indices();
    let n = vertices.len();

    let mut visited = FixedBitSet::with_capacity(n);
    let mut discovery = vec![0usize; n];
    let mut low = vec![0usize; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut is_cut = vec![false; n];
    let mut time = 0usize;

    let mut edge_stack: Vec<(usize, usize)> = Vec::new();
    let mut blocks: Vec<HashSet<usize>> = Vec::new();

    for root in 0..n {
        if visited.contains(root) {
            continue;
        }
        visited.insert(root);
        discovery[root] = time;
        low[root] = time;
        time += 1;

        let mut frames = vec![Frame {
            u: root,
            pos: 0,
            children: 0,
        }];
        while let Some(frame) = frames.last_mut() {
            let u = frame.u;
            let pos = frame.pos;

            if pos < adj[u].len() {
                frame.pos += 1;
                let v = adj[u][pos];
                if Some(v) == parent[u] {
                    continue;
                }
                if visited.contains(v) {
                    // back edge; pushed only from the endpoint that sees the
                    // earlier discovery time
                    if discovery[v] < discovery[u] {
                        edge_stack.push(normalize(u, v));
                    }
                    low[u] = low[u].min(discovery[v]);
                } else {
                    visited.insert(v);
                    parent[v] = Some(u);
                    discovery[v] = time;
                    low[v] = time;
                    time += 1;
                    frame.children += 1;
                    edge_stack.push(normalize(u, v));
                    frames.push(Frame {
                        u: v,
                        pos: 0,
                        children: 0,
                    });
                }
                continue;
            }

            frames.pop();
            let v = u;
            if let Some(pf) = frames.last_mut() {
                let u = pf.u;
                low[u] = low[u].min(low[v]);
                let qualifies = match parent[u] {
                    Some(_) => low[v] >= discovery[u],
                    None => pf.children > 1,
                };
                if qualifies {
                    is_cut[u] = true;
                    blocks.push(pop_block(&mut edge_stack, normalize(u, v)));
                }
            }
        }

        // whatever the articulation events did not flush belongs to the
        // component's final block
        if !edge_stack.is_empty() {
            let mut block = HashSet::new();
            for (a, b) in edge_stack.drain(..) {
                block.insert(a);
                block.insert(b);
            }
            blocks.push(block);
        }
    }

    BlockCut {
        articulation_points: (0..n)
            .filter(|&u| is_cut[u])
            .map(|u| vertices[u].clone())
            .collect(),
        blocks: blocks
            .into_iter()
            .map(|block| block.into_iter().map(|u| vertices[u].clone()).collect())
            .collect(),
    }
}

fn normalize(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

fn pop_block(edge_stack: &mut Vec<(usize, usize)>, until: (usize, usize)) -> HashSet<usize> {
    let mut block = HashSet::new();
    while let Some(edge) = edge_stack.pop() {
        block.insert(edge.0);
        block.insert(edge.1);
        if edge == until {
            break;
        }
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::is_connected;
    use crate::testing::random_graphs::random_graph;

    fn assert_blocks<V: VertexId>(result: &BlockCut<V>, expected: &[&[V]]) {
        let mut found: Vec<Vec<V>> = result
            .blocks
            .iter()
            .map(|b| {
                let mut b: Vec<V> = b.iter().cloned().collect();
                b.sort();
                b
            })
            .collect();
        found.sort();
        let mut expected: Vec<Vec<V>> = expected.iter().map(|b| b.to_vec()).collect();
        expected.sort();
        assert_eq!(found, expected);
    }

    fn cuts<V: VertexId>(result: &BlockCut<V>) -> Vec<V> {
        let mut cuts: Vec<V> = result.articulation_points.iter().cloned().collect();
        cuts.sort();
        cuts
    }

    #[test]
    fn test_single_edge_is_one_block() {
        let g = Graph::new(["a", "b"], [("a", "b")]);
        let r = articulation_points_and_blocks(&g);
        assert!(r.articulation_points.is_empty());
        assert_blocks(&r, &[&["a", "b"]]);
    }

    #[test]
    fn test_triangle_is_biconnected() {
        let g = Graph::new(["a", "b", "c"], [("a", "b"), ("b", "c"), ("c", "a")]);
        let r = articulation_points_and_blocks(&g);
        assert!(r.articulation_points.is_empty());
        assert_blocks(&r, &[&["a", "b", "c"]]);
    }

    #[test]
    fn test_chain_middle_vertex_is_cut() {
        let g = Graph::new(["a", "b", "c"], [("a", "b"), ("b", "c")]);
        let r = articulation_points_and_blocks(&g);
        assert_eq!(cuts(&r), vec!["b"]);
        assert_blocks(&r, &[&["a", "b"], &["b", "c"]]);
    }

    #[test]
    fn test_root_with_two_children_is_cut() {
        let g = Graph::new(["a", "b", "c"], [("a", "b"), ("a", "c")]);
        let r = articulation_points_and_blocks(&g);
        assert_eq!(cuts(&r), vec!["a"]);
        assert_blocks(&r, &[&["a", "b"], &["a", "c"]]);
    }

    #[test]
    fn test_bowtie_shares_one_cut_vertex() {
        // a---b   d---e
        //  \ /     \ /
        //   +---c---+   (two triangles glued at c)
        let g = Graph::new(
            ["a", "b", "c", "d", "e"],
            [
                ("a", "b"),
                ("b", "c"),
                ("c", "a"),
                ("c", "d"),
                ("d", "e"),
                ("e", "c"),
            ],
        );
        let r = articulation_points_and_blocks(&g);
        assert_eq!(cuts(&r), vec!["c"]);
        assert_blocks(&r, &[&["a", "b", "c"], &["c", "d", "e"]]);
    }

    #[test]
    fn test_complete_graph_is_one_block() {
        let vertices = ["a", "b", "c", "d"];
        let mut edges = Vec::new();
        for i in 0..vertices.len() {
            for j in i + 1..vertices.len() {
                edges.push((vertices[i], vertices[j]));
            }
        }
        let r = articulation_points_and_blocks(&Graph::new(vertices, edges));
        assert!(r.articulation_points.is_empty());
        assert_blocks(&r, &[&["a", "b", "c", "d"]]);
    }

    #[test]
    fn test_three_cycles_joined_by_bridges() {
        // A-B-C triangle, bridge C-D, D-E-F triangle, bridge D-G, G-H-I triangle
        let g = Graph::new(
            ["A", "B", "C", "D", "E", "F", "G", "H", "I"],
            [
                ("A", "B"),
                ("A", "C"),
                ("B", "C"),
                ("C", "D"),
                ("D", "E"),
                ("D", "F"),
                ("E", "F"),
                ("D", "G"),
                ("G", "H"),
                ("G", "I"),
                ("H", "I"),
            ],
        );
        let r = articulation_points_and_blocks(&g);
        assert_eq!(cuts(&r), vec!["C", "D", "G"]);
        assert_blocks(
            &r,
            &[
                &["A", "B", "C"],
                &["C", "D"],
                &["D", "E", "F"],
                &["D", "G"],
                &["G", "H", "I"],
            ],
        );
    }

    #[test]
    fn test_isolated_vertices_have_no_block() {
        let g = Graph::new(["a", "b", "c"], [("a", "b")]);
        let r = articulation_points_and_blocks(&g);
        assert!(r.articulation_points.is_empty());
        assert_blocks(&r, &[&["a", "b"]]);
    }

    #[test]
    fn test_disconnected_components_decompose_independently() {
        let g = Graph::new(
            ["a", "b", "c", "x", "y", "z"],
            [("a", "b"), ("b", "c"), ("x", "y"), ("y", "z"), ("z", "x")],
        );
        let r = articulation_points_and_blocks(&g);
        assert_eq!(cuts(&r), vec!["b"]);
        assert_blocks(&r, &[&["a", "b"], &["b", "c"], &["x", "y", "z"]]);
    }

    /// Ground truth: `v` is an articulation point iff deleting it increases
    /// the component count of the graph restricted to the remaining vertices.
    fn brute_force_cuts(g: &Graph<u32>) -> Vec<u32> {
        let components = |g: &Graph<u32>| petgraph::algo::connected_components(&g.to_petgraph());
        let before = components(g);
        let mut cuts = Vec::new();
        for v in g.vertices() {
            let mut reduced = g.clone();
            reduced.delete_vertex(v).unwrap();
            // a non-cut vertex keeps the count at `before` (its component
            // survives without it); an isolated vertex even drops it by one
            if components(&reduced) > before {
                cuts.push(*v);
            }
        }
        cuts
    }

    #[test]
    fn test_matches_brute_force_on_random_graphs() {
        for seed in 0..8u64 {
            let g = random_graph(18, 24, seed);
            let r = articulation_points_and_blocks(&g);
            assert_eq!(cuts(&r), brute_force_cuts(&g), "seed {}", seed);
        }
    }

    #[test]
    fn test_block_union_covers_connected_graphs() {
        for seed in 0..5u64 {
            let g = random_graph(20, 30, seed);
            assert!(is_connected(&g));
            let r = articulation_points_and_blocks(&g);
            let mut covered: HashSet<u32> = HashSet::new();
            for block in &r.blocks {
                covered.extend(block.iter().copied());
            }
            assert_eq!(covered.len(), g.vertex_count());
        }
    }
}
