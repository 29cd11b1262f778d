use fixedbitset::FixedBitSet;
use hashbrown::{HashMap, HashSet};

use crate::digraph::Digraph;
use crate::graph::Graph;
use crate::types::VertexId;

/// Depth-first forest of an undirected graph.
#[derive(Debug, Clone)]
pub struct DfsForest<V> {
    /// Preorder across the whole forest.
    pub order: Vec<V>,
    /// Tree parent of every vertex; `None` for each tree root.
    pub parents: HashMap<V, Option<V>>,
    /// Non-tree edges, normalized as `(min, max)` pairs; each unordered pair
    /// is recorded once even though both endpoints see it.
    pub back_edges: HashSet<(V, V)>,
}

/// Classification of a digraph's arcs relative to its DFS forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcKind {
    Tree,
    Back,
    Forward,
    Cross,
}

/// Depth-first traversal data of a digraph: one global clock numbers every
/// entry and exit across the whole forest, and every arc occurrence falls in
/// exactly one class.
#[derive(Debug, Clone)]
pub struct DfsClassification<V> {
    /// Preorder across the whole forest.
    pub order: Vec<V>,
    /// Clock value at first visit.
    pub discovery: HashMap<V, usize>,
    /// Clock value when the vertex's out-arcs are exhausted.
    pub finish: HashMap<V, usize>,
    /// Tree parent; `None` for each forest root.
    pub parents: HashMap<V, Option<V>>,
    pub tree: Vec<(V, V)>,
    pub back: Vec<(V, V)>,
    pub forward: Vec<(V, V)>,
    pub cross: Vec<(V, V)>,
}

/// Depth-first search over every component of an undirected graph.
///
/// Roots are tried in sorted vertex order and neighbors are explored in
/// sorted order, so the forest is deterministic. The edge to the immediate
/// tree parent is never reported back; any other edge into an already visited
/// vertex is a back edge.
///
/// The recursion is expressed as an explicit stack of
/// `(vertex, neighbor position)` frames, so deep graphs cannot exhaust the
/// call stack; the produced forest is identical to the recursive version.
pub fn dfs_forest<V: VertexId>(g: &Graph<V>) -> DfsForest<V> {
    let vertices = g.vertices();
    let adj = g.neighbor_indices();
    let n = vertices.len();

    let mut visited = FixedBitSet::with_capacity(n);
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut order = Vec::with_capacity(n);
    let mut back: HashSet<(usize, usize)> = HashSet::new();

    for root in 0..n {
        if visited.contains(root) {
            continue;
        }
        visited.insert(root);
        order.push(root);
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (u, pos) = *frame;
            if pos >= adj[u].len() {
                stack.pop();
                continue;
            }
            frame.1 += 1;
            let v = adj[u][pos];
            if Some(v) == parent[u] {
                continue;
            }
            if visited.contains(v) {
                back.insert(if u < v { (u, v) } else { (v, u) });
            } else {
                visited.insert(v);
                parent[v] = Some(u);
                order.push(v);
                stack.push((v, 0));
            }
        }
    }

    DfsForest {
        order: order.iter().map(|&u| vertices[u].clone()).collect(),
        parents: (0..n)
            .map(|u| (vertices[u].clone(), parent[u].map(|p| vertices[p].clone())))
            .collect(),
        back_edges: back
            .into_iter()
            .map(|(a, b)| (vertices[a].clone(), vertices[b].clone()))
            .collect(),
    }
}

/// Depth-first classification of a digraph's arcs.
///
/// One clock runs across the whole forest and is bumped on every entry and
/// every exit, so a later component's discovery times all exceed an earlier
/// component's finish times. For each outgoing arc occurrence `(u, v)`:
/// an unvisited `v` makes a tree arc; a visited but unfinished `v` is an
/// ancestor on the current path, a back arc; a finished `v` discovered after
/// `u` makes a forward arc, otherwise a cross arc.
///
/// Roots are tried in sorted order, and the classification of a structurally
/// ambiguous arc depends on that traversal order, not on the graph alone.
pub fn dfs_classify<V: VertexId>(g: &Digraph<V>) -> DfsClassification<V> {
    const UNSEEN: usize = usize::MAX;

    let vertices = g.vertices();
    let adj = g.neighbor_indices();
    let n = vertices.len();

    let mut discovery = vec![UNSEEN; n];
    let mut finish = vec![UNSEEN; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut order = Vec::with_capacity(n);
    let mut clock = 0usize;

    let mut tree = Vec::new();
    let mut back = Vec::new();
    let mut forward = Vec::new();
    let mut cross = Vec::new();

    for root in 0..n {
        if discovery[root] != UNSEEN {
            continue;
        }
        discovery[root] = clock;
        clock += 1;
        order.push(root);
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (u, pos) = *frame;
            if pos >= adj[u].len() {
                finish[u] = clock;
                clock += 1;
                stack.pop();
                continue;
            }
            frame.1 += 1;
            let v = adj[u][pos];
            if discovery[v] == UNSEEN {
                tree.push((u, v));
                parent[v] = Some(u);
                discovery[v] = clock;
                clock += 1;
                order.push(v);
                stack.push((v, 0));
            } else if finish[v] == UNSEEN {
                back.push((u, v));
            } else if discovery[v] > discovery[u] {
                forward.push((u, v));
            } else {
                cross.push((u, v));
            }
        }
    }

    let arcs = |pairs: Vec<(usize, usize)>| -> Vec<(V, V)> {
        pairs
            .into_iter()
            .map(|(a, b)| (vertices[a].clone(), vertices[b].clone()))
            .collect()
    };

    DfsClassification {
        order: order.iter().map(|&u| vertices[u].clone()).collect(),
        discovery: (0..n)
            .map(|u| (vertices[u].clone(), discovery[u]))
            .collect(),
        finish: (0..n).map(|u| (vertices[u].clone(), finish[u])).collect(),
        parents: (0..n)
            .map(|u| (vertices[u].clone(), parent[u].map(|p| vertices[p].clone())))
            .collect(),
        tree: arcs(tree),
        back: arcs(back),
        forward: arcs(forward),
        cross: arcs(cross),
    }
}
