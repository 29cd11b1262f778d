use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use hashbrown::{HashMap, HashSet};

use crate::digraph::Digraph;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::types::VertexId;

/// Everything a level-order traversal discovers from its start vertex.
#[derive(Debug, Clone)]
pub struct BfsResult<V> {
    /// Vertices in dequeue order; no vertex appears twice.
    pub order: Vec<V>,
    /// Edge distance from the start, for reached vertices only.
    pub distances: HashMap<V, usize>,
    /// BFS-tree parent of every reached vertex; `None` for the start.
    pub parents: HashMap<V, Option<V>>,
    /// Vertices with a known distance.
    pub reachable: HashSet<V>,
}

/// Breadth-first search from `start` over an undirected graph.
///
/// Neighbors are taken in ascending label order, which fixes both the
/// visitation order and the parent choice when several shortest paths exist.
/// A vertex is enqueued at most once: candidates already visited or already
/// pending are skipped. Fails with [`GraphError::UnknownVertex`] when `start`
/// is not in the store.
pub fn bfs<V: VertexId>(g: &Graph<V>, start: &V) -> Result<BfsResult<V>> {
    let s = g
        .index_of(start)
        .ok_or_else(|| GraphError::unknown_vertex(start))?;
    Ok(run(g.vertices(), &g.neighbor_indices(), s))
}

/// Breadth-first search over a digraph, following outgoing arcs only.
pub fn bfs_digraph<V: VertexId>(g: &Digraph<V>, start: &V) -> Result<BfsResult<V>> {
    let s = g
        .index_of(start)
        .ok_or_else(|| GraphError::unknown_vertex(start))?;
    Ok(run(g.vertices(), &g.neighbor_indices(), s))
}

/// True when every vertex is reachable from the first one. The empty graph
/// and the single-vertex graph count as connected.
pub fn is_connected<V: VertexId>(g: &Graph<V>) -> bool {
    if g.vertex_count() <= 1 {
        return true;
    }
    run(g.vertices(), &g.neighbor_indices(), 0).order.len() == g.vertex_count()
}

fn run<V: VertexId>(vertices: &[V], adj: &[Vec<usize>], start: usize) -> BfsResult<V> {
    let n = vertices.len();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut pending = FixedBitSet::with_capacity(n);
    let mut dist = vec![0usize; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];

    let mut order = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);
    pending.insert(start);

    while let Some(u) = queue.pop_front() {
        visited.insert(u);
        order.push(u);
        for &v in &adj[u] {
            if visited.contains(v) || pending.contains(v) {
                continue;
            }
            queue.push_back(v);
            pending.insert(v);
            dist[v] = dist[u] + 1;
            parent[v] = Some(u);
        }
    }

    let mut result = BfsResult {
        order: Vec::with_capacity(order.len()),
        distances: HashMap::with_capacity(order.len()),
        parents: HashMap::with_capacity(order.len()),
        reachable: HashSet::with_capacity(order.len()),
    };
    for &u in &order {
        let label = vertices[u].clone();
        result.order.push(label.clone());
        result.distances.insert(label.clone(), dist[u]);
        result
            .parents
            .insert(label.clone(), parent[u].map(|p| vertices[p].clone()));
        result.reachable.insert(label);
    }
    result
}
