use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::digraph::Digraph;
use crate::graph::Graph;

/// Random connected graph over vertices `0..n`: a random spanning tree plus
/// random extra edges up to `m` in total. Extra edges may repeat or form
/// self-loops, which the stores tolerate.
pub fn random_graph(n: usize, m: usize, seed: u64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges: Vec<(u32, u32)> = Vec::with_capacity(m);

    for i in 1..n {
        let j = rng.random_range(0..i);
        edges.push((i as u32, j as u32));
    }
    while edges.len() < m {
        let s = rng.random_range(0..n) as u32;
        let t = rng.random_range(0..n) as u32;
        edges.push((s, t));
    }

    Graph::new(0..n as u32, edges)
}

/// Random digraph over vertices `0..n`: a randomly oriented spanning tree
/// plus random extra arcs up to `m` in total.
pub fn random_digraph(n: usize, m: usize, seed: u64) -> Digraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut arcs: Vec<(u32, u32)> = Vec::with_capacity(m);

    for i in 1..n {
        let j = rng.random_range(0..i);
        if rng.random_bool(0.5) {
            arcs.push((i as u32, j as u32));
        } else {
            arcs.push((j as u32, i as u32));
        }
    }
    while arcs.len() < m {
        let s = rng.random_range(0..n) as u32;
        let t = rng.random_range(0..n) as u32;
        arcs.push((s, t));
    }

    Digraph::new(0..n as u32, arcs)
}
