use std::fmt::Debug;
use std::hash::Hash;

/// Bound shared by every vertex label the crate works with.
///
/// Labels are opaque values: they only need a total order (index positions
/// in a store follow the sorted label order), hashing and cloning.
/// Implemented for anything that qualifies, so `&str`, `String`, `u32`, ...
/// all work out of the box.
pub trait VertexId: Clone + Eq + Ord + Hash + Debug {}

impl<T: Clone + Eq + Ord + Hash + Debug> VertexId for T {}

/// Adjacency list keyed by vertex label.
///
/// Every vertex of the store appears as a key. Neighbor vectors keep
/// edge-insertion order and are NOT deduplicated: a multi-edge shows up once
/// per copy and a self-loop contributes twice to its own list (one insertion
/// per edge direction).
pub type AdjacencyList<V> = hashbrown::HashMap<V, Vec<V>>;

/// Dense matrix used for both adjacency (0/1) and incidence (0/1 or ±1)
/// representations. Rows follow the sorted vertex order, incidence columns
/// follow the raw edge/arc positions.
pub type Matrix = Vec<Vec<i8>>;

/// Petgraph view of an undirected store. Edge weights carry the position of
/// the edge in the store's raw edge list.
pub type UnGraph<V> = petgraph::graph::UnGraph<V, usize>;

/// Petgraph view of a directed store. Edge weights carry the arc position.
pub type DiGraph<V> = petgraph::graph::DiGraph<V, usize>;
