// #![warn(missing_docs)]

//! # labgraph
//!
//! A Rust library for analyzing labeled graphs and digraphs held as explicit
//! vertex/edge collections: structural representations (adjacency list,
//! adjacency matrix, incidence matrix), BFS, DFS with arc classification,
//! bipartiteness testing and block-cut decomposition (articulation points
//! and blocks).
//!
//! Based on [`petgraph`](https://docs.rs/petgraph) for the ecosystem-facing
//! views; the stores themselves keep labels and raw edge positions, so
//! multi-edges and permissive edge lists survive round trips.
//!
//! ```
//! use labgraph::Graph;
//! use labgraph::block_cut::articulation_points_and_blocks;
//!
//! // two triangles glued at "c"
//! let g = Graph::new(
//!     ["a", "b", "c", "d", "e"],
//!     [("a", "b"), ("b", "c"), ("c", "a"), ("c", "d"), ("d", "e"), ("e", "c")],
//! );
//! let decomposition = articulation_points_and_blocks(&g);
//! assert!(decomposition.articulation_points.contains("c"));
//! assert_eq!(decomposition.blocks.len(), 2);
//! ```

pub mod bfs;
pub mod bipartite;
pub mod block_cut;
pub mod convert;
pub mod debugging;
pub mod dfs;
pub mod digraph;
pub mod error;
pub mod graph;
pub mod input;
pub mod mutation;
pub mod output;
pub mod testing;
pub mod types;

pub use digraph::Digraph;
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use types::{AdjacencyList, Matrix, VertexId};
