use std::fmt::Debug;

use thiserror::Error;

/// Errors surfaced by BFS start validation and the mutation operations.
///
/// Builders never produce these: an edge referencing a label missing from the
/// vertex set is silently skipped there, by design.
///
/// The offending labels are rendered eagerly so the error type stays
/// non-generic and trivially `Send + Sync`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A referenced vertex is not present in the store.
    #[error("vertex {0} is not in the graph")]
    UnknownVertex(String),
    /// Insertion of a vertex that already exists.
    #[error("vertex {0} is already in the graph")]
    DuplicateVertex(String),
    /// An edge supplied on insertion does not involve the inserted vertex.
    #[error("edge ({0}, {1}) does not involve the inserted vertex")]
    InvalidEdge(String, String),
}

impl GraphError {
    pub(crate) fn unknown_vertex<V: Debug>(v: &V) -> Self {
        GraphError::UnknownVertex(format!("{:?}", v))
    }

    pub(crate) fn duplicate_vertex<V: Debug>(v: &V) -> Self {
        GraphError::DuplicateVertex(format!("{:?}", v))
    }

    pub(crate) fn invalid_edge<V: Debug>(a: &V, b: &V) -> Self {
        GraphError::InvalidEdge(format!("{:?}", a), format!("{:?}", b))
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
