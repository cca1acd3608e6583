use thiserror::Error;

use crate::id::NodeId;

/// Errors surfaced by graph queries and the shortest-path engine.
///
/// Duplicate inserts, missing lookups and unreachable targets are not errors;
/// they are reported through `bool` / `Option` return values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The node is not contained in the graph. Signals a caller bug, not a
    /// transient condition.
    #[error("node {0} is not contained in the graph")]
    NodeNotFound(NodeId),

    /// A textual id did not match the `<Type>_<n>` form.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// The edge-weight callback returned a negative or NaN weight.
    #[error("invalid edge weight {weight} between {from} and {to}")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },
}

pub type Result<T> = std::result::Result<T, GraphError>;
