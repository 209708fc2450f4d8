use crate::graph::VertexId;

/// Failure conditions for graph mutation and queries.
///
/// Every variant is recoverable: the graph is left unchanged when an
/// operation returns an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {0} already exists")]
    DuplicateVertex(VertexId),

    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(VertexId),

    /// Endpoints are reported normalized as (low, high).
    #[error("edge {0} -- {1} not found")]
    EdgeNotFound(VertexId, VertexId),

    #[error("{what} {value} out of range {min}..={max}")]
    IndexOutOfRange {
        what: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;
