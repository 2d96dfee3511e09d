use thiserror::Error;

/// The error type of all fallible graph operations.
///
/// Errors are raised before any mutation takes place, so a failed call leaves the graph exactly
/// as it was. Ordinary "negative" outcomes are not errors: an unreachable vertex or a spanning
/// tree that does not exist are reported as `None` by the respective algorithms.
///
/// # Examples
///
/// ```
/// use lgraphs::prelude::*;
///
/// let mut forest = Forest::new();
/// forest.add_edge(0, 1).unwrap();
/// forest.add_edge(1, 2).unwrap();
///
/// match forest.add_edge(2, 0) {
///     Err(GraphError::CycleViolation) => {}
///     other => panic!("unexpected {other:?}"),
/// }
/// assert_eq!(forest.edge_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An argument was absent. Only reachable where absence is representable, i.e. when building
    /// edges from optional parts or when passing an optional edge ordering.
    #[error("required argument `{argument}` is missing")]
    NullArgument {
        /// Name of the missing argument
        argument: &'static str,
    },

    /// The operation requires a vertex that is not part of the graph.
    #[error("the vertex does not exist")]
    VertexNotFound,

    /// Inserting the edge into an acyclic graph would close a cycle.
    #[error("a newly added edge would create a cycle")]
    CycleViolation,

    /// A traversal was advanced after it had produced its last vertex.
    #[error("there are no more vertices to explore")]
    IteratorExhausted,
}

/// `Result` specialized to [`GraphError`]
pub type Result<T> = std::result::Result<T, GraphError>;
