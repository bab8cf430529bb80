use thiserror::Error;

/// Result type for doc-tree operations
pub type Result<T> = std::result::Result<T, DocTreeError>;

/// Errors that can occur while parsing or resolving a documentation tree
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DocTreeError {
    /// Structural violation: missing required metadata, a role with
    /// children, a non-object node, or a depth-limit hit.
    #[error("Malformed doc tree: {0}")]
    MalformedTree(String),

    /// A namespace filter path did not resolve
    #[error("Namespace '{path}' not found: no entry '{segment}' at segment {segment_index}")]
    NamespaceNotFound {
        path: String,
        segment: String,
        segment_index: usize,
    },

    /// A chart selection identifier did not resolve
    #[error("Node '{id}' not found: no entry '{segment}' at segment {segment_index}")]
    NodeNotFound {
        id: String,
        segment: String,
        segment_index: usize,
    },
}
