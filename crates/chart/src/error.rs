use thiserror::Error;

/// Result type for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while loading or flattening a documentation tree
#[derive(Error, Debug)]
pub enum ChartError {
    /// Tree-level failure: malformed document or unresolved path
    #[error(transparent)]
    Tree(#[from] orgdoc_tree::DocTreeError),

    /// IO error while loading the document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    /// True for failures a browsing session recovers from in place:
    /// a filter or selection that simply did not resolve.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ChartError::Tree(
                orgdoc_tree::DocTreeError::NamespaceNotFound { .. }
                    | orgdoc_tree::DocTreeError::NodeNotFound { .. }
            )
        )
    }
}
