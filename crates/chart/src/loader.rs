use crate::error::Result;
use orgdoc_tree::{parse_doc_tree, DocNode};
use std::path::Path;

/// Parse a documentation tree from raw JSON text.
pub fn parse_doc_tree_str(raw: &str) -> Result<DocNode> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    Ok(parse_doc_tree(&value)?)
}

/// Load the documentation tree from a file.
///
/// This is the one suspension point of a browsing session: the tree is
/// fetched once, then every filter and selection is a synchronous pure
/// function over the in-memory tree.
pub async fn load_doc_tree(path: impl AsRef<Path>) -> Result<DocNode> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await?;
    let tree = parse_doc_tree_str(&raw)?;

    log::info!(
        "Loaded doc tree from {}: {} nodes",
        path.display(),
        tree.descendant_count()
    );

    Ok(tree)
}
