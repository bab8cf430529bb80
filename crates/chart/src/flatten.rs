use crate::error::Result;
use crate::types::Edge;
use orgdoc_tree::{DocNode, DocTreeError};

/// Recursion cap for the flattening walk. Well-formed trees are already
/// depth-checked at parse time; this guards callers that construct trees
/// programmatically.
const MAX_FLATTEN_DEPTH: usize = 128;

/// Flatten a documentation subtree into chart edges.
///
/// The scope root itself gets no edge; its children are visited with an
/// empty `parent_id`. Every visited node emits exactly one edge, and
/// modules are additionally recursed into with their own `full_name` as
/// the new `parent_id`. Edge order follows the tree's child order.
///
/// Flattening a role yields no edges: roles are leaves.
pub fn flatten(scope_root: &DocNode) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    recurse(scope_root, "", &mut edges, 0)?;

    log::debug!(
        "Flattened '{}' into {} edges",
        scope_root.full_name(),
        edges.len()
    );

    Ok(edges)
}

fn recurse(node: &DocNode, parent_id: &str, edges: &mut Vec<Edge>, depth: usize) -> Result<()> {
    if depth > MAX_FLATTEN_DEPTH {
        return Err(DocTreeError::MalformedTree(format!(
            "flatten exceeded maximum depth {} under '{}'",
            MAX_FLATTEN_DEPTH, parent_id
        ))
        .into());
    }

    let Some(children) = node.children() else {
        return Ok(());
    };

    for (key, child) in children {
        edges.push(Edge::new(
            child.full_name(),
            parent_id,
            child.full_name(),
            key.clone(),
        ));
        if !child.is_role() {
            recurse(child, child.full_name(), edges, depth + 1)?;
        }
    }

    Ok(())
}
