use crate::error::{DocTreeError, Result};
use crate::types::DocNode;

/// Position of the segment a dotted-path walk failed on
struct MissingSegment {
    segment: String,
    segment_index: usize,
}

/// Walk a dotted path from `start`, one child lookup per segment.
///
/// An empty path returns `start` itself. The walk fails when a segment
/// does not name a child of the current node, including the case where
/// the current node is a role (roles are leaves).
fn walk<'a>(
    start: &'a DocNode,
    dotted_path: &str,
) -> std::result::Result<&'a DocNode, MissingSegment> {
    if dotted_path.is_empty() {
        return Ok(start);
    }

    let mut current = start;
    for (segment_index, segment) in dotted_path.split('.').enumerate() {
        current = current.child(segment).ok_or_else(|| MissingSegment {
            segment: segment.to_string(),
            segment_index,
        })?;
    }
    Ok(current)
}

/// Resolve a namespace filter path to the subtree rooted there.
///
/// Used to scope the chart to one namespace; the dotted path comes
/// verbatim from the surrounding UI.
pub fn resolve_namespace<'a>(tree: &'a DocNode, dotted_path: &str) -> Result<&'a DocNode> {
    walk(tree, dotted_path).map_err(|missing| DocTreeError::NamespaceNotFound {
        path: dotted_path.to_string(),
        segment: missing.segment,
        segment_index: missing.segment_index,
    })
}

/// Resolve a chart-emitted fully-qualified identifier back to its node.
///
/// Identifiers are root-relative by invariant, so this is always applied
/// to the unfiltered tree root, never the currently scoped subtree.
pub fn resolve_selection<'a>(tree: &'a DocNode, id: &str) -> Result<&'a DocNode> {
    walk(tree, id).map_err(|missing| DocTreeError::NodeNotFound {
        id: id.to_string(),
        segment: missing.segment,
        segment_index: missing.segment_index,
    })
}
