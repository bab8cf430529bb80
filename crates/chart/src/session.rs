use crate::error::Result;
use crate::flatten::flatten;
use crate::types::Edge;
use orgdoc_tree::{resolve_namespace, resolve_selection, DocNode, NodeDetail};

/// State of one browsing session over a loaded documentation tree.
///
/// Holds the immutable tree together with the current chart scope and the
/// current detail-pane selection, and enforces the recovery rules: a failed
/// namespace switch leaves the displayed scope unchanged, a failed
/// selection leaves the detail pane unchanged, and sequential selections
/// are last-write-wins.
pub struct ChartSession {
    root: DocNode,
    scope: String,
    selection: Option<NodeDetail>,
}

impl ChartSession {
    /// Start a session scoped to the whole tree with nothing selected.
    pub fn new(root: DocNode) -> Self {
        Self {
            root,
            scope: String::new(),
            selection: None,
        }
    }

    /// The loaded tree root
    pub fn root(&self) -> &DocNode {
        &self.root
    }

    /// Dotted path of the current scope; empty for the whole tree
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Detail record of the most recent successful selection
    pub fn selection(&self) -> Option<&NodeDetail> {
        self.selection.as_ref()
    }

    /// Scope the chart to `dotted_path` and return the edges to draw.
    ///
    /// On `NamespaceNotFound` the previous scope stays in effect.
    pub fn set_namespace(&mut self, dotted_path: &str) -> Result<Vec<Edge>> {
        let subtree = resolve_namespace(&self.root, dotted_path).inspect_err(|e| {
            log::warn!("Namespace switch failed, keeping scope '{}': {}", self.scope, e);
        })?;
        let edges = flatten(subtree)?;
        self.scope = dotted_path.to_string();
        Ok(edges)
    }

    /// Edges for the current scope
    pub fn edges(&self) -> Result<Vec<Edge>> {
        let subtree = resolve_namespace(&self.root, &self.scope)?;
        flatten(subtree)
    }

    /// Resolve a chart selection id against the unfiltered root and record
    /// its detail.
    ///
    /// On `NodeNotFound` (a stale or cleared selection) the previously
    /// displayed detail stays in place.
    pub fn select(&mut self, id: &str) -> Result<&NodeDetail> {
        let node = resolve_selection(&self.root, id).inspect_err(|e| {
            log::warn!("Selection did not resolve: {}", e);
        })?;
        Ok(self.selection.insert(NodeDetail::from_node(node)))
    }

    /// The chart emitted an empty selection
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgdoc_tree::parse_doc_tree;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn session() -> ChartSession {
        let tree = parse_doc_tree(&json!({
            "core": {
                "web": {
                    "__name__": "web",
                    "__module__": "core",
                    "__doc__": "Web role.",
                    "__methods__": [{"__name__": "get", "__doc__": "Fetch."}]
                }
            }
        }))
        .unwrap();
        ChartSession::new(tree)
    }

    #[test]
    fn test_starts_unscoped_and_unselected() {
        let session = session();
        assert_eq!(session.scope(), "");
        assert!(session.selection().is_none());
    }

    #[test]
    fn test_namespace_switch_scopes_the_edges() {
        let mut session = session();
        let edges = session.set_namespace("core").unwrap();
        assert_eq!(session.scope(), "core");
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].id, "core.web");
        assert_eq!(edges[0].parent_id, "");
    }

    #[test]
    fn test_failed_namespace_switch_keeps_previous_scope() {
        let mut session = session();
        session.set_namespace("core").unwrap();

        let err = session.set_namespace("no.such.path").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(session.scope(), "core");
        assert_eq!(session.edges().unwrap().len(), 1);
    }

    #[test]
    fn test_select_records_the_detail() {
        let mut session = session();
        let detail = session.select("core.web").unwrap();
        assert_eq!(detail.name(), "web");
        assert!(session.selection().is_some());
    }

    #[test]
    fn test_failed_select_keeps_previous_detail() {
        let mut session = session();
        session.select("core.web").unwrap();

        let err = session.select("core.gone").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(session.selection().unwrap().name(), "web");
    }

    #[test]
    fn test_latest_selection_wins() {
        let mut session = session();
        session.select("core.web").unwrap();
        session.select("core").unwrap();
        assert_eq!(session.selection().unwrap().name(), "core");
    }

    #[test]
    fn test_clear_selection() {
        let mut session = session();
        session.select("core.web").unwrap();
        session.clear_selection();
        assert!(session.selection().is_none());
    }
}
