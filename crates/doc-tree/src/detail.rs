use crate::types::DocNode;
use serde::Serialize;

/// Renderer-facing record for a resolved node.
///
/// This is the shape handed to the external detail renderer: modules carry
/// prose only, roles additionally name their enclosing module and list
/// their methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeDetail {
    Module {
        name: String,
        doc: Option<String>,
    },
    Role {
        name: String,
        module: String,
        doc: Option<String>,
        methods: Vec<MethodDetail>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDetail {
    pub name: String,
    pub doc: Option<String>,
}

impl NodeDetail {
    pub fn from_node(node: &DocNode) -> Self {
        match node {
            DocNode::Module(m) => NodeDetail::Module {
                name: m.name.clone(),
                doc: m.doc.clone(),
            },
            DocNode::Role(r) => NodeDetail::Role {
                name: r.name.clone(),
                module: r.module.clone(),
                doc: r.doc.clone(),
                methods: r
                    .methods
                    .iter()
                    .map(|m| MethodDetail {
                        name: m.name.clone(),
                        doc: m.doc.clone(),
                    })
                    .collect(),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NodeDetail::Module { name, .. } | NodeDetail::Role { name, .. } => name,
        }
    }

    /// Prose for display, with the deterministic fallback for nodes the
    /// generator found undocumented.
    pub fn doc_or_placeholder(&self) -> String {
        match self {
            NodeDetail::Module { name, doc } | NodeDetail::Role { name, doc, .. } => doc
                .clone()
                .unwrap_or_else(|| format!("No documentation found for {}.", name)),
        }
    }
}

impl MethodDetail {
    pub fn doc_or_placeholder(&self) -> String {
        self.doc
            .clone()
            .unwrap_or_else(|| format!("No documentation found for method {}.", self.name))
    }
}

/// Split prose into display paragraphs, dropping whitespace-only lines.
pub fn doc_paragraphs(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}
