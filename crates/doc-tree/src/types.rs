use indexmap::IndexMap;

/// Node in the documentation tree: a namespace module or a terminal role.
///
/// The two variants are discriminated on the wire by the presence of a
/// method list; once parsed, callers match the enum exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocNode {
    Module(ModuleDoc),
    Role(RoleDoc),
}

/// A namespace node grouping sub-modules and roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDoc {
    /// Local display identifier, unique within the parent's children
    pub name: String,

    /// Dotted path from the tree root; globally unique, used as chart node id
    pub full_name: String,

    /// Optional prose documentation
    pub doc: Option<String>,

    /// Child entries keyed by local namespace segment, in document order
    pub children: IndexMap<String, DocNode>,
}

/// A terminal documented entity (e.g. a class or component) owning methods
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDoc {
    /// Local display identifier
    pub name: String,

    /// Dotted path from the tree root; globally unique, used as chart node id
    pub full_name: String,

    /// Fully-qualified name of the enclosing module, for display only
    pub module: String,

    /// Optional prose documentation
    pub doc: Option<String>,

    /// Documented methods, in document order
    pub methods: Vec<MethodDoc>,
}

/// One documented method of a role; only reachable through its owning role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDoc {
    pub name: String,
    pub doc: Option<String>,
}

impl DocNode {
    /// Local display identifier of the node
    pub fn name(&self) -> &str {
        match self {
            DocNode::Module(m) => &m.name,
            DocNode::Role(r) => &r.name,
        }
    }

    /// Root-relative dotted identifier of the node
    pub fn full_name(&self) -> &str {
        match self {
            DocNode::Module(m) => &m.full_name,
            DocNode::Role(r) => &r.full_name,
        }
    }

    /// Optional prose documentation of the node
    pub fn doc(&self) -> Option<&str> {
        match self {
            DocNode::Module(m) => m.doc.as_deref(),
            DocNode::Role(r) => r.doc.as_deref(),
        }
    }

    /// True for terminal role nodes
    pub fn is_role(&self) -> bool {
        matches!(self, DocNode::Role(_))
    }

    /// Navigable children; roles are leaves and have none
    pub fn children(&self) -> Option<&IndexMap<String, DocNode>> {
        match self {
            DocNode::Module(m) => Some(&m.children),
            DocNode::Role(_) => None,
        }
    }

    /// Look up a direct child by its local key
    pub fn child(&self, key: &str) -> Option<&DocNode> {
        self.children().and_then(|c| c.get(key))
    }

    /// Number of nodes in this subtree, excluding this node itself
    pub fn descendant_count(&self) -> usize {
        match self.children() {
            Some(children) => children
                .values()
                .map(|c| 1 + c.descendant_count())
                .sum(),
            None => 0,
        }
    }
}
