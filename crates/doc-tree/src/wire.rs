use crate::error::{DocTreeError, Result};
use crate::types::{DocNode, MethodDoc, ModuleDoc, RoleDoc};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Reserved two-character prefix marking a node's own metadata fields.
/// Keys carrying it are data, never child namespace entries.
pub const RESERVED_PREFIX: &str = "__";

const KEY_NAME: &str = "__name__";
const KEY_FULL_NAME: &str = "__fullName__";
const KEY_DOC: &str = "__doc__";
const KEY_MODULE: &str = "__module__";
const KEY_METHODS: &str = "__methods__";

/// Trees deeper than this are rejected rather than risking stack overflow.
/// Cycle detection is deliberately not attempted; a cyclic input surfaces
/// as a depth-limit `MalformedTree`.
pub const MAX_TREE_DEPTH: usize = 128;

/// Parse the generator's JSON document into a typed tree.
///
/// The top-level object is the anonymous root module; its keys are the
/// top-level namespaces. Each node object encodes metadata under reserved
/// `__`-prefixed keys and children under all remaining keys.
pub fn parse_doc_tree(value: &Value) -> Result<DocNode> {
    let obj = value.as_object().ok_or_else(|| {
        DocTreeError::MalformedTree("document root is not a JSON object".to_string())
    })?;

    let root = DocNode::Module(ModuleDoc {
        name: String::new(),
        full_name: String::new(),
        doc: opt_string(obj, KEY_DOC, "<root>")?,
        children: parse_children(obj, "", 0)?,
    });

    log::debug!("Parsed doc tree: {} nodes", root.descendant_count());

    Ok(root)
}

fn parse_children(
    obj: &Map<String, Value>,
    parent_path: &str,
    depth: usize,
) -> Result<IndexMap<String, DocNode>> {
    let mut children = IndexMap::new();
    for (key, value) in obj {
        if key.starts_with(RESERVED_PREFIX) {
            continue;
        }
        let node = parse_node(key, parent_path, value, depth + 1)?;
        children.insert(key.clone(), node);
    }
    Ok(children)
}

fn parse_node(key: &str, parent_path: &str, value: &Value, depth: usize) -> Result<DocNode> {
    let full_name = join_path(parent_path, key);

    if depth > MAX_TREE_DEPTH {
        return Err(DocTreeError::MalformedTree(format!(
            "node '{}' exceeds maximum tree depth {}; input may be cyclic",
            full_name, MAX_TREE_DEPTH
        )));
    }

    let obj = value.as_object().ok_or_else(|| {
        DocTreeError::MalformedTree(format!("node '{}' is not a JSON object", full_name))
    })?;

    // fullName is canonically the key path; a disagreeing wire field means
    // the document violates its own identifier invariant.
    if let Some(declared) = opt_string(obj, KEY_FULL_NAME, &full_name)? {
        if declared != full_name {
            return Err(DocTreeError::MalformedTree(format!(
                "node '{}' declares fullName '{}'",
                full_name, declared
            )));
        }
    }

    match obj.get(KEY_METHODS) {
        Some(methods) => parse_role(key, parent_path, &full_name, obj, methods),
        None => Ok(DocNode::Module(ModuleDoc {
            name: key.to_string(),
            full_name: full_name.clone(),
            doc: opt_string(obj, KEY_DOC, &full_name)?,
            children: parse_children(obj, &full_name, depth)?,
        })),
    }
}

fn parse_role(
    key: &str,
    parent_path: &str,
    full_name: &str,
    obj: &Map<String, Value>,
    methods: &Value,
) -> Result<DocNode> {
    // Roles are leaves; a child namespace entry on one is a structural error.
    if let Some(extra) = obj.keys().find(|k| !k.starts_with(RESERVED_PREFIX)) {
        return Err(DocTreeError::MalformedTree(format!(
            "role '{}' has child entry '{}'",
            full_name, extra
        )));
    }

    // The generator keys each role by its own name; like the __fullName__
    // rule above, a disagreeing __name__ means the document contradicts
    // its own identifiers.
    let name = req_string(obj, KEY_NAME, full_name)?;
    if name != key {
        return Err(DocTreeError::MalformedTree(format!(
            "role '{}' declares name '{}' but is keyed '{}'",
            full_name, name, key
        )));
    }

    let methods = methods.as_array().ok_or_else(|| {
        DocTreeError::MalformedTree(format!("role '{}' methods is not an array", full_name))
    })?;
    let methods = methods
        .iter()
        .map(|m| parse_method(m, full_name))
        .collect::<Result<Vec<_>>>()?;

    let module = match opt_string(obj, KEY_MODULE, full_name)? {
        Some(module) => module,
        None => parent_path.to_string(),
    };

    Ok(DocNode::Role(RoleDoc {
        name,
        full_name: full_name.to_string(),
        module,
        doc: opt_string(obj, KEY_DOC, full_name)?,
        methods,
    }))
}

fn parse_method(value: &Value, role_path: &str) -> Result<MethodDoc> {
    let obj = value.as_object().ok_or_else(|| {
        DocTreeError::MalformedTree(format!(
            "method entry of role '{}' is not a JSON object",
            role_path
        ))
    })?;
    Ok(MethodDoc {
        name: req_string(obj, KEY_NAME, role_path)?,
        doc: opt_string(obj, KEY_DOC, role_path)?,
    })
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn opt_string(obj: &Map<String, Value>, key: &str, path: &str) -> Result<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DocTreeError::MalformedTree(format!(
            "node '{}' field {} is not a string",
            path, key
        ))),
    }
}

fn req_string(obj: &Map<String, Value>, key: &str, path: &str) -> Result<String> {
    opt_string(obj, key, path)?.ok_or_else(|| {
        DocTreeError::MalformedTree(format!("node '{}' is missing required {}", path, key))
    })
}
