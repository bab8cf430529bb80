use orgdoc_chart::{flatten, parse_doc_tree_str, ChartSession};
use orgdoc_tree::{resolve_namespace, DocNode, NodeDetail};
use std::collections::HashSet;

/// The spec's worked example: a single role under a single namespace.
const EXAMPLE: &str = r#"{
    "core": {
        "web": {
            "__name__": "web",
            "__fullName__": "core.web",
            "__module__": "core",
            "__methods__": [{"__name__": "get", "__doc__": "Fetch."}]
        }
    }
}"#;

fn generator_shaped_tree() -> DocNode {
    parse_doc_tree_str(
        r#"{
        "provy": {
            "__doc__": "Provisioning library.",
            "more": {
                "debian": {
                    "users": {
                        "UserRole": {
                            "__name__": "UserRole",
                            "__module__": "provy.more.debian.users",
                            "__methods__": [{"__name__": "ensure_user", "__doc__": "Ensures the user exists."}]
                        }
                    },
                    "GitRole": {
                        "__name__": "GitRole",
                        "__module__": "provy.more.debian",
                        "__methods__": []
                    }
                }
            }
        }
    }"#,
    )
    .unwrap()
}

fn reachable_full_names(node: &DocNode, out: &mut HashSet<String>) {
    if let Some(children) = node.children() {
        for child in children.values() {
            out.insert(child.full_name().to_string());
            reachable_full_names(child, out);
        }
    }
}

#[test]
fn scoped_flatten_matches_the_worked_example() {
    let tree = parse_doc_tree_str(EXAMPLE).unwrap();
    let core = resolve_namespace(&tree, "core").unwrap();

    let edges = flatten(core).unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].id, "core.web");
    assert_eq!(edges[0].parent_id, "");
    assert_eq!(edges[0].tooltip, "core.web");
}

#[test]
fn flatten_ids_cover_every_reachable_node_exactly_once() {
    let tree = generator_shaped_tree();
    let edges = flatten(&tree).unwrap();

    let mut expected = HashSet::new();
    reachable_full_names(&tree, &mut expected);

    let ids: Vec<_> = edges.iter().map(|e| e.id.clone()).collect();
    let unique: HashSet<_> = ids.iter().cloned().collect();
    assert_eq!(ids.len(), unique.len(), "duplicate edge ids");
    assert_eq!(unique, expected);
}

#[test]
fn every_edge_parent_is_the_structural_parent() {
    let tree = generator_shaped_tree();
    for edge in flatten(&tree).unwrap() {
        let expected = edge.id.rsplit_once('.').map(|(p, _)| p).unwrap_or("");
        assert_eq!(edge.parent_id, expected, "edge {}", edge.id);
    }
}

#[test]
fn full_browse_flow_from_load_to_detail() {
    let mut session = ChartSession::new(parse_doc_tree_str(EXAMPLE).unwrap());

    // Scope, as the UI does on a namespace link click.
    let edges = session.set_namespace("core").unwrap();
    assert_eq!(edges.len(), 1);

    // The chart hands the row id back on selection.
    let detail = session.select(&edges[0].id).unwrap();
    match detail {
        NodeDetail::Role {
            name,
            module,
            methods,
            ..
        } => {
            assert_eq!(name, "web");
            assert_eq!(module, "core");
            assert_eq!(methods.len(), 1);
            assert_eq!(methods[0].name, "get");
            assert_eq!(methods[0].doc.as_deref(), Some("Fetch."));
        }
        NodeDetail::Module { .. } => panic!("core.web should be a role"),
    }

    // Selection ids resolve against the unfiltered root, so re-scoping
    // does not invalidate them.
    session.set_namespace("").unwrap();
    assert!(session.select("core.web").is_ok());
}
