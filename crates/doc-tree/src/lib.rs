//! # Orgdoc Tree
//!
//! Data model and resolution logic for a hierarchical API-documentation
//! tree: namespace modules containing sub-modules and terminal "roles"
//! that own documented methods.
//!
//! ## Architecture
//!
//! ```text
//! docs.json (generator output, reserved __key__ metadata)
//!     │
//!     ├──> Wire parser
//!     │      ├─ Reserved keys become node metadata
//!     │      ├─ Remaining keys become children (document order kept)
//!     │      └─ full_name derived from the key path and validated
//!     │
//!     ├──> DocNode (tagged union)
//!     │      ├─ Module: children, navigable
//!     │      └─ Role: methods, leaf
//!     │
//!     └──> Resolution
//!            ├─ resolve_namespace: scope the chart to one subtree
//!            ├─ resolve_selection: chart id back to its node
//!            └─ NodeDetail: renderer-facing record of a resolved node
//! ```
//!
//! The tree is immutable after parsing; every resolution is a pure borrow.

mod detail;
mod error;
mod path;
mod types;
mod wire;

pub use detail::{doc_paragraphs, MethodDetail, NodeDetail};
pub use error::{DocTreeError, Result};
pub use path::{resolve_namespace, resolve_selection};
pub use types::{DocNode, MethodDoc, ModuleDoc, RoleDoc};
pub use wire::{parse_doc_tree, MAX_TREE_DEPTH, RESERVED_PREFIX};
