//! # Orgdoc Chart
//!
//! Turns a documentation tree into organization-chart rows and drives one
//! browsing session over it.
//!
//! ## Architecture
//!
//! ```text
//! docs.json
//!     │
//!     ├──> Loader (the single async step of a session)
//!     │
//!     ├──> ChartSession
//!     │      ├─ set_namespace: scope the chart, keep old scope on failure
//!     │      ├─ select: id -> NodeDetail, keep old detail on failure
//!     │      └─ last-write-wins across sequential selections
//!     │
//!     └──> Flattener
//!            ├─ one Edge per node below the scope root
//!            └─ parent_id = structural parent's full_name ("" at the top)
//! ```
//!
//! The chart widget itself is an external collaborator: it consumes the
//! `Edge` rows and hands back a selected id string.

mod error;
mod flatten;
mod loader;
mod session;
mod types;

pub use error::{ChartError, Result};
pub use flatten::flatten;
pub use loader::{load_doc_tree, parse_doc_tree_str};
pub use session::ChartSession;
pub use types::Edge;
