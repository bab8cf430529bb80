use serde::Serialize;

/// One row of the flattened tree, ready for hierarchical-chart ingestion.
///
/// `id` and `parent_id` are root-relative dotted identifiers; the chart
/// widget hands `id` back on selection events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// The node's `full_name`; globally unique chart node id
    pub id: String,

    /// `full_name` of the structural parent, or empty for children of the
    /// scope root
    pub parent_id: String,

    /// Hover text; by convention the node's `full_name`
    pub tooltip: String,

    /// Local display name shown on the chart node
    pub label: String,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        parent_id: impl Into<String>,
        tooltip: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
            tooltip: tooltip.into(),
            label: label.into(),
        }
    }
}
