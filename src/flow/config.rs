use super::layout::{LayoutDirection, NODE_HEIGHT, NODE_WIDTH};
use super::model::ArrowHead;
use super::validation::ValidationMode;
use serde::{Deserialize, Serialize};

/// Settings of a [`crate::flow::FlowEditor`]. Every field has a default, so a partial JSON
/// document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowEditorConfig {
    pub direction: LayoutDirection,
    pub node_width: f64,
    pub node_height: f64,
    pub arrow_head: ArrowHead,
    pub validation: ValidationMode,
    /// Reject manifests whose dependencies name unknown tasks.
    pub strict_manifest: bool,
}

impl Default for FlowEditorConfig {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::TopBottom,
            node_width: NODE_WIDTH,
            node_height: NODE_HEIGHT,
            arrow_head: ArrowHead::Arrow,
            validation: ValidationMode::None,
            strict_manifest: false,
        }
    }
}

impl FlowEditorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
