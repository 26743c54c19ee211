use super::model::{FlowNode, NodeType};

/// Colours the canvas minimap and node borders are drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub text: String,
    pub primary: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: "#222222".to_string(),
            primary: "#ee2c56".to_string(),
        }
    }
}

pub fn node_color<'a>(theme: &'a Theme, node: &FlowNode) -> &'a str {
    match node.node_type {
        NodeType::Default => &theme.text,
        NodeType::Trigger => &theme.primary,
    }
}
