use super::model::FlowElement;
use serde::{Deserialize, Serialize};

pub const NODE_WIDTH: f64 = 172.0;
pub const NODE_HEIGHT: f64 = 36.0;

/// Rank direction handed to the layout function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutDirection {
    #[default]
    #[serde(rename = "TB")]
    TopBottom,
    #[serde(rename = "BT")]
    BottomTop,
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "RL")]
    RightLeft,
}

/// The external function that assigns positions to flow nodes.
///
/// Implementations receive the full element collection and return it with node positions
/// filled in. Any closure with the same signature is a layout.
pub trait Layout {
    fn layout(
        &self,
        elements: Vec<FlowElement>,
        direction: LayoutDirection,
        node_width: f64,
        node_height: f64,
    ) -> Vec<FlowElement>;
}

impl<F> Layout for F
where
    F: Fn(Vec<FlowElement>, LayoutDirection, f64, f64) -> Vec<FlowElement>,
{
    fn layout(
        &self,
        elements: Vec<FlowElement>,
        direction: LayoutDirection,
        node_width: f64,
        node_height: f64,
    ) -> Vec<FlowElement> {
        self(elements, direction, node_width, node_height)
    }
}

/// Leaves every position untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Layout for PassThrough {
    fn layout(
        &self,
        elements: Vec<FlowElement>,
        _direction: LayoutDirection,
        _node_width: f64,
        _node_height: f64,
    ) -> Vec<FlowElement> {
        elements
    }
}
