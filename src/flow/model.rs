use super::field::FieldValue;
use crate::error::FlowError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of node shown on the pipeline canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Default,
    Trigger,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Default => "default",
            NodeType::Trigger => "trigger",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(NodeType::Default),
            "trigger" => Ok(NodeType::Trigger),
            other => Err(FlowError::UnknownNodeType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A task outcome that gates a dependency edge, e.g. `completed` or `failed`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trigger(pub String);

impl Trigger {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Trigger {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Data carried by a task node: identity plus the normalized body fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskNodeData {
    pub name: String,
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub integration: Option<String>,
    #[serde(default)]
    pub fields: IndexMap<String, FieldValue>,
}

impl TaskNodeData {
    /// A blank task, as created by dropping a node from the palette.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// An event trigger attached to a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerData {
    pub name: String,
    #[serde(rename = "type", default)]
    pub trigger_type: String,
    #[serde(default)]
    pub pipeline_name: String,
    #[serde(default)]
    pub integration: String,
    #[serde(default)]
    pub credentials: IndexMap<String, String>,
}

impl TriggerData {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeData {
    Task(TaskNodeData),
    Trigger(TriggerData),
}

impl NodeData {
    pub fn name(&self) -> &str {
        match self {
            NodeData::Task(task) => &task.name,
            NodeData::Trigger(trigger) => &trigger.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub position: Position,
    pub data: NodeData,
}

impl FlowNode {
    pub fn task(id: impl Into<String>, data: TaskNodeData) -> Self {
        Self {
            id: id.into(),
            node_type: NodeType::Default,
            position: Position::default(),
            data: NodeData::Task(data),
        }
    }

    pub fn trigger(data: TriggerData) -> Self {
        Self {
            id: data.name.clone(),
            node_type: NodeType::Trigger,
            position: Position::default(),
            data: NodeData::Trigger(data),
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowHead {
    #[default]
    Arrow,
    ArrowClosed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    #[serde(default)]
    pub triggers: Vec<Trigger>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "arrowHeadType", default)]
    pub arrow_head: ArrowHead,
    #[serde(default)]
    pub data: EdgeData,
}

impl FlowEdge {
    /// An edge with the canonical `"{source}to{target}"` id.
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: edge_id(&source, &target),
            source,
            target,
            arrow_head: ArrowHead::Arrow,
            data: EdgeData::default(),
        }
    }

    pub fn with_triggers(mut self, triggers: Vec<Trigger>) -> Self {
        self.data.triggers = triggers;
        self
    }

    pub fn with_arrow_head(mut self, arrow_head: ArrowHead) -> Self {
        self.arrow_head = arrow_head;
        self
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// Id of the dependency edge from `source` to `target`.
pub fn edge_id(source: &str, target: &str) -> String {
    format!("{}to{}", source, target)
}

/// An item of the flow state: a node or an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowElement {
    Node(FlowNode),
    Edge(FlowEdge),
}

impl FlowElement {
    pub fn id(&self) -> &str {
        match self {
            FlowElement::Node(node) => &node.id,
            FlowElement::Edge(edge) => &edge.id,
        }
    }

    pub fn as_node(&self) -> Option<&FlowNode> {
        match self {
            FlowElement::Node(node) => Some(node),
            FlowElement::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&FlowEdge> {
        match self {
            FlowElement::Edge(edge) => Some(edge),
            FlowElement::Node(_) => None,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, FlowElement::Node(_))
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, FlowElement::Edge(_))
    }
}

impl From<FlowNode> for FlowElement {
    fn from(node: FlowNode) -> Self {
        FlowElement::Node(node)
    }
}

impl From<FlowEdge> for FlowElement {
    fn from(edge: FlowEdge) -> Self {
        FlowElement::Edge(edge)
    }
}

/// A data payload for [`crate::flow::FlowEditor::update_element`].
#[derive(Debug, Clone, PartialEq)]
pub enum FlowData {
    Node(NodeData),
    Edge(EdgeData),
}

/// A user-drawn link between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub source: String,
    pub target: String,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}
