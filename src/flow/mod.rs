//! Pipeline flow graphs: the manifest adapter, the element model and the editor state
//! behind a node-graph canvas.

pub mod adapter;
pub mod canvas;
pub mod config;
pub mod editor;
pub mod field;
pub mod graph;
pub mod ids;
pub mod layout;
pub mod manifest;
pub mod model;
pub mod store;
pub mod theme;
pub mod validation;

pub use adapter::{
    build_graph, manifest_to_elements, triggers_to_elements, IntoElements, ManifestOptions,
};
pub use canvas::{CanvasInstance, DragOverEvent, DropEffect, DropEvent, Rect, Viewport};
pub use config::FlowEditorConfig;
pub use editor::{FlowEditor, FlowEditorBuilder};
pub use field::{normalize_field, FieldValue, RawFieldValue};
pub use ids::{id_number, IdGenerator};
pub use layout::{Layout, LayoutDirection, PassThrough, NODE_HEIGHT, NODE_WIDTH};
pub use manifest::{Manifest, PipelineData, TaskManifest};
pub use model::{
    edge_id, ArrowHead, Connection, EdgeData, FlowData, FlowEdge, FlowElement, FlowNode,
    NodeData, NodeType, Position, TaskNodeData, Trigger, TriggerData,
};
pub use store::{Store, SubscriptionId};
pub use theme::{node_color, Theme};
pub use validation::{
    AcceptAll, ConnectionValidator, RejectCycles, RejectDuplicates, RejectSelfLoops,
    ValidationMode,
};
