//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to build element trees, drive templates and run a
//! flow editor.
//!
//! # Example
//!
//! ```rust
//! use weft::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut flow = FlowEditor::builder(PassThrough).build();
//! flow.on_connect(Connection::new("task 1", "task 1"))?;
//! assert_eq!(flow.elements().len(), 2);
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Element tree and editing
pub use crate::editor::{self, Draft};
pub use crate::element::{
    BoxElement, Element, ElementData, ElementKind, ElementPath, Expression, ImageElement,
    LinkElement, Style, TextElement, TypedElement,
};

// Templates
pub use crate::template::{
    ComponentTemplate, FieldSpec, FieldTarget, OptionField, OptionValue, Options, Slot,
    SlotTemplate, TemplateRegistry,
};

// Pipeline flows
pub use crate::flow::{
    build_graph, Connection, FlowData, FlowEdge, FlowEditor, FlowEditorConfig, FlowElement,
    FlowNode, IntoElements, Manifest, PassThrough, PipelineData, Position, TriggerData,
};

pub use crate::snapshot::Snapshot;

// Error types
pub use crate::error::{FlowError, ManifestError, PathError, SnapshotError, TemplateError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
