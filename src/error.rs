use crate::element::{ElementKind, ElementPath};
use thiserror::Error;

/// Errors that can occur while addressing a node inside an element tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Index {index} at '{path}' is out of bounds (node has {len} children)")]
    OutOfBounds {
        path: ElementPath,
        index: usize,
        len: usize,
    },

    #[error("Expected a {expected} element at '{path}', but found a {found} element")]
    KindMismatch {
        path: ElementPath,
        expected: ElementKind,
        found: ElementKind,
    },

    #[error("The element handle is not part of the current tree")]
    NotInTree,

    #[error("The element at '{path}' already has a parent in this tree")]
    AlreadyInTree { path: ElementPath },

    #[error("Invalid element path '{0}'")]
    InvalidPath(String),
}

/// Errors raised while building, registering, or binding component templates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template '{template}' does not match its declared shape at slot '{slot}': {source}")]
    ShapeMismatch {
        template: String,
        slot: String,
        #[source]
        source: PathError,
    },

    #[error("Template '{0}' is not registered")]
    UnknownTemplate(String),

    #[error("A template named '{0}' is already registered")]
    DuplicateTemplate(String),

    #[error("Template '{template}' has no slot or field named '{name}'")]
    UnknownField { template: String, name: String },

    #[error("Field '{field}' cannot be written to a {kind} element")]
    FieldTarget { field: String, kind: ElementKind },

    #[error("Field '{field}' expects a {expected} value")]
    ValueMismatch {
        field: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Errors that can occur when converting a pipeline manifest into flow elements.
#[derive(Error, Debug, Clone)]
pub enum ManifestError {
    #[error("Failed to parse manifest JSON: {0}")]
    JsonParseError(String),

    #[error("Field '{field}' of task '{task}' has an unsupported value: {message}")]
    InvalidFieldValue {
        task: String,
        field: String,
        message: String,
    },

    #[error("Task '{target}' depends on '{missing}', which is not part of the manifest")]
    UnknownDependency { target: String, missing: String },
}

/// Errors raised by interactive flow edits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Connection from '{from}' to '{to}' was rejected: {reason}")]
    ConnectionRejected {
        from: String,
        to: String,
        reason: String,
    },

    #[error("No flow element with id '{0}'")]
    UnknownElement(String),

    #[error("Unknown node type '{0}'")]
    UnknownNodeType(String),

    #[error("Data payload does not match element '{0}'")]
    PayloadMismatch(String),
}

/// Errors from encoding or decoding binary snapshots.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot serialization failed: {0}")]
    Encode(String),

    #[error("Snapshot deserialization failed: {0}")]
    Decode(String),

    #[error("Could not access snapshot file '{path}': {message}")]
    Io { path: String, message: String },
}
