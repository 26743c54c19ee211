use super::field::RawFieldValue;
use super::model::Trigger;
use crate::error::ManifestError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A task as declared in a pipeline manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskManifest {
    #[serde(rename = "type", default)]
    pub task_type: String,
    #[serde(default)]
    pub integration: Option<String>,
    #[serde(default)]
    pub body: IndexMap<String, RawFieldValue>,
    /// Upstream task name -> the outcomes of that task that start this one.
    #[serde(rename = "executeAfter", default)]
    pub execute_after: IndexMap<String, Vec<Trigger>>,
}

impl TaskManifest {
    pub fn after(mut self, source: impl Into<String>, triggers: Vec<Trigger>) -> Self {
        self.execute_after.insert(source.into(), triggers);
        self
    }
}

/// Tasks of a pipeline, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub tasks: IndexMap<String, TaskManifest>,
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(json).map_err(|e| ManifestError::JsonParseError(e.to_string()))
    }

    pub fn with_task(mut self, name: impl Into<String>, task: TaskManifest) -> Self {
        self.tasks.insert(name.into(), task);
        self
    }
}

/// A named pipeline as delivered by the data-fetching layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineData {
    pub name: String,
    pub manifest: Manifest,
}

impl PipelineData {
    pub fn new(name: impl Into<String>, manifest: Manifest) -> Self {
        Self {
            name: name.into(),
            manifest,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(json).map_err(|e| ManifestError::JsonParseError(e.to_string()))
    }
}
