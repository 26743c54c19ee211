use super::field::normalize_field;
use super::manifest::{Manifest, PipelineData};
use super::model::{FlowEdge, FlowElement, FlowNode, TaskNodeData, TriggerData};
use crate::error::ManifestError;
use tracing::debug;

/// A trait for external pipeline data that can be converted into flow elements.
///
/// Implementations produce *unpositioned* elements; positions are assigned afterwards by a
/// [`crate::flow::Layout`].
///
/// # Example
///
/// ```rust
/// use weft::error::ManifestError;
/// use weft::flow::{FlowElement, FlowNode, IntoElements, TaskNodeData};
///
/// struct Checklist(Vec<String>);
///
/// impl IntoElements for Checklist {
///     fn into_elements(self) -> Result<Vec<FlowElement>, ManifestError> {
///         Ok(self
///             .0
///             .into_iter()
///             .map(|name| FlowNode::task(name.clone(), TaskNodeData::named(name)).into())
///             .collect())
///     }
/// }
///
/// let elements = Checklist(vec!["build".into(), "deploy".into()])
///     .into_elements()
///     .unwrap();
/// assert_eq!(elements.len(), 2);
/// ```
pub trait IntoElements {
    /// Consumes the value and converts it into flow nodes and edges.
    fn into_elements(self) -> Result<Vec<FlowElement>, ManifestError>;
}

/// Controls how strictly a manifest is converted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestOptions {
    /// Reject `executeAfter` entries that name a task missing from the manifest.
    pub strict: bool,
}

/// Converts a manifest with explicit options.
pub fn manifest_to_elements(
    manifest: &Manifest,
    options: ManifestOptions,
) -> Result<Vec<FlowElement>, ManifestError> {
    let mut nodes = Vec::with_capacity(manifest.tasks.len());
    for (name, task) in &manifest.tasks {
        let mut fields = indexmap::IndexMap::with_capacity(task.body.len());
        for (field_name, raw) in &task.body {
            let value = normalize_field(raw).ok_or_else(|| ManifestError::InvalidFieldValue {
                task: name.clone(),
                field: field_name.clone(),
                message: "expected a string or an object with 'key' and 'source'".to_string(),
            })?;
            fields.insert(field_name.clone(), value);
        }

        let data = TaskNodeData {
            name: name.clone(),
            task_type: task.task_type.clone(),
            integration: task.integration.clone(),
            fields,
        };
        nodes.push(FlowElement::Node(FlowNode::task(name.clone(), data)));
    }

    let mut edges = Vec::new();
    for (target, task) in &manifest.tasks {
        for (source, triggers) in &task.execute_after {
            if options.strict && !manifest.tasks.contains_key(source) {
                return Err(ManifestError::UnknownDependency {
                    target: target.clone(),
                    missing: source.clone(),
                });
            }
            edges.push(FlowElement::Edge(
                FlowEdge::between(source.clone(), target.clone()).with_triggers(triggers.clone()),
            ));
        }
    }

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "converted manifest to flow elements"
    );
    nodes.extend(edges);
    Ok(nodes)
}

/// Converts trigger records into trigger nodes. `None` yields no nodes.
pub fn triggers_to_elements(triggers: Option<&[TriggerData]>) -> Vec<FlowElement> {
    triggers
        .unwrap_or_default()
        .iter()
        .map(|trigger| FlowElement::Node(FlowNode::trigger(trigger.clone())))
        .collect()
}

/// The unpositioned graph of a pipeline: task nodes, dependency edges, then trigger nodes.
pub fn build_graph(
    pipeline: &PipelineData,
    triggers: Option<&[TriggerData]>,
    options: ManifestOptions,
) -> Result<Vec<FlowElement>, ManifestError> {
    let mut elements = manifest_to_elements(&pipeline.manifest, options)?;
    elements.extend(triggers_to_elements(triggers));
    Ok(elements)
}

impl IntoElements for &Manifest {
    fn into_elements(self) -> Result<Vec<FlowElement>, ManifestError> {
        manifest_to_elements(self, ManifestOptions::default())
    }
}

impl IntoElements for &PipelineData {
    fn into_elements(self) -> Result<Vec<FlowElement>, ManifestError> {
        manifest_to_elements(&self.manifest, ManifestOptions::default())
    }
}

impl IntoElements for &[TriggerData] {
    fn into_elements(self) -> Result<Vec<FlowElement>, ManifestError> {
        Ok(triggers_to_elements(Some(self)))
    }
}
