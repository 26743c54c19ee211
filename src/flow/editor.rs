use super::adapter::{build_graph, ManifestOptions};
use super::canvas::{CanvasInstance, DragOverEvent, DropEffect, DropEvent};
use super::config::FlowEditorConfig;
use super::graph;
use super::ids::IdGenerator;
use super::layout::Layout;
use super::manifest::PipelineData;
use super::model::{
    Connection, FlowData, FlowEdge, FlowElement, FlowNode, NodeType, Position, TaskNodeData,
    TriggerData,
};
use super::store::{Store, SubscriptionId};
use super::validation::ConnectionValidator;
use crate::error::{FlowError, ManifestError};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Configures and creates a [`FlowEditor`].
pub struct FlowEditorBuilder {
    layout: Box<dyn Layout>,
    config: FlowEditorConfig,
    validator: Option<Box<dyn ConnectionValidator>>,
    initial_elements: Option<Vec<FlowElement>>,
}

impl FlowEditorBuilder {
    pub fn with_config(mut self, config: FlowEditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the validator selected by the config's `validation` mode.
    pub fn with_validator(mut self, validator: impl ConnectionValidator + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Starts the session with these elements instead of a single blank task.
    pub fn with_initial_elements(mut self, elements: Vec<FlowElement>) -> Self {
        self.initial_elements = Some(elements);
        self
    }

    pub fn build(self) -> FlowEditor {
        let mut ids = IdGenerator::new();
        let elements = match self.initial_elements {
            Some(elements) => elements,
            None => {
                let id = ids.next_task();
                vec![FlowElement::Node(FlowNode::task(
                    id.clone(),
                    TaskNodeData::named(id),
                ))]
            }
        };
        let validator = self
            .validator
            .unwrap_or_else(|| self.config.validation.validator());

        FlowEditor {
            store: Store::new(elements),
            ids,
            layout: self.layout,
            validator,
            config: self.config,
            canvas: None,
            pipeline: None,
            triggers: None,
        }
    }
}

/// State and event handlers behind a pipeline canvas.
///
/// Every handler replaces the element collection as a whole; nothing is edited in place.
pub struct FlowEditor {
    store: Store<Vec<FlowElement>>,
    ids: IdGenerator,
    layout: Box<dyn Layout>,
    validator: Box<dyn ConnectionValidator>,
    config: FlowEditorConfig,
    canvas: Option<Box<dyn CanvasInstance>>,
    pipeline: Option<PipelineData>,
    triggers: Option<Vec<TriggerData>>,
}

impl FlowEditor {
    pub fn builder(layout: impl Layout + 'static) -> FlowEditorBuilder {
        FlowEditorBuilder {
            layout: Box::new(layout),
            config: FlowEditorConfig::default(),
            validator: None,
            initial_elements: None,
        }
    }

    pub fn elements(&self) -> Arc<Vec<FlowElement>> {
        self.store.get()
    }

    pub fn config(&self) -> &FlowEditorConfig {
        &self.config
    }

    pub fn selected_pipeline(&self) -> Option<&PipelineData> {
        self.pipeline.as_ref()
    }

    pub fn triggers(&self) -> Option<&[TriggerData]> {
        self.triggers.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.canvas.is_some()
    }

    /// Links two nodes with a new edge, if the validator accepts the connection.
    pub fn on_connect(&mut self, connection: Connection) -> Result<(), FlowError> {
        let current = self.store.get();
        if let Err(reason) = self.validator.check(&current, &connection) {
            warn!(
                source = %connection.source,
                target = %connection.target,
                %reason,
                "connection rejected"
            );
            return Err(FlowError::ConnectionRejected {
                from: connection.source,
                to: connection.target,
                reason,
            });
        }

        debug!(source = %connection.source, target = %connection.target, "connecting nodes");
        let edge = FlowEdge::between(connection.source, connection.target)
            .with_arrow_head(self.config.arrow_head);
        self.store.set(graph::add_edge(&current, edge));
        Ok(())
    }

    /// Removes the listed elements and every edge left dangling by a removed node.
    pub fn on_elements_remove<S: AsRef<str>>(&mut self, ids: &[S]) {
        let current = self.store.get();
        let next = graph::remove_elements(ids, &current);
        debug!(removed = current.len() - next.len(), "removed flow elements");
        self.store.set(next);
    }

    /// Takes hold of the rendered canvas and fits the view.
    pub fn on_load(&mut self, mut canvas: impl CanvasInstance + 'static) {
        canvas.fit_view();
        self.canvas = Some(Box::new(canvas));
        debug!("canvas loaded");
    }

    pub fn on_drag_over(&self, event: &mut DragOverEvent) {
        event.default_prevented = true;
        event.drop_effect = DropEffect::Move;
    }

    /// Appends a node for a palette drop and returns its id.
    ///
    /// Before the canvas is loaded or measured, drops are ignored and `Ok(None)` is
    /// returned.
    pub fn on_drop(&mut self, event: DropEvent) -> Result<Option<String>, FlowError> {
        let (Some(canvas), Some(bounds)) = (self.canvas.as_ref(), event.bounds) else {
            debug!("drop ignored, canvas not ready");
            return Ok(None);
        };
        let node_type: NodeType = event.node_type.parse()?;
        let position = canvas.project(Position::new(
            event.client_x - bounds.left,
            event.client_y - bounds.top,
        ));

        let id = self.ids.next_for(node_type);
        let node = match node_type {
            NodeType::Default => FlowNode::task(id.clone(), TaskNodeData::named(id.clone())),
            NodeType::Trigger => FlowNode::trigger(TriggerData::named(id.clone())),
        }
        .at(position);

        debug!(%id, %node_type, x = position.x, y = position.y, "dropped node");
        let current = self.store.get();
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend_from_slice(&current);
        next.push(FlowElement::Node(node));
        self.store.set(next);
        Ok(Some(id))
    }

    /// Replaces the data payload of every element carrying `id`. All other elements are
    /// kept as is.
    ///
    /// Duplicate connections share an edge id, so one update reaches all of them.
    pub fn update_element(&mut self, id: &str, data: FlowData) -> Result<(), FlowError> {
        let current = self.store.get();
        let mut matched = 0usize;
        let mut next = Vec::with_capacity(current.len());

        for element in current.iter() {
            if element.id() != id {
                next.push(element.clone());
                continue;
            }
            matched += 1;
            let updated = match (element, &data) {
                (FlowElement::Node(node), FlowData::Node(data)) => FlowElement::Node(FlowNode {
                    data: data.clone(),
                    ..node.clone()
                }),
                (FlowElement::Edge(edge), FlowData::Edge(data)) => FlowElement::Edge(FlowEdge {
                    data: data.clone(),
                    ..edge.clone()
                }),
                (FlowElement::Node(_), FlowData::Edge(_)) => {
                    return Err(FlowError::PayloadMismatch(format!(
                        "'{}' is a node but received edge data",
                        id
                    )));
                }
                (FlowElement::Edge(_), FlowData::Node(_)) => {
                    return Err(FlowError::PayloadMismatch(format!(
                        "'{}' is an edge but received node data",
                        id
                    )));
                }
            };
            next.push(updated);
        }

        if matched == 0 {
            return Err(FlowError::UnknownElement(id.to_string()));
        }
        debug!(%id, matched, "updated element data");
        self.store.set(next);
        Ok(())
    }

    /// Records where a dragged node came to rest.
    pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), FlowError> {
        let current = self.store.get();
        let index = current
            .iter()
            .position(|element| element.as_node().is_some_and(|node| node.id == id))
            .ok_or_else(|| FlowError::UnknownElement(id.to_string()))?;

        let mut next = current.as_ref().clone();
        if let FlowElement::Node(node) = &mut next[index] {
            node.position = position;
        }
        self.store.set(next);
        Ok(())
    }

    /// Selects a pipeline and rebuilds the whole graph from its manifest.
    ///
    /// Positions are recomputed by the layout, so manual dragging is lost. Selecting
    /// `None` clears the selection and leaves the elements alone.
    ///
    /// If the manifest cannot be converted, the previous selection, triggers and
    /// elements all stay in place.
    pub fn select_pipeline(
        &mut self,
        pipeline: Option<PipelineData>,
        triggers: Option<Vec<TriggerData>>,
    ) -> Result<(), ManifestError> {
        if let Some(pipeline) = &pipeline {
            info!(pipeline = %pipeline.name, "pipeline selected");
            let elements = self.recompute(pipeline, triggers.as_deref())?;
            self.store.set(elements);
        }
        self.pipeline = pipeline;
        self.triggers = triggers;
        Ok(())
    }

    /// Waits for a trigger fetch and rebuilds the selected pipeline with its result.
    ///
    /// A fetch that resolves late still overwrites whatever is shown.
    pub async fn refresh_triggers<F>(&mut self, fetch: F) -> Result<(), ManifestError>
    where
        F: Future<Output = Vec<TriggerData>>,
    {
        let triggers = fetch.await;
        debug!(triggers = triggers.len(), "triggers fetched");
        if let Some(pipeline) = &self.pipeline {
            let elements = self.recompute(pipeline, Some(triggers.as_slice()))?;
            self.store.set(elements);
        }
        self.triggers = Some(triggers);
        Ok(())
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&Arc<Vec<FlowElement>>) + 'static,
    {
        self.store.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Builds and lays out the graph for `pipeline` without touching any editor state.
    fn recompute(
        &self,
        pipeline: &PipelineData,
        triggers: Option<&[TriggerData]>,
    ) -> Result<Vec<FlowElement>, ManifestError> {
        let options = ManifestOptions {
            strict: self.config.strict_manifest,
        };
        let mut elements = build_graph(pipeline, triggers, options)?;
        for element in &mut elements {
            if let FlowElement::Edge(edge) = element {
                edge.arrow_head = self.config.arrow_head;
            }
        }
        let positioned = self.layout.layout(
            elements,
            self.config.direction,
            self.config.node_width,
            self.config.node_height,
        );
        debug!(elements = positioned.len(), "graph recomputed");
        Ok(positioned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::canvas::{Rect, Viewport};
    use crate::flow::layout::PassThrough;

    fn drop_at(node_type: &str, x: f64, y: f64) -> DropEvent {
        DropEvent {
            client_x: x,
            client_y: y,
            node_type: node_type.to_string(),
            bounds: Some(Rect {
                left: 10.0,
                top: 20.0,
                width: 800.0,
                height: 600.0,
            }),
        }
    }

    #[test]
    fn starts_with_a_blank_task() {
        let editor = FlowEditor::builder(PassThrough).build();
        let elements = editor.elements();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].id(), "task 1");
    }

    #[test]
    fn drop_before_load_is_ignored() {
        let mut editor = FlowEditor::builder(PassThrough).build();
        assert_eq!(editor.on_drop(drop_at("default", 0.0, 0.0)), Ok(None));
        assert_eq!(editor.elements().len(), 1);
    }

    #[test]
    fn drop_projects_relative_to_bounds() {
        let mut editor = FlowEditor::builder(PassThrough).build();
        editor.on_load(Viewport::default());

        let id = editor.on_drop(drop_at("default", 110.0, 70.0)).unwrap();
        assert_eq!(id.as_deref(), Some("task 2"));

        let elements = editor.elements();
        let node = elements[1].as_node().unwrap();
        assert_eq!(node.position, Position::new(100.0, 50.0));
        assert_eq!(node.data.name(), "task 2");
    }

    #[test]
    fn drag_over_allows_move() {
        let editor = FlowEditor::builder(PassThrough).build();
        let mut event = DragOverEvent::default();
        editor.on_drag_over(&mut event);
        assert!(event.default_prevented);
        assert_eq!(event.drop_effect, DropEffect::Move);
    }
}
