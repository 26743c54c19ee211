//! Common test utilities for building element trees, manifests and editors.
use weft::prelude::*;
use weft::element::{properties, Breakpoint, TextData, DEFAULT_STATE};
use weft::flow::{Rect, TaskManifest, Trigger, Viewport};

/// The two-task manifest from the adapter docs: `B` runs after `A` on `t1`.
#[allow(dead_code)]
pub const AB_MANIFEST_JSON: &str = r#"{
    "tasks": {
        "A": { "executeAfter": {} },
        "B": { "executeAfter": { "A": ["t1"] } }
    }
}"#;

/// A pipeline whose task bodies exercise both field shapes.
#[allow(dead_code)]
pub const FIELDS_PIPELINE_JSON: &str = r#"{
    "name": "ingest",
    "manifest": {
        "tasks": {
            "fetch": {
                "type": "http",
                "integration": "rest",
                "body": { "url": "https://example.com", "token": { "key": "k1", "source": "s1" } },
                "executeAfter": {}
            },
            "store": {
                "type": "db",
                "body": { "table": "events" },
                "executeAfter": { "fetch": ["completed"] }
            }
        }
    }
}"#;

#[allow(dead_code)]
pub fn text(content: &str) -> Element {
    Element::new(ElementData::Text(TextData {
        text: Expression::from_string(content),
    }))
}

/// ```text
/// box
/// ├── text "a"          [0]
/// ├── box               [1]
/// │   ├── text "b"      [1, 0]
/// │   └── link          [1, 1]
/// │       └── text "c"  [1, 1, 0]
/// └── image             [2]
/// ```
#[allow(dead_code)]
pub fn sample_tree() -> Element {
    let link = editor::build(ElementKind::Link, |draft| draft.push_child(text("c")));
    let inner = editor::build(ElementKind::Box, |draft| {
        draft.set_children(vec![text("b"), link]);
    });
    editor::build(ElementKind::Box, |draft| {
        draft.set_style(
            Breakpoint::Desktop,
            DEFAULT_STATE,
            properties([("display", "flex")]),
        );
        draft.set_children(vec![text("a"), inner, Element::empty(ElementKind::Image)]);
    })
}

/// `extract -> transform -> load`, with `load` also gated on `extract` failing.
#[allow(dead_code)]
pub fn etl_pipeline() -> PipelineData {
    let manifest = Manifest::default()
        .with_task(
            "extract",
            TaskManifest {
                task_type: "http".to_string(),
                ..TaskManifest::default()
            },
        )
        .with_task(
            "transform",
            TaskManifest::default().after("extract", vec![Trigger::from("completed")]),
        )
        .with_task(
            "load",
            TaskManifest::default()
                .after("transform", vec![Trigger::from("completed")])
                .after("extract", vec![Trigger::from("failed")]),
        );
    PipelineData::new("etl", manifest)
}

#[allow(dead_code)]
pub fn nightly_trigger() -> TriggerData {
    TriggerData {
        name: "nightly".to_string(),
        trigger_type: "cron".to_string(),
        pipeline_name: "etl".to_string(),
        integration: "scheduler".to_string(),
        ..TriggerData::default()
    }
}

/// An editor with an empty collection and a loaded, identity-projected canvas.
#[allow(dead_code)]
pub fn loaded_editor() -> FlowEditor {
    let mut editor = FlowEditor::builder(PassThrough)
        .with_initial_elements(Vec::new())
        .build();
    editor.on_load(Viewport::default());
    editor
}

#[allow(dead_code)]
pub fn drop_event(node_type: &str, x: f64, y: f64) -> weft::flow::DropEvent {
    weft::flow::DropEvent {
        client_x: x,
        client_y: y,
        node_type: node_type.to_string(),
        bounds: Some(Rect {
            left: 0.0,
            top: 0.0,
            width: 1024.0,
            height: 768.0,
        }),
    }
}
