//! Manifest-to-flow conversion tests.
mod common;
use common::*;
use serde_json::json;
use weft::error::ManifestError;
use weft::flow::{
    manifest_to_elements, normalize_field, triggers_to_elements, FieldValue, ManifestOptions,
    NodeData, NodeType, RawFieldValue, Trigger,
};
use weft::prelude::*;

#[test]
fn test_two_task_manifest() {
    let manifest = Manifest::from_json(AB_MANIFEST_JSON).unwrap();
    let elements = (&manifest).into_elements().unwrap();

    let ids: Vec<&str> = elements.iter().map(FlowElement::id).collect();
    assert_eq!(ids, vec!["A", "B", "AtoB"]);

    let edge = elements[2].as_edge().unwrap();
    assert_eq!(edge.source, "A");
    assert_eq!(edge.target, "B");
    assert_eq!(edge.data.triggers, vec![Trigger::from("t1")]);

    let json = serde_json::to_value(edge).unwrap();
    assert_eq!(json["id"], "AtoB");
    assert_eq!(json["data"], json!({ "triggers": ["t1"] }));
}

#[test]
fn test_one_node_per_task_and_one_edge_per_dependency() {
    let pipeline = etl_pipeline();
    let elements = (&pipeline).into_elements().unwrap();

    let nodes: Vec<&FlowNode> = elements.iter().filter_map(FlowElement::as_node).collect();
    let edges: Vec<&FlowEdge> = elements.iter().filter_map(FlowElement::as_edge).collect();
    assert_eq!(nodes.len(), pipeline.manifest.tasks.len());

    let dependencies: usize = pipeline
        .manifest
        .tasks
        .values()
        .map(|task| task.execute_after.len())
        .sum();
    assert_eq!(edges.len(), dependencies);
    for edge in edges {
        assert_eq!(edge.id, format!("{}to{}", edge.source, edge.target));
    }
    assert!(nodes.iter().all(|node| node.node_type == NodeType::Default));
}

#[test]
fn test_field_normalization() {
    let text: RawFieldValue = serde_json::from_value(json!("hello")).unwrap();
    let option: RawFieldValue = serde_json::from_value(json!({ "key": "k1", "source": "s1" })).unwrap();

    let text = normalize_field(&text).unwrap();
    let option = normalize_field(&option).unwrap();
    assert_eq!(text, FieldValue::text("hello"));
    assert_eq!(option, FieldValue::option("k1", "s1"));

    assert_eq!(
        serde_json::to_value(&text).unwrap(),
        json!({ "type": "text", "data": "hello" })
    );
    let option_json = serde_json::to_value(&option).unwrap();
    assert_eq!(option_json["type"], "option");
    assert_eq!(option_json["data"], "k1");
    assert_eq!(option_json["groupName"], "s1");

    let unsupported: RawFieldValue = serde_json::from_value(json!(42)).unwrap();
    assert_eq!(normalize_field(&unsupported), None);
}

#[test]
fn test_task_nodes_carry_normalized_fields() {
    let pipeline = PipelineData::from_json(FIELDS_PIPELINE_JSON).unwrap();
    let elements = build_graph(&pipeline, None, ManifestOptions::default()).unwrap();

    let NodeData::Task(fetch) = &elements[0].as_node().unwrap().data else {
        panic!("expected a task node");
    };
    assert_eq!(fetch.task_type, "http");
    assert_eq!(fetch.integration.as_deref(), Some("rest"));
    assert_eq!(fetch.fields["url"], FieldValue::text("https://example.com"));
    assert_eq!(fetch.fields["token"], FieldValue::option("k1", "s1"));
}

#[test]
fn test_unsupported_field_value_is_reported() {
    let manifest = Manifest::from_json(
        r#"{"tasks": {"A": {"body": {"retries": 3}, "executeAfter": {}}}}"#,
    )
    .unwrap();
    let err = (&manifest).into_elements().unwrap_err();
    assert!(matches!(
        err,
        ManifestError::InvalidFieldValue { ref task, ref field, .. } if task == "A" && field == "retries"
    ));
}

#[test]
fn test_dangling_dependency_only_fails_when_strict() {
    let manifest = Manifest::from_json(
        r#"{"tasks": {"B": {"executeAfter": {"ghost": ["completed"]}}}}"#,
    )
    .unwrap();

    let lenient = manifest_to_elements(&manifest, ManifestOptions::default()).unwrap();
    assert_eq!(lenient.len(), 2);

    let strict = manifest_to_elements(&manifest, ManifestOptions { strict: true });
    assert!(matches!(
        strict,
        Err(ManifestError::UnknownDependency { ref missing, .. }) if missing == "ghost"
    ));
}

#[test]
fn test_triggers_become_trigger_nodes() {
    assert!(triggers_to_elements(None).is_empty());

    let triggers = vec![nightly_trigger()];
    let elements = build_graph(&etl_pipeline(), Some(triggers.as_slice()), ManifestOptions::default())
        .unwrap();
    let last = elements.last().and_then(FlowElement::as_node).unwrap();
    assert_eq!(last.id, "nightly");
    assert_eq!(last.node_type, NodeType::Trigger);
    assert_eq!(last.data.name(), "nightly");
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    assert!(matches!(
        Manifest::from_json("{ not json"),
        Err(ManifestError::JsonParseError(_))
    ));
}
