//! Integration tests for weft
//!
//! End-to-end tests that drive templates and the flow editor together and round-trip the
//! resulting state through binary snapshots.
//!
mod common;
use common::*;
use weft::flow::Viewport;
use weft::prelude::*;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_editor_session_snapshot() {
        let mut flow = FlowEditor::builder(PassThrough)
            .with_initial_elements(Vec::new())
            .build();
        flow.select_pipeline(
            Some(PipelineData::from_json(FIELDS_PIPELINE_JSON).unwrap()),
            Some(vec![nightly_trigger()]),
        )
        .unwrap();
        flow.on_load(Viewport {
            x: 100.0,
            y: 50.0,
            zoom: 2.0,
        });
        let dropped = flow.on_drop(drop_event("default", 300.0, 250.0)).unwrap();
        assert_eq!(dropped.as_deref(), Some("task 1"));

        let registry = TemplateRegistry::with_defaults().unwrap();
        let template = registry.get("Title-Subtitle-CTA").unwrap();
        let mut tree = template.component().clone();
        let mut set = |next: Element| tree = next;
        let mut options = template.options(template.component(), &mut set).unwrap();
        options.change("cta_text", "Start now").unwrap();
        drop(options);

        let snapshot = Snapshot::new(flow.elements().as_ref().clone(), Some(tree.clone()));
        let bytes = snapshot.to_bytes().expect("Failed to encode snapshot");
        let restored = Snapshot::from_bytes(&bytes).expect("Failed to decode snapshot");

        assert_eq!(restored, snapshot);
        assert_eq!(restored.elements.len(), flow.elements().len());
        let restored_tree = restored.tree.unwrap();
        assert_eq!(
            restored_tree
                .at(&ElementPath::from([2, 0]))
                .unwrap()
                .as_text()
                .unwrap()
                .text
                .to_string(),
            "Start now"
        );

        // The dropped node was projected through the viewport.
        let node = restored
            .elements
            .iter()
            .find(|element| element.id() == "task 1")
            .and_then(FlowElement::as_node)
            .unwrap();
        assert_eq!(node.position, Position::new(100.0, 100.0));
    }

    #[test]
    fn test_snapshot_file_round_trip() {
        let path = std::env::temp_dir().join("weft_snapshot_test.bin");
        let path = path.to_str().unwrap();

        let snapshot = Snapshot::new((&etl_pipeline()).into_elements().unwrap(), Some(sample_tree()));
        snapshot.save(path).expect("Failed to save snapshot");
        let loaded = Snapshot::from_file(path).expect("Failed to load snapshot");
        assert_eq!(loaded, snapshot);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_literal_braces_survive_json_and_snapshots() {
        let literal = Expression::literal("Use {{name}} syntax");
        let tree = Element::new(ElementData::Text(weft::element::TextData {
            text: literal.clone(),
        }));

        let json = serde_json::to_string(&tree).unwrap();
        let from_json: Element = serde_json::from_str(&json).unwrap();
        let text = &from_json.as_text().unwrap().text;
        assert!(text.is_literal());
        assert_eq!(*text, literal);

        let bytes = Snapshot::new(Vec::new(), Some(tree.clone()))
            .to_bytes()
            .expect("Failed to encode snapshot");
        let restored = Snapshot::from_bytes(&bytes).expect("Failed to decode snapshot");
        assert_eq!(restored.tree, Some(tree));
    }

    #[test]
    fn test_corrupt_snapshot_is_rejected() {
        assert!(matches!(
            Snapshot::from_bytes(&[0xff, 0xff, 0xff]),
            Err(SnapshotError::Decode(_))
        ));
        assert!(matches!(
            Snapshot::from_file("/definitely/not/here.bin"),
            Err(SnapshotError::Io { .. })
        ));
    }

    #[test]
    fn test_elements_serialize_for_the_canvas() {
        let elements = (&etl_pipeline()).into_elements().unwrap();
        let json = serde_json::to_value(&elements).unwrap();

        assert_eq!(json[0]["node"]["id"], "extract");
        assert_eq!(json[0]["node"]["type"], "default");
        assert_eq!(json[0]["node"]["data"]["task"]["type"], "http");
        assert_eq!(json[3]["edge"]["arrowHeadType"], "arrow");

        let back: Vec<FlowElement> = serde_json::from_value(json).unwrap();
        assert_eq!(back, elements);
    }
}
