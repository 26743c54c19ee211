//! Element tree and structural editor tests.
mod common;
use common::*;
use weft::element::{Breakpoint, DEFAULT_STATE};
use weft::prelude::*;

fn at<'a>(root: &'a Element, path: &[usize]) -> &'a Element {
    root.at(&ElementPath::from(path)).expect("path should resolve")
}

#[test]
fn test_edit_shares_every_subtree_off_the_path() {
    let root = sample_tree();
    let target = ElementPath::from([1, 1, 0]);

    let edited = editor::edit(&root, &target, |draft| {
        if let Some(text) = draft.text_mut() {
            text.text = Expression::literal("changed");
        }
    })
    .unwrap();

    // Every ancestor of the target is new.
    for depth in 0..=target.depth() {
        let path = target.prefix(depth);
        assert!(!Element::ptr_eq(
            root.at(&path).unwrap(),
            edited.at(&path).unwrap()
        ));
    }
    // Everything else is the very same node.
    for (path, node) in root.walk() {
        if target.starts_with(&path) {
            continue;
        }
        assert!(Element::ptr_eq(node, edited.at(&path).unwrap()), "{} was copied", path);
    }

    assert_eq!(
        at(&root, &[1, 1, 0]).as_text().unwrap().text.to_string(),
        "c"
    );
    assert_eq!(
        at(&edited, &[1, 1, 0]).as_text().unwrap().text.to_string(),
        "changed"
    );
}

#[test]
fn test_unchanged_draft_returns_original_handle() {
    let root = sample_tree();
    let same = editor::produce(&root, |draft| {
        let _ = draft.kind();
    });
    assert!(Element::ptr_eq(&root, &same));

    let also_same = editor::edit(&root, &ElementPath::from([1, 0]), |_| {}).unwrap();
    assert!(Element::ptr_eq(&root, &also_same));
}

#[test]
fn test_style_edit_keeps_data_and_children() {
    let root = sample_tree();
    let edited = editor::produce(&root, |draft| {
        draft
            .style_mut()
            .set_property(Breakpoint::Mobile, DEFAULT_STATE, "display", "block");
    });

    assert_eq!(
        edited.style().property(Breakpoint::Mobile, DEFAULT_STATE, "display"),
        Some("block")
    );
    assert_eq!(
        edited.style().property(Breakpoint::Desktop, DEFAULT_STATE, "display"),
        Some("flex")
    );
    assert!(root.style().property(Breakpoint::Mobile, DEFAULT_STATE, "display").is_none());
    for (before, after) in root.children().iter().zip(edited.children()) {
        assert!(Element::ptr_eq(before, after));
    }
}

#[test]
fn test_failed_recipe_commits_nothing() {
    let root = sample_tree();
    let result = editor::try_edit(&root, &ElementPath::from([1]), |draft| {
        draft.push_child(text("never"));
        draft.remove_child(10).map(|_| ())
    });
    assert!(matches!(
        result,
        Err(PathError::OutOfBounds { index: 10, len: 3, .. })
    ));
    assert_eq!(at(&root, &[1]).children().len(), 2);
}

#[test]
fn test_insert_and_remove() {
    let root = sample_tree();

    let inserted = editor::insert(&root, &ElementPath::root(), 1, text("new")).unwrap();
    assert_eq!(inserted.children().len(), 4);
    assert_eq!(at(&inserted, &[1]).as_text().unwrap().text.to_string(), "new");
    assert!(Element::ptr_eq(at(&root, &[1]), at(&inserted, &[2])));

    let removed = editor::remove(&inserted, &ElementPath::from([1])).unwrap();
    assert_eq!(removed, root);
    assert!(Element::ptr_eq(at(&root, &[2]), at(&removed, &[2])));

    assert!(matches!(
        editor::remove(&root, &ElementPath::root()),
        Err(PathError::InvalidPath(_))
    ));
    assert!(matches!(
        editor::insert(&root, &ElementPath::root(), 9, text("x")),
        Err(PathError::OutOfBounds { .. })
    ));
}

#[test]
fn test_nodes_keep_a_single_parent() {
    let root = sample_tree();
    let first = at(&root, &[0]).clone();

    assert_eq!(
        editor::insert(&root, &ElementPath::root(), 3, first.clone()),
        Err(PathError::AlreadyInTree {
            path: ElementPath::from([3])
        })
    );
    assert!(matches!(
        editor::replace(&root, &ElementPath::from([2]), first.clone()),
        Err(PathError::AlreadyInTree { .. })
    ));
    assert!(matches!(
        editor::replace_node(&root, at(&root, &[1, 0]), at(&root, &[1]).clone()),
        Err(PathError::AlreadyInTree { .. })
    ));
    assert!(matches!(
        editor::edit(&root, &ElementPath::from([1]), |draft| draft.push_child(first.clone())),
        Err(PathError::AlreadyInTree { .. })
    ));
    assert_eq!(root.find_shared(), None);

    // Putting a node back where it already is changes nothing.
    let same = editor::replace(&root, &ElementPath::from([0]), first.clone()).unwrap();
    assert!(Element::ptr_eq(&root, &same));

    // A deep copy is a different node and may go anywhere.
    let copied = editor::insert(&root, &ElementPath::root(), 3, first.deep_clone()).unwrap();
    assert_eq!(at(&copied, &[3]), &first);
    assert!(!Element::ptr_eq(at(&copied, &[3]), &first));
    assert_eq!(copied.find_shared(), None);
}

#[test]
fn test_replace_node_by_identity() {
    let root = sample_tree();
    let old_link = at(&root, &[1, 1]).clone();

    let replaced = editor::replace_node(&root, &old_link, text("plain")).unwrap();
    assert_eq!(at(&replaced, &[1, 1]).kind(), ElementKind::Text);

    // The old link is no longer part of the new tree.
    assert_eq!(
        editor::replace_node(&replaced, &old_link, text("again")),
        Err(PathError::NotInTree)
    );
}

#[test]
fn test_typed_narrowing() {
    let root = sample_tree();

    let link: LinkElement = root.narrow_at(&ElementPath::from([1, 1])).unwrap();
    assert_eq!(link.data().href.to_string(), "");
    assert_eq!(link.children().len(), 1);

    let err = root
        .narrow_at::<TextElement>(&ElementPath::from([2]))
        .unwrap_err();
    assert_eq!(
        err,
        PathError::KindMismatch {
            path: ElementPath::from([2]),
            expected: ElementKind::Text,
            found: ElementKind::Image,
        }
    );

    assert!(BoxElement::try_from(root.clone()).is_ok());
    assert!(ImageElement::try_from(root).is_err());
}

#[test]
fn test_walk_and_locate() {
    let root = sample_tree();
    let paths: Vec<String> = root.walk().map(|(path, _)| path.to_string()).collect();
    assert_eq!(paths, vec!["/", "/0", "/1", "/1/0", "/1/1", "/1/1/0", "/2"]);
    assert_eq!(root.count(), 7);

    let deep = at(&root, &[1, 1, 0]);
    assert_eq!(root.locate(deep), Some(ElementPath::from([1, 1, 0])));
    assert_eq!(root.locate(&text("c")), None);
}

#[test]
fn test_element_json_shape() {
    let element = text("Hi {{name}}");
    let json = serde_json::to_value(&element).unwrap();
    assert_eq!(json["data"]["text"]["text"], "Hi {{name}}");
    assert_eq!(json["children"], serde_json::json!([]));

    let back: Element = serde_json::from_value(json).unwrap();
    assert_eq!(back, element);
}
