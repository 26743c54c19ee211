//! Unit tests for small weft building blocks.
mod common;
use weft::element::{Breakpoint, Style, DEFAULT_STATE};
use weft::flow::{edge_id, IdGenerator, NodeType};
use weft::prelude::*;

#[test]
fn test_element_path_display_and_parse() {
    assert_eq!(ElementPath::root().to_string(), "/");
    assert_eq!(ElementPath::from([2, 0]).to_string(), "/2/0");
    assert_eq!("/2/0".parse::<ElementPath>().unwrap(), ElementPath::from([2, 0]));
    assert_eq!("/".parse::<ElementPath>().unwrap(), ElementPath::root());
    assert!("/a/1".parse::<ElementPath>().is_err());
}

#[test]
fn test_expression_bindings() {
    let expression = Expression::from_string("Hi {{name}}, {{name}} from {{city}}");
    assert_eq!(expression.bindings(), vec!["name", "city"]);
    assert!(!expression.is_literal());
    assert_eq!(expression.to_string(), "Hi {{name}}, {{name}} from {{city}}");

    let rendered = expression.render(|name| match name {
        "name" => Some("Ada"),
        _ => None,
    });
    assert_eq!(rendered, "Hi Ada, Ada from ");
}

#[test]
fn test_kind_display() {
    assert_eq!(format!("{}", ElementKind::Box), "box");
    assert_eq!(format!("{}", ElementKind::Link), "link");
    assert_eq!(format!("{}", NodeType::Trigger), "trigger");
    assert_eq!("default".parse::<NodeType>().unwrap(), NodeType::Default);
}

#[test]
fn test_style_breakpoints_are_independent() {
    let mut style = Style::default();
    assert!(style.is_empty());
    style.set_property(Breakpoint::Tablet, DEFAULT_STATE, "gap", "4px");
    style.set_property(Breakpoint::Tablet, "hover", "color", "red");

    assert_eq!(style.property(Breakpoint::Tablet, DEFAULT_STATE, "gap"), Some("4px"));
    assert_eq!(style.property(Breakpoint::Tablet, "hover", "color"), Some("red"));
    assert_eq!(style.property(Breakpoint::Desktop, DEFAULT_STATE, "gap"), None);
}

#[test]
fn test_id_generators_are_per_session() {
    let mut first = IdGenerator::new();
    let mut second = IdGenerator::new();
    assert_eq!(first.next_task(), "task 1");
    assert_eq!(first.next_task(), "task 2");
    assert_eq!(second.next_task(), "task 1");
}

#[test]
fn test_edge_id_format() {
    assert_eq!(edge_id("A", "B"), "AtoB");
    assert_eq!(FlowEdge::between("A", "B").id, "AtoB");
}

#[test]
fn test_error_messages() {
    let err = PathError::OutOfBounds {
        path: ElementPath::from([1]),
        index: 4,
        len: 2,
    };
    assert_eq!(
        err.to_string(),
        "Index 4 at '/1' is out of bounds (node has 2 children)"
    );
    let err = FlowError::UnknownNodeType("input".to_string());
    assert_eq!(err.to_string(), "Unknown node type 'input'");
}
