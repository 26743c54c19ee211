//! Whole-collection graph routines. Each returns a new collection and leaves its input as is.

use super::model::{FlowEdge, FlowElement, FlowNode};
use ahash::AHashSet;

/// Appends `edge` without checking for duplicates or cycles.
pub fn add_edge(elements: &[FlowElement], edge: FlowEdge) -> Vec<FlowElement> {
    let mut next = Vec::with_capacity(elements.len() + 1);
    next.extend_from_slice(elements);
    next.push(FlowElement::Edge(edge));
    next
}

/// Removes the elements with the given ids, together with every edge attached to a
/// removed node.
pub fn remove_elements<S: AsRef<str>>(to_remove: &[S], elements: &[FlowElement]) -> Vec<FlowElement> {
    let ids: AHashSet<&str> = to_remove.iter().map(|id| id.as_ref()).collect();
    let removed_nodes: AHashSet<&str> = elements
        .iter()
        .filter_map(FlowElement::as_node)
        .filter(|node| ids.contains(node.id.as_str()))
        .map(|node| node.id.as_str())
        .collect();

    elements
        .iter()
        .filter(|element| !ids.contains(element.id()))
        .filter(|element| match element {
            FlowElement::Edge(edge) => {
                !removed_nodes.contains(edge.source.as_str())
                    && !removed_nodes.contains(edge.target.as_str())
            }
            FlowElement::Node(_) => true,
        })
        .cloned()
        .collect()
}

pub fn find<'a>(elements: &'a [FlowElement], id: &str) -> Option<&'a FlowElement> {
    elements.iter().find(|element| element.id() == id)
}

pub fn nodes(elements: &[FlowElement]) -> impl Iterator<Item = &FlowNode> {
    elements.iter().filter_map(FlowElement::as_node)
}

pub fn edges(elements: &[FlowElement]) -> impl Iterator<Item = &FlowEdge> {
    elements.iter().filter_map(FlowElement::as_edge)
}

/// Edges ending at `node_id`.
pub fn incoming<'a>(elements: &'a [FlowElement], node_id: &'a str) -> impl Iterator<Item = &'a FlowEdge> {
    edges(elements).filter(move |edge| edge.target == node_id)
}

/// Edges starting at `node_id`.
pub fn outgoing<'a>(elements: &'a [FlowElement], node_id: &'a str) -> impl Iterator<Item = &'a FlowEdge> {
    edges(elements).filter(move |edge| edge.source == node_id)
}

/// Returns `true` if `to` can be reached from `from` by following edges.
pub fn reaches(elements: &[FlowElement], from: &str, to: &str) -> bool {
    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut stack = vec![from];
    while let Some(current) = stack.pop() {
        if current == to {
            return true;
        }
        if !seen.insert(current) {
            continue;
        }
        stack.extend(outgoing(elements, current).map(|edge| edge.target.as_str()));
    }
    false
}
