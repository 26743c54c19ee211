//! The presentational element tree edited by the UI builder.
//!
//! An [`Element`] is an immutable, cheaply clonable handle. Cloning a handle never copies
//! the node; edits go through [`crate::editor`], which rebuilds only the ancestors of the
//! edited node and shares every other subtree with the previous version.

use crate::error::PathError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

mod data;
mod expression;
mod path;
mod style;
mod typed;

pub use data::*;
pub use expression::*;
pub use path::*;
pub use style::*;
pub use typed::*;

/// The closed set of element variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Box,
    Text,
    Link,
    Image,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Box => write!(f, "box"),
            ElementKind::Text => write!(f, "text"),
            ElementKind::Link => write!(f, "link"),
            ElementKind::Image => write!(f, "image"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Node {
    #[serde(default)]
    style: Style,
    data: ElementData,
    #[serde(default)]
    children: Vec<Element>,
}

/// A node of the element tree together with its (shared) subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element(Arc<Node>);

impl Element {
    /// A childless, unstyled element with the given payload.
    pub fn new(data: ElementData) -> Self {
        Self::from_parts(Style::default(), data, Vec::new())
    }

    /// A childless, unstyled element with the default payload for `kind`.
    pub fn empty(kind: ElementKind) -> Self {
        Self::new(ElementData::empty(kind))
    }

    pub(crate) fn from_parts(style: Style, data: ElementData, children: Vec<Element>) -> Self {
        Self(Arc::new(Node {
            style,
            data,
            children,
        }))
    }

    pub fn kind(&self) -> ElementKind {
        self.0.data.kind()
    }

    pub fn style(&self) -> &Style {
        &self.0.style
    }

    pub fn data(&self) -> &ElementData {
        &self.0.data
    }

    pub fn children(&self) -> &[Element] {
        &self.0.children
    }

    pub fn child(&self, index: usize) -> Option<&Element> {
        self.0.children.get(index)
    }

    pub fn as_box(&self) -> Option<&BoxData> {
        match &self.0.data {
            ElementData::Box(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextData> {
        match &self.0.data {
            ElementData::Text(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&LinkData> {
        match &self.0.data {
            ElementData::Link(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageData> {
        match &self.0.data {
            ElementData::Image(data) => Some(data),
            _ => None,
        }
    }

    /// Returns `true` when both handles point at the very same node.
    pub fn ptr_eq(a: &Element, b: &Element) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Resolves a descendant by path.
    pub fn at(&self, path: &ElementPath) -> Result<&Element, PathError> {
        let mut node = self;
        for (depth, &index) in path.indices().iter().enumerate() {
            let children = node.children();
            node = children.get(index).ok_or_else(|| PathError::OutOfBounds {
                path: path.prefix(depth),
                index,
                len: children.len(),
            })?;
        }
        Ok(node)
    }

    /// Resolves a descendant by path and checks its kind.
    pub fn at_kind(&self, path: &ElementPath, kind: ElementKind) -> Result<&Element, PathError> {
        let node = self.at(path)?;
        if node.kind() != kind {
            return Err(PathError::KindMismatch {
                path: path.clone(),
                expected: kind,
                found: node.kind(),
            });
        }
        Ok(node)
    }

    /// Resolves a descendant by path and narrows it to a typed handle.
    pub fn narrow_at<T: TypedElement>(&self, path: &ElementPath) -> Result<T, PathError> {
        self.at_kind(path, T::KIND)
            .map(|node| T::wrap_checked(node.clone()))
    }

    /// Finds the path of a node by identity.
    pub fn locate(&self, target: &Element) -> Option<ElementPath> {
        self.walk()
            .find(|(_, node)| Element::ptr_eq(node, target))
            .map(|(path, _)| path)
    }

    /// Pre-order traversal yielding every node with its path from `self`.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(ElementPath::root(), self)],
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Element::count).sum::<usize>()
    }

    /// Path of the first node reached a second time, by identity. `None` means every node
    /// in the tree has exactly one parent.
    pub fn find_shared(&self) -> Option<ElementPath> {
        let mut seen = AHashSet::new();
        self.walk()
            .find(|(_, node)| !seen.insert(Arc::as_ptr(&node.0)))
            .map(|(path, _)| path)
    }

    /// An equal tree in which every node is a new allocation.
    pub fn deep_clone(&self) -> Element {
        Self::from_parts(
            self.style().clone(),
            self.data().clone(),
            self.children().iter().map(Element::deep_clone).collect(),
        )
    }
}

/// Iterator returned by [`Element::walk`].
pub struct Walk<'a> {
    stack: Vec<(ElementPath, &'a Element)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (ElementPath, &'a Element);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        for (index, child) in node.children().iter().enumerate().rev() {
            self.stack.push((path.child(index), child));
        }
        Some((path, node))
    }
}
