use crate::element::{
    Breakpoint, Element, ElementData, ElementKind, ElementPath, ImageData, LinkData, Properties,
    Style, TextData,
};
use crate::error::PathError;

/// A mutable scratch copy of a single element.
///
/// The draft owns copies of the node's style and payload and *handles* to its children, so
/// replacing or reordering children never copies the subtrees themselves. Committing a draft
/// that was not changed hands back the original handle.
#[derive(Debug)]
pub struct Draft {
    path: ElementPath,
    original: Element,
    style: Style,
    data: ElementData,
    children: Vec<Element>,
}

impl Draft {
    pub(crate) fn new(original: &Element, path: ElementPath) -> Self {
        Self {
            path,
            original: original.clone(),
            style: original.style().clone(),
            data: original.data().clone(),
            children: original.children().to_vec(),
        }
    }

    /// Path of the drafted node relative to the root the edit started from.
    pub fn path(&self) -> &ElementPath {
        &self.path
    }

    /// The node as it was before this draft.
    pub fn original(&self) -> &Element {
        &self.original
    }

    pub fn kind(&self) -> ElementKind {
        self.data.kind()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Replaces the property map of one breakpoint/state pair.
    pub fn set_style(&mut self, breakpoint: Breakpoint, state: &str, props: Properties) {
        self.style.set(breakpoint, state, props);
    }

    pub fn data(&self) -> &ElementData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut ElementData {
        &mut self.data
    }

    pub fn text_mut(&mut self) -> Option<&mut TextData> {
        match &mut self.data {
            ElementData::Text(data) => Some(data),
            _ => None,
        }
    }

    pub fn link_mut(&mut self) -> Option<&mut LinkData> {
        match &mut self.data {
            ElementData::Link(data) => Some(data),
            _ => None,
        }
    }

    pub fn image_mut(&mut self) -> Option<&mut ImageData> {
        match &mut self.data {
            ElementData::Image(data) => Some(data),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn set_children(&mut self, children: Vec<Element>) {
        self.children = children;
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn insert_child(&mut self, index: usize, child: Element) -> Result<(), PathError> {
        if index > self.children.len() {
            return Err(self.out_of_bounds(index));
        }
        self.children.insert(index, child);
        Ok(())
    }

    pub fn remove_child(&mut self, index: usize) -> Result<Element, PathError> {
        if index >= self.children.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.children.remove(index))
    }

    pub fn replace_child(&mut self, index: usize, child: Element) -> Result<Element, PathError> {
        let len = self.children.len();
        let slot = self
            .children
            .get_mut(index)
            .ok_or_else(|| PathError::OutOfBounds {
                path: self.path.clone(),
                index,
                len,
            })?;
        Ok(std::mem::replace(slot, child))
    }

    fn out_of_bounds(&self, index: usize) -> PathError {
        PathError::OutOfBounds {
            path: self.path.clone(),
            index,
            len: self.children.len(),
        }
    }

    fn is_unchanged(&self) -> bool {
        self.style == *self.original.style()
            && self.data == *self.original.data()
            && self.children.len() == self.original.children().len()
            && self
                .children
                .iter()
                .zip(self.original.children())
                .all(|(a, b)| Element::ptr_eq(a, b))
    }

    /// Freezes the draft into an immutable element.
    pub(crate) fn commit(self) -> Element {
        if self.is_unchanged() {
            return self.original;
        }
        Element::from_parts(self.style, self.data, self.children)
    }
}
