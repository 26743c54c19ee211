//! Copy-on-write structural editing of element trees.
//!
//! Every edit follows the same shape: take a node, apply a recipe to a mutable [`Draft`]
//! of it, and commit the draft into a new immutable node. Edits addressed by path then
//! rebuild only the ancestors on that path; every other subtree of the new root is the
//! very same allocation as in the old root, and the old root stays valid.
//!
//! ```rust
//! use weft::editor;
//! use weft::element::{Element, ElementKind, ElementPath, Expression};
//!
//! let root = editor::build(ElementKind::Box, |draft| {
//!     draft.push_child(Element::empty(ElementKind::Text));
//!     draft.push_child(Element::empty(ElementKind::Text));
//! });
//!
//! let edited = editor::edit(&root, &ElementPath::from([1]), |draft| {
//!     if let Some(text) = draft.text_mut() {
//!         text.text = Expression::from_string("Hello {{name}}");
//!     }
//! })
//! .unwrap();
//!
//! // Untouched siblings are shared, the original tree is unchanged.
//! assert!(Element::ptr_eq(&root.children()[0], &edited.children()[0]));
//! assert!(root.children()[1].as_text().unwrap().text.is_empty());
//! ```

use crate::element::{Element, ElementKind, ElementPath};
use crate::error::PathError;
use std::convert::Infallible;
use tracing::{trace, warn};

mod draft;

pub use draft::Draft;

/// Applies `recipe` to a draft of `element` and commits it. `element` is left untouched.
///
/// A recipe that changes nothing returns a handle to the original node. Children pushed
/// here must be distinct handles; the check happens once the node is spliced into a tree.
pub fn produce<F>(element: &Element, recipe: F) -> Element
where
    F: FnOnce(&mut Draft),
{
    let result: Result<Element, Infallible> = try_produce(element, |draft| {
        recipe(draft);
        Ok(())
    });
    match result {
        Ok(element) => element,
        Err(never) => match never {},
    }
}

/// Like [`produce`], but the recipe may fail. On failure nothing is committed.
pub fn try_produce<F, E>(element: &Element, recipe: F) -> Result<Element, E>
where
    F: FnOnce(&mut Draft) -> Result<(), E>,
{
    let mut draft = Draft::new(element, ElementPath::root());
    recipe(&mut draft)?;
    Ok(draft.commit())
}

/// Builds a fresh element of `kind` through a draft.
pub fn build<F>(kind: ElementKind, recipe: F) -> Element
where
    F: FnOnce(&mut Draft),
{
    produce(&Element::empty(kind), recipe)
}

/// Edits the descendant at `path` and returns the new root.
pub fn edit<F>(root: &Element, path: &ElementPath, recipe: F) -> Result<Element, PathError>
where
    F: FnOnce(&mut Draft),
{
    try_edit(root, path, |draft| {
        recipe(draft);
        Ok::<(), PathError>(())
    })
}

/// Edits the descendant at `path` with a fallible recipe and returns the new root.
pub fn try_edit<F, E>(root: &Element, path: &ElementPath, recipe: F) -> Result<Element, E>
where
    F: FnOnce(&mut Draft) -> Result<(), E>,
    E: From<PathError>,
{
    let target = root.at(path)?;
    let mut draft = Draft::new(target, path.clone());
    recipe(&mut draft)?;
    let updated = draft.commit();
    Ok(replace(root, path, updated)?)
}

/// Splices `node` in at `path`, copying only the ancestors on the way down.
///
/// Every node keeps a single parent: if `node`, or anything inside it, is already reachable
/// elsewhere in the resulting tree the edit fails with [`PathError::AlreadyInTree`].
/// Use [`Element::deep_clone`] to place a copy instead.
pub fn replace(root: &Element, path: &ElementPath, node: Element) -> Result<Element, PathError> {
    let new_root = splice(root, path, 0, node)?;
    let changed = !Element::ptr_eq(root, &new_root);
    if changed {
        if let Some(shared) = new_root.find_shared() {
            warn!(path = %path, %shared, "edit would give a node two parents");
            return Err(PathError::AlreadyInTree { path: shared });
        }
    }
    trace!(path = %path, changed, "committed structural edit");
    Ok(new_root)
}

/// Splices `node` in place of `target`, located by identity in `root`.
///
/// Handles taken from an older version of the tree are only found if that subtree was
/// shared into `root`; otherwise this fails with [`PathError::NotInTree`].
pub fn replace_node(root: &Element, target: &Element, node: Element) -> Result<Element, PathError> {
    let path = root.locate(target).ok_or(PathError::NotInTree)?;
    replace(root, &path, node)
}

/// Inserts `child` at `index` among the children of the node at `parent`.
pub fn insert(
    root: &Element,
    parent: &ElementPath,
    index: usize,
    child: Element,
) -> Result<Element, PathError> {
    try_edit(root, parent, |draft| draft.insert_child(index, child))
}

/// Removes the node at `path`. The root itself can't be removed.
pub fn remove(root: &Element, path: &ElementPath) -> Result<Element, PathError> {
    let (parent, index) = path
        .parent()
        .ok_or_else(|| PathError::InvalidPath(path.to_string()))?;
    try_edit(root, &parent, |draft| draft.remove_child(index).map(|_| ()))
}

fn splice(
    node: &Element,
    path: &ElementPath,
    depth: usize,
    replacement: Element,
) -> Result<Element, PathError> {
    let Some(&index) = path.indices().get(depth) else {
        return Ok(replacement);
    };
    let child = node.child(index).ok_or_else(|| PathError::OutOfBounds {
        path: path.prefix(depth),
        index,
        len: node.children().len(),
    })?;

    let new_child = splice(child, path, depth + 1, replacement)?;
    if Element::ptr_eq(child, &new_child) {
        return Ok(node.clone());
    }

    let mut children = node.children().to_vec();
    children[index] = new_child;
    Ok(Element::from_parts(
        node.style().clone(),
        node.data().clone(),
        children,
    ))
}
