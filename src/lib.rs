//! # Weft - Element Trees and Pipeline Flows for Visual Editors
//!
//! **Weft** is the state layer behind two visual editors: a UI builder that composes trees
//! of styled elements from reusable component templates, and a pipeline editor that shows
//! tasks and triggers as a node graph.
//!
//! ## Core Workflow
//!
//! 1.  **Pick a Template**: Instantiate a component (e.g. `Title-Subtitle-CTA`) from a
//!     [`template::TemplateRegistry`].
//! 2.  **Edit Through Options**: Bind the template's [`template::Options`] to the current
//!     root and a `set` callback. Each field change builds a new root with the
//!     [`editor`] and hands it to `set`; the old root is never touched.
//! 3.  **Show a Pipeline**: Convert a manifest into flow elements with
//!     [`flow::build_graph`], or let a [`flow::FlowEditor`] do it on pipeline selection.
//! 4.  **React to the Canvas**: Forward connect, remove, drop and update events to the
//!     editor and render whatever [`flow::FlowEditor::elements`] returns.
//!
//! ## Quick Start
//!
//! ```rust
//! use weft::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let registry = TemplateRegistry::with_defaults()?;
//!     let template = registry.get("Title-Subtitle-CTA")?;
//!
//!     let root = template.component().clone();
//!     let mut latest = root.clone();
//!     let mut set = |next: Element| latest = next;
//!
//!     let mut options = template.options(&root, &mut set)?;
//!     options.change("title", "Hello {{name}}")?;
//!     drop(options);
//!
//!     // The original tree is untouched; untouched siblings are shared.
//!     assert!(!Element::ptr_eq(&root, &latest));
//!     assert!(Element::ptr_eq(&root.children()[1], &latest.children()[1]));
//!     let title = latest.child(0).and_then(Element::as_text).map(|t| t.text.to_string());
//!     assert_eq!(title.as_deref(), Some("Hello {{name}}"));
//!
//!     let manifest = Manifest::from_json(
//!         r#"{"tasks": {"A": {"executeAfter": {}}, "B": {"executeAfter": {"A": ["t1"]}}}}"#,
//!     )?;
//!     let elements = (&manifest).into_elements()?;
//!     assert_eq!(elements.len(), 3);
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod element;
pub mod error;
pub mod flow;
pub mod prelude;
pub mod snapshot;
pub mod template;
