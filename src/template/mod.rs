//! Reusable component templates for the UI builder.
//!
//! A template is a canonical element tree plus a set of named *slots*: frozen paths to the
//! descendants an options panel may edit. Slot paths are checked once when the template is
//! built; editors never reorder the nodes they point at, so typed accessors stay valid.

use crate::editor::Draft;
use crate::element::{Element, ElementKind, ElementPath, Expression};
use crate::error::TemplateError;

mod builtin;
mod options;
mod registry;

pub use builtin::{ImageCaption, TitleSubtitleCta};
pub use options::{OptionField, Options};
pub use registry::{TemplateRegistry, TemplateRegistryBuilder};

/// A named, frozen position inside a template's tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub name: String,
    pub path: ElementPath,
    pub kind: ElementKind,
}

impl Slot {
    pub fn new(name: impl Into<String>, path: impl Into<ElementPath>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
        }
    }
}

/// Which property of a slot's payload an option field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    Text,
    Href,
    OpenInNewTab,
    Src,
    Alt,
}

impl FieldTarget {
    /// Whether an element of `kind` carries this property.
    pub fn accepts(self, kind: ElementKind) -> bool {
        matches!(
            (self, kind),
            (FieldTarget::Text, ElementKind::Text)
                | (FieldTarget::Href | FieldTarget::OpenInNewTab, ElementKind::Link)
                | (FieldTarget::Src | FieldTarget::Alt, ElementKind::Image)
        )
    }

    /// Reads the property from an element, if it carries it.
    pub fn read(self, element: &Element) -> Option<OptionValue> {
        match self {
            FieldTarget::Text => element.as_text().map(|d| OptionValue::Text(d.text.clone())),
            FieldTarget::Href => element.as_link().map(|d| OptionValue::Text(d.href.clone())),
            FieldTarget::OpenInNewTab => element
                .as_link()
                .map(|d| OptionValue::Flag(d.open_in_new_tab)),
            FieldTarget::Src => element.as_image().map(|d| OptionValue::Text(d.src.clone())),
            FieldTarget::Alt => element.as_image().map(|d| OptionValue::Text(d.alt.clone())),
        }
    }

    pub(crate) fn apply(
        self,
        field: &str,
        draft: &mut Draft,
        value: OptionValue,
    ) -> Result<(), TemplateError> {
        let kind = draft.kind();
        let applied = match (self, value) {
            (FieldTarget::Text, OptionValue::Text(v)) => draft.text_mut().map(|d| d.text = v),
            (FieldTarget::Href, OptionValue::Text(v)) => draft.link_mut().map(|d| d.href = v),
            (FieldTarget::Src, OptionValue::Text(v)) => draft.image_mut().map(|d| d.src = v),
            (FieldTarget::Alt, OptionValue::Text(v)) => draft.image_mut().map(|d| d.alt = v),
            (FieldTarget::OpenInNewTab, OptionValue::Flag(v)) => {
                draft.link_mut().map(|d| d.open_in_new_tab = v)
            }
            (FieldTarget::OpenInNewTab, OptionValue::Text(_)) => {
                return Err(TemplateError::ValueMismatch {
                    field: field.to_string(),
                    expected: "flag",
                });
            }
            (_, OptionValue::Flag(_)) => {
                return Err(TemplateError::ValueMismatch {
                    field: field.to_string(),
                    expected: "text",
                });
            }
        };
        applied.ok_or_else(|| TemplateError::FieldTarget {
            field: field.to_string(),
            kind,
        })
    }
}

/// A value entered into an options panel field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Text(Expression),
    Flag(bool),
}

impl From<Expression> for OptionValue {
    fn from(expression: Expression) -> Self {
        OptionValue::Text(expression)
    }
}

impl From<&str> for OptionValue {
    fn from(source: &str) -> Self {
        OptionValue::Text(Expression::from_string(source))
    }
}

impl From<bool> for OptionValue {
    fn from(flag: bool) -> Self {
        OptionValue::Flag(flag)
    }
}

/// Describes one input of a template's options panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub slot: String,
    pub target: FieldTarget,
}

impl FieldSpec {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        slot: impl Into<String>,
        target: FieldTarget,
    ) -> Self {
        let label = label.into();
        Self {
            name: name.into(),
            placeholder: label.clone(),
            label,
            slot: slot.into(),
            target,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// The contract every registered template fulfils.
pub trait ComponentTemplate: Send + Sync {
    fn name(&self) -> &str;

    /// The canonical element tree of this template.
    fn component(&self) -> &Element;

    fn slots(&self) -> &[Slot];

    fn fields(&self) -> &[FieldSpec];

    fn slot_def(&self, name: &str) -> Result<&Slot, TemplateError> {
        self.slots()
            .iter()
            .find(|slot| slot.name == name)
            .ok_or_else(|| TemplateError::UnknownField {
                template: self.name().to_string(),
                name: name.to_string(),
            })
    }

    /// Resolves a slot in the canonical tree.
    fn slot(&self, name: &str) -> Result<&Element, TemplateError> {
        let slot = self.slot_def(name)?;
        Ok(self.component().at(&slot.path)?)
    }

    /// Checks that `root` has this template's shape at every slot.
    fn validate(&self, root: &Element) -> Result<(), TemplateError> {
        validate_shape(self.name(), self.slots(), root)
    }

    /// Binds an options panel to the *current* root. Every field change hands the whole
    /// new root to `set`.
    fn options<'a>(
        &'a self,
        root: &Element,
        set: &'a mut dyn FnMut(Element),
    ) -> Result<Options<'a>, TemplateError> {
        Options::bind(self.name(), self.slots(), self.fields(), root.clone(), set)
    }
}

pub(crate) fn validate_shape(
    template: &str,
    slots: &[Slot],
    root: &Element,
) -> Result<(), TemplateError> {
    for slot in slots {
        root.at_kind(&slot.path, slot.kind)
            .map_err(|source| TemplateError::ShapeMismatch {
                template: template.to_string(),
                slot: slot.name.clone(),
                source,
            })?;
    }
    Ok(())
}

/// A template described entirely by data: a tree, its slots, and its option fields.
#[derive(Debug, Clone)]
pub struct SlotTemplate {
    name: String,
    component: Element,
    slots: Vec<Slot>,
    fields: Vec<FieldSpec>,
}

impl SlotTemplate {
    /// Validates the tree against the slots and the fields against the slots.
    pub fn new(
        name: impl Into<String>,
        component: Element,
        slots: Vec<Slot>,
        fields: Vec<FieldSpec>,
    ) -> Result<Self, TemplateError> {
        let name = name.into();
        validate_shape(&name, &slots, &component)?;

        for field in &fields {
            let slot = slots
                .iter()
                .find(|slot| slot.name == field.slot)
                .ok_or_else(|| TemplateError::UnknownField {
                    template: name.clone(),
                    name: field.slot.clone(),
                })?;
            if !field.target.accepts(slot.kind) {
                return Err(TemplateError::FieldTarget {
                    field: field.name.clone(),
                    kind: slot.kind,
                });
            }
        }

        Ok(Self {
            name,
            component,
            slots,
            fields,
        })
    }
}

impl ComponentTemplate for SlotTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn component(&self) -> &Element {
        &self.component
    }

    fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}
