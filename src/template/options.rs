use super::{validate_shape, FieldSpec, OptionValue, Slot};
use crate::editor;
use crate::element::Element;
use crate::error::TemplateError;
use tracing::debug;

/// A field of an options panel together with its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: OptionValue,
}

/// An options panel bound to a root element and a `set` callback.
///
/// Each [`Options::change`] edits the slot's node through the structural editor and hands
/// the *whole* new root to `set`. The panel then rebinds to that root, so consecutive
/// changes build on each other instead of on a stale tree.
pub struct Options<'a> {
    template: &'a str,
    slots: &'a [Slot],
    fields: &'a [FieldSpec],
    root: Element,
    set: &'a mut dyn FnMut(Element),
}

impl<'a> Options<'a> {
    pub(crate) fn bind(
        template: &'a str,
        slots: &'a [Slot],
        fields: &'a [FieldSpec],
        root: Element,
        set: &'a mut dyn FnMut(Element),
    ) -> Result<Self, TemplateError> {
        validate_shape(template, slots, &root)?;
        Ok(Self {
            template,
            slots,
            fields,
            root,
            set,
        })
    }

    /// The root this panel currently edits.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn template(&self) -> &str {
        self.template
    }

    /// Resolves a slot against the bound root.
    pub fn slot(&self, name: &str) -> Result<&Element, TemplateError> {
        let slot = self.slot_def(name)?;
        Ok(self.root.at(&slot.path)?)
    }

    /// Every field of the panel with the value read from the bound root.
    pub fn fields(&self) -> Result<Vec<OptionField>, TemplateError> {
        self.fields
            .iter()
            .map(|spec| {
                Ok::<_, TemplateError>(OptionField {
                    name: spec.name.clone(),
                    label: spec.label.clone(),
                    placeholder: spec.placeholder.clone(),
                    value: self.value(&spec.name)?,
                })
            })
            .collect()
    }

    pub fn value(&self, field: &str) -> Result<OptionValue, TemplateError> {
        let spec = self.field_spec(field)?;
        let node = self.slot(&spec.slot)?;
        spec.target
            .read(node)
            .ok_or_else(|| TemplateError::FieldTarget {
                field: spec.name.clone(),
                kind: node.kind(),
            })
    }

    /// Writes `value` into `field`, then calls `set` with the new root.
    pub fn change(
        &mut self,
        field: &str,
        value: impl Into<OptionValue>,
    ) -> Result<(), TemplateError> {
        let spec = self.field_spec(field)?;
        let slot = self.slot_def(&spec.slot)?;
        let value = value.into();

        let new_root = editor::try_edit(&self.root, &slot.path, |draft| {
            spec.target.apply(&spec.name, draft, value)
        })?;

        debug!(
            template = self.template,
            field = field,
            path = %slot.path,
            "options field changed"
        );
        self.root = new_root.clone();
        (self.set)(new_root);
        Ok(())
    }

    fn field_spec(&self, name: &str) -> Result<&'a FieldSpec, TemplateError> {
        self.fields
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| self.unknown(name))
    }

    fn slot_def(&self, name: &str) -> Result<&'a Slot, TemplateError> {
        self.slots
            .iter()
            .find(|slot| slot.name == name)
            .ok_or_else(|| self.unknown(name))
    }

    fn unknown(&self, name: &str) -> TemplateError {
        TemplateError::UnknownField {
            template: self.template.to_string(),
            name: name.to_string(),
        }
    }
}
