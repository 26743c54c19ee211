use super::builtin::{ImageCaption, TitleSubtitleCta};
use super::{ComponentTemplate, FieldSpec, Slot};
use crate::element::Element;
use crate::error::TemplateError;
use ahash::AHashMap;
use itertools::Itertools;
use std::sync::Arc;
use tracing::debug;

/// Defines the built-in templates, their registration, and their creation by name.
macro_rules! define_templates {
    ( $( $template:ident ),* $(,)? ) => {
        fn register_default_templates(registry: &mut TemplateRegistry) -> Result<(), TemplateError> {
            $( registry.register(Arc::new($template::new()?))?; )*
            Ok(())
        }

        fn create_template_by_name(
            name: &str,
        ) -> Result<Option<Arc<dyn ComponentTemplate>>, TemplateError> {
            match name {
                $( n if n == $template::NAME => Ok(Some(Arc::new($template::new()?))), )*
                _ => Ok(None),
            }
        }
    };
}

define_templates! {
    TitleSubtitleCta,
    ImageCaption,
}

/// Named component templates available to the UI builder.
#[derive(Default)]
pub struct TemplateRegistry {
    templates: AHashMap<String, Arc<dyn ComponentTemplate>>,
}

impl TemplateRegistry {
    pub fn builder() -> TemplateRegistryBuilder {
        TemplateRegistryBuilder::default()
    }

    /// A registry holding only the built-in templates.
    pub fn with_defaults() -> Result<Self, TemplateError> {
        Self::builder().with_defaults().build()
    }

    /// Registers a template under its own name after checking its shape.
    pub fn register(&mut self, template: Arc<dyn ComponentTemplate>) -> Result<(), TemplateError> {
        let name = template.name().to_string();
        self.register_as(name, template)
    }

    fn register_as(
        &mut self,
        name: String,
        template: Arc<dyn ComponentTemplate>,
    ) -> Result<(), TemplateError> {
        if self.templates.contains_key(&name) {
            return Err(TemplateError::DuplicateTemplate(name));
        }
        template.validate(template.component())?;
        debug!(template = %name, slots = template.slots().len(), "registered template");
        self.templates.insert(name, template);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&dyn ComponentTemplate, TemplateError> {
        self.templates
            .get(name)
            .map(|template| template.as_ref())
            .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Registered names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).sorted().collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// A fresh copy of a template's canonical tree, ready to be placed into a page.
    pub fn instantiate(&self, name: &str) -> Result<Element, TemplateError> {
        self.get(name).map(|template| template.component().deep_clone())
    }
}

/// Builds a [`TemplateRegistry`], collecting registration errors until `build`.
#[derive(Default)]
pub struct TemplateRegistryBuilder {
    defaults: bool,
    templates: Vec<Arc<dyn ComponentTemplate>>,
    aliases: Vec<(String, String)>,
}

impl TemplateRegistryBuilder {
    pub fn with_defaults(mut self) -> Self {
        self.defaults = true;
        self
    }

    pub fn with_template(mut self, template: Arc<dyn ComponentTemplate>) -> Self {
        self.templates.push(template);
        self
    }

    /// Registers a built-in template under an additional name.
    pub fn with_alias(mut self, alias: &str, builtin_name: &str) -> Self {
        self.aliases
            .push((alias.to_string(), builtin_name.to_string()));
        self
    }

    pub fn build(self) -> Result<TemplateRegistry, TemplateError> {
        let mut registry = TemplateRegistry::default();
        if self.defaults {
            register_default_templates(&mut registry)?;
        }
        for template in self.templates {
            registry.register(template)?;
        }
        for (alias, builtin_name) in self.aliases {
            let inner = create_template_by_name(&builtin_name)?
                .ok_or(TemplateError::UnknownTemplate(builtin_name))?;
            registry.register_as(alias.clone(), Arc::new(Aliased { name: alias, inner }))?;
        }
        Ok(registry)
    }
}

/// A built-in template registered under another name. Errors and option panels report
/// the alias.
struct Aliased {
    name: String,
    inner: Arc<dyn ComponentTemplate>,
}

impl ComponentTemplate for Aliased {
    fn name(&self) -> &str {
        &self.name
    }

    fn component(&self) -> &Element {
        self.inner.component()
    }

    fn slots(&self) -> &[Slot] {
        self.inner.slots()
    }

    fn fields(&self) -> &[FieldSpec] {
        self.inner.fields()
    }
}
