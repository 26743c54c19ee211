use super::{ElementKind, Expression};
use serde::{Deserialize, Serialize};

/// Payload of a box element. Boxes only carry style and children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxData {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextData {
    pub text: Expression,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkData {
    pub href: Expression,
    #[serde(rename = "openInNewTab", default)]
    pub open_in_new_tab: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub src: Expression,
    #[serde(default)]
    pub alt: Expression,
}

/// Variant-specific payload of an element. The variant determines the element's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementData {
    Box(BoxData),
    Text(TextData),
    Link(LinkData),
    Image(ImageData),
}

impl ElementData {
    /// Default payload for a kind.
    pub fn empty(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Box => ElementData::Box(BoxData::default()),
            ElementKind::Text => ElementData::Text(TextData::default()),
            ElementKind::Link => ElementData::Link(LinkData::default()),
            ElementKind::Image => ElementData::Image(ImageData::default()),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ElementData::Box(_) => ElementKind::Box,
            ElementData::Text(_) => ElementKind::Text,
            ElementData::Link(_) => ElementKind::Link,
            ElementData::Image(_) => ElementKind::Image,
        }
    }
}
