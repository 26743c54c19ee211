use super::{BoxData, Element, ElementData, ElementKind, ElementPath, ImageData, LinkData, TextData};
use crate::error::PathError;
use std::ops::Deref;

/// A handle statically known to wrap an element of kind [`TypedElement::KIND`].
///
/// Typed handles are only created after a kind check, so reading their payload can't fail.
pub trait TypedElement: Sized {
    const KIND: ElementKind;

    /// Wraps an element whose kind has already been checked against `KIND`.
    #[doc(hidden)]
    fn wrap_checked(element: Element) -> Self;
}

macro_rules! define_typed_elements {
    ( $( ($name:ident, $variant:ident, $data:ty) ),* $(,)? ) => {
        $(
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct $name(Element);

            impl $name {
                pub fn data(&self) -> &$data {
                    match self.0.data() {
                        ElementData::$variant(data) => data,
                        other => unreachable!(
                            "{} wraps a {} element",
                            stringify!($name),
                            other.kind()
                        ),
                    }
                }

                pub fn element(&self) -> &Element {
                    &self.0
                }

                pub fn into_element(self) -> Element {
                    self.0
                }
            }

            impl TypedElement for $name {
                const KIND: ElementKind = ElementKind::$variant;

                fn wrap_checked(element: Element) -> Self {
                    debug_assert_eq!(element.kind(), Self::KIND);
                    Self(element)
                }
            }

            impl TryFrom<Element> for $name {
                type Error = PathError;

                fn try_from(element: Element) -> Result<Self, Self::Error> {
                    element.narrow_at(&ElementPath::root())
                }
            }

            impl From<$name> for Element {
                fn from(typed: $name) -> Self {
                    typed.0
                }
            }

            impl Deref for $name {
                type Target = Element;

                fn deref(&self) -> &Element {
                    &self.0
                }
            }
        )*
    };
}

define_typed_elements! {
    (BoxElement, Box, BoxData),
    (TextElement, Text, TextData),
    (LinkElement, Link, LinkData),
    (ImageElement, Image, ImageData),
}
