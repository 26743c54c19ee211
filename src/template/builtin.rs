use super::{ComponentTemplate, FieldSpec, FieldTarget, Slot, SlotTemplate};
use crate::editor;
use crate::element::{
    properties, BoxElement, Breakpoint, Element, ElementKind, ElementPath, Expression,
    ImageElement, LinkElement, TextElement, DEFAULT_STATE,
};
use crate::error::TemplateError;

fn text(content: &str, props: &[(&str, &str)]) -> Element {
    editor::build(ElementKind::Text, |draft| {
        if let Some(data) = draft.text_mut() {
            data.text = Expression::literal(content);
        }
        if !props.is_empty() {
            draft.set_style(
                Breakpoint::Desktop,
                DEFAULT_STATE,
                properties(props.iter().copied()),
            );
        }
    })
}

/// Headline, supporting line, and a call-to-action link stacked in a column.
///
/// Tree: `Box[Text title, Text subtitle, Link cta[Text cta text]]`.
#[derive(Debug, Clone)]
pub struct TitleSubtitleCta {
    inner: SlotTemplate,
    wrapper: BoxElement,
    title: TextElement,
    subtitle: TextElement,
    cta_link: LinkElement,
    cta_text: TextElement,
}

impl TitleSubtitleCta {
    pub const NAME: &'static str = "Title-Subtitle-CTA";

    pub fn new() -> Result<Self, TemplateError> {
        let title = text(
            "Invest in best ideas",
            &[("fontSize", "48px"), ("fontWeight", "600")],
        );
        let subtitle = text(
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nunc auctor, nisl eget luctus lacinia, nunc nisl aliquam nunc, eget aliquam nunc nisl eget nunc.",
            &[("fontSize", "28px"), ("color", "#6a6a6a")],
        );
        let cta = editor::build(ElementKind::Link, |draft| {
            draft.set_style(
                Breakpoint::Desktop,
                DEFAULT_STATE,
                properties([
                    ("fontSize", "24px"),
                    ("padding", "10px 20px"),
                    ("borderRadius", "10px"),
                    ("backgroundColor", "#000000"),
                    ("color", "#ffffff"),
                    ("fontWeight", "600"),
                ]),
            );
            draft.push_child(text("Click here", &[]));
            if let Some(link) = draft.link_mut() {
                link.href = Expression::literal("#");
                link.open_in_new_tab = false;
            }
        });

        let layout = editor::build(ElementKind::Box, |draft| {
            draft.set_style(
                Breakpoint::Desktop,
                DEFAULT_STATE,
                properties([
                    ("maxWidth", "70%"),
                    ("height", "400px"),
                    ("display", "flex"),
                    ("flexDirection", "column"),
                    ("alignItems", "center"),
                    ("gap", "40px"),
                ]),
            );
            draft.set_children(vec![title, subtitle, cta]);
        });

        let inner = SlotTemplate::new(
            Self::NAME,
            layout,
            vec![
                Slot::new("wrapper", ElementPath::root(), ElementKind::Box),
                Slot::new("title", [0], ElementKind::Text),
                Slot::new("subtitle", [1], ElementKind::Text),
                Slot::new("cta_link", [2], ElementKind::Link),
                Slot::new("cta_text", [2, 0], ElementKind::Text),
            ],
            vec![
                FieldSpec::new("title", "Title", "title", FieldTarget::Text),
                FieldSpec::new("subtitle", "Subtitle", "subtitle", FieldTarget::Text),
                FieldSpec::new("cta_link", "CTA Link", "cta_link", FieldTarget::Href)
                    .with_placeholder("CTA link"),
                FieldSpec::new("cta_text", "CTA Text", "cta_text", FieldTarget::Text)
                    .with_placeholder("CTA text"),
            ],
        )?;

        let tree = inner.component();
        Ok(Self {
            wrapper: tree.narrow_at(&ElementPath::root())?,
            title: tree.narrow_at(&ElementPath::from([0]))?,
            subtitle: tree.narrow_at(&ElementPath::from([1]))?,
            cta_link: tree.narrow_at(&ElementPath::from([2]))?,
            cta_text: tree.narrow_at(&ElementPath::from([2, 0]))?,
            inner,
        })
    }

    pub fn wrapper(&self) -> &BoxElement {
        &self.wrapper
    }

    pub fn title(&self) -> &TextElement {
        &self.title
    }

    pub fn subtitle(&self) -> &TextElement {
        &self.subtitle
    }

    pub fn cta_link(&self) -> &LinkElement {
        &self.cta_link
    }

    pub fn cta_text(&self) -> &TextElement {
        &self.cta_text
    }
}

impl ComponentTemplate for TitleSubtitleCta {
    fn name(&self) -> &str {
        self.inner.name()
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

/// An image with a caption underneath.
///
/// Tree: `Box[Image, Text caption]`.
#[derive(Debug, Clone)]
pub struct ImageCaption {
    inner: SlotTemplate,
    wrapper: BoxElement,
    image: ImageElement,
    caption: TextElement,
}

impl ImageCaption {
    pub const NAME: &'static str = "Image-Caption";

    pub fn new() -> Result<Self, TemplateError> {
        let image = editor::build(ElementKind::Image, |draft| {
            draft.set_style(
                Breakpoint::Desktop,
                DEFAULT_STATE,
                properties([("width", "100%"), ("borderRadius", "8px")]),
            );
            if let Some(data) = draft.image_mut() {
                data.src = Expression::literal("https://placehold.co/600x400");
                data.alt = Expression::literal("Placeholder");
            }
        });
        let caption = text(
            "A short caption",
            &[("fontSize", "14px"), ("color", "#6a6a6a")],
        );

        let layout = editor::build(ElementKind::Box, |draft| {
            draft.set_style(
                Breakpoint::Desktop,
                DEFAULT_STATE,
                properties([
                    ("display", "flex"),
                    ("flexDirection", "column"),
                    ("gap", "8px"),
                ]),
            );
            draft.set_children(vec![image, caption]);
        });

        let inner = SlotTemplate::new(
            Self::NAME,
            layout,
            vec![
                Slot::new("wrapper", ElementPath::root(), ElementKind::Box),
                Slot::new("image", [0], ElementKind::Image),
                Slot::new("caption", [1], ElementKind::Text),
            ],
            vec![
                FieldSpec::new("image_src", "Image URL", "image", FieldTarget::Src),
                FieldSpec::new("image_alt", "Alt text", "image", FieldTarget::Alt),
                FieldSpec::new("caption", "Caption", "caption", FieldTarget::Text),
            ],
        )?;

        let tree = inner.component();
        Ok(Self {
            wrapper: tree.narrow_at(&ElementPath::root())?,
            image: tree.narrow_at(&ElementPath::from([0]))?,
            caption: tree.narrow_at(&ElementPath::from([1]))?,
            inner,
        })
    }

    pub fn wrapper(&self) -> &BoxElement {
        &self.wrapper
    }

    pub fn image(&self) -> &ImageElement {
        &self.image
    }

    pub fn caption(&self) -> &TextElement {
        &self.caption
    }
}

impl ComponentTemplate for ImageCaption {
    fn name(&self) -> &str {
        self.inner.name()
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
