use serde::{Deserialize, Serialize};
use std::fmt;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const ESCAPE: char = '\\';

/// One piece of an interpolated text value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text, rendered as-is.
    Text(String),
    /// A reference to a runtime value, written as `{{name}}` in source form.
    Binding(String),
}

/// A text value that may interpolate bindings, e.g. `"Hello {{user.name}}"`.
///
/// Expressions are stored in their parsed form and serialize back to a source string
/// that parses to the same segments. In source form a backslash escapes a following
/// `{` or `\`, which is how literal text containing `{{` survives a round trip.
/// Whitespace around binding names is not kept: `{{ name }}` reads back as `{{name}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Expression {
    segments: Vec<Segment>,
}

impl Expression {
    /// Parses a source string. An unterminated or empty `{{` is kept as literal text, and
    /// a backslash not followed by `{` or `\` is literal too.
    pub fn from_string(source: &str) -> Self {
        let mut expression = Self::default();
        let mut text = String::new();
        let mut rest = source;

        while let Some(c) = rest.chars().next() {
            if c == ESCAPE {
                if let Some(next @ ('{' | ESCAPE)) = rest[1..].chars().next() {
                    text.push(next);
                    rest = &rest[2..];
                    continue;
                }
            } else if let Some(after_open) = rest.strip_prefix(OPEN) {
                if let Some(end) = after_open.find(CLOSE) {
                    let name = after_open[..end].trim();
                    if !name.is_empty() {
                        expression.push_text(&text);
                        text.clear();
                        expression.segments.push(Segment::Binding(name.to_string()));
                        rest = &after_open[end + CLOSE.len()..];
                        continue;
                    }
                }
            }
            text.push(c);
            rest = &rest[c.len_utf8()..];
        }
        expression.push_text(&text);
        expression
    }

    /// An expression holding only literal text. Braces are not interpreted, and are
    /// escaped when the expression is written back to source form.
    pub fn literal(text: impl Into<String>) -> Self {
        let mut expression = Self::default();
        expression.push_text(&text.into());
        expression
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, Segment::Text(_)))
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Collects the names of all bindings, in first-occurrence order and without duplicates.
    pub fn bindings(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Binding(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Renders the expression, resolving each binding through `lookup`.
    /// Unresolved bindings render as an empty string.
    pub fn render<'a, F>(&self, mut lookup: F) -> String
    where
        F: FnMut(&str) -> Option<&'a str>,
    {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.as_str(),
                Segment::Binding(name) => lookup(name).unwrap_or(""),
            })
            .collect()
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        // Adjacent literal runs are merged so equality doesn't depend on how the text was split.
        if let Some(Segment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Text(text.to_string()));
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => {
                    for c in text.chars() {
                        if c == '{' || c == ESCAPE {
                            write!(f, "{}", ESCAPE)?;
                        }
                        write!(f, "{}", c)?;
                    }
                }
                Segment::Binding(name) => write!(f, "{}{}{}", OPEN, name, CLOSE)?,
            }
        }
        Ok(())
    }
}

impl From<String> for Expression {
    fn from(source: String) -> Self {
        Self::from_string(&source)
    }
}

impl From<&str> for Expression {
    fn from(source: &str) -> Self {
        Self::from_string(source)
    }
}

impl From<Expression> for String {
    fn from(expression: Expression) -> Self {
        expression.to_string()
    }
}
