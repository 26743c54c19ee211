use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// CSS-like property map, e.g. `fontSize -> 48px`. Keeps insertion order.
pub type Properties = IndexMap<String, String>;

/// Builds a [`Properties`] map from `(name, value)` pairs.
pub fn properties<I, K, V>(pairs: I) -> Properties
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Viewport class a style applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Desktop,
    Tablet,
    Mobile,
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breakpoint::Desktop => write!(f, "desktop"),
            Breakpoint::Tablet => write!(f, "tablet"),
            Breakpoint::Mobile => write!(f, "mobile"),
        }
    }
}

/// Interaction state name used when no other state applies.
pub const DEFAULT_STATE: &str = "default";

/// Property maps keyed by interaction state (`default`, `hover`, ...).
pub type StateStyles = IndexMap<String, Properties>;

/// Per-breakpoint styling of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub desktop: StateStyles,
    #[serde(default)]
    pub tablet: StateStyles,
    #[serde(default)]
    pub mobile: StateStyles,
}

impl Style {
    pub fn breakpoint(&self, breakpoint: Breakpoint) -> &StateStyles {
        match breakpoint {
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Mobile => &self.mobile,
        }
    }

    pub fn breakpoint_mut(&mut self, breakpoint: Breakpoint) -> &mut StateStyles {
        match breakpoint {
            Breakpoint::Desktop => &mut self.desktop,
            Breakpoint::Tablet => &mut self.tablet,
            Breakpoint::Mobile => &mut self.mobile,
        }
    }

    /// Replaces the whole property map of one breakpoint/state pair.
    pub fn set(&mut self, breakpoint: Breakpoint, state: &str, props: Properties) {
        self.breakpoint_mut(breakpoint)
            .insert(state.to_string(), props);
    }

    /// Sets a single property, creating the state entry if needed.
    pub fn set_property(
        &mut self,
        breakpoint: Breakpoint,
        state: &str,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.breakpoint_mut(breakpoint)
            .entry(state.to_string())
            .or_default()
            .insert(name.into(), value.into());
    }

    pub fn property(&self, breakpoint: Breakpoint, state: &str, name: &str) -> Option<&str> {
        self.breakpoint(breakpoint)
            .get(state)
            .and_then(|props| props.get(name))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.desktop.is_empty() && self.tablet.is_empty() && self.mobile.is_empty()
    }
}
