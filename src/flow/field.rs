use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A task body field as it appears in a pipeline manifest: either a plain string, or a
/// reference to a value produced elsewhere (`{ "key": ..., "source": ... }`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawFieldValue {
    Text(String),
    Structured { key: String, source: String },
    Other(serde_json::Value),
}

/// The normalized shape handed to the generic field-input widget.
///
/// In human-readable formats it serializes as `{"type": "text", "data": ...}` or
/// `{"type": "option", "data": key, "groupName": source, "iconUrl": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Option {
        key: String,
        group_name: String,
        icon_url: String,
    },
}

impl FieldValue {
    pub fn text(data: impl Into<String>) -> Self {
        FieldValue::Text(data.into())
    }

    pub fn option(key: impl Into<String>, group_name: impl Into<String>) -> Self {
        FieldValue::Option {
            key: key.into(),
            group_name: group_name.into(),
            icon_url: String::new(),
        }
    }

    /// The `data` member of the widget value.
    pub fn data(&self) -> &str {
        match self {
            FieldValue::Text(data) => data,
            FieldValue::Option { key, .. } => key,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Option { .. } => "option",
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Normalizes a manifest field value. Returns `None` for values that are neither a string
/// nor a `{key, source}` object.
pub fn normalize_field(value: &RawFieldValue) -> Option<FieldValue> {
    match value {
        RawFieldValue::Text(data) => Some(FieldValue::text(data.clone())),
        RawFieldValue::Structured { key, source } => {
            Some(FieldValue::option(key.clone(), source.clone()))
        }
        RawFieldValue::Other(_) => None,
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedField {
    Text {
        data: String,
    },
    Option {
        data: String,
        #[serde(rename = "groupName")]
        group_name: String,
        #[serde(rename = "iconUrl", default)]
        icon_url: String,
    },
}

// Internally tagged enums need a self-describing format, so binary snapshots use this instead.
#[derive(Serialize, Deserialize)]
enum CompactField {
    Text(String),
    Option(String, String, String),
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let tagged = match self.clone() {
                FieldValue::Text(data) => TaggedField::Text { data },
                FieldValue::Option {
                    key,
                    group_name,
                    icon_url,
                } => TaggedField::Option {
                    data: key,
                    group_name,
                    icon_url,
                },
            };
            tagged.serialize(serializer)
        } else {
            let compact = match self.clone() {
                FieldValue::Text(data) => CompactField::Text(data),
                FieldValue::Option {
                    key,
                    group_name,
                    icon_url,
                } => CompactField::Option(key, group_name, icon_url),
            };
            compact.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            Ok(match TaggedField::deserialize(deserializer)? {
                TaggedField::Text { data } => FieldValue::Text(data),
                TaggedField::Option {
                    data,
                    group_name,
                    icon_url,
                } => FieldValue::Option {
                    key: data,
                    group_name,
                    icon_url,
                },
            })
        } else {
            Ok(match CompactField::deserialize(deserializer)? {
                CompactField::Text(data) => FieldValue::Text(data),
                CompactField::Option(key, group_name, icon_url) => FieldValue::Option {
                    key,
                    group_name,
                    icon_url,
                },
            })
        }
    }
}
