use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

/// A node-rooted structured entity identified by one or more `h-*` types.
///
/// Serializes as `{ "type": [...], "properties": {...} }`, with a `rels` map
/// only when relationships were collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MicroformatObject {
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub properties: BTreeMap<String, Vec<PropertyValue>>,
    #[serde(rename = "rels", skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, Vec<String>>,
}

impl MicroformatObject {
    /// Create an object with the given types and no properties.
    ///
    /// Duplicate type tokens are dropped, keeping first-seen order.
    #[must_use]
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for ty in types {
            let ty = ty.into();
            if !unique.contains(&ty) {
                unique.push(ty);
            }
        }
        Self {
            types: unique,
            properties: BTreeMap::new(),
            relationships: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn has_type(&self, ty: &str) -> bool {
        self.types.iter().any(|t| t == ty)
    }

    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// All values of a property, empty when absent.
    #[must_use]
    pub fn property(&self, name: &str) -> &[PropertyValue] {
        self.properties.get(name).map_or(&[], Vec::as_slice)
    }

    /// Literal text of the first value of a property.
    #[must_use]
    pub fn first_literal(&self, name: &str) -> Option<&str> {
        self.property(name).first().map(PropertyValue::literal)
    }

    /// Append a value, creating the property on first use.
    pub fn push_property(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.properties.entry(name.into()).or_default().push(value);
    }

    /// Append a relationship target, creating the entry on first use.
    pub fn push_relationship(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.relationships
            .entry(name.into())
            .or_default()
            .push(target.into());
    }
}

/// A single property value: plain text, or a nested object alongside the
/// text extracted from the same element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Literal(String),
    Embedded {
        #[serde(flatten)]
        object: Arc<MicroformatObject>,
        value: String,
    },
}

impl PropertyValue {
    /// The textual value, for both variants.
    #[must_use]
    pub fn literal(&self) -> &str {
        match self {
            Self::Literal(value) | Self::Embedded { value, .. } => value,
        }
    }

    /// The nested object, if any.
    #[must_use]
    pub fn object(&self) -> Option<&Arc<MicroformatObject>> {
        match self {
            Self::Literal(_) => None,
            Self::Embedded { object, .. } => Some(object),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}
