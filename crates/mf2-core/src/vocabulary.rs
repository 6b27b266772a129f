//! Legacy (microformats v1) vocabulary descriptors.
//!
//! A descriptor names the v1 root class names that identify an object of the
//! target v2 type and maps each v1 property class name onto a v2 property.
//! Descriptors are plain data; validation and compilation happen when they
//! are registered with the parser's vocabulary registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A v2 property target, written either as a class name (`"p-name"`) or as
/// a `(prefix, name)` pair (`["p", "name"]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LegacyProperty {
    ClassName(String),
    Pair(String, String),
}

impl From<&str> for LegacyProperty {
    fn from(value: &str) -> Self {
        Self::ClassName(value.to_string())
    }
}

impl From<(&str, &str)> for LegacyProperty {
    fn from((prefix, name): (&str, &str)) -> Self {
        Self::Pair(prefix.to_string(), name.to_string())
    }
}

/// Root class names plus a v1 → v2 property table for one target type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LegacyVocabulary {
    #[serde(default, alias = "root")]
    pub roots: Vec<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, LegacyProperty>,
}

impl LegacyVocabulary {
    #[must_use]
    pub fn new<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property mapping.
    #[must_use]
    pub fn property(mut self, legacy: &str, target: impl Into<LegacyProperty>) -> Self {
        self.properties.insert(legacy.to_string(), target.into());
        self
    }
}
