//! Legacy (v1) vocabulary registry.
//!
//! The registry is an immutable snapshot. [`VocabularyRegistry::define`]
//! validates a descriptor and returns a *new* snapshot with the root lookup
//! rebuilt; the receiver is left untouched, so a parse in flight never
//! observes a registration. The legacy property pattern is compiled on the
//! first translation, which only v1 parsing performs.

mod builtin;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{LazyLock, OnceLock};

use mf2_core::{LegacyProperty, LegacyVocabulary};
use regex::Regex;

use crate::error::ParserError;
use crate::grammar::{ClassToken, Prefix, PropertyClass};

static BUILTIN: LazyLock<VocabularyRegistry> = LazyLock::new(|| {
    builtin::vocabularies()
        .into_iter()
        .try_fold(VocabularyRegistry::default(), |registry, (target, vocab)| {
            registry.define(target, &vocab)
        })
        .expect("built-in vocabularies are valid")
});

/// One registered vocabulary, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub target: String,
    pub roots: BTreeSet<String>,
    pub properties: BTreeMap<String, PropertyClass>,
}

#[derive(Debug, Clone, Default)]
pub struct VocabularyRegistry {
    vocabularies: BTreeMap<String, Vocabulary>,
    roots: HashMap<String, String>,
    /// Alternation of every registered legacy property name.
    legacy_properties: OnceLock<Option<Regex>>,
}

impl VocabularyRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the bundled h-card, h-adr, h-entry and h-event
    /// vocabularies.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Register `vocab` under the v2 type `target`, replacing any earlier
    /// registration for that type.
    ///
    /// # Errors
    /// Returns `ParserError::InvalidVocabulary` when the target is not an
    /// `h-*` type, no roots are given, or a property maps to something that
    /// is not a `(p|u|dt|e)-<name>` declaration.
    pub fn define(&self, target: &str, vocab: &LegacyVocabulary) -> Result<Self, ParserError> {
        let invalid = |reason: String| ParserError::InvalidVocabulary {
            target: target.to_string(),
            reason,
        };

        if !matches!(ClassToken::classify(target), ClassToken::Object(_)) {
            return Err(invalid("target must be an h-* type".to_string()));
        }

        let mut roots = BTreeSet::new();
        for root in &vocab.roots {
            if !is_class_token(root) {
                return Err(invalid(format!("invalid root class name {root:?}")));
            }
            roots.insert(root.clone());
        }
        if roots.is_empty() {
            return Err(invalid("at least one root class name is required".to_string()));
        }

        let mut properties = BTreeMap::new();
        for (legacy, mapped) in &vocab.properties {
            if !is_class_token(legacy) {
                return Err(invalid(format!("invalid legacy class name {legacy:?}")));
            }
            let property = property_target(mapped)
                .ok_or_else(|| invalid(format!("{legacy:?} maps to an invalid property")))?;
            properties.insert(legacy.clone(), property);
        }

        let mut next = self.clone();
        next.vocabularies.insert(
            target.to_string(),
            Vocabulary {
                target: target.to_string(),
                roots,
                properties,
            },
        );
        next.rebuild_roots();
        next.legacy_properties = OnceLock::new();
        tracing::debug!(target, vocabularies = next.len(), "registered legacy vocabulary");
        Ok(next)
    }

    fn rebuild_roots(&mut self) {
        self.roots.clear();
        for vocab in self.vocabularies.values() {
            for root in &vocab.roots {
                self.roots.insert(root.clone(), vocab.target.clone());
            }
        }
    }

    /// The legacy property pattern, compiled on first use. `None` when no
    /// properties are registered or compilation failed; translation then
    /// goes by table lookup alone.
    fn legacy_pattern(&self) -> Option<&Regex> {
        self.legacy_properties
            .get_or_init(|| self.compile_legacy_pattern())
            .as_ref()
    }

    fn compile_legacy_pattern(&self) -> Option<Regex> {
        let names: BTreeSet<&str> = self
            .vocabularies
            .values()
            .flat_map(|vocab| vocab.properties.keys().map(String::as_str))
            .collect();
        if names.is_empty() {
            return None;
        }
        let alternation = names
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        match Regex::new(&format!("^(?:{alternation})$")) {
            Ok(pattern) => {
                tracing::debug!(vocabularies = self.len(), "compiled legacy property pattern");
                Some(pattern)
            }
            Err(error) => {
                tracing::warn!(%error, "legacy property pattern did not compile; using lookup");
                None
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_compiled(&self) -> bool {
        self.legacy_properties.get().is_some()
    }

    /// v2 types for every legacy root among `class_names`, first-seen order.
    #[must_use]
    pub fn root_types(&self, class_names: &[String]) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for token in class_names {
            if let Some(target) = self.roots.get(token) {
                if !types.contains(target) {
                    types.push(target.clone());
                }
            }
        }
        types
    }

    /// Translate legacy property class names under the vocabularies of
    /// `targets` into their v2 declarations.
    #[must_use]
    pub fn translate(&self, targets: &[String], class_names: &[String]) -> Vec<PropertyClass> {
        if self.vocabularies.is_empty() {
            return Vec::new();
        }
        let pattern = self.legacy_pattern();
        let mut out: Vec<PropertyClass> = Vec::new();
        let candidates = class_names
            .iter()
            .filter(|token| pattern.is_none_or(|pattern| pattern.is_match(token)));
        for token in candidates {
            for target in targets {
                let mapped = self
                    .vocabularies
                    .get(target)
                    .and_then(|vocab| vocab.properties.get(token));
                if let Some(property) = mapped {
                    if !out.contains(property) {
                        out.push(property.clone());
                    }
                }
            }
        }
        out
    }

    #[must_use]
    pub fn vocabulary(&self, target: &str) -> Option<&Vocabulary> {
        self.vocabularies.get(target)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vocabulary> {
        self.vocabularies.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vocabularies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vocabularies.is_empty()
    }
}

fn is_class_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

fn property_target(mapped: &LegacyProperty) -> Option<PropertyClass> {
    match mapped {
        LegacyProperty::ClassName(class_name) => PropertyClass::parse(class_name),
        LegacyProperty::Pair(prefix, name) => {
            let prefix = Prefix::parse(prefix)?;
            PropertyClass::parse(&format!("{prefix}-{name}"))
        }
    }
}
