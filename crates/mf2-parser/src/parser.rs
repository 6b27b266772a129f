//! The public entry point: an immutable settings + vocabulary snapshot.

use mf2_core::{DomNode, LegacyVocabulary, ParserSettings, Results, SettingsOverride};

use crate::builder::ObjectBuilder;
use crate::error::ParserError;
use crate::html;
use crate::vocabulary::VocabularyRegistry;

/// A configured microformats parser.
///
/// Registration and settings changes return a new `Parser`; an existing one
/// never changes, so it can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Parser {
    settings: ParserSettings,
    registry: VocabularyRegistry,
}

impl Default for Parser {
    /// Default settings with the built-in legacy vocabularies.
    fn default() -> Self {
        Self::new(ParserSettings::default(), VocabularyRegistry::builtin())
    }
}

impl Parser {
    #[must_use]
    pub fn new(settings: ParserSettings, registry: VocabularyRegistry) -> Self {
        if settings.parse_item_ref_attr {
            tracing::debug!("parse_item_ref_attr is set but itemref resolution is not implemented");
        }
        Self { settings, registry }
    }

    /// The current settings snapshot.
    #[must_use]
    pub const fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// A parser with `overrides` applied on top of the current settings.
    #[must_use]
    pub fn with_overrides(&self, overrides: &SettingsOverride) -> Self {
        Self::new(
            self.settings.with_overrides(overrides),
            self.registry.clone(),
        )
    }

    #[must_use]
    pub const fn registry(&self) -> &VocabularyRegistry {
        &self.registry
    }

    /// A parser that also recognises the legacy vocabulary `vocab` as `target`.
    ///
    /// # Errors
    /// Returns `ParserError::InvalidVocabulary` if the descriptor is rejected.
    pub fn define_legacy_vocabulary(
        &self,
        target: &str,
        vocab: &LegacyVocabulary,
    ) -> Result<Self, ParserError> {
        Ok(Self {
            settings: self.settings.clone(),
            registry: self.registry.define(target, vocab)?,
        })
    }

    /// Extract every microformat object under `root`.
    ///
    /// # Errors
    /// Returns `ParserError::InvalidInput` if `root` is not a document or an
    /// element, or if the tree violates the element contract.
    pub fn parse<N: DomNode>(&self, root: &N) -> Result<Results, ParserError> {
        ObjectBuilder::new(&self.settings, &self.registry).run(root)
    }

    /// Parse HTML source with tree-sitter and extract from the document.
    ///
    /// # Errors
    /// See [`Parser::parse`].
    pub fn parse_html(&self, source: &str) -> Result<Results, ParserError> {
        let tree = html::parse_html(source);
        self.parse(&tree.document())
    }
}
