//! Per-prefix property value extraction.
//!
//! Each extractor reads one element and returns an optional literal. Empty
//! results are reported as `None` so that nothing gets assigned for them.

pub mod text;
pub mod validate;
pub mod value_class;

use std::collections::HashMap;

use mf2_core::{DomNode, ParserSettings};

use crate::grammar::{Classification, Prefix};
use crate::vocabulary::VocabularyRegistry;

pub use text::flatten_text;

/// Extraction strategy. One per property prefix plus `rel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extractor {
    P,
    U,
    Dt,
    E,
    Rel,
}

impl From<Prefix> for Extractor {
    fn from(prefix: Prefix) -> Self {
        match prefix {
            Prefix::P => Self::P,
            Prefix::U => Self::U,
            Prefix::Dt => Self::Dt,
            Prefix::E => Self::E,
        }
    }
}

/// Values already extracted from the element currently being visited.
///
/// Create a fresh cache per element visit; it memoises absent values too.
#[derive(Debug, Default)]
pub struct ExtractionCache {
    values: HashMap<Extractor, Option<String>>,
}

impl ExtractionCache {
    pub fn get_or_extract(
        &mut self,
        kind: Extractor,
        extract: impl FnOnce() -> Option<String>,
    ) -> Option<String> {
        self.values.entry(kind).or_insert_with(extract).clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Element value extraction under a fixed settings snapshot.
///
/// Descendant scans (flattened text, value-class fragments) stay within
/// `budget` levels below the extracted element, so that they never reach
/// deeper than the walk itself.
#[derive(Debug, Clone, Copy)]
pub struct PropertyExtractor<'s> {
    settings: &'s ParserSettings,
    budget: usize,
    legacy: Option<LegacyScope<'s>>,
}

/// Vocabularies that translate property classes inside a legacy object.
#[derive(Debug, Clone, Copy)]
struct LegacyScope<'s> {
    registry: &'s VocabularyRegistry,
    targets: &'s [String],
}

impl<'s> PropertyExtractor<'s> {
    #[must_use]
    pub const fn new(settings: &'s ParserSettings) -> Self {
        Self {
            settings,
            budget: settings.max_depth,
            legacy: None,
        }
    }

    /// Scope descendant scans to an element at `depth` in the walk.
    #[must_use]
    pub const fn at_depth(mut self, depth: usize) -> Self {
        self.budget = self.settings.max_depth.saturating_sub(depth);
        self
    }

    /// The same extractor for an element `levels` below the current one.
    #[must_use]
    pub const fn descend(mut self, levels: usize) -> Self {
        self.budget = self.budget.saturating_sub(levels);
        self
    }

    /// Read property classes through the vocabularies of `targets`; an
    /// empty target list keeps v2 property classes.
    #[must_use]
    pub const fn with_legacy(
        mut self,
        registry: &'s VocabularyRegistry,
        targets: &'s [String],
    ) -> Self {
        self.legacy = if targets.is_empty() {
            None
        } else {
            Some(LegacyScope { registry, targets })
        };
        self
    }

    /// Levels below the extracted element that descendant scans may visit.
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// True when `classes` declare a property in the current scope.
    #[must_use]
    pub fn declares_property(&self, classes: &Classification) -> bool {
        match self.legacy {
            Some(scope) => !scope.registry.translate(scope.targets, &classes.plain).is_empty(),
            None => classes.has_properties(),
        }
    }

    /// Run `kind` against `node`, at most once per cache.
    pub fn extract<N: DomNode>(
        &self,
        kind: Extractor,
        node: &N,
        cache: &mut ExtractionCache,
    ) -> Option<String> {
        cache.get_or_extract(kind, || match kind {
            Extractor::P => self.plain(node),
            Extractor::U => self.url(node),
            Extractor::Dt => self.datetime(node),
            Extractor::E => self.embedded(node),
            Extractor::Rel => self.rel(node),
        })
    }

    /// `p-*`: a machine value, a lone `value-title` child, an `abbr` title,
    /// an `img` alt, or the flattened text.
    pub fn plain<N: DomNode>(&self, node: &N) -> Option<String> {
        if node.is_tag("data") || node.is_tag("meter") {
            if let Some(value) = non_empty(node.attribute("value")) {
                return Some(value);
            }
        }

        if let Some(title) = value_title(node, self.budget) {
            return Some(title);
        }

        if node.is_tag("abbr") {
            if let Some(title) = non_empty(node.attribute("title")) {
                return Some(title);
            }
        }

        if node.is_tag("img") || node.is_tag("area") {
            if let Some(alt) = non_empty(node.attribute("alt")) {
                return Some(alt);
            }
        }

        non_empty(Some(flatten_text(node, self.budget)))
    }

    /// `u-*`: `href` of hyperlinks, `src` of images, `data` of objects,
    /// otherwise the `p-*` value.
    pub fn url<N: DomNode>(&self, node: &N) -> Option<String> {
        let attribute = match node.tag_name().as_deref() {
            Some("a" | "area" | "link") => Some("href"),
            Some("img") => Some("src"),
            Some("object") => Some("data"),
            _ => None,
        };
        let url = attribute
            .and_then(|name| non_empty(node.attribute(name)))
            .or_else(|| self.plain(node))?;

        if self.settings.force_valid_urls && !validate::is_url(&url) {
            tracing::debug!(value = %url, "dropping u-* value that is not a URL");
            return None;
        }
        Some(url)
    }

    /// `dt-*`: `<time datetime>` (or its text), the value-class pattern, or
    /// the `p-*` value.
    pub fn datetime<N: DomNode>(&self, node: &N) -> Option<String> {
        let value = if node.is_tag("time") {
            non_empty(node.attribute("datetime").map(|v| v.trim().to_string()))
                .or_else(|| non_empty(Some(flatten_text(node, self.budget))))
        } else {
            value_class::assemble(node, self).or_else(|| self.plain(node))
        }?;

        if self.settings.force_valid_dates && !validate::is_iso_datetime(&value) {
            tracing::debug!(value = %value, "dropping dt-* value that is not an ISO 8601 date-time");
            return None;
        }
        Some(value)
    }

    /// `e-*`: inner markup, verbatim.
    #[allow(clippy::unused_self)]
    pub fn embedded<N: DomNode>(&self, node: &N) -> Option<String> {
        let html = node.inner_html();
        (!html.trim().is_empty()).then_some(html)
    }

    /// `rel`: the element's hyperlink target.
    #[allow(clippy::unused_self)]
    pub fn rel<N: DomNode>(&self, node: &N) -> Option<String> {
        non_empty(node.attribute("href"))
    }
}

/// The node's own `title` when it is marked `value-title`, else the `title`
/// of its single `value-title` child. Children are only looked at with a
/// budget left.
fn value_title<N: DomNode>(node: &N, budget: usize) -> Option<String> {
    if Classification::of_node(node).value_title {
        return non_empty(node.attribute("title"));
    }
    if budget == 0 {
        return None;
    }
    let mut marked = node
        .element_children()
        .into_iter()
        .filter(|child| Classification::of_node(child).value_title);
    match (marked.next(), marked.next()) {
        (Some(only), None) => non_empty(only.attribute("title")),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
