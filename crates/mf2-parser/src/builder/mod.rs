//! The recursive tree walk that creates and populates objects.
//!
//! Each element is visited once. An element whose classes match the object
//! grammar becomes the root of a new object, built in full by a nested walk
//! over its children; the enclosing walk does not descend into that subtree
//! again. Property, relationship and pubdate markers on any element apply to
//! exactly one receiver:
//! - the enclosing object, for ordinary elements and for object roots that
//!   serve as one of its property values;
//! - the new object itself, for object roots that are standalone;
//! - the document-level rels, for elements outside every object (rels only).

use std::sync::Arc;

use mf2_core::{DomNode, MicroformatObject, NodeType, ParserSettings, PropertyValue, Results};

use crate::error::ParserError;
use crate::extract::text::has_direct_text;
use crate::extract::{ExtractionCache, Extractor, PropertyExtractor};
use crate::grammar::{Classification, Prefix, PropertyClass};
use crate::index::ResultIndex;
use crate::vocabulary::VocabularyRegistry;

/// An object under construction.
#[derive(Debug)]
struct ObjectFrame {
    object: MicroformatObject,
    /// Target types when the object was created from a legacy root; the
    /// vocabularies of these types translate property classes inside it.
    legacy: Vec<String>,
}

impl ObjectFrame {
    fn new(types: Vec<String>, legacy: bool) -> Self {
        let object = MicroformatObject::new(types);
        let legacy = if legacy { object.types.clone() } else { Vec::new() };
        Self { object, legacy }
    }
}

/// One parse: settings, vocabularies, and the accumulating index.
pub struct ObjectBuilder<'p> {
    settings: &'p ParserSettings,
    registry: &'p VocabularyRegistry,
    index: ResultIndex,
}

impl<'p> ObjectBuilder<'p> {
    #[must_use]
    pub fn new(settings: &'p ParserSettings, registry: &'p VocabularyRegistry) -> Self {
        Self {
            settings,
            registry,
            index: ResultIndex::new(),
        }
    }

    /// Walk `root` and return everything found.
    ///
    /// A document root is walked as a list of siblings; an element root is
    /// walked as a single starting node.
    ///
    /// # Errors
    /// Returns `ParserError::InvalidInput` when the root is neither a
    /// document nor an element, or when an element reports no tag name.
    pub fn run<N: DomNode>(mut self, root: &N) -> Result<Results, ParserError> {
        match root.node_type() {
            NodeType::Document => {
                for child in root.children() {
                    self.visit(&child, None, 1)?;
                }
            }
            NodeType::Element => self.visit(root, None, 0)?,
            other => {
                return Err(ParserError::InvalidInput(format!(
                    "root must be a document or an element, got {other:?}"
                )));
            }
        }
        tracing::debug!(objects = self.index.len(), "parse complete");
        Ok(self.index.finish())
    }

    fn visit<N: DomNode>(
        &mut self,
        node: &N,
        mut current: Option<&mut ObjectFrame>,
        depth: usize,
    ) -> Result<(), ParserError> {
        if !node.is_element() {
            return Ok(());
        }
        if node.tag_name().is_none_or(|tag| tag.is_empty()) {
            return Err(ParserError::InvalidInput(
                "element without a tag name".to_string(),
            ));
        }
        if depth > self.settings.max_depth {
            tracing::warn!(
                depth,
                max_depth = self.settings.max_depth,
                "subtree exceeds maximum depth; skipping"
            );
            return Ok(());
        }

        let classes = Classification::of_node(node);
        let outer_legacy = current.as_deref().map_or(&[][..], |frame| &frame.legacy[..]);
        let declared = self.declared_properties(&classes, outer_legacy);

        let Some(frame) = self.object_root(&classes) else {
            match current.as_deref_mut() {
                Some(frame) => self.apply(node, frame, &declared, None, depth),
                None => self.collect_document_rels(node),
            }
            for child in node.children() {
                self.visit(&child, current.as_deref_mut(), depth + 1)?;
            }
            return Ok(());
        };

        let serving = current.is_some() && !declared.is_empty();
        let object = self.build_object(node, frame, serving, depth)?;
        if serving {
            if let Some(parent) = current {
                self.apply(node, parent, &declared, Some(&object), depth);
            }
        }
        Ok(())
    }

    /// Object types for `classes`: the `h-*` tokens, or, in legacy mode
    /// and without any, the targets of recognised legacy roots.
    fn object_root(&self, classes: &Classification) -> Option<ObjectFrame> {
        if classes.is_object() {
            return Some(ObjectFrame::new(classes.objects.clone(), false));
        }
        if self.settings.parse_v1_microformats {
            let types = self.registry.root_types(&classes.plain);
            if !types.is_empty() {
                return Some(ObjectFrame::new(types, true));
            }
        }
        None
    }

    /// Property declarations on an element, as seen from an object whose
    /// legacy targets are `legacy`.
    fn declared_properties(
        &self,
        classes: &Classification,
        legacy: &[String],
    ) -> Vec<PropertyClass> {
        if legacy.is_empty() {
            classes.properties.clone()
        } else {
            self.registry.translate(legacy, &classes.plain)
        }
    }

    /// Build the object rooted at `node`, index it, and return it.
    fn build_object<N: DomNode>(
        &mut self,
        node: &N,
        mut frame: ObjectFrame,
        serving: bool,
        depth: usize,
    ) -> Result<Arc<MicroformatObject>, ParserError> {
        let slot = self.index.reserve();

        if !serving {
            let classes = Classification::of_node(node);
            let declared = self.declared_properties(&classes, &frame.legacy);
            self.apply(node, &mut frame, &declared, None, depth);
        }
        for child in node.children() {
            self.visit(&child, Some(&mut frame), depth + 1)?;
        }
        if frame.object.properties.is_empty() && self.settings.parse_singleton_root_nodes {
            self.infer_singleton(node, &mut frame.object, depth);
        }

        tracing::debug!(
            types = ?frame.object.types,
            properties = frame.object.properties.len(),
            legacy = !frame.legacy.is_empty(),
            standalone = !serving,
            "built object"
        );

        let object = Arc::new(frame.object);
        let id = node.attribute("id").filter(|id| !id.is_empty());
        self.index.fill(slot, Arc::clone(&object), !serving, id);
        Ok(object)
    }

    /// Value extraction for an element at `depth`, reading property
    /// classes through the `legacy` targets of the receiving object.
    fn extractor<'a>(&'a self, legacy: &'a [String], depth: usize) -> PropertyExtractor<'a> {
        PropertyExtractor::new(self.settings)
            .with_legacy(self.registry, legacy)
            .at_depth(depth)
    }

    /// `name`, `url` and `photo` for an object that declared nothing.
    fn infer_singleton<N: DomNode>(
        &self,
        node: &N,
        object: &mut MicroformatObject,
        depth: usize,
    ) {
        let extractor = self.extractor(&[], depth);
        if let Some(name) = extractor.plain(node) {
            object.push_property("name", PropertyValue::Literal(name));
        }
        if node.is_tag("a") {
            if let Some(url) = extractor.url(node) {
                object.push_property("url", PropertyValue::Literal(url));
            }
        }
        if extractor.budget() == 0 {
            return;
        }
        if let [only] = node.element_children().as_slice() {
            if (only.is_tag("img") || only.is_tag("object")) && !has_direct_text(node) {
                if let Some(photo) = extractor.descend(1).url(only) {
                    object.push_property("photo", PropertyValue::Literal(photo));
                }
            }
        }
    }

    /// Assign the markers of an element at `depth` to `frame`. `embedded` is
    /// the object rooted at the same element, if any.
    fn apply<N: DomNode>(
        &self,
        node: &N,
        frame: &mut ObjectFrame,
        declared: &[PropertyClass],
        embedded: Option<&Arc<MicroformatObject>>,
        depth: usize,
    ) {
        let extractor = self.extractor(&frame.legacy, depth);
        let object = &mut frame.object;
        let mut cache = ExtractionCache::default();
        assign_properties(node, object, &extractor, declared, embedded, &mut cache);
        if self.settings.parse_rel_attr {
            assign_relationships(node, object, &extractor, &mut cache);
        }
        if self.settings.parse_pub_date_attr {
            assign_pubdate(node, object, &extractor, &mut cache);
        }
    }

    fn collect_document_rels<N: DomNode>(&mut self, node: &N) {
        if !self.settings.parse_rel_attr {
            return;
        }
        let tokens = rel_tokens(node);
        if tokens.is_empty() {
            return;
        }
        if let Some(target) = PropertyExtractor::new(self.settings).rel(node) {
            for token in &tokens {
                self.index.push_rel(token, &target);
            }
        }
    }
}

fn assign_properties<N: DomNode>(
    node: &N,
    object: &mut MicroformatObject,
    extractor: &PropertyExtractor<'_>,
    declared: &[PropertyClass],
    embedded: Option<&Arc<MicroformatObject>>,
    cache: &mut ExtractionCache,
) {
    for property in declared {
        let kind = Extractor::from(property.prefix);
        let Some(literal) = extractor.extract(kind, node, cache) else {
            continue;
        };
        tracing::trace!(property = %property, value = %literal, "assign property");
        let value = match (property.prefix, embedded) {
            (Prefix::P, Some(embedded)) => PropertyValue::Embedded {
                object: Arc::clone(embedded),
                value: literal,
            },
            _ => PropertyValue::Literal(literal),
        };
        object.push_property(property.name.clone(), value);
    }
}

/// Relationship tokens fill gaps only: a token already assigned as a
/// property name is skipped.
fn assign_relationships<N: DomNode>(
    node: &N,
    object: &mut MicroformatObject,
    extractor: &PropertyExtractor<'_>,
    cache: &mut ExtractionCache,
) {
    for token in rel_tokens(node) {
        if object.has_property(&token) {
            continue;
        }
        if let Some(target) = extractor.extract(Extractor::Rel, node, cache) {
            tracing::trace!(rel = %token, target = %target, "assign relationship");
            object.push_relationship(token, target);
        }
    }
}

/// `<time pubdate>` stands in for `dt-published` when none was assigned.
fn assign_pubdate<N: DomNode>(
    node: &N,
    object: &mut MicroformatObject,
    extractor: &PropertyExtractor<'_>,
    cache: &mut ExtractionCache,
) {
    if !node.is_tag("time") || !node.has_attribute("pubdate") || object.has_property("published")
    {
        return;
    }
    if let Some(published) = extractor.extract(Extractor::Dt, node, cache) {
        object.push_property("published", PropertyValue::Literal(published));
    }
}

/// Distinct `rel` tokens in attribute order.
fn rel_tokens<N: DomNode>(node: &N) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in node.attribute("rel").unwrap_or_default().split_whitespace() {
        if !tokens.iter().any(|seen| seen == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

#[cfg(test)]
mod tests;
