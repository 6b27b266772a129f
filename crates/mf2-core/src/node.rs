//! The element capability set consumed by the extraction engine.
//!
//! The engine never builds or mutates a tree. Anything that can answer the
//! questions below (tag identity, attribute lookup, ordered children, text
//! content, inner markup) can be walked for microformats.

/// Coarse node classification. Only elements participate in extraction;
/// text nodes contribute to flattened text; everything else is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Document,
    Element,
    Text,
    Other,
}

/// Read-only view of a node in an already-built markup tree.
///
/// Implementations are expected to be cheap handles (`&Node`, a syntax-tree
/// cursor, an `Rc` pointer) since the walker clones them freely.
pub trait DomNode: Clone {
    /// Classification of this node.
    fn node_type(&self) -> NodeType;

    /// Lower-cased tag name for elements, `None` otherwise.
    fn tag_name(&self) -> Option<String>;

    /// Attribute value by (lower-case) name. Boolean attributes yield `Some("")`.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Ordered child nodes (elements, text, and other nodes).
    fn children(&self) -> Vec<Self>;

    /// Character data for text nodes, `None` otherwise.
    fn text(&self) -> Option<String>;

    /// Serialized inner markup, verbatim.
    fn inner_html(&self) -> String;

    fn is_element(&self) -> bool {
        self.node_type() == NodeType::Element
    }

    /// True when the element's tag name equals `tag` (lower-case).
    fn is_tag(&self, tag: &str) -> bool {
        self.tag_name().is_some_and(|name| name == tag)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Raw `class` attribute, empty when absent.
    fn class_attr(&self) -> String {
        self.attribute("class").unwrap_or_default()
    }

    /// Whitespace-separated class tokens in document order.
    fn class_names(&self) -> Vec<String> {
        self.class_attr()
            .split_whitespace()
            .map(String::from)
            .collect()
    }

    /// Child nodes that are elements.
    fn element_children(&self) -> Vec<Self> {
        self.children()
            .into_iter()
            .filter(DomNode::is_element)
            .collect()
    }

    /// Concatenated character data of every descendant text node.
    fn text_content(&self) -> String {
        if let Some(text) = self.text() {
            return text;
        }
        let mut out = String::new();
        for child in self.children() {
            out.push_str(&child.text_content());
        }
        out
    }
}
