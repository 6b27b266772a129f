//! Owned, builder-style element tree.
//!
//! Useful for embedders whose markup already lives in another structure and
//! for tests that want to state a tree without going through an HTML parser.
//!
//! ```
//! use mf2_core::DomNode;
//! use mf2_core::dom::Node;
//!
//! let card = Node::element("p").child(
//!     Node::element("a")
//!         .class("h-card")
//!         .attr("href", "/ben")
//!         .child(Node::text_node("Ben")),
//! );
//! assert_eq!((&card).inner_html(), r#"<a class="h-card" href="/ben">Ben</a>"#);
//! ```

use crate::node::{DomNode, NodeType};

/// Elements serialized without an end tag and never given children.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Document,
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    data: NodeData,
    children: Vec<Node>,
}

impl Node {
    /// An empty document container.
    #[must_use]
    pub const fn document() -> Self {
        Self {
            data: NodeData::Document,
            children: Vec::new(),
        }
    }

    /// An element with the given tag name (stored lower-cased).
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            data: NodeData::Element {
                tag: tag.into().to_ascii_lowercase(),
                attributes: Vec::new(),
            },
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn text_node(content: impl Into<String>) -> Self {
        Self {
            data: NodeData::Text(content.into()),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn comment(content: impl Into<String>) -> Self {
        Self {
            data: NodeData::Comment(content.into()),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value. No-op on non-elements.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let NodeData::Element { attributes, .. } = &mut self.data {
            let name = name.into().to_ascii_lowercase();
            let value = value.into();
            match attributes.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = value,
                None => attributes.push((name, value)),
            }
        }
        self
    }

    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append a child. Text and comment nodes never hold children.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        if matches!(self.data, NodeData::Document | NodeData::Element { .. }) {
            self.children.push(child);
        }
        self
    }

    #[must_use]
    pub fn with_children(self, children: impl IntoIterator<Item = Self>) -> Self {
        children.into_iter().fold(self, Self::child)
    }

    #[must_use]
    pub const fn data(&self) -> &NodeData {
        &self.data
    }

    #[must_use]
    pub fn child_nodes(&self) -> &[Self] {
        &self.children
    }

    fn write_html(&self, out: &mut String) {
        match &self.data {
            NodeData::Document => self.write_children(out),
            NodeData::Text(text) => out.push_str(&escape_text(text)),
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Element { tag, attributes } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                self.write_children(out);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }

    fn write_children(&self, out: &mut String) {
        for child in &self.children {
            child.write_html(out);
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

impl<'a> DomNode for &'a Node {
    fn node_type(&self) -> NodeType {
        match self.data {
            NodeData::Document => NodeType::Document,
            NodeData::Element { .. } => NodeType::Element,
            NodeData::Text(_) => NodeType::Text,
            NodeData::Comment(_) => NodeType::Other,
        }
    }

    fn tag_name(&self) -> Option<String> {
        match &self.data {
            NodeData::Element { tag, .. } => Some(tag.clone()),
            _ => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match &self.data {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(attr, _)| attr.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.clone()),
            _ => None,
        }
    }

    fn children(&self) -> Vec<Self> {
        let node: &'a Node = *self;
        node.children.iter().collect()
    }

    fn text(&self) -> Option<String> {
        match &self.data {
            NodeData::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    fn inner_html(&self) -> String {
        let mut out = String::new();
        self.write_children(&mut out);
        out
    }
}
