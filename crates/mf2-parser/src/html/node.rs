use std::cell::OnceCell;
use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use ast_grep_core::Node;
use mf2_core::{DomNode, NodeType};

use super::HtmlDoc;
use super::entities::decode_text;
use super::helpers::{
    HtmlAttr, attr_value, extract_tag_info, is_element_kind, is_other_kind, is_tag_kind,
    opening_tag,
};

/// Shared state of a node that can hold children: the document or an
/// element.
pub struct Branch<'r> {
    node: Node<'r, HtmlDoc>,
    source: &'r str,
    /// Tag name and attributes; `None` for the document.
    tag: Option<(String, Vec<HtmlAttr>)>,
    children: OnceCell<Vec<HtmlNode<'r>>>,
}

impl<'r> Branch<'r> {
    fn new(
        node: Node<'r, HtmlDoc>,
        source: &'r str,
        tag: Option<(String, Vec<HtmlAttr>)>,
    ) -> Rc<Self> {
        Rc::new(Self {
            node,
            source,
            tag,
            children: OnceCell::new(),
        })
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_ref().map(|(tag, _)| tag.as_str())
    }

    /// Byte range of the node's content, between its tags.
    fn content_range(&self) -> Option<Range<usize>> {
        if self.tag.is_none() {
            return Some(0..self.source.len());
        }
        let open = opening_tag(&self.node)?;
        if open.kind().as_ref() == "self_closing_tag" {
            return None;
        }
        let end = self
            .node
            .children()
            .find(|child| child.kind().as_ref() == "end_tag")
            .map_or_else(|| self.node.range().end, |close| close.range().start);
        let start = open.range().end;
        (start <= end).then_some(start..end)
    }

    /// Raw text inside `script` and `style` is not markup.
    fn is_raw_text(&self) -> bool {
        matches!(self.tag(), Some("script" | "style"))
    }

    fn build_children(&self) -> Vec<HtmlNode<'r>> {
        let Some(content) = self.content_range() else {
            return Vec::new();
        };
        let raw = self.is_raw_text();
        let source = self.source;

        let mut children = Vec::new();
        let mut cursor = content.start;
        let flush = |children: &mut Vec<HtmlNode<'r>>, upto: usize, cursor: usize| {
            if let Some(gap) = source.get(cursor..upto).filter(|gap| !gap.is_empty()) {
                let text: Rc<str> = if raw {
                    gap.into()
                } else {
                    decode_text(gap).into()
                };
                children.push(HtmlNode::Text(text));
            }
        };

        for child in content_nodes(&self.node) {
            let kind = child.kind();
            let structural = is_element_kind(&kind) || is_other_kind(&kind);
            let range = child.range();
            if !structural || range.start < cursor || range.end > content.end {
                continue;
            }
            flush(&mut children, range.start, cursor);
            cursor = range.end;
            if is_element_kind(&kind) {
                children.push(HtmlNode::element(child, source));
            } else {
                children.push(HtmlNode::Other);
            }
        }
        flush(&mut children, content.end, cursor);
        children
    }
}

/// A [`DomNode`] view over a tree-sitter-html syntax tree.
///
/// Clones share the underlying node, so handing copies to the walker and
/// the extractors is cheap.
#[derive(Clone)]
pub enum HtmlNode<'r> {
    Document(Rc<Branch<'r>>),
    Element(Rc<Branch<'r>>),
    /// Character data between two structural nodes, references decoded.
    Text(Rc<str>),
    /// Comment or doctype.
    Other,
}

impl<'r> HtmlNode<'r> {
    pub(super) fn document(node: Node<'r, HtmlDoc>, source: &'r str) -> Self {
        Self::Document(Branch::new(node, source, None))
    }

    /// Elements whose opening tag did not survive error recovery are
    /// reported as `Other`.
    fn element(node: Node<'r, HtmlDoc>, source: &'r str) -> Self {
        match extract_tag_info(&node) {
            Some(info) if !info.0.is_empty() => {
                Self::Element(Branch::new(node, source, Some(info)))
            }
            _ => Self::Other,
        }
    }

    const fn branch(&self) -> Option<&Rc<Branch<'r>>> {
        match self {
            Self::Document(branch) | Self::Element(branch) => Some(branch),
            Self::Text(_) | Self::Other => None,
        }
    }
}

/// Syntax children that stand for content, with recovery (`ERROR`) nodes
/// expanded in place.
fn content_nodes<'r>(node: &Node<'r, HtmlDoc>) -> Vec<Node<'r, HtmlDoc>> {
    let mut out = Vec::new();
    let mut stack: Vec<Node<'r, HtmlDoc>> = node.children().collect();
    stack.reverse();
    while let Some(child) = stack.pop() {
        let kind = child.kind();
        if kind.as_ref() == "ERROR" {
            let mut nested: Vec<_> = child.children().collect();
            nested.reverse();
            stack.extend(nested);
        } else if !is_tag_kind(&kind) {
            out.push(child);
        }
    }
    out
}

impl DomNode for HtmlNode<'_> {
    fn node_type(&self) -> NodeType {
        match self {
            Self::Document(_) => NodeType::Document,
            Self::Element(_) => NodeType::Element,
            Self::Text(_) => NodeType::Text,
            Self::Other => NodeType::Other,
        }
    }

    fn tag_name(&self) -> Option<String> {
        match self {
            Self::Element(branch) => branch.tag().map(String::from),
            _ => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match self {
            Self::Element(branch) => branch
                .tag
                .as_ref()
                .and_then(|(_, attrs)| attr_value(attrs, name)),
            _ => None,
        }
    }

    fn children(&self) -> Vec<Self> {
        self.branch().map_or_else(Vec::new, |branch| {
            branch.children.get_or_init(|| branch.build_children()).clone()
        })
    }

    fn text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.to_string()),
            _ => None,
        }
    }

    fn inner_html(&self) -> String {
        self.branch()
            .and_then(|branch| {
                let range = branch.content_range()?;
                branch.source.get(range)
            })
            .unwrap_or_default()
            .to_string()
    }
}

impl fmt::Debug for HtmlNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document(branch) => f
                .debug_struct("Document")
                .field("range", &branch.node.range())
                .finish(),
            Self::Element(branch) => f
                .debug_struct("Element")
                .field("tag", &branch.tag())
                .field("range", &branch.node.range())
                .finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Other => f.write_str("Other"),
        }
    }
}
