//! HTML input via ast-grep (tree-sitter-html).
//!
//! tree-sitter produces a concrete syntax tree, not a DOM: whitespace between
//! tags belongs to no node, character references are separate tokens, and
//! tags are nodes of their own. [`HtmlNode`] papers over that so the tree can
//! be walked as a [`mf2_core::DomNode`]:
//! - `element`, `script_element` and `style_element` nodes become elements;
//! - everything between two element (or comment) children, text and
//!   whitespace alike, becomes one text node with references decoded;
//! - comments and doctypes become `Other` nodes.
//!
//! Each node's child list is built on first request and shared by every
//! clone of the node afterwards.

mod entities;
mod helpers;
mod node;

use ast_grep_core::AstGrep;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::{LanguageExt, SupportLang};

pub use entities::{decode_attribute, decode_text};
pub use node::HtmlNode;

pub type HtmlDoc = StrDoc<SupportLang>;

/// A parsed HTML document together with its source text.
pub struct HtmlTree {
    source: String,
    root: AstGrep<HtmlDoc>,
}

impl HtmlTree {
    /// The document node, ready to be handed to a parser.
    #[must_use]
    pub fn document(&self) -> HtmlNode<'_> {
        HtmlNode::document(self.root.root(), &self.source)
    }
}

impl std::fmt::Debug for HtmlTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlTree")
            .field("len", &self.source.len())
            .finish_non_exhaustive()
    }
}

/// Parse HTML source. tree-sitter recovers from any input, so this cannot
/// fail; malformed markup yields a best-effort tree.
#[must_use]
pub fn parse_html(source: &str) -> HtmlTree {
    HtmlTree {
        source: source.to_string(),
        root: SupportLang::Html.ast_grep(source),
    }
}

#[cfg(test)]
mod tests;
