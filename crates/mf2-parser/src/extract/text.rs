//! Flattened text of an element subtree.

use mf2_core::{DomNode, NodeType};

/// Depth-first concatenation of descendant text, with `<img>` children
/// replaced by their `alt` text, whitespace runs collapsed to one space and
/// the result trimmed.
///
/// Elements more than `budget` levels below `node` are left out.
#[must_use]
pub fn flatten_text<N: DomNode>(node: &N, budget: usize) -> String {
    let mut raw = String::new();
    let mut stack: Vec<(N, usize)> = levelled(node, 1);
    while let Some((current, level)) = stack.pop() {
        match current.node_type() {
            NodeType::Text => {
                if let Some(text) = current.text() {
                    raw.push_str(&text);
                }
            }
            NodeType::Element if level > budget => {}
            NodeType::Element if current.is_tag("img") => {
                raw.push(' ');
                raw.push_str(&current.attribute("alt").unwrap_or_default());
                raw.push(' ');
            }
            NodeType::Element => stack.extend(levelled(&current, level + 1)),
            NodeType::Document | NodeType::Other => {}
        }
    }
    collapse_whitespace(&raw)
}

/// Children of `node` tagged with `level`, reversed for a pop-order walk.
pub(crate) fn levelled<N: DomNode>(node: &N, level: usize) -> Vec<(N, usize)> {
    node.children()
        .into_iter()
        .rev()
        .map(|child| (child, level))
        .collect()
}

/// Collapse every whitespace run to a single space and trim both ends.
#[must_use]
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the node has child text beyond whitespace.
pub(crate) fn has_direct_text<N: DomNode>(node: &N) -> bool {
    node.children().iter().any(|child| {
        child
            .text()
            .is_some_and(|text| !text.trim().is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf2_core::dom::Node;
    use pretty_assertions::assert_eq;

    #[test]
    fn collapses_whitespace_and_trims() {
        let node = Node::element("p")
            .child(Node::text_node("\n   Ben \t "))
            .child(Node::element("b").child(Node::text_node("  Ward\n")));
        assert_eq!(flatten_text(&&node, 8), "Ben Ward");
    }

    #[test]
    fn substitutes_image_alt_text() {
        let node = Node::element("span")
            .child(Node::text_node("Photo:"))
            .child(Node::element("img").attr("src", "/me.jpg").attr("alt", "Ben"))
            .child(Node::text_node("!"));
        assert_eq!(flatten_text(&&node, 8), "Photo: Ben !");
    }

    #[test]
    fn image_without_alt_contributes_nothing() {
        let node = Node::element("span").child(Node::element("img").attr("src", "/me.jpg"));
        assert_eq!(flatten_text(&&node, 8), "");
    }

    #[test]
    fn comments_are_skipped() {
        let node = Node::element("span")
            .child(Node::comment("hidden"))
            .child(Node::text_node("shown"));
        assert_eq!(flatten_text(&&node, 8), "shown");
    }

    #[test]
    fn elements_past_the_budget_are_left_out() {
        let node = Node::element("div").child(
            Node::element("span")
                .child(Node::text_node("kept "))
                .child(Node::element("b").child(Node::text_node("dropped"))),
        );
        assert_eq!(flatten_text(&&node, 1), "kept");
        assert_eq!(flatten_text(&&node, 2), "kept dropped");
        assert_eq!(flatten_text(&&node, 0), "");
    }

    #[test]
    fn direct_text_detection_ignores_whitespace() {
        let node = Node::element("a")
            .child(Node::text_node("\n  "))
            .child(Node::element("img"));
        assert!(!has_direct_text(&&node));
        let node = Node::element("a").child(Node::text_node("hi"));
        assert!(has_direct_text(&&node));
    }
}
