use ast_grep_core::Node;

use super::HtmlDoc;
use super::entities::decode_attribute;

/// An HTML attribute: `(name, value)`. Valueless attributes carry `""`.
pub(super) type HtmlAttr = (String, String);

/// Element kinds tree-sitter-html produces.
pub(super) fn is_element_kind(kind: &str) -> bool {
    matches!(kind, "element" | "script_element" | "style_element")
}

/// Tag tokens that never contribute content.
pub(super) fn is_tag_kind(kind: &str) -> bool {
    matches!(
        kind,
        "start_tag" | "end_tag" | "self_closing_tag" | "erroneous_end_tag"
    )
}

/// Nodes that are neither elements nor character data.
pub(super) fn is_other_kind(kind: &str) -> bool {
    matches!(kind, "comment" | "doctype")
}

/// The `start_tag` or `self_closing_tag` child of an element.
pub(super) fn opening_tag<'r>(node: &Node<'r, HtmlDoc>) -> Option<Node<'r, HtmlDoc>> {
    node.children().find(|child| {
        matches!(
            child.kind().as_ref(),
            "start_tag" | "self_closing_tag"
        )
    })
}

/// Lower-cased tag name and decoded attributes from an element's opening tag.
pub(super) fn extract_tag_info(node: &Node<'_, HtmlDoc>) -> Option<(String, Vec<HtmlAttr>)> {
    let tag = opening_tag(node)?;
    let tag_name = tag
        .children()
        .find(|c| c.kind().as_ref() == "tag_name")?
        .text()
        .to_ascii_lowercase();
    Some((tag_name, extract_attrs_from_tag(&tag)))
}

/// Extract all attributes from a tag node. Quoted and unquoted values are
/// both accepted; names are lower-cased.
fn extract_attrs_from_tag(tag_node: &Node<'_, HtmlDoc>) -> Vec<HtmlAttr> {
    tag_node
        .children()
        .filter(|c| c.kind().as_ref() == "attribute")
        .filter_map(|attr| {
            let name = attr
                .children()
                .find(|c| c.kind().as_ref() == "attribute_name")?;
            let value = attr
                .children()
                .find_map(|c| match c.kind().as_ref() {
                    "attribute_value" => Some(c.text().to_string()),
                    "quoted_attribute_value" => Some(
                        c.children()
                            .find(|v| v.kind().as_ref() == "attribute_value")
                            .map(|v| v.text().to_string())
                            .unwrap_or_default(),
                    ),
                    _ => None,
                })
                .unwrap_or_default();
            Some((
                name.text().to_ascii_lowercase(),
                decode_attribute(&value).into_owned(),
            ))
        })
        .collect()
}

/// First value of `name`, matching case-insensitively.
pub(super) fn attr_value(attrs: &[HtmlAttr], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.clone())
}
