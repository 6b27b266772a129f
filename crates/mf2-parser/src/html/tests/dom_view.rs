use std::time::{Duration, Instant};

use mf2_core::ParserSettings;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn document_children_include_text_gaps_and_comments() {
    let tree = parse_html("<!-- c --><p>a</p>\n<p>b</p>");
    let kinds: Vec<NodeType> = tree
        .document()
        .children()
        .iter()
        .map(DomNode::node_type)
        .collect();
    assert_eq!(
        kinds,
        vec![
            NodeType::Other,
            NodeType::Element,
            NodeType::Text,
            NodeType::Element,
        ]
    );
}

#[test]
fn element_exposes_lowercase_tag_and_attributes() {
    let tree = parse_html(r#"<A HREF="/ben" Class="h-card" data-x=raw hidden>Ben</A>"#);
    let link = first_element(&tree.document());
    assert_eq!(link.tag_name().as_deref(), Some("a"));
    assert_eq!(link.attribute("href").as_deref(), Some("/ben"));
    assert_eq!(link.attribute("class").as_deref(), Some("h-card"));
    assert_eq!(link.attribute("data-x").as_deref(), Some("raw"));
    assert_eq!(link.attribute("hidden").as_deref(), Some(""));
    assert_eq!(link.attribute("title"), None);
}

#[test]
fn text_and_attribute_references_are_decoded() {
    let tree = parse_html(r#"<span title="Ben &amp; Co">Caf&eacute; &lt;3 &#233;</span>"#);
    let span = first_element(&tree.document());
    assert_eq!(span.attribute("title").as_deref(), Some("Ben & Co"));
    assert_eq!(span.text_content(), "Café <3 é");
}

#[test]
fn inner_html_is_verbatim() {
    let tree = parse_html("<div><p>Hello &amp; <b>bye</b></p></div>");
    let div = first_element(&tree.document());
    assert_eq!(div.inner_html(), "<p>Hello &amp; <b>bye</b></p>");
}

#[test]
fn void_elements_have_no_children() {
    let tree = parse_html(r#"<span><img src="/me.jpg" alt="Ben"><br/>text</span>"#);
    let span = first_element(&tree.document());
    let children = span.children();
    assert_eq!(children.len(), 3);
    assert!(children[0].is_tag("img"));
    assert!(children[0].children().is_empty());
    assert!(children[1].is_tag("br"));
    assert_eq!(children[2].text().as_deref(), Some("text"));
}

#[test]
fn script_text_is_not_decoded() {
    let tree = parse_html("<script>if (a &amp;&amp; b) {}</script>");
    let script = first_element(&tree.document());
    assert_eq!(script.text_content(), "if (a &amp;&amp; b) {}");
}

#[test]
fn empty_source_is_an_empty_document() {
    let tree = parse_html("");
    assert_eq!(tree.document().node_type(), NodeType::Document);
    assert!(tree.document().element_children().is_empty());
    assert!(parse_source("").is_empty());
}

#[test]
fn named_references_reach_property_values() {
    let results = parse_source(
        r#"<div class="h-card"><span class="p-name">Ren&eacute;e M&uuml;ller &rarr; caf&eacute;</span>
<a class="u-url" href="/people?id=7&copy=2">profile</a></div>"#,
    );
    let card = &results.standalone_objects()[0];
    assert_eq!(literals(card, "name"), vec!["Renée Müller → café"]);
    assert_eq!(literals(card, "url"), vec!["/people?id=7&copy=2"]);
}

#[test]
fn children_are_built_once_and_shared_between_clones() {
    let tree = parse_html("<ul><li>a</li><li>b</li></ul>");
    let list = first_element(&tree.document());
    let copy = list.clone();
    let from_list = list.element_children();
    let from_copy = copy.element_children();
    assert_eq!(from_list.len(), 2);
    let (HtmlNode::Element(a), HtmlNode::Element(b)) = (&from_list[1], &from_copy[1]) else {
        panic!("expected element children");
    };
    assert!(std::rc::Rc::ptr_eq(a, b));
    assert_eq!(from_copy[1].text_content(), "b");
}

#[test]
fn deeply_nested_cards_parse_in_bounded_time() {
    let levels = 20_000;
    let source = format!(
        "{}Ben{}",
        r#"<div class="h-card">"#.repeat(levels),
        "</div>".repeat(levels)
    );
    let started = Instant::now();
    let results = parse_source(&source);
    let elapsed = started.elapsed();
    assert_eq!(
        results.all_objects().len(),
        ParserSettings::default().max_depth
    );
    assert!(
        elapsed < Duration::from_secs(10),
        "deep document took {elapsed:?}"
    );
}
