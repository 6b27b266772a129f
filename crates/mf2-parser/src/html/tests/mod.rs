use mf2_core::{DomNode, MicroformatObject, NodeType, PropertyValue, Results, SettingsOverride};

use super::*;
use crate::Parser;

mod dom_view;
mod fixtures;

fn parse_source(source: &str) -> Results {
    Parser::default()
        .parse_html(source)
        .expect("parse should succeed")
}

fn first_element<'r>(node: &HtmlNode<'r>) -> HtmlNode<'r> {
    node.element_children()
        .into_iter()
        .next()
        .expect("node should have an element child")
}

fn literals<'a>(object: &'a MicroformatObject, name: &str) -> Vec<&'a str> {
    object
        .property(name)
        .iter()
        .map(PropertyValue::literal)
        .collect()
}
