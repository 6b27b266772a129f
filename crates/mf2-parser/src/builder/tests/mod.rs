use mf2_core::dom::Node;
use mf2_core::{MicroformatObject, ParserSettings, Results};

use super::*;


fn parse_with(root: &Node, settings: &ParserSettings) -> Results {
    let registry = VocabularyRegistry::builtin();
    ObjectBuilder::new(settings, &registry)
        .run(&root)
        .expect("parse should succeed")
}

fn parse(root: &Node) -> Results {
    parse_with(root, &ParserSettings::default())
}

fn only_object(results: &Results) -> &MicroformatObject {
    let items = results.standalone_objects();
    assert_eq!(items.len(), 1, "expected exactly one standalone object");
    &items[0]
}

fn literals<'a>(object: &'a MicroformatObject, name: &str) -> Vec<&'a str> {
    object
        .property(name)
        .iter()
        .map(PropertyValue::literal)
        .collect()
}

fn text(content: &str) -> Node {
    Node::text_node(content)
}

fn span(class: &str, content: &str) -> Node {
    Node::element("span").class(class).child(text(content))
}
