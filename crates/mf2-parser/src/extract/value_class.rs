//! Value-class pattern date-time assembly.
//!
//! Descendants marked `value` (or `value-title`) each contribute one literal
//! fragment. Fragments are sorted into date, time and timezone; the first of
//! each kind wins and the rest are discarded. A timezone is only kept when a
//! time is present.

use mf2_core::DomNode;

use super::PropertyExtractor;
use super::validate::{is_date_fragment, is_time_fragment, is_timezone_fragment};
use crate::grammar::Classification;

/// Literal fragments of every `value` / `value-title` descendant of `root`,
/// in document order.
///
/// The scan does not descend past a node that declares a property in the
/// extractor's scope, nor into a fragment node, nor beyond the extractor's
/// depth budget.
pub fn value_fragments<N: DomNode>(root: &N, extractor: &PropertyExtractor<'_>) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut stack = levelled_elements(root, 1);
    while let Some((node, level)) = stack.pop() {
        if level > extractor.budget() {
            continue;
        }
        let classes = Classification::of_node(&node);
        if classes.value_title {
            if let Some(title) = node.attribute("title") {
                fragments.push(title);
            }
            continue;
        }
        if classes.value {
            if let Some(text) = extractor.descend(level).plain(&node) {
                fragments.push(text);
            }
            continue;
        }
        if extractor.declares_property(&classes) {
            continue;
        }
        stack.extend(levelled_elements(&node, level + 1));
    }
    fragments
}

fn levelled_elements<N: DomNode>(node: &N, level: usize) -> Vec<(N, usize)> {
    node.element_children()
        .into_iter()
        .rev()
        .map(|child| (child, level))
        .collect()
}

/// Join fragments into `date[Ttime[zone]]`, or `None` without a date.
#[must_use]
pub fn assemble_datetime<S: AsRef<str>>(fragments: &[S]) -> Option<String> {
    let mut date: Option<&str> = None;
    let mut time: Option<&str> = None;
    let mut zone: Option<&str> = None;

    for fragment in fragments {
        let fragment = fragment.as_ref().trim();
        if is_date_fragment(fragment) {
            date = date.or(Some(fragment));
        } else if is_time_fragment(fragment) {
            time = time.or(Some(fragment));
        } else if is_timezone_fragment(fragment) {
            zone = zone.or(Some(fragment));
        }
    }

    let mut stamp = date?.to_string();
    if let Some(time) = time {
        stamp.push('T');
        stamp.push_str(time);
        if let Some(zone) = zone {
            stamp.push_str(zone);
        }
    }
    Some(stamp)
}

/// Collect and assemble in one step.
pub fn assemble<N: DomNode>(root: &N, extractor: &PropertyExtractor<'_>) -> Option<String> {
    assemble_datetime(&value_fragments(root, extractor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf2_core::ParserSettings;
    use mf2_core::dom::Node;
    use pretty_assertions::assert_eq;

    use crate::vocabulary::VocabularyRegistry;

    fn value(text: &str) -> Node {
        Node::element("span")
            .class("value")
            .child(Node::text_node(text))
    }

    #[test]
    fn assembles_date_and_time() {
        let settings = ParserSettings::default();
        let extractor = PropertyExtractor::new(&settings);
        let node = Node::element("span")
            .class("dt-published")
            .child(value("2013-06-01"))
            .child(Node::text_node(" at "))
            .child(value("14:30"));
        assert_eq!(
            assemble(&&node, &extractor).as_deref(),
            Some("2013-06-01T14:30")
        );
    }

    #[test]
    fn first_fragment_of_each_kind_wins() {
        assert_eq!(
            assemble_datetime(&["2013-06-01", "2014-01-01", "14:30", "09:00", "Z", "+01:00"])
                .as_deref(),
            Some("2013-06-01T14:30Z")
        );
    }

    #[test]
    fn timezone_without_time_is_dropped() {
        assert_eq!(
            assemble_datetime(&["2013-06-01", "-08:00"]).as_deref(),
            Some("2013-06-01")
        );
    }

    #[test]
    fn no_date_yields_none() {
        assert_eq!(assemble_datetime(&["14:30", "Z"]), None);
        assert_eq!(assemble_datetime::<&str>(&[]), None);
    }

    #[test]
    fn unrecognised_fragments_are_ignored() {
        assert_eq!(
            assemble_datetime(&["at", "2013-06-01", "noon"]).as_deref(),
            Some("2013-06-01")
        );
    }

    #[test]
    fn value_title_supplies_fragment() {
        let settings = ParserSettings::default();
        let extractor = PropertyExtractor::new(&settings);
        let node = Node::element("span")
            .child(
                Node::element("span")
                    .class("value-title")
                    .attr("title", "2013-06-01")
                    .child(Node::text_node("June 1st")),
            )
            .child(value("14:30"));
        assert_eq!(
            value_fragments(&&node, &extractor),
            vec!["2013-06-01".to_string(), "14:30".to_string()]
        );
    }

    #[test]
    fn scan_stops_at_nested_properties() {
        let settings = ParserSettings::default();
        let extractor = PropertyExtractor::new(&settings);
        let node = Node::element("div")
            .child(value("2013-06-01"))
            .child(
                Node::element("span")
                    .class("dt-end")
                    .child(value("2013-06-05")),
            )
            .child(Node::element("span").child(value("10:00")));
        assert_eq!(
            value_fragments(&&node, &extractor),
            vec!["2013-06-01".to_string(), "10:00".to_string()]
        );
    }

    #[test]
    fn legacy_scan_stops_at_translated_properties() {
        let settings = ParserSettings::default();
        let registry = VocabularyRegistry::builtin();
        let targets = vec!["h-event".to_string()];
        let extractor = PropertyExtractor::new(&settings).with_legacy(&registry, &targets);
        let node = Node::element("span")
            .child(value("2013-06-01"))
            .child(Node::element("span").class("dtend").child(value("2013-06-05")))
            .child(Node::element("span").class("dt-end").child(value("10:00")));
        assert_eq!(
            value_fragments(&&node, &extractor),
            vec!["2013-06-01".to_string(), "10:00".to_string()]
        );
    }

    #[test]
    fn scan_stays_within_depth_budget() {
        let settings = ParserSettings::default();
        let extractor = PropertyExtractor::new(&settings).at_depth(settings.max_depth - 1);
        let node = Node::element("span")
            .child(value("2013-06-01"))
            .child(Node::element("span").child(value("10:00")));
        assert_eq!(extractor.budget(), 1);
        assert_eq!(value_fragments(&&node, &extractor), vec!["2013-06-01".to_string()]);
    }
}
