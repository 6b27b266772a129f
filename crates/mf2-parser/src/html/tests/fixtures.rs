use pretty_assertions::assert_eq;

use super::*;

const HCARD: &str = include_str!("../../../tests/fixtures/hcard.html");
const HENTRY: &str = include_str!("../../../tests/fixtures/hentry.html");
const LEGACY: &str = include_str!("../../../tests/fixtures/legacy.html");

#[test]
fn hcard_profile() {
    let results = parse_source(HCARD);
    assert_eq!(results.standalone_objects().len(), 1);
    assert_eq!(results.all_objects().len(), 3);

    let card = results.object_by_id("ben").expect("card with id");
    assert_eq!(card.types, vec!["h-card"]);
    assert_eq!(literals(card, "name"), vec!["Ben Ward"]);
    assert_eq!(literals(card, "url"), vec!["https://ben.example/"]);
    assert_eq!(literals(card, "photo"), vec!["/images/ben.jpg"]);
    assert_eq!(literals(card, "job-title"), vec!["Engineer"]);
    assert_eq!(literals(card, "note"), vec!["Writes about the web."]);

    let org = card.property("org")[0].object().expect("embedded org");
    assert_eq!(literals(org, "name"), vec!["Acme & Sons"]);
    assert_eq!(card.property("org")[0].literal(), "Acme & Sons");

    let adr = card.property("adr")[0].object().expect("embedded adr");
    assert_eq!(adr.types, vec!["h-adr"]);
    assert_eq!(literals(adr, "locality"), vec!["San Francisco"]);
    assert_eq!(literals(adr, "region"), vec!["California"]);

    assert_eq!(
        card.relationships.get("me"),
        Some(&vec!["https://twitter.com/benward".to_string()])
    );
    assert_eq!(
        results.rels().get("me"),
        Some(&vec!["https://github.com/benward".to_string()])
    );
    assert_eq!(
        results.rels().get("stylesheet"),
        Some(&vec!["/style.css".to_string()])
    );
}

#[test]
fn hentry_feed() {
    let results = parse_source(HENTRY);
    let types: Vec<&str> = results
        .all_objects()
        .iter()
        .map(|o| o.types[0].as_str())
        .collect();
    assert_eq!(types, vec!["h-feed", "h-entry", "h-card", "h-entry"]);

    let entries = results.objects_by_microformat("h-entry", false);
    assert_eq!(entries.len(), 2);

    let launch = results.object_by_id("launch").expect("entry with id");
    assert_eq!(literals(launch, "name"), vec!["Launch day"]);
    assert_eq!(literals(launch, "published"), vec!["2013-06-01T14:30:00-0800"]);
    assert_eq!(literals(launch, "updated"), vec!["2013-06-02T09:15-08:00"]);
    assert_eq!(
        literals(launch, "content"),
        vec!["<p>Shipped <strong>it</strong>.</p>"]
    );
    assert_eq!(literals(launch, "category"), vec!["release"]);
    assert_eq!(
        launch.relationships.get("tag"),
        Some(&vec!["/tags/release".to_string()])
    );

    let author = launch.property("author")[0].object().expect("embedded author");
    assert_eq!(literals(author, "name"), vec!["Ben Ward"]);
    assert_eq!(literals(author, "url"), vec!["/ben"]);

    let follow_up = entries[1];
    assert_eq!(literals(follow_up, "published"), vec!["2013-06-03"]);
    assert_eq!(literals(follow_up, "url"), vec!["not a url"]);
}

#[test]
fn hentry_feed_with_url_validation() {
    let parser = Parser::default().with_overrides(&SettingsOverride {
        force_valid_urls: Some(true),
        ..SettingsOverride::default()
    });
    let results = parser.parse_html(HENTRY).expect("parse should succeed");
    let entries = results.objects_by_microformat("h-entry", false);
    assert!(!entries[1].has_property("url"));
}

#[test]
fn legacy_markup_requires_v1_parsing() {
    assert!(parse_source(LEGACY).all_objects().is_empty());

    let parser = Parser::default().with_overrides(&SettingsOverride {
        parse_v1_microformats: Some(true),
        ..SettingsOverride::default()
    });
    let results = parser.parse_html(LEGACY).expect("parse should succeed");

    let entries = results.objects_by_microformat("h-entry", false);
    let entry = entries[0];
    assert_eq!(literals(entry, "name"), vec!["Old school"]);
    assert_eq!(literals(entry, "published"), vec!["2008-04-12T09:00"]);
    assert_eq!(
        literals(entry, "content"),
        vec!["<p>Posted with <b>hAtom</b>.</p>"]
    );

    let card = entry.property("author")[0].object().expect("embedded card");
    assert_eq!(card.types, vec!["h-card"]);
    assert_eq!(literals(card, "name"), vec!["Ben Ward"]);
    assert_eq!(literals(card, "url"), vec!["http://ben.example/"]);
    let adr = card.property("adr")[0].object().expect("embedded adr");
    assert_eq!(literals(adr, "country-name"), vec!["USA"]);

    let events = results.objects_by_microformat("h-event", false);
    let event = events[0];
    assert_eq!(literals(event, "name"), vec!["Meetup"]);
    assert_eq!(literals(event, "start"), vec!["2008-05-01T19:00"]);
    assert_eq!(literals(event, "location"), vec!["The Pub"]);
}

#[test]
fn parsing_html_is_idempotent() {
    assert_eq!(parse_source(HENTRY), parse_source(HENTRY));
}

#[test]
fn results_serialize_as_items_and_rels() {
    let results = parse_source(r#"<a class="h-card" href="/ben">Ben</a><link rel="me" href="/me">"#);
    let json = serde_json::to_value(&results).expect("serialize results");
    assert_eq!(
        json,
        serde_json::json!({
            "items": [{
                "type": ["h-card"],
                "properties": { "name": ["Ben"], "url": ["/ben"] }
            }],
            "rels": { "me": ["/me"] }
        })
    );
}
