//! Bundled v1 → v2 vocabularies.

use mf2_core::LegacyVocabulary;

pub(super) fn vocabularies() -> Vec<(&'static str, LegacyVocabulary)> {
    vec![
        ("h-card", hcard()),
        ("h-adr", hadr()),
        ("h-entry", hentry()),
        ("h-event", hevent()),
    ]
}

fn hcard() -> LegacyVocabulary {
    [
        ("fn", "p-name"),
        ("given-name", "p-given-name"),
        ("additional-name", "p-additional-name"),
        ("family-name", "p-family-name"),
        ("nickname", "p-nickname"),
        ("title", "p-title"),
        ("org", "p-org"),
        ("organization-name", "p-organization-name"),
        ("organization-department", "p-organization-department"),
        ("adr", "p-adr"),
        ("geo", "p-geo"),
        ("label", "p-label"),
        ("tel", "p-tel"),
        ("note", "p-note"),
        ("category", "p-category"),
        ("email", "u-email"),
        ("url", "u-url"),
        ("photo", "u-photo"),
        ("bday", "dt-bday"),
    ]
    .into_iter()
    .fold(LegacyVocabulary::new(["vcard", "hcard"]), |vocab, (legacy, target)| {
        vocab.property(legacy, target)
    })
}

fn hadr() -> LegacyVocabulary {
    [
        "extended-address",
        "street-address",
        "locality",
        "region",
        "postal-code",
        "country-name",
    ]
    .into_iter()
    .fold(LegacyVocabulary::new(["adr"]), |vocab, name| {
        vocab.property(name, ("p", name))
    })
}

fn hentry() -> LegacyVocabulary {
    LegacyVocabulary::new(["hentry"])
        .property("entry-title", "p-name")
        .property("entry-summary", "p-summary")
        .property("entry-content", "e-content")
        .property("published", "dt-published")
        .property("updated", "dt-updated")
        .property("author", "p-author")
        .property("category", "p-category")
        .property("bookmark", "u-url")
}

fn hevent() -> LegacyVocabulary {
    LegacyVocabulary::new(["vevent"])
        .property("summary", "p-name")
        .property("description", "p-description")
        .property("dtstart", "dt-start")
        .property("dtend", "dt-end")
        .property("duration", "dt-duration")
        .property("location", "p-location")
        .property("category", "p-category")
        .property("url", "u-url")
}
