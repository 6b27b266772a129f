//! URL and ISO 8601 date-time grammars.
//!
//! These check shape only; `2013-02-31` is a well-formed date here.

use std::sync::LazyLock;

use regex::Regex;

/// John Gruber's liberal URL pattern: a scheme-qualified, `www.`-prefixed or
/// `domain.tld/` token followed by a run of non-whitespace with balanced
/// parentheses. Unanchored, so the URL may sit inside surrounding text.
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b(?:[a-z][\w-]+:(?:/{1,3}|[a-z0-9%])|www\d{0,3}[.]|[a-z0-9.\-]+[.][a-z]{2,4}/)(?:[^\s()<>]+|\((?:[^\s()<>]+|\([^\s()<>]+\))*\))+(?:\((?:[^\s()<>]+|\([^\s()<>]+\))*\)|[^\s`!()\[\]{};:'".,<>?«»“”‘’])"#,
    )
    .expect("URL pattern is valid")
});

/// `YYYY[-MM[-DD]]` or `YYYY-DDD`, optionally `T` + time, optionally a zone.
static ISO_DATETIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\d{4}-?(?:\d{2}(?:-?\d{2})?|\d{3})?(?:[Tt ]\d{2}(?::?\d{2}(?::?\d{2}(?:[:.]\d{1,3})?)?)?(?:[+-]\d{2}:?\d{2}|[Zz])?)?$",
    )
    .expect("ISO date-time pattern is valid")
});

static DATE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-?(?:\d{2}(?:-?\d{2})?|\d{3})?$").expect("date pattern is valid")
});

static TIME_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}(?::?\d{2}(?::?\d{2}(?:[:.]\d{1,3})?)?)?$").expect("time pattern is valid")
});

static TIMEZONE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[+-]\d{2}:?\d{2}|[Zz])$").expect("timezone pattern is valid")
});

#[must_use]
pub fn is_url(value: &str) -> bool {
    URL.is_match(value)
}

#[must_use]
pub fn is_iso_datetime(value: &str) -> bool {
    ISO_DATETIME.is_match(value.trim())
}

#[must_use]
pub fn is_date_fragment(value: &str) -> bool {
    DATE_FRAGMENT.is_match(value)
}

#[must_use]
pub fn is_time_fragment(value: &str) -> bool {
    TIME_FRAGMENT.is_match(value)
}

#[must_use]
pub fn is_timezone_fragment(value: &str) -> bool {
    TIMEZONE_FRAGMENT.is_match(value)
}
