//! Class token classification.
//!
//! A stateless tokenizer: each whitespace-separated class token is mapped to
//! exactly one [`ClassToken`]. Nothing is carried between calls, so a single
//! classification can never leak match position into the next element.

use std::fmt;

use mf2_core::DomNode;

/// Property prefix; selects the extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// Plain text.
    P,
    /// URL.
    U,
    /// Date-time.
    Dt,
    /// Embedded markup.
    E,
}

impl Prefix {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "p" => Some(Self::P),
            "u" => Some(Self::U),
            "dt" => Some(Self::Dt),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P => "p",
            Self::U => "u",
            Self::Dt => "dt",
            Self::E => "e",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(prefix, name)` property declaration such as `dt-published`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyClass {
    pub prefix: Prefix,
    pub name: String,
}

impl PropertyClass {
    #[must_use]
    pub fn new(prefix: Prefix, name: impl Into<String>) -> Self {
        Self {
            prefix,
            name: name.into(),
        }
    }

    /// Parse a token against the property grammar `(p|u|dt|e)-<word>`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let (prefix, name) = token.split_once('-')?;
        let prefix = Prefix::parse(prefix)?;
        is_word(name).then(|| Self::new(prefix, name))
    }
}

impl fmt::Display for PropertyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.name)
    }
}

/// Classification of a single class token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassToken {
    /// `h-<word>`: an object type.
    Object(String),
    /// `(p|u|dt|e)-<word>`: a property declaration.
    Property(PropertyClass),
    /// Bare `value`: a value-class pattern fragment.
    Value,
    /// Bare `value-title`: the fragment literal comes from `@title`.
    ValueTitle,
    /// Anything else (including legacy v1 class names).
    Plain(String),
}

impl ClassToken {
    #[must_use]
    pub fn classify(token: &str) -> Self {
        match token {
            "value" => return Self::Value,
            "value-title" => return Self::ValueTitle,
            _ => {}
        }
        if let Some(name) = token.strip_prefix("h-") {
            if is_word(name) {
                return Self::Object(token.to_string());
            }
        }
        PropertyClass::parse(token).map_or_else(|| Self::Plain(token.to_string()), Self::Property)
    }
}

/// `<word>`: letters, digits and hyphens, starting with a letter or digit.
fn is_word(value: &str) -> bool {
    value
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphanumeric())
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Every class token on one element, sorted into grammar buckets.
///
/// Duplicate tokens are ignored; each bucket keeps encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub objects: Vec<String>,
    pub properties: Vec<PropertyClass>,
    pub value: bool,
    pub value_title: bool,
    pub plain: Vec<String>,
}

impl Classification {
    /// Classify a raw `class` attribute value.
    #[must_use]
    pub fn of(class_attr: &str) -> Self {
        Self::from_tokens(class_attr.split_whitespace())
    }

    /// Classify the class tokens of an element.
    #[must_use]
    pub fn of_node<N: DomNode>(node: &N) -> Self {
        Self::from_tokens(node.class_names())
    }

    fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Self::default();
        let mut seen: Vec<String> = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            if seen.iter().any(|known| known == token) {
                continue;
            }
            seen.push(token.to_string());
            match ClassToken::classify(token) {
                ClassToken::Object(ty) => out.objects.push(ty),
                ClassToken::Property(property) => out.properties.push(property),
                ClassToken::Value => out.value = true,
                ClassToken::ValueTitle => out.value_title = true,
                ClassToken::Plain(token) => out.plain.push(token),
            }
        }
        out
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        !self.objects.is_empty()
    }

    #[must_use]
    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("h-card", ClassToken::Object("h-card".to_string()))]
    #[case("h-x-custom-2", ClassToken::Object("h-x-custom-2".to_string()))]
    #[case("p-name", ClassToken::Property(PropertyClass::new(Prefix::P, "name")))]
    #[case("u-url", ClassToken::Property(PropertyClass::new(Prefix::U, "url")))]
    #[case("dt-published", ClassToken::Property(PropertyClass::new(Prefix::Dt, "published")))]
    #[case("e-content", ClassToken::Property(PropertyClass::new(Prefix::E, "content")))]
    #[case("p-street-address", ClassToken::Property(PropertyClass::new(Prefix::P, "street-address")))]
    #[case("value", ClassToken::Value)]
    #[case("value-title", ClassToken::ValueTitle)]
    #[case("vcard", ClassToken::Plain("vcard".to_string()))]
    #[case("h-", ClassToken::Plain("h-".to_string()))]
    #[case("p-", ClassToken::Plain("p-".to_string()))]
    #[case("x-name", ClassToken::Plain("x-name".to_string()))]
    #[case("p-na_me", ClassToken::Plain("p-na_me".to_string()))]
    #[case("p--name", ClassToken::Plain("p--name".to_string()))]
    #[case("values", ClassToken::Plain("values".to_string()))]
    fn classifies_tokens(#[case] token: &str, #[case] expected: ClassToken) {
        assert_eq!(ClassToken::classify(token), expected);
    }

    #[test]
    fn classification_buckets_tokens_in_order() {
        let classes = Classification::of("  h-card  p-author h-org vcard\tu-url value ");
        assert_eq!(classes.objects, vec!["h-card", "h-org"]);
        assert_eq!(
            classes.properties,
            vec![
                PropertyClass::new(Prefix::P, "author"),
                PropertyClass::new(Prefix::U, "url"),
            ]
        );
        assert!(classes.value);
        assert!(!classes.value_title);
        assert_eq!(classes.plain, vec!["vcard"]);
    }

    #[test]
    fn classification_ignores_duplicate_tokens() {
        let classes = Classification::of("p-name p-name h-card h-card");
        assert_eq!(classes.properties.len(), 1);
        assert_eq!(classes.objects.len(), 1);
    }

    #[test]
    fn repeated_classification_is_stateless() {
        let first = Classification::of("h-entry p-name");
        let second = Classification::of("h-entry p-name");
        assert_eq!(first, second);
        assert!(Classification::of("").objects.is_empty());
    }

    #[test]
    fn node_classification_matches_attribute_classification() {
        let node = mf2_core::dom::Node::element("a").class("h-card  p-author\tvcard");
        assert_eq!(
            Classification::of_node(&&node),
            Classification::of("h-card p-author vcard")
        );
    }

    #[test]
    fn property_class_displays_as_class_name() {
        assert_eq!(PropertyClass::new(Prefix::Dt, "start").to_string(), "dt-start");
    }
}
