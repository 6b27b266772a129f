//! Character reference decoding.
//!
//! tree-sitter-html leaves references undecoded, so text runs and attribute
//! values are passed through the html5ever tokenizer, which knows the full
//! HTML named reference table and the attribute-value exceptions for legacy
//! references without a trailing `;`.

use std::borrow::Cow;
use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

#[derive(Default)]
struct Collector {
    text: RefCell<String>,
    attribute: RefCell<Option<String>>,
}

impl TokenSink for Collector {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(chars) => self.text.borrow_mut().push_str(&chars),
            Token::NullCharacterToken => self.text.borrow_mut().push('\0'),
            Token::TagToken(tag) => {
                if let Some(attr) = tag.attrs.into_iter().next() {
                    *self.attribute.borrow_mut() = Some(attr.value.to_string());
                }
            }
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

fn tokenize(input: &str) -> Tokenizer<Collector> {
    let queue = BufferQueue::default();
    queue.push_back(StrTendril::from_slice(input));
    let tokenizer = Tokenizer::new(Collector::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&queue);
    tokenizer.end();
    tokenizer
}

/// Decode the references in a run of character data.
#[must_use]
pub fn decode_text(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }
    // Stray `<` in a text run must stay text, not open a tag.
    let tokenizer = tokenize(&input.replace('<', "&lt;"));
    Cow::Owned(tokenizer.sink.text.take())
}

/// Decode the references in an attribute value.
#[must_use]
pub fn decode_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains('&') {
        return Cow::Borrowed(value);
    }
    let tokenizer = tokenize(&format!("<a v=\"{}\">", value.replace('"', "&quot;")));
    let decoded = tokenizer.sink.attribute.take();
    decoded.map_or(Cow::Borrowed(value), Cow::Owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Ben &amp; Jerry", "Ben & Jerry")]
    #[case("&lt;b&gt;", "<b>")]
    #[case("caf&#233;", "café")]
    #[case("caf&#xE9;", "café")]
    #[case("a&nbsp;b", "a\u{a0}b")]
    #[case("Ren&eacute;e M&uuml;ller &rarr; &hearts;", "Renée Müller → ♥")]
    #[case("AT&T", "AT&T")]
    #[case("&unknown; &", "&unknown; &")]
    #[case("a < b &amp; <3", "a < b & <3")]
    #[case("plain", "plain")]
    fn decodes_text_references(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(decode_text(input), expected);
    }

    #[rstest]
    #[case("Ben &amp; Co", "Ben & Co")]
    #[case("/search?q=1&copy=2", "/search?q=1&copy=2")]
    #[case("&copy; 2013", "© 2013")]
    #[case("say &quot;hi&quot; & \"bye\"", "say \"hi\" & \"bye\"")]
    fn decodes_attribute_references(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(decode_attribute(input), expected);
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(decode_text("no references"), Cow::Borrowed(_)));
        assert!(matches!(decode_attribute("/ben"), Cow::Borrowed(_)));
    }
}
