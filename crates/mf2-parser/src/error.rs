//! Parser error types for mf2-parser.

/// Errors that can occur while registering vocabularies or parsing a tree.
///
/// Malformed markup is never an error: unmatched classes yield nothing and
/// failed validation silently omits the property.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid vocabulary for {target}: {reason}")]
    InvalidVocabulary { target: String, reason: String },
}
