use serde::{Deserialize, Serialize};
use std::fmt;

/// Error kind for parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
    UnknownVariant,
}

/// Produced by `parse_schema` and `parse_declaration` when YAML
/// deserialization fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} (at {})", self.message, path),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Error kind for extraction failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractErrorKind {
    UnknownGroup,
    UnknownParameter,
}

/// Produced by `key_part_values` when a declaration names a group or
/// parameter the component schema does not define.
///
/// A mismatch between declaration and schema is a broken contract between
/// the two documents, not an incomplete key; it is never folded into a
/// [`crate::types::KeyResult`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractError {
    pub kind: ExtractErrorKind,
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    pub message: String,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExtractError {}

/// Top-level error type returned by [`crate::load`].
#[derive(Clone, Debug)]
pub enum MetakeyError {
    Parse(ParseError),
    Extract(ExtractError),
}

impl fmt::Display for MetakeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetakeyError::Parse(e) => write!(f, "Parse error: {}", e),
            MetakeyError::Extract(e) => write!(f, "Extraction error: {}", e),
        }
    }
}

impl std::error::Error for MetakeyError {}
