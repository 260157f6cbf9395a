use crate::error::{ParseError, ParseErrorKind};
use crate::types::{ComponentDeclaration, ComponentSchema};

/// Parse a YAML string into a component schema.
///
/// Performs YAML deserialization and type mapping only. Whether the schema
/// is a sensible key definition (unique names, meaningful ranks) is the
/// schema provider's responsibility and is not checked here.
pub fn parse_schema(input: &str) -> Result<ComponentSchema, ParseError> {
    into_typed(document_value(input)?)
}

/// Parse a YAML string into a component declaration.
///
/// A parameter entry whose `value` is null or absent is dropped before
/// typing: declaring a parameter without a value counts the same as not
/// declaring it at all.
pub fn parse_declaration(input: &str) -> Result<ComponentDeclaration, ParseError> {
    let mut value = document_value(input)?;
    drop_valueless_parameters(&mut value);
    into_typed(value)
}

/// Front half shared by both document kinds: YAML text to a mapping-rooted
/// `serde_json::Value` carrying only known top-level fields.
fn document_value(input: &str) -> Result<serde_json::Value, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Syntax,
            message: "empty input".to_string(),
            path: None,
        });
    }

    // Deserialize using serde-saphyr via serde_json::Value as intermediate
    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| {
        let msg = e.to_string();
        ParseError {
            kind: classify_saphyr_error(&msg),
            message: msg,
            path: None,
        }
    })?;

    if !value.is_object() {
        return Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: "document root must be a YAML mapping".to_string(),
            path: None,
        });
    }

    // Top-level unknowns get a path-carrying error here; nested unknowns
    // surface through serde when the value is typed.
    if let Some(obj) = value.as_object() {
        for key in obj.keys() {
            match key.as_str() {
                "name" | "groups" => {}
                other => {
                    return Err(ParseError {
                        kind: ParseErrorKind::TypeMismatch,
                        message: format!("unknown top-level field: {}", other),
                        path: Some(other.to_string()),
                    });
                }
            }
        }
    }

    Ok(value)
}

fn into_typed<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T, ParseError> {
    serde_json::from_value(value).map_err(|e| {
        let msg = e.to_string();
        ParseError {
            kind: classify_json_error(&msg),
            message: msg,
            path: None,
        }
    })
}

/// Remove `groups[*].parameters[*]` entries whose `value` is null or
/// absent. Entries that are not mappings are kept so typing reports them.
fn drop_valueless_parameters(value: &mut serde_json::Value) {
    let Some(groups) = value.get_mut("groups").and_then(|g| g.as_array_mut()) else {
        return;
    };
    for group in groups {
        let Some(parameters) = group.get_mut("parameters").and_then(|p| p.as_array_mut()) else {
            continue;
        };
        parameters.retain(|entry| match entry.as_object() {
            Some(fields) => fields.get("value").map(|v| !v.is_null()).unwrap_or(false),
            None => true,
        });
    }
}

fn classify_saphyr_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown") || lower.contains("variant") {
        ParseErrorKind::UnknownVariant
    } else if lower.contains("type") || lower.contains("invalid") || lower.contains("expected") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}

fn classify_json_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown variant") || lower.contains("unknown field") {
        ParseErrorKind::UnknownVariant
    } else if lower.contains("missing field") || lower.contains("invalid type") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}
