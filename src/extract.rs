//! Declaration extraction: flattening a grouped component declaration into
//! the name-to-value map the resolver consumes.

use crate::error::{ExtractError, ExtractErrorKind};
use crate::types::{ComponentDeclaration, ComponentSchema, KeyPartValues, ParameterValue};

/// Extract the simple string value from a raw declared value.
///
/// Lists and objects hold no single simple value and yield `None`. The
/// difference between `None` here and a parameter that was never declared
/// matters to the resolver, so callers record both.
pub fn simple_value(value: &ParameterValue) -> Option<String> {
    match value {
        ParameterValue::Simple { value, .. } => Some(value.clone()),
        ParameterValue::List(_) | ParameterValue::Object(_) => None,
    }
}

/// Flatten a component declaration into a parameter name to extracted value
/// map, keeping only the parameters the schema tags as key parts.
///
/// Group and parameter lookups are scoped: a declared parameter is looked
/// up in its declared group only, never across the whole schema.
///
/// # Errors
///
/// Fails when a declared group or parameter has no counterpart in the
/// schema.
pub fn key_part_values(
    schema: &ComponentSchema,
    declaration: &ComponentDeclaration,
) -> Result<KeyPartValues, ExtractError> {
    let mut values = KeyPartValues::new();

    for group in &declaration.groups {
        let group_schema = schema.group(&group.name).ok_or_else(|| ExtractError {
            kind: ExtractErrorKind::UnknownGroup,
            group: group.name.clone(),
            parameter: None,
            message: format!(
                "could not find parameter group '{}' in the component schema",
                group.name
            ),
        })?;

        for parameter in &group.parameters {
            let parameter_schema =
                group_schema.parameter(&parameter.name).ok_or_else(|| ExtractError {
                    kind: ExtractErrorKind::UnknownParameter,
                    group: group.name.clone(),
                    parameter: Some(parameter.name.clone()),
                    message: format!(
                        "could not find parameter '{}' in parameter group '{}'",
                        parameter.name, group.name
                    ),
                })?;

            if parameter_schema.key_part.is_some() {
                values.insert(parameter.name.clone(), simple_value(&parameter.value));
            }
        }
    }

    Ok(values)
}
