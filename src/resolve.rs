//! Key resolution: deriving ordered key parts from a component schema and
//! folding a flat value map into a resolved key with a completeness verdict.

use crate::error::ExtractError;
use crate::extract::key_part_values;
use crate::types::{
    ComponentDeclaration, ComponentSchema, KeyPartSpec, KeyPartValues, KeyResult, MetadataKey,
    ResolvedKey,
};

// ─── Key-part derivation ─────────────────────────────────────────────────────

/// Derive the ordered key parts of a component.
///
/// Keeps the parameters carrying a key-part tag and sorts them ascending by
/// rank. The sort is stable, so parts sharing a rank keep their schema
/// order; which of two equal ranks comes first is not part of the contract.
pub fn key_parts(schema: &ComponentSchema) -> Vec<KeyPartSpec> {
    let mut parts: Vec<KeyPartSpec> = schema
        .all_parameters()
        .filter_map(|p| {
            p.key_part.map(|kp| KeyPartSpec {
                name: p.name.clone(),
                order: kp.order,
                required: p.required,
            })
        })
        .collect();
    parts.sort_by_key(|p| p.order);
    parts
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Resolve a metadata key from ordered key parts and a flat map of declared
/// values.
///
/// Two independent passes over `parts`:
///
/// 1. **Chain building.** Parts are populated in rank order. A part with no
///    entry in `values` ends the walk; later parts cannot contribute even
///    if values exist for them. A part whose entry holds no extracted value
///    is skipped without ending the walk, so the chain can be a gapped
///    subsequence of the parts, not only a prefix.
/// 2. **Missing scan.** Every part is checked regardless of where the walk
///    stopped. What counts is presence of an entry in `values`: an entry
///    that extracted to no value still counts as declared.
///
/// A component with no key parts resolves to [`ResolvedKey::Null`] and is
/// complete.
pub fn resolve(parts: &[KeyPartSpec], values: &KeyPartValues) -> KeyResult {
    if parts.is_empty() {
        return KeyResult {
            key: ResolvedKey::Null,
            missing_parts: Vec::new(),
        };
    }

    let mut levels: Vec<(String, String)> = Vec::new();
    for part in parts {
        match values.get(&part.name) {
            // Parts may only be populated in order; the first undeclared
            // part ends the walk.
            None => break,
            // Declared but nothing extractable: no level, walk continues.
            Some(None) => continue,
            Some(Some(id)) => levels.push((id.clone(), part.name.clone())),
        }
    }

    // Fold back to front so each level owns the one below it.
    let root = levels.into_iter().rev().fold(None, |child, (id, part_name)| {
        Some(MetadataKey {
            id,
            part_name,
            child: child.map(Box::new),
        })
    });
    let key = match root {
        Some(root) => ResolvedKey::Chain(root),
        None => ResolvedKey::Null,
    };

    // A key with a single optional part is exempt from the missing scan;
    // the exemption is a special case of that one shape, not a rule to
    // extend to longer keys.
    let multi_part = parts.len() > 1;
    let missing_parts: Vec<String> = parts
        .iter()
        .filter(|p| (multi_part || p.required) && !values.contains_key(&p.name))
        .map(|p| p.name.clone())
        .collect();

    KeyResult { key, missing_parts }
}

/// Resolve the metadata key for one declared component: derive its ordered
/// key parts, extract the declared values, and fold the two together.
///
/// The schema is consulted fresh on every call; nothing is cached between
/// resolutions.
///
/// # Errors
///
/// Fails when the declaration names a group or parameter the schema does
/// not define.
pub fn resolve_key(
    schema: &ComponentSchema,
    declaration: &ComponentDeclaration,
) -> Result<KeyResult, ExtractError> {
    let parts = key_parts(schema);
    let values = key_part_values(schema, declaration)?;
    Ok(resolve(&parts, &values))
}
