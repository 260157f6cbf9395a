use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::enums::*;

// ─── Component schema ────────────────────────────────────────────────────────

/// The schema side of a resolution: one configurable component and its
/// grouped parameter definitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSchema {
    pub name: String,
    pub groups: Vec<ParameterGroup>,
}

impl ComponentSchema {
    /// Find a parameter group by name.
    pub fn group(&self, name: &str) -> Option<&ParameterGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// All parameter definitions across all groups, in schema order.
    pub fn all_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.groups.iter().flat_map(|g| g.parameters.iter())
    }
}

/// A named group of parameter definitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterGroup {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

impl ParameterGroup {
    /// Find a parameter definition by name within this group.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// One parameter definition. A parameter carrying a [`KeyPart`] tag
/// contributes one level to the component's metadata key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_part: Option<KeyPart>,
}

/// The key-part tag: marks a parameter as one level of the metadata key,
/// ranked among its siblings by `order`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyPart {
    pub order: i64,
}

// ─── Component declaration ───────────────────────────────────────────────────

/// The declaration side: one user-authored configuration of a component,
/// holding raw values for some subset of its parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub groups: Vec<GroupDeclaration>,
}

/// Declared values for the parameters of one named group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupDeclaration {
    pub name: String,
    pub parameters: Vec<ParameterDeclaration>,
}

/// One declared parameter: a name and the raw value given for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterDeclaration {
    pub name: String,
    pub value: ParameterValue,
}

// ─── Declared values ─────────────────────────────────────────────────────────

static ISO_TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})?)?$").unwrap()
});

/// A raw declared value: a simple scalar, a sequence, or a mapping.
///
/// Deserializes from the natural YAML shapes: scalars become `Simple` and
/// carry a [`SimpleValueType`] classification, sequences become `List`,
/// mappings become `Object`. There is no null form: a parameter declared
/// with a null value counts as not declared at all, and
/// [`crate::parse::parse_declaration`] drops such entries before typing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterValue {
    Simple { value: String, kind: SimpleValueType },
    List(Vec<ParameterValue>),
    Object(HashMap<String, ParameterValue>),
}

impl ParameterValue {
    /// A simple text value.
    pub fn text(value: impl Into<String>) -> Self {
        ParameterValue::Simple {
            value: value.into(),
            kind: SimpleValueType::Text,
        }
    }

    /// Convert a raw JSON value into a declared value. Null is rejected:
    /// the declaration model has no null form.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        match value {
            Value::Null => Err("parameter value must not be null".to_string()),
            Value::Bool(b) => Ok(ParameterValue::Simple {
                value: b.to_string(),
                kind: SimpleValueType::Boolean,
            }),
            Value::Number(n) => Ok(ParameterValue::Simple {
                value: n.to_string(),
                kind: SimpleValueType::Number,
            }),
            Value::String(s) => Ok(ParameterValue::Simple {
                value: s.clone(),
                kind: classify_scalar(s),
            }),
            Value::Array(items) => Ok(ParameterValue::List(
                items.iter().map(ParameterValue::from_value).collect::<Result<_, _>>()?,
            )),
            Value::Object(fields) => Ok(ParameterValue::Object(
                fields
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), ParameterValue::from_value(v)?)))
                    .collect::<Result<_, String>>()?,
            )),
        }
    }
}

/// Classify a string scalar by shape.
fn classify_scalar(s: &str) -> SimpleValueType {
    if ISO_TIMESTAMP_RE.is_match(s) {
        SimpleValueType::DateTime
    } else {
        SimpleValueType::Text
    }
}

impl Serialize for ParameterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParameterValue::Simple { value, kind } => match kind {
                SimpleValueType::Boolean => match value.as_str() {
                    "true" => serializer.serialize_bool(true),
                    "false" => serializer.serialize_bool(false),
                    _ => serializer.serialize_str(value),
                },
                SimpleValueType::Number => {
                    if let Ok(n) = value.parse::<i64>() {
                        serializer.serialize_i64(n)
                    } else if let Ok(n) = value.parse::<f64>() {
                        serializer.serialize_f64(n)
                    } else {
                        serializer.serialize_str(value)
                    }
                }
                SimpleValueType::Text | SimpleValueType::DateTime => {
                    serializer.serialize_str(value)
                }
            },
            ParameterValue::List(items) => items.serialize(serializer),
            ParameterValue::Object(fields) => fields.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ParameterValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ParameterValue::from_value(&value).map_err(serde::de::Error::custom)
    }
}

// ─── Key parts ───────────────────────────────────────────────────────────────

/// One key part derived from the schema: the parameter's name, its rank
/// among the component's key parts, and whether the parameter is required.
///
/// Derived fresh by [`crate::resolve::key_parts`]; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPartSpec {
    pub name: String,
    pub order: i64,
    pub required: bool,
}

/// Flat parameter name to extracted value map consumed by the resolver.
///
/// `Some(v)` means a simple value was declared for the parameter. `None`
/// means the parameter was declared but its raw value held no simple value
/// (a list or an object). The resolver treats the two differently, so the
/// distinction is kept rather than collapsed.
pub type KeyPartValues = HashMap<String, Option<String>>;

// ─── Resolved keys ───────────────────────────────────────────────────────────

/// One level of a resolved metadata key: an identifier plus the name of the
/// key part it populates, owning at most one child (the next level down).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataKey {
    pub id: String,
    pub part_name: String,
    pub child: Option<Box<MetadataKey>>,
}

impl MetadataKey {
    /// A single-level key with no child.
    pub fn new(id: impl Into<String>, part_name: impl Into<String>) -> Self {
        MetadataKey {
            id: id.into(),
            part_name: part_name.into(),
            child: None,
        }
    }

    /// Attach `child` as the next level down, replacing any existing child.
    pub fn with_child(mut self, child: MetadataKey) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Iterate the chain from this level down to the deepest one.
    pub fn levels(&self) -> impl Iterator<Item = &MetadataKey> {
        std::iter::successors(Some(self), |k| k.child.as_deref())
    }

    /// Number of levels in the chain rooted here.
    pub fn depth(&self) -> usize {
        self.levels().count()
    }
}

/// The structural outcome of a resolution: either the "no key" sentinel or
/// the root of a non-empty key chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedKey {
    /// No level could be populated, or the component defines no key parts.
    Null,
    /// The root level of a populated chain.
    Chain(MetadataKey),
}

impl ResolvedKey {
    pub fn is_null(&self) -> bool {
        matches!(self, ResolvedKey::Null)
    }

    /// The chain root, when one exists.
    pub fn root(&self) -> Option<&MetadataKey> {
        match self {
            ResolvedKey::Null => None,
            ResolvedKey::Chain(key) => Some(key),
        }
    }

    /// Part names along the chain, root first. Empty for `Null`.
    pub fn part_names(&self) -> Vec<&str> {
        self.root()
            .map(|root| root.levels().map(|k| k.part_name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Key identifiers along the chain, root first. Empty for `Null`.
    pub fn ids(&self) -> Vec<&str> {
        self.root()
            .map(|root| root.levels().map(|k| k.id.as_str()).collect())
            .unwrap_or_default()
    }
}

/// The outcome of resolving a declaration against a component's key parts:
/// the key that could be built plus the names of the parts found missing.
///
/// The two travel together because a key can be present and incomplete at
/// once, as a partial chain with later levels still missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyResult {
    pub key: ResolvedKey,
    /// Names of checked-but-undeclared key parts, in rank order.
    pub missing_parts: Vec<String>,
}

impl KeyResult {
    /// True when no checked key part was found missing.
    pub fn is_complete(&self) -> bool {
        self.missing_parts.is_empty()
    }

    /// Human-readable diagnostic naming every missing part, or `None` when
    /// the key is complete.
    pub fn partial_message(&self) -> Option<String> {
        if self.missing_parts.is_empty() {
            None
        } else {
            Some(format!(
                "the resolved key does not provide all required levels; missing levels: {}",
                self.missing_parts.join(", ")
            ))
        }
    }
}
