//! Closed enumerations used throughout the metakey type system.
//!
//! These are "closed" enums: only the defined variants are valid. Open
//! values (part names, key identifiers) are represented as strings.

use serde::{Deserialize, Serialize};

/// Classification of a simple declared value.
///
/// Assigned while typing a declaration from the YAML scalar kind; strings
/// shaped like an ISO-8601 date or timestamp classify as `DateTime`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleValueType {
    Text,
    Number,
    Boolean,
    DateTime,
}
