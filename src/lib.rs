//! Hierarchical metadata key resolution for declared component
//! configurations.
//!
//! A component schema marks some of its parameters as ordered *key parts*;
//! a user declaration supplies raw values for some subset of them. This
//! crate turns the two into a multi-level metadata key plus a completeness
//! verdict:
//!
//! ```text
//! parse_schema(yaml)      → ComponentSchema      ┐
//!                                                ├→ resolve_key → KeyResult
//! parse_declaration(yaml) → ComponentDeclaration ┘
//! ```
//!
//! The resolved key is a chain of levels, each an identifier tagged with
//! the key part it populates. A declaration that covers only the leading
//! parts still yields a usable partial chain; [`KeyResult`] says which
//! parts were found missing.
//!
//! # Quick Start
//!
//! ```rust
//! let schema = r#"
//! name: query
//! groups:
//!   - name: General
//!     parameters:
//!       - name: type
//!         required: true
//!         key_part:
//!           order: 1
//!       - name: id
//!         required: true
//!         key_part:
//!           order: 2
//! "#;
//!
//! let declaration = r#"
//! groups:
//!   - name: General
//!     parameters:
//!       - name: type
//!         value: customer
//! "#;
//!
//! let result = metakey::load(schema, declaration).expect("well-formed documents");
//! assert_eq!(result.key.part_names(), ["type"]);
//! assert_eq!(result.missing_parts, ["id"]);
//! assert!(!result.is_complete());
//! ```

pub mod enums;
pub mod error;
pub mod extract;
pub mod parse;
pub mod resolve;
pub mod types;

pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use extract::{key_part_values, simple_value};
pub use parse::{parse_declaration, parse_schema};
pub use resolve::{key_parts, resolve, resolve_key};

/// Convenience entry point composing parse → extract → resolve.
///
/// Parses both documents, derives the component's ordered key parts,
/// extracts the declared key-part values, and resolves them into a
/// [`KeyResult`].
///
/// # Errors
///
/// Returns [`MetakeyError::Parse`] when either document fails to parse and
/// [`MetakeyError::Extract`] when the declaration names a group or
/// parameter the schema does not define. An incomplete key is not an
/// error; it is reported through [`KeyResult::missing_parts`].
pub fn load(schema_input: &str, declaration_input: &str) -> Result<KeyResult, MetakeyError> {
    let schema = parse::parse_schema(schema_input).map_err(MetakeyError::Parse)?;
    let declaration =
        parse::parse_declaration(declaration_input).map_err(MetakeyError::Parse)?;
    resolve::resolve_key(&schema, &declaration).map_err(MetakeyError::Extract)
}
