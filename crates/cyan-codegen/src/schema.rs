//! Schema documents.
//!
//! A schema document describes one generated entity:
//!
//! ```json
//! {
//!     "name": "Transform",
//!     "namespace": "cyan",
//!     "include": ["cyan/src/math/vec.hpp"],
//!     "data": [
//!         { "name": "position", "type": "Vec2f" },
//!         { "name": "rotation", "type": "float", "default": "0.0f" }
//!     ],
//!     "generate": ["chai_bindings"],
//!     "xlisted": [["CYAN_COMPONENT_LIST", "components_x_list.hpp"]],
//!     "include_in": ["components.hpp"]
//! }
//! ```
//!
//! Documents are deserialized into a loose [`RawSchema`] first and then
//! validated once into a [`SchemaModel`], so the renderers never probe for
//! optional keys themselves. Unknown top-level keys are ignored.

use crate::error::SchemaError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// Type tokens that are cheap to copy and are therefore passed by value
/// in generated constructors. Everything else is passed by const reference.
pub const COPYABLE_TYPES: &[&str] = &[
    "bool",
    "char",
    "signed char",
    "unsigned char",
    "short",
    "unsigned short",
    "int",
    "unsigned",
    "unsigned int",
    "long",
    "unsigned long",
    "long long",
    "unsigned long long",
    "float",
    "double",
    "long double",
    "size_t",
    "std::size_t",
    "int8_t",
    "int16_t",
    "int32_t",
    "int64_t",
    "uint8_t",
    "uint16_t",
    "uint32_t",
    "uint64_t",
    "std::int8_t",
    "std::int16_t",
    "std::int32_t",
    "std::int64_t",
    "std::uint8_t",
    "std::uint16_t",
    "std::uint32_t",
    "std::uint64_t",
];

/// Whether a type token is in the copyable allow-list
pub fn is_copyable_type(ty: &str) -> bool {
    COPYABLE_TYPES.contains(&ty.trim())
}

/// One data member of an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    /// Opaque target-language type token
    pub ty: String,
    /// Initializer used by the default constructor
    pub default: Option<String>,
    pub is_copyable: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        let ty = ty.into();
        Self {
            name: name.into(),
            is_copyable: is_copyable_type(&ty),
            ty,
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// "Append this entity's name to list `list_name` in file `target_file`"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XListDirective {
    pub list_name: String,
    pub target_file: String,
}

/// Validated in-memory form of one schema document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaModel {
    pub name: String,
    /// `None` means the global namespace
    pub namespace: Option<String>,
    /// Declaration order is significant
    pub fields: Vec<FieldSpec>,
    /// Headers the generated code needs
    pub includes: Vec<String>,
    pub generate_options: BTreeSet<String>,
    pub xlist_directives: Vec<XListDirective>,
    /// Aggregate files that must include this entity's generated file
    pub include_directives: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawSchema {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    namespace: Option<String>,
    #[serde(default)]
    data: Vec<RawField>,
    #[serde(default)]
    include: Vec<String>,
    #[serde(default)]
    generate: Vec<String>,
    #[serde(default)]
    xlisted: Vec<Vec<String>>,
    #[serde(default)]
    include_in: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    ty: Option<String>,
    #[serde(default)]
    default: Value,
}

impl SchemaModel {
    /// Create an entity with no fields or directives
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            fields: Vec::new(),
            includes: Vec::new(),
            generate_options: BTreeSet::new(),
            xlist_directives: Vec::new(),
            include_directives: Vec::new(),
        }
    }

    /// Parse and validate a schema document
    pub fn parse(bytes: &[u8]) -> Result<Self, SchemaError> {
        let raw: RawSchema = serde_json::from_slice(bytes)?;
        Self::from_raw(raw)
    }

    /// Parse and validate a schema document held in a string
    pub fn parse_str(source: &str) -> Result<Self, SchemaError> {
        Self::parse(source.as_bytes())
    }

    fn from_raw(raw: RawSchema) -> Result<Self, SchemaError> {
        let name = raw
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(SchemaError::MissingName)?;

        let namespace = raw
            .namespace
            .map(|ns| ns.trim().to_string())
            .filter(|ns| !ns.is_empty());

        let fields = raw
            .data
            .into_iter()
            .enumerate()
            .map(|(index, field)| field_from_raw(index, field))
            .collect::<Result<Vec<_>, _>>()?;

        let xlist_directives = raw
            .xlisted
            .into_iter()
            .map(|entry| match entry.as_slice() {
                [list_name, target_file]
                    if !list_name.trim().is_empty() && !target_file.trim().is_empty() =>
                {
                    Ok(XListDirective {
                        list_name: list_name.trim().to_string(),
                        target_file: target_file.trim().to_string(),
                    })
                }
                _ => Err(SchemaError::InvalidDirective(format!(
                    "xlisted entry must be [listName, fileName], got {entry:?}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if raw.include_in.iter().any(|target| target.trim().is_empty()) {
            return Err(SchemaError::InvalidDirective(
                "include_in entries cannot be empty".to_string(),
            ));
        }

        Ok(SchemaModel {
            name,
            namespace,
            fields,
            includes: raw.include,
            generate_options: raw.generate.into_iter().collect(),
            xlist_directives,
            include_directives: raw.include_in,
        })
    }

    /// `namespace::name`, or just `name` in the global namespace
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}::{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Whether the entity opted into the given `generate` flag
    pub fn wants(&self, flag: &str) -> bool {
        self.generate_options.contains(flag)
    }
}

fn field_from_raw(index: usize, raw: RawField) -> Result<FieldSpec, SchemaError> {
    let invalid = |reason: &str| SchemaError::InvalidField {
        index,
        reason: reason.to_string(),
    };

    let name = raw
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| invalid("missing `name`"))?;
    let ty = raw
        .ty
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| invalid("missing `type`"))?;

    let default = match raw.default {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => {
            return Err(invalid("`default` must be a string, number or bool"));
        }
    };

    let mut field = FieldSpec::new(name.trim(), ty.trim());
    field.default = default;
    Ok(field)
}
