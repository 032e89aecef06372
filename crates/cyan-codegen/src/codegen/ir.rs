//! Intermediate representation for generated entities.
//!
//! [`EntityDef`] is the fully decided shape of one generated struct: which
//! constructors exist, how every parameter is passed and which constructor
//! must be `explicit`. The text renderers in [`cpp`](super::cpp) and
//! [`chai`](super::chai) only add punctuation, so the synthesis rules can be
//! tested without comparing whole files.
//!
//! # Rules
//!
//! - Fields are declared in schema order.
//! - A default constructor always exists; each field is initialized with its
//!   declared default, or value-initialized when it has none.
//! - A field-list constructor exists only when there is at least one field.
//!   Its parameters mirror field order; copyable types are taken by value,
//!   everything else by const reference.
//! - A field-list constructor with exactly one parameter is `explicit`, so it
//!   can never act as an implicit conversion.

use super::naming;
use crate::schema::{FieldSpec, SchemaModel};

/// How a constructor parameter is passed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamPassing {
    ByValue,
    ByConstRef,
}

impl ParamPassing {
    pub fn for_field(field: &FieldSpec) -> Self {
        if field.is_copyable {
            ParamPassing::ByValue
        } else {
            ParamPassing::ByConstRef
        }
    }
}

/// A data member declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub ty: String,
    pub name: String,
}

/// A constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: String,
    pub passing: ParamPassing,
}

/// `member(value)` in a constructor's initializer list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initializer {
    pub member: String,
    /// Empty means value-initialization
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorKind {
    /// Zero-argument constructor
    Default,
    /// One parameter per field, in field order
    FieldList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub kind: ConstructorKind,
    pub explicit: bool,
    pub params: Vec<Param>,
    pub initializers: Vec<Initializer>,
}

/// A generated struct, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDef {
    pub name: String,
    pub namespace: Option<String>,
    pub includes: Vec<String>,
    pub fields: Vec<FieldDecl>,
    pub constructors: Vec<Constructor>,
}

impl EntityDef {
    /// Decide the full shape of the entity described by `schema`
    pub fn from_schema(schema: &SchemaModel) -> Self {
        let fields = schema
            .fields
            .iter()
            .map(|f| FieldDecl {
                ty: f.ty.clone(),
                name: f.name.clone(),
            })
            .collect();

        let mut constructors = vec![default_constructor(&schema.fields)];
        if let Some(ctor) = field_list_constructor(&schema.fields) {
            constructors.push(ctor);
        }

        EntityDef {
            name: schema.name.clone(),
            namespace: schema.namespace.clone(),
            includes: schema.includes.clone(),
            fields,
            constructors,
        }
    }

    pub fn default_constructor(&self) -> Option<&Constructor> {
        self.constructor(ConstructorKind::Default)
    }

    pub fn field_list_constructor(&self) -> Option<&Constructor> {
        self.constructor(ConstructorKind::FieldList)
    }

    fn constructor(&self, kind: ConstructorKind) -> Option<&Constructor> {
        self.constructors.iter().find(|c| c.kind == kind)
    }
}

/// Name of the constructor parameter that initializes `field`
pub fn param_name(field: &str) -> String {
    format!("{field}_")
}

fn default_constructor(fields: &[FieldSpec]) -> Constructor {
    Constructor {
        kind: ConstructorKind::Default,
        explicit: false,
        params: Vec::new(),
        initializers: fields
            .iter()
            .map(|f| Initializer {
                member: f.name.clone(),
                value: f.default.clone().unwrap_or_default(),
            })
            .collect(),
    }
}

fn field_list_constructor(fields: &[FieldSpec]) -> Option<Constructor> {
    if fields.is_empty() {
        return None;
    }

    let params: Vec<Param> = fields
        .iter()
        .map(|f| Param {
            ty: f.ty.clone(),
            name: param_name(&f.name),
            passing: ParamPassing::for_field(f),
        })
        .collect();

    let initializers = fields
        .iter()
        .zip(&params)
        .map(|(f, p)| Initializer {
            member: f.name.clone(),
            value: p.name.clone(),
        })
        .collect();

    Some(Constructor {
        kind: ConstructorKind::FieldList,
        explicit: params.len() == 1,
        params,
        initializers,
    })
}

/// Scripting-engine registration of one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBinding {
    /// Name of the generated registration function
    pub function_name: String,
    /// Fully qualified C++ type being registered
    pub qualified_name: String,
    /// Class name seen by scripts
    pub script_name: String,
    /// Parameter types of the field-list constructor, `None` without fields
    pub field_ctor_args: Option<Vec<String>>,
    /// One accessor per field, in field order
    pub members: Vec<String>,
}

impl ClassBinding {
    pub fn from_schema(schema: &SchemaModel, class_suffix: &str) -> Self {
        let field_ctor_args = if schema.fields.is_empty() {
            None
        } else {
            Some(
                schema
                    .fields
                    .iter()
                    .map(|f| super::cpp::param_type(&f.ty, ParamPassing::for_field(f)))
                    .collect(),
            )
        };

        ClassBinding {
            function_name: naming::binding_function_name(schema),
            qualified_name: schema.qualified_name(),
            script_name: format!("{}{class_suffix}", schema.name),
            field_ctor_args,
            members: schema.fields.iter().map(|f| f.name.clone()).collect(),
        }
    }
}

#[cfg(test)]
#[path = "ir/ir_tests.rs"]
mod ir_tests;
