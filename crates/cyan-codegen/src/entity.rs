//! Per-schema entity rendering

use crate::codegen::{EntityDef, render_entity};
use crate::config::GeneratorConfig;
use crate::schema::{SchemaModel, XListDirective};
use std::path::PathBuf;

/// One schema's generated header plus what the aggregation stages need from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntity {
    pub name: String,
    pub qualified_name: String,
    pub output_path: PathBuf,
    pub text: String,
    pub xlist_directives: Vec<XListDirective>,
    pub include_directives: Vec<String>,
    pub wants_bindings: bool,
}

/// Turns a [`SchemaModel`] into a [`RenderedEntity`]
#[derive(Debug, Clone, Copy)]
pub struct EntityRenderer<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> EntityRenderer<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, schema: &SchemaModel, output_path: PathBuf) -> RenderedEntity {
        let def = EntityDef::from_schema(schema);

        RenderedEntity {
            name: schema.name.clone(),
            qualified_name: schema.qualified_name(),
            output_path,
            text: render_entity(&def, &self.config.marker),
            xlist_directives: schema.xlist_directives.clone(),
            include_directives: schema.include_directives.clone(),
            wants_bindings: schema.wants(&self.config.binding_flag),
        }
    }
}
