//! cyan-codegen - C++ component generator for the cyan engine
//!
//! Reads declarative JSON schema documents and generates:
//! - one C++ header per schema with the struct and its constructors
//! - ChaiScript registration functions for opted-in entities, plus a single
//!   combined entry point
//! - x-macro lists and aggregate include files collected across schemas
//! - a CMake manifest listing every generated file
//!
//! Generated files always start with a marker line; an existing file without
//! it is never overwritten.
//!
//! # Example
//!
//! ```no_run
//! use cyan_codegen::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::discover("codegen")?;
//! let report = Generator::new(config, "generated").run_dir("codegen")?;
//!
//! for failure in &report.failures {
//!     eprintln!("{failure}");
//! }
//! # Ok::<(), cyan_codegen::CodegenError>(())
//! ```

mod aggregate;
mod bindings;
mod config;
mod emitter;
mod entity;
mod error;
mod manifest;
mod pipeline;
mod schema;

pub mod codegen;

pub use aggregate::{AggregationIndex, IncludeList, XList};
pub use bindings::{BindingEntry, BindingRegistry};
pub use config::{CONFIG_FILE_NAME, GeneratorConfig};
pub use emitter::{Emitter, is_overwritable};
pub use entity::{EntityRenderer, RenderedEntity};
pub use error::{CodegenError, CodegenResult, SchemaError};
pub use manifest::BuildManifest;
pub use pipeline::{DirectorySource, GenerationReport, Generator, SchemaSource};
pub use schema::{COPYABLE_TYPES, FieldSpec, SchemaModel, XListDirective, is_copyable_type};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CodegenError, CodegenResult, GenerationReport, Generator, GeneratorConfig, SchemaModel,
        SchemaSource,
    };
}
