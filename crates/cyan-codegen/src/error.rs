//! Error types for cyan-codegen

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error produced while turning one schema document into a [`SchemaModel`]
///
/// [`SchemaModel`]: crate::SchemaModel
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The document is not well-formed JSON or has the wrong shape
    #[error("malformed schema: {0}")]
    Json(#[from] serde_json::Error),

    /// The required `name` key is absent or empty
    #[error("schema is missing the required `name`")]
    MissingName,

    /// An entry of `data` is unusable
    #[error("invalid field at index {index}: {reason}")]
    InvalidField { index: usize, reason: String },

    /// An `xlisted` or `include_in` entry is unusable
    #[error("invalid directive: {0}")]
    InvalidDirective(String),
}

/// Error reported for a single schema document or output path.
///
/// None of these abort a generation run; they are collected into the
/// [`GenerationReport`](crate::GenerationReport).
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A schema document could not be parsed; its entity is skipped
    #[error("{}: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    /// The target exists and was not produced by the generator
    #[error(
        "refusing to overwrite {}: the file already exists and does not start with the generated-file marker",
        .path.display()
    )]
    OverwriteRefused { path: PathBuf },

    /// Filesystem access failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A second schema declared an entity whose bindings are already registered
    #[error("duplicate binding for entity {qualified_name} declared in {}", .path.display())]
    DuplicateBinding {
        qualified_name: String,
        path: PathBuf,
    },

    /// Two entities map to the same binding function name
    #[error(
        "binding function {function_name} for {qualified_name} clashes with {existing}, declared in {}",
        .path.display()
    )]
    BindingNameClash {
        function_name: String,
        qualified_name: String,
        existing: String,
        path: PathBuf,
    },

    /// Two outputs of one run resolve to the same file
    #[error("{} is already produced by this run", .path.display())]
    OutputConflict { path: PathBuf },

    /// Generator configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl CodegenError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodegenError::Io {
            path: path.into(),
            source,
        }
    }

    /// The file this error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            CodegenError::Schema { path, .. }
            | CodegenError::OverwriteRefused { path }
            | CodegenError::Io { path, .. }
            | CodegenError::DuplicateBinding { path, .. }
            | CodegenError::BindingNameClash { path, .. }
            | CodegenError::OutputConflict { path } => Some(path),
            CodegenError::Config(_) => None,
        }
    }
}

impl From<toml::de::Error> for CodegenError {
    fn from(err: toml::de::Error) -> Self {
        CodegenError::Config(err.to_string())
    }
}
