//! Generator configuration

use crate::error::{CodegenError, CodegenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional configuration file looked up in the input directory
pub const CONFIG_FILE_NAME: &str = "codegen.toml";

/// Fixed names and markers used by a generation run
///
/// Every field has a default, so an empty `codegen.toml` (or none at all)
/// reproduces the stock cyan layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Leading line identifying a file as generated and therefore overwritable
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Extension of schema documents (without the dot)
    #[serde(default = "default_schema_extension")]
    pub schema_extension: String,

    /// Extension of generated entity files (without the dot)
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// `generate` flag that opts an entity into scripting bindings
    #[serde(default = "default_binding_flag")]
    pub binding_flag: String,

    /// Namespace wrapping the binding registration functions
    #[serde(default = "default_binding_namespace")]
    pub binding_namespace: String,

    /// Suffix appended to an entity name to form its script-side class name
    #[serde(default = "default_binding_class_suffix")]
    pub binding_class_suffix: String,

    /// File name of the combined binding header, relative to the output directory
    #[serde(default = "default_binding_header")]
    pub binding_header: String,

    /// File name of the combined binding source, relative to the output directory
    #[serde(default = "default_binding_source")]
    pub binding_source: String,

    /// File name of the build manifest, relative to the output directory
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// Variable the build manifest assigns the generated source list to
    #[serde(default = "default_manifest_variable")]
    pub manifest_variable: String,
}

fn default_marker() -> String {
    "// Auto-generated by cyan-codegen. DO NOT EDIT.".to_string()
}

fn default_schema_extension() -> String {
    "json".to_string()
}

fn default_output_extension() -> String {
    "hpp".to_string()
}

fn default_binding_flag() -> String {
    "chai_bindings".to_string()
}

fn default_binding_namespace() -> String {
    "cyan::generated".to_string()
}

fn default_binding_class_suffix() -> String {
    "Component".to_string()
}

fn default_binding_header() -> String {
    "chai_bindings.hpp".to_string()
}

fn default_binding_source() -> String {
    "chai_bindings.cpp".to_string()
}

fn default_manifest_file() -> String {
    "CMakeLists.txt".to_string()
}

fn default_manifest_variable() -> String {
    "CYAN_GENERATED_SRC".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            schema_extension: default_schema_extension(),
            output_extension: default_output_extension(),
            binding_flag: default_binding_flag(),
            binding_namespace: default_binding_namespace(),
            binding_class_suffix: default_binding_class_suffix(),
            binding_header: default_binding_header(),
            binding_source: default_binding_source(),
            manifest_file: default_manifest_file(),
            manifest_variable: default_manifest_variable(),
        }
    }
}

impl GeneratorConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> CodegenResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> CodegenResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| CodegenError::io(path, source))?;

        Self::from_toml_str(&content)
    }

    /// Load `codegen.toml` from the input directory, falling back to defaults
    /// when the directory has none.
    pub fn discover(input_dir: impl AsRef<Path>) -> CodegenResult<Self> {
        let candidate = input_dir.as_ref().join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading generator config");
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> CodegenResult<()> {
        if self.marker.trim().is_empty() {
            return Err(CodegenError::Config(
                "generated-file marker cannot be empty".to_string(),
            ));
        }

        for (key, value) in [
            ("schema_extension", &self.schema_extension),
            ("output_extension", &self.output_extension),
            ("binding_header", &self.binding_header),
            ("binding_source", &self.binding_source),
            ("manifest_file", &self.manifest_file),
            ("manifest_variable", &self.manifest_variable),
        ] {
            if value.trim().is_empty() {
                return Err(CodegenError::Config(format!("{key} cannot be empty")));
            }
        }

        if self.schema_extension.trim_start_matches('.')
            == self.output_extension.trim_start_matches('.')
        {
            return Err(CodegenError::Config(
                "schema_extension and output_extension must differ".to_string(),
            ));
        }

        Ok(())
    }

    /// Schema extension without a leading dot
    pub fn schema_ext(&self) -> &str {
        self.schema_extension.trim_start_matches('.')
    }

    /// Output extension without a leading dot
    pub fn output_ext(&self) -> &str {
        self.output_extension.trim_start_matches('.')
    }

    /// The marker as a `#` comment, for the build manifest
    pub fn manifest_marker(&self) -> String {
        let text = self
            .marker
            .trim_start_matches(|c: char| c == '/' || c == '*' || c == '#')
            .trim();
        format!("# {text}")
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
