//! Build manifest listing every generated file

use crate::codegen::naming::to_include_path;
use std::path::PathBuf;

/// `SET(<variable> <paths...> PARENT_SCOPE)` for the downstream CMake build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildManifest {
    pub variable: String,
    pub paths: Vec<PathBuf>,
}

impl BuildManifest {
    pub fn new(variable: impl Into<String>, paths: Vec<PathBuf>) -> Self {
        Self {
            variable: variable.into(),
            paths,
        }
    }

    /// Render the manifest, led by `marker` (a `#` comment)
    pub fn render(&self, marker: &str) -> String {
        let mut assignment = format!("SET({}", self.variable);
        for path in &self.paths {
            assignment.push(' ');
            assignment.push_str(&to_include_path(path));
        }
        assignment.push_str(" PARENT_SCOPE)");

        format!("{marker}\n{assignment}\n")
    }
}
