//! Scripting binding registry.
//!
//! Collects one registration function per opted-in entity during a run and
//! renders them, plus the combined entry point, into a single header and
//! source pair once every schema has been processed. Registration order is
//! schema-processing order and is never re-sorted, so unchanged inputs give
//! byte-identical output.

use crate::codegen::ir::ClassBinding;
use crate::codegen::{chai, naming};
use crate::error::{CodegenError, CodegenResult};
use crate::schema::SchemaModel;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// One registered entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingEntry {
    pub binding: ClassBinding,
    /// Generated entity file the binding code must include
    pub include_path: String,
    pub declaration: String,
    pub body: String,
}

/// Append-only accumulator of binding registration functions
#[derive(Debug, Clone)]
pub struct BindingRegistry {
    namespace: String,
    class_suffix: String,
    entries: Vec<BindingEntry>,
    registered: HashSet<String>,
    /// Function name to the qualified name that claimed it
    functions: HashMap<String, String>,
}

impl BindingRegistry {
    /// Create a registry emitting its functions into `namespace`
    pub fn new(namespace: impl Into<String>, class_suffix: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            class_suffix: class_suffix.into(),
            entries: Vec::new(),
            registered: HashSet::new(),
            functions: HashMap::new(),
        }
    }

    /// Register `schema`, whose entity was generated at `entity_path`.
    ///
    /// A second registration of the same qualified name, or of a different
    /// entity whose function name is already taken, is rejected and the
    /// first one is kept.
    pub fn register(&mut self, schema: &SchemaModel, entity_path: &Path) -> CodegenResult<()> {
        let binding = ClassBinding::from_schema(schema, &self.class_suffix);

        if self.registered.contains(&binding.qualified_name) {
            return Err(CodegenError::DuplicateBinding {
                qualified_name: binding.qualified_name,
                path: entity_path.to_path_buf(),
            });
        }
        if let Some(existing) = self.functions.get(&binding.function_name) {
            return Err(CodegenError::BindingNameClash {
                function_name: binding.function_name,
                qualified_name: binding.qualified_name,
                existing: existing.clone(),
                path: entity_path.to_path_buf(),
            });
        }

        self.registered.insert(binding.qualified_name.clone());
        self.functions
            .insert(binding.function_name.clone(), binding.qualified_name.clone());

        let prefix = naming::namespace_prefix(&self.namespace);
        let entry = BindingEntry {
            declaration: chai::function_declaration(&binding.function_name),
            body: chai::function_body(&binding, &prefix),
            include_path: naming::to_include_path(entity_path),
            binding,
        };

        tracing::debug!(
            entity = %entry.binding.qualified_name,
            function = %entry.binding.function_name,
            "registered scripting bindings"
        );
        self.entries.push(entry);
        Ok(())
    }

    pub fn entries(&self) -> &[BindingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declaration and definition of the combined entry point
    pub fn combined_function(&self) -> (String, String) {
        let prefix = naming::namespace_prefix(&self.namespace);
        let names = self
            .entries
            .iter()
            .map(|e| e.binding.function_name.as_str());
        (chai::combined_declaration(), chai::combined_body(names, &prefix))
    }

    /// Render the combined header
    pub fn render_header(&self, marker: &str) -> String {
        let (combined_decl, _) = self.combined_function();
        let mut declarations: Vec<String> =
            self.entries.iter().map(|e| e.declaration.clone()).collect();
        declarations.push(combined_decl);

        chai::render_header(marker, &self.includes(), &self.namespace, &declarations)
    }

    /// Render the combined source; `header_path` is the header it belongs to
    pub fn render_source(&self, marker: &str, header_path: &Path) -> String {
        let (_, combined_body) = self.combined_function();
        let mut bodies: Vec<String> = self.entries.iter().map(|e| e.body.clone()).collect();
        bodies.push(combined_body);

        let header_name = header_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| naming::to_include_path(header_path));

        chai::render_source(marker, &header_name, &self.includes(), &bodies)
    }

    /// Render both files, returning `(header, source)` paired with their paths
    pub fn render_files(
        &self,
        marker: &str,
        header_path: PathBuf,
        source_path: PathBuf,
    ) -> [(PathBuf, String); 2] {
        let header = self.render_header(marker);
        let source = self.render_source(marker, &header_path);
        [(header_path, header), (source_path, source)]
    }

    fn includes(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.include_path.clone()).collect()
    }
}

#[cfg(test)]
#[path = "bindings/bindings_tests.rs"]
mod bindings_tests;
