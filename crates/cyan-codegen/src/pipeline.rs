//! The generation pass.
//!
//! Schemas are processed strictly in the order the [`SchemaSource`] yields
//! them. For each one the entity header is rendered and written; only once
//! it is on disk are its x-list, include-list and binding contributions
//! recorded. After the last schema the aggregate files, the binding pair and
//! the build manifest are written.
//!
//! A failure (bad schema, refused overwrite, I/O error, two outputs sharing
//! one path) only ever skips the item it concerns. Every failure is
//! collected in the [`GenerationReport`].

use crate::aggregate::AggregationIndex;
use crate::bindings::BindingRegistry;
use crate::codegen::naming;
use crate::config::GeneratorConfig;
use crate::emitter::Emitter;
use crate::entity::EntityRenderer;
use crate::error::{CodegenError, CodegenResult};
use crate::manifest::BuildManifest;
use crate::schema::SchemaModel;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where schema documents come from
pub trait SchemaSource {
    /// Schema documents, relative to the source root, in processing order
    fn schema_paths(&self) -> CodegenResult<Vec<PathBuf>>;

    /// Raw bytes of one schema document
    fn read_schema(&self, relative: &Path) -> CodegenResult<Vec<u8>>;

    /// Path shown to the user for a schema document
    fn display_path(&self, relative: &Path) -> PathBuf {
        relative.to_path_buf()
    }
}

/// Schema documents found by walking a directory tree.
///
/// Entries are visited sorted by file name, so the processing order (and
/// therefore every order-sensitive output) is stable across runs.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into().trim_start_matches('.').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SchemaSource for DirectorySource {
    fn schema_paths(&self) -> CodegenResult<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(self.root.as_path()).to_path_buf();
                CodegenError::io(path, err.into())
            })?;

            let is_schema = entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == self.extension.as_str());
            if !is_schema {
                continue;
            }

            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                paths.push(relative.to_path_buf());
            }
        }

        tracing::debug!(
            root = %self.root.display(),
            count = paths.len(),
            "enumerated schema documents"
        );
        Ok(paths)
    }

    fn read_schema(&self, relative: &Path) -> CodegenResult<Vec<u8>> {
        let path = self.root.join(relative);
        std::fs::read(&path).map_err(|err| CodegenError::io(path, err))
    }

    fn display_path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}

/// Outcome of a generation run
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Every distinct generated file, in first-write order (manifest excluded)
    pub generated: Vec<PathBuf>,
    /// The build manifest, if it was written
    pub manifest: Option<PathBuf>,
    /// Number of schema documents that produced an entity file
    pub entities: usize,
    pub failures: Vec<CodegenError>,
}

impl GenerationReport {
    /// True when nothing failed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs the generation pipeline into an output directory
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    output_dir: PathBuf,
}

impl Generator {
    pub fn new(config: GeneratorConfig, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output_dir: output_dir.into(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate from every schema `source` yields.
    ///
    /// Only a failure to enumerate the source or an invalid configuration
    /// aborts; everything else is reported in the returned report.
    pub fn run<S: SchemaSource + ?Sized>(&self, source: &S) -> CodegenResult<GenerationReport> {
        self.config.validate()?;
        let paths = source.schema_paths()?;

        let mut pass = GenerationPass::new(&self.config, &self.output_dir);
        for relative in &paths {
            pass.process(source, relative);
        }

        Ok(pass.finish())
    }

    /// Generate from every schema document under `input_dir`
    pub fn run_dir(&self, input_dir: impl Into<PathBuf>) -> CodegenResult<GenerationReport> {
        let source = DirectorySource::new(input_dir, self.config.schema_ext());
        self.run(&source)
    }
}

/// State owned by one run: the two accumulators and the emitter
struct GenerationPass<'a> {
    config: &'a GeneratorConfig,
    output_dir: &'a Path,
    index: AggregationIndex,
    bindings: BindingRegistry,
    emitter: Emitter,
    seen: HashSet<String>,
    entities: usize,
    failures: Vec<CodegenError>,
}

impl<'a> GenerationPass<'a> {
    fn new(config: &'a GeneratorConfig, output_dir: &'a Path) -> Self {
        Self {
            config,
            output_dir,
            index: AggregationIndex::new(),
            bindings: BindingRegistry::new(
                config.binding_namespace.clone(),
                config.binding_class_suffix.clone(),
            ),
            emitter: Emitter::new(),
            seen: HashSet::new(),
            entities: 0,
            failures: Vec::new(),
        }
    }

    fn process<S: SchemaSource + ?Sized>(&mut self, source: &S, relative: &Path) {
        let schema_path = source.display_path(relative);

        let bytes = match source.read_schema(relative) {
            Ok(bytes) => bytes,
            Err(err) => return self.fail(err),
        };

        let schema = match SchemaModel::parse(&bytes) {
            Ok(schema) => schema,
            Err(err) => {
                return self.fail(CodegenError::Schema {
                    path: schema_path,
                    source: err,
                });
            }
        };

        let output_path = self
            .output_dir
            .join(relative)
            .with_extension(self.config.output_ext());
        let directive_dir = self.output_dir.join(relative.parent().unwrap_or(Path::new("")));

        tracing::debug!(
            schema = %schema_path.display(),
            output = %output_path.display(),
            "generating entity"
        );
        let rendered = EntityRenderer::new(self.config).render(&schema, output_path);

        if let Err(err) = self
            .emitter
            .emit(&rendered.output_path, &rendered.text, &self.config.marker)
        {
            return self.fail(err);
        }
        self.entities += 1;

        if !self.seen.insert(rendered.qualified_name.clone()) {
            tracing::warn!(
                entity = %rendered.qualified_name,
                schema = %schema_path.display(),
                "entity name already declared by another schema"
            );
        }

        let include_path = naming::to_include_path(&rendered.output_path);
        for directive in &rendered.xlist_directives {
            self.index.add_xlist_entry(
                &directive_dir.join(&directive.target_file),
                &directive.list_name,
                &rendered.name,
            );
        }
        for target in &rendered.include_directives {
            self.index
                .add_include(&directive_dir.join(target), &include_path);
        }

        if rendered.wants_bindings
            && let Err(err) = self.bindings.register(&schema, &rendered.output_path)
        {
            self.fail(err);
        }
    }

    fn finish(mut self) -> GenerationReport {
        let marker = self.config.marker.clone();

        let mut aggregates = self.index.render_files(&marker);
        aggregates.extend(self.bindings.render_files(
            &marker,
            self.output_dir.join(&self.config.binding_header),
            self.output_dir.join(&self.config.binding_source),
        ));

        for (path, text) in aggregates {
            self.write_once(&path, &text, &marker);
        }

        let generated = self.emitter.written().to_vec();
        let manifest_path = self.output_dir.join(&self.config.manifest_file);
        let manifest_marker = self.config.manifest_marker();
        let manifest_text = BuildManifest::new(
            self.config.manifest_variable.clone(),
            generated.clone(),
        )
        .render(&manifest_marker);
        let manifest = self
            .write_once(&manifest_path, &manifest_text, &manifest_marker)
            .then_some(manifest_path);

        GenerationReport {
            generated,
            manifest,
            entities: self.entities,
            failures: self.failures,
        }
    }

    /// Write a file produced after the per-schema stage.
    ///
    /// A path this run already wrote is reported as a conflict and kept.
    fn write_once(&mut self, path: &Path, text: &str, marker: &str) -> bool {
        if self.emitter.written().iter().any(|written| written == path) {
            self.fail(CodegenError::OutputConflict {
                path: path.to_path_buf(),
            });
            return false;
        }

        match self.emitter.emit(path, text, marker) {
            Ok(()) => true,
            Err(err) => {
                self.fail(err);
                false
            }
        }
    }

    fn fail(&mut self, err: CodegenError) {
        tracing::error!("{err}");
        self.failures.push(err);
    }
}
