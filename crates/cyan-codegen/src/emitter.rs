//! Overwrite-safe file emission.
//!
//! A target may be written only if it does not exist yet, or if its current
//! content begins with the generated-file marker. Anything else is treated as
//! hand-written source: the write is refused with
//! [`CodegenError::OverwriteRefused`] and the file is left untouched.

use crate::error::{CodegenError, CodegenResult};
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Whether `path` may be (over)written by the generator
pub fn is_overwritable(path: &Path, marker: &str) -> CodegenResult<bool> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(true),
        Err(err) => return Err(CodegenError::io(path, err)),
    };

    let mut head = Vec::with_capacity(marker.len());
    file.take(marker.len() as u64)
        .read_to_end(&mut head)
        .map_err(|err| CodegenError::io(path, err))?;

    Ok(head == marker.as_bytes())
}

/// Writes generated files and remembers each path it wrote once
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    written: Vec<PathBuf>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `contents` to `path` if the overwrite guard allows it.
    ///
    /// `marker` is the string a pre-existing file must start with.
    /// Missing parent directories are created.
    pub fn emit(&mut self, path: &Path, contents: &str, marker: &str) -> CodegenResult<()> {
        if !is_overwritable(path, marker)? {
            return Err(CodegenError::OverwriteRefused {
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| CodegenError::io(parent, err))?;
        }

        fs::write(path, contents).map_err(|err| CodegenError::io(path, err))?;

        tracing::info!(path = %path.display(), "generated file");
        if !self.written.iter().any(|written| written == path) {
            self.written.push(path.to_path_buf());
        }
        Ok(())
    }

    /// Every distinct path written so far, in first-write order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}
