//! Cross-schema aggregation of x-lists and include lists.
//!
//! Directives from every schema are accumulated during the single generation
//! pass and flushed once at the end:
//!
//! - **x-lists** keep every entry, duplicates included, in first-seen order.
//!   Lists are keyed by `(target file, list name)`; lists sharing a target
//!   file are rendered into that one file.
//! - **include lists** are keyed by target file and keep each generated path
//!   once, in order of first occurrence.
//!
//! Each target file is rendered once, whichever kinds of list name it.

use crate::codegen::cpp;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XList {
    pub target: PathBuf,
    pub list_name: String,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeList {
    pub target: PathBuf,
    pub paths: Vec<String>,
    seen: HashSet<String>,
}

/// Append-only accumulator of x-list and include-list directives
#[derive(Debug, Clone, Default)]
pub struct AggregationIndex {
    xlists: Vec<XList>,
    xlist_keys: HashMap<(PathBuf, String), usize>,
    include_lists: Vec<IncludeList>,
    include_keys: HashMap<PathBuf, usize>,
}

impl AggregationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entity` to list `list_name` in `target`
    pub fn add_xlist_entry(&mut self, target: &Path, list_name: &str, entity: &str) {
        let key = (target.to_path_buf(), list_name.to_string());
        let index = match self.xlist_keys.get(&key) {
            Some(index) => *index,
            None => {
                self.xlists.push(XList {
                    target: target.to_path_buf(),
                    list_name: list_name.to_string(),
                    entries: Vec::new(),
                });
                self.xlist_keys.insert(key, self.xlists.len() - 1);
                self.xlists.len() - 1
            }
        };
        self.xlists[index].entries.push(entity.to_string());
    }

    /// Ensure `target` includes `generated_path`
    pub fn add_include(&mut self, target: &Path, generated_path: &str) {
        let index = match self.include_keys.get(target) {
            Some(index) => *index,
            None => {
                self.include_lists.push(IncludeList {
                    target: target.to_path_buf(),
                    paths: Vec::new(),
                    seen: HashSet::new(),
                });
                self.include_keys
                    .insert(target.to_path_buf(), self.include_lists.len() - 1);
                self.include_lists.len() - 1
            }
        };

        let list = &mut self.include_lists[index];
        if list.seen.insert(generated_path.to_string()) {
            list.paths.push(generated_path.to_string());
        }
    }

    pub fn xlists(&self) -> &[XList] {
        &self.xlists
    }

    pub fn include_lists(&self) -> &[IncludeList] {
        &self.include_lists
    }

    pub fn is_empty(&self) -> bool {
        self.xlists.is_empty() && self.include_lists.is_empty()
    }

    /// Render one file per distinct target, in first-seen order.
    ///
    /// X-list targets come first, then targets only named by include lists.
    /// A target named by both kinds gets its include lines followed by its
    /// macros, so neither replaces the other.
    pub fn render_files(&self, marker: &str) -> Vec<(PathBuf, String)> {
        let mut targets: Vec<&Path> = Vec::new();
        let xlist_targets = self.xlists.iter().map(|l| l.target.as_path());
        let include_targets = self.include_lists.iter().map(|l| l.target.as_path());
        for target in xlist_targets.chain(include_targets) {
            if !targets.contains(&target) {
                targets.push(target);
            }
        }

        targets
            .into_iter()
            .map(|target| {
                let includes = self
                    .include_keys
                    .get(target)
                    .map(|index| self.include_lists[*index].paths.as_slice())
                    .unwrap_or_default();
                let lists = self
                    .xlists
                    .iter()
                    .filter(|l| l.target == target)
                    .map(|l| (l.list_name.as_str(), l.entries.as_slice()));
                (
                    target.to_path_buf(),
                    cpp::render_aggregate_file(includes, lists, marker),
                )
            })
            .collect()
    }
}
