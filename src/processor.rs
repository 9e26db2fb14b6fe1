//! Placeholder substitution over a materialised project tree.
//!
//! Files are selected by extension only. The package manifest is parsed and
//! rewritten field by field; every other eligible file is rewritten as plain
//! text. Files without any token are never written, which makes a second pass
//! with the same mapping a no-op.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;
use walkdir::{DirEntry, WalkDir};

use crate::{
    constants::{DEPLOY_SCRIPT_KEY, MANIFEST_FILE, SKIP_DIR, TEXT_EXTENSIONS},
    diagnostics::Diagnostics,
    error::{Error, Result},
    placeholders::PlaceholderMap,
};

/// How an eligible file gets rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// The package manifest, rewritten as a JSON document.
    Manifest,
    /// Any other allow-listed file, rewritten as an opaque string.
    Text,
}

/// Returns `None` for files the substitution pass must leave alone.
pub fn classify<P: AsRef<Path>>(path: P) -> Option<FileKind> {
    let name = path.as_ref().file_name()?.to_str()?;
    if name == MANIFEST_FILE {
        return Some(FileKind::Manifest);
    }
    let extension = extension_of(name)?;
    TEXT_EXTENSIONS.contains(&extension).then_some(FileKind::Text)
}

// A leading dot counts, so ".env" has the extension ".env".
fn extension_of(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx..])
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == SKIP_DIR
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(Error::IoError)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(Error::IoError)
}

/// Rewrites string leaves of `value`, descending into objects but not arrays.
/// Returns whether anything changed.
pub fn rewrite_strings(value: &mut Value, placeholders: &PlaceholderMap) -> bool {
    match value {
        Value::String(text) => {
            let replaced = match placeholders.replace_all(text) {
                Cow::Owned(replaced) => replaced,
                Cow::Borrowed(_) => return false,
            };
            *text = replaced;
            true
        }
        Value::Object(fields) => {
            let mut changed = false;
            for field in fields.values_mut() {
                changed |= rewrite_strings(field, placeholders);
            }
            changed
        }
        Value::Array(_) | Value::Number(_) | Value::Bool(_) | Value::Null => false,
    }
}

/// Applies a [`PlaceholderMap`] to files in place.
pub struct PlaceholderProcessor<'a> {
    placeholders: &'a PlaceholderMap,
    diagnostics: &'a Diagnostics,
}

impl<'a> PlaceholderProcessor<'a> {
    pub fn new(placeholders: &'a PlaceholderMap, diagnostics: &'a Diagnostics) -> Self {
        Self { placeholders, diagnostics }
    }

    /// Walks `root` and rewrites every eligible file. Returns the files that
    /// were written, in walk order.
    pub fn process_tree<P: AsRef<Path>>(&self, root: P) -> Result<Vec<PathBuf>> {
        let root = root.as_ref();
        debug!("Updating placeholders under {}", root.display());

        let mut updated = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            let path = entry.path();
            if self.process_file(path)? {
                let shown = path.strip_prefix(root).unwrap_or(path);
                self.diagnostics.info(format!("Updated placeholders in: {}", shown.display()));
                updated.push(path.to_path_buf());
            }
        }
        Ok(updated)
    }

    /// Rewrites a single file. Returns `true` if it was written.
    pub fn process_file<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        let path = path.as_ref();
        match classify(path) {
            Some(FileKind::Manifest) => self.rewrite_manifest(path),
            Some(FileKind::Text) => self.rewrite_text(path),
            None => {
                debug!("Skipping non-text file {}", path.display());
                Ok(false)
            }
        }
    }

    fn rewrite_text(&self, path: &Path) -> Result<bool> {
        let content = read_file(path)?;
        match self.placeholders.replace_all(&content) {
            Cow::Owned(updated) => {
                write_file(path, &updated)?;
                Ok(true)
            }
            Cow::Borrowed(_) => Ok(false),
        }
    }

    fn rewrite_manifest(&self, path: &Path) -> Result<bool> {
        let content = read_file(path)?;
        let mut document: Value = serde_json::from_str(&content).map_err(|source| {
            Error::ManifestParse { path: path.display().to_string(), source }
        })?;

        let mut changed = false;
        if let Some(script) =
            document.get_mut("scripts").and_then(|scripts| scripts.get_mut(DEPLOY_SCRIPT_KEY))
        {
            changed |= rewrite_strings(script, self.placeholders);
        }
        changed |= rewrite_strings(&mut document, self.placeholders);

        if changed {
            let serialized =
                serde_json::to_string_pretty(&document).map_err(std::io::Error::from)?;
            write_file(path, &serialized)?;
        }
        Ok(changed)
    }
}

/// Builds the mapping for `project_name` plus `extra` and applies it below `root`.
pub fn update_placeholders<P, I>(
    root: P,
    project_name: &str,
    extra: I,
    diagnostics: &Diagnostics,
) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (String, String)>,
{
    let placeholders = PlaceholderMap::builtin(project_name).with_extra(extra);
    PlaceholderProcessor::new(&placeholders, diagnostics).process_tree(root)
}
