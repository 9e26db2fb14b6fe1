//! Lookup of the bundled project templates.
//! A template is any directory directly under the templates root; its name is
//! the directory name.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::TEMPLATES_DIR;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    root: PathBuf,
}

impl TemplateRegistry {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Registry rooted at `templates/` next to the running executable.
    pub fn from_install_dir() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let install_dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::new(install_dir.join(TEMPLATES_DIR)))
    }

    pub fn templates_dir(&self) -> &Path {
        &self.root
    }

    /// Names of the available templates, sorted. Plain files are ignored.
    pub fn available_templates(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Err(Error::TemplateNotFound { template: self.root.display().to_string() });
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                debug!("Ignoring non-directory entry {}", entry.path().display());
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    /// Joins `name` onto the templates root without checking it exists.
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
