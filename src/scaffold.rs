//! Orchestration of a scaffolding run: name, template, destination, copy and
//! placeholder substitution, in that order.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::debug;

use crate::{
    diagnostics::Diagnostics,
    error::{Error, Result},
    ioutils::{copy_recursive, ensure_destination_free},
    naming::{format_project_name, resolve_path},
    placeholders::run_placeholders,
    processor::update_placeholders,
    prompt::Prompter,
    registry::TemplateRegistry,
};

/// Values supplied on the command line. Missing ones are prompted for.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    pub name: Option<String>,
    pub template: Option<String>,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Scaffold {
    /// Formatted project name, also the destination directory name.
    pub name: String,
    pub template: String,
    pub destination: PathBuf,
    /// Files rewritten by the substitution pass.
    pub updated: Vec<PathBuf>,
}

pub struct Scaffolder<'a> {
    registry: &'a TemplateRegistry,
    prompter: &'a dyn Prompter,
    diagnostics: &'a Diagnostics,
    base_dir: Option<PathBuf>,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        registry: &'a TemplateRegistry,
        prompter: &'a dyn Prompter,
        diagnostics: &'a Diagnostics,
    ) -> Self {
        Self { registry, prompter, diagnostics, base_dir: None }
    }

    /// Creates projects under `base_dir` instead of the working directory.
    pub fn with_base_dir<P: Into<PathBuf>>(mut self, base_dir: P) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn run(&self, options: ScaffoldOptions, created_at: DateTime<Utc>) -> Result<Scaffold> {
        let raw_name = self.resolve_name(options.name)?;
        let template = self.resolve_template(options.template)?;

        let template_root = self.registry.template_path(&template);
        if !template_root.is_dir() {
            return Err(Error::TemplateNotFound { template });
        }

        let name = format_project_name(&raw_name);
        let destination = self.destination_for(&name)?;
        ensure_destination_free(&destination)?;

        debug!("Creating {} from {}", destination.display(), template_root.display());
        fs::create_dir_all(&destination)?;
        copy_recursive(&template_root, &destination)?;

        let extra = run_placeholders(&name, created_at.timestamp_millis());
        let updated = update_placeholders(&destination, &name, extra, self.diagnostics)?;

        self.diagnostics.info(format!(
            "Created '{}' from template '{}' in {}",
            name,
            template,
            destination.display()
        ));

        Ok(Scaffold { name, template, destination, updated })
    }

    fn resolve_name(&self, name: Option<String>) -> Result<String> {
        let name = match name {
            Some(name) => name,
            None => self.prompter.ask_for_name()?,
        };
        if name.trim().is_empty() {
            return Err(Error::InvalidName);
        }
        Ok(name)
    }

    fn resolve_template(&self, template: Option<String>) -> Result<String> {
        let available = self.registry.available_templates()?;

        if let Some(template) = template {
            if available.contains(&template) {
                return Ok(template);
            }
            debug!("Unknown template '{template}', asking instead");
        }

        if available.is_empty() {
            return Err(Error::TemplateNotFound {
                template: self.registry.templates_dir().display().to_string(),
            });
        }
        self.prompter.ask_for_choice("Select a template", &available)
    }

    fn destination_for(&self, name: &str) -> Result<PathBuf> {
        match &self.base_dir {
            Some(base_dir) => Ok(base_dir.join(name)),
            None => resolve_path(format!("./{name}")),
        }
    }
}

/// Guidance printed once the project exists.
pub fn next_steps(scaffold: &Scaffold) -> String {
    format!(
        "Project '{name}' created from template '{template}'.\n\
         \n\
         Next steps:\n\
         \x20 cd {name}\n\
         \x20 npm install\n\
         \x20 npm run dev        # start the development server\n\
         \x20 npm run build      # build into ./dist\n\
         \x20 npm run dx-deploy  # deploy the build to the content platform\n",
        name = scaffold.name,
        template = scaffold.template,
    )
}
