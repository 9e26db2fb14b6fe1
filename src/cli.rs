//! Command-line interface for dx-scaffold.
//! Argument parsing with clap and the single top-level handler that turns a
//! run result into console output and an exit code.

use clap::Parser;
use std::path::PathBuf;

use crate::{
    constants::TEMPLATES_DIR_ENV,
    diagnostics::Diagnostics,
    error::{exit_codes, Result},
    prompt::Prompter,
    registry::TemplateRegistry,
    scaffold::{next_steps, ScaffoldOptions, Scaffolder},
};

/// Command-line arguments structure for dx-scaffold.
#[derive(Parser, Debug)]
#[command(author, version, about = "dx-scaffold: bootstrap a script application from a template", long_about = None)]
pub struct Args {
    /// Name of the new project; asked for when omitted
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Template to use; a list is offered when omitted or unknown
    #[arg(short, long)]
    pub template: Option<String>,

    /// Directory containing the templates
    #[arg(long, value_name = "DIR", env = TEMPLATES_DIR_ENV)]
    pub templates_dir: Option<PathBuf>,

    /// File receiving the diagnostics of this run
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments, exiting with clap's usage error on failure.
pub fn get_args() -> Args {
    Args::parse()
}

fn registry_for(args: &Args) -> Result<TemplateRegistry> {
    match &args.templates_dir {
        Some(dir) => Ok(TemplateRegistry::new(dir)),
        None => TemplateRegistry::from_install_dir(),
    }
}

/// Runs a scaffolding session and returns the process exit code.
///
/// Failures are recorded once in `diagnostics`; the run log is flushed in
/// every case and only mentioned to the user when an error occurred.
pub fn run(args: Args, prompter: &dyn Prompter, diagnostics: &Diagnostics) -> i32 {
    let options = ScaffoldOptions { name: args.name.clone(), template: args.template.clone() };

    let outcome = registry_for(&args).and_then(|registry| {
        Scaffolder::new(&registry, prompter, diagnostics).run(options, chrono::Utc::now())
    });

    let code = match outcome {
        Ok(scaffold) => {
            println!("{}", next_steps(&scaffold));
            exit_codes::SUCCESS
        }
        Err(err) => {
            diagnostics.error(err.to_string());
            exit_codes::FAILURE
        }
    };

    if let Err(err) = diagnostics.flush() {
        eprintln!("Failed to write the run log: {err}");
    }
    if diagnostics.had_errors() {
        eprintln!("See {} for details.", diagnostics.log_file().display());
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_without_arguments() {
        let args = Args::try_parse_from(["dx-scaffold"]).unwrap();
        assert_eq!(args.name, None);
        assert_eq!(args.template, None);
        assert!(!args.verbose);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "dx-scaffold",
            "My App",
            "--template",
            "react-ts",
            "--templates-dir",
            "/opt/templates",
            "--log-file",
            "/tmp/run.log",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.name.as_deref(), Some("My App"));
        assert_eq!(args.template.as_deref(), Some("react-ts"));
        assert_eq!(args.templates_dir, Some(PathBuf::from("/opt/templates")));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/run.log")));
        assert!(args.verbose);
    }

    #[test]
    fn rejects_extra_positionals() {
        assert!(Args::try_parse_from(["dx-scaffold", "one", "two"]).is_err());
    }
}
