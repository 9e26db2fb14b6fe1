//! User input and interaction handling.

use dialoguer::{Input, Select};

use crate::error::{Error, Result};

/// Source of the answers the scaffolder cannot take from the command line.
pub trait Prompter {
    /// Asks for the project name.
    fn ask_for_name(&self) -> Result<String>;

    /// Asks the user to pick one of `options` and returns the picked value.
    fn ask_for_choice(&self, prompt: &str, options: &[String]) -> Result<String>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_for_name(&self) -> Result<String> {
        let name: String = Input::new()
            .with_prompt("Project name")
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if input.trim().is_empty() {
                    Err("The project name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(|e| Error::Prompt(e.to_string()))?;

        Ok(name)
    }

    fn ask_for_choice(&self, prompt: &str, options: &[String]) -> Result<String> {
        let selection = Select::new()
            .with_prompt(prompt)
            .default(0)
            .items(options)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))?;

        options
            .get(selection)
            .cloned()
            .ok_or_else(|| Error::Prompt(format!("selection {selection} is out of range")))
    }
}
