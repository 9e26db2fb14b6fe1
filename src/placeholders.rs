//! The token -> replacement mapping applied to a freshly copied project.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::constants::{
    APP_ID_TOKEN, APP_NAME_TOKEN, CONTENT_NAME_TOKEN, CONTENT_ROOT, CONTENT_ROOT_TOKEN,
};

/// Ordered, immutable set of literal tokens and their replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: IndexMap<String, String>,
}

impl PlaceholderMap {
    /// The three built-in pairs derived from `project_name`.
    pub fn builtin(project_name: &str) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(APP_NAME_TOKEN.to_string(), project_name.to_string());
        entries.insert(CONTENT_ROOT_TOKEN.to_string(), CONTENT_ROOT.to_string());
        entries.insert(CONTENT_NAME_TOKEN.to_string(), project_name.to_string());
        Self { entries }
    }

    /// Appends caller-supplied pairs. A token that is already mapped keeps its
    /// first replacement.
    pub fn with_extra<I, K, V>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (token, replacement) in extra {
            self.entries.entry(token.into()).or_insert_with(|| replacement.into());
        }
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces every occurrence of every token, in mapping order.
    ///
    /// Borrows the input when no token occurs in it.
    pub fn replace_all<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let mut output = Cow::Borrowed(input);
        for (token, replacement) in &self.entries {
            if output.contains(token.as_str()) {
                output = Cow::Owned(output.replace(token.as_str(), replacement));
            }
        }
        output
    }
}

/// Value of the uniqueness token: `<project name>-<millis>`, lowercased.
pub fn unique_id(project_name: &str, timestamp_millis: i64) -> String {
    format!("{project_name}-{timestamp_millis}").to_lowercase()
}

/// The extra pairs every scaffolding run supplies on top of the built-ins.
pub fn run_placeholders(project_name: &str, timestamp_millis: i64) -> Vec<(String, String)> {
    vec![(APP_ID_TOKEN.to_string(), unique_id(project_name, timestamp_millis))]
}
