//! Project name normalisation and path resolution.

use std::path::{Component, Path, PathBuf};

use crate::error::Result;

/// Turns a human-entered project name into a directory name.
///
/// Leading and trailing whitespace is removed, the name is lowercased and every
/// run of inner whitespace becomes a single `-`. Nothing else is altered, so a
/// blank input yields an empty string.
pub fn format_project_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Resolves `relative` against the current working directory.
pub fn resolve_path<P: AsRef<Path>>(relative: P) -> Result<PathBuf> {
    let relative = relative.as_ref();
    let base = if relative.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir()?
    };

    Ok(base.join(relative).components().filter(|c| *c != Component::CurDir).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_mixed_case_and_spaces() {
        assert_eq!(format_project_name("  My Cool   App "), "my-cool-app");
        assert_eq!(format_project_name("tab\tand\nnewline"), "tab-and-newline");
    }

    #[test]
    fn keeps_other_characters() {
        assert_eq!(format_project_name("App_v2.0!"), "app_v2.0!");
    }

    #[test]
    fn blank_name_formats_to_empty() {
        assert_eq!(format_project_name(" \t "), "");
    }

    #[test]
    fn resolves_dot_relative_path() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_path("./my-app").unwrap(), cwd.join("my-app"));
    }

    #[test]
    fn keeps_absolute_path() {
        let abs = std::env::temp_dir().join("project");
        assert_eq!(resolve_path(&abs).unwrap(), abs);
    }
}
