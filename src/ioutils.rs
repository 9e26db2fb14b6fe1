//! A set of helpers for working with the file system.

use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Fails with [`Error::DestinationExists`] when anything already occupies `path`,
/// including a dangling symlink.
pub fn ensure_destination_free<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if fs::symlink_metadata(path).is_ok() {
        return Err(Error::DestinationExists { path: path.display().to_string() });
    }
    Ok(())
}

/// Copies `source` to `dest`, descending into directories.
///
/// Directories are created one level at a time, so the parent of `dest` must
/// already exist. Existing files are overwritten and nothing is ever removed.
/// The first failure aborts the copy and leaves whatever was written so far.
pub fn copy_recursive<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::IoError(std::io::Error::other(e)))?;
        let target = if relative.as_os_str().is_empty() {
            dest.to_path_buf()
        } else {
            dest.join(relative)
        };

        if entry.file_type().is_dir() {
            if !target.is_dir() {
                debug!("Creating directory: {}", target.display());
                fs::create_dir(&target)?;
            }
        } else {
            debug!("Copying file: {}", target.display());
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
