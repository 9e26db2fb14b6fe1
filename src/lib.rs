//! dx-scaffold bootstraps script applications for a remote content platform.
//! It copies a bundled template into a new project directory and rewrites the
//! placeholder tokens embedded in the copied files.

/// Command-line interface and the top-level run handler
pub mod cli;

/// Static rules: tokens, allow-listed extensions, manifest and skip names
pub mod constants;

/// Diagnostics sink with a persistent run log
pub mod diagnostics;

/// Error types and handling for the application
pub mod error;

/// Recursive tree copy and destination checks
pub mod ioutils;

/// Logger initialisation
pub mod logger;

/// Project name formatting and path resolution
pub mod naming;

/// Placeholder token mapping
pub mod placeholders;

/// Placeholder substitution over a project tree
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Bundled template lookup
pub mod registry;

/// Orchestration of a scaffolding run
pub mod scaffold;
