//! Static rules shared by the copier, the substitution engine and the registry.

/// Token replaced by the formatted project name.
pub const APP_NAME_TOKEN: &str = "__SCRIPT_APP_NAME__";

/// Token replaced by [`CONTENT_ROOT`].
pub const CONTENT_ROOT_TOKEN: &str = "__CONTENT_ROOT__";

/// Token replaced by the display name of the content item, same value as the project name.
pub const CONTENT_NAME_TOKEN: &str = "__WCM_CONTENT_NAME__";

/// Token replaced by a per-run unique identifier.
pub const APP_ID_TOKEN: &str = "__SCRIPT_APP_ID__";

/// Build output directory uploaded by the deploy script.
pub const CONTENT_ROOT: &str = "./dist";

/// The one file rewritten with manifest semantics.
pub const MANIFEST_FILE: &str = "package.json";

/// Key under `scripts` holding the deploy command line.
pub const DEPLOY_SCRIPT_KEY: &str = "dx-deploy";

/// Directory never entered by the substitution walk.
pub const SKIP_DIR: &str = "node_modules";

/// Extensions of files considered for substitution.
pub const TEXT_EXTENSIONS: &[&str] = &[
    ".js", ".ts", ".jsx", ".tsx", ".json", ".html", ".css", ".md", ".txt", ".env", ".local",
];

/// Directory holding the bundled templates, next to the executable.
pub const TEMPLATES_DIR: &str = "templates";

/// Environment variable overriding the templates directory.
pub const TEMPLATES_DIR_ENV: &str = "DX_SCAFFOLD_TEMPLATES_DIR";

