#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;

use dx_scaffold::error::{Error, Result};
use dx_scaffold::prompt::Prompter;

/// Prompter answering from canned values and recording how it was called.
pub struct MockPrompter {
    name: Option<String>,
    choice: Option<String>,
    pub name_calls: Cell<usize>,
    pub choice_calls: RefCell<Vec<Vec<String>>>,
}

impl MockPrompter {
    pub fn new(name: Option<&str>, choice: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            choice: choice.map(str::to_string),
            name_calls: Cell::new(0),
            choice_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn silent() -> Self {
        Self::new(None, None)
    }
}

impl Prompter for MockPrompter {
    fn ask_for_name(&self) -> Result<String> {
        self.name_calls.set(self.name_calls.get() + 1);
        self.name.clone().ok_or_else(|| Error::Prompt("unexpected name prompt".to_string()))
    }

    fn ask_for_choice(&self, _prompt: &str, options: &[String]) -> Result<String> {
        self.choice_calls.borrow_mut().push(options.to_vec());
        self.choice.clone().ok_or_else(|| Error::Prompt("unexpected choice prompt".to_string()))
    }
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write<P: AsRef<Path>>(root: P, relative: &str, content: impl AsRef<[u8]>) {
    let path = root.as_ref().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small React-like template exercising every file policy.
pub fn write_sample_template<P: AsRef<Path>>(root: P) {
    let root = root.as_ref();
    write(
        root,
        "package.json",
        r#"{"name": "__SCRIPT_APP_NAME__", "scripts": {"dx-deploy": "tool --content-root __CONTENT_ROOT__ --name __WCM_CONTENT_NAME__"}}"#,
    );
    write(root, "index.html", r#"<div id="__SCRIPT_APP_NAME__"></div>"#);
    write(root, "src/App.jsx", "export const id = '__SCRIPT_APP_ID__';\n");
    write(root, ".env", "VITE_APP=__SCRIPT_APP_NAME__\n");
    write(root, "public/image.png", [0x89, b'P', b'N', b'G', 0x00, 0xff]);
    write(root, "config.yml", "name: __SCRIPT_APP_NAME__\n");
    fs::create_dir_all(root.join("empty")).unwrap();
}
