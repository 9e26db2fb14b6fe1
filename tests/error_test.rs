use std::io;

use dx_scaffold::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::DestinationExists { path: "/work/my-app".to_string() };
    assert_eq!(err.to_string(), "Cannot proceed: destination '/work/my-app' already exists.");

    let err = Error::TemplateNotFound { template: "vue".to_string() };
    assert_eq!(err.to_string(), "Cannot proceed: template 'vue' does not exist.");

    let err = Error::Prompt("interrupted".to_string());
    assert_eq!(err.to_string(), "Prompt error: interrupted.");
}

#[test]
fn test_manifest_parse_names_file() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = Error::ManifestParse { path: "app/package.json".to_string(), source };
    assert!(err.to_string().contains("app/package.json"));
}
