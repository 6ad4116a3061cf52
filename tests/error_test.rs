use std::io;
use std::path::PathBuf;

use whydoc::error::Error;

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
    let err = Error::TemplateError("rendering failed".to_string());
    assert_eq!(err.to_string(), "Template error: rendering failed.");

    let err = Error::GenerationError { failed: 2 };
    assert_eq!(err.to_string(), "Generation failed for 2 template(s).");

    let err = Error::MarkerError { path: PathBuf::from("src/lib.rs"), line: 14 };
    assert_eq!(
        err.to_string(),
        "Invalid tag marker in 'src/lib.rs' at line 14: missing tag name."
    );
}

#[test]
fn test_path_error_carries_path() {
    let err = Error::PathError {
        path: PathBuf::from("docs/README.tpl.md"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("docs/README.tpl.md"));
}
