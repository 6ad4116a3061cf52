use clap::Parser;
use std::path::PathBuf;
use whydoc::cli::Args;

#[test]
fn test_defaults() {
    let args = Args::try_parse_from(["whydoc"]).unwrap();

    assert_eq!(args.output, None);
    assert_eq!(args.templates_folder, PathBuf::from("templates"));
    assert!(args.templates.is_empty());
    assert!(args.ext.is_empty());
    assert_eq!(args.project, PathBuf::from("."));
    assert!(!args.verbose);
}

#[test]
fn test_full_invocation() {
    let args = Args::try_parse_from([
        "whydoc",
        "README.md",
        "--templates-folder",
        "docTemplates",
        "--templates",
        "README,CHANGELOG",
        "--ext",
        ".go,.rs",
        "--project",
        "../proj",
        "--verbose",
    ])
    .unwrap();

    assert_eq!(args.output, Some(PathBuf::from("README.md")));
    assert_eq!(args.templates_folder, PathBuf::from("docTemplates"));
    assert_eq!(args.templates, vec!["README", "CHANGELOG"]);
    assert_eq!(args.ext, vec![".go", ".rs"]);
    assert_eq!(args.project, PathBuf::from("../proj"));
    assert!(args.verbose);
}

#[test]
fn test_short_flags() {
    let args = Args::try_parse_from(["whydoc", "-e", ".go", "-T", "README", "-p", "."]).unwrap();

    assert_eq!(args.ext, vec![".go"]);
    assert_eq!(args.templates, vec!["README"]);
}
