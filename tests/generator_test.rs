use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tempfile::TempDir;
use whydoc::generator::{select_generator, Generator, Html, Markdown};
use whydoc::tag::{aggregate, Raw, Tag};
use whydoc::template::Template;

fn tags_with_foo() -> IndexMap<String, Tag> {
    aggregate(vec![Raw {
        name: "foo".to_string(),
        content: "bar".to_string(),
        source_file: "a.rs".into(),
    }])
}

fn load_template(dir: &TempDir, name: &str, content: &str) -> Template {
    fs::write(dir.path().join(name), content).unwrap();
    Template::load(dir.path(), Path::new(name), &tags_with_foo()).unwrap()
}

#[test]
fn test_markdown_appends_single_newline() {
    let temp_dir = TempDir::new().unwrap();
    let template = load_template(&temp_dir, "t.tpl.md", "{{ Tag.foo }}");

    let mut out = Vec::new();
    Markdown.generate(&template, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "bar\n");
}

#[test]
fn test_html_wraps_markdown_output() {
    let temp_dir = TempDir::new().unwrap();
    let template = load_template(
        &temp_dir,
        "page.tpl.md",
        "---\nmeta:\n  title: My Page\n---\n# Heading\n",
    );

    let mut out = Vec::new();
    Html::new().generate(&template, &mut out).unwrap();

    let html = String::from_utf8(out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>My Page</title>"));
    assert!(html.contains("<h1>Heading</h1>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_html_escapes_title() {
    let temp_dir = TempDir::new().unwrap();
    let template = load_template(
        &temp_dir,
        "page.tpl.md",
        "---\nmeta:\n  title: \"a < b & c\"\n---\nbody\n",
    );

    let mut out = Vec::new();
    Html::new().generate(&template, &mut out).unwrap();

    let html = String::from_utf8(out).unwrap();
    assert!(html.contains("<title>a &lt; b &amp; c</title>"));
}

#[test]
fn test_generator_selection_by_extension() {
    let temp_dir = TempDir::new().unwrap();
    let template = load_template(&temp_dir, "t.tpl.md", "{{ Tag.foo }}");

    // .html output gets the wrapped page.
    let generator = select_generator(Some(Path::new("out.html")));
    let mut out = Vec::new();
    generator.generate(&template, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("<!DOCTYPE html>"));

    // .md and stdout stay plain Markdown.
    for output in [Some(Path::new("out.md")), None] {
        let generator = select_generator(output);
        let mut out = Vec::new();
        generator.generate(&template, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "bar\n");
    }
}
