//! Output generation.
//!
//! Generators turn an executed template into the final output stream.
//! [`Markdown`] writes the rendered body followed by exactly one line
//! terminator; [`Html`] composes the Markdown generator and wraps its
//! output in a minimal page skeleton.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::template::Template;

/// Trait for the polymorphic output formats.
pub trait Generator {
    /// Executes `template` and writes the generated output to `writer`.
    fn generate(&self, template: &Template, writer: &mut dyn Write) -> Result<()>;
}

/// Plain Markdown output.
pub struct Markdown;

impl Generator for Markdown {
    fn generate(&self, template: &Template, writer: &mut dyn Write) -> Result<()> {
        template.execute(writer)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// HTML output, delegating the rendering itself to [`Markdown`].
pub struct Html {
    markdown: Markdown,
}

impl Html {
    pub fn new() -> Self {
        Self { markdown: Markdown }
    }
}

impl Default for Html {
    fn default() -> Self {
        Html::new()
    }
}

impl Generator for Html {
    fn generate(&self, template: &Template, writer: &mut dyn Write) -> Result<()> {
        let mut buffer = Vec::new();
        self.markdown.generate(template, &mut buffer)?;

        let rendered = String::from_utf8_lossy(&buffer);
        let body = markdown::to_html(&rendered);
        let title = escape_html(&template.header.meta.title);

        write!(
            writer,
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            title, body
        )?;
        Ok(())
    }
}

/// Selects the generator by the destination's file extension.
///
/// `.html` produces HTML-wrapped Markdown; `.md`, any other extension and
/// standard output (no destination) produce plain Markdown.
pub fn select_generator(output: Option<&Path>) -> Box<dyn Generator> {
    match output.and_then(|path| path.extension()).and_then(|ext| ext.to_str()) {
        Some("html") => Box::new(Html::new()),
        _ => Box::new(Markdown),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
