//! Template loading and execution.
//!
//! A template is a Markdown file ending in `.tpl.md` with an optional
//! YAML header and a templated body. The body can reference any
//! aggregated tag (`{{ Tag.example_tag }}`), the header metadata
//! (`{{ Meta.Title }}`) and the generation timestamp (`{{ Now }}`).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::renderer::CompiledTemplate;
use crate::tag::Tag;

/// File-name suffix that marks a file as a template source.
pub const TEMPLATE_SUFFIX: &str = ".tpl.md";

/// Line that delimits the YAML header at the start of a template file.
const HEADER_DELIMITER: &str = "---\n";

/// Textual format of the `Now` template value, RFC 822 with a numeric zone.
const NOW_FORMAT: &str = "%d %b %y %H:%M %z";

/// Optional YAML header at the top of a template file.
///
/// Unrecognized keys are ignored so templates stay forward compatible.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Header {
    /// Presentation metadata, also exposed to the template body.
    #[serde(default)]
    pub meta: MetaData,

    /// Additional configuration for auxiliary serving modes.
    #[serde(default)]
    pub server: ServerData,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct MetaData {
    /// Page title. Defaults to the template file name without its suffix.
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServerData {
    /// Whether this template should act as the index page of its folder.
    #[serde(default)]
    pub index: bool,
}

/// A loaded, pre-compiled template ready to execute.
#[derive(Debug)]
pub struct Template {
    /// Stable identifier derived from the template path only, so external
    /// references survive content edits.
    pub id: String,
    /// File name without the template suffix.
    pub name: String,
    /// Containing directory, relative to the templates root.
    pub path: PathBuf,
    /// Template source after header extraction.
    pub body: String,
    pub header: Header,

    compiled: CompiledTemplate,
    tag_map: IndexMap<String, String>,
}

impl Template {
    /// Reads and prepares the template at `relative_path`.
    ///
    /// Normalizes `\r\n` line endings, splits off the optional header,
    /// derives the template identity, compiles the body (failing fast on
    /// syntax errors) and captures this template's own view of the
    /// aggregated tag table.
    ///
    /// # Arguments
    /// * `templates_root` - Directory the template paths are relative to
    /// * `relative_path` - Template file path below `templates_root`
    /// * `tags` - The run-wide aggregated tag table
    pub fn load(
        templates_root: &Path,
        relative_path: &Path,
        tags: &IndexMap<String, Tag>,
    ) -> Result<Template> {
        let full_path = templates_root.join(relative_path);
        let raw = fs::read_to_string(&full_path)
            .map_err(|source| Error::PathError { path: full_path, source })?;

        // Windows compatibility:
        let content = raw.replace("\r\n", "\n");

        let (mut header, body) = split_header(&content, relative_path)?;

        let file_name = relative_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::TemplateError(format!(
                    "invalid template file name: '{}'",
                    relative_path.display()
                ))
            })?;
        let name = file_name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(file_name).to_string();

        if header.meta.title.is_empty() {
            header.meta.title = name.clone();
        }

        let id = format!("page-{}", blake3::hash(to_slash(relative_path).as_bytes()).to_hex());
        let compiled = CompiledTemplate::compile(&name, &body)?;

        Ok(Template {
            id,
            name,
            path: relative_path.parent().unwrap_or(Path::new("")).to_path_buf(),
            body,
            header,
            compiled,
            tag_map: tag_values(tags),
        })
    }

    /// Renders the template and writes the result to `writer`.
    ///
    /// The execution context is built fresh per render: the template's tag
    /// view, the header metadata, and a timestamp taken now.
    pub fn execute(&self, writer: &mut dyn Write) -> Result<()> {
        let context = serde_json::json!({
            "Tag": self.tag_map,
            "Meta": {
                "Title": self.header.meta.title,
            },
            "Now": Local::now().format(NOW_FORMAT).to_string(),
        });

        let rendered = self.compiled.render(&context)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

/// Splits `content` into header and body.
///
/// The header must start at byte offset 0 with the delimiter line and is
/// closed by the next one. Without a leading delimiter the whole content
/// is the body and the header takes its defaults. A header that is opened
/// but never closed is an error.
fn split_header(content: &str, relative_path: &Path) -> Result<(Header, String)> {
    let segments: Vec<&str> = content.splitn(3, HEADER_DELIMITER).collect();

    if !segments[0].is_empty() {
        return Ok((Header::default(), content.to_string()));
    }

    if segments.len() < 3 {
        return Err(Error::TemplateError(format!(
            "unterminated header in '{}'",
            relative_path.display()
        )));
    }

    let header = if segments[1].trim().is_empty() {
        Header::default()
    } else {
        serde_yaml::from_str(segments[1]).map_err(|source| Error::HeaderError {
            path: relative_path.to_path_buf(),
            source,
        })?
    };

    Ok((header, segments[2].to_string()))
}

/// The template's own tag-binding view, injected at render time. Kept
/// separate from the shared table so a generator can enrich values for
/// one template without mutating the run-wide aggregate.
fn tag_values(tags: &IndexMap<String, Tag>) -> IndexMap<String, String> {
    tags.iter().map(|(name, tag)| (name.clone(), tag.value.clone())).collect()
}

/// Forward-slash form of a path, for platform-stable identifiers.
fn to_slash(path: &Path) -> String {
    path.iter().map(|part| part.to_string_lossy()).collect::<Vec<_>>().join("/")
}
