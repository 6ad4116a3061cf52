//! Core document generation orchestration.
//! Combines the scanner, aggregator, template loader and output
//! generator into one run.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, error};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::finder::TagFinder;
use crate::generator::Generator;
use crate::loader::load_tags;
use crate::tag::aggregate;
use crate::template::{Template, TEMPLATE_SUFFIX};

/// Drives one full generation run over a project.
pub struct Processor<'a> {
    finder: &'a dyn TagFinder,
    project_dir: &'a Path,
    templates_dir: PathBuf,
    selected: &'a [String],
    extensions: &'a [String],
}

impl<'a> Processor<'a> {
    /// Creates a new Processor.
    ///
    /// # Arguments
    /// * `finder` - Tag extractor used during the project scan
    /// * `project_dir` - Project root to scan for tags
    /// * `templates_folder` - Templates directory, relative to the project
    /// * `selected` - Template names to generate; empty generates all
    /// * `extensions` - Source extension allow-list; empty allows all
    pub fn new(
        finder: &'a dyn TagFinder,
        project_dir: &'a Path,
        templates_folder: &Path,
        selected: &'a [String],
        extensions: &'a [String],
    ) -> Self {
        Self {
            finder,
            project_dir,
            templates_dir: project_dir.join(templates_folder),
            selected,
            extensions,
        }
    }

    /// Runs the pipeline: scan tags, aggregate, render every selected
    /// template into `writer`.
    ///
    /// A template that fails to load or render is logged and counted but
    /// does not stop its siblings; output already written stays written.
    /// A non-zero failure count surfaces as `Error::GenerationError`
    /// after the batch completes.
    pub fn run(&self, generator: &dyn Generator, writer: &mut dyn Write) -> Result<()> {
        let raw_tags = load_tags(self.project_dir, self.finder, self.extensions)?;
        debug!("extracted {} raw tags", raw_tags.len());
        let tags = aggregate(raw_tags);

        let template_paths = self.discover_templates()?;
        debug!("generating {} template(s)", template_paths.len());

        let mut failed = 0;
        for relative in &template_paths {
            let result = Template::load(&self.templates_dir, relative, &tags)
                .and_then(|template| generator.generate(&template, writer));

            if let Err(err) = result {
                error!("template '{}' failed: {}", relative.display(), err);
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(Error::GenerationError { failed });
        }
        Ok(())
    }

    /// Collects template files below the templates directory, sorted for
    /// deterministic output order, honoring the selected-names subset.
    fn discover_templates(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.templates_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            let Some(name) = file_name.strip_suffix(TEMPLATE_SUFFIX) else {
                continue;
            };
            if !self.selected.is_empty() && !self.selected.iter().any(|s| s == name) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.templates_dir)
                .map_err(|e| Error::TemplateError(e.to_string()))?
                .to_path_buf();
            paths.push(relative);
        }

        for wanted in self.selected {
            if !paths.iter().any(|path| template_name(path) == Some(wanted.as_str())) {
                return Err(Error::TemplateError(format!(
                    "template '{}' does not exist in '{}'",
                    wanted,
                    self.templates_dir.display()
                )));
            }
        }

        Ok(paths)
    }
}

fn template_name(path: &Path) -> Option<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(TEMPLATE_SUFFIX))
}
