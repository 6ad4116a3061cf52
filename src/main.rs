//! Whydoc's main application entry point.
//! Handles command-line argument parsing, output sink and generator
//! selection, and coordinates the generation run.

use std::fs::OpenOptions;
use std::io::{self, Write};

use whydoc::{
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    finder::CommentTagFinder,
    generator::select_generator,
    processor::Processor,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Opens the output sink (stdout when no output file is given)
/// 2. Selects the output generator by the destination extension
/// 3. Scans the project for tags and renders the selected templates
fn run(args: Args) -> Result<()> {
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)
                .map_err(|source| Error::PathError { path: path.clone(), source })?;
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };

    let generator = select_generator(args.output.as_deref());
    let finder = CommentTagFinder;

    let processor = Processor::new(
        &finder,
        &args.project,
        &args.templates_folder,
        &args.templates,
        &args.ext,
    );

    processor.run(&*generator, &mut writer)
}
