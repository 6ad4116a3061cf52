//! Command-line interface implementation for whydoc.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for whydoc.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "whydoc: a documentation generator",
    long_about = "whydoc generates documentation based on templates.\n\
        It allows you to include documentation from anywhere in the project\n\
        and therefore provides a way to use \"single source of truth\" also for documentation."
)]
pub struct Args {
    /// Output file (e.g. README.md); writes to stdout if omitted
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to the folder which contains the templates, relative to the
    /// project directory
    #[arg(short, long, default_value = "templates")]
    pub templates_folder: PathBuf,

    /// Template names to generate; generates all if omitted
    #[arg(short = 'T', long = "templates", value_delimiter = ',')]
    pub templates: Vec<String>,

    /// Allowed source file extensions; allows all if omitted
    #[arg(short, long, value_delimiter = ',')]
    pub ext: Vec<String>,

    /// The project folder to scan for tags
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
