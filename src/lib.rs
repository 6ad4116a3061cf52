//! Whydoc is a documentation generator built around tagged comment blocks.
//! It extracts named `@WHY`/`@DOC` tags from anywhere in a project's source
//! tree and substitutes them into Markdown templates, keeping documentation
//! next to the code it describes.

/// Command-line interface module for the whydoc application
pub mod cli;

/// Error types and handling for the whydoc application
pub mod error;

/// Tag extraction from file contents
/// Scans comments for `@WHY <name>` / `@DOC <name>` markers
pub mod finder;

/// Output generation
/// Markdown and HTML generators selected by destination extension
pub mod generator;

/// Ignore-aware project scanning
/// Processes .whydocignore files to exclude specific paths
pub mod loader;

/// Core document generation orchestration
/// Combines all components to generate the final output
pub mod processor;

/// Template engine wrapper
/// Handles body compilation and rendering
pub mod renderer;

/// Tag model and aggregation into the run-wide lookup table
pub mod tag;

/// Template loading and execution
/// Handles the header split, identity derivation and render context
pub mod template;
