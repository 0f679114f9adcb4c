//! # corsite
//!
//! Static HTML site generator for single-file markdown course curricula.
//!
//! A course document holds a title, numbered `## Modulo N: ...` sections and
//! up to three reserved auxiliary sections (`## Labs`, `## Bibliografia`,
//! `## Nota home`). corsite parses it into a typed model and writes one home
//! page plus one page per module, with shared styling and navigation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use corsite::SiteBuilder;
//!
//! fn main() -> corsite::Result<()> {
//!     let markdown = std::fs::read_to_string("course.md")?;
//!     let manifest = SiteBuilder::new("dist").build(&markdown)?;
//!     for name in &manifest.files {
//!         println!("- {}", name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Markdown subset**: inline links/bold/italic/code, pipe tables,
//!   ordered and unordered lists, level 3/4 headings, captioned images
//! - **Callout cards**: reserved headings become quick-reference and
//!   checklist cards with nested content
//! - **Graceful degradation**: malformed block syntax renders as plain
//!   paragraphs, never a failure
//! - **Deterministic output**: re-running on unchanged input writes
//!   byte-identical files

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod site;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, CardKind, Course, Module, Table};
pub use parser::{BlockParser, CourseParser, TableDetector};
pub use render::{escape_html, unescape_html, HtmlRenderer, InlineFormatter};
pub use site::{module_filename, PageAssembler, SiteBuilder, SiteManifest, HOME_FILENAME, STYLE};

use std::path::Path;

/// Parse a course document from a string.
///
/// # Example
///
/// ```
/// let course = corsite::parse_str("# Corso\n\n## Modulo 1: Intro\n\nCiao.\n").unwrap();
/// assert_eq!(course.module_count(), 1);
/// ```
pub fn parse_str(markdown: &str) -> Result<Course> {
    CourseParser::new().parse(markdown)
}

/// Read and parse a course document from a file.
///
/// # Example
///
/// ```no_run
/// let course = corsite::parse_file("course.md").unwrap();
/// println!("modules: {}", course.module_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Course> {
    let markdown = std::fs::read_to_string(path)?;
    parse_str(&markdown)
}

/// Generate a site from a course file into an output directory.
///
/// # Example
///
/// ```no_run
/// let manifest = corsite::generate("course.md", "dist").unwrap();
/// assert!(manifest.file_count() >= 2);
/// ```
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(input: P, out_dir: Q) -> Result<SiteManifest> {
    let markdown = std::fs::read_to_string(input)?;
    SiteBuilder::new(out_dir.as_ref()).build(&markdown)
}
