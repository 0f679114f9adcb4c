//! Error types for the corsite library.

use std::io;
use thiserror::Error;

/// Result type alias for corsite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating a course site.
///
/// Malformed block syntax inside a module body is deliberately not
/// represented here: the block parser classifies every line as at least a
/// paragraph, so broken markdown degrades to plain text instead of failing
/// the run.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the course document or writing pages.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document has no top-level `# ...` heading.
    #[error("missing course title: expected a top-level heading like `# Titolo del corso`")]
    MissingTitle,

    /// The document defines no modules.
    #[error("no modules found: expected headings like `## Modulo 01: Titolo`")]
    NoModules,
}
