//! Site generation: page assembly, filename convention, output writing.

mod pages;
mod style;

pub use pages::PageAssembler;
pub use style::STYLE;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Course;
use crate::parser::CourseParser;

/// Output filename for a module page.
///
/// The module number is zero-padded to two digits. Two modules sharing a
/// number map to the same filename; the later one wins.
pub fn module_filename(number: u32) -> String {
    format!("module-{:02}.html", number)
}

/// Home page filename.
pub const HOME_FILENAME: &str = "index.html";

/// Filenames written by a generation run, home page first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteManifest {
    /// Written filenames in write order
    pub files: Vec<String>,
}

impl SiteManifest {
    /// Number of files written.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Generates the static site for a course document.
///
/// The run is all-or-nothing: parsing failures abort before the output
/// directory is touched, and every page is rendered in memory before the
/// first file is written.
pub struct SiteBuilder {
    out_dir: PathBuf,
}

impl SiteBuilder {
    /// Create a builder writing into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Output directory this builder writes into.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse a markdown document and generate the site.
    pub fn build(&self, markdown: &str) -> Result<SiteManifest> {
        let course = CourseParser::new().parse(markdown)?;
        self.build_course(&course)
    }

    /// Generate the site for an already-parsed course.
    pub fn build_course(&self, course: &Course) -> Result<SiteManifest> {
        let assembler = PageAssembler::new();

        let mut pages = Vec::with_capacity(course.module_count() + 1);
        pages.push((HOME_FILENAME.to_string(), assembler.home_page(course)));
        for (idx, module) in course.modules.iter().enumerate() {
            pages.push((
                module_filename(module.number),
                assembler.module_page(course, idx),
            ));
        }

        fs::create_dir_all(&self.out_dir)?;
        let mut files = Vec::with_capacity(pages.len());
        for (name, html) in pages {
            fs::write(self.out_dir.join(&name), html)?;
            log::debug!("wrote {}", name);
            files.push(name);
        }

        log::info!(
            "generated {} pages in {}",
            files.len(),
            self.out_dir.display()
        );
        Ok(SiteManifest { files })
    }
}
