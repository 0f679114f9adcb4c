//! Course document parsing.
//!
//! Splits a whole markdown document into a title, ordered modules and the
//! three reserved auxiliary sections. Module bodies stay raw here; block
//! parsing happens later, per section.

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Course, Module};

/// Reserved second-level heading names, matched case-insensitively.
const LABS_SECTION: &str = "labs";
const BIBLIOGRAPHY_SECTION: &str = "bibliografia";
const HOME_NOTE_SECTION: &str = "nota home";

/// Parser for the course document structure.
pub struct CourseParser {
    title: Regex,
    section: Regex,
    module: Regex,
}

/// A `##` heading with the span of the text it governs.
struct Section<'a> {
    name: &'a str,
    heading_start: usize,
    body_start: usize,
    body_end: usize,
}

impl CourseParser {
    /// Create a parser with its patterns compiled once.
    pub fn new() -> Self {
        Self {
            title: Regex::new(r"(?m)^#\s+(.+)$").unwrap(),
            section: Regex::new(r"(?m)^##\s+(.+?)\s*$").unwrap(),
            module: Regex::new(r"(?m)^##\s+Modulo\s+(\d+)\s*:\s*(.+)$").unwrap(),
        }
    }

    /// Parse a full document.
    ///
    /// Fails with [`Error::MissingTitle`] when no top-level heading exists
    /// and [`Error::NoModules`] when no module headings are found; both
    /// abort the run before any output is written.
    pub fn parse(&self, markdown: &str) -> Result<Course> {
        let title = self
            .title
            .captures(markdown)
            .map(|caps| caps[1].trim().to_string())
            .ok_or(Error::MissingTitle)?;

        let sections = self.find_sections(markdown);

        let mut course = Course::new(title);
        for section in &sections {
            let body = markdown[section.body_start..section.body_end].trim_matches('\n');
            match section.name.to_lowercase().as_str() {
                LABS_SECTION => course.labs = body.to_string(),
                BIBLIOGRAPHY_SECTION => course.bibliography = body.to_string(),
                HOME_NOTE_SECTION => course.home_note = body.to_string(),
                _ => {}
            }
        }

        // Modules live before the earliest reserved section; reserved
        // bodies must not be scanned for module headings.
        let region_end = sections
            .iter()
            .filter(|s| is_reserved(s.name))
            .map(|s| s.heading_start)
            .min()
            .unwrap_or(markdown.len());
        course.modules = self.find_modules(&markdown[..region_end]);

        if course.modules.is_empty() {
            return Err(Error::NoModules);
        }

        log::debug!(
            "parsed course '{}': {} modules, labs={}, bibliography={}, home_note={}",
            course.title,
            course.module_count(),
            course.has_labs(),
            course.has_bibliography(),
            course.has_home_note()
        );
        Ok(course)
    }

    fn find_sections<'a>(&self, markdown: &'a str) -> Vec<Section<'a>> {
        let matches: Vec<_> = self.section.captures_iter(markdown).collect();
        let mut sections = Vec::with_capacity(matches.len());
        for (idx, caps) in matches.iter().enumerate() {
            let whole = caps.get(0).unwrap();
            let body_end = matches
                .get(idx + 1)
                .map(|next| next.get(0).unwrap().start())
                .unwrap_or(markdown.len());
            sections.push(Section {
                name: caps.get(1).unwrap().as_str().trim(),
                heading_start: whole.start(),
                body_start: whole.end(),
                body_end,
            });
        }
        sections
    }

    fn find_modules(&self, region: &str) -> Vec<Module> {
        let matches: Vec<_> = self.module.captures_iter(region).collect();
        let mut modules = Vec::with_capacity(matches.len());
        for (idx, caps) in matches.iter().enumerate() {
            let number: u32 = caps[1].parse().unwrap_or(0);
            let title = caps[2].trim().to_string();
            let body_start = caps.get(0).unwrap().end();
            let body_end = matches
                .get(idx + 1)
                .map(|next| next.get(0).unwrap().start())
                .unwrap_or(region.len());
            let body = region[body_start..body_end].trim_matches('\n');
            modules.push(Module::new(number, title, body));
        }
        modules
    }
}

impl Default for CourseParser {
    fn default() -> Self {
        Self::new()
    }
}

fn is_reserved(name: &str) -> bool {
    let key = name.to_lowercase();
    key == LABS_SECTION || key == BIBLIOGRAPHY_SECTION || key == HOME_NOTE_SECTION
}
