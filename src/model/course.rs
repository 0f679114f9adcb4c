//! Course-level types.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum teaser length before truncation, in characters.
const TEASER_MAX_CHARS: usize = 190;

/// A parsed course document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Course title, from the first top-level heading
    pub title: String,

    /// Modules in source order
    pub modules: Vec<Module>,

    /// Raw body of the `## Labs` section ("" when absent)
    pub labs: String,

    /// Raw body of the `## Bibliografia` section ("" when absent)
    pub bibliography: String,

    /// Raw body of the `## Nota home` section ("" when absent)
    pub home_note: String,
}

impl Course {
    /// Create a course with a title and no content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            modules: Vec::new(),
            labs: String::new(),
            bibliography: String::new(),
            home_note: String::new(),
        }
    }

    /// Get the number of modules.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Look up a module by its number.
    pub fn get_module(&self, number: u32) -> Option<&Module> {
        self.modules.iter().find(|m| m.number == number)
    }

    /// Check whether the Labs section has content.
    pub fn has_labs(&self) -> bool {
        !self.labs.is_empty()
    }

    /// Check whether the Bibliografia section has content.
    pub fn has_bibliography(&self) -> bool {
        !self.bibliography.is_empty()
    }

    /// Check whether the Nota home section has content.
    pub fn has_home_note(&self) -> bool {
        !self.home_note.is_empty()
    }
}

/// One numbered curriculum unit.
///
/// `number` is used for output naming and display; navigation order is the
/// order of appearance in the source document, not numeric order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Module number from the heading (not necessarily contiguous)
    pub number: u32,

    /// Module title
    pub title: String,

    /// Raw markdown body
    pub body: String,
}

impl Module {
    /// Create a new module.
    pub fn new(number: u32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            body: body.into(),
        }
    }

    /// First plain-text line of the body, used as a short preview on the
    /// home page.
    ///
    /// Headings, list items and images are skipped. Lines longer than 190
    /// characters are cut to 187 characters plus `...`.
    pub fn teaser(&self) -> Option<String> {
        let ordered_item = Regex::new(r"^\d+\.\s+").unwrap();

        for raw in self.body.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with("###") {
                continue;
            }
            if line.starts_with("- ") || ordered_item.is_match(line) {
                continue;
            }
            if line.starts_with("![") {
                continue;
            }
            if line.chars().count() > TEASER_MAX_CHARS {
                let cut: String = line.chars().take(TEASER_MAX_CHARS - 3).collect();
                return Some(format!("{}...", cut));
            }
            return Some(line.to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_new() {
        let course = Course::new("Sicurezza Informatica");
        assert_eq!(course.title, "Sicurezza Informatica");
        assert_eq!(course.module_count(), 0);
        assert!(!course.has_labs());
        assert!(!course.has_bibliography());
        assert!(!course.has_home_note());
    }

    #[test]
    fn test_get_module() {
        let mut course = Course::new("Corso");
        course.modules.push(Module::new(3, "Reti", "Testo."));
        course.modules.push(Module::new(7, "Crittografia", "Testo."));

        assert_eq!(course.get_module(7).unwrap().title, "Crittografia");
        assert!(course.get_module(1).is_none());
    }

    #[test]
    fn test_teaser_skips_structure() {
        let module = Module::new(
            1,
            "Intro",
            "### Scheda rapida del modulo\n- punto uno\n1. passo\n![alt](img.png)\n\nPrima frase utile.",
        );
        assert_eq!(module.teaser().unwrap(), "Prima frase utile.");
    }

    #[test]
    fn test_teaser_truncates_long_lines() {
        let long = "a".repeat(200);
        let module = Module::new(1, "Intro", &long);
        let teaser = module.teaser().unwrap();
        assert_eq!(teaser.chars().count(), 190);
        assert!(teaser.ends_with("..."));
    }

    #[test]
    fn test_teaser_none_for_structural_body() {
        let module = Module::new(1, "Intro", "### Solo un titolo\n- solo elenco");
        assert!(module.teaser().is_none());
    }
}
