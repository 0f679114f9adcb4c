//! Page assembly: wraps rendered fragments into full HTML documents.

use crate::model::Course;
use crate::render::{escape_html, HtmlRenderer};
use crate::site::{module_filename, STYLE};

const FONT_LINKS: &str = r#"  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;600;800&family=Outfit:wght@300;500;700&display=swap" rel="stylesheet">"#;

const TO_TOP_BUTTON: &str = r#"<button class="to-top-btn" type="button" onclick="window.scrollTo({top: 0, behavior: 'smooth'})">↑ Torna su</button>"#;

/// Assembles full pages from a parsed course.
pub struct PageAssembler {
    renderer: HtmlRenderer,
}

impl PageAssembler {
    /// Create an assembler with its own renderer.
    pub fn new() -> Self {
        Self {
            renderer: HtmlRenderer::new(),
        }
    }

    /// Build the home page: module index plus the auxiliary sections.
    pub fn home_page(&self, course: &Course) -> String {
        let agenda_items: String = course
            .modules
            .iter()
            .map(|module| {
                let teaser_html = module
                    .teaser()
                    .map(|teaser| {
                        format!(
                            r#"<p class="agenda-teaser">{}</p>"#,
                            self.renderer.inline().format(&teaser)
                        )
                    })
                    .unwrap_or_default();
                format!(
                    r#"<li class="agenda-item"><a class="agenda-link" href="{}"><span class="agenda-number">{:02}</span><span><span class="agenda-text">{}</span>{}</span></a></li>"#,
                    module_filename(module.number),
                    module.number,
                    escape_html(&module.title),
                    teaser_html
                )
            })
            .collect();

        let labs_section = if course.has_labs() {
            format!(
                r#"
      <section class="card labs-section">
        <h2 class="section-title">Labs</h2>
        <section class="module-content">
{}
        </section>
      </section>
"#,
                indent(&self.renderer.render_body(&course.labs), "          ")
            )
        } else {
            String::new()
        };

        let bibliography_section = if course.has_bibliography() {
            format!(
                r#"
      <section class="card">
        <h2 class="section-title">Bibliografia</h2>
        <section class="module-content">
{}
        </section>
      </section>
"#,
                indent(&self.renderer.render_body(&course.bibliography), "          ")
            )
        } else {
            String::new()
        };

        let home_note = if course.has_home_note() {
            format!(
                r#"
      <section class="site-footnote">
{}
      </section>
"#,
                indent(&self.renderer.render_body(&course.home_note), "        ")
            )
        } else {
            String::new()
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="it">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
{fonts}
  <style>{style}</style>
</head>
<body>
  <div class="container">
    <header>
      <p class="subtitle">Corso di Alta Formazione</p>
      <h1>{title}</h1>
    </header>

    <main>
      <section class="card">
        <h2 class="section-title">Indice Moduli</h2>
        <ul class="agenda-list">
          {agenda}
        </ul>
      </section>
{labs}
{bibliography}
{home_note}
    </main>
  </div>
  {to_top}
</body>
</html>
"#,
            title = escape_html(&course.title),
            fonts = FONT_LINKS,
            style = STYLE,
            agenda = agenda_items,
            labs = labs_section,
            bibliography = bibliography_section,
            home_note = home_note,
            to_top = TO_TOP_BUTTON,
        )
    }

    /// Build the page for the module at `idx`.
    ///
    /// Previous/next links follow source order, even when module numbers
    /// are non-sequential.
    pub fn module_page(&self, course: &Course, idx: usize) -> String {
        let module = &course.modules[idx];
        let body_html = self.renderer.render_body(&module.body);

        let mut nav_links = String::from(r#"<a class="nav-btn" href="index.html">Home</a>"#);
        if idx > 0 {
            nav_links.push_str(&format!(
                r#"<a class="nav-btn" href="{}">Modulo Precedente</a>"#,
                module_filename(course.modules[idx - 1].number)
            ));
        }
        if idx + 1 < course.modules.len() {
            nav_links.push_str(&format!(
                r#"<a class="nav-btn" href="{}">Modulo Successivo</a>"#,
                module_filename(course.modules[idx + 1].number)
            ));
        }

        let jump_links: String = course
            .modules
            .iter()
            .map(|m| {
                format!(
                    r#"<a class="nav-btn" href="{}">{:02} - {}</a>"#,
                    module_filename(m.number),
                    m.number,
                    escape_html(&m.title)
                )
            })
            .collect();

        let labs_section = if course.has_labs() {
            format!(
                r#"
        <section class="module-content labs-section">
          <h3 class="module-subtitle">Labs</h3>
{}
        </section>
"#,
                indent(&self.renderer.render_body(&course.labs), "          ")
            )
        } else {
            String::new()
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="it">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Modulo {number:02} - {module_title}</title>
{fonts}
  <style>{style}</style>
</head>
<body>
  <div class="container">
    <header>
      <p class="subtitle">{course_title}</p>
      <h1>Modulo {number:02}</h1>
    </header>

    <main>
      <article class="card">
        <nav class="module-nav">{nav}</nav>
        <nav class="jump-nav">{jump}</nav>

        <p class="module-kicker">Modulo {number:02}</p>
        <h2 class="module-title">{module_title}</h2>

        <section class="module-content">
{body}
        </section>

{labs}
        <nav class="module-nav footer-nav">{nav}</nav>
      </article>
    </main>
  </div>
  {to_top}
</body>
</html>
"#,
            number = module.number,
            module_title = escape_html(&module.title),
            course_title = escape_html(&course.title),
            fonts = FONT_LINKS,
            style = STYLE,
            nav = nav_links,
            jump = jump_links,
            body = indent(&body_html, "          "),
            labs = labs_section,
            to_top = TO_TOP_BUTTON,
        )
    }
}

impl Default for PageAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Prefix every line of a fragment, for readable nesting in page source.
fn indent(fragment: &str, prefix: &str) -> String {
    fragment
        .lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Module;

    fn sample_course() -> Course {
        let mut course = Course::new("Sicurezza & Reti");
        course
            .modules
            .push(Module::new(1, "Fondamenti", "Prima riga.\n\n- voce"));
        course
            .modules
            .push(Module::new(3, "Crittografia", "Cifrari a blocchi."));
        course
            .modules
            .push(Module::new(2, "Protocolli", "Handshake."));
        course.labs = "- laboratorio".to_string();
        course.bibliography = "Un testo.".to_string();
        course.home_note = "Nota finale.".to_string();
        course
    }

    #[test]
    fn test_home_page_lists_all_modules() {
        let html = PageAssembler::new().home_page(&sample_course());
        assert!(html.contains(r#"href="module-01.html""#));
        assert!(html.contains(r#"href="module-03.html""#));
        assert!(html.contains(r#"href="module-02.html""#));
        assert!(html.contains(r#"<span class="agenda-number">03</span>"#));
        assert!(html.contains("Indice Moduli"));
    }

    #[test]
    fn test_home_page_escapes_title() {
        let html = PageAssembler::new().home_page(&sample_course());
        assert!(html.contains("<h1>Sicurezza &amp; Reti</h1>"));
    }

    #[test]
    fn test_home_page_teaser_is_shown() {
        let html = PageAssembler::new().home_page(&sample_course());
        assert!(html.contains(r#"<p class="agenda-teaser">Prima riga.</p>"#));
    }

    #[test]
    fn test_home_page_auxiliary_sections() {
        let html = PageAssembler::new().home_page(&sample_course());
        assert!(html.contains(r#"<h2 class="section-title">Labs</h2>"#));
        assert!(html.contains(r#"<h2 class="section-title">Bibliografia</h2>"#));
        assert!(html.contains(r#"<section class="site-footnote">"#));
    }

    #[test]
    fn test_home_page_omits_empty_sections() {
        let mut course = sample_course();
        course.labs.clear();
        course.bibliography.clear();
        course.home_note.clear();
        let html = PageAssembler::new().home_page(&course);
        assert!(!html.contains("labs-section"));
        assert!(!html.contains("Bibliografia"));
        assert!(!html.contains("site-footnote"));
    }

    #[test]
    fn test_module_navigation_follows_source_order() {
        // Source order is 1, 3, 2: the page for module 3 must point back to
        // 01 and forward to 02.
        let html = PageAssembler::new().module_page(&sample_course(), 1);
        assert!(html.contains(r#"href="module-01.html">Modulo Precedente"#));
        assert!(html.contains(r#"href="module-02.html">Modulo Successivo"#));
    }

    #[test]
    fn test_first_module_has_no_previous_link() {
        let html = PageAssembler::new().module_page(&sample_course(), 0);
        assert!(!html.contains("Modulo Precedente"));
        assert!(html.contains("Modulo Successivo"));
    }

    #[test]
    fn test_last_module_has_no_next_link() {
        let html = PageAssembler::new().module_page(&sample_course(), 2);
        assert!(html.contains("Modulo Precedente"));
        assert!(!html.contains("Modulo Successivo"));
    }

    #[test]
    fn test_module_page_title_and_kicker() {
        let html = PageAssembler::new().module_page(&sample_course(), 1);
        assert!(html.contains("<title>Modulo 03 - Crittografia</title>"));
        assert!(html.contains(r#"<p class="module-kicker">Modulo 03</p>"#));
        assert!(html.contains(r#"<h2 class="module-title">Crittografia</h2>"#));
    }

    #[test]
    fn test_module_page_repeats_labs() {
        let html = PageAssembler::new().module_page(&sample_course(), 0);
        assert!(html.contains(r#"<section class="module-content labs-section">"#));
    }

    #[test]
    fn test_module_body_is_indented_in_page_source() {
        let html = PageAssembler::new().module_page(&sample_course(), 2);
        assert!(html.contains("\n          <p>Handshake.</p>\n"));
    }

    #[test]
    fn test_jump_nav_lists_every_module() {
        let html = PageAssembler::new().module_page(&sample_course(), 0);
        assert!(html.contains(">01 - Fondamenti</a>"));
        assert!(html.contains(">03 - Crittografia</a>"));
        assert!(html.contains(">02 - Protocolli</a>"));
    }

    #[test]
    fn test_indent_prefixes_each_line() {
        assert_eq!(indent("a\nb", "  "), "  a\n  b");
        assert_eq!(indent("", "  "), "");
    }
}
